//! Binary entry point: read settings, start file logging, seed the roster and
//! drive the Ratatui event loop until the operator exits.
use anyhow::Context;
use chrono::Local;
use church_attendance::{init_logging, run_app, App, Roster, Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("invalid settings")?;
    let _logger = init_logging(&settings)?;

    let mut app = App::new(Roster::with_sample_data(), Local::now().date_naive());
    run_app(&mut app)
}
