use std::mem;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use log::{info, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::error::RosterError;
use crate::models::{BucketId, Family, FamilyId, Member, MemberId};
use crate::roster::Roster;
use crate::service::{format_service_date, ServiceKind};

use super::forms::{
    ConfirmFamilyDelete, ConfirmMemberDelete, FamilyForm, MemberField, MemberForm,
    UNASSIGNED_LABEL,
};
use super::helpers::{
    bucket_header_line, centered_rect, cursor_column, member_count_label, member_line,
    surface_error,
};
use super::screens::{attendance_rows, AttendanceRow, ListCursor};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Lines above the attendance list: date, service, totals and a spacer.
const HEADER_HEIGHT: u16 = 4;
/// Rows skipped by PageUp / PageDown.
const PAGE_STEP: isize = 5;

/// High-level navigation states.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Screen {
    Attendance,
    Families,
    Members,
}

/// Fine-grained modes scoped to the current screen. Every variant except
/// `Normal` is a modal dialog drawn over the screen.
enum Mode {
    Normal,
    AddingFamily(FamilyForm),
    RenamingFamily { id: FamilyId, form: FamilyForm },
    ConfirmFamilyDelete(ConfirmFamilyDelete),
    AddingMember(MemberForm),
    EditingMember { id: MemberId, form: MemberForm },
    ConfirmMemberDelete(ConfirmMemberDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state: the roster itself plus what the operator is looking at.
/// The roster is the only source of truth; lists on screen are recomputed
/// from it on every draw.
pub struct App {
    roster: Roster,
    today: NaiveDate,
    screen: Screen,
    mode: Mode,
    attendance_cursor: ListCursor,
    family_cursor: ListCursor,
    member_cursor: ListCursor,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(roster: Roster, today: NaiveDate) -> Self {
        Self {
            roster,
            today,
            screen: Screen::Attendance,
            mode: Mode::Normal,
            attendance_cursor: ListCursor::default(),
            family_cursor: ListCursor::default(),
            member_cursor: ListCursor::default(),
            status: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Feed one key press through the state machine. Returns `true` once the
    /// operator asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingFamily(form) => self.handle_add_family(code, form)?,
            Mode::RenamingFamily { id, form } => self.handle_rename_family(code, id, form)?,
            Mode::ConfirmFamilyDelete(confirm) => {
                self.handle_confirm_family_delete(code, confirm)?
            }
            Mode::AddingMember(form) => self.handle_add_member(code, form)?,
            Mode::EditingMember { id, form } => self.handle_edit_member(code, id, form)?,
            Mode::ConfirmMemberDelete(confirm) => {
                self.handle_confirm_member_delete(code, confirm)?
            }
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Attendance => self.handle_attendance_key(code, exit),
            Screen::Families => self.handle_families_key(code, exit),
            Screen::Members => self.handle_members_key(code, exit),
        }
    }

    fn handle_attendance_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let rows = attendance_rows(&self.roster);
        let len = rows.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.attendance_cursor.move_selection(-1, len),
            KeyCode::Down => self.attendance_cursor.move_selection(1, len),
            KeyCode::PageUp => self.attendance_cursor.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.attendance_cursor.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.attendance_cursor.select_first(),
            KeyCode::End => self.attendance_cursor.select_last(len),
            KeyCode::Char(' ') | KeyCode::Enter => {
                match rows.get(self.attendance_cursor.selected).copied() {
                    Some(AttendanceRow::Member { id, .. }) => {
                        let present = !self.roster.is_present(id);
                        self.roster.toggle_attendance(id, present);
                        self.clear_status();
                    }
                    Some(AttendanceRow::Header(bucket)) => self.toggle_bucket(bucket),
                    None => {}
                }
            }
            KeyCode::Char('a') => {
                if let Some(row) = rows.get(self.attendance_cursor.selected) {
                    self.mark_bucket(row.bucket(), true);
                }
            }
            KeyCode::Char('c') => {
                if let Some(row) = rows.get(self.attendance_cursor.selected) {
                    self.mark_bucket(row.bucket(), false);
                }
            }
            KeyCode::Char('C') => {
                self.roster.clear_all_attendance();
                self.set_status("Attendance cleared.", StatusKind::Info);
            }
            KeyCode::Char('f') | KeyCode::Char('F') => self.open_screen(Screen::Families),
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_screen(Screen::Members),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_families_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let len = self.roster.families().len();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => self.open_screen(Screen::Attendance),
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_screen(Screen::Members),
            KeyCode::Up => self.family_cursor.move_selection(-1, len),
            KeyCode::Down => self.family_cursor.move_selection(1, len),
            KeyCode::Home => self.family_cursor.select_first(),
            KeyCode::End => self.family_cursor.select_last(len),
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingFamily(FamilyForm::default()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(family) = self.current_family() {
                    let mode = Mode::RenamingFamily {
                        id: family.id,
                        form: FamilyForm::from_family(family),
                    };
                    self.clear_status();
                    return Ok(mode);
                }
                self.set_status("No family selected to rename.", StatusKind::Error);
            }
            KeyCode::Char('-') => {
                if let Some(family) = self.current_family() {
                    let member_count = self
                        .roster
                        .member_counts()
                        .get(&family.id)
                        .copied()
                        .unwrap_or(0);
                    let confirm = ConfirmFamilyDelete {
                        id: family.id,
                        name: family.name.clone(),
                        member_count,
                    };
                    self.clear_status();
                    return Ok(Mode::ConfirmFamilyDelete(confirm));
                }
                self.set_status("No family selected to delete.", StatusKind::Error);
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_members_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let len = self.roster.members().len();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => self.open_screen(Screen::Attendance),
            KeyCode::Char('f') | KeyCode::Char('F') => self.open_screen(Screen::Families),
            KeyCode::Up => self.member_cursor.move_selection(-1, len),
            KeyCode::Down => self.member_cursor.move_selection(1, len),
            KeyCode::PageUp => self.member_cursor.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.member_cursor.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.member_cursor.select_first(),
            KeyCode::End => self.member_cursor.select_last(len),
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingMember(MemberForm::new(&self.roster)));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(member) = self.current_member() {
                    let mode = Mode::EditingMember {
                        id: member.id,
                        form: MemberForm::from_member(member, &self.roster),
                    };
                    self.clear_status();
                    return Ok(mode);
                }
                self.set_status("No member selected to edit.", StatusKind::Error);
            }
            KeyCode::Char('-') => {
                if let Some(member) = self.current_member() {
                    let confirm = ConfirmMemberDelete::from(member);
                    self.clear_status();
                    return Ok(Mode::ConfirmMemberDelete(confirm));
                }
                self.set_status("No member selected to delete.", StatusKind::Error);
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_add_family(&mut self, code: KeyCode, mut form: FamilyForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add family cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_family(&form) {
                Ok(_) => keep_open = false,
                Err(err) => self.report_form_error(&err, &mut form.error),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingFamily(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_rename_family(
        &mut self,
        code: KeyCode,
        id: FamilyId,
        mut form: FamilyForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Rename cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_family_name(id, &form) {
                Ok(_) => keep_open = false,
                Err(err) => self.report_form_error(&err, &mut form.error),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::RenamingFamily { id, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_family_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmFamilyDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                if self.roster.delete_family(confirm.id) {
                    self.set_status(
                        format!(
                            "Deleted family {}; {} moved to Unknown.",
                            confirm.name,
                            member_count_label(confirm.member_count)
                        ),
                        StatusKind::Info,
                    );
                } else {
                    self.set_status("Family no longer exists.", StatusKind::Error);
                }
                self.clamp_cursors();
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmFamilyDelete(confirm)),
        }
    }

    fn handle_add_member(&mut self, code: KeyCode, mut form: MemberForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add member cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Left if form.active == MemberField::Family => form.cycle_family(-1),
            KeyCode::Right if form.active == MemberField::Family => form.cycle_family(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_member(&form) {
                Ok(_) => keep_open = false,
                Err(err) => self.report_form_error(&err, &mut form.error),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingMember(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_member(
        &mut self,
        code: KeyCode,
        id: MemberId,
        mut form: MemberForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Left if form.active == MemberField::Family => form.cycle_family(-1),
            KeyCode::Right if form.active == MemberField::Family => form.cycle_family(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_member_edit(id, &form) {
                Ok(_) => keep_open = false,
                Err(err) => self.report_form_error(&err, &mut form.error),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingMember { id, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_member_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmMemberDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                if self.roster.delete_member(confirm.id) {
                    self.set_status(format!("Deleted {}.", confirm.label), StatusKind::Info);
                } else {
                    self.set_status("Member no longer exists.", StatusKind::Error);
                }
                self.clamp_cursors();
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmMemberDelete(confirm)),
        }
    }

    /// Space on a bucket header marks everyone present, or clears the bucket
    /// when everyone already is.
    fn toggle_bucket(&mut self, bucket: BucketId) {
        let all_present = self
            .roster
            .grouped()
            .iter()
            .find(|b| b.id == bucket)
            .is_some_and(|b| !b.is_empty() && b.present_count(self.roster.attendance()) == b.len());
        self.mark_bucket(bucket, !all_present);
    }

    fn mark_bucket(&mut self, bucket: BucketId, present: bool) {
        let name = self.bucket_name(bucket);
        let touched = self.roster.mark_all_in_family(bucket, present);
        if touched == 0 {
            self.set_status(format!("No members in {name}."), StatusKind::Error);
        } else if present {
            self.set_status(
                format!("Marked {} present in {name}.", member_count_label(touched)),
                StatusKind::Info,
            );
        } else {
            self.set_status(format!("Cleared {name}."), StatusKind::Info);
        }
    }

    fn bucket_name(&self, bucket: BucketId) -> String {
        self.roster
            .grouped()
            .iter()
            .find(|b| b.id == bucket)
            .map(|b| b.name.to_string())
            .unwrap_or_default()
    }

    fn save_new_family(&mut self, form: &FamilyForm) -> Result<()> {
        let name = form.parse_inputs()?;
        let id = self
            .roster
            .add_family(&name)
            .ok_or_else(|| anyhow!("Family name is required."))?;
        if let Some(index) = self.roster.families_by_name().iter().position(|f| f.id == id) {
            self.family_cursor.selected = index;
        }
        self.set_status(format!("Added family {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_family_name(&mut self, id: FamilyId, form: &FamilyForm) -> Result<()> {
        let name = form.parse_inputs()?;
        if !self.roster.rename_family(id, &name) {
            return Err(RosterError::FamilyNotFound(id).into());
        }
        self.set_status(format!("Renamed family to {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_new_member(&mut self, form: &MemberForm) -> Result<()> {
        let new = form.parse_new_member()?;
        if let Some(fid) = new.family_id {
            self.roster
                .family(fid)
                .ok_or(RosterError::FamilyNotFound(fid))?;
        }
        let label = format!("{} {}", new.first_name.trim(), new.last_name.trim());
        let id = self
            .roster
            .add_member(new)
            .ok_or_else(|| anyhow!("First and last name are required."))?;
        if let Some(index) = self.roster.members_by_name().iter().position(|m| m.id == id) {
            self.member_cursor.selected = index;
        }
        self.set_status(format!("Added {label}."), StatusKind::Info);
        Ok(())
    }

    /// Blank name fields keep the stored value; the family is validated.
    fn save_member_edit(&mut self, id: MemberId, form: &MemberForm) -> Result<()> {
        self.roster
            .assign_member_family(id, form.selected_family())
            .context("failed to reassign member")?;
        self.roster
            .update_member_name(id, &form.first_name, &form.last_name);
        let label = self
            .roster
            .member(id)
            .map(|m| format!("{} {}", m.first_name, m.last_name))
            .unwrap_or_default();
        self.set_status(format!("Updated {label}."), StatusKind::Info);
        Ok(())
    }

    fn report_form_error(&mut self, err: &anyhow::Error, slot: &mut Option<String>) {
        let message = surface_error(err);
        warn!("form rejected: {message}");
        *slot = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    fn open_screen(&mut self, screen: Screen) {
        self.clear_status();
        self.screen = screen;
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let rows = attendance_rows(&self.roster).len();
        self.attendance_cursor.ensure_in_bounds(rows);
        self.family_cursor
            .ensure_in_bounds(self.roster.families().len());
        self.member_cursor
            .ensure_in_bounds(self.roster.members().len());
    }

    fn current_family(&self) -> Option<&Family> {
        self.roster
            .families_by_name()
            .get(self.family_cursor.selected)
            .copied()
    }

    fn current_member(&self) -> Option<&Member> {
        self.roster
            .members_by_name()
            .get(self.member_cursor.selected)
            .copied()
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match self.screen {
            Screen::Attendance => self.draw_attendance(frame, content_area),
            Screen::Families => self.draw_families(frame, content_area),
            Screen::Members => self.draw_members(frame, content_area),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingFamily(form) => self.draw_family_form(frame, area, "Add Family", form),
            Mode::RenamingFamily { form, .. } => {
                self.draw_family_form(frame, area, "Rename Family", form)
            }
            Mode::ConfirmFamilyDelete(confirm) => self.draw_confirm_family(frame, area, confirm),
            Mode::AddingMember(form) => self.draw_member_form(frame, area, "Add Member", form),
            Mode::EditingMember { form, .. } => {
                self.draw_member_form(frame, area, "Edit Member", form)
            }
            Mode::ConfirmMemberDelete(confirm) => self.draw_confirm_member(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_attendance(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);

        let summary = self.roster.summary();
        let header = vec![
            Line::from(Span::styled(
                format_service_date(self.today),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                ServiceKind::for_date(self.today).label(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} present", summary.total_present),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" / {} total", summary.total_members)),
            ]),
        ];
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let attendance = self.roster.attendance();
        let selected = self.attendance_cursor.selected;
        let mut items = Vec::new();
        for bucket in self.roster.grouped() {
            let mut title = bucket_header_line(
                bucket.name,
                bucket.present_count(attendance),
                bucket.len(),
            );
            if bucket.is_empty() {
                title.spans.push(Span::styled(
                    "  No members in this family.",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            items.push(ListItem::new(title));
            for member in &bucket.members {
                let row = items.len();
                items.push(ListItem::new(member_line(
                    member,
                    self.roster.is_present(member.id),
                    row == selected,
                )));
            }
        }

        let list = List::new(items)
            .block(Block::default().title("Attendance").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    fn draw_families(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Families").borders(Borders::ALL);
        let families = self.roster.families_by_name();
        if families.is_empty() {
            let message = Paragraph::new("No families yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let counts = self.roster.member_counts();
        let items: Vec<ListItem> = families
            .iter()
            .map(|family| {
                let count = counts.get(&family.id).copied().unwrap_or(0);
                ListItem::new(Line::from(vec![
                    Span::raw(family.name.clone()),
                    Span::styled(
                        format!("  {}", member_count_label(count)),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.family_cursor.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_members(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Members").borders(Borders::ALL);
        let members = self.roster.members_by_name();
        if members.is_empty() {
            let message = Paragraph::new("No members yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = members
            .iter()
            .map(|member| {
                let family = self
                    .roster
                    .family_name(member.family_id)
                    .unwrap_or(UNASSIGNED_LABEL);
                ListItem::new(Line::from(vec![
                    Span::raw(member.display_name()),
                    Span::styled(format!("  {family}"), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.member_cursor.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&'static str, &'static str)] = match self.screen {
            Screen::Attendance => &[
                ("[↑↓]", " Select   "),
                ("[Space]", " Toggle   "),
                ("[a]", " Family Present   "),
                ("[c]", " Clear Family   "),
                ("[C]", " Clear All   "),
                ("[f]", " Families   "),
                ("[m]", " Members   "),
                ("[q]", " Quit"),
            ],
            Screen::Families => &[
                ("[↑↓]", " Select   "),
                ("[+]", " Add   "),
                ("[e]", " Rename   "),
                ("[-]", " Delete   "),
                ("[m]", " Members   "),
                ("[Esc]", " Attendance   "),
                ("[q]", " Quit"),
            ],
            Screen::Members => &[
                ("[↑↓]", " Select   "),
                ("[+]", " Add   "),
                ("[e]", " Edit   "),
                ("[-]", " Delete   "),
                ("[f]", " Families   "),
                ("[Esc]", " Attendance   "),
                ("[q]", " Quit"),
            ],
        };

        let spans: Vec<Span<'static>> = keys
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect();
        Line::from(spans)
    }

    fn draw_family_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &FamilyForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];
        push_form_hint(&mut lines, &form.error, "Enter to save • Esc to cancel");

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let x = cursor_column(inner, "Name: ".len(), form.value_len());
        frame.set_cursor_position((x, inner.y));
    }

    fn draw_member_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &MemberForm) {
        let popup_area = centered_rect(70, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line(MemberField::FirstName),
            form.build_line(MemberField::LastName),
            form.build_line(MemberField::Family),
            Line::from(""),
        ];
        push_form_hint(
            &mut lines,
            &form.error,
            "Enter to save • Tab to switch • ←→ to pick family • Esc to cancel",
        );

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor = match form.active {
            MemberField::FirstName => Some(("First name: ".len(), 0)),
            MemberField::LastName => Some(("Last name: ".len(), 1)),
            MemberField::Family => None,
        };
        if let Some((prefix, row)) = cursor {
            let x = cursor_column(inner, prefix, form.value_len(form.active));
            frame.set_cursor_position((x, inner.y.saturating_add(row)));
        }
    }

    fn draw_confirm_family(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmFamilyDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Family").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Delete family {} ({})?",
                confirm.name,
                member_count_label(confirm.member_count)
            )),
            Line::from("Deleting a family moves its members to \u{201c}Unknown\u{201d}."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_confirm_member(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmMemberDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Member").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete {}?", confirm.label)),
            Line::from("Their attendance mark for today is removed too."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Either the validation error in red or the key hint in gray.
fn push_form_hint(lines: &mut Vec<Line<'static>>, error: &Option<String>, hint: &'static str) {
    match error {
        Some(error) => lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Gray),
        ))),
    }
}

/// Log a one-line summary when the session ends. Counts only, no names.
pub(crate) fn log_session_summary(app: &App) {
    let summary = app.roster.summary();
    info!(
        "session closed: {} present of {} member(s) in {} famil(ies)",
        summary.total_present,
        summary.total_members,
        app.roster.families().len()
    );
}
