use crate::models::NewMember;

use super::store::Roster;

/// Families and members loaded when the application starts, so there is
/// something to mark before anyone opens the management screens.
const SAMPLE_FAMILIES: &[&str] = &["Smith", "Johnson", "Garcia"];

/// `(first, last, index into SAMPLE_FAMILIES)`.
const SAMPLE_MEMBERS: &[(&str, &str, Option<usize>)] = &[
    ("John", "Smith", Some(0)),
    ("Jane", "Smith", Some(0)),
    ("Emily", "Smith", Some(0)),
    ("Michael", "Johnson", Some(1)),
    ("Sarah", "Johnson", Some(1)),
    ("Carlos", "Garcia", Some(2)),
    ("Ava", "Lopez", None),
    ("Noah", "Lee", None),
];

impl Roster {
    /// A roster pre-filled with the demo congregation.
    pub fn with_sample_data() -> Self {
        let mut roster = Roster::new();
        let family_ids: Vec<_> = SAMPLE_FAMILIES
            .iter()
            .filter_map(|name| roster.add_family(name))
            .collect();

        for (first, last, family) in SAMPLE_MEMBERS {
            let mut new = NewMember::new(*first, *last);
            new.family_id = family.and_then(|idx| family_ids.get(idx).copied());
            roster.add_member(new);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_matches_the_demo_congregation() {
        let roster = Roster::with_sample_data();
        assert_eq!(roster.families().len(), 3);
        assert_eq!(roster.members().len(), 8);

        let buckets = roster.grouped();
        let sizes: Vec<usize> = buckets.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, [3, 2, 1, 2]);
        assert!(roster.attendance().is_empty());
    }
}
