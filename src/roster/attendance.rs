use std::collections::HashMap;

use log::debug;

use crate::models::{BucketId, CheckState, MemberId};

use super::store::Roster;

/// Member id to presence. A missing key means absent.
pub type AttendanceMap = HashMap<MemberId, bool>;

impl Roster {
    /// Raw mapping, for per-member checked state in a presentation layer.
    pub fn attendance(&self) -> &AttendanceMap {
        &self.attendance
    }

    pub fn is_present(&self, member_id: MemberId) -> bool {
        self.attendance.get(&member_id).copied().unwrap_or(false)
    }

    /// Record a checkbox change. Anything but `Checked` stores `false`.
    /// Ids that do not belong to a member are ignored so no entry can outlive
    /// its member.
    pub fn toggle_attendance(&mut self, member_id: MemberId, value: impl Into<CheckState>) -> bool {
        if self.member(member_id).is_none() {
            return false;
        }
        let present = value.into().is_affirmative();
        self.attendance.insert(member_id, present);
        true
    }

    /// Set every member currently grouped under `bucket` to `value`. Returns
    /// how many members were touched; an unknown bucket touches none.
    pub fn mark_all_in_family(&mut self, bucket: BucketId, value: bool) -> usize {
        let targets: Vec<MemberId> = match self.grouped().into_iter().find(|b| b.id == bucket) {
            Some(found) => found.members.iter().map(|m| m.id).collect(),
            None => return 0,
        };
        for id in &targets {
            self.attendance.insert(*id, value);
        }
        debug!("marked {} member(s) in {bucket} as {value}", targets.len());
        targets.len()
    }

    pub fn clear_all_attendance(&mut self) {
        self.attendance.clear();
        debug!("cleared all attendance");
    }
}

#[cfg(test)]
mod tests {
    use crate::models::NewMember;

    use super::*;

    #[test]
    fn indeterminate_counts_as_absent() {
        let mut roster = Roster::new();
        let id = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();

        roster.toggle_attendance(id, true);
        assert!(roster.is_present(id));

        roster.toggle_attendance(id, CheckState::Indeterminate);
        assert!(!roster.is_present(id));
        assert_eq!(roster.attendance().get(&id), Some(&false));
    }

    #[test]
    fn toggle_for_unknown_member_creates_no_entry() {
        let mut roster = Roster::new();
        let id = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();
        roster.delete_member(id);

        assert!(!roster.toggle_attendance(id, true));
        assert!(roster.attendance().is_empty());
    }

    #[test]
    fn mark_all_uses_the_unknown_fallback_for_dangling_members() {
        let mut roster = Roster::new();
        let gone = roster.add_family("Gone").unwrap();
        let ava = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();
        roster.delete_family(gone);
        roster.update_member_family(ava, Some(gone));

        assert_eq!(roster.mark_all_in_family(BucketId::Family(gone), true), 0);
        assert!(!roster.is_present(ava));

        assert_eq!(roster.mark_all_in_family(BucketId::Unknown, true), 1);
        assert!(roster.is_present(ava));
    }

    #[test]
    fn clear_all_empties_the_mapping() {
        let mut roster = Roster::new();
        let id = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();
        roster.toggle_attendance(id, true);
        roster.clear_all_attendance();
        assert!(roster.attendance().is_empty());
        assert!(!roster.is_present(id));
    }
}
