use std::collections::HashMap;

use log::debug;

use crate::error::RosterError;
use crate::models::{Family, FamilyId, Member, MemberId, NameKey, NewMember};

use super::attendance::AttendanceMap;

/// Owner of families, members and attendance for one session. Every write
/// goes through the methods below, which keep three rules true after each
/// call: deleted families leave no members pointing at them, deleted members
/// leave no attendance behind, and ids are never reused.
#[derive(Debug, Default)]
pub struct Roster {
    pub(super) families: Vec<Family>,
    pub(super) members: Vec<Member>,
    pub(super) attendance: AttendanceMap,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn family(&self, id: FamilyId) -> Option<&Family> {
        self.families.iter().find(|f| f.id == id)
    }

    /// Name of a family, or `None` when the id is unassigned or dangling.
    pub fn family_name(&self, id: Option<FamilyId>) -> Option<&str> {
        id.and_then(|id| self.family(id)).map(|f| f.name.as_str())
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    fn next_raw_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Create a family from a trimmed name. Blank names are ignored.
    pub fn add_family(&mut self, name: &str) -> Option<FamilyId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = FamilyId(self.next_raw_id());
        self.families.push(Family {
            id,
            name: name.to_string(),
        });
        debug!("added family {id}");
        Some(id)
    }

    /// Rename a family. A blank name or an unknown id leaves everything as is.
    pub fn rename_family(&mut self, id: FamilyId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.families.iter_mut().find(|f| f.id == id) {
            Some(family) => {
                family.name = name.to_string();
                debug!("renamed family {id}");
                true
            }
            None => false,
        }
    }

    /// Remove a family, moving its members to Unknown first. Their attendance
    /// marks are kept.
    pub fn delete_family(&mut self, id: FamilyId) -> bool {
        let Some(index) = self.families.iter().position(|f| f.id == id) else {
            return false;
        };

        let mut moved = 0usize;
        for member in self.members.iter_mut().filter(|m| m.family_id == Some(id)) {
            member.family_id = None;
            moved += 1;
        }
        self.families.remove(index);
        debug!("deleted family {id}, {moved} member(s) moved to unknown");
        true
    }

    /// Create a member. Both names are trimmed and both are required.
    pub fn add_member(&mut self, new: NewMember) -> Option<MemberId> {
        let first_name = new.first_name.trim();
        let last_name = new.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return None;
        }
        let id = MemberId(self.next_raw_id());
        self.members.push(Member {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            family_id: new.family_id,
        });
        debug!("added member {id}");
        Some(id)
    }

    /// Point a member at a family, or unassign with `None`. The family id is
    /// not checked; a dangling id shows up under Unknown.
    pub fn update_member_family(&mut self, member_id: MemberId, family_id: Option<FamilyId>) -> bool {
        match self.member_mut(member_id) {
            Some(member) => {
                member.family_id = family_id;
                debug!("member {member_id} reassigned");
                true
            }
            None => false,
        }
    }

    /// Like `update_member_family`, but refuses unknown members and families
    /// instead of accepting a dangling reference.
    pub fn assign_member_family(
        &mut self,
        member_id: MemberId,
        family_id: Option<FamilyId>,
    ) -> Result<(), RosterError> {
        if self.member(member_id).is_none() {
            return Err(RosterError::MemberNotFound(member_id));
        }
        if let Some(fid) = family_id {
            if self.family(fid).is_none() {
                return Err(RosterError::FamilyNotFound(fid));
            }
        }
        self.update_member_family(member_id, family_id);
        Ok(())
    }

    /// Rename a member. Each blank field keeps its previous value.
    pub fn update_member_name(&mut self, member_id: MemberId, first_name: &str, last_name: &str) -> bool {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let Some(member) = self.member_mut(member_id) else {
            return false;
        };
        if !first_name.is_empty() {
            member.first_name = first_name.to_string();
        }
        if !last_name.is_empty() {
            member.last_name = last_name.to_string();
        }
        debug!("renamed member {member_id}");
        true
    }

    /// Remove a member together with its attendance entry.
    pub fn delete_member(&mut self, member_id: MemberId) -> bool {
        let Some(index) = self.members.iter().position(|m| m.id == member_id) else {
            return false;
        };
        self.members.remove(index);
        self.attendance.remove(&member_id);
        debug!("deleted member {member_id}");
        true
    }

    /// Number of members per family. Members with a dangling family id are
    /// not counted anywhere.
    pub fn member_counts(&self) -> HashMap<FamilyId, usize> {
        let mut counts: HashMap<FamilyId, usize> =
            self.families.iter().map(|f| (f.id, 0)).collect();
        for fid in self.members.iter().filter_map(|m| m.family_id) {
            if let Some(count) = counts.get_mut(&fid) {
                *count += 1;
            }
        }
        counts
    }

    /// Families ordered by name ignoring case and accents, ties in storage
    /// order.
    pub fn families_by_name(&self) -> Vec<&Family> {
        let mut families: Vec<&Family> = self.families.iter().collect();
        families.sort_by_cached_key(|f| NameKey::new(&f.name));
        families
    }

    /// All members ordered the same way as inside a bucket.
    pub fn members_by_name(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.iter().collect();
        members.sort_by_cached_key(|m| m.sort_key());
        members
    }
}
