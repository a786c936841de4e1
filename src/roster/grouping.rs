//! Read-only projection of the roster: members grouped into family buckets
//! plus the synthetic Unknown bucket, and the headline counts. Nothing here
//! mutates; the store recomputes the projection whenever it is asked.

use std::collections::HashMap;

use crate::models::{BucketId, Family, Member, UNKNOWN_BUCKET_NAME};

use super::attendance::AttendanceMap;
use super::store::Roster;

/// One group of the attendance view.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub id: BucketId,
    pub name: &'a str,
    /// Ordered by `"last first"` ignoring case and accents, ties in storage
    /// order.
    pub members: Vec<&'a Member>,
}

impl Bucket<'_> {
    pub fn is_unknown(&self) -> bool {
        self.id == BucketId::Unknown
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn present_count(&self, attendance: &AttendanceMap) -> usize {
        self.members
            .iter()
            .filter(|m| attendance.get(&m.id).copied().unwrap_or(false))
            .count()
    }
}

/// Headline numbers for the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total_members: usize,
    pub total_present: usize,
}

/// Group `members` into one bucket per family, in family order, followed by
/// the Unknown bucket. Members without a family, or whose family no longer
/// exists, land in Unknown.
pub fn group_members<'a>(families: &'a [Family], members: &'a [Member]) -> Vec<Bucket<'a>> {
    let mut buckets: Vec<Bucket<'a>> = families
        .iter()
        .map(|f| Bucket {
            id: BucketId::Family(f.id),
            name: f.name.as_str(),
            members: Vec::new(),
        })
        .chain(std::iter::once(Bucket {
            id: BucketId::Unknown,
            name: UNKNOWN_BUCKET_NAME,
            members: Vec::new(),
        }))
        .collect();

    let unknown_index = buckets.len() - 1;
    let index_by_family: HashMap<_, _> = families
        .iter()
        .enumerate()
        .map(|(idx, f)| (f.id, idx))
        .collect();

    for member in members {
        let index = member
            .family_id
            .and_then(|fid| index_by_family.get(&fid).copied())
            .unwrap_or(unknown_index);
        buckets[index].members.push(member);
    }

    for bucket in &mut buckets {
        // `sort_by_cached_key` is stable, so equal keys keep storage order.
        bucket.members.sort_by_cached_key(|m| m.sort_key());
    }

    buckets
}

impl Roster {
    pub fn grouped(&self) -> Vec<Bucket<'_>> {
        group_members(&self.families, &self.members)
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary {
            total_members: self.members.len(),
            total_present: self
                .members
                .iter()
                .filter(|m| self.is_present(m.id))
                .count(),
        }
    }
}
