//! Domain models for the attendance roster. These types stay light-weight data
//! holders; the `roster` module owns every rule about how they change and the
//! `ui` module decides how they look.

use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Display name of the synthetic bucket that collects unassigned members.
pub const UNKNOWN_BUCKET_NAME: &str = "Unknown";

/// Session-unique identifier of a family. Issued by the roster store only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(pub(crate) u64);

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fam_{}", self.0)
    }
}

/// Session-unique identifier of a member. Issued by the roster store only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub(crate) u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mem_{}", self.0)
    }
}

/// Identifies one bucket of the grouped view. The Unknown bucket has its own
/// variant, so no family id can ever be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketId {
    Family(FamilyId),
    Unknown,
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketId::Family(id) => write!(f, "{id}"),
            BucketId::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<FamilyId> for BucketId {
    fn from(id: FamilyId) -> Self {
        BucketId::Family(id)
    }
}

impl From<Option<FamilyId>> for BucketId {
    fn from(id: Option<FamilyId>) -> Self {
        id.map_or(BucketId::Unknown, BucketId::Family)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A household that members can be grouped under.
pub struct Family {
    pub id: FamilyId,
    /// Trimmed, never blank. Not required to be unique.
    pub name: String,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A person on the roster.
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    /// `None` means unassigned. A `Some` may dangle if it was set through the
    /// lenient reassignment path; the grouped view treats that as Unknown.
    pub family_id: Option<FamilyId>,
}

impl Member {
    /// `Last, First`, the label used next to attendance checkboxes.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Key for `"last first"`, used to order members inside a bucket.
    pub fn sort_key(&self) -> NameKey {
        NameKey::new(&format!("{} {}", self.last_name, self.first_name))
    }
}

/// Case- and accent-insensitive ordering key for names, so `Álvarez` sits
/// next to `Alvarez` instead of after `Zamora`. Names that fold to the same
/// text fall back to their lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey {
    folded: String,
    lowercase: String,
}

impl NameKey {
    pub fn new(name: &str) -> Self {
        let lowercase = name.to_lowercase();
        let folded = lowercase
            .nfd()
            .filter(|ch| !is_combining_mark(*ch))
            .collect();
        Self { folded, lowercase }
    }
}

/// Input for `Roster::add_member`. Names are trimmed by the store.
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub family_id: Option<FamilyId>,
}

impl NewMember {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            family_id: None,
        }
    }

    pub fn in_family(mut self, family_id: FamilyId) -> Self {
        self.family_id = Some(family_id);
        self
    }
}

/// Value coming from a tri-state checkbox. Only `Checked` counts as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl CheckState {
    pub fn is_affirmative(self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl From<bool> for CheckState {
    fn from(value: bool) -> Self {
        if value {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_is_last_then_first_ignoring_case() {
        let member = Member {
            id: MemberId(1),
            first_name: "Emily".into(),
            last_name: "Smith".into(),
            family_id: None,
        };
        assert_eq!(member.sort_key(), NameKey::new("SMITH emily"));
        assert_eq!(member.display_name(), "Smith, Emily");
    }

    #[test]
    fn accents_fold_onto_their_base_letter() {
        assert!(NameKey::new("Álvarez") < NameKey::new("Bravo"));
        assert!(NameKey::new("Ñúñez") < NameKey::new("Ortiz"));
        assert!(NameKey::new("Alvarez") < NameKey::new("Álvarez"));
        assert_ne!(NameKey::new("Alvarez"), NameKey::new("Álvarez"));
    }

    #[test]
    fn only_checked_is_affirmative() {
        assert!(CheckState::Checked.is_affirmative());
        assert!(!CheckState::Unchecked.is_affirmative());
        assert!(!CheckState::Indeterminate.is_affirmative());
        assert_eq!(CheckState::from(true), CheckState::Checked);
    }

    #[test]
    fn bucket_ids_render_like_their_source() {
        assert_eq!(BucketId::from(FamilyId(4)).to_string(), "fam_4");
        assert_eq!(BucketId::from(None).to_string(), "unknown");
        assert_eq!(MemberId(9).to_string(), "mem_9");
    }
}
