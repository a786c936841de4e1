use crate::models::{BucketId, MemberId};
use crate::roster::Roster;

/// Selection within a vertical list whose length can change under it.
#[derive(Default, Clone)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// A line of the attendance list: either a bucket header or a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttendanceRow {
    Header(BucketId),
    Member { bucket: BucketId, id: MemberId },
}

impl AttendanceRow {
    pub(crate) fn bucket(self) -> BucketId {
        match self {
            AttendanceRow::Header(bucket) => bucket,
            AttendanceRow::Member { bucket, .. } => bucket,
        }
    }
}

/// Flatten the grouped view into selectable rows, headers first.
pub(crate) fn attendance_rows(roster: &Roster) -> Vec<AttendanceRow> {
    let mut rows = Vec::new();
    for bucket in roster.grouped() {
        rows.push(AttendanceRow::Header(bucket.id));
        rows.extend(bucket.members.iter().map(|m| AttendanceRow::Member {
            bucket: bucket.id,
            id: m.id,
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use crate::models::NewMember;

    use super::*;

    #[test]
    fn rows_interleave_headers_and_members() {
        let mut roster = Roster::new();
        let smith = roster.add_family("Smith").unwrap();
        let john = roster
            .add_member(NewMember::new("John", "Smith").in_family(smith))
            .unwrap();

        let rows = attendance_rows(&roster);
        assert_eq!(
            rows,
            [
                AttendanceRow::Header(BucketId::Family(smith)),
                AttendanceRow::Member {
                    bucket: BucketId::Family(smith),
                    id: john
                },
                AttendanceRow::Header(BucketId::Unknown),
            ]
        );
    }

    #[test]
    fn cursor_clamps_to_the_list() {
        let mut cursor = ListCursor::default();
        cursor.move_selection(-3, 4);
        assert_eq!(cursor.selected, 0);
        cursor.move_selection(10, 4);
        assert_eq!(cursor.selected, 3);
        cursor.ensure_in_bounds(2);
        assert_eq!(cursor.selected, 1);
        cursor.ensure_in_bounds(0);
        assert_eq!(cursor.selected, 0);
    }
}
