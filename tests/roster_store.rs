use church_attendance::{BucketId, CheckState, NewMember, Roster};

fn roster_with_smith_and_lopez() -> (Roster, church_attendance::FamilyId) {
    let mut roster = Roster::new();
    let smith = roster.add_family("Smith").unwrap();
    roster.add_member(NewMember::new("John", "Smith").in_family(smith));
    roster.add_member(NewMember::new("Ava", "Lopez"));
    (roster, smith)
}

#[test]
fn whitespace_family_name_is_ignored() {
    let mut roster = Roster::new();
    assert_eq!(roster.add_family("   "), None);
    assert_eq!(roster.add_family(""), None);
    assert!(roster.families().is_empty());
}

#[test]
fn family_name_is_trimmed_on_add() {
    let mut roster = Roster::new();
    let id = roster.add_family("  Williams ").unwrap();
    assert_eq!(roster.family(id).unwrap().name, "Williams");
    assert_eq!(roster.member_counts().get(&id), Some(&0));
}

#[test]
fn blank_member_names_are_ignored() {
    let mut roster = Roster::new();
    assert_eq!(roster.add_member(NewMember::new("", "Smith")), None);
    assert_eq!(roster.add_member(NewMember::new("John", "  ")), None);
    assert!(roster.members().is_empty());

    let id = roster.add_member(NewMember::new(" John ", " Smith ")).unwrap();
    let member = roster.member(id).unwrap();
    assert_eq!(member.first_name, "John");
    assert_eq!(member.last_name, "Smith");
    assert_eq!(member.family_id, None);
}

#[test]
fn operations_on_missing_ids_are_no_ops() {
    let (mut roster, smith) = roster_with_smith_and_lopez();
    let ghost = roster.add_member(NewMember::new("Ghost", "Member")).unwrap();
    roster.toggle_attendance(ghost, true);
    roster.delete_member(ghost);
    roster.delete_family(smith);
    let ava = roster.members_by_name()[0].id;
    roster.toggle_attendance(ava, true);

    let families = roster.families().to_vec();
    let members = roster.members().to_vec();
    let attendance = roster.attendance().clone();
    let assert_unchanged = |roster: &Roster| {
        assert_eq!(roster.families(), families.as_slice());
        assert_eq!(roster.members(), members.as_slice());
        assert_eq!(roster.attendance(), &attendance);
    };

    assert!(!roster.rename_family(smith, "Smyth"));
    assert_unchanged(&roster);
    assert!(!roster.delete_family(smith));
    assert_unchanged(&roster);

    assert!(!roster.update_member_name(ghost, "Casper", "Friendly"));
    assert_unchanged(&roster);
    assert!(!roster.update_member_family(ghost, None));
    assert_unchanged(&roster);
    assert!(!roster.delete_member(ghost));
    assert_unchanged(&roster);
    roster.toggle_attendance(ghost, true);
    assert_unchanged(&roster);

    assert_eq!(roster.mark_all_in_family(BucketId::Family(smith), true), 0);
    assert_unchanged(&roster);

    assert_eq!(roster.families().len(), 0);
    assert_eq!(roster.members().len(), 2);
}

#[test]
fn deleting_a_family_unassigns_its_members() {
    let mut roster = Roster::new();
    let smith = roster.add_family("Smith").unwrap();
    let johnson = roster.add_family("Johnson").unwrap();
    let john = roster
        .add_member(NewMember::new("John", "Smith").in_family(smith))
        .unwrap();
    let jane = roster
        .add_member(NewMember::new("Jane", "Smith").in_family(smith))
        .unwrap();
    let sarah = roster
        .add_member(NewMember::new("Sarah", "Johnson").in_family(johnson))
        .unwrap();

    assert!(roster.delete_family(smith));

    assert_eq!(roster.member(john).unwrap().family_id, None);
    assert_eq!(roster.member(jane).unwrap().family_id, None);
    assert_eq!(roster.member(sarah).unwrap().family_id, Some(johnson));

    let buckets = roster.grouped();
    assert!(buckets.iter().all(|b| b.id != BucketId::Family(smith)));
    let unknown = buckets.last().unwrap();
    assert!(unknown.is_unknown());
    assert_eq!(unknown.len(), 2);
}

#[test]
fn mark_all_then_clear_is_idempotent() {
    let mut roster = Roster::with_sample_data();
    let smith = roster.families()[0].id;
    let bucket = BucketId::Family(smith);

    for _ in 0..2 {
        assert_eq!(roster.mark_all_in_family(bucket, true), 3);
        assert_eq!(roster.summary().total_present, 3);
    }
    for _ in 0..2 {
        assert_eq!(roster.mark_all_in_family(bucket, false), 3);
        let buckets = roster.grouped();
        let smiths = buckets.iter().find(|b| b.id == bucket).unwrap();
        assert!(smiths
            .members
            .iter()
            .all(|m| roster.attendance().get(&m.id) == Some(&false)));
    }
    assert_eq!(roster.summary().total_present, 0);
}

#[test]
fn mark_all_follows_the_current_grouping() {
    let mut roster = Roster::with_sample_data();
    let smith = roster.families()[0].id;
    let carlos = roster
        .members()
        .iter()
        .find(|m| m.first_name == "Carlos")
        .unwrap()
        .id;
    roster.update_member_family(carlos, Some(smith));

    assert_eq!(roster.mark_all_in_family(BucketId::Family(smith), true), 4);
    assert!(roster.is_present(carlos));
}

#[test]
fn deleted_member_attendance_is_not_inherited() {
    let mut roster = Roster::new();
    let ava = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();
    roster.toggle_attendance(ava, true);

    assert!(roster.delete_member(ava));
    assert!(roster.attendance().get(&ava).is_none());

    let noah = roster.add_member(NewMember::new("Noah", "Lee")).unwrap();
    assert_ne!(noah, ava);
    assert!(!roster.is_present(noah));
    assert_eq!(roster.summary().total_present, 0);
}

#[test]
fn toggle_treats_only_checked_as_present() {
    let mut roster = Roster::new();
    let ava = roster.add_member(NewMember::new("Ava", "Lopez")).unwrap();

    roster.toggle_attendance(ava, CheckState::Checked);
    assert!(roster.is_present(ava));
    roster.toggle_attendance(ava, CheckState::Indeterminate);
    assert!(!roster.is_present(ava));
    roster.toggle_attendance(ava, true);
    roster.toggle_attendance(ava, false);
    assert!(!roster.is_present(ava));
}

#[test]
fn lenient_reassignment_accepts_dangling_ids() {
    let (mut roster, smith) = roster_with_smith_and_lopez();
    let ava = roster
        .members()
        .iter()
        .find(|m| m.first_name == "Ava")
        .unwrap()
        .id;
    let gone = roster.add_family("Gone").unwrap();
    roster.delete_family(gone);

    assert!(roster.update_member_family(ava, Some(gone)));
    assert_eq!(roster.member(ava).unwrap().family_id, Some(gone));
    assert_eq!(roster.family_name(Some(gone)), None);

    let buckets = roster.grouped();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].id, BucketId::Family(smith));
    assert_eq!(buckets[1].members[0].id, ava);

    assert!(roster.update_member_family(ava, None));
    assert_eq!(roster.member(ava).unwrap().family_id, None);
}

#[test]
fn smith_and_lopez_scenario() {
    let (mut roster, smith) = roster_with_smith_and_lopez();
    let john = roster
        .members()
        .iter()
        .find(|m| m.first_name == "John")
        .unwrap()
        .id;

    let buckets = roster.grouped();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "Smith");
    assert_eq!(buckets[0].members[0].display_name(), "Smith, John");
    assert_eq!(buckets[1].name, "Unknown");
    assert_eq!(buckets[1].members[0].display_name(), "Lopez, Ava");

    roster.toggle_attendance(john, true);
    assert_eq!(roster.summary().total_present, 1);

    roster.delete_family(smith);
    assert_eq!(roster.member(john).unwrap().family_id, None);

    let buckets = roster.grouped();
    assert_eq!(buckets.len(), 1);
    assert!(buckets[0].is_unknown());
    let names: Vec<String> = buckets[0].members.iter().map(|m| m.display_name()).collect();
    assert_eq!(names, ["Lopez, Ava", "Smith, John"]);
    assert!(roster.is_present(john));
}
