use church_attendance::{group_members, BucketId, NewMember, Roster};

#[test]
fn members_sort_by_last_then_first_name() {
    let mut roster = Roster::new();
    let smith = roster.add_family("Smith").unwrap();
    roster.add_member(NewMember::new("Jane", "Smith").in_family(smith));
    roster.add_member(NewMember::new("Emily", "Smith").in_family(smith));
    roster.add_member(NewMember::new("aaron", "smith").in_family(smith));

    let buckets = roster.grouped();
    let firsts: Vec<&str> = buckets[0]
        .members
        .iter()
        .map(|m| m.first_name.as_str())
        .collect();
    assert_eq!(firsts, ["aaron", "Emily", "Jane"]);
}

#[test]
fn accented_surnames_sort_with_their_base_letter() {
    let mut roster = Roster::new();
    roster.add_member(NewMember::new("Zed", "Zamora"));
    roster.add_member(NewMember::new("Ana", "Álvarez"));
    roster.add_member(NewMember::new("Eva", "Bravo"));

    let buckets = roster.grouped();
    let unknown = buckets.last().unwrap();
    assert!(unknown.is_unknown());
    let names: Vec<String> = unknown.members.iter().map(|m| m.display_name()).collect();
    assert_eq!(names, ["Álvarez, Ana", "Bravo, Eva", "Zamora, Zed"]);

    let listed: Vec<String> = roster
        .members_by_name()
        .iter()
        .map(|m| m.display_name())
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn buckets_follow_family_storage_order_with_unknown_last() {
    let roster = Roster::with_sample_data();
    let names: Vec<&str> = roster.grouped().iter().map(|b| b.name).collect();
    assert_eq!(names, ["Smith", "Johnson", "Garcia", "Unknown"]);

    let empty = {
        let mut roster = Roster::new();
        roster.add_family("Williams");
        roster
    };
    let buckets = empty.grouped();
    assert_eq!(buckets.len(), 2);
    assert!(buckets.iter().all(|b| b.is_empty()));
    assert_eq!(buckets[1].id, BucketId::Unknown);
}

#[test]
fn total_present_equals_sum_of_bucket_counts() {
    let mut roster = Roster::with_sample_data();
    let ids: Vec<_> = roster.members().iter().map(|m| m.id).collect();
    for (idx, id) in ids.iter().enumerate() {
        roster.toggle_attendance(*id, idx % 3 != 0);
    }
    let dangling = roster.add_family("Temporary").unwrap();
    roster.update_member_family(ids[0], Some(dangling));
    roster.delete_family(dangling);
    roster.update_member_family(ids[1], Some(dangling));

    let summary = roster.summary();
    let per_bucket: usize = roster
        .grouped()
        .iter()
        .map(|b| b.present_count(roster.attendance()))
        .sum();
    let expected = ids.iter().filter(|id| roster.is_present(**id)).count();

    assert_eq!(summary.total_members, 8);
    assert_eq!(summary.total_present, expected);
    assert_eq!(per_bucket, expected);
    let grouped_members: usize = roster.grouped().iter().map(|b| b.len()).sum();
    assert_eq!(grouped_members, summary.total_members);
}

#[test]
fn group_members_works_on_borrowed_slices() {
    let roster = Roster::with_sample_data();
    let buckets = group_members(roster.families(), roster.members());
    assert_eq!(buckets.len(), roster.families().len() + 1);
    assert_eq!(buckets.last().unwrap().len(), 2);
}
