use super::*;
use std::collections::HashSet;

#[test]
fn random_ids_have_time_prefix_and_base36_suffix() {
    let id = RandomIdSource.next_id("obj");
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3, "{id}");
    assert_eq!(parts[0], "obj");
    assert!(parts[1].parse::<u128>().is_ok());
    assert_eq!(parts[2].len(), SUFFIX_LEN);
    assert!(
        parts[2]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    );
}

#[test]
fn random_ids_do_not_collide_in_a_burst() {
    let mut src = RandomIdSource;
    let ids: HashSet<String> = (0..500).map(|_| src.next_id("obj")).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn sequential_ids_count_from_one() {
    let mut src = SequentialIdSource::new();
    assert_eq!(src.next_id("obj"), "obj_1");
    assert_eq!(src.next_id("target"), "target_2");
}
