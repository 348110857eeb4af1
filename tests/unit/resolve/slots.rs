use super::*;

fn fallbacks() -> Vec<String> {
    OUTFIT_SLOTS
        .iter()
        .map(|s| s.fallback_id.to_string())
        .collect()
}

#[test]
fn empty_outfit_uses_every_fallback() {
    let snap = AccountSnapshot::default();
    assert_eq!(resolve_outfit(&snap), fallbacks());
}

#[test]
fn shared_prefix_goes_to_first_slot_only() {
    let snap = AccountSnapshot {
        equipped_outfit_ids: vec![211001, 214002],
        ..AccountSnapshot::default()
    };
    let ids = resolve_outfit(&snap);
    assert_eq!(ids[0], "211001");
    assert_eq!(ids[1], "214002");
    assert_eq!(ids[2], "208000000");
    assert_eq!(ids[3..], fallbacks()[3..]);
}

#[test]
fn second_match_fills_later_slot_with_same_prefix() {
    let snap = AccountSnapshot {
        equipped_outfit_ids: vec![203000001, 211000005, 211000009, 203000002],
        ..AccountSnapshot::default()
    };
    let ids = resolve_outfit(&snap);
    assert_eq!(ids[0], "211000005");
    assert_eq!(ids[2], "211000009");
    assert_eq!(ids[3], "203000001");
    assert_eq!(ids[6], "203000002");
}

#[test]
fn duplicate_id_values_are_assigned_once() {
    let snap = AccountSnapshot {
        equipped_outfit_ids: vec![211000005, 211000005],
        ..AccountSnapshot::default()
    };
    let ids = resolve_outfit(&snap);
    assert_eq!(ids[0], "211000005");
    assert_eq!(ids[2], "208000000");
}

#[test]
fn no_id_is_assigned_twice() {
    let snap = AccountSnapshot {
        equipped_outfit_ids: vec![
            211000001, 211000002, 211000003, 214000001, 203000001, 203000002, 203000003,
            204000001, 205000001,
        ],
        ..AccountSnapshot::default()
    };
    let ids = resolve_outfit(&snap);
    let mut seen = std::collections::HashSet::new();
    for id in &ids {
        assert!(seen.insert(id.clone()), "id {id} assigned twice");
    }
}

#[test]
fn prefix_is_textual_not_numeric() {
    let slots = [SlotSpec {
        name: "t",
        match_prefix: "211",
        fallback_id: "0",
        placement: Placement::new(0, 0, 1, 1),
    }];
    // 2110 starts with "211"; 212 is numerically adjacent but does not.
    assert_eq!(resolve_slots(&slots, &[212, 2110]), vec!["2110".to_string()]);
    assert_eq!(resolve_slots(&slots, &[21]), vec!["0".to_string()]);
}

#[test]
fn avatar_uses_first_skill_ending_in_06() {
    assert_eq!(select_avatar_id(&[105, 206, 306]), 206);
    assert_eq!(select_avatar_id(&[101, 102]), DEFAULT_AVATAR_ID);
    assert_eq!(select_avatar_id(&[]), 406);
    assert_eq!(select_avatar_id(&[6]), DEFAULT_AVATAR_ID);
    assert_eq!(select_avatar_id(&[1006]), 1006);
}
