use std::collections::HashSet;

use crate::account::snapshot::AccountSnapshot;
use crate::foundation::core::{Placement, Size};

/// One outfit slot on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotSpec {
    /// Short label used in logs.
    pub name: &'static str,
    /// Decimal prefix an item id must start with to fill this slot.
    pub match_prefix: &'static str,
    /// Item id used when nothing matches.
    pub fallback_id: &'static str,
    /// Where the icon lands on the canvas.
    pub placement: Placement,
}

/// Number of outfit slots.
pub const OUTFIT_SLOT_COUNT: usize = 7;

/// Outfit slots in matching priority order, which is also their paste order.
///
/// Slots 0 and 2 share the `211` prefix; slot 2's position sits below the face slot and is kept
/// as-is.
pub const OUTFIT_SLOTS: [SlotSpec; OUTFIT_SLOT_COUNT] = [
    SlotSpec {
        name: "head",
        match_prefix: "211",
        fallback_id: "211000000",
        placement: Placement::new(760, 92, 170, 170),
    },
    SlotSpec {
        name: "face",
        match_prefix: "214",
        fallback_id: "214000000",
        placement: Placement::new(810, 310, 170, 120),
    },
    SlotSpec {
        name: "head_accessory",
        match_prefix: "211",
        fallback_id: "208000000",
        placement: Placement::new(790, 490, 170, 170),
    },
    SlotSpec {
        name: "top",
        match_prefix: "203",
        fallback_id: "203000000",
        placement: Placement::new(72, 505, 170, 170),
    },
    SlotSpec {
        name: "bottom",
        match_prefix: "204",
        fallback_id: "204000000",
        placement: Placement::new(130, 792, 170, 170),
    },
    SlotSpec {
        name: "shoes",
        match_prefix: "205",
        fallback_id: "205000000",
        placement: Placement::new(728, 760, 170, 170),
    },
    SlotSpec {
        name: "top_layer",
        match_prefix: "203",
        fallback_id: "203000000",
        placement: Placement::new(72, 230, 170, 170),
    },
];

/// Size outfit icons are stretched to right after decode.
pub const OUTFIT_FETCH_SIZE: Size = Size::new(170, 170);

/// Avatar used when no equipped skill qualifies.
pub const DEFAULT_AVATAR_ID: u64 = 406;

/// Decimal suffix marking a skill id that doubles as a character portrait id.
pub const AVATAR_SKILL_SUFFIX: &str = "06";

/// Pick one item id per slot of [`OUTFIT_SLOTS`] from the account's equipped outfit.
pub fn resolve_outfit(snapshot: &AccountSnapshot) -> Vec<String> {
    resolve_slots(&OUTFIT_SLOTS, &snapshot.equipped_outfit_ids)
}

/// Assign item ids to `slots` in order.
///
/// Each slot takes the first id (in `ids` order) whose decimal form starts with the slot prefix
/// and that no earlier slot took; otherwise it gets its fallback id. An id value is handed out at
/// most once, even if it appears several times in `ids`.
pub fn resolve_slots(slots: &[SlotSpec], ids: &[u64]) -> Vec<String> {
    let rendered: Vec<(u64, String)> = ids.iter().map(|&id| (id, id.to_string())).collect();
    let mut used: HashSet<u64> = HashSet::with_capacity(slots.len());

    slots
        .iter()
        .map(|slot| {
            let hit = rendered
                .iter()
                .find(|(id, s)| s.starts_with(slot.match_prefix) && !used.contains(id));
            match hit {
                Some((id, s)) => {
                    used.insert(*id);
                    s.clone()
                }
                None => slot.fallback_id.to_string(),
            }
        })
        .collect()
}

/// Portrait id: first skill whose decimal form ends in [`AVATAR_SKILL_SUFFIX`], else
/// [`DEFAULT_AVATAR_ID`].
pub fn select_avatar_id(skill_ids: &[u64]) -> u64 {
    skill_ids
        .iter()
        .copied()
        .find(|id| id.to_string().ends_with(AVATAR_SKILL_SUFFIX))
        .unwrap_or(DEFAULT_AVATAR_ID)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/slots.rs"]
mod tests;
