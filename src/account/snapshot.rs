use serde::Deserialize;

use crate::foundation::error::FetchError;

/// Equipment and cosmetics of one account, as reported by the player-info API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// Equipped outfit item ids, in upstream order.
    pub equipped_outfit_ids: Vec<u64>,
    /// Equipped skill ids, in upstream order.
    pub equipped_skill_ids: Vec<u64>,
    /// Active pet, if any.
    pub pet_id: Option<u64>,
    /// Equipped weapon skin ids.
    pub equipped_weapon_ids: Vec<u64>,
}

impl AccountSnapshot {
    /// First equipped weapon id.
    pub fn weapon_id(&self) -> Option<u64> {
        self.equipped_weapon_ids.first().copied()
    }

    /// Parse a player-info JSON document.
    ///
    /// Sections and fields may be missing or `null`. A document that is not a JSON object, or is
    /// an empty object, is rejected.
    pub fn from_json(bytes: &[u8]) -> Result<Self, FetchError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))?;
        match value.as_object() {
            Some(obj) if !obj.is_empty() => {}
            Some(_) => return Err(FetchError::Parse("empty player-info document".into())),
            None => return Err(FetchError::Parse("player-info is not a JSON object".into())),
        }
        let doc: PlayerInfoDoc =
            serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))?;
        Ok(doc.into())
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PlayerInfoDoc {
    #[serde(rename = "AccountProfileInfo")]
    profile: Option<ProfileSection>,
    #[serde(rename = "petInfo")]
    pet: Option<PetSection>,
    #[serde(rename = "AccountInfo")]
    account: Option<AccountSection>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ProfileSection {
    #[serde(rename = "EquippedOutfit")]
    equipped_outfit: Option<Vec<u64>>,
    #[serde(rename = "EquippedSkills")]
    equipped_skills: Option<Vec<u64>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PetSection {
    id: Option<u64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct AccountSection {
    #[serde(rename = "EquippedWeapon")]
    equipped_weapon: Option<Vec<u64>>,
}

impl From<PlayerInfoDoc> for AccountSnapshot {
    fn from(doc: PlayerInfoDoc) -> Self {
        let profile = doc.profile.unwrap_or_default();
        Self {
            equipped_outfit_ids: profile.equipped_outfit.unwrap_or_default(),
            equipped_skill_ids: profile.equipped_skills.unwrap_or_default(),
            // Upstream reports "no pet" as id 0.
            pet_id: doc.pet.and_then(|p| p.id).filter(|&id| id != 0),
            equipped_weapon_ids: doc
                .account
                .and_then(|a| a.equipped_weapon)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/account/snapshot.rs"]
mod tests;
