/// Upstream URL templates.
///
/// Defaults are the production upstreams. Pet and weapon icons use the CDN's `.pg` extension,
/// which differs from outfit icons (`.png`); both are kept exactly as served upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Player-info JSON API, queried with `uid` and `region`.
    pub player_info: String,
    /// Icon CDN base, without trailing slash.
    pub icon_cdn: String,
    /// Fixed background image.
    pub background: String,
    /// Character-portrait API, queried with `id`.
    pub avatar: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            player_info: "https://nr-codex-info1.vercel.app/player-info".to_string(),
            icon_cdn: "https://www.dl.cdn.freefireofficial.com/icons".to_string(),
            background: "https://iili.io/KHeErOv.jpg".to_string(),
            avatar: "https://characteriroxmar.vercel.app/chars".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every upstream at one base URL (`{base}/player-info`, `{base}/icons`, ...).
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            player_info: format!("{base}/player-info"),
            icon_cdn: format!("{base}/icons"),
            background: format!("{base}/background.jpg"),
            avatar: format!("{base}/chars"),
        }
    }

    /// Account lookup URL.
    pub fn player_info_url(&self, uid: &str, region: &str) -> String {
        format!("{}?uid={uid}&region={region}", self.player_info)
    }

    /// Outfit icon URL for an item id.
    pub fn outfit_icon_url(&self, id: &str) -> String {
        format!("{}/{id}.png", self.icon_cdn)
    }

    /// Pet icon URL.
    pub fn pet_icon_url(&self, id: u64) -> String {
        format!("{}/{id}.pg", self.icon_cdn)
    }

    /// Weapon icon URL.
    pub fn weapon_icon_url(&self, id: u64) -> String {
        format!("{}/{id}.pg", self.icon_cdn)
    }

    /// Character portrait URL for an avatar id.
    pub fn avatar_url(&self, id: u64) -> String {
        format!("{}?id={id}", self.avatar)
    }
}
