//! Outfit card renderer: turns a game account into a 1024×1024 PNG preview of its equipped look.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: `uid + region -> AccountSnapshot` via an [`AccountSource`]
//! 2. **Resolve**: `AccountSnapshot -> [item id; 7]` (prefix match, first slot wins, fallbacks)
//! 3. **Fetch images**: background + seven outfit icons as one batch on a [`FetchExecutor`]
//! 4. **Composite**: outfit slots in table order, then pet, avatar and weapon, each pasted with
//!    its own alpha as mask at fixed coordinates
//! 5. **Encode**: [`Canvas`] -> PNG bytes
//!
//! Only the account lookup and the background fetch are fatal. Any other missing image leaves
//! its layer out and the rest of the card unchanged.
//!
//! The [`server`] module exposes the pipeline as `GET /outfit-image`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod account;
mod assets;
mod foundation;
mod net;
mod render;
mod resolve;

/// HTTP surface (`GET /outfit-image`).
pub mod server;

pub use account::snapshot::AccountSnapshot;
pub use account::source::{AccountSource, HttpAccountSource};
pub use assets::decode::{decode_image, resize_exact};
pub use assets::fetch::{ImageSource, fetch_image};
pub use foundation::core::{CANVAS_SIZE, Placement, Size, centered_x};
pub use foundation::error::{CardError, CardResult, FetchError};
pub use net::endpoints::Endpoints;
pub use net::http::{HttpClient, HttpSourceOpts, MAX_BODY_BYTES};
pub use render::compose::{
    AVATAR_LAYER, Canvas, CompositeStats, Layer, LayerSpec, LayerX, PET_LAYER, WEAPON_LAYER,
    composite,
};
pub use render::encode::encode_png;
pub use render::executor::{
    DEFAULT_FETCH_WORKERS, FetchExecutor, FetchJob, ImageResult, InlineExecutor, PoolExecutor,
};
pub use render::pipeline::{CardStats, OutfitCardPipeline, PipelineOpts, ResolvedSlotImage};
pub use resolve::slots::{
    AVATAR_SKILL_SUFFIX, DEFAULT_AVATAR_ID, OUTFIT_FETCH_SIZE, OUTFIT_SLOT_COUNT, OUTFIT_SLOTS,
    SlotSpec, resolve_outfit, resolve_slots, select_avatar_id,
};
