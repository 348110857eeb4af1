use std::sync::Arc;

use crate::account::snapshot::AccountSnapshot;
use crate::account::source::{AccountSource, HttpAccountSource};
use crate::assets::fetch::{ImageSource, fetch_image};
use crate::foundation::core::{CANVAS_SIZE, Size};
use crate::foundation::error::{CardError, CardResult, FetchError};
use crate::net::endpoints::Endpoints;
use crate::net::http::{HttpClient, HttpSourceOpts};
use crate::render::compose::{
    AVATAR_LAYER, Canvas, CompositeStats, Layer, LayerSpec, PET_LAYER, WEAPON_LAYER, composite,
};
use crate::render::encode::encode_png;
use crate::render::executor::{
    DEFAULT_FETCH_WORKERS, FetchExecutor, FetchJob, ImageResult, PoolExecutor,
};
use crate::resolve::slots::{OUTFIT_FETCH_SIZE, OUTFIT_SLOTS, resolve_outfit, select_avatar_id};

/// Options for [`OutfitCardPipeline::http`].
#[derive(Clone, Debug)]
pub struct PipelineOpts {
    /// Upstream URLs.
    pub endpoints: Endpoints,
    /// HTTP client settings (per-fetch timeout).
    pub http: HttpSourceOpts,
    /// Size of the shared fetch pool.
    pub workers: usize,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            http: HttpSourceOpts::default(),
            workers: DEFAULT_FETCH_WORKERS,
        }
    }
}

/// The image chosen for one outfit slot and the outcome of fetching it.
#[derive(Debug)]
pub struct ResolvedSlotImage {
    /// Index into [`OUTFIT_SLOTS`].
    pub slot_index: usize,
    /// Item id whose icon was requested.
    pub image_id: String,
    /// Decoded icon, or why there is none.
    pub image: ImageResult,
}

/// Counters and degraded layers of one card render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStats {
    /// Layers drawn onto the background.
    pub layers_pasted: u32,
    /// Layers left out because their image was unavailable or not applicable.
    pub layers_skipped: u32,
    /// Fetch failures that caused a layer to be skipped, by layer name.
    pub failures: Vec<(&'static str, FetchError)>,
}

impl CardStats {
    fn absorb(&mut self, stats: CompositeStats) {
        self.layers_pasted += stats.pasted;
        self.layers_skipped += stats.skipped;
    }
}

/// Builds outfit cards: account lookup, slot resolution, concurrent icon fetch, layering, PNG.
///
/// Holds no per-request state; one instance serves concurrent requests.
pub struct OutfitCardPipeline {
    account: Arc<dyn AccountSource>,
    images: Arc<dyn ImageSource>,
    executor: Arc<dyn FetchExecutor>,
    endpoints: Endpoints,
}

impl std::fmt::Debug for OutfitCardPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutfitCardPipeline")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl OutfitCardPipeline {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        account: Arc<dyn AccountSource>,
        images: Arc<dyn ImageSource>,
        executor: Arc<dyn FetchExecutor>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            account,
            images,
            executor,
            endpoints,
        }
    }

    /// Pipeline talking to the real upstreams over HTTP with a [`PoolExecutor`].
    pub fn http(opts: PipelineOpts) -> CardResult<Self> {
        let client = HttpClient::new(&opts.http);
        let executor = PoolExecutor::new(opts.workers)?;
        Ok(Self::new(
            Arc::new(HttpAccountSource::new(
                client.clone(),
                opts.endpoints.clone(),
            )),
            Arc::new(client),
            Arc::new(executor),
            opts.endpoints,
        ))
    }

    /// Upstream URLs in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Render the card for `uid` in `region` as PNG bytes.
    pub fn render_png(&self, uid: &str, region: &str) -> CardResult<Vec<u8>> {
        self.render_png_with_stats(uid, region).map(|(png, _)| png)
    }

    /// Render the card and return the counters alongside the PNG bytes.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn render_png_with_stats(
        &self,
        uid: &str,
        region: &str,
    ) -> CardResult<(Vec<u8>, CardStats)> {
        let snapshot = self.account.fetch(uid, region).map_err(|e| {
            tracing::warn!(error = %e, "account lookup failed");
            CardError::Account(e)
        })?;
        let (canvas, stats) = self.compose(&snapshot)?;
        let png = encode_png(&canvas)?;
        tracing::info!(
            pasted = stats.layers_pasted,
            skipped = stats.layers_skipped,
            bytes = png.len(),
            "card rendered"
        );
        Ok((png, stats))
    }

    /// Build the card canvas for an already-fetched account.
    ///
    /// Fails only if the background cannot be obtained; every other missing image just leaves
    /// its layer out.
    pub fn compose(&self, snapshot: &AccountSnapshot) -> CardResult<(Canvas, CardStats)> {
        let (background, slots) = self.fetch_background_and_outfit(snapshot);
        let background = background.map_err(|e| {
            tracing::warn!(error = %e, "background fetch failed");
            CardError::Background(e)
        })?;

        let mut stats = CardStats::default();
        let mut canvas = Canvas::from_background(background);

        let layers: Vec<Layer> = slots
            .into_iter()
            .map(|slot| {
                let spec = LayerSpec::for_slot(&OUTFIT_SLOTS[slot.slot_index]);
                let image = match slot.image {
                    Ok(img) => Some(img),
                    Err(e) => {
                        tracing::warn!(slot = spec.name, id = %slot.image_id, error = %e, "outfit icon unavailable");
                        stats.failures.push((spec.name, e));
                        None
                    }
                };
                Layer::new(spec, image)
            })
            .collect();
        stats.absorb(composite(&mut canvas, layers));

        let pet_url = snapshot.pet_id.map(|id| self.endpoints.pet_icon_url(id));
        self.overlay(&mut canvas, &mut stats, PET_LAYER, pet_url);

        let avatar_id = select_avatar_id(&snapshot.equipped_skill_ids);
        tracing::debug!(avatar_id, "avatar selected");
        let avatar_url = Some(self.endpoints.avatar_url(avatar_id));
        self.overlay(&mut canvas, &mut stats, AVATAR_LAYER, avatar_url);

        let weapon_url = snapshot
            .weapon_id()
            .filter(|&id| id != 0)
            .map(|id| self.endpoints.weapon_icon_url(id));
        self.overlay(&mut canvas, &mut stats, WEAPON_LAYER, weapon_url);

        Ok((canvas, stats))
    }

    /// Fetch the background and the seven outfit icons as one concurrent batch.
    pub fn fetch_background_and_outfit(
        &self,
        snapshot: &AccountSnapshot,
    ) -> (ImageResult, Vec<ResolvedSlotImage>) {
        let ids = resolve_outfit(snapshot);
        tracing::debug!(?ids, "outfit resolved");

        let images: &dyn ImageSource = &*self.images;
        let background_url = self.endpoints.background.clone();
        let mut jobs: Vec<FetchJob<'_>> = Vec::with_capacity(ids.len() + 1);
        jobs.push(Box::new(move || {
            fetch_image(
                images,
                &background_url,
                Some(Size::new(CANVAS_SIZE, CANVAS_SIZE)),
            )
        }));
        for id in &ids {
            let url = self.endpoints.outfit_icon_url(id);
            jobs.push(Box::new(move || {
                fetch_image(images, &url, Some(OUTFIT_FETCH_SIZE))
            }));
        }

        let mut results = self.executor.run_all(jobs).into_iter();
        let background = results
            .next()
            .unwrap_or_else(|| Err(FetchError::Transport("executor returned no result".into())));
        let slots = ids
            .into_iter()
            .enumerate()
            .map(|(slot_index, image_id)| ResolvedSlotImage {
                slot_index,
                image_id,
                image: results.next().unwrap_or_else(|| {
                    Err(FetchError::Transport("executor returned no result".into()))
                }),
            })
            .collect();
        (background, slots)
    }

    fn overlay(
        &self,
        canvas: &mut Canvas,
        stats: &mut CardStats,
        spec: LayerSpec,
        url: Option<String>,
    ) {
        let image = url.and_then(|url| match fetch_image(&*self.images, &url, Some(spec.size)) {
            Ok(img) => Some(img),
            Err(e) => {
                tracing::warn!(layer = spec.name, %url, error = %e, "layer image unavailable");
                stats.failures.push((spec.name, e));
                None
            }
        });
        stats.absorb(composite(canvas, [Layer::new(spec, image)]));
    }
}
