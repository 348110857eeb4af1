use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "outfit-card", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve `GET /outfit-image` over HTTP.
    Serve(ServeArgs),
    /// Render one card to a PNG file.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct UpstreamArgs {
    /// Per-fetch timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Worker threads shared by all outfit icon fetches.
    #[arg(long, default_value_t = outfit_card::DEFAULT_FETCH_WORKERS)]
    workers: usize,

    /// Serve every upstream from this base URL instead of the production hosts.
    #[arg(long, env = "OUTFIT_CARD_UPSTREAM_BASE")]
    upstream_base: Option<String>,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Key callers must pass as `key=`.
    #[arg(long, env = "OUTFIT_CARD_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(flatten)]
    upstream: UpstreamArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Account id.
    #[arg(long)]
    uid: String,

    /// Account region.
    #[arg(long)]
    region: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    upstream: UpstreamArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn make_pipeline(args: &UpstreamArgs) -> anyhow::Result<outfit_card::OutfitCardPipeline> {
    let endpoints = match args.upstream_base.as_deref() {
        Some(base) => outfit_card::Endpoints::with_base(base),
        None => outfit_card::Endpoints::default(),
    };
    let opts = outfit_card::PipelineOpts {
        endpoints,
        http: outfit_card::HttpSourceOpts {
            timeout: Duration::from_secs(args.timeout_secs.max(1)),
            ..outfit_card::HttpSourceOpts::default()
        },
        workers: args.workers,
    };
    Ok(outfit_card::OutfitCardPipeline::http(opts)?)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    if args.api_key.is_empty() {
        anyhow::bail!("--api-key must not be empty");
    }
    let pipeline = Arc::new(make_pipeline(&args.upstream)?);
    let state = outfit_card::server::AppState::new(pipeline, args.api_key);
    let addr = SocketAddr::new(args.host, args.port);

    let rt = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    rt.block_on(outfit_card::server::serve(addr, state))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let pipeline = make_pipeline(&args.upstream)?;
    let (png, stats) = pipeline
        .render_png_with_stats(&args.uid, &args.region)
        .with_context(|| format!("render card for uid '{}'", args.uid))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    println!(
        "wrote {} ({} bytes, {} layers, {} skipped)",
        args.out.display(),
        png.len(),
        stats.layers_pasted,
        stats.layers_skipped
    );
    for (layer, err) in &stats.failures {
        println!("  {layer}: {err}");
    }
    Ok(())
}
