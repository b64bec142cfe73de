#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod picker;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storefront_core::search::{normalize_query, query_from_url, Url};
use storefront_core::{BackendConfig, NewsletterClient, StorefrontConfig};
use tracing_subscriber::EnvFilter;

use crate::context::Launch;

/// Everything resolved from the command line before the window opens
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Get the launch state (set once in `main`)
pub fn get_launch() -> &'static Launch {
    LAUNCH.get().expect("launch state is set before the app starts")
}

/// Storefront - shop front and admin image uploads
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "Storefront - shop front with admin image uploads")]
struct Args {
    /// Backend base URL; images are posted to <URL>/api/upload
    #[arg(long, env = "STOREFRONT_BACKEND_URL")]
    backend_url: Option<String>,

    /// Ignore the backend and keep uploaded images as local previews
    #[arg(long)]
    local_only: bool,

    /// Upload request timeout in seconds
    #[arg(long, default_value_t = 30)]
    upload_timeout: u64,

    /// Data directory for saved site images
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Public storefront URL, used for shareable search links
    #[arg(long, env = "STOREFRONT_PUBLIC_URL", default_value = "http://localhost:5173/")]
    public_url: String,

    /// Start with a search: plain text or a shared link containing ?q=
    #[arg(short, long)]
    search: Option<String>,

    /// Log filter (e.g. "storefront=debug,storefront_core=debug")
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?} ({}), using info", args.log_filter, e);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = args.data_dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storefront")
    });

    let mut config = StorefrontConfig::new(&data_dir);
    config.log_filter = args.log_filter.clone();
    match (&args.backend_url, args.local_only) {
        (Some(url), false) => {
            let backend = BackendConfig::new(url)
                .context("invalid --backend-url")?
                .with_timeout(Duration::from_secs(args.upload_timeout));
            config = config.with_backend(backend);
        }
        (Some(_), true) => tracing::info!("--local-only set, ignoring backend URL"),
        (None, _) => {}
    }

    let strategy = config.upload_strategy().context("failed to set up uploads")?;
    let newsletter =
        NewsletterClient::new(config.backend.as_ref()).context("failed to set up newsletter")?;
    let public_url = Url::parse(&args.public_url)
        .with_context(|| format!("invalid --public-url {:?}", args.public_url))?;
    let initial_query = args
        .search
        .as_deref()
        .and_then(|s| query_from_url(s).or_else(|| normalize_query(s)));

    tracing::info!(
        data_dir = %data_dir.display(),
        strategy = strategy.name(),
        "starting storefront"
    );

    let _ = LAUNCH.set(Launch {
        config,
        strategy,
        newsletter,
        public_url,
        initial_query,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Storefront")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
