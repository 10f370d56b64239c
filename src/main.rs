#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use raggaeirre_core::logging::LoggingBuilder;
use raggaeirre_core::{SiteConfig, SiteContext};

use crate::platform::{SystemClipboard, WebviewPage};

/// The site, built once before the window opens
static SITE: OnceLock<Arc<SiteContext>> = OnceLock::new();

/// The site context created at startup
pub fn site() -> Option<Arc<SiteContext>> {
    SITE.get().cloned()
}

/// Raggaeirre Support Foundation - desktop site
#[derive(Parser, Debug)]
#[command(name = "raggaeirre-desktop")]
#[command(about = "Raggaeirre Support Foundation - the foundation website as a desktop app")]
struct Args {
    /// Site config JSON (timings, catalog override, simulated outcome)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the JSONL log journal (default: <data dir>/raggaeirre/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Do not write a log journal
    #[arg(long)]
    no_journal: bool,
}

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("raggaeirre")
        .join("logs")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new("desktop");
    if !args.no_journal {
        logging = logging.journal(args.log_dir.clone().unwrap_or_else(default_log_dir));
    }
    if let Some(path) = logging.init()? {
        tracing::info!(journal = %path.display(), "Logging to journal");
    }

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Desktop app panicked");
    }));

    let config = SiteConfig::load(args.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", args.config))?;
    let site = SiteContext::from_config(
        &config,
        Arc::new(WebviewPage::new()),
        Arc::new(SystemClipboard),
    )?;
    let _ = SITE.set(site);

    tracing::info!(
        outcome = ?config.simulated_outcome,
        catalog = ?config.catalog_path,
        "Starting Raggaeirre desktop"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Raggaeirre Support Foundation")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
