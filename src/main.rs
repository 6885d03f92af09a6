#![allow(non_snake_case)]

mod app;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use usdt_guide_core::GuideContent;

/// USDT Deposit Guide - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "usdt-guide-desktop")]
#[command(about = "USDT deposit channel guide - PC, mobile and notes walkthroughs")]
struct Args {
    /// Replacement content document (JSON) instead of the built-in guide
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = GuideContent::load_or_builtin(args.content.as_deref())
        .context("Failed to load guide content")?;
    let title = content.page_title();

    tracing::info!(
        "Starting '{}' ({}x{})",
        title,
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(content)
        .launch(app::App);

    Ok(())
}
