//! USDT Deposit Guide CLI
//!
//! Static export and plain-text listing of the deposit guide.
//!
//! ## Usage
//!
//! ```bash
//! # Render the page (desktop section selected) to stdout
//! usdt-guide render
//!
//! # Render with the notes section selected into a file
//! usdt-guide render --tab notes --output notes.html
//!
//! # Print the mobile walkthrough as text
//! usdt-guide steps mobile
//!
//! # Validate a replacement content document
//! usdt-guide --content guide.json check
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use usdt_guide_core::{ActiveSection, GuideContent, NotesContent, StepGuide};

/// USDT Deposit Guide
#[derive(Parser)]
#[command(name = "usdt-guide")]
#[command(version = "0.1.0")]
#[command(about = "USDT deposit channel guide - static export and text listing")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Replacement content document (JSON) instead of the built-in guide
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to a standalone HTML document
    Render {
        /// Section selected in the rendered page (pc, mobile, notes)
        #[arg(short, long, default_value = "pc")]
        tab: ActiveSection,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one section as plain text
    Steps {
        /// Section to print (pc, mobile, notes)
        section: ActiveSection,
    },

    /// Validate the content and print a summary
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let content = GuideContent::load_or_builtin(cli.content.as_deref())
        .context("Failed to load guide content")?;

    match cli.command {
        Commands::Render { tab, output } => {
            let html = usdt_guide_ui::render_document(&content, tab);
            match output {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), %tab, "Exported guide");
                    println!("Wrote {} ({} bytes)", path.display(), html.len());
                }
                None => print!("{}", html),
            }
        }

        Commands::Steps { section } => {
            println!("{}", content.section_title(section));
            println!();
            match content.step_guide(section) {
                Some(guide) => print_step_guide(guide),
                None => print_notes(&content.notes),
            }
        }

        Commands::Check => {
            println!("Content OK: {}", content.page_title());
            for section in ActiveSection::ALL {
                let count = match content.step_guide(section) {
                    Some(guide) => guide.steps.len(),
                    None => content.notes.payment_steps.len(),
                };
                println!(
                    "  {:<7} {} ({} steps)",
                    section.id(),
                    content.tab_label(section),
                    count
                );
            }
            println!(
                "  Accepted networks: {}",
                content.notes.accepted_networks.join(", ")
            );
        }
    }

    Ok(())
}

fn print_step_guide(guide: &StepGuide) {
    for step in &guide.steps {
        println!("{}. {}", step.number, step.title);
        for item in &step.items {
            println!("   > {}", item);
        }
        if let Some(image) = &step.image {
            match &image.url {
                Some(url) => println!("   [{}] {}", image.caption, url),
                None => println!("   [{}]", image.caption),
            }
        }
        println!();
    }
}

fn print_notes(notes: &NotesContent) {
    println!("{}", notes.key_points_heading);
    for point in &notes.key_points {
        println!("  * {}", point);
    }
    println!();

    println!("{}", notes.restrictions_heading);
    println!("  {}", notes.restrictions_lead);
    println!("  {}", notes.accepted_networks.join(" / "));
    println!("  {}", notes.warning);
    println!();

    println!("{}", notes.payment_heading);
    for step in &notes.payment_steps {
        println!("  {}", step.title);
        println!("     {}", step.description);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
