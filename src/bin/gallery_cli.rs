//! Gallery Studio CLI - Terminal interface for the gallery index
//!
//! A terminal-based way to reveal a random image from the gallery index,
//! list the index contents, or check that the index is reachable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::{style, Emoji};
use indicatif::ProgressBar;

// Import from main library
use gallery_studio::gallery::{
    pick_entry, reveal_from, ClientConfig, GalleryClient, IndexSource,
};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "+ ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");
static INFO: Emoji<'_, '_> = Emoji("ℹ ", "i ");
static DICE: Emoji<'_, '_> = Emoji("🎲 ", "? ");

#[derive(Parser)]
#[command(name = "gallery-cli")]
#[command(author = "e421")]
#[command(version = "0.2.0")]
#[command(about = "Gallery Studio CLI - Reveal random gallery images from the terminal")]
#[command(long_about = r#"
Gallery Studio CLI fetches the gallery index (a JSON array of {"url": ...}
entries) and works with it from the terminal.

Examples:
  gallery-cli reveal                 # Print one random image URL
  gallery-cli reveal --open          # Also open it in the default viewer
  gallery-cli list                   # Print every index entry
  gallery-cli check                  # Verify the index is reachable
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gallery index URL (overrides the config file)
    #[arg(short, long, global = true)]
    pub index_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the index and reveal one random image URL
    Reveal {
        /// Open the revealed image in the default application
        #[arg(short, long)]
        open: bool,
    },

    /// Print every entry of the gallery index
    List,

    /// Check that the index is reachable and non-empty
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let client = build_client(cli.index_url);

    match cli.command {
        Commands::Reveal { open } => cmd_reveal(&client, open),
        Commands::List => cmd_list(&client),
        Commands::Check => cmd_check(&client),
    }
}

/// Resolve the index URL from flag, config file, or default
fn build_client(flag_url: Option<String>) -> GalleryClient {
    let mut config = ClientConfig::default();

    if let Some(url) = flag_url {
        config.index_url = url;
    } else if let Some(ext) = gallery_studio::StudioConfig::load() {
        if let Some(url) = ext.index_url {
            config.index_url = url;
        }
    }

    GalleryClient::new(config)
}

/// Reveal one random image
fn cmd_reveal(client: &GalleryClient, open_it: bool) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching {}...", client.index_url()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = reveal_from(client, &mut rand::thread_rng());
    pb.finish_and_clear();

    let url = result.context("Reveal failed")?;

    println!();
    println!("{} {}", DICE, style(&url).cyan().bold());

    if open_it {
        open::that(&url).context("Failed to open the revealed image")?;
        println!("{} Opened in default application", CHECK);
    }

    println!();
    Ok(())
}

/// List all index entries
fn cmd_list(client: &GalleryClient) -> Result<()> {
    let entries = client.fetch_index().context("Failed to fetch the index")?;

    println!();
    println!("{}", style("Gallery Index").bold().underlined());
    println!();

    if entries.is_empty() {
        println!("  {} The index contains no entries", INFO);
    } else {
        for entry in &entries {
            println!("  {} {}", style("●").green(), entry.url);
        }
        println!();
        println!("  {} entries", style(entries.len()).white().bold());
    }

    println!();
    Ok(())
}

/// Check index health
fn cmd_check(client: &GalleryClient) -> Result<()> {
    println!();
    println!("{} Checking {}", INFO, style(client.index_url()).dim());

    match client.fetch_index() {
        Ok(entries) if entries.is_empty() => {
            println!(
                "{} Index is reachable but empty - reveals will fail",
                CROSS
            );
            std::process::exit(1);
        }
        Ok(entries) => {
            println!(
                "{} Index OK with {} entries",
                CHECK,
                style(entries.len()).green().bold()
            );
            // Show one sample pick so a healthy index is visibly revealable
            if let Some(entry) = pick_entry(&entries, &mut rand::thread_rng()) {
                println!("  sample: {}", style(&entry.url).dim());
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", CROSS, style(&e).red());
            std::process::exit(1);
        }
    }
}
