//! Dois de Muitos CLI
//!
//! Command-line interface for working on the site data:
//! - Check the JSON documents load
//! - Render the static page
//! - Inspect the background scene
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use std::path::PathBuf;

use dois_de_muitos::config::{generate_default_config, ConfigOrigin};
use dois_de_muitos::content::Resource;
use dois_de_muitos::loader::{DataLoader, LoadPolicy, ResourceSource};
use dois_de_muitos::render::{render_page, PageView};
use dois_de_muitos::scene::{artifacts_from_events, Scene};
use dois_de_muitos::{logging, Config, SiteState};

#[derive(Parser)]
#[command(name = "dois-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Coletivo Dois de Muitos living archive")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory with the JSON documents
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Base URL to fetch the JSON documents from
    #[arg(long, global = true)]
    pub data_url: Option<String>,

    /// Partial failure policy (all_or_nothing, per_resource)
    #[arg(long, global = true)]
    pub policy: Option<LoadPolicy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every document and report what failed
    Check,

    /// Render the page as static HTML
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the helix markers built from the events
    Scene,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<(Config, Option<ConfigOrigin>)> {
        let (mut config, origin) = match &self.config {
            Some(path) => (Config::load_with_env(path)?, None),
            None => {
                let (config, origin) = Config::load_default();
                (config, Some(origin))
            }
        };

        if let Some(dir) = &self.data_dir {
            config.data.dir = dir.clone();
            config.data.url = None;
        }
        if let Some(url) = &self.data_url {
            config.data.url = Some(url.clone());
        }
        if let Some(policy) = self.policy {
            config.data.policy = policy;
        }

        Ok((config, origin))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (config, origin) = cli.load_config()?;
    logging::init(&config.logging)?;
    if let Some(origin) = origin {
        origin.log();
    }

    let loader = DataLoader::new(config.data.source()?, config.data.policy);

    match cli.command {
        Commands::Check => {
            let report = loader.load().await;

            println!("Source: {}", loader.source().describe());
            println!("Policy: {:?}", loader.policy());
            println!();
            for resource in Resource::ALL {
                match report.failures.iter().find(|f| f.resource() == resource) {
                    Some(failure) => println!("  {:<15} FAILED  {}", resource, failure),
                    None => println!("  {:<15} ok", resource),
                }
            }
            println!();
            println!(
                "Loaded: {} events, {} nfts, {} projects, donations {}",
                report.content.events.len(),
                report.content.nfts.len(),
                report.content.projects.len(),
                if report.content.donations.is_some() { "yes" } else { "no" },
            );

            if !report.is_complete() {
                anyhow::bail!("{} of 4 documents failed to load", report.failures.len());
            }
        }

        Commands::Render { output } => {
            let mut state = SiteState::new();
            let failures = loader.load_into(&mut state).await;
            let html = render_page(&PageView::from_state(&state));

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    eprintln!("Page written to {:?} ({} load failures)", path, failures.len());
                }
                None => print!("{}", html),
            }
        }

        Commands::Scene => {
            let report = loader.load().await;
            let params = &config.scene;
            let artifacts = artifacts_from_events(&report.content.events, params.max_artifacts);

            let mut rng = rand::rngs::StdRng::seed_from_u64(params.seed.unwrap_or(0));
            let scene = Scene::build(params, &artifacts, &mut rng);

            println!(
                "{} stars, {} helix samples per strand, {} markers from {} artifacts",
                scene.starfield.len(),
                scene.helix.len(),
                scene.markers.len(),
                artifacts.len()
            );
            if !scene.markers.is_empty() {
                println!();
                println!("{:<8} {:<12} {:<10} {}", "Sample", "Category", "Color", "Event");
                println!("{}", "-".repeat(60));
                for marker in &scene.markers {
                    println!(
                        "{:<8} {:<12} {:<10} {} {}",
                        marker.sample,
                        marker.artifact.category,
                        marker.artifact.color,
                        marker.artifact.emoji,
                        marker.artifact.name
                    );
                }
            }
        }

        // Written before any config is loaded
        Commands::Config { .. } => {}
    }

    Ok(())
}
