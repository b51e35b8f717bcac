//! # markup-config demo application
//!
//! A small CLI that resolves the markup section of a site configuration and
//! prints it. It exists to demonstrate and manually verify the crate.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example markup_demo -- show
//! cargo run --example markup_demo -- --config site.toml markup list
//! RUST_LOG=markup_config=debug cargo run --example markup_demo -- show
//! ```
//!
//! Without `--config`, the bundled `site.toml` is used.
//!
//! | Feature                  | How to exercise it                                             |
//! |--------------------------|----------------------------------------------------------------|
//! | Resolved config as JSON  | `cargo run --example markup_demo -- show`                      |
//! | Legacy keys ignored      | `cargo run --example markup_demo -- --no-legacy show`          |
//! | Strict mode              | `cargo run --example markup_demo -- --strict show`             |
//! | `markup list`            | `cargo run --example markup_demo -- markup list`               |
//! | `markup get`             | `cargo run --example markup_demo -- markup get highlight.style`|
//! | `markup template`        | `cargo run --example markup_demo -- markup template`           |
//! | `markup docs`            | `cargo run --example markup_demo -- markup docs`               |
//! | Resolution trace         | `RUST_LOG=markup_config=trace cargo run --example markup_demo -- show` |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use markup_config::{MarkupArgs, MarkupResolver, MarkupResolverBuilder, from_toml_str};

const SAMPLE_SITE: &str = include_str!("site.toml");

/// markup-config demo: resolve and inspect markup settings.
#[derive(Parser, Debug)]
#[command(name = "markup-demo")]
struct Cli {
    /// Site configuration file (TOML). Defaults to the bundled sample.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Top-level section holding the markup settings.
    #[arg(long, global = true, default_value = "markup")]
    section: String,

    /// Reject unknown keys in the markup section.
    #[arg(long, global = true)]
    strict: bool,

    /// Ignore legacy top-level keys.
    #[arg(long, global = true)]
    no_legacy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved markup configuration as JSON.
    Show,
    /// Inspect the markup configuration (list, get, template, docs).
    Markup(MarkupArgs),
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn make_builder(cli: &Cli) -> MarkupResolverBuilder {
    let builder = MarkupResolver::builder()
        .section(&cli.section)
        .strict(cli.strict);
    if cli.no_legacy {
        builder.no_legacy()
    } else {
        builder
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &cli.config {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_SITE.to_string(),
    };
    let store = from_toml_str(&text)?;
    let builder = make_builder(&cli);

    match cli.command {
        Commands::Show => {
            let config = builder.resolve(&store)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Markup(args) => {
            builder.handle_and_print(&store, &args.into_action())?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error:\n{e}");
        std::process::exit(1);
    }
}
