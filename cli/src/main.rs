use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use telegen::{
    catalogue_to_json, compile_catalogue_to_go, compile_document, fetch_document, write_artifacts,
    GenError, Lexicon, RenderOptions, DEFAULT_SOURCE_URL,
};

#[derive(Parser)]
#[command(name = "telegen")]
#[command(about = "Generate Go bindings from the Telegram Bot API reference", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Reference page URL; also the base of every permalink
    #[arg(short, long, default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// Read the page from a saved HTML file instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<String, GenError> {
        match &self.input {
            Some(path) => {
                info!("reading {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            None => fetch_document(&self.url),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write response.go, request.go and methods.go
    Generate {
        #[command(flatten)]
        source: Source,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Go package name written at the top of each file
        #[arg(short, long, default_value = "telego")]
        package: String,

        /// JSON object of extra scalar mappings, e.g. {"Integer": "int64"}
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Print the extracted catalogue as JSON
    Dump {
        #[command(flatten)]
        source: Source,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), GenError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate { source, output, package, lexicon } => {
            let lexicon = match lexicon {
                Some(path) => Lexicon::with_overrides_json(&fs::read_to_string(path)?)?,
                None => Lexicon::default(),
            };
            let options = RenderOptions {
                package: package.clone(),
                ..RenderOptions::default()
            };

            let html = source.load()?;
            let catalogue = compile_document(&html, &source.url)?;
            let artifacts = compile_catalogue_to_go(&catalogue, &lexicon, &options);
            let written = write_artifacts(output, &artifacts)?;
            for path in written {
                println!("Generated {}", path.display());
            }
            Ok(())
        }

        Commands::Dump { source, output } => {
            let html = source.load()?;
            let catalogue = compile_document(&html, &source.url)?;
            let json = catalogue_to_json(&catalogue)?;
            if let Some(out_path) = output {
                fs::write(out_path, &json)?;
                println!("Catalogue written to {}", out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }
    }
}
