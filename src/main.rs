use clap::{Parser, Subcommand};
use mf_equiv::catalog::Catalog;
use mf_equiv::input::FocalLengthInput;
use mf_equiv::{config, output, prompt, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mf-equiv")]
#[command(about = "Medium-format focal length to 35mm-equivalent calculator")]
#[command(long_about = "\
Medium-format focal length to 35mm-equivalent calculator

Converts the focal length of a medium-format lens into the focal length that
gives the same field of view on a 36 x 24 mm full-frame camera, for every
common roll-film format:

  645 (41.5 x 56)   6x6 (56 x 56)   6x7 (70 x 56)   6x8 (76 x 56)
  6x9 (84 x 56)     6x12 (112 x 56) 6x17 (168 x 56)

  crop factor = diagonal(36 x 24) / diagonal(format)
  equivalent  = focal length x crop factor

An empty focal length counts as 0. Negative or non-numeric values are rejected.

Run 'mf-equiv gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Show debug diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute equivalents for one focal length
    Calc {
        /// Physical focal length in mm (defaults to calculator.default_focal_length)
        #[arg(allow_negative_numbers = true)]
        focal_length: Option<String>,
        /// Emit full-precision JSON instead of the text table
        #[arg(long)]
        json: bool,
    },
    /// Enter focal lengths line by line
    Interactive,
    /// List the supported formats, or show one by id
    Formats {
        /// Format id, e.g. 6x7
        id: Option<String>,
    },
    /// Write a static HTML report
    Report {
        /// Physical focal length in mm (defaults to calculator.default_focal_length)
        #[arg(allow_negative_numbers = true)]
        focal_length: Option<String>,
        /// Output file
        #[arg(long, short, default_value = "mf-equiv.html")]
        output: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let load_config = || config::load_config(&cli.config);
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Calc { focal_length, json } => {
            let app_config = load_config()?;
            let input = initial_input(focal_length.as_deref(), &app_config)?;
            let results = catalog.compute(input.value());
            if json {
                let doc = output::ResultsDocument {
                    focal_length: input.value(),
                    reference: catalog.reference(),
                    results: &results,
                };
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                output::print_results(
                    input.value(),
                    catalog.reference(),
                    &results,
                    &app_config.display,
                );
            }
        }
        Command::Interactive => {
            let app_config = load_config()?;
            let input = initial_input(None, &app_config)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let stats = prompt::run(stdin.lock(), stdout.lock(), &catalog, &app_config, input)?;
            println!("Results: {}", stats);
        }
        Command::Formats { id } => {
            let app_config = load_config()?;
            match id {
                Some(id) => {
                    let format = catalog.get(&id)?;
                    output::print_entry(format, catalog.reference(), &app_config.display);
                }
                None => output::print_catalog(&catalog, &app_config.display),
            }
        }
        Command::Report {
            focal_length,
            output: path,
        } => {
            let app_config = load_config()?;
            let input = initial_input(focal_length.as_deref(), &app_config)?;
            let results = catalog.compute(input.value());
            report::write_report(&path, &input, catalog.reference(), &results, &app_config)?;
            println!("==> Report written: {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Focal length from the command line, or the configured default.
fn initial_input(
    raw: Option<&str>,
    app_config: &config::AppConfig,
) -> Result<FocalLengthInput, mf_equiv::input::InputError> {
    FocalLengthInput::new(raw.unwrap_or(&app_config.calculator.default_focal_length))
}

/// Diagnostics go to stderr so stdout stays clean for results and JSON.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
