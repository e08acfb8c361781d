//! logoprint CLI - request speech-therapy exercises and print them as card sheets

mod client;
mod preview;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use logoprint::request::csv_to_list;
use logoprint::{
    ConvertOptions, DocumentSource, EndpointConfig, GenerationRequest, NormalizeOptions,
    Parameters, PrintableDocument, ProfileParameters, RenderOptions, SimpleParameters,
};

use crate::client::GeneratorClient;

#[derive(Parser)]
#[command(name = "logoprint")]
#[command(version)]
#[command(about = "Request speech-therapy exercises and print them as A4 card sheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the generator for material and write a printable preview
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        #[command(flatten)]
        endpoint: EndpointArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output HTML file (timestamped name in the current directory if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the raw generator response
        #[arg(long)]
        show_raw: bool,

        /// Open the preview for printing after a successful render
        #[arg(long)]
        print: bool,

        /// Print the request body and exit without calling the generator
        #[arg(long)]
        dry_run: bool,
    },

    /// Render a saved generator response (file or "-" for stdin) into a printable preview
    Render {
        /// Raw response file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Treat the input as a full HTTP body (JSON printable payloads are wrapped)
        #[arg(long)]
        json: bool,

        /// Output HTML file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Open the preview for printing after a successful render
        #[arg(long)]
        print: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct RequestArgs {
    /// Free-text instructions for the generator
    #[arg(short, long, default_value = "")]
    prompt: String,

    /// Kind of material (e.g. tarjetas, fichas, juego)
    #[arg(long = "type", default_value = "tarjetas")]
    material_type: String,

    /// Child's age in years
    #[arg(long, default_value_t = 0)]
    age: u32,

    /// Where the material will be used (consulta, casa, colegio)
    #[arg(long, default_value = "consulta")]
    context: String,

    /// Diagnosis or ODT code
    #[arg(long)]
    dx: Option<String>,

    /// Current level
    #[arg(long, default_value = "inicial")]
    level: String,

    /// Therapy goal
    #[arg(long)]
    goal: Option<String>,

    /// Session length in minutes
    #[arg(long, default_value_t = logoprint::request::DEFAULT_TIME_MINUTES)]
    time: u32,

    /// Output format requested from the generator
    #[arg(long, default_value = "a4")]
    format: String,

    /// Interests, comma-separated
    #[arg(long, default_value = "")]
    interests: String,

    /// Difficulties, comma-separated
    #[arg(long, default_value = "")]
    difficulties: String,

    /// Strengths, comma-separated
    #[arg(long, default_value = "")]
    strengths: String,

    /// Strategies to avoid, comma-separated
    #[arg(long, default_value = "")]
    avoid: String,

    /// Send the flat parameter set instead of the full profile
    #[arg(long)]
    simple: bool,

    /// Number of items to request (flat parameter set only)
    #[arg(long, default_value_t = 12)]
    items: u32,
}

impl RequestArgs {
    fn build(&self) -> GenerationRequest {
        let dx = self.dx.as_deref().unwrap_or_default();
        let goal = self.goal.as_deref().unwrap_or_default();
        let interests = csv_to_list(&self.interests);

        let parameters: Parameters = if self.simple {
            SimpleParameters::new(
                self.age,
                dx,
                goal,
                interests,
                self.material_type.clone(),
                self.items,
            )
            .into()
        } else {
            ProfileParameters::new(self.material_type.clone(), self.age)
                .with_diagnosis(dx)
                .with_level(self.level.clone())
                .with_traits(
                    csv_to_list(&self.strengths),
                    csv_to_list(&self.difficulties),
                    interests,
                )
                .with_context(self.context.clone())
                .with_goal(goal)
                .with_time_minutes(self.time)
                .with_avoid_strategies(csv_to_list(&self.avoid))
                .with_output_format(self.format.clone())
                .into()
        };

        GenerationRequest::new(self.prompt.clone(), parameters)
    }
}

#[derive(Args)]
struct EndpointArgs {
    /// Generator endpoint URL
    #[arg(long, env = "LOGOPRINT_API_URL", default_value = logoprint::DEFAULT_API_URL)]
    endpoint: String,

    /// Bearer token for the generator (omit if not required)
    #[arg(long, env = "LOGOPRINT_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds (no timeout if not specified)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl EndpointArgs {
    fn config(&self) -> EndpointConfig {
        let config = EndpointConfig::new(self.endpoint.clone());
        match &self.token {
            Some(token) => config.with_bearer_token(token.clone()),
            None => config,
        }
    }
}

#[derive(Args)]
struct LayoutArgs {
    /// Document language
    #[arg(long, value_enum, default_value = "es")]
    locale: LocaleArg,

    /// Card grid columns (clamped to 1-12)
    #[arg(long, default_value_t = logoprint::model::DEFAULT_COLUMNS)]
    columns: usize,

    /// Card grid rows (clamped to 1-12)
    #[arg(long, default_value_t = logoprint::model::DEFAULT_ROWS)]
    rows: usize,

    /// Remove bullet and number markers from card text
    #[arg(long)]
    strip_markers: bool,
}

impl LayoutArgs {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_render_options(
                RenderOptions::new()
                    .with_locale(self.locale.into())
                    .with_grid(self.columns, self.rows),
            )
            .with_normalize_options(
                NormalizeOptions::new().with_list_marker_stripping(self.strip_markers),
            )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    /// Spanish
    Es,
    /// English
    En,
}

impl From<LocaleArg> for logoprint::Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::Es => logoprint::Locale::Es,
            LocaleArg::En => logoprint::Locale::En,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            request,
            endpoint,
            layout,
            output,
            show_raw,
            print,
            dry_run,
        }) => cmd_generate(
            &request,
            &endpoint,
            &layout,
            output.as_deref(),
            show_raw,
            print,
            dry_run,
        ),
        Some(Commands::Render {
            input,
            layout,
            json,
            output,
            print,
        }) => cmd_render(&input, &layout, json, output.as_deref(), print),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: logoprint generate [OPTIONS]".yellow());
            println!("       logoprint render <FILE>");
            println!("       logoprint --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    request: &RequestArgs,
    endpoint: &EndpointArgs,
    layout: &LayoutArgs,
    output: Option<&Path>,
    show_raw: bool,
    print: bool,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = request.build();

    if dry_run {
        println!("{}", body.to_json_pretty()?);
        return Ok(());
    }

    let timeout = endpoint.timeout.map(Duration::from_secs);
    let client = GeneratorClient::new(endpoint.config(), timeout)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Generating...");

    let rt = tokio::runtime::Runtime::new()?;
    let sent = rt.block_on(client.send(&body));
    pb.finish_and_clear();
    let response = sent?;

    let generation = logoprint::from_response(
        response.status,
        &response.body,
        &layout.convert_options(),
    );

    if show_raw {
        println!("{}", "Raw response".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", logoprint::ResponsePayload::parse(&response.body).to_display());
        println!("{}", "─".repeat(40).dimmed());
    }

    let generation = generation?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(preview::default_output_path);
    preview::write_preview(&path, &generation.document)?;

    if generation.reported_failure() {
        println!(
            "{}",
            "The API answered ok=false. Check the raw response (--show-raw).".yellow()
        );
    } else {
        println!("{} {}", "Done.".green().bold(), describe(&generation.document));
    }
    println!("{} {}", "Saved to".green(), path.display());

    if print {
        print_preview(&path);
    }

    Ok(())
}

fn cmd_render(
    input: &Path,
    layout: &LayoutArgs,
    json: bool,
    output: Option<&Path>,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    let options = layout.convert_options();
    let document = if json {
        logoprint::from_response(200, &raw, &options)?.document
    } else {
        logoprint::to_printable_with_options(&raw, &options)?
    };
    info!("{}", describe(&document));

    match output {
        Some(path) => {
            preview::write_preview(path, &document)?;
            println!("{} {}", "Saved to".green(), path.display());
            if print {
                print_preview(path);
            }
        }
        None => {
            print!("{}", document);
            if print {
                eprintln!(
                    "{}",
                    "--print needs --output; nothing to open.".yellow()
                );
            }
        }
    }

    Ok(())
}

/// Open the preview for printing; a failure here never fails the command.
fn print_preview(path: &Path) {
    if let Err(e) = preview::open_for_printing(path) {
        eprintln!("{}: {}", "Print".yellow().bold(), e);
    }
}

fn describe(doc: &PrintableDocument) -> String {
    match doc.source {
        DocumentSource::Embedded => "Generator returned a complete document.".to_string(),
        DocumentSource::Wrapped => "Generator returned printable HTML.".to_string(),
        DocumentSource::CardGrid { filled, slots } => {
            format!("{} of {} cards filled.", filled, slots)
        }
    }
}

fn cmd_version() {
    println!("{} {}", "logoprint".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Printable speech-therapy card sheets");
    println!();
    println!("License: MIT");
}
