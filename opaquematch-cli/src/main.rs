use clap::Parser;
use opaquematch::io::load_rgba_image;
use opaquematch::{MatchResult, SearchConfig, Session, CHANNELS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Find an exact RGBA sprite inside images")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Template image (overrides `template_path`).
    #[arg(short, long, value_name = "FILE")]
    template: Option<String>,
    /// Haystack image; repeat to search several (overrides `haystack_paths`).
    #[arg(long = "haystack", value_name = "FILE")]
    haystacks: Vec<String>,
    /// Scan candidate rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    template_path: String,
    haystack_paths: Vec<String>,
    output_path: Option<String>,
    parallel: bool,
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    path: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<usize>,
}

impl MatchRecord {
    fn new(path: &str, result: MatchResult) -> Self {
        match result.position() {
            Some((x, y)) => tracing::info!(path, x, y, "sprite found"),
            None => tracing::info!(path, "sprite not found"),
        }
        Self {
            path: path.to_string(),
            found: result.found,
            x: result.found.then_some(result.x),
            y: result.found.then_some(result.y),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    template_path: String,
    sample_count: usize,
    matches: Vec<MatchRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("opaquematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str::<Config>(&text)?
        }
        None => Config::default(),
    };
    if let Some(template) = cli.template {
        config.template_path = template;
    }
    if !cli.haystacks.is_empty() {
        config.haystack_paths = cli.haystacks;
    }
    config.parallel |= cli.parallel;

    if config.template_path.is_empty() {
        return Err("template_path must be set (config file or --template)".into());
    }
    if config.haystack_paths.is_empty() {
        return Err("at least one haystack is required (config file or --haystack)".into());
    }

    let template_img = load_rgba_image(&config.template_path)?;
    let mut session = Session::with_config(SearchConfig {
        parallel: config.parallel,
    });
    let sample_count = session.compile(
        template_img.data(),
        template_img.width(),
        template_img.height(),
        CHANNELS,
    )?;

    let mut matches = Vec::with_capacity(config.haystack_paths.len());
    for path in &config.haystack_paths {
        let frame = load_rgba_image(path)?;
        let result = session.search(frame.data(), frame.width(), frame.height(), CHANNELS)?;
        matches.push(MatchRecord::new(path, result));
    }

    let output = Output {
        template_path: config.template_path,
        sample_count,
        matches,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
