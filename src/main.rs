// ABOUTME: Main entry point for the json-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use json_slides::{
    utils, write_html_to_file, Config, ErrorReport, ExportResponse, HtmlExporter,
    PresentationEngine, ProcessResponse, SlideApp, SlideError, StyleSheet,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the first slide of a manifest as a preview fragment
    Preview(PreviewArgs),

    /// Export a manifest as a standalone HTML document
    Export(ExportArgs),

    /// Validate and render a manifest without writing anything
    Check(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Path to the JSON manifest
    #[arg(short, long)]
    input: PathBuf,

    /// Print a JSON response object instead of plain output
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PreviewArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write the preview to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// Local CSS files appended after the built-in styles
    #[arg(long, value_delimiter = ',')]
    css: Option<Vec<String>>,

    /// Language attribute of the exported document
    #[arg(long)]
    lang: Option<String>,

    /// Leave out the navigation controls
    #[arg(long)]
    no_nav: bool,
}

fn read_manifest(path: &Path) -> anyhow::Result<String> {
    utils::validate_file_exists(path)?;
    fs::read_to_string(path).with_context(|| format!("Failed to read manifest {:?}", path))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_preview(args: &PreviewArgs, config: &Config) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.input.input)?;
    let mut app = SlideApp::from_config(config)?;
    let result = app.process(&manifest);

    if args.input.json {
        let failed = result.is_err();
        print_json(&ProcessResponse::from(result))?;
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let preview = result?;
    match &args.output {
        Some(output) => {
            write_html_to_file(&preview, output)?;
            println!("Preview written: {:?}", output);
        }
        None => println!("{}", preview),
    }
    Ok(())
}

fn run_export(args: &ExportArgs, config: &Config) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.input.input)?;

    let mut config = config.clone();
    if let Some(css) = &args.css {
        config
            .extra_css
            .extend(css.iter().map(|path| StyleSheet::new(path)));
    }
    let navigation = if args.no_nav { Some(false) } else { None };
    let exporter = HtmlExporter::new(config.get_export_config(args.lang.clone(), navigation));
    let extra_styles = json_slides::resources::load_extra_styles(&config.extra_css)?;

    let mut app =
        SlideApp::with_parts(PresentationEngine::new(), exporter).with_extra_styles(extra_styles);
    let result = app.process(&manifest).and_then(|_| app.export_full());

    if args.input.json {
        let failed = result.is_err();
        print_json(&ExportResponse::from(result))?;
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let document = result?;
    write_html_to_file(&document, &args.output)?;
    println!("HTML generated successfully: {:?}", args.output);
    Ok(())
}

fn run_check(args: &InputArgs) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.input)?;
    match PresentationEngine::new().process(&manifest) {
        Ok(presentation) => {
            println!(
                "OK: \"{}\" renders {} slide(s)",
                presentation.metadata.title,
                presentation.slide_count()
            );
            Ok(())
        }
        Err(e) if args.json => {
            print_json(&ErrorReport::from(&e))?;
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_env();

    let result = match &cli.command {
        Commands::Preview(args) => run_preview(args, &config),
        Commands::Export(args) => run_export(args, &config),
        Commands::Check(args) => run_check(args),
    };

    if let Err(e) = result {
        match e.downcast_ref::<SlideError>() {
            Some(slide_error) => eprintln!("Error: {}", slide_error),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
