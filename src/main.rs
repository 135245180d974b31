use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use mesh2json::config::{FileConfig, MAX_INDENT};
use mesh2json::domain::Scene;
use mesh2json::export::{ExportDocument, ExportReport, export_active, validate_document};
use mesh2json::host::EarcutOps;
use mesh2json::obj::{load_scene, parse_obj, parser::DEFAULT_OBJECT_NAME};

/// Export the triangulated geometry of a mesh object to flat vertex/index JSON
///
/// The output lands next to the document as {object}_model_data.json.
/// Vertices are converted from Z-up to Y-up: (x, y, z) -> (x, z, -y).
///
/// Examples:
///   # Export the first object in a file
///   mesh2json models/car.obj
///
///   # Export a specific object with compact output
///   mesh2json models/city.obj --object Tower --indent 0
///
///   # Check the written file for out-of-range indices and degenerate triangles
///   mesh2json models/car.obj --validate
#[derive(Parser, Debug)]
#[command(name = "mesh2json")]
#[command(version, about, long_about = None)]
struct Args {
    /// OBJ document to load, or "-" to read from stdin (no output path then)
    document: PathBuf,

    /// Path to config file (optional, auto-searches mesh2json.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the object to export (defaults to the first object)
    #[arg(short = 'n', long)]
    object: Option<String>,

    /// Suffix appended to the object name in the output file name
    #[arg(long)]
    suffix: Option<String>,

    /// Spaces per JSON indentation level, 0 for compact output
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_INDENT as i64))]
    indent: Option<u8>,

    /// Validate the written file
    #[arg(long)]
    validate: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str::<FileConfig>(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let mut options = file_config.export_options();
    if let Some(suffix) = args.suffix.clone() {
        options.suffix = suffix;
    }
    if let Some(indent) = args.indent {
        options.indent = indent as usize;
    }
    let object_name = args.object.clone().or_else(|| file_config.object.clone());
    let verbose = args.verbose || file_config.verbose;
    let validate = args.validate || file_config.validate;

    if verbose {
        println!("Configuration:");
        println!("  Document: {}", args.document.display());
        if let Some(ref name) = object_name {
            println!("  Object: {}", name);
        }
        println!("  Suffix: {}", options.suffix);
        println!("  Indent: {}", options.indent);
        println!("  Validate: {}", if validate { "enabled" } else { "disabled" });
        println!();
    }

    let spinner = create_spinner("Loading document...")?;
    let start = Instant::now();
    let mut scene = load_document(&args.document)?;
    spinner.finish_with_message(format!(
        "Loaded {} objects [{:.1}s]",
        scene.objects.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        for object in &scene.objects {
            let (polygons, triangles) = object
                .mesh
                .as_ref()
                .map(|m| (m.polygons.len(), m.triangle_count()))
                .unwrap_or((0, 0));
            println!(
                "  {} ({}, {} polygons, {} triangles)",
                object.name, object.kind, polygons, triangles
            );
        }
    }

    if let Some(ref name) = object_name
        && !scene.set_active_by_name(name)
    {
        bail!("Object not found in document: {}", name);
    }

    if verbose && let Some(active) = scene.active_object() {
        println!("  Active object: {}", active.name);
    }

    let spinner = create_spinner("Triangulating and exporting...")?;
    let start = Instant::now();
    let report = export_active(&mut EarcutOps::new(), &mut scene, &options)
        .context("Failed to export mesh")?;
    spinner.finish_with_message(format!(
        "{} [{:.1}s]",
        report.summary(),
        start.elapsed().as_secs_f32()
    ));

    print_diagnostics(&report, verbose);

    if validate && let Some(ref path) = report.output {
        let document = ExportDocument::read_from(path).context("Failed to re-read exported file")?;
        let result = validate_document(&document);
        println!("{}", result.summary());
        for warning in &result.warnings {
            eprintln!("  Warning: {}", warning);
        }
    }

    if verbose {
        println!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

/// Load an OBJ document from disk, or from stdin when the path is "-"
fn load_document(path: &Path) -> Result<Scene> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read OBJ from stdin")?;
        return parse_obj(&source, DEFAULT_OBJECT_NAME, None).context("Failed to parse OBJ from stdin");
    }
    load_scene(path)
}

fn print_diagnostics(report: &ExportReport, verbose: bool) {
    for diagnostic in &report.diagnostics {
        if diagnostic.is_warning() {
            eprintln!("{}", diagnostic);
        } else {
            println!("{}", diagnostic);
        }
    }

    if report.written() && report.has_warnings() {
        eprintln!("Exported with warnings; the index list may be incomplete");
    }

    if verbose && report.converted_polygons > 0 {
        println!(
            "  Converted {} polygons to triangles",
            report.converted_polygons
        );
    }
}

fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(pb)
}
