//! formtab CLI - collect PDF form data into a spreadsheet

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use formtab::config::load_or_default;
use formtab::{
    scan_headers, ExportEvent, ExportOptions, ExportTrigger, Exporter, HeaderSet,
    JsonSettingsStore, Settings, SettingsStore,
};

#[derive(Parser)]
#[command(name = "formtab")]
#[command(version)]
#[command(about = "Collect PDF form field values into an Excel spreadsheet", long_about = None)]
struct Cli {
    /// Settings file (defaults to the per-user data directory)
    #[arg(long, global = true, value_name = "FILE", env = "FORMTAB_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every PDF form in a directory to a new spreadsheet
    Export {
        /// Directory containing the PDF forms (last used if omitted)
        #[arg(value_name = "DIR")]
        input: Option<PathBuf>,

        /// Directory to write the spreadsheet to (last used if omitted)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Comma separated columns instead of the first form's fields
        #[arg(long, value_name = "NAMES")]
        headers: Option<String>,

        /// Do not fit column widths to their content
        #[arg(long)]
        no_autofit: bool,

        /// Do not open the output folder afterwards
        #[arg(long)]
        no_open: bool,
    },

    /// List the columns an export would use
    Fields {
        /// Directory containing the PDF forms (last used if omitted)
        #[arg(value_name = "DIR")]
        input: Option<PathBuf>,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Remember an input directory
    SetInput {
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
    /// Remember an output directory
    SetOutput {
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let store = cli
        .settings
        .map(JsonSettingsStore::new)
        .unwrap_or_else(JsonSettingsStore::default_location);

    let result = match cli.command {
        Some(Commands::Export {
            input,
            output,
            headers,
            no_autofit,
            no_open,
        }) => cmd_export(&store, input, output, headers.as_deref(), no_autofit, no_open),
        Some(Commands::Fields { input, json }) => cmd_fields(&store, input, json),
        Some(Commands::Config { action }) => {
            cmd_config(&store, action.unwrap_or(ConfigAction::Show))
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: formtab export [DIR] [-o DIR]".yellow());
            println!("       formtab --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Fill missing paths from saved settings and remember the ones given.
fn resolve_paths(
    store: &JsonSettingsStore,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Settings {
    let mut settings = load_or_default(store);
    let changed = input.is_some() || output.is_some();
    if let Some(input) = input {
        settings.input_path = input;
    }
    if let Some(output) = output {
        settings.output_path = output;
    }
    if changed {
        if let Err(e) = store.save(&settings) {
            log::warn!("Could not save settings: {}", e);
        }
    }
    settings
}

fn cmd_export(
    store: &JsonSettingsStore,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    headers: Option<&str>,
    no_autofit: bool,
    no_open: bool,
) -> CliResult {
    let settings = resolve_paths(store, input, output);

    let mut options = ExportOptions::new().with_autofit(!no_autofit);
    if let Some(list) = headers {
        let headers = HeaderSet::parse_list(list);
        if headers.is_empty() {
            return Err("--headers needs at least one field name".into());
        }
        options = options.with_headers(headers);
    }

    println!(
        "{} {}",
        "Reading forms from".cyan(),
        settings.input_path.display()
    );

    let pb = ProgressBar::hidden();
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let exporter = Exporter::new(options);
    let trigger = ExportTrigger::new();
    let result = trigger.run(|| {
        exporter.export_with_progress(
            &settings.input_path,
            &settings.output_path,
            |event| match event {
                ExportEvent::Started { total } => {
                    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
                    pb.set_length(total as u64);
                }
                ExportEvent::Converted { path, .. } => {
                    pb.set_message(file_label(path));
                    pb.inc(1);
                }
                ExportEvent::Failed { path, .. } => {
                    pb.println(format!("  {} {}", "skipped".yellow(), file_label(path)));
                    pb.inc(1);
                }
                ExportEvent::Saved { .. } => pb.finish_and_clear(),
            },
        )
    });
    pb.finish_and_clear();
    let result = result?;

    let summary = result.summary();
    if result.failed() > 0 {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary.green());
    }
    println!("  {} {}", "└─".dimmed(), result.output_path.display());

    if !no_open {
        if let Err(e) = reveal_in_file_browser(&settings.output_path) {
            log::warn!("Could not open {}: {}", settings.output_path.display(), e);
        }
    }

    Ok(())
}

fn cmd_fields(store: &JsonSettingsStore, input: Option<PathBuf>, json: bool) -> CliResult {
    let settings = resolve_paths(store, input, None);

    let Some((source, headers)) = scan_headers(&settings.input_path)? else {
        return Err("No PDF file in this directory has a readable form".into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&headers)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns from".cyan().bold(),
        file_label(&source)
    );
    println!("{}", "─".repeat(40).dimmed());
    for (i, name) in headers.iter().enumerate() {
        println!("{:>3}  {}", i + 1, name);
    }
    if headers.is_empty() {
        println!("{}", "(form has no named fields)".dimmed());
    }

    Ok(())
}

fn cmd_config(store: &JsonSettingsStore, action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Show => {
            let settings = load_or_default(store);
            println!("{}", "Settings".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            println!("{}: {}", "File".bold(), store.path().display());
            println!("{}: {}", "Input".bold(), settings.input_path.display());
            println!("{}: {}", "Output".bold(), settings.output_path.display());
            println!("{}: {:?}", "Format".bold(), settings.export_format);
        }
        ConfigAction::SetInput { path } => {
            let settings = load_or_default(store).with_input_path(path);
            store.save(&settings)?;
            println!("{} {}", "Input set to".green(), settings.input_path.display());
        }
        ConfigAction::SetOutput { path } => {
            let settings = load_or_default(store).with_output_path(path);
            store.save(&settings)?;
            println!(
                "{} {}",
                "Output set to".green(),
                settings.output_path.display()
            );
        }
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "formtab".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF form to spreadsheet exporter");
    println!();
    println!("License: MIT");
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open a directory in the platform file browser.
fn reveal_in_file_browser(dir: &Path) -> std::io::Result<()> {
    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    Command::new(program).arg(dir).spawn().map(|_| ())
}
