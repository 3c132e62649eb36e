use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use mkindex::clock::SystemClock;
use mkindex::{catalog, config, output, render};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mkindex")]
#[command(about = "Generates a document index with titles and descriptions")]
#[command(long_about = "\
Generates a document index with titles and descriptions

Every .html file directly inside --path becomes one entry in
<output>/index.html, sorted by title. An existing index.html in the input
directory is never listed.

Metadata resolution:
  Title:       first <h1> → file name without extension
  Description: first <p> after that <h1>, max 160 chars → placeholder

Page strings, the placeholder, and colors can be changed in mkindex.toml
(looked up in --path, or given with --config). Run 'mkindex --gen-config'
for a documented template.")]
#[command(after_help = "\
Examples:
  mkindex --path ./docs --output ./indice
  mkindex -p ./html -o .")]
#[command(version = version_string())]
struct Cli {
    /// Directory with HTML files
    #[arg(short = 'p', long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output directory for index.html [default: current directory]
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file (default: mkindex.toml in --path, if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List what would be indexed without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print a stock mkindex.toml with all options documented
    #[arg(long)]
    gen_config: bool,

    /// Show the catalog and progress logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e),
    };

    init_tracing(cli.verbose);

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let Some(source) = cli.path.as_deref() else {
        eprintln!("Error: an input directory is required (--path)");
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    if !source.exists() {
        eprintln!("Error: directory does not exist: {}", source.display());
        return ExitCode::FAILURE;
    }

    match run(&cli, source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, source: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(cli.config.as_deref(), source)?;
    let placeholder = &config.extract.placeholder;

    let entries = catalog::build_catalog(source, placeholder)?;

    if cli.dry_run {
        output::print_catalog(&entries, placeholder);
        return Ok(());
    }
    if cli.verbose {
        output::print_catalog(&entries, placeholder);
    }

    let output_dir = resolve_output_dir(cli.output.as_deref())?;
    let index_path = render::write_index(&entries, &output_dir, &config, &SystemClock)?;
    println!("{}", output::format_success(&index_path));
    Ok(())
}

/// Help and version go to stdout with exit 0; every other parse failure is a
/// usage error with exit 1.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// No `--output`, `.` and `./` all mean the absolute current directory.
fn resolve_output_dir(output: Option<&Path>) -> std::io::Result<PathBuf> {
    match output {
        Some(path) if path != Path::new(".") && path != Path::new("./") => Ok(path.to_path_buf()),
        _ => std::env::current_dir(),
    }
}

/// Logs go to stderr; stdout carries only listings and the result line.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mkindex=info"
    } else {
        "mkindex=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
