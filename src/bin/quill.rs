//! Command-line interface for quill
//! This binary renders quill documents to HTML and dumps their token trees for inspection.
//!
//! Usage:
//!   quill render `<path>` [--external-anchor] [--ordered-splice] [--config `<file>`]  - Render to HTML
//!   quill tokens `<path>` [--format `<format>`] [--config `<file>`]                     - Print the token tree
//!   quill list-formats                                                               - List inspection formats
//!
//! A path of `-` reads the document from stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use quill::quill::config::Loader;
use quill::{Processor, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render markdown-like text to HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document to HTML")
                .arg(path_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("external-anchor")
                        .long("external-anchor")
                        .help("Open rendered links in a new tab")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ordered-splice")
                        .long("ordered-splice")
                        .help("Splice children by searching after the previous child only")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the scanned token tree")
                .arg(path_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (json, yaml, tag); defaults to the configured format"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available token tree formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let outcome = match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the document, or - for stdin")
        .required(true)
        .index(1)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML configuration file layered over the defaults")
}

/// Logs go to stderr so stdout only carries HTML or token output.
/// `QUILL_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("QUILL_LOG").unwrap_or_else(|_| EnvFilter::new(directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Defaults, then the `--config` file, then `QUILL_*` environment variables
fn config_loader(matches: &ArgMatches) -> Loader {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.with_env()
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Result<()> {
    let mut loader = config_loader(matches);
    if matches.get_flag("external-anchor") {
        loader = loader.set_override("render.external_anchor", true)?;
    }
    if matches.get_flag("ordered-splice") {
        loader = loader.set_override("render.splice", "ordered")?;
    }
    let config = loader.build()?;
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = read_source(path)?;

    let processed = Processor::new(config).process(&source);
    tracing::info!(
        scan = ?processed.scan_time,
        render = ?processed.render_time,
        "rendered {}",
        path
    );
    print!("{}", processed.html);
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<()> {
    let config = config_loader(matches).build()?;
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = read_source(path)?;

    let processor = Processor::new(config);
    let output = match matches.get_one::<String>("format") {
        Some(format) => processor.inspect(&source, format)?,
        None => processor.inspect_default(&source)?,
    };
    println!("{}", output);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let processor = Processor::default();
    println!("Available token formats:\n");
    for formatter in processor.registry().formats() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
    }
}
