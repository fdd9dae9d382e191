// Command-line interface for capture
//
// This binary renders captured rich text (styled documents in their JSON form) as Org-mode or
// Markdown, and builds the requests that hand a capture over to Emacs.
//
// The core capabilities use the capture-babel crate. This crate is only the shell around it:
// argument parsing, configuration, logging setup, file IO and exit codes.
//
// Converting:
//
// The target dialect is taken from --to, else from the output file extension, else from the
// configured default.
// Usage:
//  capture <doc.json> [--to <dialect>] [--output <file>]          - Convert a document (default)
//  capture convert <doc.json> [--to <dialect>] [--output <file>]  - Same as above (explicit)
//  capture detect <doc.json>                                      - Print the document flavor
//  capture url [<doc.json>] [--url <url>] [--title <title>]       - Print an org-protocol URL
//  capture message [<doc.json>] [--url <url>] [--title <title>]   - Print a clipboard message
//  capture --list-dialects                                        - List available dialects
//
// Logging goes to stderr so stdout only ever carries the rendered output. RUST_LOG wins over
// --verbose, which wins over the configured log.level.

use capture_babel::capture::{message, org_protocol_url, CapturePayload, OrgProtocol, PayloadKind};
use capture_babel::{detect, DialectRegistry, DialectTag, StyledDocument};
use capture_config::{CaptureConfig, Loader, LOCAL_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "detect", "url", "message", "help"];

fn dialect_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .help("Target dialect (org, markdown)")
        .long_help(
            "Target dialect to render into.\n\n\
            Available dialects: org (aliases org-mode, orgmode), markdown (alias md).\n\
            Use --list-dialects to see all options.",
        )
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("capture")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render captured rich text as Org-mode or Markdown")
        .long_about(
            "capture renders styled documents (rich text captured from an editor, in JSON form)\n\
            as Org-mode or Markdown, and builds the org-protocol requests that send a capture\n\
            to Emacs.\n\n\
            Commands:\n  \
            - convert: Render a document (default command)\n  \
            - detect:  Print whether a document is semantic or appearance flavored\n  \
            - url:     Build an org-protocol URL\n  \
            - message: Build a clipboard message\n\n\
            Examples:\n  \
            capture note.json                         # Render with the configured dialect\n  \
            capture note.json --to md                 # Render as Markdown (stdout)\n  \
            capture note.json -o note.org             # Dialect from the output extension\n  \
            capture url note.json --title Groceries   # org-protocol://capture?...",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List available dialects")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a capture.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a styled document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Styled document (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .long_help(
                            "Path to write the rendered output.\n\n\
                            If not specified, output is written to stdout.\n\
                            When --to is absent the dialect is detected from this extension.",
                        )
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Print the flavor of a styled document")
                .arg(
                    Arg::new("input")
                        .help("Styled document (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Print the org-protocol URL for a capture")
                .arg(
                    Arg::new("input")
                        .help("Styled document used as the capture body")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Source URL (http, https or file)")
                        .value_hint(ValueHint::Url),
                )
                .arg(Arg::new("title").long("title").help("Capture title"))
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help("org-capture template key"),
                )
                .arg(
                    Arg::new("protocol")
                        .long("protocol")
                        .help("org-protocol handler")
                        .value_parser(["capture", "store-link"]),
                )
                .arg(dialect_arg()),
        )
        .subcommand(
            Command::new("message")
                .about("Print the clipboard message for a capture")
                .arg(
                    Arg::new("input")
                        .help("Styled document used as the capture body")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Source URL (http, https or file)")
                        .value_hint(ValueHint::Url),
                )
                .arg(Arg::new("title").long("title").help("Capture title"))
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .help("Message shape")
                        .value_parser(["capture", "link"]),
                )
                .arg(dialect_arg()),
        )
}

/// Arguments with `convert` injected when the first argument is not a
/// subcommand or a flag.
fn with_default_command(args: &[String]) -> Option<Vec<String>> {
    match args.get(1) {
        Some(first) if !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()) => {
            let mut injected = vec![args[0].clone(), "convert".to_string()];
            injected.extend_from_slice(&args[1..]);
            Some(injected)
        }
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_command(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_tracing(&config, matches.get_flag("verbose"));

    if matches.get_flag("list-dialects") {
        handle_list_dialects_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        Some(("detect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_detect_command(input);
        }
        Some(("url", sub_matches)) => {
            handle_url_command(sub_matches, &config);
        }
        Some(("message", sub_matches)) => {
            handle_message_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(config: &CaptureConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {err}");
    }
}

fn read_document(path: &str) -> StyledDocument {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    StyledDocument::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error in '{path}': {e}");
        std::process::exit(1);
    })
}

/// Pick the target dialect: `--to`, then the output extension, then config.
fn resolve_dialect(
    registry: &DialectRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &CaptureConfig,
) -> Result<DialectTag, capture_babel::CaptureError> {
    if let Some(name) = to {
        return registry.get(name)?.name().parse();
    }
    if let Some(detected) = output.and_then(|path| registry.detect_dialect_from_filename(path)) {
        debug!(dialect = %detected, "dialect detected from output file");
        return detected.parse();
    }
    Ok(config.capture.dialect)
}

fn dialect_or_exit(
    registry: &DialectRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &CaptureConfig,
) -> DialectTag {
    resolve_dialect(registry, to, output, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Use --list-dialects to see the available dialects");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: Option<&str>, output: Option<&str>, config: &CaptureConfig) {
    let registry = DialectRegistry::default();
    let dialect = dialect_or_exit(&registry, to, output, config);

    let doc = read_document(input);
    let rendered = registry.translate(&doc, dialect.name()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    info!(input, %dialect, bytes = rendered.len(), "converted document");

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{rendered}");
        }
    }
}

/// Handle the detect command
fn handle_detect_command(input: &str) {
    let doc = read_document(input);
    println!("{}", detect(&doc));
}

/// A string argument, or `""` when absent or not defined for this subcommand.
fn field<'m>(matches: &'m ArgMatches, name: &str) -> &'m str {
    matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .map(|s| s.as_str())
        .unwrap_or("")
}

fn payload_from_matches(matches: &ArgMatches, config: &CaptureConfig) -> CapturePayload {
    let body = matches
        .get_one::<String>("input")
        .map(|path| read_document(path));

    if let Some(raw) = matches.get_one::<String>("url") {
        if !capture_babel::validate_url(raw) {
            eprintln!("Warning: ignoring '{raw}', only http, https and file URLs are accepted");
        }
    }

    let template = match field(matches, "template") {
        "" => config.capture.template.as_str(),
        template => template,
    };
    CapturePayload::from_fields(
        field(matches, "url"),
        field(matches, "title"),
        template,
        body,
    )
}

/// Handle the url command
fn handle_url_command(matches: &ArgMatches, config: &CaptureConfig) {
    let registry = DialectRegistry::default();
    let to = matches.get_one::<String>("to").map(|s| s.as_str());
    let dialect = dialect_or_exit(&registry, to, None, config);

    let protocol = match matches.get_one::<String>("protocol") {
        Some(raw) => raw.parse::<OrgProtocol>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => config.capture.protocol,
    };

    let payload = payload_from_matches(matches, config);
    let url = org_protocol_url(protocol, &payload, dialect).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{url}");
}

/// Handle the message command
fn handle_message_command(matches: &ArgMatches, config: &CaptureConfig) {
    let registry = DialectRegistry::default();
    let to = matches.get_one::<String>("to").map(|s| s.as_str());
    let dialect = dialect_or_exit(&registry, to, None, config);

    let kind = match matches.get_one::<String>("payload") {
        Some(raw) => raw.parse::<PayloadKind>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => config.capture.payload,
    };

    let payload = payload_from_matches(matches, config);
    match message(kind, &payload, dialect) {
        Some(text) => println!("{text}"),
        None => {
            eprintln!("Nothing to send: provide a document, --url or --title");
            std::process::exit(1);
        }
    }
}

/// Handle the list-dialects command
fn handle_list_dialects_command() {
    println!("Available dialects:\n");
    let registry = DialectRegistry::default();
    for name in registry.list_dialects() {
        if let Ok(dialect) = registry.get(&name) {
            println!(
                "  {name:<10} {} (.{})",
                dialect.description(),
                dialect.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> CaptureConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
