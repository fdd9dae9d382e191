use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the dialect names from capture-babel's DialectTag.
// Build scripts can't depend on the crate they build alongside.
const AVAILABLE_DIALECTS: &[&str] = &["org", "org-mode", "orgmode", "markdown", "md"];

fn dialect_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .help("Target dialect")
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_DIALECTS))
        .value_hint(ValueHint::Other)
}

fn capture_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .help("Styled document used as the capture body")
            .index(1)
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("url")
            .long("url")
            .help("Source URL")
            .value_hint(ValueHint::Url),
    )
    .arg(Arg::new("title").long("title").help("Capture title"))
    .arg(dialect_arg())
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("capture")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render captured rich text as Org-mode or Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List available dialects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a capture.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a styled document")
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
                        .help("Output file path")
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
            capture_args(Command::new("url").about("Print the org-protocol URL for a capture"))
                .arg(Arg::new("template").long("template").help("org-capture template key"))
                .arg(
                    Arg::new("protocol")
                        .long("protocol")
                        .help("org-protocol handler")
                        .value_parser(["capture", "store-link"]),
                ),
        )
        .subcommand(
            capture_args(Command::new("message").about("Print the clipboard message for a capture"))
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .help("Message shape")
                        .value_parser(["capture", "link"]),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "capture", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "capture", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "capture", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
