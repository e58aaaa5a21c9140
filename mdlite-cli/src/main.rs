// Command-line interface for mdlite
//
// This binary converts restricted Markdown (bold, italic, monospace and fenced preformatted
// blocks) into HTML or one of the other registered formats, and can print debug views of a
// parsed document.
//
// The conversion itself lives in mdlite-babel; this crate only deals with arguments, files,
// configuration and exit codes.
//
// Usage:
//  mdlite <input> [--to <format>] [--output <file>]           - Convert (default command)
//  mdlite convert <input> [--to <format>] [--output <file>]   - Same as above (explicit)
//  mdlite inspect <input> [<transform>]                      - Print a debug view of the document
//  mdlite --list-formats                                      - List conversion formats
//  mdlite --list-transforms                                   - List inspect transforms
//
// An input of "-" reads from stdin. Without --to, the format comes from the configuration
// (convert.format, "html" by default).

use mdlite_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdlite_babel::{FormatError, FormatRegistry, SOURCE_FORMAT};
use mdlite_config::{Loader, MdliteConfig, LOCAL_CONFIG_FILE};
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("mdlite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert restricted Markdown to HTML and other formats")
        .long_about(
            "mdlite converts a small Markdown dialect to HTML.\n\n\
            Supported markup:\n  \
            **bold**  _italic_  `monospace`  and ``` fenced preformatted blocks\n\n\
            Nested markup and unclosed markup are errors.\n\n\
            Examples:\n  \
            mdlite notes.md                      # HTML to stdout\n  \
            mdlite notes.md --to ansi            # Styled terminal output\n  \
            mdlite notes.md -o notes.html        # HTML to a file\n  \
            cat notes.md | mdlite -              # Read from stdin\n  \
            mdlite inspect notes.md ast-json     # Show the parsed document",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available conversion formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdlite.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress and error details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to convert.format from the configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a debug view of the parsed document")
                .arg(
                    Arg::new("path")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (defaults to inspect.transform from the configuration)")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let matches = parse_args(&args);

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }
    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.convert.format.clone());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &to, output);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .cloned()
                .unwrap_or_else(|| config.inspect.transform.clone());
            handle_inspect_command(path, &transform);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Parse arguments, injecting `convert` when the first argument is not a subcommand.
fn parse_args(args: &[String]) -> ArgMatches {
    let cli = build_cli();
    match cli.clone().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    }
}

fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    let looks_like_input = first == "-" || !first.starts_with('-');
    if !looks_like_input || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut new_args = vec![args[0].clone(), "convert".to_string()];
    new_args.extend_from_slice(&args[1..]);
    Some(new_args)
}

/// Logs go to stderr; --verbose enables INFO, otherwise RUST_LOG decides (WARN if unset).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: &str, output: Option<&str>) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_source(input);
    info!(input, to, "converting");

    let result = registry
        .convert(&source, SOURCE_FORMAT, to)
        .unwrap_or_else(|e| {
            if let FormatError::Markup(markup) = &e {
                info!("{}", markup.detail());
            }
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            debug!(path, "wrote output");
        }
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str) {
    let source = read_source(path);

    let output = transforms::execute_transform(&source, transform).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {:<10} {}", name, format.description());
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn read_source(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> MdliteConfig {
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
