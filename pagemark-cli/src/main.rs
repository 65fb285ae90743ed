// Command-line interface for pagemark
//
// This binary provides commands for normalizing, converting and classifying
// page content files.
//
// The main role of the pagemark program is to interface with stored page
// content. The core capabilities live in the pagemark-engine crate; this
// binary owns all process concerns (file I/O, exit codes, diagnostics).
//
// Normalizing:
//
// Normalization is the default command: content that scores as Markdown in
// disguise is rewritten as canonical HTML, everything else passes through
// byte identical.
// Usage:
//  pagemark <input> [-o <file>]                       - Normalize content (default)
//  pagemark normalize <input> [-o <file>]             - Same as above (explicit)
//  pagemark render <input> [--title <t>] [-o <file>]  - Render HTML to Markdown
//  pagemark check <input> [--json]                    - Classify without rewriting

use clap::{Arg, ArgAction, Command, ValueHint};
use pagemark_config::{Loader, PagemarkConfig};
use pagemark_engine::{
    export_document, looks_like_markdown_with, normalize_with, DetectionRules, NormalizeOptions,
};
use std::fs;

/// Subcommand names that must never be mistaken for an input file when
/// deciding whether to inject the default command.
const SUBCOMMANDS: &[&str] = &["normalize", "render", "check", "help"];

/// True when the invocation starts with something that looks like a file
/// rather than a subcommand or flag, so "normalize" should be injected.
fn should_inject_normalize(args: &[String]) -> bool {
    args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
}

fn build_cli() -> Command {
    Command::new("pagemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for normalizing and converting page content")
        .long_about(
            "pagemark is a command-line tool for working with stored page content.\n\n\
            Commands:\n  \
            - normalize: Rewrite Markdown-in-disguise as canonical HTML (default)\n  \
            - render:    Convert an HTML file to Markdown\n  \
            - check:     Report whether content scores as Markdown, without rewriting\n\n\
            Examples:\n  \
            pagemark page.html                        # Normalize to stdout\n  \
            pagemark normalize page.html -o out.html  # Normalize to a file\n  \
            pagemark render page.html                 # HTML to Markdown (stdout)\n  \
            pagemark check page.html --json           # Machine-readable verdict",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pagemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize page content to canonical HTML (default command)")
                .long_about(
                    "Normalize a content file to canonical HTML.\n\n\
                    Content that scores as Markdown in disguise is rendered to Markdown\n\
                    and compiled back to HTML; genuine HTML passes through byte identical.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    pagemark normalize page.html              # Normalize to stdout\n  \
                    pagemark normalize page.html -o out.html  # Normalize to a file\n  \
                    pagemark page.html                        # 'normalize' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
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
            Command::new("render")
                .about("Render an HTML content file to Markdown")
                .long_about(
                    "Render an HTML content file to Markdown.\n\n\
                    With --title, the result is a full export: a level-one heading with\n\
                    the title, a blank line, then the rendered body.\n\n\
                    Examples:\n  \
                    pagemark render page.html                        # Markdown to stdout\n  \
                    pagemark render page.html --title 'Weekly sync'  # Prepend a title heading\n  \
                    pagemark render page.html -o page.md             # Write a Markdown file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .value_name("TITLE")
                        .help("Document title to emit as a leading heading")
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
            Command::new("check")
                .about("Report whether content scores as Markdown in disguise")
                .long_about(
                    "Classify a content file without rewriting it.\n\n\
                    Prints 'markdown' or 'html'. The exit status is 0 when Markdown\n\
                    syntax is detected and 1 otherwise, so the command can gate\n\
                    scripted migrations.\n\n\
                    Examples:\n  \
                    pagemark check page.html          # Human-readable verdict\n  \
                    pagemark check page.html --json   # JSON verdict for tooling",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the verdict as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "normalize"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_normalize(&args) {
                let mut new_args = vec![args[0].clone(), "normalize".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "normalize" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a bare-file invocation, show the original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_normalize_command(input, output, &config);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let title = sub_matches.get_one::<String>("title").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, title, output);
        }
        Some(("check", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let json = sub_matches.get_flag("json");
            handle_check_command(input, json, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the normalize command
fn handle_normalize_command(input: &str, output: Option<&str>, config: &PagemarkConfig) {
    let source = read_input(input);
    let options = normalize_options_from_config(config);
    let normalized = normalize_with(&source, &options);
    write_output(output, &normalized);
}

/// Handle the render command
fn handle_render_command(input: &str, title: Option<&str>, output: Option<&str>) {
    let source = read_input(input);
    let mut markdown = export_document(title, &source);
    if !markdown.is_empty() {
        markdown.push('\n');
    }
    write_output(output, &markdown);
}

/// Handle the check command
fn handle_check_command(input: &str, json: bool, config: &PagemarkConfig) {
    let source = read_input(input);
    let rules = DetectionRules::from(&config.detect.rules);
    let verdict = looks_like_markdown_with(&source, &rules);

    if json {
        let payload = serde_json::json!({
            "input": input,
            "markdown": verdict,
        });
        println!("{payload}");
    } else if verdict {
        println!("markdown");
    } else {
        println!("html");
    }

    if !verdict {
        std::process::exit(1);
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> PagemarkConfig {
    let loader = Loader::new().with_optional_file("pagemark.toml");
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

fn normalize_options_from_config(config: &PagemarkConfig) -> NormalizeOptions {
    NormalizeOptions {
        detection: (&config.detect.rules).into(),
        compile: (&config.convert.markdown).into(),
    }
}
