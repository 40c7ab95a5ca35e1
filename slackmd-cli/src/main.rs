// Command-line interface for slackmd
//
// This binary converts a Slack workspace export into a directory of Markdown pages.
//
// The inspect command is a development aid: it shows how a single message text is
// scanned and rendered, without needing a whole export.
//
// The conversion itself lives in slackmd-babel; this crate only wires configuration,
// logging and argument parsing around it.
//
// Usage:
//  slackmd <export-dir> -o <out-dir> [--chunk-size N]          - Convert an export (default)
//  slackmd convert <export-dir> -o <out-dir> [--chunk-size N]  - Same as above (explicit)
//  slackmd inspect <file> [<transform>]                        - Execute a transform (defaults to "events-simple")
//  slackmd --list-transforms                                   - List available transforms
//
// Extra Parameters:
//
// Settings without a dedicated flag can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them over the loaded configuration.
// Example:
//  slackmd export/ -o site/ --extra-title "Team History" --extra-utc-offset +09:00

use slackmd_cli::inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use slackmd_babel::publish;
use slackmd_config::{Loader, SlackmdConfig};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Values may look like offsets ("-05:00"), so only a double dash ends one
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with("--"))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("slackmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Slack workspace exports to Markdown")
        .long_about(
            "slackmd turns an unpacked Slack export into browsable Markdown pages.\n\n\
            Commands:\n  \
            - convert: Write index, user, channel and history pages (default)\n  \
            - inspect: Show how a single message text is scanned and rendered\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            slackmd export/ -o site/                     # Convert with defaults\n  \
            slackmd export/ -o site/ --chunk-size 50     # Smaller history pages\n  \
            slackmd inspect message.txt events-json      # View scanned events"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a slackmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug output); RUST_LOG takes precedence")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Slack export to Markdown (default command)")
                .long_about(
                    "Convert an unpacked Slack export into Markdown pages.\n\n\
                    The export directory must contain channels.json, users.json and one\n\
                    directory of daily history files per channel.\n\n\
                    Pages written:\n  \
                    - index.md:                 channel list and link to users\n  \
                    - users.md:                 user table\n  \
                    - channel--<name>.md:       purpose, topic and history pages\n  \
                    - history--<name>--<n>.md:  messages, --chunk-size per page\n\n\
                    Examples:\n  \
                    slackmd convert export/ -o site/\n  \
                    slackmd export/ -o site/ --utc-offset +09:00   # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Slack export directory")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Directory receiving the Markdown pages")
                        .required(true)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("chunk-size")
                        .long("chunk-size")
                        .help("Messages per history page")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Heading of the index page"),
                )
                .arg(
                    Arg::new("utc-offset")
                        .long("utc-offset")
                        .help("Zone for message times: local, utc or +HH:MM")
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how message text is scanned and rendered")
                .long_about(
                    "Read raw Slack message text from a file and show one processing stage.\n\n\
                    Transforms:\n  \
                    - events-simple:  scanned events, one per line (default)\n  \
                    - events-json:    scanned events as JSON\n  \
                    - markdown:       inline Markdown, mentions unresolved\n\n\
                    Examples:\n  \
                    slackmd inspect message.txt\n  \
                    slackmd inspect message.txt markdown"
                )
                .arg(
                    Arg::new("path")
                        .help("File holding the message text")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'events-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches
                .get_one::<String>("output")
                .expect("output is required");
            if let Some(size) = sub_matches.get_one::<usize>("chunk-size") {
                config.archive.chunk_size = *size;
            }
            if let Some(title) = sub_matches.get_one::<String>("title") {
                config.render.title = title.clone();
            }
            if let Some(offset) = sub_matches.get_one::<String>("utc-offset") {
                config.render.utc_offset = offset.clone();
            }
            handle_convert_command(input, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: &str, config: &SlackmdConfig) {
    let spec = config.publish_spec(input, output).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let report = publish(&spec).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    println!(
        "Wrote {} pages ({} messages) to {output}",
        report.files.len(),
        report.messages
    );
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &SlackmdConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let params = build_inspect_params(config, extra_params);

    let output = inspect::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  events    - Scanned mrkdwn event stream");
    println!("  markdown  - Rendered inline Markdown\n");

    println!("Available transform combinations:");
    for transform_name in inspect::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SlackmdConfig {
    let loader = Loader::new().with_optional_file("slackmd.toml");
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

fn apply_config_overrides(config: &mut SlackmdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["chunk-size", "chunk_size"]) {
        config.archive.chunk_size = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid number '{raw}' for --extra-chunk-size");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.render.title = raw;
    }
    if let Some(raw) = take_override(extra_params, &["utc-offset", "utc_offset", "tz"]) {
        config.render.utc_offset = raw;
    }
    if let Some(raw) = take_override(extra_params, &["pretty", "pretty-json"]) {
        config.inspect.pretty_json = parse_bool_arg("pretty", &raw);
    }
}

fn build_inspect_params(
    config: &SlackmdConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "pretty".to_string(),
        if config.inspect.pretty_json {
            "true".to_string()
        } else {
            "false".to_string()
        },
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
