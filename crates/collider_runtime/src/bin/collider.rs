//! Collider CLI entry point.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use collider_engine::LoaderConfig;
use collider_foundation::Error;
use collider_language::{Lexer, parse};
use collider_runtime::{Host, logging, roster, settings};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    settings: Option<PathBuf>,
    abilities: Option<PathBuf>,
    init_dir: Option<PathBuf>,
    verbose: bool,
    quiet: bool,
    clear: bool,
    show_help: bool,
    show_version: bool,
    // Dumps
    dump_tokens: bool,
    dump_ast: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "-q" | "--quiet" => config.quiet = true,
            "--clear" => config.clear = true,
            "--tokens" => config.dump_tokens = true,
            "--ast" => config.dump_ast = true,
            "-c" | "--config" => {
                config.settings = Some(required_value(&mut args, "--config")?);
            }
            "--abilities" => {
                config.abilities = Some(required_value(&mut args, "--abilities")?);
            }
            "--init" => {
                config.init_dir = Some(required_value(&mut args, "--init")?);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected extra argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn required_value(
    args: &mut impl Iterator<Item = String>,
    option: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("{option} requires a value").into())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("collider {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(if config.quiet {
        logging::QUIET_FILTER
    } else {
        logging::DEFAULT_FILTER
    });

    // Without --config, --init loads from the directory it just prepared
    let mut settings_path = config.settings.clone();
    if let Some(dir) = &config.init_dir {
        let created = settings::ensure_defaults(dir)?;
        settings_path.get_or_insert(created);
    }

    let abilities = match &config.abilities {
        Some(path) => roster::load(path)?,
        None => roster::core_table(),
    };

    let mut host = match settings_path {
        Some(path) => Host::from_settings(abilities, path)?,
        None => Host::new(abilities, LoaderConfig::default()),
    }
    .with_verbose(config.verbose)
    .with_clear_existing(config.clear);
    if let Some(file) = &config.file {
        host = host.with_source(file);
    }

    let source = host.config().source;
    if config.dump_tokens {
        dump_tokens(&source)?;
    }
    if config.dump_ast {
        dump_ast(&source)?;
    }

    let report = host.load()?;
    for collision in host.collisions().iter() {
        println!("{collision}");
    }
    eprintln!("{report}");

    Ok(())
}

fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn dump_tokens(path: &Path) -> Result<(), Error> {
    let content = read_source(path)?;
    println!("\x1b[1;36m=== Tokens ===\x1b[0m");
    for token in Lexer::tokenize_all(&content) {
        println!("{:>6}  {:<12} {}", token.span.to_string(), token.kind.name(), token.text);
    }
    println!();
    Ok(())
}

fn dump_ast(path: &Path) -> Result<(), Error> {
    let content = read_source(path)?;
    let parsed = parse(&content);
    println!("\x1b[1;36m=== Statements ===\x1b[0m");
    for statement in parsed.statements.iter().filter(|s| !s.is_empty()) {
        println!("{statement}");
    }
    if !parsed.errors.is_empty() {
        println!("({} lines rejected)", parsed.errors.len());
    }
    println!();
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCollider\x1b[0m - Collision rule loader

\x1b[1mUSAGE:\x1b[0m
    collider [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Rule file to load (overrides CollisionFile from settings)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -c, --config PATH       Read settings from a YAML file
    -v, --verbose           Log every group binding and rule operation
    -q, --quiet             Only log warnings
        --clear             Remove existing rules before loading
        --abilities PATH    Ability roster, one name per line
        --init DIR          Write default settings and rule file to DIR

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --tokens                Print the token stream before loading
    --ast                   Print parsed statements before loading

\x1b[1mEXAMPLES:\x1b[0m
    collider collisions.txt            Load a rule file and print the rules
    collider -c plugin/config.yml      Load the file named in the settings
    collider --init plugin             Create plugin/config.yml and load it
    collider -v --ast rules.txt        Show statements and every operation

Set RUST_LOG to change which log lines are printed."
    );
}
