//! Wingman CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use wingman_runtime::{Repl, Session, SessionConfig, logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    data_path: Option<PathBuf>,
    batch_file: Option<PathBuf>,
    no_auto_save: bool,
    log_filter: Option<String>,
    show_help: bool,
    show_version: bool,
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
            "--no-auto-save" => config.no_auto_save = true,
            "-d" | "--data" => {
                let value = args.next().ok_or("--data requires a path")?;
                config.data_path = Some(PathBuf::from(value));
            }
            "-b" | "--batch" => {
                let value = args.next().ok_or("--batch requires a file")?;
                config.batch_file = Some(PathBuf::from(value));
            }
            "--log" => {
                let value = args.next().ok_or("--log requires a filter")?;
                config.log_filter = Some(value);
            }
            other => {
                return Err(format!("unknown option: {other}").into());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wingman {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = if cli.batch_file.is_some() {
        SessionConfig::batch()
    } else {
        SessionConfig::default()
    };
    if let Some(path) = cli.data_path {
        config = config.with_data_path(path);
    }
    if cli.no_auto_save {
        config = config.with_auto_save(false);
    }
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }

    logging::init(&config.log_filter)?;

    let session = Session::open(config)?;
    let mut repl = Repl::new()?.with_session(session);

    if let Some(file) = cli.batch_file {
        repl.eval_file(&file)?;
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWingman\x1b[0m - Flight operations manager

\x1b[1mUSAGE:\x1b[0m
    wingman [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -d, --data <PATH>      Data file to load and save (default: wingman.msgpack)
    -b, --batch <FILE>     Run the commands in FILE and exit
        --no-auto-save     Only save on an explicit 'save'
        --log <FILTER>     Log filter, e.g. wingman=debug (default: wingman=warn)

\x1b[1mENVIRONMENT:\x1b[0m
    WINGMAN_LOG            Overrides --log

\x1b[1mEXAMPLES:\x1b[0m
    wingman                          Start interactive session
    wingman -d ops.msgpack           Use ops.msgpack as the data file
    wingman -b roster.wing           Run roster.wing and exit
    wingman --log wingman=debug      Show link activity on stderr

Type 'help' inside the session for the command list."
    );
}
