mod error;
mod logger;

use ansi_term::Color;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use error::CliError;
use harrier::ast::Problem;
use std::{fs::File, io::BufReader, path::Path};

const APP_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

fn app() -> App<'static, 'static> {
    const FILES_HELP: &str = "The TPTP problem files to read";

    let subcommands = vec![
        SubCommand::with_name("parse")
            .about("Parses problem files and prints them back in canonical form")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name("files")
                    .required(true)
                    .multiple(true)
                    .help(FILES_HELP),
            ),
        SubCommand::with_name("check")
            .about(
                "Parses problem files and checks that each AST survives a \
                serialization round trip",
            )
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name("files")
                    .required(true)
                    .multiple(true)
                    .help(FILES_HELP),
            ),
    ];
    App::new("harrier")
        .version(APP_VERSION.unwrap_or("unknown"))
        .about("A parser for the TPTP input languages")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .possible_values(&["off", "error", "warn", "info"])
                .default_value("warn")
                .help("Sets the maximum logging level"),
        )
        .arg(
            Arg::with_name("no-color")
                .long("no-color")
                .help("Disables colored output"),
        )
        .subcommands(subcommands)
}

fn main() {
    use log::LevelFilter;

    let matches = app().get_matches();
    let level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        _ => unreachable!(),
    };
    let colors_enabled = !matches.is_present("no-color");
    logger::init(level, colors_enabled);

    if let Err(e) = run_app(&matches) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_app(matches: &ArgMatches) -> Result<(), CliError> {
    if let Some(matches) = matches.subcommand_matches("parse") {
        parse_subcommand(matches)
    } else if let Some(matches) = matches.subcommand_matches("check") {
        check_subcommand(matches)
    } else {
        unreachable!()
    }
}

fn parse_file(path: &str) -> Result<Problem, CliError> {
    let file = BufReader::new(File::open(path)?);
    Ok(harrier::parse_problem(file)?)
}

fn parse_subcommand(matches: &ArgMatches) -> Result<(), CliError> {
    for path in matches.values_of("files").unwrap() {
        let problem = parse_file(path)?;
        print!("{}", problem);
    }
    Ok(())
}

fn check_subcommand(matches: &ArgMatches) -> Result<(), CliError> {
    let mut failures = 0;
    for path in matches.values_of("files").unwrap() {
        match check_file(path) {
            Ok(()) => println!("{} {}", Color::Green.paint("ok"), path),
            Err(e) => {
                log::error!("{}", e);
                failures += 1;
            }
        }
    }
    if failures == 0 {
        Ok(())
    } else {
        Err(CliError::ChecksFailed(failures))
    }
}

/// Parses a file, serializes the AST, reparses the output and compares the
/// two trees. This is the library's round-trip guarantee applied to a real
/// file.
fn check_file(path: &str) -> Result<(), CliError> {
    let problem = parse_file(path)?;
    let printed = problem.to_string();
    let reparsed = harrier::parse_problem(printed.as_bytes())?;
    if problem == reparsed {
        Ok(())
    } else {
        Err(CliError::RoundTripMismatch(Path::new(path).to_path_buf()))
    }
}
