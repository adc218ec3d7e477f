//! Build an invertible map from the command line.
//!
//! ```text
//! invmap [--remove KEY] [--invert] [--get KEY] PAIR...
//! ```
//!
//! Each `PAIR` is `key=value`. The operations run in the order remove,
//! invert, get.

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use invmap::collections::{InvertibleMap, InvertibleMapResult};

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected `key=value`, got `{}`", raw))
}

fn cli() -> Command {
    Command::new("invmap")
        .about("Build a one-to-one map from key=value pairs")
        .arg(
            Arg::new("pairs")
                .value_name("PAIR")
                .num_args(0..)
                .value_parser(parse_pair),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .value_name("KEY")
                .help("remove a key before anything else"),
        )
        .arg(
            Arg::new("invert")
                .long("invert")
                .action(ArgAction::SetTrue)
                .help("work on the inverse map"),
        )
        .arg(
            Arg::new("get")
                .long("get")
                .value_name("KEY")
                .help("print the value of a single key"),
        )
}

/// Apply the requested operations and render the result.
fn run(matches: &ArgMatches) -> InvertibleMapResult<String, String, String> {
    let pairs = matches
        .get_many::<(String, String)>("pairs")
        .into_iter()
        .flatten()
        .cloned();

    let mut map = InvertibleMap::try_from_iter(pairs)?;

    if let Some(key) = matches.get_one::<String>("remove") {
        map.remove(key)?;
    }

    let map = if matches.get_flag("invert") {
        map.inverse()
    } else {
        map
    };

    match matches.get_one::<String>("get") {
        Some(key) => map.get(key),
        None => Ok(format!("{:?}", map)),
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
