#[macro_use]
extern crate log;
extern crate fern;

use clap::{App, Arg, ArgMatches};
use npy_fixtures::Settings;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = get_matches();

    let verbosity = matches.occurrences_of("v") as u8;
    prepare_logger(verbosity)?;

    let mut settings = Settings::from_env();
    if let Some(output_dir) = matches.value_of("output") {
        settings.output_dir = PathBuf::from(output_dir);
    }
    if matches.is_present("include_u8") {
        settings.include_u8 = true;
    }
    debug!("{:?}", settings);

    let written = if settings == Settings::default() {
        npy_fixtures::generate_all_default()
    } else {
        npy_fixtures::generate_all(&settings)
    };
    match written {
        Ok(paths) => {
            info!("done, {} files in {}", paths.len(), settings.output_dir.display());
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}

fn prepare_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::max(),
    };

    // stdout carries the "Wrote ..." lines
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S:%f]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

/// Gets configuration values from CLI arguments, falling back to environment variables
/// if they don't exist and to default values if neither exist.
fn get_matches<'a>() -> ArgMatches<'a> {
    App::new("make_npy_fixtures")
        .version("0.1.0")
        .about("writes deterministic .npy fixtures for reader tests")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("DIR")
                .help("Sets the output folder (default npy-fixtures)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("include_u8")
                .long("include-u8")
                .help("Also writes the 8 byte unsigned fixture (default is false)"),
        )
        .arg(Arg::with_name("v").short("v").multiple(true).help(
            "Sets the level of verbosity",
        ))
        .get_matches()
}
