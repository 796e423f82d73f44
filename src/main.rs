use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};

use fsoc::config::{Config, OutputFormat, USAGE};
use fsoc::harness;

/// Exit status when the digest differs from the reference
const EXIT_MISMATCH: i32 = 1;

/// Exit status on usage and I/O errors
const EXIT_ERROR: i32 = 2;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_MISMATCH),
        Err(err) => {
            error!("{:#}", err);
            eprintln!("error: {:#}\n\n{}", err, USAGE);
            process::exit(EXIT_ERROR);
        }
    }
}

fn run() -> Result<bool> {
    let config = Config::from_env()?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(true);
    }

    let message = config.load_message()?;
    if config.format == OutputFormat::Words {
        println!("The input to be hashed is: {}", String::from_utf8_lossy(&message));
        print!("The output hash is: ");
    }

    let report = harness::run(&message, &config.reference(), |_| {
        info!("reference digest reproduced");
    })
    .context("failed to hash the message")?;

    match config.format {
        OutputFormat::Words => {
            for word in report.digest.words().iter() {
                print!("\n{:x}", word);
            }
            println!();
        }
        OutputFormat::Hex => println!("{}", report.digest),
    }

    Ok(report.matched)
}
