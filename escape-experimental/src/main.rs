//! This application is intended to help try out fixture strings by hand. It is a simple command
//! line application that takes input from stdin and the command line and prints what the parser
//! makes of each one.

use std::{env, io::IsTerminal, process::ExitCode};

use log::{debug, error};

mod options;
mod report;

use options::{Options, OptionsError, USAGE};

fn main() -> ExitCode {
    env_logger::init();

    let mut options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(OptionsError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        },
        Err(error) => {
            error!("{error}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        },
    };

    // Reading from stdin allows whole files of fixture strings to be piped into the application.
    if !std::io::stdin().is_terminal() {
        options.inputs.extend(std::io::stdin()
            .lines()
            .filter_map(|maybe| match maybe {
                Ok(line) => Some(line),
                Err(error) => {
                    error!("failed to read stdin: {error}");
                    None
                },
            })
            .filter(|line| !line.is_empty())
        );
    }

    if options.inputs.is_empty() {
        error!("at least one input must be provided, either as an argument or through stdin");
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    debug!("running {:?} over {} inputs", options.mode, options.inputs.len());
    let mut all_passed = true;
    for input in &options.inputs {
        println!("Input: '{input}'");
        match report::run(options.mode, &options.delimiter, input) {
            Ok(report) => {
                report.lines.iter().for_each(|line| println!("\t{line}"));
                all_passed &= report.passed;
            },
            Err(error) => {
                error!("{error}");
                println!("\tERROR: {error}");
                all_passed = false;
            },
        }
    }

    if all_passed { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
