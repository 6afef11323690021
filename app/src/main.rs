// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

mod dump;
mod generate;
mod info;
mod output;
mod sample;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use ipmi_fru::prelude::*;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Generate and inspect IPMI FRU files.")]
struct Cli {
    /// Sets the verbosity of the logging messages
    /// -v: Warning, -vv: Info, -vvv: Debug, -vvvv: Trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
enum DumpFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a FRU file from a TOML file
    Generate {
        toml_file: PathBuf,
        fru_file: PathBuf,
        /// Overwrite the FRU file if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Dump the content of a FRU file. The output is written to stdout if no output file is
    /// specified.
    Dump {
        fru_file: PathBuf,
        output_file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = DumpFormat::default())]
        format: DumpFormat,
        /// Overwrite the output file if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Generate a blank TOML file. The output is written to stdout if no output file is
    /// specified.
    Sample {
        toml_file: Option<PathBuf>,
        /// Overwrite the TOML file if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// List the areas stored in the input files
    Info {
        #[arg(required = true)]
        fru_files: Vec<PathBuf>,
    },
}

impl Command {
    fn run(&self) -> Result<(), Error> {
        match self {
            Command::Generate {
                toml_file,
                fru_file,
                force,
            } => generate::generate(toml_file, fru_file, *force),
            Command::Dump {
                fru_file,
                output_file,
                format,
                force,
            } => {
                let record = Record::from_file(fru_file)?;
                let output = output::open(output_file.as_deref(), *force)?;
                match format {
                    DumpFormat::Toml => dump::toml(&record, output),
                    DumpFormat::Json => dump::json(&record, output),
                }
            }
            Command::Sample { toml_file, force } => {
                sample::sample(output::open(toml_file.as_deref(), *force)?)
            }
            Command::Info { fru_files } => {
                for fru_file in fru_files {
                    if fru_files.len() > 1 {
                        println!("\n{}:\n", fru_file.display());
                    }
                    info::compact(fru_file)?;
                }
                Ok(())
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    if let Err(err) = cli.command.run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
