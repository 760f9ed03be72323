pub mod dispatch;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use skyhaul_common::config::Config;

#[derive(Parser)]
#[command(name = "skyhaul")]
#[command(about = "Plans delivery drone trips from a package manifest.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and the summary line
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign every location to a drone trip and print the plan
    #[command(alias = "d")]
    Dispatch {
        /// Manifest with the fleet on line 1 and one location per line
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// File the plain trip listing is written to
        #[arg(short, long, default_value = "Output.txt")]
        output: PathBuf,

        /// Only print the plan, do not write the output file
        #[arg(long)]
        no_file: bool,

        /// Plan what can be carried instead of failing on oversized packages
        #[arg(long)]
        skip_infeasible: bool,
    },
    /// Check a manifest without planning any trips
    #[command(alias = "v")]
    Validate {
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let mut cfg = Config {
            quiet: self.quiet,
            ..Config::default()
        };

        match &self.command {
            Commands::Dispatch {
                input,
                output,
                no_file,
                skip_infeasible,
            } => {
                cfg.input = input.clone();
                cfg.output = (!no_file).then(|| output.clone());
                cfg.skip_infeasible = *skip_infeasible;
            }
            Commands::Validate { input } => {
                cfg.input = input.clone();
                cfg.output = None;
            }
        }

        cfg
    }
}
