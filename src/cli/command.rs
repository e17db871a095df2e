use crate::logging::Verbosity;
use crate::store::DEFAULT_STORAGE_PATH;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rusty-agenda",
    version,
    about = "Personal contact register",
    long_about = "Keeps name:phone records in a text file. \
                  Runs the interactive menu unless a subcommand is given."
)]
pub struct Cli {
    /// Agenda file holding one name:phone record per line
    #[arg(long, global = true, env = "AGENDA_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot operations, same output as the matching menu entry
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a contact to the agenda
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone
        #[arg(long)]
        phone: String,
    },
    /// List every contact in file order
    List,
    /// Find contacts by name, ignoring case
    Search {
        /// Name to look for
        #[arg(long)]
        name: String,
    },
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}
