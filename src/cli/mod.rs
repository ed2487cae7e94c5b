// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write the result to <DIR>/password.txt
    #[arg(long, short, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Word list for passphrases (diceware or one word per line); defaults to the EFF large list
    #[arg(long, global = true, value_name = "FILE", env = "WORDLIST_PATH")]
    pub wordlist: Option<PathBuf>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let args = Args::try_parse_from(["passforge", "passphrase", "--json", "-o", "out"]).unwrap();
        assert!(args.json);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(matches!(args.command, Some(CliCommand::Passphrase(_))));
    }

    #[test]
    fn wordlist_falls_back_to_environment() {
        let command = Args::command();
        let wordlist = command
            .get_arguments()
            .find(|arg| arg.get_id() == "wordlist")
            .unwrap();
        assert_eq!(wordlist.get_env(), Some(std::ffi::OsStr::new("WORDLIST_PATH")));
    }

    #[test]
    fn no_subcommand_means_menu() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert!(args.command.is_none());
    }
}
