use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tillpoint")]
#[command(about = "Tillpoint - point-of-sale backend API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Prepare the database and serve the HTTP API (default)
    Serve,
    /// Create the database and any missing tables, then exit
    InitDb,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["tillpoint"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn test_init_db_subcommand() {
        let cli = Cli::try_parse_from(["tillpoint", "init-db"]).unwrap();
        assert_eq!(cli.command(), Commands::InitDb);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["tillpoint", "drop-db"]).is_err());
    }
}
