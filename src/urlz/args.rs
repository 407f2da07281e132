use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlz::config::STORE_FILE_ENV;

#[derive(Parser, Debug)]
#[command(name = "urlz")]
#[command(version, about = "A simple URL shortener CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file holding the mappings (defaults to ./urls.json)
    #[arg(short, long, global = true, env = STORE_FILE_ENV)]
    pub file: Option<PathBuf>,

    /// Log storage activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a long URL
    #[command(alias = "s")]
    Shorten {
        /// The URL to shorten
        long_url: String,
    },

    /// Expand a short URL code to the original URL
    #[command(alias = "x")]
    Expand {
        /// The short code to look up
        short_code: String,
    },

    /// List all stored URLs
    #[command(alias = "ls")]
    List {
        /// Only show mappings whose code or URL contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Delete a URL by short code
    #[command(alias = "rm")]
    Delete {
        /// The short code to remove
        short_code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shorten() {
        let cli = Cli::try_parse_from(["urlz", "shorten", "http://example.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Shorten { long_url } if long_url == "http://example.com"
        ));
    }

    #[test]
    fn parses_aliases() {
        let cli = Cli::try_parse_from(["urlz", "x", "abc123"]).unwrap();
        assert!(matches!(cli.command, Commands::Expand { .. }));

        let cli = Cli::try_parse_from(["urlz", "rm", "abc123"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { .. }));

        let cli = Cli::try_parse_from(["urlz", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List { search: None }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["urlz", "list", "--search", "rust", "-f", "links.json", "-v"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("links.json")));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::List { search: Some(term) } if term == "rust"
        ));
    }

    #[test]
    fn shorten_requires_exactly_one_url() {
        assert!(Cli::try_parse_from(["urlz", "shorten"]).is_err());
        assert!(Cli::try_parse_from(["urlz", "shorten", "a", "b"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["urlz"]).is_err());
    }
}
