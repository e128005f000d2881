//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated combos
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One combo per line
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormat> for lemur_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for laughing-lemur
#[derive(Parser, Debug)]
#[command(name = "laughing-lemur")]
#[command(author, version, about = "Create random adjective-animal alliterations for a letter")]
#[command(long_about = r#"
Laughing Lemur pairs animals with adjectives that share a starting letter.

Animals come from a built-in list; adjectives are fetched from the Datamuse
word API and restricted to words tagged only as adjectives. Both lists are
shuffled before pairing, so every run gives different results.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. LEMUR_* variables   e.g. LEMUR_WORD_SOURCE__TIMEOUT_SECONDS=3
3. ./lemur.toml        Project-level config
4. ~/.config/laughing-lemur/config.toml   Global config

Example:
  laughing-lemur B
  laughing-lemur l --list 5
  laughing-lemur q --show
"#)]
pub struct Cli {
    /// Starting letter for the adjective-animal alliteration
    #[arg(required_unless_present = "show_config")]
    pub letter: Option<String>,

    /// Generate a list of N alliterations
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub list: Option<i64>,

    /// Print table of all adjectives and animals used
    #[arg(short, long)]
    pub show: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_only() {
        let cli = Cli::try_parse_from(["laughing-lemur", "B"]).unwrap();
        assert_eq!(cli.letter.as_deref(), Some("B"));
        assert_eq!(cli.list, None);
        assert!(!cli.show);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from(["laughing-lemur", "c", "-l", "4", "-s"]).unwrap();
        assert_eq!(cli.list, Some(4));
        assert!(cli.show);

        let cli = Cli::try_parse_from(["laughing-lemur", "--list", "2", "--show", "d"]).unwrap();
        assert_eq!(cli.letter.as_deref(), Some("d"));
        assert_eq!(cli.list, Some(2));
        assert!(cli.show);
    }

    #[test]
    fn test_negative_list_reaches_validation() {
        let cli = Cli::try_parse_from(["laughing-lemur", "e", "--list", "-3"]).unwrap();
        assert_eq!(cli.list, Some(-3));
    }

    #[test]
    fn test_letter_required() {
        assert!(Cli::try_parse_from(["laughing-lemur"]).is_err());
        assert!(Cli::try_parse_from(["laughing-lemur", "--show-config"]).is_ok());
    }

    #[test]
    fn test_non_numeric_list_rejected() {
        assert!(Cli::try_parse_from(["laughing-lemur", "f", "--list", "many"]).is_err());
    }

    #[test]
    fn test_output_and_verbosity() {
        let cli = Cli::try_parse_from(["laughing-lemur", "g", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            lemur_domain::OutputFormat::from(OutputFormat::Json),
            lemur_domain::OutputFormat::Json
        );
    }
}
