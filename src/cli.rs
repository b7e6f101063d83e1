use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(version)]
#[command(about = "Generate presentation decks from JSON slide layouts", long_about = None)]
#[command(after_help = "\
Input modes (first match wins):
  --auth                      Store an access token and exit
  -c, --config <file>         Slide layout JSON
  -t, --template <file>       Slide layout template, filled from --data
  -i, --input <file> | stdin  Code review JSON (fixed five-slide deck)")]
pub struct Cli {
    /// Store an access token for the presentation service
    #[arg(long)]
    pub auth: bool,

    /// Slide layout JSON file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Slide layout template with {{variable}} placeholders
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// JSON data for the template
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Code review JSON file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format [default: url, or the settings file's `output`]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Replace the slides of an existing deck instead of creating one
    #[arg(long, value_name = "ID")]
    pub presentation_id: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// How the generated deck is reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare deck URL
    #[default]
    Url,
    /// `{presentationId, presentationUrl}` object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_template_mode() {
        let cli = Cli::try_parse_from([
            "deckhand",
            "-t",
            "deck.json",
            "-d",
            "data.json",
            "-o",
            "json",
            "--presentation-id",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("deck.json")));
        assert_eq!(cli.data, Some(PathBuf::from("data.json")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.presentation_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["deckhand"]).unwrap();
        assert!(!cli.auth);
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["deckhand", "-vvv", "-c", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_invalid_output_format() {
        assert!(Cli::try_parse_from(["deckhand", "-o", "yaml"]).is_err());
    }
}
