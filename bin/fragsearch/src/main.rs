//! fragsearch CLI
//!
//! Query and inspect search indexes with the same engine the browser widget
//! runs.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use fragsearch::cmd::query::OutputFormat;

/// Command-line interface for fragsearch.
#[derive(Parser)]
#[command(
    name = "fragsearch",
    version,
    about = "Query static-site search indexes with text-fragment deep links"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "fragsearch.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Search an index and print teasers and deep links
    Query {
        /// Search term
        term: String,
        /// Index file
        #[arg(short, long, default_value = "public/index.json")]
        index: std::path::PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Summarize an index file
    Inspect {
        /// Index file
        #[arg(short, long, default_value = "public/index.json")]
        index: std::path::PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    fragsearch::init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            term,
            index,
            format,
            limit,
        } => {
            fragsearch::cmd::query::run(&cli.config, &index, &term, format, limit)?;
        }
        Commands::Inspect { index, strict } => {
            fragsearch::cmd::inspect::run(&index, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_query_command_parsing() {
        let args = ["fragsearch", "query", "quick fox"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("fragsearch.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Query {
                term,
                index,
                format,
                limit,
            } => {
                assert_eq!(term, "quick fox");
                assert_eq!(index, std::path::PathBuf::from("public/index.json"));
                assert_eq!(format, OutputFormat::Text);
                assert!(limit.is_none());
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_cli_query_with_options() {
        let args = [
            "fragsearch",
            "query",
            "install",
            "--index",
            "dist/index.json",
            "--format",
            "json",
            "--limit",
            "5",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Query {
                index,
                format,
                limit,
                ..
            } => {
                assert_eq!(index, std::path::PathBuf::from("dist/index.json"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(limit, Some(5));
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_cli_inspect_command_parsing() {
        let args = ["fragsearch", "inspect", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Inspect { index, strict } => {
                assert_eq!(index, std::path::PathBuf::from("public/index.json"));
                assert!(strict);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_verbosity_and_config() {
        let args = ["fragsearch", "-vv", "--config", "site.toml", "inspect"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
