//! `rison` CLI — encode JSON as RISON and percent-encode text for URIs.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to RISON (stdin → stdout)
//! echo '{"q":"hello world","page":2}' | rison encode
//!
//! # Encode ready to paste into a query string
//! echo '{"q":"hello world","page":2}' | rison encode --uri
//!
//! # Escape each string leaf instead of the whole document
//! rison encode --escape-leaves -i query.json -o query.rison
//!
//! # Percent-encode arbitrary text with the RISON safe set
//! rison escape "(q:'a b')"
//!
//! # Compare RISON against URL-encoded JSON
//! rison stats -i query.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rison_core::{EncodeOptions, UriEscape};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// The `encodeURIComponent` escape set, used as the baseline in `stats`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Parser)]
#[command(name = "rison", version, about = "RISON encoder for URI query strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to RISON format
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Percent-encode the finished RISON text for a URI
        #[arg(long, conflicts_with = "escape_leaves")]
        uri: bool,
        /// Percent-encode the quoted body of each string and key
        #[arg(long)]
        escape_leaves: bool,
    },
    /// Percent-encode text using the RISON safe set
    Escape {
        /// Text to escape (reads from --input or stdin if omitted)
        text: Option<String>,
        /// Input file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show size comparison between URL-encoded JSON and RISON
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Encode {
            input,
            output,
            uri,
            escape_leaves,
        } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse input JSON")?;

            let options = EncodeOptions {
                escape: escape_mode(uri, escape_leaves),
            };
            debug!("Encoding {} bytes of JSON with {:?}", json.len(), options.escape);

            let rison = rison_core::encode_with(&value, &options);
            write_output(output.as_deref(), &rison)?;
        }
        Commands::Escape {
            text,
            input,
            output,
        } => {
            let text = match text {
                Some(text) => text,
                None => strip_line_ending(read_input(input.as_deref())?),
            };
            let escaped = rison_core::url_encode(&text);
            write_output(output.as_deref(), &escaped)?;
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse input JSON")?;

            let compact = serde_json::to_string(&value)?;
            let json_uri = utf8_percent_encode(&compact, URI_COMPONENT).to_string();
            let rison = rison_core::encode(&value);
            let rison_uri = rison_core::url_encode(&rison);

            let ratio = if !json_uri.is_empty() {
                (1.0 - (rison_uri.len() as f64 / json_uri.len() as f64)) * 100.0
            } else {
                0.0
            };
            println!("JSON size:       {} bytes", compact.len());
            println!("JSON URI size:   {} bytes", json_uri.len());
            println!("RISON size:      {} bytes", rison.len());
            println!("RISON URI size:  {} bytes", rison_uri.len());
            println!("Reduction:       {:.1}%", ratio);
        }
    }

    Ok(())
}

/// Map the mutually exclusive `--uri` / `--escape-leaves` flags to an escape mode.
fn escape_mode(uri: bool, escape_leaves: bool) -> UriEscape {
    if uri {
        UriEscape::Document
    } else if escape_leaves {
        UriEscape::Leaves
    } else {
        UriEscape::None
    }
}

/// Drop the single trailing newline that `echo` and most editors append.
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from {}", path);
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!("Writing {} bytes to {}", content.len(), path);
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
