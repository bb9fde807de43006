//! VT Trace
//!
//! Decodes a terminal byte stream from stdin or a file and prints the buffer
//! calls and notifications it produces. Useful for inspecting what a program
//! actually emits.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vt_decoder::core::{BufferCall, RecordingBuffer};
use vt_decoder::parser::{Notification, Parser};
use vt_decoder::ParserConfig;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            tracing::error!("{}", message);
            eprintln!("Run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    if options.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &options.config {
        Some(path) => match ParserConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ParserConfig::default(),
    };

    // Read input
    let input = match &options.input {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                tracing::error!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        }
    };

    let mut buffer = RecordingBuffer::new(options.cols, options.rows);
    let mut parser = Parser::with_config(config);

    // Chunked feeding exercises the same path a PTY reader would
    let chunk = options.chunk.unwrap_or(input.len()).max(1);
    for piece in input.chunks(chunk) {
        parser.parse(&mut buffer, piece);
    }
    tracing::debug!(bytes = input.len(), chunk, "Input decoded");

    let trace = Trace {
        cols: options.cols,
        rows: options.rows,
        calls: buffer.take_calls(),
        notifications: parser.take_notifications(),
    };

    match options.format {
        OutputFormat::Text => print_text(&trace),
        OutputFormat::Json => match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Error serializing trace: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

#[derive(Serialize)]
struct Trace {
    cols: usize,
    rows: usize,
    calls: Vec<BufferCall>,
    notifications: Vec<Notification>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
struct Options {
    cols: usize,
    rows: usize,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    chunk: Option<usize>,
    format: OutputFormat,
    show_help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            input: None,
            config: None,
            chunk: None,
            format: OutputFormat::Text,
            show_help: false,
        }
    }
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--cols" => options.cols = number(&arg, args.next())?,
                "-r" | "--rows" => options.rows = number(&arg, args.next())?,
                "--chunk" => options.chunk = Some(number(&arg, args.next())?),
                "-f" | "--file" => options.input = Some(path(&arg, args.next())?),
                "--config" => options.config = Some(path(&arg, args.next())?),
                "-j" | "--json" => options.format = OutputFormat::Json,
                "-t" | "--text" => options.format = OutputFormat::Text,
                "-h" | "--help" => options.show_help = true,
                _ if !arg.starts_with('-') && options.input.is_none() => {
                    // Treat as input file if no flag
                    options.input = Some(PathBuf::from(arg.as_str()));
                }
                _ => return Err(format!("Unknown option '{}'", arg)),
            }
        }

        Ok(options)
    }
}

fn number(flag: &str, value: Option<String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} expects a positive number, got '{}'", flag, value)),
    }
}

fn path(flag: &str, value: Option<String>) -> Result<PathBuf, String> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| format!("{} needs a path", flag))
}

fn print_text(trace: &Trace) {
    println!("Buffer calls ({}x{}):", trace.cols, trace.rows);
    println!("---");

    // Collapse runs of printed characters into one line
    let mut text = String::new();
    for call in &trace.calls {
        match call {
            BufferCall::WriteChar(c) => text.push(*c),
            other => {
                if !text.is_empty() {
                    println!("Text {:?}", text);
                    text.clear();
                }
                println!("{:?}", other);
            }
        }
    }
    if !text.is_empty() {
        println!("Text {:?}", text);
    }

    println!("---");
    println!("Notifications:");
    for notification in &trace.notifications {
        println!("{:?}", notification);
    }
}

fn print_help() {
    println!("VT Trace");
    println!();
    println!("Usage: vt-trace [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -c, --cols <N>       Set buffer width (default: 80)");
    println!("  -r, --rows <N>       Set buffer height (default: 24)");
    println!("  -f, --file <PATH>    Read input from file (default: stdin)");
    println!("      --config <PATH>  Load parser limits from a JSON file");
    println!("      --chunk <N>      Feed the parser N bytes at a time");
    println!("  -j, --json           Output the trace as JSON");
    println!("  -t, --text           Output the trace as text (default)");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. RUST_LOG=vt_decoder=debug");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.cols, 80);
        assert_eq!(options.rows, 24);
        assert_eq!(options.format, OutputFormat::Text);
        assert!(options.input.is_none());
    }

    #[test]
    fn test_flags() {
        let options = parse(&["-c", "132", "--rows", "50", "--chunk", "3", "-j", "in.txt"]).unwrap();
        assert_eq!(options.cols, 132);
        assert_eq!(options.rows, 50);
        assert_eq!(options.chunk, Some(3));
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.input, Some(PathBuf::from("in.txt")));
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["-c"]).is_err());
        assert!(parse(&["-c", "wide"]).is_err());
        assert!(parse(&["--chunk", "0"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
