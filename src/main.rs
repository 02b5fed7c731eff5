use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParseOptions},
};

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Parses a source file and reports the first error in it")]
struct Args {
    /// Path to the source file
    file: PathBuf,

    /// Log parse progress and every top-level declaration
    #[arg(short, long)]
    verbose: bool,

    /// Write the parsed file back out in canonical form
    #[arg(short, long)]
    print: bool,
}

const EXIT_USER_ERROR: u8 = 2;
const EXIT_INTERNAL_ERROR: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.file.display(), error);
            return ExitCode::FAILURE;
        }
    };
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return exit_code(error.is_internal());
        }
    };
    log::debug!("tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let options = ParseOptions::new().verbose(args.verbose);
    let file = match parse_with_options(tokens, &options) {
        Ok(file) => file,
        Err(error) => {
            display_error(&error, &source);
            return exit_code(error.is_internal());
        }
    };

    if args.print {
        print!("{}", file.render());
    }

    ExitCode::SUCCESS
}

fn exit_code(internal: bool) -> ExitCode {
    if internal {
        ExitCode::from(EXIT_INTERNAL_ERROR)
    } else {
        ExitCode::from(EXIT_USER_ERROR)
    }
}
