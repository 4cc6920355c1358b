use clap::Parser;
use lisp_embed_core::Script;
use std::path::PathBuf;
use std::process::ExitCode;

/// Runs a script written in the embedded Lisp dialect and prints its output
/// stream line by line.
#[derive(Parser, Debug)]
#[command(name = "lisp-embed-core")]
#[command(version)]
#[command(about = "Evaluates a script in the embedded Scheme/Racket-style Lisp dialect")]
struct CliArgs {
    /// Script file to execute. Reads from stdin if omitted, or if given as `-`.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match Script::new(source).evaluate() {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_source(args: &CliArgs) -> std::io::Result<String> {
    match &args.script {
        Some(path) if path.as_os_str() == "-" => std::io::read_to_string(std::io::stdin()),
        Some(path) => std::fs::read_to_string(path),
        None => std::io::read_to_string(std::io::stdin()),
    }
}
