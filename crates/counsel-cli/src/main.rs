//! Counsel CLI - guarded decision briefs from the command line.
//!
//! Exit codes: 0 for a normal brief, 1 when a gate refused (or `convert`
//! produced no situation), 2 for malformed input or arguments.

mod md;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use counsel_core::{validate_request, DecisionBrief, DecisionRequest, Pipeline};
use tracing::debug;

#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Guarded decision pipeline - briefs with explainable refusals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a request through the pipeline and print the brief
    Brief {
        /// Request JSON file (stdin if absent)
        file: Option<PathBuf>,
        /// Print the brief as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Check a request payload and print any validation problems
    Validate {
        /// Request JSON file (stdin if absent)
        file: Option<PathBuf>,
    },
    /// Convert a markdown note into request JSON
    Convert {
        /// Markdown file (stdin if absent)
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };
    debug!(
        source = if file.is_some() { "file" } else { "stdin" },
        bytes = input.len(),
        "input read"
    );
    Ok(input)
}

fn run_brief(input: &str, json: bool) -> anyhow::Result<u8> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("request is not valid JSON")?;
    let problems = validate_request(&value);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("invalid request: {}", problem);
        }
        return Ok(2);
    }
    let request: DecisionRequest =
        serde_json::from_value(value).context("request does not fit the schema")?;

    let brief = Pipeline::new().run(&request);
    if json {
        println!("{}", serde_json::to_string_pretty(&brief)?);
    } else {
        print!("{}", counsel_core::render(&brief));
    }
    Ok(match brief {
        DecisionBrief::Ok(_) => 0,
        DecisionBrief::Blocked(_) => 1,
    })
}

fn run_validate(input: &str) -> anyhow::Result<u8> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("request is not valid JSON")?;
    let problems = validate_request(&value);
    if problems.is_empty() {
        println!("request is valid");
        return Ok(0);
    }
    for problem in &problems {
        println!("{}", problem);
    }
    Ok(2)
}

fn run_convert(input: &str) -> anyhow::Result<u8> {
    let request = md::markdown_to_request(input);
    if request.situation.trim().is_empty() {
        eprintln!("no situation section found; nothing to convert");
        return Ok(1);
    }
    println!("{}", serde_json::to_string_pretty(&md::request_to_json(&request))?);
    Ok(0)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Brief { file, json } => {
            read_input(file.as_ref()).and_then(|input| run_brief(&input, *json))
        }
        Commands::Validate { file } => {
            read_input(file.as_ref()).and_then(|input| run_validate(&input))
        }
        Commands::Convert { file } => {
            read_input(file.as_ref()).and_then(|input| run_convert(&input))
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(2)
        }
    }
}
