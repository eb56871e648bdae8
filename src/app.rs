//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - loads the model artifact (fatal on failure)
//! - hands off to the TUI or prints a one-shot prediction

use clap::Parser;

use crate::cli::{Command, PredictArgs, SchemaArgs, TuiArgs};
use crate::config::{AppConfig, load_dotenv};
use crate::error::AppError;
use crate::logging::{LogTarget, init_logging};
use crate::preprocess::{ENCODING_VERSION, feature_names};

pub mod pipeline;

/// Entry point for the `accident-risk` binary.
pub fn run() -> Result<(), AppError> {
    // `--model` may come from `.env`, so load it before clap reads the env.
    load_dotenv();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Predict(args) => handle_predict(args),
        Command::Schema(args) => handle_schema(args),
    }
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    let config = AppConfig::from_args(&args.runtime);
    let target = match &config.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Off,
    };
    init_logging(&config.log_level, target)?;

    let artifact = config.load_model()?;
    crate::tui::run(pipeline::Predictor::new(artifact), &config)
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::from_args(&args.runtime);
    let target = match &config.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    init_logging(&config.log_level, target)?;

    let predictor = pipeline::Predictor::new(config.load_model()?);
    let prediction = predictor.predict(&args.form())?;

    if args.json {
        let json = serde_json::to_string_pretty(&prediction)
            .map_err(|e| AppError::io(format!("Failed to serialize prediction: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_prediction(&prediction));
    }
    Ok(())
}

fn handle_schema(args: SchemaArgs) -> Result<(), AppError> {
    let names = feature_names();
    if args.json {
        let json = serde_json::json!({
            "encoding_version": ENCODING_VERSION,
            "feature_names": names,
        });
        let text = serde_json::to_string_pretty(&json)
            .map_err(|e| AppError::io(format!("Failed to serialize schema: {e}")))?;
        println!("{text}");
    } else {
        print!("{}", crate::report::format_schema(ENCODING_VERSION, &names));
    }
    Ok(())
}

/// Rewrite argv so `accident-risk` defaults to `accident-risk tui`.
///
/// Rules:
/// - `accident-risk`                     -> `accident-risk tui`
/// - `accident-risk --model m.json ...`  -> `accident-risk tui --model m.json ...`
/// - `accident-risk --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "predict" | "schema");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
