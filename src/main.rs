use anyhow::Result;
use clap::Parser;
use foldertree::cli::{Cli, Commands, InputArgs};
use foldertree::commands::{self, TreeSource};
use foldertree::config::{self, FolderTreeConfig};
use foldertree::io::OutputFormat;
use foldertree::observability::init_tracing;
use foldertree::parser::ParserOptions;
use std::path::Path;
use std::process::ExitCode;

// Main orchestrator function
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match run(cli) {
        Ok(code) => code,
        Err(err) => report_error(&err),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.as_deref();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init { force } => commands::init_config(force)?,
        Commands::Parse {
            input,
            format,
            output,
            plain,
        } => {
            let settings = load_settings(config_path)?;
            commands::handle_parse(commands::ParseConfig {
                source: build_source(input, &settings),
                format: resolve_output_format(format, &settings),
                output,
                plain,
            })?
        }
        Commands::Id { name, input } => {
            let settings = load_settings(config_path)?;
            let found = commands::handle_id(
                commands::IdConfig {
                    source: build_source(input, &settings),
                    name: name.clone(),
                },
                &mut stdout,
            )?;
            if !found {
                eprintln!("No folder id found for {:?}", name);
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Depth { depth, input, json } => {
            let settings = load_settings(config_path)?;
            commands::handle_depth(
                commands::DepthConfig {
                    source: build_source(input, &settings),
                    depth,
                    json,
                },
                &mut stdout,
            )?
        }
        Commands::Published {
            input,
            marker,
            json,
        } => {
            let settings = load_settings(config_path)?;
            commands::handle_published(
                commands::PublishedVersionsConfig {
                    source: build_source(input, &settings),
                    marker: resolve_marker(marker, &settings),
                    json,
                },
                &mut stdout,
            )?
        }
    }

    Ok(ExitCode::SUCCESS)
}

// User-fixable errors print their message only; anything else keeps the chain
fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<foldertree::Error>() {
        Some(error) if error.is_user_fixable() => {
            eprintln!("Error: {}", error);
            ExitCode::from(error.exit_code())
        }
        Some(error) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(error.exit_code())
        }
        None => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

// Side effect: explicit --config is strict, discovery falls back to defaults
fn load_settings(path: Option<&Path>) -> Result<FolderTreeConfig> {
    match path {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

// Pure function: CLI flags override config values
fn build_source(input: InputArgs, settings: &FolderTreeConfig) -> TreeSource {
    TreeSource {
        input: input.input,
        input_format: input.input_format.into(),
        parser: ParserOptions {
            indent_step: input.indent_step.unwrap_or_else(|| settings.indent_step()),
        },
    }
}

fn resolve_output_format(
    format: Option<foldertree::cli::OutputFormat>,
    settings: &FolderTreeConfig,
) -> OutputFormat {
    format
        .map(Into::into)
        .or_else(|| settings.default_format().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Terminal)
}

fn resolve_marker(marker: Option<String>, settings: &FolderTreeConfig) -> String {
    marker.unwrap_or_else(|| settings.published_marker().to_string())
}
