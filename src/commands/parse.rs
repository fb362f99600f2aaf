use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::TreeSource;
use crate::io::{create_writer, JsonWriter, OutputFormat, TerminalWriter, TreeWriter};

pub struct ParseConfig {
    pub source: TreeSource,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_parse(config: ParseConfig) -> Result<()> {
    let tree = config.source.load()?;
    log::info!("Parsed {} top-level folders", tree.len());

    let mut writer = match &config.output {
        Some(path) => file_writer(path, config.format)?,
        None => create_writer(config.format, config.plain),
    };
    writer.write_tree(&tree)
}

// Files never get ANSI styling.
fn file_writer(path: &Path, format: OutputFormat) -> Result<Box<dyn TreeWriter>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    let writer: Box<dyn TreeWriter> = match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer).plain()),
    };
    Ok(writer)
}
