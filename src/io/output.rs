use crate::core::FolderNode;
use crate::parser::line::has_id_suffix;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl OutputFormat {
    /// Parse a configured format name (`terminal` or `json`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait TreeWriter {
    fn write_tree(&mut self, tree: &[FolderNode]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TreeWriter for JsonWriter<W> {
    fn write_tree(&mut self, tree: &[FolderNode]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(tree)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the tree back out in `wb folder tree` layout.
pub struct TerminalWriter<W: Write> {
    writer: W,
    styled: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            styled: true,
        }
    }

    /// Disable bold names and dimmed ids
    pub fn plain(mut self) -> Self {
        self.styled = false;
        self
    }
}

impl<W: Write> TreeWriter for TerminalWriter<W> {
    fn write_tree(&mut self, tree: &[FolderNode]) -> anyhow::Result<()> {
        let mut lines = Vec::new();
        collect_lines(tree, "", &mut lines);
        for (prefix, node) in lines {
            let name = node.trimmed_name();
            // Without an id, a name like `Data (old)` needs an explicit `()`.
            let id = match node.id.as_deref() {
                Some(id) if !id.is_empty() => Some(id),
                _ if has_id_suffix(name) => Some(""),
                _ => None,
            };
            let label = match (id, self.styled) {
                (Some(id), true) => format!("{} {}", name.bold(), format!("({})", id).dimmed()),
                (Some(id), false) => format!("{} ({})", name, id),
                (None, true) => name.bold().to_string(),
                (None, false) => name.to_string(),
            };
            writeln!(self.writer, "{}{}", prefix, label)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, plain: bool) -> Box<dyn TreeWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal if plain => Box::new(TerminalWriter::new(std::io::stdout()).plain()),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}

// Pairs each node with its full line prefix, e.g. "│   └── ".
fn collect_lines<'a>(tree: &'a [FolderNode], indent: &str, out: &mut Vec<(String, &'a FolderNode)>) {
    for (index, node) in tree.iter().enumerate() {
        let last = index + 1 == tree.len();
        let connector = if last { "└── " } else { "├── " };
        out.push((format!("{}{}", indent, connector), node));

        let continuation = if last { "    " } else { "│   " };
        collect_lines(&node.children, &format!("{}{}", indent, continuation), out);
    }
}

/// Render a tree as plain box-drawing text with a 4-column indent step.
pub fn render_tree(tree: &[FolderNode]) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    let _ = TerminalWriter::new(&mut buffer).plain().write_tree(tree);
    String::from_utf8_lossy(&buffer).into_owned()
}
