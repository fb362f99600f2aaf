use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Parse and query workbench folder-tree output", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .foldertree.toml)
    #[arg(short, long, global = true, env = "FOLDERTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the tree comes from and how to read it
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Tree text or JSON export (defaults to stdin, `-` also means stdin)
    pub input: Option<PathBuf>,

    /// How to interpret the input
    #[arg(long = "input-format", value_enum, default_value = "auto")]
    pub input_format: InputFormat,

    /// Characters per nesting level (overrides config)
    #[arg(long = "indent-step", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub indent_step: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a folder tree and print it
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,
    },

    /// Print the id of the first folder with the given name
    Id {
        /// Folder name to look up
        name: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// List folders at a given depth (top-level folders are depth 1)
    Depth {
        /// Depth to list
        depth: usize,

        #[command(flatten)]
        input: InputArgs,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// List top-level folders that are published versions
    Published {
        #[command(flatten)]
        input: InputArgs,

        /// Property key marking a published version (overrides config)
        #[arg(long)]
        marker: Option<String>,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON if the input starts with `[`, tree text otherwise
    Auto,
    /// Box-drawing tree text
    Text,
    /// JSON array of folders
    Json,
}

impl From<InputFormat> for crate::io::InputFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => crate::io::InputFormat::Auto,
            InputFormat::Text => crate::io::InputFormat::Text,
            InputFormat::Json => crate::io::InputFormat::Json,
        }
    }
}
