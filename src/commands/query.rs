use anyhow::Result;
use std::io::Write;

use super::TreeSource;
use crate::query::{get_folder_id, get_folders_with_depth, get_published_versions_with_marker};

pub struct IdConfig {
    pub source: TreeSource,
    pub name: String,
}

pub struct DepthConfig {
    pub source: TreeSource,
    pub depth: usize,
    pub json: bool,
}

pub struct PublishedVersionsConfig {
    pub source: TreeSource,
    pub marker: String,
    pub json: bool,
}

/// Print the folder id. Returns `false` when no id was found, so the caller
/// can exit non-zero.
pub fn handle_id<W: Write>(config: IdConfig, out: &mut W) -> Result<bool> {
    let tree = config.source.load()?;
    match get_folder_id(&config.name, &tree) {
        Some(id) => {
            writeln!(out, "{}", id)?;
            Ok(true)
        }
        None => {
            log::debug!("No folder id for {:?}", config.name);
            Ok(false)
        }
    }
}

pub fn handle_depth<W: Write>(config: DepthConfig, out: &mut W) -> Result<()> {
    let tree = config.source.load()?;
    let names = get_folders_with_depth(config.depth, &tree);
    write_names(&names, config.json, out)
}

pub fn handle_published<W: Write>(config: PublishedVersionsConfig, out: &mut W) -> Result<()> {
    let tree = config.source.load()?;
    let names = get_published_versions_with_marker(&tree, &config.marker);
    write_names(&names, config.json, out)
}

fn write_names<W: Write>(names: &[String], json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(names)?)?;
    } else {
        for name in names {
            writeln!(out, "{}", name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::InputFormat;
    use crate::parser::ParserOptions;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const TREE: &str = "\
├── Genomics (g)
│   ├── Variant Files (v)
│   └── Aligned Files (a)
└── Clinical (c)
    └── Synthetic Data (s)
";

    fn source(dir: &TempDir, contents: &str) -> TreeSource {
        let path: PathBuf = dir.path().join("tree.txt");
        fs::write(&path, contents).unwrap();
        TreeSource {
            input: Some(path),
            input_format: InputFormat::Auto,
            parser: ParserOptions::default(),
        }
    }

    #[test]
    fn test_handle_id_found() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let found = handle_id(
            IdConfig {
                source: source(&temp, TREE),
                name: "Aligned Files".into(),
            },
            &mut out,
        )
        .unwrap();
        assert!(found);
        assert_eq!(String::from_utf8(out).unwrap(), "a\n");
    }

    #[test]
    fn test_handle_id_missing_prints_nothing() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let found = handle_id(
            IdConfig {
                source: source(&temp, TREE),
                name: "New Folder".into(),
            },
            &mut out,
        )
        .unwrap();
        assert!(!found);
        assert!(out.is_empty());
    }

    #[test]
    fn test_handle_depth_lines_and_json() {
        let temp = TempDir::new().unwrap();

        let mut out = Vec::new();
        handle_depth(
            DepthConfig {
                source: source(&temp, TREE),
                depth: 2,
                json: false,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Variant Files\nAligned Files\nSynthetic Data\n"
        );

        let mut out = Vec::new();
        handle_depth(
            DepthConfig {
                source: source(&temp, TREE),
                depth: 1,
                json: true,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\"Genomics\",\"Clinical\"]\n");
    }

    #[test]
    fn test_handle_published_from_json_export() {
        let temp = TempDir::new().unwrap();
        let export = r#"[
            {"name": "Version 1", "id": "v1", "depth": 1,
             "properties": [{"wb-published-date": "2024-01-02"}], "children": []},
            {"name": "Draft", "id": "d", "depth": 1, "properties": [], "children": []}
        ]"#;

        let mut out = Vec::new();
        handle_published(
            PublishedVersionsConfig {
                source: source(&temp, export),
                marker: "wb-published-date".into(),
                json: false,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Version 1\n");
    }
}
