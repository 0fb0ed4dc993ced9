// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::data::ResultSet;
use crate::{csv, markdown};

/// Serialize the current results per `export` and write the dated file
/// (`shopee_orders_<date>.md` / `.csv`). Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    results: &ResultSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = match export.format {
        ExportFormat::Markdown => markdown::to_markdown_string(results),
        ExportFormat::Csv => csv::to_csv_string(results),
    };

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
