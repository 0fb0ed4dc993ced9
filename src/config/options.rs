// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scan: ScanOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Options injected into the scan; no ambient state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Prefer the discounted price sub-element when one exists.
    pub use_discount: bool,
    /// How many elements past an item marker to search for its price block.
    pub lookahead: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            use_discount: true,
            lookahead: PRICE_LOOKAHEAD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Markdown => "md", ExportFormat::Csv => "csv" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// Full output path for today's export: `<dir>/shopee_orders_<date>.<ext>`.
    pub fn out_path(&self) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        self.out_dir.join(join!(EXPORT_STEM, "_", &date.to_string(), ".", self.format.ext()))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. A path with an extension is
    /// treated as a file hint and its parent is used; the filename itself is
    /// always the dated stem, and format controls the extension.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR);
            return;
        }
        let p = Path::new(s);
        self.out_dir = if p.extension().is_some() {
            p.parent()
                .filter(|d| !d.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
        } else {
            p.to_path_buf()
        };
    }
}
