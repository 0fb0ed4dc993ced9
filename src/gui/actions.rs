// src/gui/actions.rs
//
// Button "executive" actions for the action bar and history panel.
// Keeps UI code (layout) in components/ and the operational logic here.
//
// Design notes:
// - These functions update status/logs and mutate `App` as needed.
// - A failed parse leaves the previous results untouched; only a completed
//   scan replaces them wholesale.

use std::fs;

use crate::config::options::ExportFormat;
use crate::file;
use crate::gui::app::App;
use crate::scrape;
use crate::store::{HistoryEntry, HistoryStore};

/// Queue the parse for the next frame so the busy status renders first.
/// The Parse control is disabled while one is pending.
pub fn queue_parse(app: &mut App) {
    let path = app.input_path_text.trim().to_string();
    if path.is_empty() {
        app.status("No input file given");
        logd!("Parse: Clicked with empty input path");
        return;
    }
    logf!("Parse: queued input={path}");
    app.pending_parse = Some(path);
    app.status("Parsing…");
}

pub fn parse(app: &mut App, path: &str) {
    let html = match fs::read_to_string(path) {
        Ok(h) => h,
        Err(e) => {
            loge!("Parse: cannot read {path}: {e}");
            app.status(format!("Cannot read {path}: {e}"));
            return;
        }
    };

    app.state.sync_settings_into_scan();

    match scrape::collect_orders(&html, &app.state.options.scan, None) {
        Ok(results) if results.is_empty() => {
            logd!("Parse: no matching elements in {path}");
            app.results = results;
            app.show_total = false;
            app.rebuild_view();
            app.status("No matching elements found");
        }
        Ok(results) => {
            logf!("Parse: OK records={} total={}", results.len(), results.grand_total());
            app.results = results;
            app.show_total = false;
            app.rebuild_view();
            app.status(format!("Parsed {} order(s)", app.results.len()));
        }
        Err(e) => {
            // Previous results stay as they were.
            loge!("Parse: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn clean(app: &mut App) {
    app.results.clear();
    app.row_ix.clear();
    app.show_total = false;
    logf!("Clean: results cleared");
    app.status("Cleaned");
}

pub fn export(app: &mut App, format: ExportFormat) {
    if app.results.is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    if app.out_path_dirty {
        app.state.options.export.set_dir(&app.out_path_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.out_path_dirty = false;
    }
    app.state.options.export.format = format;

    match file::write_export(&app.state.options.export, &app.results) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn save_history(app: &mut App) {
    if app.results.is_empty() {
        app.status("Nothing to save");
        logd!("History: Save clicked with no results");
        return;
    }

    let entry = HistoryEntry::snapshot(&app.results);
    match app.history_store.append(entry) {
        Ok(()) => {
            app.reload_history();
            logf!("History: saved, {} entries", app.history.len());
            app.status("Saved to history");
        }
        Err(e) => {
            loge!("History: save failed: {e}");
            app.status(format!("History error: {e}"));
        }
    }
}

/// Replace the current results with a copy of the stored snapshot.
/// The entry itself is untouched.
pub fn load_history(app: &mut App, index: usize) {
    let Some(entry) = app.history.get(index) else {
        logd!("History: Load clicked on missing index {index}");
        return;
    };
    app.results = entry.results.clone();
    app.show_total = false;
    app.rebuild_view();
    logf!("History: loaded entry {} ({} records)", index + 1, app.results.len());
    app.status(format!("Loaded history entry {}", index + 1));
}

pub fn delete_history(app: &mut App, index: usize) {
    match app.history_store.delete_at(index) {
        Ok(()) => {
            app.reload_history();
            logf!("History: deleted entry {}", index + 1);
            app.status(format!("Deleted history entry {}", index + 1));
        }
        Err(e) => {
            loge!("History: delete failed: {e}");
            app.status(format!("History error: {e}"));
        }
    }
}
