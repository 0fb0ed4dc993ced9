// src/gui/components/history_panel.rs
//
// Renders the saved-session list and routes Load/Delete back through
// actions. Entries are read-only snapshots; loading copies, never mutates.

use eframe::egui::{self, RichText};

use crate::config::consts::HISTORY_CAP;
use crate::data::format_rp;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("History");
    ui.label(format!("{} / {} saved", app.history.len(), HISTORY_CAP));

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("history_panel_scroll")
        .show(ui, |ui| {
            let mut load: Option<usize> = None;
            let mut delete: Option<usize> = None;

            for (i, entry) in app.history.iter().enumerate() {
                let when = entry
                    .timestamp
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M");
                ui.label(RichText::new(when.to_string()).strong());
                ui.label(format!(
                    "{} item(s) — {}",
                    entry.results.len(),
                    format_rp(entry.total_amount),
                ));
                ui.horizontal(|ui| {
                    if ui.small_button("Load").clicked() {
                        load = Some(i);
                    }
                    if ui.small_button("Delete").clicked() {
                        delete = Some(i);
                    }
                });
                ui.separator();
            }

            if app.history.is_empty() {
                ui.label("No saved sessions yet.");
            }

            if let Some(i) = load {
                actions::load_history(app, i);
            }
            if let Some(i) = delete {
                actions::delete_history(app, i);
            }
        });
}
