// src/gui/components/data_table.rs
//
// Draws the live table over the current row-index view.
// Purely a view; sorting clicks are routed back through App.

use eframe::egui::{self, Label, RichText, Sense, TextEdit, TextStyle};
use egui_extras::{Column, TableBuilder};

use crate::data::{display_total, SortKey};
use crate::gui::app::App;
use crate::markdown;

const HEADERS: [(&str, SortKey); 4] = [
    ("No", SortKey::Scan),
    ("Shop Name", SortKey::Shop),
    ("Item Name", SortKey::Item),
    ("Total Order", SortKey::Price),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<SortKey> = None;

    // Leave room under the table for the raw-output section.
    let table_h = (ui.available_height() - 140.0).max(120.0);

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(table_h)
        .column(Column::auto().at_least(36.0))
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .column(Column::initial(110.0))
        .header(24.0, |mut header| {
            for (label, key) in HEADERS {
                header.col(|ui| {
                    let marker = if app.state.gui.sort_key == Some(key) {
                        if app.state.gui.sort_desc { " ▼" } else { " ▲" }
                    } else {
                        ""
                    };
                    let resp = ui.add(
                        Label::new(RichText::new(join!(label, marker)).strong())
                            .sense(Sense::click()),
                    );
                    if resp.clicked() {
                        clicked = Some(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.row_ix.len(), |mut row| {
                let view_ix = row.index();
                let Some(&src_ix) = app.row_ix.get(view_ix) else { return };
                let Some(rec) = app.results.records().get(src_ix) else { return };

                row.col(|ui| {
                    ui.label((src_ix + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.shop_name).on_hover_text(&rec.shop_name);
                });
                row.col(|ui| {
                    ui.label(&rec.item_name).on_hover_text(&rec.item_name);
                });
                row.col(|ui| {
                    ui.label(display_total(rec.total_order));
                });
            });
        });

    if let Some(key) = clicked {
        app.toggle_sort(key);
    }

    ui.separator();

    ui.collapsing("Raw parsed output", |ui| {
        let mut raw = markdown::to_raw_string(&app.results);
        ui.add(
            TextEdit::multiline(&mut raw)
                .font(TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(5)
                .interactive(false),
        );
    });
}
