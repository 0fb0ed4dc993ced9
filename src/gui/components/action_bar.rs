// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner, Button, Color32, RichText, TextEdit, TextStyle};

use crate::config::options::ExportFormat;
use crate::data::format_rp;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Input + output paths ---
    ui.horizontal(|ui| {
        ui.label("Order page:");
        ui.add(
            TextEdit::singleline(&mut app.input_path_text)
                .font(TextStyle::Monospace)
                .desired_width(300.0)
                .hint_text("saved page (.html)"),
        );

        ui.label("Output:");
        if ui
            .add(TextEdit::singleline(&mut app.out_path_text).font(TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions ---
    let busy = app.pending_parse.is_some();
    let have_results = !app.results.is_empty();

    ui.horizontal(|ui| {
        let orange = Color32::from_rgb(238, 77, 45);
        let button_parse = ui.add_enabled(
            !busy,
            Button::new(RichText::new("PARSE").color(Color32::BLACK).strong()).fill(orange),
        );
        if button_parse.clicked() {
            actions::queue_parse(app);
        }

        if ui.add_enabled(have_results, Button::new("Grand Total")).clicked() {
            app.show_total = true;
            logd!("UI: grand total shown");
        }
        if ui.add_enabled(have_results, Button::new("Clean")).clicked() {
            actions::clean(app);
        }
        if ui.add_enabled(have_results, Button::new("Export Markdown")).clicked() {
            actions::export(app, ExportFormat::Markdown);
        }
        if ui.add_enabled(have_results, Button::new("Export CSV")).clicked() {
            actions::export(app, ExportFormat::Csv);
        }
        if ui.add_enabled(have_results, Button::new("Save to History")).clicked() {
            actions::save_history(app);
        }

        if busy {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status.clone());
    });

    // --- Settings + filter ---
    ui.horizontal(|ui| {
        let mut settings_dirty = false;
        {
            let s = &mut app.state.settings;
            settings_dirty |= ui
                .checkbox(&mut s.use_discount, "Use discounted price if available")
                .changed();
            settings_dirty |= ui.checkbox(&mut s.auto_show, "Show results on startup").changed();
            settings_dirty |= ui.checkbox(&mut s.dark_theme, "Dark theme").changed();
        }

        let mut visible = app.state.gui.results_visible;
        if ui.checkbox(&mut visible, "Show results").changed() {
            app.state.gui.results_visible = visible;
            app.state.settings.results_visible = visible;
            settings_dirty = true;
        }

        if settings_dirty {
            app.persist_settings();
            logf!(
                "UI: settings → discount={} auto_show={} dark={} visible={}",
                app.state.settings.use_discount,
                app.state.settings.auto_show,
                app.state.settings.dark_theme,
                app.state.settings.results_visible,
            );
        }

        ui.label("Filter:");
        if ui
            .add(TextEdit::singleline(&mut app.state.gui.filter).desired_width(160.0))
            .changed()
        {
            app.rebuild_view();
        }
    });

    if app.show_total {
        ui.label(
            RichText::new(format!("Grand Total: {}", format_rp(app.results.grand_total())))
                .strong(),
        );
    }
}
