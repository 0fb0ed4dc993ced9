// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::state::AppState;
use crate::data::{ResultSet, SortKey};
use crate::store::{self, HistoryEntry, HistoryStore, JsonHistoryStore};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Shopee Order Parser",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current session results + the index view the table renders
    pub results: ResultSet,
    pub row_ix: Vec<usize>,

    // persisted history, mirrored in memory for display
    pub history: Vec<HistoryEntry>,
    pub history_store: JsonHistoryStore,

    // text field UX
    pub input_path_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
    pub show_total: bool,

    // input path queued one frame so the busy status renders before the
    // synchronous scan runs; also doubles as the re-entrancy guard
    pub pending_parse: Option<String>,

    applied_dark: Option<bool>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.settings = store::load_settings();
        state.sync_settings_into_scan();

        // Panel starts visible only if both flags agree.
        state.gui.results_visible =
            state.settings.auto_show && state.settings.results_visible;

        let history_store = JsonHistoryStore::default_location();
        let history = match history_store.list() {
            Ok(v) => {
                logf!("History: loaded {} entries", v.len());
                v
            }
            Err(e) => {
                loge!("History: load failed: {e}");
                Vec::new()
            }
        };

        let out_path_text = state.options.export.out_dir().display().to_string();

        logf!("Init: history={}, discount={}", history.len(), state.settings.use_discount);

        Self {
            state,
            results: ResultSet::new(),
            row_ix: Vec::new(),
            history,
            history_store,
            input_path_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
            show_total: false,
            pending_parse: None,
            applied_dark: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-derive the displayed row indices from the live results.
    pub fn rebuild_view(&mut self) {
        self.row_ix = self.results.view_indices(
            &self.state.gui.filter,
            self.state.gui.sort_key,
            self.state.gui.sort_desc,
        );
    }

    /// Re-click reverses direction; a new key resets to ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let gui = &mut self.state.gui;
        if gui.sort_key == Some(key) {
            gui.sort_desc = !gui.sort_desc;
        } else {
            gui.sort_key = Some(key);
            gui.sort_desc = false;
        }
        logd!("UI: sort → {:?} desc={}", gui.sort_key, gui.sort_desc);
        self.rebuild_view();
    }

    pub fn persist_settings(&self) {
        if let Err(e) = store::save_settings(&self.state.settings) {
            loge!("Settings: save failed: {e}");
        }
    }

    pub fn reload_history(&mut self) {
        match self.history_store.list() {
            Ok(v) => self.history = v,
            Err(e) => {
                loge!("History: reload failed: {e}");
                self.status(format!("History error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark = self.state.settings.dark_theme;
        if self.applied_dark != Some(dark) {
            ctx.set_visuals(if dark { egui::Visuals::dark() } else { egui::Visuals::light() });
            self.applied_dark = Some(dark);
        }

        // Queued last frame: the busy indicator has rendered once by now.
        if let Some(path) = self.pending_parse.take() {
            actions::parse(self, &path);
        }

        egui::SidePanel::right("history")
            .resizable(false)
            .show(ctx, |ui| {
                components::history_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            if self.state.gui.results_visible {
                components::data_table::draw(ui, self);
            } else {
                ui.label("Results hidden — enable \"Show results\" above.");
            }
        });

        if self.pending_parse.is_some() {
            ctx.request_repaint();
        }
    }
}
