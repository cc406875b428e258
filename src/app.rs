use eframe::egui;

use crate::config::Config;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FmeaViewerApp {
    config: Config,
    state: AppState,
}

impl FmeaViewerApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: AppState::default(),
        }
    }
}

impl eframe::App for FmeaViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Central panel: gate, then the dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.gate.unlocked {
                panels::dashboard(ui, &mut self.state, &self.config);
            } else {
                panels::access_gate(ui, &mut self.state, &self.config);
            }
        });
    }
}
