use std::collections::HashSet;

use eframe::egui::{self, Align, Context, Layout};

use crate::labels::LabelCatalog;

use super::super::interaction::InteractionState;
use super::super::physics::Simulation;
use super::super::viewport::Viewport;
use super::super::{ViewMode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(catalog: LabelCatalog) -> Self {
        // The raw dataset is dominated by one-off labels; start above them.
        let min_count = 50.min(catalog.max_count.max(1));

        Self {
            catalog,
            min_count,
            search: String::new(),
            view_mode: ViewMode::Bubbles,
            viewport: Viewport::default(),
            interaction: InteractionState::default(),
            simulation: Simulation::default(),
            visible_dirty: true,
            visible_max_count: 0,
            visible_sorted: Vec::new(),
            expanded_rows: HashSet::new(),
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        data_path: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        if self.visible_dirty {
            self.rebuild_visible();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("labelscope");
                    ui.separator();
                    ui.label(format!("labels: {}", self.catalog.label_count()));
                    ui.label(format!(
                        "mix references: {}",
                        self.catalog.mix_reference_count()
                    ));
                    ui.label(format!("data: {data_path}"));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload data"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("showing {} labels", self.visible_sorted.len()));
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Loading label data...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                match self.view_mode {
                    ViewMode::Bubbles => self.draw_chart(ui),
                    ViewMode::List => self.draw_list(ui),
                }
            }
        });

        // The details popup belongs to the bubble view; the list shows its
        // mixes inline instead.
        if self.view_mode == ViewMode::Bubbles {
            self.draw_popup(ctx);
        }
    }
}
