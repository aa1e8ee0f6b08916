use eframe::egui::{self, Ui};

use super::super::viewport::Viewport;
use super::super::{ViewMode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.add_space(6.0);
        ui.heading("Filters");
        ui.add_space(4.0);

        ui.label("Search labels or mixes");
        let search_response = ui.text_edit_singleline(&mut self.search);
        if search_response.changed() {
            self.visible_dirty = true;
        }

        ui.add_space(8.0);
        let slider_max = self.catalog.max_count.max(1);
        let slider_response = ui.add(
            egui::Slider::new(&mut self.min_count, 1..=slider_max).text("minimum appearances"),
        );
        if slider_response.changed() {
            self.visible_dirty = true;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label("View");
        let previous_mode = self.view_mode;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.view_mode, ViewMode::Bubbles, "Bubbles");
            ui.selectable_value(&mut self.view_mode, ViewMode::List, "List");
        });
        if self.view_mode != previous_mode {
            match self.view_mode {
                // No layout ticks while the chart is off screen.
                ViewMode::List => self.simulation.stop(),
                ViewMode::Bubbles => self.visible_dirty = true,
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(format!("Showing {} labels", self.visible_sorted.len()));
        if ui.button("Reset view").clicked() {
            self.viewport = Viewport::default();
        }
    }
}
