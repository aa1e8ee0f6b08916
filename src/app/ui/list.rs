use eframe::egui::{self, Color32, RichText, Ui};

use crate::util::{appearances_label, mix_display_name};

use super::super::ViewModel;
use super::super::scale::bubble_color;

impl ViewModel {
    pub(in crate::app) fn draw_list(&mut self, ui: &mut Ui) {
        if self.visible_dirty {
            self.rebuild_visible();
        }

        if self.visible_sorted.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No labels match the current filters.");
            });
            return;
        }

        let max_count = self.visible_max_count;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in 0..self.visible_sorted.len() {
                    let id = self.visible_sorted[row].clone();
                    let Some(record) = self.catalog.labels.get(&id) else {
                        continue;
                    };
                    let count = record.count;
                    let mixes = record.mixes.clone();

                    let is_selected = self.interaction.is_selected(&id);
                    let mut toggle_expanded = false;

                    ui.horizontal(|ui| {
                        let (dot_rect, _) = ui
                            .allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().circle_filled(
                            dot_rect.center(),
                            5.0,
                            bubble_color(count, max_count),
                        );

                        let row_response = ui.selectable_label(is_selected, id.as_str());
                        if row_response.clicked() {
                            self.interaction.click(&id);
                            toggle_expanded = true;
                        }

                        ui.label(
                            RichText::new(appearances_label(count))
                                .small()
                                .color(Color32::from_gray(170)),
                        );

                        let expanded = self.expanded_rows.contains(&id);
                        let arrow = if expanded { "▾" } else { "▸" };
                        if ui.small_button(arrow).clicked() {
                            toggle_expanded = true;
                        }
                    });

                    if toggle_expanded && !self.expanded_rows.remove(&id) {
                        self.expanded_rows.insert(id.clone());
                    }

                    if self.expanded_rows.contains(&id) {
                        if mixes.is_empty() {
                            ui.indent(("mixes", row), |ui| {
                                ui.label(RichText::new("No mixes recorded.").small());
                            });
                        } else {
                            ui.indent(("mixes", row), |ui| {
                                for mix in &mixes {
                                    ui.hyperlink_to(mix_display_name(mix), mix);
                                }
                            });
                        }
                    }

                    ui.separator();
                }
            });
    }
}
