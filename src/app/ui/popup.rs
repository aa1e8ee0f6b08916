use eframe::egui::{self, Align2, Context, RichText, vec2};

use crate::util::{appearances_label, mix_display_name};

use super::super::ViewModel;

impl ViewModel {
    /// Centered details window for the selected label. Closing it clears the
    /// selection, so clicking the same bubble afterwards reselects instead
    /// of toggling a closed popup back open.
    pub(in crate::app) fn draw_popup(&mut self, ctx: &Context) {
        if !self.interaction.popup_open {
            return;
        }
        let Some(id) = self.interaction.selected.clone() else {
            return;
        };
        let Some(record) = self.catalog.labels.get(&id) else {
            self.interaction.close_popup();
            return;
        };

        let mixes_expanded = self.interaction.mixes_expanded;
        let mut window_open = true;
        let mut toggle_mixes = false;

        egui::Window::new(record.id.as_str())
            .open(&mut window_open)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(appearances_label(record.count)).strong());
                    let toggle_text = if mixes_expanded {
                        "Hide mixes"
                    } else {
                        "Show mixes"
                    };
                    if ui.button(toggle_text).clicked() {
                        toggle_mixes = true;
                    }
                });

                if mixes_expanded {
                    ui.separator();
                    ui.label(format!("Appears in {} mixes:", record.mixes.len()));
                    egui::ScrollArea::vertical()
                        .max_height(240.0)
                        .show(ui, |ui| {
                            for mix in &record.mixes {
                                ui.hyperlink_to(mix_display_name(mix), mix);
                            }
                        });
                }
            });

        if toggle_mixes {
            self.interaction.toggle_mixes();
        }
        if !window_open {
            self.interaction.close_popup();
        }
    }
}
