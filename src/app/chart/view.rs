use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::util::appearances_label;

use super::super::ViewModel;
use super::super::render_utils::{circle_visible, draw_background};
use super::super::scale::bubble_color;

impl ViewModel {
    pub(in crate::app) fn draw_chart(&mut self, ui: &mut Ui) {
        if self.visible_dirty {
            self.rebuild_visible();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.viewport.pan, self.viewport.zoom);
        self.handle_chart_zoom(ui, rect, &response);
        self.handle_chart_pan(&response);

        if self.simulation.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No labels match the current filters.",
                FontId::proportional(14.0),
                Color32::from_gray(200),
            );
            return;
        }

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let layout_moving = self.simulation.tick(frame_delta_seconds);
        if layout_moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        let zoom = self.viewport.zoom;
        let mut screen_positions = Vec::with_capacity(self.simulation.node_count());
        let mut screen_radii = Vec::with_capacity(self.simulation.node_count());
        for node in self.simulation.nodes() {
            screen_positions.push(self.viewport.world_to_screen(rect, node.pos));
            screen_radii.push(node.radius * zoom);
        }

        let hovered_index = Self::hovered_bubble(ui, rect, &screen_positions, &screen_radii);
        match hovered_index {
            Some(index) => {
                let id = self.simulation.nodes()[index].id.clone();
                self.interaction.pointer_enter(&id);
                ui.output_mut(|output| {
                    output.cursor_icon = egui::CursorIcon::PointingHand;
                });
            }
            None => {
                if let Some(previous) = self.interaction.hovered.clone() {
                    self.interaction.pointer_leave(&previous);
                }
            }
        }

        if response.clicked_by(egui::PointerButton::Primary)
            && let Some(index) = hovered_index
        {
            let id = self.simulation.nodes()[index].id.clone();
            self.interaction.click(&id);
        }

        // Smallest bubbles draw first so big ones don't bury them entirely;
        // the selected bubble is raised above everything.
        let mut draw_order = (0..self.simulation.node_count()).collect::<Vec<_>>();
        draw_order.sort_by_key(|&index| self.simulation.nodes()[index].count);
        if let Some(selected_slot) = draw_order
            .iter()
            .position(|&index| self.interaction.is_selected(&self.simulation.nodes()[index].id))
        {
            let raised = draw_order.remove(selected_slot);
            draw_order.push(raised);
        }

        let max_count = self.visible_max_count;
        for &index in &draw_order {
            let node = &self.simulation.nodes()[index];
            let position = screen_positions[index];
            let radius = screen_radii[index];
            if !circle_visible(rect, position, radius) {
                continue;
            }

            let is_hovered = self.interaction.is_hovered(&node.id);
            let is_selected = self.interaction.is_selected(&node.id);

            let fill = bubble_color(node.count, max_count).gamma_multiply(0.9);
            painter.circle_filled(position, radius, fill);
            if is_selected || is_hovered {
                painter.circle_stroke(position, radius, Stroke::new(2.0, Color32::WHITE));
            } else {
                painter.circle_stroke(
                    position,
                    radius,
                    Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190)),
                );
            }

            // Hovered/selected labels ignore the LOD cutoff.
            if self.viewport.label_visible(node.radius) || is_hovered || is_selected {
                let font_size = ((radius / 3.0) + 8.0).min(16.0);
                painter.text(
                    position,
                    Align2::CENTER_CENTER,
                    &node.id,
                    FontId::proportional(font_size),
                    Color32::WHITE,
                );
            }
        }

        if let Some(id) = self.interaction.hovered.clone()
            && let Some(record) = self.catalog.labels.get(&id)
        {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!("{}  |  {}", record.id, appearances_label(record.count)),
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }
    }
}
