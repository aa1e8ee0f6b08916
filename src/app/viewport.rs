use eframe::egui::{Pos2, Rect, Vec2};

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 5.0;

/// Screen-space radius below which a bubble's text label is suppressed.
const LABEL_VISIBLE_THRESHOLD: f32 = 25.0;

/// Pan/zoom state for the bubble canvas. World origin is the simulation
/// center; `screen = rect.center + pan + world * zoom`.
#[derive(Clone, Copy, Debug)]
pub(super) struct Viewport {
    pub(super) pan: Vec2,
    pub(super) zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub(super) fn world_to_screen(&self, rect: Rect, world: Vec2) -> Pos2 {
        rect.center() + self.pan + world * self.zoom
    }

    pub(super) fn screen_to_world(&self, rect: Rect, screen: Pos2) -> Vec2 {
        (screen - rect.center() - self.pan) / self.zoom
    }

    /// Scroll zoom anchored at the pointer.
    pub(super) fn zoom_at(&mut self, rect: Rect, pointer: Pos2, scroll: f32) {
        let world_before = self.screen_to_world(rect, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(super) fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub(super) fn label_visible(&self, world_radius: f32) -> bool {
        world_radius * self.zoom > LABEL_VISIBLE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn transforms_round_trip() {
        let viewport = Viewport {
            pan: vec2(13.0, -7.5),
            zoom: 2.25,
        };
        let world = vec2(42.0, -81.0);

        let screen = viewport.world_to_screen(rect(), world);
        let back = viewport.screen_to_world(rect(), screen);
        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::default();
        for _ in 0..200 {
            viewport.zoom_at(rect(), pos2(400.0, 300.0), 500.0);
        }
        assert_eq!(viewport.zoom, MAX_ZOOM);

        for _ in 0..400 {
            viewport.zoom_at(rect(), pos2(400.0, 300.0), -500.0);
        }
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn zoom_keeps_pointer_anchored() {
        let mut viewport = Viewport {
            pan: vec2(25.0, 40.0),
            zoom: 1.4,
        };
        let pointer = pos2(612.0, 128.0);
        let world_before = viewport.screen_to_world(rect(), pointer);

        viewport.zoom_at(rect(), pointer, 120.0);

        let world_after = viewport.screen_to_world(rect(), pointer);
        assert!((world_after - world_before).length() < 1e-2);
    }

    #[test]
    fn label_visibility_follows_zoom() {
        let mut viewport = Viewport::default();
        assert!(!viewport.label_visible(20.0));

        viewport.zoom = 2.0;
        assert!(viewport.label_visible(20.0)); // 20 * 2 = 40 > 25

        viewport.zoom = 1.0;
        assert!(viewport.label_visible(30.0));
    }

    #[test]
    fn pan_is_unconstrained() {
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(1.0e6, -1.0e6));
        assert_eq!(viewport.pan, vec2(1.0e6, -1.0e6));
    }
}
