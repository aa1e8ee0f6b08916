use eframe::egui::Color32;

const MIN_RADIUS: f32 = 15.0;
const MAX_RADIUS: f32 = 60.0;

/// Square-root scale so bubble area, not radius, is linear in the count.
pub(super) fn bubble_radius(count: u64, max_count: u64) -> f32 {
    MIN_RADIUS + (normalize_sqrt(count, max_count) * (MAX_RADIUS - MIN_RADIUS))
}

pub(super) fn bubble_color(count: u64, max_count: u64) -> Color32 {
    let color = colorous::VIRIDIS.eval_continuous(normalize_sqrt(count, max_count) as f64);
    Color32::from_rgb(color.r, color.g, color.b)
}

fn normalize_sqrt(count: u64, max_count: u64) -> f32 {
    let max = max_count.max(1) as f32;
    if max <= 1.0 {
        return 0.0;
    }

    let count = count.clamp(1, max_count) as f32;
    ((count.sqrt() - 1.0) / (max.sqrt() - 1.0)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_spans_the_configured_range() {
        assert_eq!(bubble_radius(1, 100), MIN_RADIUS);
        assert_eq!(bubble_radius(100, 100), MAX_RADIUS);
    }

    #[test]
    fn radius_is_monotonic_in_count() {
        let max = 500;
        let mut previous = 0.0;
        for count in 1..=max {
            let radius = bubble_radius(count, max);
            assert!(radius >= previous, "radius shrank at count {count}");
            previous = radius;
        }
    }

    #[test]
    fn area_grows_linearly_with_count() {
        // sqrt scale: radius^2 should be (close to) affine in the count.
        let r2 = bubble_radius(2, 100);
        let r50 = bubble_radius(50, 100);
        assert!(r50 > r2);
        assert!(r50 / r2 < 50.0_f32.sqrt());
    }

    #[test]
    fn degenerate_domains_clamp_to_minimum() {
        assert_eq!(bubble_radius(0, 100), MIN_RADIUS);
        assert_eq!(bubble_radius(0, 0), MIN_RADIUS);
        assert_eq!(bubble_radius(7, 0), MIN_RADIUS);
        // All-equal counts collapse the domain to a single point.
        assert_eq!(bubble_radius(1, 1), MIN_RADIUS);
    }

    #[test]
    fn color_is_monotonic_and_deterministic() {
        let low = colorous::VIRIDIS.eval_continuous(0.0);
        let high = colorous::VIRIDIS.eval_continuous(1.0);
        assert_eq!(bubble_color(1, 100), Color32::from_rgb(low.r, low.g, low.b));
        assert_eq!(
            bubble_color(100, 100),
            Color32::from_rgb(high.r, high.g, high.b)
        );
        assert_eq!(bubble_color(42, 100), bubble_color(42, 100));
    }
}
