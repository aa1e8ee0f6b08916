use eframe::egui::{Vec2, vec2};

/// Direction between two points, with a deterministic golden-angle fallback
/// for coincident pairs so they separate instead of producing NaN.
fn separation_axis(delta: Vec2, distance: f32, a: usize, b: usize) -> Vec2 {
    if distance > 0.0001 {
        delta / distance
    } else {
        let angle = ((a as f32) * 0.618_034 + (b as f32) * 0.414_214) * std::f32::consts::TAU;
        vec2(angle.cos(), angle.sin())
    }
}

/// Softened inverse-square charge repulsion over every node pair.
pub(super) fn accumulate_repulsion(
    positions: &[Vec2],
    strength: f32,
    softening: f32,
    forces: &mut [Vec2],
) {
    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            let delta = positions[a] - positions[b];
            let distance_sq = delta.length_sq();
            let direction = separation_axis(delta, distance_sq.sqrt(), a, b);
            let push = direction * (strength / (distance_sq + softening));

            forces[a] += push;
            forces[b] -= push;
        }
    }
}

/// One positional relaxation pass: each overlapping pair moves apart along
/// its axis by half the remaining overlap, split evenly. Returns the largest
/// single displacement applied.
pub(super) fn relax_collisions(positions: &mut [Vec2], radii: &[f32], padding: f32) -> f32 {
    let mut max_displacement = 0.0_f32;

    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            let delta = positions[a] - positions[b];
            let distance_sq = delta.length_sq();
            let distance = distance_sq.sqrt();

            let min_distance = radii[a] + radii[b] + padding;
            if distance >= min_distance {
                continue;
            }

            let direction = separation_axis(delta, distance, a, b);
            let correction = (min_distance - distance) * 0.5;
            let shift = direction * (correction * 0.5);

            positions[a] += shift;
            positions[b] -= shift;
            max_displacement = max_displacement.max(correction * 0.5);
        }
    }

    max_displacement
}
