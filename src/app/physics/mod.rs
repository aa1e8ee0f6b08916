mod forces;

use eframe::egui::{Vec2, vec2};

use crate::util::stable_pair;

use forces::{accumulate_repulsion, relax_collisions};

const REPULSION_STRENGTH: f32 = 650.0;
const REPULSION_SOFTENING: f32 = 420.0;
const CENTER_PULL: f32 = 0.000_9;
const COLLISION_PADDING: f32 = 2.0;
const COLLISION_PASSES: usize = 2;
const FORCE_GAIN: f32 = 0.055;
const VELOCITY_DAMPING: f32 = 0.9;
const MAX_FORCE: f32 = 180.0;
const MAX_SPEED: f32 = 14.0;
const MIN_SLEEP_SPEED_SQ: f32 = 0.02 * 0.02;
const MIN_SLEEP_FORCE_SQ: f32 = 0.08 * 0.08;
const MIN_SLEEP_DISPLACEMENT: f32 = 0.05;

pub(super) struct BubbleNode {
    pub(super) id: String,
    pub(super) count: u64,
    pub(super) radius: f32,
    pub(super) pos: Vec2,
    pub(super) velocity: Vec2,
}

/// Iterative bubble layout around the world origin: charge repulsion plus a
/// weak centering pull, with pairwise collision relaxation after each
/// integration step. Owned by the view model; ticks only happen while it is
/// running and the bubble view is on screen.
#[derive(Default)]
pub(super) struct Simulation {
    nodes: Vec<BubbleNode>,
    stopped: bool,
    forces: Vec<Vec2>,
    positions: Vec<Vec2>,
    radii: Vec<f32>,
}

impl Simulation {
    pub(super) fn nodes(&self) -> &[BubbleNode] {
        &self.nodes
    }

    pub(super) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// No further ticks until the simulation is retargeted.
    pub(super) fn stop(&mut self) {
        self.stopped = true;
    }

    /// Replaces the node set, warm-starting ids that survive from the
    /// previous set so the layout doesn't jump on filter changes.
    pub(super) fn retarget(&mut self, targets: Vec<(String, u64, f32)>) {
        let mut prior = std::mem::take(&mut self.nodes)
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect::<std::collections::HashMap<_, _>>();

        self.nodes = targets
            .into_iter()
            .enumerate()
            .map(|(index, (id, count, radius))| {
                if let Some(mut node) = prior.remove(&id) {
                    node.count = count;
                    node.radius = radius;
                    node
                } else {
                    Self::seed_node(id, index, count, radius)
                }
            })
            .collect();
        self.stopped = false;
    }

    fn seed_node(id: String, index: usize, count: u64, radius: f32) -> BubbleNode {
        let (jx, jy) = stable_pair(&id);
        let mut direction = vec2(jx, jy);
        if direction.length_sq() <= 0.0001 {
            let angle = ((index as f32) * 0.618_034 + 0.11) * std::f32::consts::TAU;
            direction = vec2(angle.cos(), angle.sin());
        } else {
            direction = direction.normalized();
        }

        BubbleNode {
            id,
            count,
            radius,
            pos: direction * (radius * 0.5),
            velocity: direction * (1.1 + radius * 0.02),
        }
    }

    /// Advances the layout one step and reports whether anything still
    /// moved. An empty or stopped simulation does no work.
    pub(super) fn tick(&mut self, delta_seconds: f32) -> bool {
        let node_count = self.nodes.len();
        if self.stopped || node_count == 0 {
            return false;
        }

        self.forces.clear();
        self.forces.resize(node_count, Vec2::ZERO);
        self.positions.clear();
        self.radii.clear();
        for node in &self.nodes {
            self.positions.push(node.pos);
            self.radii.push(node.radius);
        }

        accumulate_repulsion(
            &self.positions,
            REPULSION_STRENGTH,
            REPULSION_SOFTENING,
            &mut self.forces,
        );
        for (force, position) in self.forces.iter_mut().zip(&self.positions) {
            *force -= *position * CENTER_PULL;
        }

        let time_step_scale = (delta_seconds * 60.0).clamp(0.25, 3.0);
        let damping_factor = VELOCITY_DAMPING.powf(time_step_scale);
        let mut any_motion = false;

        for (index, force_value) in self.forces.iter().enumerate() {
            let mut force = *force_value;
            let force_sq = force.length_sq();
            if force_sq > MAX_FORCE * MAX_FORCE {
                force *= MAX_FORCE / force_sq.sqrt();
            }

            let node = &mut self.nodes[index];
            let mut velocity = (node.velocity + (force * (FORCE_GAIN * time_step_scale)))
                * damping_factor;
            let mut speed_sq = velocity.length_sq();
            if speed_sq > MAX_SPEED * MAX_SPEED {
                velocity *= MAX_SPEED / speed_sq.sqrt();
                speed_sq = MAX_SPEED * MAX_SPEED;
            }

            if speed_sq < MIN_SLEEP_SPEED_SQ && force_sq < MIN_SLEEP_FORCE_SQ {
                velocity = Vec2::ZERO;
                speed_sq = 0.0;
            }

            node.velocity = velocity;
            node.pos += velocity * time_step_scale;
            if speed_sq > 0.000_001 {
                any_motion = true;
            }
        }

        self.positions.clear();
        for node in &self.nodes {
            self.positions.push(node.pos);
        }

        let mut max_displacement = 0.0_f32;
        for _ in 0..COLLISION_PASSES {
            max_displacement = max_displacement.max(relax_collisions(
                &mut self.positions,
                &self.radii,
                COLLISION_PADDING,
            ));
        }
        for (node, position) in self.nodes.iter_mut().zip(&self.positions) {
            node.pos = *position;
        }
        if max_displacement > MIN_SLEEP_DISPLACEMENT {
            any_motion = true;
        }

        // Degenerate inputs can still blow up the integration; reseed any
        // non-finite node instead of letting NaN reach the renderer.
        for (index, node) in self.nodes.iter_mut().enumerate() {
            if !node.pos.x.is_finite() || !node.pos.y.is_finite() {
                let (jx, jy) = stable_pair(&node.id);
                node.pos = vec2(jx, jy) * (node.radius + index as f32);
                node.velocity = Vec2::ZERO;
                any_motion = true;
            }
        }

        any_motion
    }
}
