use crate::constants::{DECOR_AMPLITUDE_X, DECOR_AMPLITUDE_Y, DECOR_PHASE_STEP};
use glam::Vec2;

/// Shared phase for the floating decor elements. Element `i` orbits at
/// `i + 1` times the base rate, so neighbours never move in lockstep.
#[derive(Clone, Debug, Default)]
pub struct FloatingDecor {
    phase: f32,
}

impl FloatingDecor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn advance(&mut self) {
        self.phase += DECOR_PHASE_STEP;
    }

    /// Pixel offset of element `index` at the current phase.
    pub fn offset(&self, index: usize) -> Vec2 {
        let t = self.phase * (index as f32 + 1.0);
        Vec2::new(t.sin() * DECOR_AMPLITUDE_X, t.cos() * DECOR_AMPLITUDE_Y)
    }

    /// CSS `transform` value for element `index`.
    pub fn transform(&self, index: usize) -> String {
        let o = self.offset(index);
        format!("translate({:.3}px, {:.3}px)", o.x, o.y)
    }
}
