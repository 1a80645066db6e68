//! Particle field tuning.
//!
//! Defaults come from [`crate::constants`]. The page may override a handful of
//! them through `data-*` attributes on the canvas; the lookup closure hides
//! where the raw strings come from so this stays host-testable.

use crate::constants::*;
use crate::error::ConfigError;
use crate::surface::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub area_per_particle: f32,
    pub min_particles: usize,
    pub max_particles_floor: usize,
    pub max_seed_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub link_distance: f32,
    pub link_alpha_scale: f32,
    pub link_width: f32,
    pub link_rgb: [u8; 3],
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub impulse_radius: f32,
    pub impulse_divisor: f32,
    pub trail_fill: Rgba,
    pub particle_fill: Rgba,
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            min_particles: MIN_PARTICLES,
            max_particles_floor: MAX_PARTICLES_FLOOR,
            max_seed_speed: MAX_SEED_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            link_distance: LINK_DISTANCE,
            link_alpha_scale: LINK_ALPHA_SCALE,
            link_width: LINK_WIDTH,
            link_rgb: LINK_RGB,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            impulse_radius: IMPULSE_RADIUS,
            impulse_divisor: IMPULSE_DIVISOR,
            trail_fill: TRAIL_FILL,
            particle_fill: PARTICLE_FILL,
            seed: None,
        }
    }
}

/// Attribute keys accepted by [`FieldParams::with_overrides`], without the
/// `data-` prefix.
pub const OVERRIDE_KEYS: [&str; 6] = [
    "link-distance",
    "repel-radius",
    "impulse-radius",
    "area-per-particle",
    "min-particles",
    "seed",
];

impl FieldParams {
    /// Apply overrides from `lookup(key)`. Keys that return `None` keep their
    /// current value. The first invalid value aborts and nothing is applied.
    pub fn with_overrides<F>(&self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut next = self.clone();
        if let Some(v) = positive(&lookup, "link-distance")? {
            next.link_distance = v as f32;
        }
        if let Some(v) = positive(&lookup, "repel-radius")? {
            next.repel_radius = v as f32;
        }
        if let Some(v) = positive(&lookup, "impulse-radius")? {
            next.impulse_radius = v as f32;
        }
        if let Some(v) = positive(&lookup, "area-per-particle")? {
            if v < f64::from(MIN_AREA_PER_PARTICLE) {
                return Err(ConfigError::OutOfRange {
                    key: "area-per-particle",
                    value: v,
                });
            }
            next.area_per_particle = v as f32;
        }
        if let Some(v) = positive(&lookup, "min-particles")? {
            if v.fract() != 0.0 || v > MAX_PARTICLES_CEILING as f64 {
                return Err(ConfigError::OutOfRange {
                    key: "min-particles",
                    value: v,
                });
            }
            next.min_particles = v as usize;
            next.max_particles_floor = next.max_particles_floor.max(next.min_particles);
        }
        if let Some(raw) = lookup("seed") {
            let trimmed = raw.trim();
            let seed = trimmed.parse::<u64>().map_err(|_| ConfigError::NotANumber {
                key: "seed",
                value: raw.clone(),
            })?;
            next.seed = Some(seed);
        }
        Ok(next)
    }
}

fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber {
            key,
            value: raw.clone(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange { key, value });
    }
    Ok(Some(value))
}
