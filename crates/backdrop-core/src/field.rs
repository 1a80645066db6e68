//! Constellation particle field.
//!
//! A small population of drifting points, linked by faint lines when they are
//! close, pushed away from the pointer and kicked outward on pointer-down.
//! Population scales with viewport area and is rebuilt on every resize.

use crate::config::FieldParams;
use crate::constants::MAX_PARTICLES_CEILING;
use crate::driver::Animate;
use crate::surface::{Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Last known pointer position. `active` flips on the first move and stays on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub active: bool,
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// Opacity of a link of length `distance`: 1 at zero, falling linearly to 0
/// at `max_distance`.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

// Negative, zero and non-finite extents all collapse to 0.
#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[inline]
fn area_count(width: f32, height: f32, params: &FieldParams) -> usize {
    let area = sanitize_extent(width) * sanitize_extent(height);
    // NaN casts to 0
    let count = (area / params.area_per_particle).floor();
    count.min(MAX_PARTICLES_CEILING as f32) as usize
}

/// Population cap, fixed from the first viewport the field sees.
pub fn max_particles_for(width: f32, height: f32, params: &FieldParams) -> usize {
    area_count(width, height, params)
        .max(params.max_particles_floor)
        .min(MAX_PARTICLES_CEILING)
}

/// Population for a `width` x `height` viewport, within `[min_particles, max]`
/// and never above [`MAX_PARTICLES_CEILING`].
pub fn particle_count(width: f32, height: f32, max: usize, params: &FieldParams) -> usize {
    area_count(width, height, params)
        .min(max)
        .max(params.min_particles)
        .min(MAX_PARTICLES_CEILING)
}

pub struct ParticleField<S> {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    max_particles: usize,
    pointer: Pointer,
    params: FieldParams,
    rng: StdRng,
    surface: Option<S>,
}

impl<S: Surface> ParticleField<S> {
    /// Build an empty field for the initial viewport. Call [`initialize`]
    /// to seed it. A `params.seed` takes precedence over `seed`.
    ///
    /// [`initialize`]: ParticleField::initialize
    pub fn new(surface: Option<S>, width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let rng = StdRng::seed_from_u64(params.seed.unwrap_or(seed));
        Self {
            particles: Vec::new(),
            width,
            height,
            max_particles: max_particles_for(width, height, &params),
            pointer: Pointer {
                pos: Vec2::new(width / 2.0, height / 2.0),
                active: false,
            },
            params,
            rng,
            surface,
        }
    }

    /// Resize the surface and rebuild the whole population.
    pub fn initialize(&mut self, width: f32, height: f32) {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        match self.surface.as_mut() {
            Some(surface) => surface.resize(width, height),
            None => return,
        }
        self.width = width;
        self.height = height;

        let count = particle_count(width, height, self.max_particles, &self.params);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = seed_particle(&mut self.rng, width, height, &self.params);
            self.particles.push(p);
        }
        log::debug!(
            "[field] seeded {} particles for {:.0}x{:.0}",
            count,
            width,
            height
        );
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.pos = Vec2::new(x, y);
        self.pointer.active = true;
    }

    /// Kick every particle within the impulse radius away from `(px, py)`.
    pub fn apply_impulse(&mut self, px: f32, py: f32) {
        if self.surface.is_none() {
            return;
        }
        let origin = Vec2::new(px, py);
        let radius = self.params.impulse_radius;
        let divisor = self.params.impulse_divisor;
        for p in &mut self.particles {
            let offset = p.pos - origin;
            if offset.length() < radius {
                p.vel += offset / divisor;
            }
        }
    }

    /// All particle pairs closer than the link distance. O(n²); n stays in
    /// the dozens.
    pub fn links(&self) -> Vec<Link> {
        let max = self.params.link_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = a.pos.distance(b.pos);
                if distance < max {
                    out.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity: link_opacity(distance, max),
                    });
                }
            }
        }
        out
    }

    pub fn render_frame(&mut self) {
        let links = self.links();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (w, h) = (self.width, self.height);

        // translucent fill instead of a hard clear leaves motion trails
        surface.clear(w, h);
        surface.fill_rect(Vec2::ZERO, Vec2::new(w, h), self.params.trail_fill);

        for link in &links {
            let color = Rgba::from_rgb(
                self.params.link_rgb,
                link.opacity * self.params.link_alpha_scale,
            );
            surface.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                self.params.link_width,
                color,
            );
        }

        let pointer = self.pointer;
        for p in &mut self.particles {
            if pointer.active {
                let offset = p.pos - pointer.pos;
                if offset.length() < self.params.repel_radius {
                    p.pos += offset * self.params.repel_strength;
                }
            }
            surface.fill_circle(p.pos, p.radius, self.params.particle_fill);
        }

        self.advance();
    }

    fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            reflect_axis(&mut p.pos.x, &mut p.vel.x, w);
            reflect_axis(&mut p.pos.y, &mut p.vel.y, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

impl<S: Surface> Animate for ParticleField<S> {
    fn frame(&mut self) {
        self.render_frame();
    }
}

fn seed_particle(rng: &mut StdRng, width: f32, height: f32, params: &FieldParams) -> Particle {
    let s = params.max_seed_speed.abs();
    Particle {
        pos: Vec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
        vel: Vec2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
        radius: rng.gen_range(params.min_radius..=params.max_radius),
    }
}

// Clamp onto the edge and point the velocity back inside. Clamping keeps the
// position in bounds even when a pointer kick overshoots by more than a frame.
#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = extent;
        *vel = -vel.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_axis_clamps_and_turns_inward() {
        let (mut x, mut vx) = (-3.0, -0.4);
        reflect_axis(&mut x, &mut vx, 100.0);
        assert_eq!(x, 0.0);
        assert!(vx > 0.0);

        let (mut x, mut vx) = (104.0, 2.0);
        reflect_axis(&mut x, &mut vx, 100.0);
        assert_eq!(x, 100.0);
        assert!(vx < 0.0);

        let (mut x, mut vx) = (50.0, 0.3);
        reflect_axis(&mut x, &mut vx, 100.0);
        assert_eq!((x, vx), (50.0, 0.3));
    }

    #[test]
    fn cap_never_drops_below_floor() {
        let params = FieldParams::default();
        assert_eq!(max_particles_for(0.0, 0.0, &params), params.max_particles_floor);
        assert_eq!(max_particles_for(3840.0, 2160.0, &params), 69);
    }
}
