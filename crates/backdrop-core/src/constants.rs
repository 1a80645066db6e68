use crate::surface::Rgba;

// Shared tuning constants for the backdrop and page effects.

// Particle population
pub const AREA_PER_PARTICLE: f32 = 120_000.0; // px² of viewport per particle
pub const MIN_PARTICLES: usize = 12;
pub const MAX_PARTICLES_FLOOR: usize = 18; // the cap never drops below this
pub const MAX_PARTICLES_CEILING: usize = 600; // hard limit whatever the viewport or overrides
pub const MIN_AREA_PER_PARTICLE: f32 = 10_000.0; // smallest accepted override

// Particle seeding ranges (inclusive)
pub const MAX_SEED_SPEED: f32 = 0.4; // px per frame on each axis
pub const MIN_RADIUS: f32 = 0.6;
pub const MAX_RADIUS: f32 = 1.8;

// Constellation links
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_ALPHA_SCALE: f32 = 0.08; // alpha of a zero-length link
pub const LINK_WIDTH: f32 = 1.0;

// Pointer interaction
pub const REPEL_RADIUS: f32 = 120.0;
pub const REPEL_STRENGTH: f32 = 0.01; // fraction of the offset applied per frame
pub const IMPULSE_RADIUS: f32 = 160.0;
pub const IMPULSE_DIVISOR: f32 = 130.0; // offset / divisor is added to velocity

// Palette
pub const TRAIL_FILL: Rgba = Rgba::new(2, 6, 10, 0.35);
pub const LINK_RGB: [u8; 3] = [0, 255, 209];
pub const PARTICLE_FILL: Rgba = Rgba::new(124, 92, 255, 0.9);

// Floating decor
pub const DECOR_PHASE_STEP: f32 = 0.0016; // radians per frame
pub const DECOR_AMPLITUDE_X: f32 = 16.0; // px
pub const DECOR_AMPLITUDE_Y: f32 = 10.0; // px

// Reveals
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.08;
pub const SKILL_REVEAL_THRESHOLD: f64 = 0.22;
pub const PROJECT_REVEAL_THRESHOLD: f64 = 0.08;
pub const PROJECT_STAGGER_MS: u64 = 100;
pub const DEFAULT_SKILL_VALUE: u32 = 70;
pub const MAX_SKILL_VALUE: u32 = 100;

// Modal
pub const FALLBACK_REPO_URL: &str = "#";

// Button press micro-interaction
pub const PRESS_DURATION_MS: f64 = 220.0;
pub const PRESS_SCALE_FROM: &str = "scale(.98)";
pub const PRESS_SCALE_TO: &str = "scale(1)";
pub const PRESS_EASING: &str = "cubic-bezier(.2,.9,.2,1)";
