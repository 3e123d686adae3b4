use std::time::Duration;

// Shared tuning constants for the effect engines. Config defaults read from here.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // narrower viewports skip the canvas effects

// Easing
pub const SETTLE_EPSILON: f32 = 0.01; // per-axis distance at which a spring stops
pub const PARKED_POINTER: f32 = -9999.0; // pointer coordinate used when the pointer is away

// Ambient particle network
pub const AMBIENT_PARTICLE_COUNT: usize = 40;
pub const AMBIENT_CONNECTION_DISTANCE: f32 = 150.0;
pub const AMBIENT_MOUSE_DISTANCE: f32 = 200.0;
pub const AMBIENT_MAX_SPEED: f32 = 0.8;
pub const AMBIENT_BASE_SIZE: f32 = 2.0;
pub const AMBIENT_MAX_SIZE: f32 = 4.0;
pub const AMBIENT_BASE_ALPHA: f32 = 0.3;
pub const AMBIENT_MAX_ALPHA: f32 = 0.8;
pub const AMBIENT_ATTRACTION: f32 = 0.1; // velocity gain at zero distance
pub const AMBIENT_ALPHA_EASE: f32 = 0.1;
pub const AMBIENT_POINTER_THROTTLE: Duration = Duration::from_millis(50);

// Connection line shaping
pub const LINK_POINTER_FLOOR: f32 = 0.3; // opacity multiplier at the edge of pointer range
pub const LINK_PRIMARY_WEIGHT: f32 = 0.4;
pub const LINK_SECONDARY_WEIGHT: f32 = 0.2;
pub const LINK_WIDTH: f32 = 1.0;

// Confetti field
pub const CONFETTI_PARTICLE_COUNT: usize = 65;
pub const CONFETTI_MIN_SPEED: f32 = 0.08;
pub const CONFETTI_MAX_SPEED: f32 = 0.4;
pub const CONFETTI_MIN_SIZE: f32 = 2.5;
pub const CONFETTI_MAX_SIZE: f32 = 6.0;
pub const CONFETTI_REPEL_DISTANCE: f32 = 120.0;
pub const CONFETTI_REPEL_FORCE: f32 = 0.015;
pub const CONFETTI_SPEED_DECAY: f32 = 0.98; // applied per frame while above max speed
pub const CONFETTI_MIN_ALPHA: f32 = 0.35;
pub const CONFETTI_MAX_ALPHA: f32 = 0.80;
pub const CONFETTI_MAX_SPIN: f32 = 0.75; // degrees per frame, either direction
pub const CONFETTI_MAX_PIXEL_RATIO: f64 = 2.0;

// Magnetic button
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_SPEED: f32 = 0.3;
pub const MAGNETIC_RETURN_SPEED: f32 = 0.2;

// Card tilt
pub const TILT_MAX_DEGREES: f32 = 15.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SPEED: f32 = 0.3;
pub const TILT_RETURN_SPEED: f32 = 0.15;
pub const TILT_SHADOW_BASE_BLUR: f32 = 40.0;
pub const TILT_SHADOW_BASE_OPACITY: f32 = 0.3;

// Custom cursor
pub const CURSOR_DOT_EASE: f32 = 0.2;
pub const CURSOR_RING_EASE: f32 = 0.15; // slower than the dot so the ring trails
