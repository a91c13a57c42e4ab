//! Core state types for the bouncing-disc simulation.
//!
//! Defines the per-frame state:
//! - `Body`   a moving disc using `NVec2` (pixels, pixels/frame)
//! - `Bounds` the rectangular playfield the bodies live in
//! - `System` the ordered list of bodies and the number of frames advanced
//!
//! Screen convention: origin at the top-left corner, y grows downward.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// RGB colour used only when drawing a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 128, 255);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64, // radius, constant for the body's lifetime
    pub color: Rgb, // display only
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        Self { x, v, radius, color: Rgb::WHITE }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Centre-to-centre distance at which `self` and `other` just touch
    pub fn contact_distance(&self, other: &Body) -> f64 {
        self.radius + other.radius
    }

    /// Kinetic energy up to a constant factor (unit mass)
    pub fn energy(&self) -> f64 {
        0.5 * self.v.norm_squared()
    }
}

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if `body` lies fully inside the playfield, with `tol` slack
    pub fn contains(&self, body: &Body, tol: f64) -> bool {
        let r = body.radius;
        body.x.x >= r - tol
            && body.x.x <= self.width - r + tol
            && body.x.y >= r - tol
            && body.x.y <= self.height - r + tol
    }
}

impl Default for Bounds {
    // piTFT resolution
    fn default() -> Self {
        Self { width: 320.0, height: 240.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub frame: u64, // frames advanced so far
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, frame: 0 }
    }

    /// Total kinetic energy of all bodies
    pub fn energy(&self) -> f64 {
        self.bodies.iter().map(Body::energy).sum()
    }
}
