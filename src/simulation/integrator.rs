//! Fixed-step frame integrator for the bouncing discs
//!
//! One frame is one unit of time, scaled by the session's speed multiplier.
//! `step` moves and reflects bodies, `advance` runs a full frame
//! (step, then pairwise collisions when the engine enables them)

use super::states::{Bounds, System, Body};
use super::params::Parameters;
use super::engine::Engine;
use super::collision::resolve_collisions;

/// Advance every body by one frame and reflect it off the playfield walls.
///
/// Positions move by `v * speed_scale`. Each axis is then checked on its own:
/// a body whose extent crosses a wall is clamped back inside and has that
/// velocity component negated, so a corner hit flips both components.
pub fn step(bodies: &mut [Body], bounds: Bounds, speed_scale: f64) {
    for b in bodies.iter_mut() {
        // x_n+1 = x_n + s * v_n
        b.x += speed_scale * b.v;
        reflect(b, bounds);
    }
}

fn reflect(b: &mut Body, bounds: Bounds) {
    let r = b.radius;

    if b.x.x - r < 0.0 || b.x.x + r > bounds.width {
        b.x.x = b.x.x.min(bounds.width - r).max(r);
        b.v.x = -b.v.x;
    }
    if b.x.y - r < 0.0 || b.x.y + r > bounds.height {
        b.x.y = b.x.y.min(bounds.height - r).max(r);
        b.v.y = -b.v.y;
    }
}

/// Run one full frame on `sys`: integrate, resolve contacts, bump the frame counter.
/// Returns the number of contacts resolved in this frame.
pub fn advance(sys: &mut System, bounds: Bounds, params: &Parameters, engine: &Engine) -> usize {
    if sys.bodies.is_empty() { // no bodies, only time moves
        sys.frame += 1;
        return 0;
    }

    step(&mut sys.bodies, bounds, params.speed_scale);

    let contacts = if engine.collisions {
        resolve_collisions(&mut sys.bodies)
    } else {
        0
    };

    sys.frame += 1;
    contacts
}
