//! Pairwise contact handling for equal-mass discs
//!
//! Resolution runs in two independent stages:
//! 1. positional correction, whenever the discs overlap
//! 2. velocity exchange along the contact normal, only while they are closing
//!
//! Gating both stages on the closing speed leaves discs that arrive with
//! almost no normal velocity overlapping, and they stick together.

use super::states::{Body, NVec2};

/// True if the two discs touch or overlap
pub fn in_contact(a: &Body, b: &Body) -> bool {
    let reach = a.contact_distance(b);
    (b.x - a.x).norm_squared() <= reach * reach
}

/// Resolve a contact between `a` and `b` in place.
///
/// Coincident centres have no collision normal and are left untouched;
/// so are discs that are not in contact.
pub fn resolve_collision(a: &mut Body, b: &mut Body) {
    let d: NVec2 = b.x - a.x;
    let dist = d.norm();
    let reach = a.contact_distance(b);
    if dist == 0.0 || dist > reach {
        return;
    }

    // unit normal pointing from a to b
    let n = d / dist;

    // Positional correction: split the overlap evenly
    let overlap = reach - dist;
    if overlap > 0.0 {
        let push = n * (overlap / 2.0);
        a.x -= push;
        b.x += push;
    }

    // Velocity exchange: positive closing speed means a is still gaining on b
    let closing = (a.v - b.v).dot(&n);
    if closing > 0.0 {
        a.v -= closing * n;
        b.v += closing * n;
    }
}

/// Check every unordered pair (i, j) with i < j and resolve the ones in contact.
/// Returns how many contacts were resolved; coincident pairs are skipped.
pub fn resolve_collisions(bodies: &mut [Body]) -> usize {
    let n = bodies.len();
    let mut contacts = 0;

    for i in 0..n {
        // split so bodies[i] and bodies[j] can be borrowed mutably together
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];

        for bj in tail.iter_mut() {
            // coincident centres have no normal, nothing gets resolved
            if in_contact(bi, bj) && bi.x != bj.x {
                tracing::trace!(i, dist = (bj.x - bi.x).norm(), "contact");
                resolve_collision(bi, bj);
                contacts += 1;
            }
        }
    }

    contacts
}
