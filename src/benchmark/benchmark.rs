use std::time::Instant;
use crate::simulation::states::{Body, Bounds, System, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::advance;

/// Helper to build a manual System of size `n` spread over `bounds`
fn make_system(n: usize, bounds: Bounds) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * bounds.width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * bounds.height,
        );
        let v = NVec2::new((i_f * 0.71).sin() * 3.0, (i_f * 0.29).cos() * 3.0);

        bodies.push(Body::new(x, v, 2.0));
    }

    System::new(bodies)
}

/// Time one frame with and without pairwise collisions for a range of n
pub fn bench_step() {
    let ns = [2, 16, 64, 256, 1024, 2048];
    let frames = 50; // frames per measurement

    let bounds = Bounds::new(1920.0, 1080.0);
    let params = Parameters::default();

    for n in ns {
        let sys_template = make_system(n, bounds);

        // Integrate + reflect only
        let mut sys_free = sys_template.clone();
        let free = Engine { collisions: false };

        // Warm-up
        advance(&mut sys_free, bounds, &params, &free);

        let t0 = Instant::now();
        for _ in 0..frames {
            advance(&mut sys_free, bounds, &params, &free);
        }
        let free_per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        // Integrate + reflect + O(n^2) contact pass
        let mut sys_coll = sys_template.clone();
        let coll = Engine { collisions: true };

        advance(&mut sys_coll, bounds, &params, &coll);

        let mut contacts = 0;
        let t1 = Instant::now();
        for _ in 0..frames {
            contacts += advance(&mut sys_coll, bounds, &params, &coll);
        }
        let coll_per_frame = t1.elapsed().as_secs_f64() / frames as f64;

        println!(
            "N = {:5}, step = {:10.3} us, step+collide = {:10.3} us, contacts/frame = {:.1}",
            n,
            free_per_frame * 1e6,
            coll_per_frame * 1e6,
            contacts as f64 / frames as f64
        );
    }
}
