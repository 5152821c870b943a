//! Gaussian frequency pulse shape (§4.8), precomputed once.

use crate::constants::{BT, NSPS};
use once_cell::sync::Lazy;

/// `p(t) = ½·(erfc(c·BT·(t−½)) − erfc(c·BT·(t+½)))`, with
/// `c = π·√(2/ln 2)`. The pulse is 3 symbols wide, centered at 1.5
/// symbols, matching a Gaussian-filtered frequency impulse.
pub fn gfsk_pulse(bt: f64, t: f64) -> f64 {
    let c = std::f64::consts::PI * (2.0 / std::f64::consts::LN_2).sqrt();
    0.5 * (libm::erfc(c * bt * (t - 0.5)) - libm::erfc(c * bt * (t + 0.5)))
}

/// Precomputed pulse, sampled at `i = 0..3*NSPS-1` with
/// `t_i = (i − 1.5·NSPS) / NSPS`.
pub static PULSE: Lazy<Vec<f32>> = Lazy::new(|| compute_pulse(BT, NSPS));

fn compute_pulse(bt: f64, nsps: usize) -> Vec<f32> {
    let len = 3 * nsps;
    (0..len)
        .map(|i| {
            let t = (i as f64 - 1.5 * nsps as f64) / nsps as f64;
            gfsk_pulse(bt, t) as f32
        })
        .collect()
}
