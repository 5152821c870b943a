//! Coherent 8-ary demodulator (§4.9): per-symbol tone-energy correlator
//! bank, max-log LLR, Gray demapping, and mean-rescale.

use crate::constants::{BAUD, FSAMPLE, IGRAY, LLR_RESCALE_TARGET, NSPS, NTONES};
use std::f64::consts::TAU;

/// Demodulates the data-symbol slots of a received waveform into soft
/// bit likelihoods, 3 per slot, in slot order.
///
/// `data_slots` gives the slot indices to demodulate (for the standard
/// frame: `[9..=37] ∪ [46..=74]`, see
/// [`crate::constants::data_slot_indices`]). The `+1` slot offset in the
/// segment extraction compensates for the one-symbol-period delay
/// introduced by the Gaussian pulse's 3-symbol support centered on its
/// own slot.
pub fn demod(rx: &[f32], data_slots: &[usize], f0: f32) -> Vec<f32> {
    let mut llr = Vec::with_capacity(3 * data_slots.len());

    for &slot in data_slots {
        let start = (slot + 1) * NSPS;
        let seg = &rx[start..start + NSPS];

        let mut s2 = [0.0f32; NTONES];
        for (t, energy) in s2.iter_mut().enumerate() {
            let tone_freq = f0 as f64 + t as f64 * BAUD;
            let mut acc_re = 0.0f64;
            let mut acc_im = 0.0f64;
            for (i, &sample) in seg.iter().enumerate() {
                let phase = -TAU * tone_freq * i as f64 / FSAMPLE;
                acc_re += sample as f64 * phase.cos();
                acc_im += sample as f64 * phase.sin();
            }
            *energy = (acc_re * acc_re + acc_im * acc_im) as f32;
        }

        for k in 0..3 {
            let max_zero = (0..NTONES)
                .filter(|&t| IGRAY[k][t] == 0)
                .map(|t| s2[t])
                .fold(f32::NEG_INFINITY, f32::max);
            let max_one = (0..NTONES)
                .filter(|&t| IGRAY[k][t] == 1)
                .map(|t| s2[t])
                .fold(f32::NEG_INFINITY, f32::max);
            llr.push(max_zero - max_one);
        }
    }

    rescale(&mut llr);
    llr
}

/// Rescales LLRs so their mean absolute value equals
/// [`LLR_RESCALE_TARGET`], the empirical calibration that puts them in
/// the BP decoder's working range.
fn rescale(llr: &mut [f32]) {
    let mean_abs = llr.iter().map(|v| v.abs()).sum::<f32>() / llr.len() as f32;
    if mean_abs > 0.0 {
        let scale = LLR_RESCALE_TARGET / mean_abs;
        for v in llr.iter_mut() {
            *v *= scale;
        }
    }
}
