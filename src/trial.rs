//! Monte-Carlo trial driver (§4.10): per-SNR sensitivity sweep.
//!
//! Aggregating WER/BER across repeated calls to the single-trial
//! primitive is exactly what §4.10 specifies; `sweep` just names it as
//! a function instead of leaving it as an exercise for every caller.
//! Argument parsing, console tables, and plot rendering remain out of
//! scope.

use crate::config::{DecodeConfig, TrialConfig};
use crate::constants::{FSAMPLE, PAYLOAD_BITS};
use crate::frame::{assemble_frame, descramble};
use crate::ldpc::{decode, DecodePath};
use crate::modulation::gen_wave;
use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

/// Outcome of a single Monte-Carlo trial: which decoder path succeeded,
/// how much work it did, and the resulting error counts.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    pub word_error: bool,
    pub bit_errors: usize,
    pub path: Option<DecodePath>,
}

/// Aggregated WER/BER at one SNR point.
#[derive(Debug, Clone, Copy)]
pub struct SweepResult {
    pub snr_db: f32,
    pub wer: f64,
    pub ber: f64,
    pub trials: usize,
}

/// Computes the signal scale factor for a target SNR (§4.10,
/// §6): `sig_fac = sqrt(2500/FSAMPLE) * 10^(snr_db/20)`, with
/// unit-variance AWGN added afterward.
pub fn sig_fac(snr_db: f32) -> f32 {
    ((2500.0 / FSAMPLE).sqrt() as f32) * 10f32.powf(snr_db / 20.0)
}

/// Runs one trial at the given SNR with the given decode configuration,
/// drawing a fresh random 77-bit payload and noise realization from
/// `rng`. Returns the descrambled recovered payload (if any decoded)
/// alongside the outcome, mirroring the driver interface of §4.10 and
/// §6 (the core never draws randomness itself; the caller supplies it).
pub fn run_trial<R: Rng + ?Sized>(
    rng: &mut R,
    snr_db: f32,
    f0_hz: f32,
    decode_config: &DecodeConfig,
) -> TrialOutcome {
    let mut payload = bitvec![u8, Msb0; 0; PAYLOAD_BITS];
    for i in 0..PAYLOAD_BITS {
        payload.set(i, rng.random::<bool>());
    }

    let frame = assemble_frame(&payload);
    let wave = gen_wave(&frame.tones, f0_hz);

    let scale = sig_fac(snr_db);
    let normal: Normal<f32> = Normal::new(0.0, 1.0).expect("unit variance is always valid");
    let mut rx: Vec<f32> = Vec::with_capacity(wave.len());
    for &w in wave.iter() {
        rx.push(w * scale + normal.sample(rng));
    }

    let data_slots = crate::constants::data_slot_indices();
    let llr = crate::demod::demod(&rx, &data_slots, f0_hz);

    match decode(&llr, decode_config) {
        Some(outcome) => {
            let recovered = descramble(&outcome.info91[..PAYLOAD_BITS]);
            let bit_errors = (0..PAYLOAD_BITS).filter(|&i| recovered[i] != payload[i]).count();
            TrialOutcome {
                word_error: bit_errors > 0,
                bit_errors,
                path: Some(outcome.path),
            }
        }
        None => TrialOutcome {
            word_error: true,
            bit_errors: PAYLOAD_BITS,
            path: None,
        },
    }
}

/// Runs `config.ntrials` independent trials at one SNR point and
/// aggregates WER (fraction of trials with any bit error or decode
/// failure) and BER (total bit errors / (77 * ntrials), a decode
/// failure counting as 77 errors).
///
/// Trials are embarrassingly parallel (§5): each draws its own RNG
/// state, seeded per-trial from `config.seed` when set (for
/// reproducible tests, §10.4) or from OS entropy otherwise.
pub fn run_sweep_point(snr_db: f32, config: &TrialConfig, decode_config: &DecodeConfig) -> SweepResult {
    let outcomes: Vec<TrialOutcome> = (0..config.ntrials)
        .into_par_iter()
        .map(|i| {
            let mut rng = trial_rng(config.seed, i);
            run_trial(&mut rng, snr_db, config.f0_hz, decode_config)
        })
        .collect();

    let word_errors = outcomes.iter().filter(|o| o.word_error).count();
    let bit_errors: usize = outcomes.iter().map(|o| o.bit_errors).sum();

    SweepResult {
        snr_db,
        wer: word_errors as f64 / config.ntrials as f64,
        ber: bit_errors as f64 / (PAYLOAD_BITS * config.ntrials) as f64,
        trials: config.ntrials,
    }
}

/// Runs the full SNR sweep, one [`run_sweep_point`] per entry of
/// `snr_list_db`.
pub fn sweep(snr_list_db: &[f32], config: &TrialConfig, decode_config: &DecodeConfig) -> Vec<SweepResult> {
    snr_list_db
        .iter()
        .map(|&snr_db| {
            let result = run_sweep_point(snr_db, config, decode_config);
            tracing::info!(
                snr_db,
                wer = result.wer,
                ber = result.ber,
                "swept SNR point"
            );
            result
        })
        .collect()
}

fn trial_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(base) => StdRng::seed_from_u64(base.wrapping_add(index as u64)),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodeConfig;

    #[test]
    fn sig_fac_matches_formula_at_zero_db() {
        let expected = (2500.0f32 / FSAMPLE as f32).sqrt();
        assert!((sig_fac(0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn sig_fac_grows_with_snr() {
        assert!(sig_fac(10.0) > sig_fac(0.0));
        assert!(sig_fac(-10.0) < sig_fac(0.0));
    }

    #[test]
    fn high_snr_trial_recovers_payload_with_zero_bit_errors() {
        let mut rng = StdRng::seed_from_u64(42);
        let decode_config = DecodeConfig::default();
        let outcome = run_trial(&mut rng, 20.0, crate::constants::DEFAULT_F0_HZ, &decode_config);
        assert!(!outcome.word_error);
        assert_eq!(outcome.bit_errors, 0);
        assert!(outcome.path.is_some());
    }

    #[test]
    fn sweep_returns_one_result_per_snr_point() {
        let config = TrialConfig {
            ntrials: 4,
            f0_hz: crate::constants::DEFAULT_F0_HZ,
            seed: Some(7),
        };
        let decode_config = DecodeConfig::default();
        let results = sweep(&[20.0, -30.0], &config, &decode_config);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].trials, 4);
        assert!(results[0].wer <= results[1].wer);
    }

    #[test]
    fn seeded_sweep_point_is_reproducible() {
        let config = TrialConfig {
            ntrials: 16,
            f0_hz: crate::constants::DEFAULT_F0_HZ,
            seed: Some(123),
        };
        let decode_config = DecodeConfig::default();
        let a = run_sweep_point(0.0, &config, &decode_config);
        let b = run_sweep_point(0.0, &config, &decode_config);
        assert_eq!(a.wer, b.wer);
        assert_eq!(a.ber, b.ber);
    }
}
