//! Normalized min-sum belief-propagation decoder (§4.4).
//!
//! Edge messages live in two flat per-check arrays (`r`, `q`), indexed
//! by `(check, position-in-check-row)` rather than keyed by a
//! `(check, bit)` pair in a map — a dictionary-keyed scheme is simple
//! but needlessly slow for a code with fixed, precomputed adjacency
//! (design note, §9). `BIT_EDGE_POS` resolves the opposite direction
//! (bit to its three edges) so each iteration is two flat passes with
//! no searching.
//!
//! This is the simpler min-sum approximation with a normalization factor
//! `alpha`, not a `tanh`-based sum-product decoder, and uses a flooded
//! (parallel) message schedule throughout — converting to a layered
//! schedule would change iteration-count statistics (§5, §9).

use super::tables::{syndrome_zero, BIT_EDGE_POS, CHECK_TO_BITS};
use crate::config::BpConfig;
use crate::constants::{K, M, N};
use crate::crc::crc14_check;
use bitvec::prelude::*;

/// Runs the min-sum BP decoder to convergence or `max_iter` iterations.
///
/// Returns `Some((info91, nhard))` on success, where `nhard` is the
/// number of bits where the final hard decision differs from the
/// channel's initial hard decision (sign of `llr`). Returns `None` if
/// no CRC-accepted codeword is found within `max_iter` iterations.
pub fn decode(llr: &[f32], config: &BpConfig) -> Option<(BitVec<u8, Msb0>, usize)> {
    assert_eq!(llr.len(), N, "llr must be {} values", N);

    let channel_hard: Vec<bool> = llr.iter().map(|&v| v < 0.0).collect();

    let mut r: Vec<Vec<f32>> = CHECK_TO_BITS.iter().map(|bits| vec![0.0f32; bits.len()]).collect();
    let mut q: Vec<Vec<f32>> = CHECK_TO_BITS
        .iter()
        .map(|bits| bits.iter().map(|&b| llr[b]).collect())
        .collect();

    for _ in 0..config.max_iter {
        check_update(&mut r, &q, config.alpha);

        let mut total = [0.0f32; N];
        for b in 0..N {
            total[b] = llr[b] + BIT_EDGE_POS[b].iter().map(|&(c, p)| r[c][p]).sum::<f32>();
        }

        let mut hard = bitvec![u8, Msb0; 0; N];
        for b in 0..N {
            hard.set(b, total[b] < 0.0);
        }

        for b in 0..N {
            for &(c, p) in BIT_EDGE_POS[b].iter() {
                q[c][p] = total[b] - r[c][p];
            }
        }

        let hard_vals: Vec<bool> = hard.iter().by_vals().collect();
        if syndrome_zero(&hard_vals) && crc14_check(&hard[..K]) {
            let nhard = (0..N).filter(|&b| channel_hard[b] != hard[b]).count();
            return Some((hard[..K].to_bitvec(), nhard));
        }
    }

    None
}

fn check_update(r: &mut [Vec<f32>], q: &[Vec<f32>], alpha: f32) {
    for c in 0..M {
        let row = &q[c];
        let degree = row.len();
        for t in 0..degree {
            let mut sign = 1.0f32;
            let mut magnitude = f32::INFINITY;
            for (b, &value) in row.iter().enumerate() {
                if b == t {
                    continue;
                }
                if value < 0.0 {
                    sign = -sign;
                }
                let mag = value.abs();
                if mag < magnitude {
                    magnitude = mag;
                }
            }
            r[c][t] = alpha * sign * magnitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ldpc::encode::encode_info91;

    fn llr_from_codeword(codeword: &BitSlice<u8, Msb0>, magnitude: f32) -> Vec<f32> {
        codeword
            .iter()
            .map(|bit| if *bit { -magnitude } else { magnitude })
            .collect()
    }

    #[test]
    fn decodes_perfect_codeword_with_zero_hard_errors() {
        let mut info91 = bitvec![u8, Msb0; 0; K];
        info91.set(2, true);
        info91.set(40, true);

        // CRC over info91[..77] must match info91[77..91] for this test's
        // info91 to be a valid on-air block; patch the CRC bits in.
        let crc = crate::crc::crc14(&info91[..77]);
        for i in 0..14 {
            info91.set(77 + i, ((crc >> (13 - i)) & 1) != 0);
        }
        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);

        let llr = llr_from_codeword(&codeword, 5.0);
        let config = BpConfig::default();
        let (decoded, nhard) = decode(&llr, &config).expect("BP should converge on a clean codeword");

        assert_eq!(decoded, info91);
        assert_eq!(nhard, 0);
    }

    #[test]
    fn recovers_from_a_few_bit_flips() {
        let mut payload = bitvec![u8, Msb0; 0; 77];
        payload.set(1, true);
        payload.set(30, true);
        let crc = crate::crc::crc14(&payload);
        let mut info91 = bitvec![u8, Msb0; 0; K];
        info91[..77].copy_from_bitslice(&payload);
        for i in 0..14 {
            info91.set(77 + i, ((crc >> (13 - i)) & 1) != 0);
        }
        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);

        let mut llr = llr_from_codeword(&codeword, 4.0);
        // Flip the sign (introduce an error) on a handful of bits.
        for &idx in &[5usize, 60, 120] {
            llr[idx] = -llr[idx];
        }

        let config = BpConfig::default();
        let result = decode(&llr, &config);
        assert!(result.is_some());
        let (decoded, nhard) = result.unwrap();
        assert_eq!(decoded, info91);
        assert_eq!(nhard, 3);
    }

    #[test]
    fn gives_up_on_pure_noise() {
        let llr = vec![0.01f32; N];
        let config = BpConfig {
            max_iter: 10,
            ..BpConfig::default()
        };
        assert!(decode(&llr, &config).is_none());
    }
}
