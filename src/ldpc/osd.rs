//! Ordered-statistics decoding, order 0, single-flip fallback (§4.5).
//!
//! Complements BP on high-SNR patterns where BP gets stuck on a
//! non-codeword fixed point: take the hard decision, and if it isn't
//! already a CRC-accepted codeword, try flipping exactly one bit at a
//! time in ascending order of reliability until the syndrome and CRC
//! both agree.

use super::tables::syndrome_zero;
use crate::config::OsdConfig;
use crate::constants::{K, N};
use crate::crc::crc14_check;
use bitvec::prelude::*;

/// Runs OSD-0 with single bit flips. Returns `Some((info91, flips))` on
/// success, where `flips` is the number of bits flipped (0 means the
/// raw hard decision was already valid).
pub fn decode(llr: &[f32], config: &OsdConfig) -> Option<(BitVec<u8, Msb0>, usize)> {
    assert_eq!(llr.len(), N, "llr must be {} values", N);

    let mut hard: Vec<bool> = llr.iter().map(|&v| v < 0.0).collect();

    if syndrome_zero(&hard) && crc14_check_of(&hard) {
        return Some((info91_of(&hard), 0));
    }

    let mut order: Vec<usize> = (0..N).collect();
    order.sort_by(|&a, &b| llr[a].abs().partial_cmp(&llr[b].abs()).unwrap_or(core::cmp::Ordering::Equal));

    let max_flips = config.max_flips.min(N);
    for (k, &idx) in order.iter().take(max_flips).enumerate() {
        hard[idx] = !hard[idx];

        if syndrome_zero(&hard) && crc14_check_of(&hard) {
            return Some((info91_of(&hard), k + 1));
        }

        hard[idx] = !hard[idx];
    }

    None
}

fn info91_of(hard: &[bool]) -> BitVec<u8, Msb0> {
    let mut info91 = bitvec![u8, Msb0; 0; K];
    for (i, &bit) in hard.iter().take(K).enumerate() {
        info91.set(i, bit);
    }
    info91
}

fn crc14_check_of(hard: &[bool]) -> bool {
    let info91 = info91_of(hard);
    crc14_check(&info91)
}
