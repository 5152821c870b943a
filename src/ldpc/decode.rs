//! Combined decoder: BP first, OSD-0 fallback (§4.6).

use super::{bp, osd};
use crate::config::DecodeConfig;
use crate::constants::K;
use bitvec::prelude::*;

/// Which decoder path produced a result, and how much work it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePath {
    /// BP converged after this many hard-error corrections from the
    /// channel hard decision.
    Bp { nhard: usize },
    /// OSD-0 found a valid codeword after this many single-bit flips.
    Osd { flips: usize },
}

/// Outcome of the combined decoder.
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    pub info91: BitVec<u8, Msb0>,
    pub path: DecodePath,
}

/// Tries BP with `config.bp`, then OSD-0 with `config.osd` on failure.
/// Returns the first success, or `None` if both fail.
pub fn decode(llr: &[f32], config: &DecodeConfig) -> Option<DecodeOutcome> {
    if let Some((info91, nhard)) = bp::decode(llr, &config.bp) {
        tracing::debug!(nhard, "BP converged");
        return Some(DecodeOutcome {
            info91,
            path: DecodePath::Bp { nhard },
        });
    }

    if let Some((info91, flips)) = osd::decode(llr, &config.osd) {
        tracing::debug!(flips, "OSD-0 recovered a codeword after BP failed");
        return Some(DecodeOutcome {
            info91,
            path: DecodePath::Osd { flips },
        });
    }

    tracing::debug!("decode failed: BP and OSD both exhausted");
    None
}
