//! Contract-violation errors surfaced at public component boundaries.
//!
//! Per §7 item 3, these represent programmer errors (wrong slice length,
//! an out-of-range tone, NaN in received samples) rather than expected
//! runtime conditions — decode failure and syndrome-valid/CRC-invalid
//! outcomes are not errors, they are `None`/"keep iterating" results
//! returned by the decoders themselves.

use snafu::Snafu;

/// Errors returned by the core's public entry points.
#[derive(Debug, Snafu)]
pub enum Ft2hError {
    #[snafu(display("expected a {expected}-bit payload, got {actual} bits"))]
    PayloadLength { expected: usize, actual: usize },

    #[snafu(display("expected a {expected}-bit codeword, got {actual} bits"))]
    CodewordLength { expected: usize, actual: usize },

    #[snafu(display("expected {expected} LLR values, got {actual}"))]
    LlrLength { expected: usize, actual: usize },

    #[snafu(display("tone value {tone} out of range 0..8"))]
    ToneOutOfRange { tone: u16 },

    #[snafu(display("slot index {slot} out of range 0..{nn2}"))]
    SlotOutOfRange { slot: usize, nn2: usize },

    #[snafu(display("received sample at index {index} is NaN"))]
    NonFiniteSample { index: usize },
}

pub type Result<T, E = Ft2hError> = core::result::Result<T, E>;
