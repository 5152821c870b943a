//! Validated public entry points (§6 "External Interfaces").
//!
//! The core pipeline modules (`frame`, `modulation`, `demod`, `ldpc`)
//! use plain signatures internally — the crate's own trial driver
//! always calls them with pre-validated, fixed-size data, so the cost
//! of a contract check on every hot-loop call buys nothing (§10.2). This
//! module is the thin, checked boundary a caller outside the crate is
//! expected to go through; it rejects malformed input with
//! [`Ft2hError`] instead of panicking.

use crate::config::DecodeConfig;
use crate::constants::{N, NTONES, PAYLOAD_BITS};
use crate::crc as crc_impl;
use crate::error::{
    CodewordLengthSnafu, Ft2hError, LlrLengthSnafu, NonFiniteSampleSnafu, PayloadLengthSnafu,
    Result, SlotOutOfRangeSnafu, ToneOutOfRangeSnafu,
};
use crate::frame::{self, Frame};
use crate::ldpc::{self, DecodeOutcome};
use crate::modulation;
use bitvec::prelude::*;
use snafu::ensure;

/// Computes CRC14 over a 77-bit payload. See [`crate::crc::crc14`].
pub fn crc14(payload: &BitSlice<u8, Msb0>) -> Result<u16> {
    ensure!(
        payload.len() == PAYLOAD_BITS,
        PayloadLengthSnafu {
            expected: PAYLOAD_BITS,
            actual: payload.len(),
        }
    );
    Ok(crc_impl::crc14(payload))
}

/// Assembles a standard frame from a 77-bit payload. See
/// [`crate::frame::assemble_frame`].
pub fn assemble_frame(payload: &BitSlice<u8, Msb0>) -> Result<Frame> {
    ensure!(
        payload.len() == PAYLOAD_BITS,
        PayloadLengthSnafu {
            expected: PAYLOAD_BITS,
            actual: payload.len(),
        }
    );
    Ok(frame::assemble_frame(payload))
}

/// Generates the 8-GFSK waveform for a tone sequence. See
/// [`crate::modulation::gen_wave`].
pub fn gen_wave(tones: &[u8], f0: f32) -> Result<Vec<f32>> {
    for &tone in tones {
        ensure!(
            (tone as usize) < NTONES,
            ToneOutOfRangeSnafu { tone: tone as u16 }
        );
    }
    Ok(modulation::gen_wave(tones, f0))
}

/// Demodulates data-symbol slots of a received waveform into LLRs. See
/// [`crate::demod::demod`].
pub fn demod(rx: &[f32], data_slots: &[usize], f0: f32) -> Result<Vec<f32>> {
    for (index, &sample) in rx.iter().enumerate() {
        ensure!(sample.is_finite(), NonFiniteSampleSnafu { index });
    }
    for &slot in data_slots {
        ensure!(
            (slot + 2) * crate::constants::NSPS <= rx.len(),
            SlotOutOfRangeSnafu {
                slot,
                nn2: crate::constants::NN2,
            }
        );
    }
    Ok(crate::demod::demod(rx, data_slots, f0))
}

/// Runs the combined LDPC decoder (BP then OSD-0) on a validated
/// 174-value LLR vector. See [`crate::ldpc::decode`].
pub fn decode(llr: &[f32], config: &DecodeConfig) -> Result<Option<DecodeOutcome>> {
    ensure!(
        llr.len() == N,
        LlrLengthSnafu {
            expected: N,
            actual: llr.len(),
        }
    );
    Ok(ldpc::decode(llr, config))
}

/// Encodes a 91-bit info block into a 174-bit systematic codeword. See
/// [`crate::ldpc::encode_info91`].
pub fn ldpc_encode(info91: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
    ensure!(
        info91.len() == crate::constants::K,
        CodewordLengthSnafu {
            expected: crate::constants::K,
            actual: info91.len(),
        }
    );
    let mut codeword = bitvec![u8, Msb0; 0; N];
    ldpc::encode_info91(info91, &mut codeword);
    Ok(codeword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc14_rejects_wrong_length() {
        let bits = bitvec![u8, Msb0; 0; 10];
        assert!(matches!(crc14(&bits), Err(Ft2hError::PayloadLength { .. })));
    }

    #[test]
    fn assemble_frame_rejects_wrong_length() {
        let bits = bitvec![u8, Msb0; 0; 76];
        assert!(matches!(
            assemble_frame(&bits),
            Err(Ft2hError::PayloadLength { .. })
        ));
    }

    #[test]
    fn gen_wave_rejects_out_of_range_tone() {
        let tones = [0u8, 8u8];
        assert!(matches!(
            gen_wave(&tones, 1500.0),
            Err(Ft2hError::ToneOutOfRange { .. })
        ));
    }

    #[test]
    fn demod_rejects_nan_sample() {
        let rx = vec![f32::NAN; 10 * crate::constants::NSPS];
        let slots = vec![1usize];
        assert!(matches!(
            demod(&rx, &slots, 1500.0),
            Err(Ft2hError::NonFiniteSample { .. })
        ));
    }

    #[test]
    fn decode_rejects_wrong_llr_length() {
        let llr = vec![1.0f32; 10];
        let config = DecodeConfig::default();
        assert!(matches!(
            decode(&llr, &config),
            Err(Ft2hError::LlrLength { .. })
        ));
    }
}
