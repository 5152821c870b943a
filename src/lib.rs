//! FT2H physical-layer sensitivity simulator.
//!
//! Encodes a 77-bit payload with a systematic LDPC(174,91) code plus a
//! 14-bit CRC, maps it through an 8-ary Gray permutation into a
//! continuous-phase 8-GFSK waveform, and decodes the waveform back
//! through a coherent demodulator and a combined min-sum-BP/OSD-0
//! decoder. The trial driver aggregates WER/BER across an AWGN SNR
//! sweep.
//!
//! [`api`] is the validated, contract-checked entry surface; the other
//! modules expose the same operations with plain (panicking-on-misuse)
//! signatures for the crate's own internal hot paths.

pub mod api;
pub mod config;
pub mod constants;
pub mod crc;
pub mod demod;
pub mod error;
pub mod frame;
pub mod ldpc;
pub mod logging;
pub mod modulation;
pub mod trial;

pub use config::{BpConfig, DecodeConfig, OsdConfig, TrialConfig};
pub use error::Ft2hError;
pub use frame::{assemble_frame, descramble, Frame};
pub use ldpc::{decode, DecodeOutcome, DecodePath};
pub use modulation::gen_wave;
pub use trial::{run_sweep_point, run_trial, sweep, SweepResult, TrialOutcome};
