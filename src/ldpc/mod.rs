//! LDPC(174,91) codec: systematic encoder, parity-check construction,
//! normalized min-sum BP decoder, OSD-0 fallback, and the combined
//! decoder that tries BP then OSD (§4.2-§4.6).

pub mod bp;
pub mod decode;
pub mod encode;
pub mod osd;
pub mod tables;

pub use decode::{decode, DecodeOutcome, DecodePath};
pub use encode::{encode_info91, encode_payload};
