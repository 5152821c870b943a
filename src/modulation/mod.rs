//! 8-GFSK modulator: Gaussian pulse shaping, phase accumulation, and
//! edge ramping (§4.8).

pub mod gfsk;
pub mod pulse;

pub use gfsk::gen_wave;
