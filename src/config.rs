//! Decoder and trial-driver tunables, grouped into plain structs with
//! `Default` impls the way a `DecoderConfig` groups candidate-search
//! tunables.

/// Min-sum BP decoder tunables (§4.4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BpConfig {
    pub max_iter: usize,
    pub alpha: f32,
}

impl Default for BpConfig {
    fn default() -> Self {
        Self {
            max_iter: 40,
            alpha: 0.8,
        }
    }
}

/// OSD-0 single-flip decoder tunables (§4.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsdConfig {
    pub max_flips: usize,
}

impl Default for OsdConfig {
    fn default() -> Self {
        Self { max_flips: 50 }
    }
}

/// Combined decoder tunables (§4.6): BP first, OSD fallback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecodeConfig {
    pub bp: BpConfig,
    pub osd: OsdConfig,
}

/// Trial-driver tunables (§4.10).
#[derive(Debug, Clone, Copy)]
pub struct TrialConfig {
    pub ntrials: usize,
    pub f0_hz: f32,
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            ntrials: 200,
            f0_hz: crate::constants::DEFAULT_F0_HZ,
            seed: None,
        }
    }
}
