//! FT2H sensitivity sweep — thin example binary, not a deliverable CLI.
//!
//! Usage:
//!   ft2hsim [ntrials] [snr_db ...]
//!
//! With no arguments, runs the §8 SNR table (+10, -10, -15, -18, -22 dB)
//! at 200 trials each and prints WER/BER. Argument parsing is bare
//! `std::env::args()`; this binary exists only to exercise the library.

use ft2h_sim::{sweep, DecodeConfig, TrialConfig};

fn main() {
    ft2h_sim::logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut ntrials = 200usize;
    let mut snr_list = vec![10.0f32, -10.0, -15.0, -18.0, -22.0];

    if args.len() > 1 {
        if let Ok(n) = args[1].parse::<usize>() {
            ntrials = n;
        }
    }
    if args.len() > 2 {
        snr_list = args[2..]
            .iter()
            .filter_map(|s| s.parse::<f32>().ok())
            .collect();
    }

    let trial_config = TrialConfig {
        ntrials,
        ..TrialConfig::default()
    };
    let decode_config = DecodeConfig::default();

    println!("FT2H sensitivity sweep ({ntrials} trials/point)");
    println!("{:>8}  {:>10}  {:>10}", "SNR(dB)", "WER", "BER");

    let results = sweep(&snr_list, &trial_config, &decode_config);
    for r in results {
        println!("{:>8.1}  {:>10.4}  {:>10.6}", r.snr_db, r.wer, r.ber);
    }
}
