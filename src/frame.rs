//! Frame assembler (§4.7): scramble, CRC-over-scrambled, encode,
//! Gray-map, lay out into the 76-slot standard frame.

use crate::constants::{GRAYMAP, ICOS_A, ICOS_B, N, ND, NN2, RVEC};
use crate::crc::crc14;
use crate::ldpc::encode_info91;
use bitvec::prelude::*;

/// Result of assembling a frame: the 76 tone values to modulate, and
/// the underlying 174-bit codeword (kept for diagnostics).
#[derive(Debug, Clone)]
pub struct Frame {
    pub tones: [u8; NN2],
    pub codeword: BitVec<u8, Msb0>,
}

/// Assembles a standard frame from a 77-bit payload.
///
/// Steps: scramble the payload with `RVEC`, compute CRC14 over the
/// *scrambled* payload (this is the on-air convention — see §9 and
/// [`crate::ldpc::encode_payload`] for the plaintext-CRC alternative
/// used for direct LDPC-code testing), encode with the LDPC(174,91)
/// code, Gray-map 3 bits per symbol, and lay out 76 tone slots with two
/// Costas-like sync blocks and two ramp slots.
pub fn assemble_frame(payload: &BitSlice<u8, Msb0>) -> Frame {
    assert_eq!(payload.len(), 77, "payload must be 77 bits");

    let mut scrambled = bitvec![u8, Msb0; 0; 77];
    for i in 0..77 {
        scrambled.set(i, payload[i] != (RVEC[i] != 0));
    }

    let crc = crc14(&scrambled);
    let mut info91 = bitvec![u8, Msb0; 0; 91];
    info91[..77].copy_from_bitslice(&scrambled);
    for i in 0..14 {
        info91.set(77 + i, ((crc >> (13 - i)) & 1) != 0);
    }

    let mut codeword = bitvec![u8, Msb0; 0; N];
    encode_info91(&info91, &mut codeword);

    let mut data_syms = [0u8; ND];
    for i in 0..ND {
        let b0 = codeword[3 * i] as u8;
        let b1 = codeword[3 * i + 1] as u8;
        let b2 = codeword[3 * i + 2] as u8;
        let value = (b0 << 2) | (b1 << 1) | b2;
        data_syms[i] = GRAYMAP[value as usize];
    }

    let mut tones = [0u8; NN2];
    tones[0] = 0;
    tones[1..9].copy_from_slice(&ICOS_A);
    tones[9..38].copy_from_slice(&data_syms[0..29]);
    tones[38..46].copy_from_slice(&ICOS_B);
    tones[46..75].copy_from_slice(&data_syms[29..58]);
    tones[75] = 0;

    Frame { tones, codeword }
}

/// Undoes the payload scrambler: `descrambled = recovered XOR RVEC`.
pub fn descramble(recovered: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    assert_eq!(recovered.len(), 77);
    let mut out = bitvec![u8, Msb0; 0; 77];
    for i in 0..77 {
        out.set(i, recovered[i] != (RVEC[i] != 0));
    }
    out
}
