//! CRC-14 over a 77-bit payload (§4.1).
//!
//! The payload is zero-padded from 77 to 80 bits, packed MSB-first into
//! 10 bytes, and run through a bit-serial CRC register of width 14,
//! polynomial `0x6757`, initial value 0, no reflection, no final XOR.

use crate::constants::{CRC_BITS, CRC_POLY, PAYLOAD_BITS};
use bitvec::prelude::*;
use crc::{Algorithm, Crc};

const CRC_ALGORITHM: Algorithm<u16> = Algorithm {
    width: CRC_BITS as u8,
    poly: CRC_POLY,
    init: 0x0,
    refin: false,
    refout: false,
    xorout: 0x0,
    check: 0x0,
    residue: 0x0,
};

const FT2H_CRC: Crc<u16> = Crc::<u16>::new(&CRC_ALGORITHM);

/// Computes CRC14 over a 77-bit payload.
///
/// Pure function of the 77 input bits; pads to 80 bits (a whole number
/// of bytes) and runs the bit-serial register over the packed bytes.
pub fn crc14(payload: &BitSlice<u8, Msb0>) -> u16 {
    debug_assert_eq!(
        payload.len(),
        PAYLOAD_BITS,
        "crc14 expects a {}-bit payload, got {}",
        PAYLOAD_BITS,
        payload.len()
    );

    let mut padded = bitvec![u8, Msb0; 0; 80];
    padded[..PAYLOAD_BITS].copy_from_bitslice(payload);
    let bytes = padded.into_vec();

    FT2H_CRC.checksum(&bytes)
}

/// Checks a 91-bit block (77 payload bits + 14 CRC bits) for a matching
/// CRC.
pub fn crc14_check(block: &BitSlice<u8, Msb0>) -> bool {
    debug_assert_eq!(block.len(), PAYLOAD_BITS + CRC_BITS);

    let expected = crc14(&block[..PAYLOAD_BITS]);
    let received = block[PAYLOAD_BITS..PAYLOAD_BITS + CRC_BITS]
        .iter()
        .fold(0u16, |acc, bit| (acc << 1) | (*bit as u16));

    expected == received
}
