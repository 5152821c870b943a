//! Systematic LDPC(174,91) encoder (§4.2).

use super::tables::gen_bit;
use crate::constants::{K, M, N};
use crate::crc::crc14;
use bitvec::prelude::*;

/// Encodes a 91-bit block (`info91 = payload ∥ crc14(payload)`) into a
/// 174-bit systematic codeword: `info91 ∥ (GEN · info91 mod 2)`.
pub fn encode_info91(info91: &BitSlice<u8, Msb0>, codeword: &mut BitSlice<u8, Msb0>) {
    assert_eq!(info91.len(), K, "info91 must be {} bits", K);
    assert_eq!(codeword.len(), N, "codeword must be {} bits", N);

    codeword[..K].copy_from_bitslice(info91);

    for row in 0..M {
        let mut parity = false;
        for col in 0..K {
            parity ^= info91[col] & (gen_bit(row, col) != 0);
        }
        codeword.set(K + row, parity);
    }
}

/// Encodes a 77-bit payload directly: builds `info91 = payload ∥
/// crc14(payload)` (CRC over the *plaintext* payload — kept for direct
/// LDPC-code testing per §9; the on-air convention is the frame
/// assembler's, which CRCs the scrambled payload, see [`crate::frame`]).
pub fn encode_payload(payload: &BitSlice<u8, Msb0>, codeword: &mut BitSlice<u8, Msb0>) {
    assert_eq!(payload.len(), 77);
    let crc = crc14(payload);

    let mut info91 = bitvec![u8, Msb0; 0; K];
    info91[..77].copy_from_bitslice(payload);
    for i in 0..14 {
        info91.set(77 + i, ((crc >> (13 - i)) & 1) != 0);
    }

    encode_info91(&info91, codeword);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_message_gives_all_zero_codeword() {
        let info91 = bitvec![u8, Msb0; 0; K];
        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);
        assert!(codeword.not_any());
    }

    #[test]
    fn systematic_part_matches_input() {
        let mut info91 = bitvec![u8, Msb0; 0; K];
        info91.set(0, true);
        info91.set(50, true);
        info91.set(90, true);

        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);

        assert_eq!(&codeword[..K], &info91[..]);
    }

    #[test]
    fn satisfies_parity_check() {
        use crate::ldpc::tables::syndrome_zero;

        let mut info91 = bitvec![u8, Msb0; 0; K];
        info91.set(3, true);
        info91.set(17, true);
        info91.set(64, true);

        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);

        let hard: Vec<bool> = codeword.iter().by_vals().collect();
        assert!(syndrome_zero(&hard));
    }

    #[test]
    #[should_panic(expected = "info91 must be 91 bits")]
    fn rejects_wrong_info_length() {
        let info91 = bitvec![u8, Msb0; 0; 80];
        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_info91(&info91, &mut codeword);
    }

    #[test]
    fn encode_payload_embeds_crc() {
        let payload = bitvec![u8, Msb0; 0; 77];
        let mut codeword = bitvec![u8, Msb0; 0; N];
        encode_payload(&payload, &mut codeword);

        let crc = crc14(&payload);
        let mut expected_crc_bits = bitvec![u8, Msb0; 0; 14];
        for i in 0..14 {
            expected_crc_bits.set(i, ((crc >> (13 - i)) & 1) != 0);
        }
        assert_eq!(&codeword[77..91], &expected_crc_bits[..]);
    }
}
