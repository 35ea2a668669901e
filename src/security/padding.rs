//! MD5 message padding.
//!
//! A message is padded with a single `0x80` byte, enough zero bytes to land 8 bytes short of a
//! block boundary, and the message length in bits as a little-endian `u64`.

use super::md5::BLOCK_SIZE;

/// Largest byte length whose bit count still fits MD5's 64-bit length field.
pub const MAX_MESSAGE_BYTES: u64 = u64::MAX >> 3;

/// Offset inside the final block at which the length field starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Number of zero bytes placed between the `0x80` terminator and the length field.
fn zero_fill(length_in_bytes: u64) -> usize {
    let used = (length_in_bytes % BLOCK_SIZE as u64) as usize;
    // (56 - (used + 1)) mod 64, kept non-negative
    (BLOCK_SIZE + LENGTH_OFFSET - 1 - used) % BLOCK_SIZE
}

/// Returns the padding MD5 appends to a message of `length_in_bytes` bytes.
///
/// `length_in_bytes + md5_padding(length_in_bytes).len()` is always a multiple of 64 and the
/// padding is between 9 and 72 bytes long. The bit length wraps modulo 2^64.
pub fn md5_padding(length_in_bytes: u64) -> Vec<u8> {
    md5_padding_with_total(length_in_bytes, length_in_bytes)
}

/// Like [`md5_padding`], but the trailing length field encodes `total_bytes` instead of
/// `length_in_bytes`.
///
/// The zero fill is still chosen so that `length_in_bytes` plus the padding ends on a block
/// boundary. This is the padding for data hashed on top of a resumed state, where the length
/// field has to count every byte that came before it as well.
pub fn md5_padding_with_total(length_in_bytes: u64, total_bytes: u64) -> Vec<u8> {
    let zeros = zero_fill(length_in_bytes);
    let mut padding = Vec::with_capacity(1 + zeros + 8);
    padding.push(0x80);
    padding.resize(1 + zeros, 0x00);
    padding.extend_from_slice(&total_bytes.wrapping_mul(8).to_le_bytes());
    padding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_empty_message() {
        let padding = md5_padding(0);
        assert_eq!(padding.len(), 64);
        assert_eq!(padding[0], 0x80);
        assert!(padding[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_padding_block_boundaries() {
        // 55 bytes leaves room for terminator and length in the same block
        assert_eq!(md5_padding(55).len(), 9);
        // 56 bytes pushes the length field into a second block
        assert_eq!(md5_padding(56).len(), 72);
        assert_eq!(md5_padding(63).len(), 65);
        assert_eq!(md5_padding(64).len(), 64);
    }

    #[test]
    fn test_padding_aligns_every_length() {
        for len in 0..=1024u64 {
            let padding = md5_padding(len);
            assert_eq!((len + padding.len() as u64) % 64, 0, "length {}", len);
            assert!((9..=72).contains(&padding.len()), "length {}", len);
        }
    }

    #[test]
    fn test_padding_length_field_is_little_endian_bits() {
        let padding = md5_padding(3);
        assert_eq!(&padding[padding.len() - 8..], &24u64.to_le_bytes());

        let padding = md5_padding(0x0102_0304);
        assert_eq!(
            &padding[padding.len() - 8..],
            &[0x20, 0x18, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_padding_bit_length_wraps() {
        let padding = md5_padding(u64::MAX);
        assert_eq!(
            &padding[padding.len() - 8..],
            &u64::MAX.wrapping_mul(8).to_le_bytes()
        );
    }

    #[test]
    fn test_padding_with_total_keeps_fill_of_short_length() {
        let padding = md5_padding_with_total(11, 139);
        assert_eq!(padding.len(), md5_padding(11).len());
        assert_eq!(&padding[padding.len() - 8..], &(139u64 * 8).to_le_bytes());
    }
}
