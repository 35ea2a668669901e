//! DISCLAIMER: MD5 is broken. This module exists to demonstrate why a secret-prefix MD5 MAC
//! can be extended by anyone who sees one valid tag. Do not use it to protect anything.
//!
//! The compression function is table driven: round `i` picks its mixing function and message
//! word from the quarter of the 64 rounds it falls in, and reads its rotation and additive
//! constant from [`S`] and [`K`].

use super::bitops::add;
use super::padding::md5_padding;
use crate::error::{Error, Result};

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 consumes its input in 64-byte blocks.
pub const BLOCK_SIZE: usize = 64;

/// Length of a digest rendered as hex.
const DIGEST_HEX_LEN: usize = MD5_OUTPUT_SIZE * 2;

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left rotation per round, four distinct amounts per quarter.
static S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// The four 32-bit accumulator words (h0, h1, h2, h3) MD5 carries between blocks.
///
/// A finished MD5 digest is nothing more than this state serialized little-endian, which is
/// what makes [`parse_digest`] possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState(pub [u32; 4]);

impl HashState {
    /// The standard MD5 initial value.
    pub const INITIAL: HashState = HashState([0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476]);

    /// Reads four little-endian words from a 16-byte digest.
    pub fn from_digest_bytes(bytes: &[u8; MD5_OUTPUT_SIZE]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        HashState(words)
    }

    /// Serializes the state as a 16-byte digest, word by word in little-endian order.
    pub fn to_digest_bytes(&self) -> [u8; MD5_OUTPUT_SIZE] {
        let mut output = [0u8; MD5_OUTPUT_SIZE];
        for (chunk, word) in output.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        output
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Processes a 512-bit (64-byte) block and returns the updated state.
/// The block is divided into 16 32-bit words in little-endian.
pub fn process_block(state: HashState, block: &[u8; BLOCK_SIZE]) -> HashState {
    let mut w = [0u32; 16];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = state.0;

    for i in 0..64 {
        let (f, g) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((b & d) | (c & !d), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        // S entries are all in 4..=23, so the unchecked rotation cannot misbehave
        let temp = add(add(add(a, f), K[i]), w[g]);
        let temp = add(b, temp.rotate_left(S[i]));

        a = d;
        d = c;
        c = b;
        b = temp;
    }

    let [h0, h1, h2, h3] = state.0;
    HashState([add(h0, a), add(h1, b), add(h2, c), add(h3, d)])
}

/// Runs [`process_block`] over every 64-byte block of `data`, threading `state` through.
///
/// `data.len()` must be a multiple of [`BLOCK_SIZE`]; a trailing partial block is ignored.
pub(crate) fn compress_blocks(state: HashState, data: &[u8]) -> HashState {
    debug_assert_eq!(data.len() % BLOCK_SIZE, 0);
    let mut block = [0u8; BLOCK_SIZE];
    data.chunks_exact(BLOCK_SIZE).fold(state, |state, chunk| {
        block.copy_from_slice(chunk);
        process_block(state, &block)
    })
}

/// Computes the MD5 digest of `data` in a single shot.
pub fn md5_digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let full = data.len() - data.len() % BLOCK_SIZE;
    let state = compress_blocks(HashState::INITIAL, &data[..full]);

    let mut tail = data[full..].to_vec();
    tail.extend_from_slice(&md5_padding(data.len() as u64));
    compress_blocks(state, &tail).to_digest_bytes()
}

/// Computes the MD5 digest of `data` as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(md5_digest(data))
}

/// Parses a 32-character hex digest back into the state MD5 held when it emitted it.
///
/// Upper- and lowercase hex are both accepted.
pub fn parse_digest(digest_hex: &str) -> Result<HashState> {
    if digest_hex.len() != DIGEST_HEX_LEN {
        return Err(Error::InvalidDigestFormat(format!(
            "expected {} bytes of hex, got {} bytes",
            DIGEST_HEX_LEN,
            digest_hex.len()
        )));
    }

    let mut bytes = [0u8; MD5_OUTPUT_SIZE];
    hex::decode_to_slice(digest_hex, &mut bytes)
        .map_err(|e| Error::InvalidDigestFormat(format!("{:?}: {}", digest_hex, e)))?;
    Ok(HashState::from_digest_bytes(&bytes))
}

/// Renders a state as the 32-character lowercase hex digest MD5 would output.
pub fn digest_to_hex(state: &HashState) -> String {
    hex::encode(state.to_digest_bytes())
}
