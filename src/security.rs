pub mod bitops;
pub mod length_extension;
pub mod mac;
pub mod md5;
pub mod padding;

// Re-export the 32-bit primitives
pub use bitops::{add, rotate_left};

// Re-export MD5 functionality
pub use md5::{
    digest_to_hex, md5_digest, md5_hex, parse_digest, process_block, HashState, BLOCK_SIZE,
    MD5_OUTPUT_SIZE,
};

// Re-export padding functionality
pub use padding::{md5_padding, md5_padding_with_total, MAX_MESSAGE_BYTES};

// Re-export the length-extension forger
pub use length_extension::{forge, Forgery};

// Re-export the keyed MAC oracle
pub use mac::{forge_with_oracle, KeyedMacOracle, MacVerifier};
