//! Length-extension forgery against `MD5(secret || message)` MACs.
//!
//! An MD5 digest is the complete internal state after the last padded block. Loading that state
//! back and feeding more blocks continues the hash exactly where the victim stopped, so an
//! attacker who knows only the digest and the secret's length can compute
//! `MD5(secret || message || glue || extra)` for any `extra`.

use log::{debug, trace};

use super::md5::{digest_to_hex, parse_digest, process_block, BLOCK_SIZE};
use super::padding::{md5_padding, md5_padding_with_total, MAX_MESSAGE_BYTES};
use crate::error::{Error, Result};

/// A forged message together with the MAC it will verify under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    /// 32 lowercase hex characters.
    pub digest: String,
    /// `original_message || glue padding || appended data`, without the secret.
    pub message: Vec<u8>,
}

impl Forgery {
    /// Splits the forgery into `(digest_hex, message)`.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.digest, self.message)
    }

    /// The forged message as lowercase hex, handy for transports that cannot carry raw bytes.
    pub fn message_hex(&self) -> String {
        hex::encode(&self.message)
    }
}

fn check_length(len: u64, what: &str) -> Result<u64> {
    if len > MAX_MESSAGE_BYTES {
        return Err(Error::InvalidArgument(format!(
            "{} of {} bytes does not fit MD5's 64-bit length field",
            what, len
        )));
    }
    Ok(len)
}

/// Forges `original_message || glue || data_to_append` and its MAC from a known
/// `MD5(secret || original_message)`.
///
/// `assumed_secret_len` is a guess. If it matches the real secret length the returned digest
/// equals `MD5(secret || forgery.message)`. If it does not, the result is still well formed but
/// will not verify; that is not reported as an error because nothing here can tell.
///
/// # Errors
/// - [`Error::InvalidDigestFormat`] if `original_digest_hex` is not 32 hex characters.
/// - [`Error::InvalidArgument`] if the combined lengths overflow MD5's length field.
pub fn forge(
    assumed_secret_len: usize,
    original_message: &[u8],
    original_digest_hex: &str,
    data_to_append: &[u8],
) -> Result<Forgery> {
    let mut state = parse_digest(original_digest_hex)?;

    let hashed_len = assumed_secret_len
        .checked_add(original_message.len())
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "secret length {} plus message length {} overflows",
                assumed_secret_len,
                original_message.len()
            ))
        })?;
    let hashed_len = check_length(hashed_len as u64, "secret plus message")?;

    let glue = md5_padding(hashed_len);
    let extension_base_len = hashed_len + glue.len() as u64;
    debug_assert_eq!(extension_base_len % BLOCK_SIZE as u64, 0);

    let total_len = check_length(
        extension_base_len.saturating_add(data_to_append.len() as u64),
        "extended message",
    )?;

    let mut message =
        Vec::with_capacity(original_message.len() + glue.len() + data_to_append.len());
    message.extend_from_slice(original_message);
    message.extend_from_slice(&glue);
    message.extend_from_slice(data_to_append);

    let mut chunk = data_to_append.to_vec();
    chunk.extend_from_slice(&md5_padding_with_total(
        data_to_append.len() as u64,
        total_len,
    ));

    debug!(
        "forging with secret length {}: {} glue bytes, resuming at byte {}, {} block(s) to compress",
        assumed_secret_len,
        glue.len(),
        extension_base_len,
        chunk.len() / BLOCK_SIZE
    );

    let mut block = [0u8; BLOCK_SIZE];
    for (index, piece) in chunk.chunks_exact(BLOCK_SIZE).enumerate() {
        block.copy_from_slice(piece);
        state = process_block(state, &block);
        trace!("block {} -> {:08x?}", index, state.0);
    }

    Ok(Forgery {
        digest: digest_to_hex(&state),
        message,
    })
}
