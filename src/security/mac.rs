//! Secret-prefix MD5 MACs, `MAC(key, m) = MD5(key || m)`.
//!
//! [`KeyedMacOracle`] plays the victim: it holds a key and signs or checks messages. The
//! attacker side never reads the key; [`forge_with_oracle`] only asks the oracle yes/no
//! questions while guessing how long the key is.

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use super::length_extension::{forge, Forgery};
use super::md5::{md5_digest, parse_digest, MD5_OUTPUT_SIZE};
use crate::error::{Error, Result};

/// Anything that can say whether a MAC is valid for a message.
pub trait MacVerifier {
    /// Returns `true` if `mac_hex` authenticates `message`.
    fn verify(&self, message: &[u8], mac_hex: &str) -> bool;
}

impl<F> MacVerifier for F
where
    F: Fn(&[u8], &str) -> bool,
{
    fn verify(&self, message: &[u8], mac_hex: &str) -> bool {
        self(message, mac_hex)
    }
}

/// Signs and verifies messages with `MD5(key || message)`.
#[derive(Clone)]
pub struct KeyedMacOracle {
    key: Vec<u8>,
}

impl std::fmt::Debug for KeyedMacOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedMacOracle")
            .field("key_len", &self.key.len())
            .finish()
    }
}

impl KeyedMacOracle {
    /// Creates an oracle with a fixed key.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Creates an oracle whose key has a random length drawn from `key_len` and random bytes.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, key_len: RangeInclusive<usize>) -> Result<Self> {
        if key_len.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "key length range {}..={} is empty",
                key_len.start(),
                key_len.end()
            )));
        }
        let mut key = vec![0u8; rng.gen_range(key_len)];
        rng.fill(&mut key[..]);
        Ok(Self { key })
    }

    /// Length of the secret key. Only meant for checking results in tests and demos.
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    fn tag(&self, message: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
        let mut input = Vec::with_capacity(self.key.len() + message.len());
        input.extend_from_slice(&self.key);
        input.extend_from_slice(message);
        md5_digest(&input)
    }

    /// Returns `MD5(key || message)` as lowercase hex.
    pub fn sign(&self, message: &[u8]) -> String {
        hex::encode(self.tag(message))
    }
}

impl MacVerifier for KeyedMacOracle {
    /// A malformed MAC never verifies.
    fn verify(&self, message: &[u8], mac_hex: &str) -> bool {
        let claimed = match parse_digest(mac_hex) {
            Ok(state) => state.to_digest_bytes(),
            Err(_) => return false,
        };
        let expected = self.tag(message);
        claimed
            .iter()
            .zip(expected.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Tries every secret length in `secret_lens` until `verifier` accepts the forgery.
///
/// Returns the secret length that worked together with the forgery.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `secret_lens` is empty.
/// - [`Error::InvalidDigestFormat`] if `mac_hex` is malformed.
/// - [`Error::SecretLengthNotFound`] if no length in the range verifies.
pub fn forge_with_oracle<V: MacVerifier + ?Sized>(
    verifier: &V,
    message: &[u8],
    mac_hex: &str,
    data_to_append: &[u8],
    secret_lens: RangeInclusive<usize>,
) -> Result<(usize, Forgery)> {
    if secret_lens.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "secret length range {}..={} is empty",
            secret_lens.start(),
            secret_lens.end()
        )));
    }
    let (min, max) = (*secret_lens.start(), *secret_lens.end());

    for secret_len in secret_lens {
        let forgery = forge(secret_len, message, mac_hex, data_to_append)?;
        if verifier.verify(&forgery.message, &forgery.digest) {
            debug!("secret length {} accepted", secret_len);
            return Ok((secret_len, forgery));
        }
        debug!("secret length {} rejected", secret_len);
    }

    Err(Error::SecretLengthNotFound { min, max })
}
