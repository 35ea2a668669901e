//! MD5 length-extension forgery for naive secret-prefix MACs.
//!
//! Given `MD5(secret || message)`, the length of `secret`, and some data to append, [`forge`]
//! produces a new message and a digest that verifies as `MD5(secret || new_message)` without
//! ever seeing `secret`. The MD5 engine is implemented from scratch in [`security::md5`].
//!
//! ```
//! use md5forge::{forge, md5_hex};
//!
//! let secret = b"secretkey";
//! let mac = md5_hex(&[&secret[..], b"data=abc"].concat());
//!
//! let forgery = forge(secret.len(), b"data=abc", &mac, b"&admin=true").unwrap();
//! let expected = md5_hex(&[&secret[..], &forgery.message[..]].concat());
//! assert_eq!(forgery.digest, expected);
//! ```

pub mod error;
pub mod security;

pub use error::{Error, Result};
pub use security::*;
