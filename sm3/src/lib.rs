//! SM3 cryptographic hash function (GM/T 0004-2012) and the SM3-based key
//! derivation function used by SM2.
//!
//! ```
//! assert_eq!(
//!     sm3::sum_hex("abc").unwrap(),
//!     "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
//! );
//! ```
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod consts;
mod error;
mod encoding;
mod input;
mod kdf;
mod sm3;
mod utils;

use alloc::string::String;

pub use digest::Digest;
pub use crate::consts::{BLOCK_SIZE, OUTPUT_SIZE};
pub use crate::error::{Error, Result};
pub use crate::encoding::{from_hex, to_hex};
pub use crate::input::Message;
pub use crate::kdf::kdf;
pub use crate::sm3::{Output, Sm3};

/// New hasher in the initial state.
pub fn create() -> Sm3 {
    Sm3::new()
}

/// One-shot digest of `data`.
pub fn sum<'a, M: Into<Message<'a>>>(data: M) -> Result<Output> {
    let mut hasher = Sm3::new();
    hasher.write(data);
    hasher.finalize_reset()
}

/// [`sum`] as a lowercase hex string.
pub fn sum_hex<'a, M: Into<Message<'a>>>(data: M) -> Result<String> {
    sum(data).map(to_hex)
}
