use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::consts::OUTPUT_SIZE;
use crate::error::{Error, Result};
use crate::input::Message;
use crate::sm3::Sm3;

/// Key derivation function of GM/T 0003-2012 (as used by SM2 key exchange
/// and encryption), with `output_len` given in bytes.
///
/// The output is `H(Z || 1) || H(Z || 2) || ...` truncated to `output_len`,
/// with the counter encoded as a 32-bit big-endian integer.
///
/// Returns [`Error::KdfExhausted`] when every derived byte is zero, which
/// includes `output_len == 0`.
pub fn kdf<'a, M: Into<Message<'a>>>(secret: M, output_len: usize) -> Result<Vec<u8>> {
    let secret = secret.into();
    let blocks = output_len / OUTPUT_SIZE + (output_len % OUTPUT_SIZE != 0) as usize;
    if blocks as u64 > u64::from(u32::max_value()) {
        return Err(Error::KdfOutputTooLong {
            requested: output_len,
        });
    }
    debug!(output_len, blocks, "sm3 kdf");

    let mut key = Vec::with_capacity(blocks * OUTPUT_SIZE);
    let mut hasher = Sm3::new();
    for ct in 1..=blocks as u32 {
        hasher.write(secret);
        hasher.write(&ct.to_be_bytes());
        key.extend_from_slice(&hasher.finalize_reset()?);
        trace!(ct, "sm3 kdf block");
    }
    key.truncate(output_len);

    if key.iter().all(|&b| b == 0) {
        warn!(output_len, "sm3 kdf derived an all-zero key");
        return Err(Error::KdfExhausted);
    }
    Ok(key)
}
