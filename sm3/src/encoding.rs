use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;

/// Lowercase hex encoding, e.g. `[255, 0, 255]` becomes `"ff00ff"`.
pub fn to_hex<T: AsRef<[u8]>>(bytes: T) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string of either case.
///
/// Fails with [`Error::InvalidFormat`](crate::Error::InvalidFormat) on odd
/// length or a non-hex digit.
pub fn from_hex<T: AsRef<[u8]>>(hex_str: T) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}
