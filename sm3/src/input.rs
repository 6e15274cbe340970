use alloc::string::String;
use alloc::vec::Vec;
#[cfg(feature = "std")]
use core::convert::TryFrom;

use crate::error::{Error, Result};

/// Data accepted by the hashing entry points: UTF-8 text or raw bytes.
///
/// Text is hashed as its UTF-8 encoding, so `Message::from("abc")` and
/// `Message::from(b"abc")` produce the same digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Message<'a> {
    pub fn text_from_utf8(bytes: &'a [u8]) -> Result<Self> {
        core::str::from_utf8(bytes)
            .map(Message::Text)
            .map_err(|_| Error::InvalidInput)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Message::Text(s) => s.as_bytes(),
            Message::Bytes(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> AsRef<[u8]> for Message<'a> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(s: &'a str) -> Self {
        Message::Text(s)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(s: &'a String) -> Self {
        Message::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(b: &'a [u8]) -> Self {
        Message::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Message::Bytes(&b[..])
    }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Message::Bytes(b.as_slice())
    }
}

#[cfg(feature = "std")]
impl<'a> TryFrom<&'a std::ffi::OsStr> for Message<'a> {
    type Error = Error;

    fn try_from(s: &'a std::ffi::OsStr) -> Result<Self> {
        s.to_str().map(Message::Text).ok_or(Error::InvalidInput)
    }
}
