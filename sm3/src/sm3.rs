use alloc::vec::Vec;

use block_buffer::byteorder::{ByteOrder, BE};
use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};
use tracing::error;

use crate::consts::{BLOCK_SIZE, IV, OUTPUT_SIZE, STATE_LEN};
use crate::error::{Error, Result};
use crate::input::Message;
use crate::utils::{compress256, Block};

type BlockSize = U64;

/// A finalized SM3 digest.
pub type Output = [u8; OUTPUT_SIZE];

#[derive(Clone)]
struct EngineState {
    h: [u32; STATE_LEN],
}

impl EngineState {
    fn new(h: &[u32; STATE_LEN]) -> EngineState {
        EngineState { h: *h }
    }

    fn process_block(&mut self, block: &Block) {
        compress256(&mut self.h, block);
    }

    fn output(&self) -> Output {
        let mut out = [0u8; OUTPUT_SIZE];
        BE::write_u32_into(&self.h, &mut out);
        out
    }
}

#[derive(Clone)]
struct Engine {
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: EngineState,
}

impl Engine {
    fn new(h: &[u32; STATE_LEN]) -> Engine {
        Engine {
            len: 0,
            buffer: Default::default(),
            state: EngineState::new(h),
        }
    }

    fn input(&mut self, input: &[u8]) {
        self.len = self.len.saturating_add(input.len() as u64);
        let self_state = &mut self.state;
        self.buffer
            .input(input, |block| self_state.process_block(block));
    }

    // padding goes through `input`, so no bytes may be left pending
    fn finish(&mut self) -> Result<()> {
        let bytes = self.len;
        let bit_len = bytes
            .checked_mul(8)
            .ok_or(Error::MessageTooLong { bytes })?;

        let mut pad = [0u8; BLOCK_SIZE];
        pad[0] = 0x80;
        let m = (bytes % BLOCK_SIZE as u64) as usize;
        let n = if m < 56 { 56 - m } else { BLOCK_SIZE + 56 - m };
        self.input(&pad[..n]);

        let mut len_field = [0u8; 8];
        BE::write_u64(&mut len_field, bit_len);
        self.input(&len_field);

        let pending = self.buffer.position();
        if pending != 0 {
            error!(pending, "sm3 padding left a partial block");
            return Err(Error::InternalInvariantViolation { pending });
        }
        Ok(())
    }

    fn reset(&mut self, h: &[u32; STATE_LEN]) {
        self.len = 0;
        self.buffer.reset();
        self.state = EngineState::new(h);
    }
}

/// Streaming SM3 hasher.
///
/// Data may be written in pieces of any size; the digest only depends on the
/// concatenation. [`Sm3::finalize`] works on a copy, so the hasher can keep
/// taking input after a digest has been read. Use [`Clone`] to fork a stream.
///
/// ```
/// use sm3::Sm3;
///
/// let mut hasher = Sm3::new();
/// hasher.write("ab");
/// hasher.write(b"c");
/// let digest = hasher.finalize().unwrap();
/// assert_eq!(sm3::to_hex(digest), sm3::sum_hex("abc").unwrap());
/// ```
#[derive(Clone)]
pub struct Sm3 {
    engine: Engine,
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3 {
            engine: Engine::new(&IV),
        }
    }
}

impl Sm3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        OUTPUT_SIZE
    }

    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Returns to the initial state, discarding everything written so far.
    pub fn reset(&mut self) {
        self.engine.reset(&IV);
    }

    /// Feeds text or bytes into the hasher. Empty input is a no-op.
    pub fn write<'a, M: Into<Message<'a>>>(&mut self, data: M) {
        self.engine.input(data.into().as_bytes());
    }

    /// Same as [`Sm3::write`].
    pub fn update<'a, M: Into<Message<'a>>>(&mut self, data: M) {
        self.write(data);
    }

    /// Digest of everything written so far. The hasher itself is untouched.
    pub fn finalize(&self) -> Result<Output> {
        self.clone().finalize_reset()
    }

    /// Returns `prefix` followed by the digest.
    pub fn finalize_with_prefix<'a, M: Into<Message<'a>>>(&self, prefix: M) -> Result<Vec<u8>> {
        let hash = self.finalize()?;
        let prefix = prefix.into();
        let mut out = Vec::with_capacity(prefix.len() + OUTPUT_SIZE);
        out.extend_from_slice(prefix.as_bytes());
        out.extend_from_slice(&hash);
        Ok(out)
    }

    /// Finalizes in place and resets the hasher for reuse.
    pub fn finalize_reset(&mut self) -> Result<Output> {
        let res = self.engine.finish().map(|()| self.engine.state.output());
        self.reset();
        res
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.engine.input(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    /// # Panics
    ///
    /// Only if the message bit length overflows 64 bits, or padding is
    /// broken. [`Sm3::finalize`] reports both as errors instead.
    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        match self.finalize_reset() {
            Ok(out) => GenericArray::clone_from_slice(&out),
            Err(err) => panic!("sm3: {}", err),
        }
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        Sm3::reset(self);
    }
}
