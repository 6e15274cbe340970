pub const STATE_LEN: usize = 8;

/// Size of one message block, in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Size of the digest, in bytes.
pub const OUTPUT_SIZE: usize = 32;

pub const IV: [u32; STATE_LEN] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

/// Round constant for rounds 0..=15
pub const T_0: u32 = 0x79cc_4519;
/// Round constant for rounds 16..=63
pub const T_1: u32 = 0x7a87_9d8a;

/// `T_j <<< (j mod 32)` for every round, as consumed by SS1.
pub const T: [u32; 64] = round_constants();

const fn round_constants() -> [u32; 64] {
    let mut t = [0u32; 64];
    let mut j = 0;
    while j < 64 {
        let base = if j < 16 { T_0 } else { T_1 };
        t[j] = base.rotate_left((j % 32) as u32);
        j += 1;
    }
    t
}
