//! Proof-of-work targets
//!
//! 256-bit targets in big-endian byte order plus the compact "nBits"
//! encoding carried in block headers.

use std::fmt;

use crate::crypto::Hash;

/// 256-bit unsigned target, most significant byte first
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(pub [u8; 32]);

impl Target {
    pub const ZERO: Target = Target([0u8; 32]);
    pub const MAX: Target = Target([0xff; 32]);

    /// `~0 >> shift`, the usual way proof-of-work ceilings are written
    pub fn max_shifted_right(shift: u32) -> Self {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let bit_start = i as u32 * 8;
            *byte = if bit_start + 8 <= shift {
                0x00
            } else if bit_start >= shift {
                0xff
            } else {
                0xff >> (shift - bit_start)
            };
        }
        Target(bytes)
    }

    /// Interpret a block hash as a number
    pub fn from_hash(hash: &Hash) -> Self {
        let mut bytes = *hash.as_bytes();
        bytes.reverse();
        Target(bytes)
    }

    /// Decode compact bits. Negative or overflowing encodings give `None`.
    pub fn from_compact(compact: u32) -> Option<Self> {
        let exponent = (compact >> 24) as isize;
        let mantissa = compact & 0x007f_ffff;

        if mantissa != 0 && compact & 0x0080_0000 != 0 {
            return None;
        }

        let mut target = [0u8; 32];
        for i in 0..3 {
            let byte = ((mantissa >> (16 - 8 * i)) & 0xff) as u8;
            let pos = 32 - exponent + i as isize;
            if pos < 0 {
                if byte != 0 {
                    return None;
                }
            } else if pos < 32 {
                target[pos as usize] = byte;
            }
        }
        Some(Target(target))
    }

    /// Encode as compact bits
    pub fn to_compact(&self) -> u32 {
        let first_nonzero = match self.0.iter().position(|&b| b != 0) {
            Some(i) => i,
            None => return 0,
        };

        let mut exponent = (32 - first_nonzero) as u32;
        let mut mantissa: u32 = 0;
        for i in 0..3 {
            mantissa <<= 8;
            if let Some(&byte) = self.0.get(first_nonzero + i) {
                mantissa |= byte as u32;
            }
        }

        // Keep the sign bit clear
        if mantissa & 0x0080_0000 != 0 {
            mantissa >>= 8;
            exponent += 1;
        }

        (exponent << 24) | mantissa
    }

    pub fn is_zero(&self) -> bool {
        *self == Target::ZERO
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({})", self.to_hex())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Check that `hash` satisfies the target encoded in `bits`, and that the
/// target itself is no easier than the network's ceiling.
pub fn check_proof_of_work(hash: &Hash, bits: u32, pow_limit: &Target) -> bool {
    let target = match Target::from_compact(bits) {
        Some(t) if !t.is_zero() => t,
        _ => return false,
    };

    if target > *pow_limit {
        return false;
    }

    Target::from_hash(hash) <= target
}
