//! Secure random source for password generation.
//!
//! Every draw comes straight from the operating system's CSPRNG; there is no
//! process-local generator state to seed, reseed, or zeroize.

use rand::RngCore;
use rand::rngs::OsRng;

/// Draw one random 32-bit word from the OS CSPRNG.
#[inline]
pub fn next_u32() -> u32 {
    OsRng.next_u32()
}

/// Name of the entropy source, for the settings menu display.
pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}
