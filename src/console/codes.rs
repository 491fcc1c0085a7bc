//! Coupon code generation

use rand::Rng;
use std::collections::HashSet;

/// Characters used in generated codes. `0 O 1 I` are left out so codes can
/// be read back over the phone.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// A random code of `length` characters from [`CODE_ALPHABET`]
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Draws tried by [`generate_unique_code`] before giving up
pub const MAX_ATTEMPTS: usize = 10_000;

/// Number of distinct codes of `length` characters. Saturates at `u64::MAX`.
pub fn code_space(length: usize) -> u64 {
    u32::try_from(length)
        .ok()
        .and_then(|len| (CODE_ALPHABET.len() as u64).checked_pow(len))
        .unwrap_or(u64::MAX)
}

/// A random code not present in `taken`. The new code is added to `taken`.
///
/// Returns `None` when no free code turned up within [`MAX_ATTEMPTS`] draws.
pub fn generate_unique_code(length: usize, taken: &mut HashSet<String>) -> Option<String> {
    for _ in 0..MAX_ATTEMPTS {
        let code = generate_code(length);
        if taken.insert(code.clone()) {
            return Some(code);
        }
    }
    None
}
