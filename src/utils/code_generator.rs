//! Random short code generation.
//!
//! Codes are 8 lowercase hex characters drawn from 4 random bytes, giving a
//! 32-bit code space. Uniqueness is enforced by the registry, not here.

use rand::RngCore;

/// Number of random bytes per generated code.
const CODE_LENGTH_BYTES: usize = 4;

/// Source of candidate short codes.
///
/// The registry asks for a fresh candidate on every collision retry.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Cryptographically secure hex code generator.
///
/// Uses the thread-local `ChaCha`-based RNG from `rand`, reseeded from the
/// operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomHexGenerator;

impl CodeGenerator for RandomHexGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates an 8-character lowercase hex code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];
    rand::rng().fill_bytes(&mut buffer);
    hex::encode(buffer)
}
