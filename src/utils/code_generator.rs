//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). The generator makes no uniqueness promise: the
//! store checks each candidate against its keyspace and retries.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Path segments served by fixed routes.
///
/// A short code equal to one of these would be shadowed by the router, so
/// the store never issues them.
const RESERVED_CODES: &[&str] = &["new", "health"];

/// Source of candidate short codes.
///
/// The store depends on this trait rather than on [`RandomCodeGenerator`]
/// directly so that collision and exhaustion paths can be driven
/// deterministically.
pub trait CodeGenerator: Send + Sync {
    /// Returns a code of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Generates codes from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}

/// Generates a random alphanumeric code of `length` characters.
///
/// A `length` of zero yields an empty string.
///
/// # Examples
///
/// ```
/// use shorty::utils::code_generator::generate_code;
///
/// let code = generate_code(10);
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` collides with a fixed route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 6, 10, 32] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_zero_length_is_empty() {
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        let code = generate_code(256);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let sample: String = (0..50).map(|_| generate_code(64)).collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(10)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_random_generator_delegates() {
        let code = RandomCodeGenerator.generate(12);
        assert_eq!(code.len(), 12);
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("new"));
        assert!(is_reserved("health"));
        assert!(!is_reserved("New"));
        assert!(!is_reserved("abc123"));
    }
}
