//! Password generator widget.

use super::error::WidgetError;

/// Letters are always part of the character set.
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits, included with the numbers option.
const DIGITS: &str = "0123456789";

/// Symbols, included with the symbols option.
const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

// ============================================================================
// PasswordSpec
// ============================================================================

/// Parameters for password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSpec {
    /// Number of characters to generate
    pub length: usize,
    /// Include digits in the character set
    pub numbers: bool,
    /// Include symbols in the character set
    pub symbols: bool,
}

impl PasswordSpec {
    /// Builds the character set for this spec.
    fn charset(&self) -> Vec<char> {
        let mut charset = String::from(LETTERS);
        if self.numbers {
            charset.push_str(DIGITS);
        }
        if self.symbols {
            charset.push_str(SYMBOLS);
        }
        charset.chars().collect()
    }
}

/// Generates a random password from OS entropy.
///
/// Each character is drawn from a 32-bit random value reduced modulo the
/// character set size; with at most 86 characters in the set the modulo
/// bias is below one part in 49 million.
///
/// # Errors
///
/// Returns an error if the OS entropy source fails.
pub fn generate_password(spec: &PasswordSpec) -> Result<String, WidgetError> {
    let charset = spec.charset();

    let mut bytes = vec![0u8; spec.length * 4];
    getrandom::fill(&mut bytes).map_err(|e| WidgetError::Entropy(e.to_string()))?;

    let mut password = String::with_capacity(spec.length);
    for chunk in bytes.chunks_exact(4) {
        let n = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        password.push(charset[n as usize % charset.len()]);
    }

    Ok(password)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(length: usize, numbers: bool, symbols: bool) -> PasswordSpec {
        PasswordSpec {
            length,
            numbers,
            symbols,
        }
    }

    #[test]
    fn test_generated_length() {
        for length in [4, 8, 16, 64, 128] {
            let password = generate_password(&spec(length, false, false)).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_letters_only_by_default() {
        let password = generate_password(&spec(128, false, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_numbers_option_extends_charset() {
        let password = generate_password(&spec(128, true, false)).unwrap();
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_symbols_option_extends_charset() {
        let password = generate_password(&spec(128, false, true)).unwrap();
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphabetic() || SYMBOLS.contains(c)));
    }

    #[test]
    fn test_all_characters_from_full_charset() {
        let full: Vec<char> = spec(1, true, true).charset();
        let password = generate_password(&spec(128, true, true)).unwrap();
        assert!(password.chars().all(|c| full.contains(&c)));
    }

    #[test]
    fn test_two_passwords_differ() {
        // 64 random characters colliding is not a flake worth worrying about
        let a = generate_password(&spec(64, true, true)).unwrap();
        let b = generate_password(&spec(64, true, true)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_charset_sizes() {
        assert_eq!(spec(1, false, false).charset().len(), 52);
        assert_eq!(spec(1, true, false).charset().len(), 62);
        assert_eq!(spec(1, false, true).charset().len(), 76);
        assert_eq!(spec(1, true, true).charset().len(), 86);
    }
}
