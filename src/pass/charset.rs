//! Character classes shared by the generator and the strength evaluator.

use super::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One character category: a generation alphabet plus the nominal size the
/// entropy estimate charges for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// ASCII alphabet drawn from during generation.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Nominal alphabet size used for entropy scoring. Special scores as 32
    /// even though generation draws from a 26-symbol set: the estimate
    /// models the attacker's printable-symbol space, not this tool's pool.
    pub fn pool_size(self) -> usize {
        match self {
            CharacterClass::Lowercase => 26,
            CharacterClass::Uppercase => 26,
            CharacterClass::Digit => 10,
            CharacterClass::Special => 32,
        }
    }
}

/// Build the generation pool for the enabled classes.
pub fn build(config: &GenerationConfig) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();
    for class in config.enabled_classes() {
        chars.extend_from_slice(class.alphabet().as_bytes());
    }
    chars
}

/// Effective pool size for a config (for the settings menu entropy preview).
pub fn size(config: &GenerationConfig) -> usize {
    config
        .enabled_classes()
        .iter()
        .map(|class| class.alphabet().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint_ascii() {
        let all = format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SPECIAL}");
        assert!(all.is_ascii());
        let mut seen = std::collections::HashSet::new();
        for c in all.chars() {
            assert!(seen.insert(c), "duplicate char {c:?} across alphabets");
        }
    }

    #[test]
    fn scoring_sizes_match_the_model() {
        assert_eq!(CharacterClass::Lowercase.pool_size(), 26);
        assert_eq!(CharacterClass::Uppercase.pool_size(), 26);
        assert_eq!(CharacterClass::Digit.pool_size(), 10);
        assert_eq!(CharacterClass::Special.pool_size(), 32);
    }

    #[test]
    fn build_respects_toggles() {
        let config = GenerationConfig {
            include_uppercase: false,
            include_special: false,
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 26 + 10);
        assert!(pool.iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn build_order_is_fixed() {
        let pool = build(&GenerationConfig::default());
        let expected = format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SPECIAL}");
        assert_eq!(pool, expected.as_bytes());
    }
}
