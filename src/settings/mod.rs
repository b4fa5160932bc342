//! Generation settings shared by the TUI and CLI front ends.

mod file;

use crate::pass::GenerationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// The generation config for the current toggles.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.pass_length,
            include_lowercase: self.include_lowercase,
            include_uppercase: self.include_uppercase,
            include_numbers: self.include_numbers,
            include_special: self.include_special,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_special: true,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_generate() {
        let config = Settings::default().generation_config();
        assert_eq!(config, GenerationConfig::default());
        assert!(crate::pass::generate(&config).is_ok());
    }
}
