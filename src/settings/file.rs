//! Settings file persistence.
//!
//! Single line of comma-separated values under `~/.config/passmeter/`.
//! No password material is ever written here.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELD_COUNT: usize = 6;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    save_to(settings, &config_path())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    load_from(settings, &config_path())
}

fn save_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.include_lowercase,
        settings.include_uppercase,
        settings.include_numbers,
        settings.include_special,
        settings.to_clipboard,
    );

    file.write_all(data.as_bytes())
}

fn load_from(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        // First run: write the defaults so the file exists to edit.
        return save_to(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if line.trim().is_empty() || parts.len() != FIELD_COUNT {
        // Empty or stale layout: rewrite with current values.
        return save_to(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.include_lowercase = parts[1].parse().unwrap_or(settings.include_lowercase);
    settings.include_uppercase = parts[2].parse().unwrap_or(settings.include_uppercase);
    settings.include_numbers = parts[3].parse().unwrap_or(settings.include_numbers);
    settings.include_special = parts[4].parse().unwrap_or(settings.include_special);
    settings.to_clipboard = parts[5].parse().unwrap_or(settings.to_clipboard);

    Ok(())
}

fn config_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passmeter/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let saved = Settings {
            pass_length: 24,
            include_lowercase: true,
            include_uppercase: false,
            include_numbers: true,
            include_special: false,
            to_clipboard: true,
        };
        save_to(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load_from(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert!(path.exists());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn stale_layout_is_rewritten_not_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "74,19,false,false,!@#$,5,1,1,1,1,,true,\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert_eq!(rewritten.trim().split(',').count(), FIELD_COUNT);
    }

    #[test]
    fn corrupt_fields_fall_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "banana,false,true,true,true,false\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings.pass_length, Settings::default().pass_length);
        assert!(!settings.include_lowercase);
    }
}
