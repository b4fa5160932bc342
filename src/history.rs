//! Recent-password history for the interactive front end.
//!
//! The evaluator and generator never see this; it is caller-owned state,
//! kept in memory only and wiped on drop.

use zeroize::Zeroize;

/// How many recent passwords the panel shows.
pub const CAPACITY: usize = 3;

/// Bounded list of the most recently checked or generated passwords,
/// newest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a password. Empty strings and repeats of the newest entry are
    /// skipped; the oldest entry falls off past capacity.
    pub fn push(&mut self, password: &str) {
        if password.is_empty() {
            return;
        }
        if self.entries.first().map(String::as_str) == Some(password) {
            return;
        }
        self.entries.insert(0, password.to_string());
        while self.entries.len() > CAPACITY {
            if let Some(mut dropped) = self.entries.pop() {
                dropped.zeroize();
            }
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for History {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            entry.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_three() {
        let mut history = History::new();
        for pass in ["one", "two", "three", "four"] {
            history.push(pass);
        }
        assert_eq!(history.entries(), ["four", "three", "two"]);
    }

    #[test]
    fn skips_repeat_of_head_but_not_older_entries() {
        let mut history = History::new();
        history.push("alpha");
        history.push("alpha");
        assert_eq!(history.entries(), ["alpha"]);

        history.push("beta");
        history.push("alpha");
        assert_eq!(history.entries(), ["alpha", "beta", "alpha"]);
    }

    #[test]
    fn ignores_empty_passwords() {
        let mut history = History::new();
        history.push("");
        assert!(history.is_empty());
    }
}
