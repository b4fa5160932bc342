//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass;
use crate::settings::Settings;
use crate::strength::{self, StrengthLevel, estimate_crack_time};
use crate::tui::{print_help, print_report};

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.handle_check()?;
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmeter {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_check(&self) -> Result<(), Done> {
        let Some(ref password) = self.flags.check else {
            return Ok(());
        };

        let evaluation = strength::evaluate(password);
        if quiet::enabled() {
            // One parseable line: tier, bits, crack time.
            let level = StrengthLevel::from_entropy(evaluation.entropy_bits);
            println!(
                "{}\t{:.1}\t{}",
                level.label(),
                evaluation.entropy_bits,
                estimate_crack_time(evaluation.entropy_bits)
            );
        } else {
            print_report(&evaluation);
        }
        Err(Done)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if self.flags.no_lower {
            self.settings.include_lowercase = false;
        }
        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_numbers {
            self.settings.include_numbers = false;
        }
        if self.flags.no_special {
            self.settings.include_special = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self.flags.number.unwrap_or(1).max(1);
        let config = self.settings.generation_config();

        if config.enabled_classes().is_empty() {
            prompts::error("select at least one character set");
            std::process::exit(2);
        }

        if self.settings.to_clipboard {
            let mut passwords = String::new();
            for _ in 0..count {
                if let Ok(mut pass) = pass::generate(&config) {
                    passwords.push_str(&pass);
                    passwords.push('\n');
                    pass.zeroize();
                }
            }
            if let Some(ctx) = self.clipboard.as_mut() {
                match ctx.set_contents(passwords.clone()) {
                    Ok(_) => prompts::clipboard_copied(),
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
            }
            passwords.zeroize();
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for _ in 0..count {
                if let Ok(mut pass) = pass::generate(&config) {
                    let _ = out.write_all(pass.as_bytes());
                    let _ = out.write_all(b"\n");
                    pass.zeroize();
                }
            }
            let _ = out.flush();
        }
    }
}
