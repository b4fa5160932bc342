//! Menu and report text for the TUI.

use crate::history::History;
use crate::pass::charset;
use crate::settings::Settings;
use crate::strength::{
    self, Evaluation, HIGH_ENTROPY_BITS, MIN_LENGTH, StrengthLevel, bar_fill, estimate_crack_time,
};
use crate::terminal::{
    GREEN, RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear,
    flush, print_error, print_rule, strength_bar,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to check a password)"
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Password Meter");
    box_line("");
    box_line("  1) check a password");
    box_line("  2) generate a password");
    box_line("  3) history");
    box_line("  4) settings");
    box_line("  5) help");
    box_line("  6) quit");
    box_line("");
    box_bottom();

    // Error message (or blank line if no error)
    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

fn mark(met: bool) -> String {
    if met {
        format!("{GREEN}\u{2713}{RESET}")
    } else {
        format!("{RED}\u{2717}{RESET}")
    }
}

/// Strength report: bar, tier, entropy, crack time, and the checklist.
pub fn print_report(evaluation: &Evaluation) {
    let level = StrengthLevel::from_entropy(evaluation.entropy_bits);
    let feedback = evaluation.feedback;

    box_top("Strength");
    box_line(&strength_bar(bar_fill(evaluation.entropy_bits), level.color()));
    box_line(&format!(
        "{}{}{} \u{2022} {} bits of entropy",
        level.color(),
        level.label(),
        RESET,
        evaluation.entropy_bits.round() as u64
    ));
    box_line(&format!(
        "Time to crack: ~ {}",
        estimate_crack_time(evaluation.entropy_bits)
    ));
    print_rule();
    box_line(&format!(
        "  {} At least {} characters",
        mark(feedback.has_min_length),
        MIN_LENGTH
    ));
    box_line(&format!("  {} Uppercase letter", mark(feedback.has_uppercase)));
    box_line(&format!("  {} Lowercase letter", mark(feedback.has_lowercase)));
    box_line(&format!("  {} Number", mark(feedback.has_digit)));
    box_line(&format!("  {} Special character", mark(feedback.has_special)));
    box_line(&format!(
        "  {} {}+ bits of entropy",
        mark(feedback.has_high_entropy),
        HIGH_ENTROPY_BITS as u64
    ));
    box_bottom();
    println!();
}

pub fn print_history(history: &History) {
    box_top("History");
    if history.is_empty() {
        box_line_center("No history yet.");
    } else {
        for (i, entry) in history.entries().iter().enumerate() {
            box_line(&format!("  {}) {}", i + 1, entry));
        }
    }
    box_bottom();
    println!();
}

pub fn print_settings_menu(settings: &Settings, error_code: i32, error_txt: &str) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Generation{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));
    box_line(&format!(
        "  2) Lowercase (a-z): {}",
        settings.include_lowercase
    ));
    box_line(&format!(
        "  3) Uppercase (A-Z): {}",
        settings.include_uppercase
    ));
    box_line(&format!("  4) Numbers (0-9): {}", settings.include_numbers));
    box_line(&format!(
        "  5) Special (!@#$...): {}",
        settings.include_special
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!(
        "  6) Copy generated passwords to clipboard: {}",
        settings.to_clipboard
    ));

    let config = settings.generation_config();
    let pool = charset::size(&config);
    box_line("");
    box_line(&format!("{UNDERLINE}Entropy{RESET}:"));
    box_line(&format!("  Source: {}", crate::rng::source_name()));
    box_line(&format!(
        "  Pool: {} chars \u{2022} {:.1} bits per generated password",
        pool,
        strength::calculate_entropy(settings.pass_length, pool)
    ));

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_bottom();

    // Error messages (or blank line if no error)
    match error_code {
        998 => print_error("Invalid input, please enter a valid menu option..."),
        999 => print_error(error_txt),
        _ => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Passmeter");
    box_line_center("Password strength meter and generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI menu to");
    box_line("     check passwords, generate, and edit settings.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20, or -c <pass>)");
    box_line("     to generate or check without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmeter [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Check:");
    box_opt(
        "  -c, --check <PASSWORD>",
        "Evaluate a password and print the strength report",
    );
    box_line("");
    box_line(" Generate:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-lower", "Drop lowercase letters from the pool");
    box_opt("      --no-upper", "Drop uppercase letters from the pool");
    box_opt("      --no-numbers", "Drop digits from the pool");
    box_opt("      --no-special", "Alphanumeric only, no special characters");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords/reports");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from the config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmeter                  Interactive menu");
    box_line("  passmeter -l 20            One 20-character password");
    box_line("  passmeter -l 20 -n 3       Three 20-character passwords");
    box_line("  passmeter --no-special -b  Alphanumeric password to clipboard");
    box_line("  passmeter -c 'hunter2'     Strength report for hunter2");
    box_line("");
    box_bottom();
    println!();
}
