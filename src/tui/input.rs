//! Raw-mode line editors for the TUI.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read a line with basic editing: cursor movement, Home/End, Ctrl+U clear.
/// Esc/Ctrl+Q cancel (`None`), Ctrl+C exits the process.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut chars: Vec<char> = initial_value.chars().collect();
    let mut cursor = chars.len();
    let mut last_len = chars.len();
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    print!("{}: {}", prompt, initial_value);
    flush();

    loop {
        let event = match read() {
            Ok(event) => event,
            Err(_) => break,
        };
        let Event::Key(key) = event else { continue };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors, so restore the terminal here
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                chars.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    chars.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < chars.len() {
                    chars.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => {
                if cursor < chars.len() {
                    cursor += 1;
                }
            }
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = chars.len(),
            KeyCode::Char(c) => {
                chars.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        // Redraw the input line, then park the cursor at the edit point
        let line: String = chars.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, line);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        last_len = chars.len();
    }

    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(chars.into_iter().collect())
    }
}

/// Numeric input on top of the line editor. `None` on cancel; leaving the
/// field empty keeps the initial value.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let typed = get_editable_input(prompt, &initial)?;
    let digits: String = typed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Some(initial_value);
    }
    digits.parse().ok()
}
