//! Menu flows: check, generate, history, settings.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::history::History;
use crate::pass;
use crate::settings::Settings;
use crate::strength;
use crate::terminal::{box_bottom, box_line, box_top, clear, print_error, reset_terminal};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_help, print_history,
    print_main_menu, print_report, print_settings_menu,
};

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            println!("Error loading settings: {}", e);
            Settings::default()
        }
    };
    let mut history = History::new();
    let mut print_invalid = false;

    loop {
        print_main_menu(&mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" | "1" => {
                clear();
                check_password(&mut history);
            }
            "2" => {
                clear();
                generate_password(&settings, &mut history);
            }
            "3" => {
                clear();
                print_history(&history);
            }
            "4" => update_settings(&mut settings),
            "5" => {
                clear();
                print_help();
            }
            "6" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

fn check_password(history: &mut History) {
    let mut password = match get_editable_input("Password to check", "") {
        Some(s) => s,
        None => {
            clear();
            return;
        }
    };

    let evaluation = strength::evaluate(&password);
    println!();
    print_report(&evaluation);
    history.push(&password);
    password.zeroize();
}

fn generate_password(settings: &Settings, history: &mut History) {
    let config = settings.generation_config();
    let mut password = match pass::generate(&config) {
        Ok(p) => p,
        Err(e) => {
            // Empty pool: recoverable, point at the settings menu
            print_error(&format!("{e} (see settings)"));
            println!();
            return;
        }
    };

    let evaluation = strength::evaluate(&password);
    box_top("Generated");
    box_line(&password);
    box_bottom();
    print_report(&evaluation);
    history.push(&password);

    if settings.to_clipboard {
        copy_to_clipboard(&password);
    }
    password.zeroize();
}

fn copy_to_clipboard(password: &str) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(_) => println!("*** -COPIED TO CLIPBOARD- ***"),
            Err(e) => print_error(&format!("Clipboard error: {e}")),
        },
        Err(_) => print_error("Clipboard unavailable."),
    }
    println!();
}

pub fn update_settings(settings: &mut Settings) {
    let (mut error_code, mut error_txt) = (0, String::new());

    loop {
        print_settings_menu(settings, error_code, &error_txt);
        error_code = 0;

        let choice = match get_editable_input(
            "Enter menu option (or press Enter to exit settings)",
            "",
        ) {
            Some(s) => s,
            None => break, // ESC pressed - return to main menu
        };

        match choice.trim() {
            "" | "e" => break,
            "1" => {
                if let Some(len) =
                    get_numeric_input("Enter new password length", settings.pass_length)
                {
                    if len == 0 {
                        error_code = 999;
                        error_txt = "Length must be at least 1.".to_string();
                    } else {
                        settings.pass_length = len;
                    }
                }
            }
            "2" => settings.include_lowercase = !settings.include_lowercase,
            "3" => settings.include_uppercase = !settings.include_uppercase,
            "4" => settings.include_numbers = !settings.include_numbers,
            "5" => settings.include_special = !settings.include_special,
            "6" => settings.to_clipboard = !settings.to_clipboard,
            "r" => *settings = Settings::default(),
            "f" => match Settings::load_from_file() {
                Ok(s) => *settings = s,
                Err(e) => {
                    error_code = 999;
                    error_txt = format!("Error loading settings: {}", e);
                }
            },
            "s" => {
                if let Err(e) = settings.save_to_file() {
                    error_code = 999;
                    error_txt = format!("Error saving settings: {}", e);
                }
            }
            _ => error_code = 998,
        }

        if settings.generation_config().enabled_classes().is_empty() && error_code == 0 {
            error_code = 999;
            error_txt = "All character classes are off; generation will fail.".to_string();
        }
    }

    clear();
}
