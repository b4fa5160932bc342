//! Interactive TUI menus.

mod input;
mod menus;
mod text;

pub use input::*;
pub use menus::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    main_menu();
}
