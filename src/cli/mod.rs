//! Flag-driven CLI front end.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use context::Done;
pub use flags::CliFlags;
pub use parse::ParseError;
pub use parse::parse;

/// Run CLI mode.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(c) => c,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Run `passmeter --help` for usage.");
            std::process::exit(2);
        }
    };

    let _ = context.run();
}
