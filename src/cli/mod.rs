mod commands;
mod handlers;
mod session;

pub use commands::{Cli, Commands};
pub use handlers::{handle_examples, handle_interactive, sample_notes};
pub use session::Session;
