pub mod command;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use render::render_app;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
