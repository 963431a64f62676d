//! CLI adapter - argument parsing and terminal rendering.

mod args;
mod render;
mod time_arg;

pub use args::{Cli, Command};
pub use render::{local_time, render_json, render_text};
pub use time_arg::parse_wall_clock;
