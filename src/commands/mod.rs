//! One handler per mode.
//!
//! Handlers return the process exit code; an `Err` is reported by `main`.

mod create;
mod current;
mod interactive;
mod list;
mod select;

pub use create::cmd_create;
pub use current::cmd_current;
pub use interactive::cmd_interactive;
pub use list::cmd_list;
pub use select::cmd_select;
