// src/commands/mod.rs
pub mod browser_cmd;
pub mod calc_cmd;
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod sysfetch_cmd;
pub mod touch;
pub mod types;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Arity, Command, CommandContext, CommandResult, Services};
