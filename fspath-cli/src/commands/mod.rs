//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print a path in canonical form
//! - `get`: Print the ancestor path through a component
//! - `set`: Replace components
//! - `delete`: Delete components
//! - `join`: Append segments
//! - `type`: Classify an entry
//! - `real`: Resolve symbolic links
//! - `link`: Create symbolic or hard links
//! - `ls`: List a directory
//! - `stat`: Show entry metadata
//! - `access`: Check owner permissions
//! - `chmod`: Set owner permissions
//! - `mkdir`, `touch`, `rm`, `cp`, `mv`: Create, remove, copy and move entries
//! - `completions`: Generate shell completion scripts

pub mod access;
pub mod chmod;
pub mod completions;
pub mod cp;
pub mod delete;
pub mod entry_type;
pub mod get;
pub mod join;
pub mod link;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod real;
pub mod rm;
pub mod set;
pub mod show;
pub mod stat;
pub mod touch;

pub use access::AccessCommand;
pub use chmod::ChmodCommand;
pub use completions::CompletionsCommand;
pub use cp::CpCommand;
pub use delete::DeleteCommand;
pub use entry_type::TypeCommand;
pub use get::GetCommand;
pub use join::JoinCommand;
pub use link::LinkCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use real::RealCommand;
pub use rm::RmCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
pub use stat::StatCommand;
pub use touch::TouchCommand;
