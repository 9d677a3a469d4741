//! Command implementations

pub mod base;
pub mod config;
pub mod create;
pub mod delete;
pub mod download;
pub mod history;
pub mod init;
pub mod status;
pub mod upload;

pub use base::{Command, CommandContext};
pub use config::ConfigCommand;
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use download::DownloadCommand;
pub use history::HistoryCommand;
pub use init::InitCommand;
pub use status::StatusCommand;
pub use upload::UploadCommand;
