//! CLI commands for navroute

pub mod chats;
pub mod config;
pub mod dispatch;
pub mod route;
