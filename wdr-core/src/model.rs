pub mod config;
pub mod notification;
