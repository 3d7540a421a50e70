pub mod config;
pub mod health;
pub mod show;
pub mod slug;
