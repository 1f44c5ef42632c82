pub mod auth;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod log;
pub mod report;
pub mod shell;
pub mod tracker;
