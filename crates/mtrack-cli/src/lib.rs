pub mod commands;
pub mod config;
pub mod presentation;
pub mod prompt;
pub mod run;
