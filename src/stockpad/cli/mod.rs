mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
