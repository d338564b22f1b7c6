pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod models;
pub mod text_interface;

#[cfg(test)]
mod test;
