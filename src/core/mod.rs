pub mod alphabet;
#[cfg(feature = "config")]
pub mod config;
