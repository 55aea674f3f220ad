#[cfg(feature = "serde")]
pub mod config;
pub mod types;
