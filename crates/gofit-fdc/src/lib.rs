//! gofit-fdc: adaptador HTTP del catálogo FoodData Central.
pub mod client;
pub mod config;

pub use client::FdcClient;
pub use config::FdcConfig;
