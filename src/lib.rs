// src/lib.rs

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod schemas;

pub mod services {
    pub mod chain;
    pub mod collections;
    pub mod network;
    pub mod price_multiplier;
    pub mod price_series;
    pub mod synthetic;
}

pub mod models;
pub mod seeders;

pub use config::{DatabaseConfig, SeedConfig};
pub use error::SeedError;
