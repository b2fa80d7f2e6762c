//! src/lib.rs
pub mod configuration;
pub mod registration;
pub mod startup;

pub mod domain;

pub mod telemetry;
