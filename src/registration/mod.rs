//! src/registration/mod.rs
mod error_chain_fmt;
mod prompt;
mod register;
mod store;

pub use error_chain_fmt::*;
pub use prompt::*;
pub use register::*;
pub use store::*;
