//! Usage Limiter Contract
//!
//! Standalone deployment of the shared usage limiter. The owner assigns a
//! cap per account; an account meters itself by calling `IncreaseUsage`,
//! which fails once its running total would pass the cap.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
