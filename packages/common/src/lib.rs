//! Common - Shared Types and Utilities for the Custody Escrow Contracts
//!
//! This package provides the building blocks composed by every contract in
//! the workspace:
//! - `ownership` - single owner + pause flag, with irreversible renunciation
//! - `fee` - the query interface every fee policy contract answers
//! - `limiter` - per-account cumulative usage caps

pub mod fee;
pub mod limiter;
pub mod ownership;

pub use fee::{query_fee, CalculateFeeResponse, FeePolicyQueryMsg};
pub use limiter::{IsLimitedResponse, LimitResponse, LimiterError, UsageResponse, UsageWindow};
pub use ownership::{Ownership, OwnershipError, OwnershipResponse};
