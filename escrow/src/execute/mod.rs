//! Execute handlers for the custody escrow contract.
//!
//! - `deposit` - Deposit and the rejected CW20 receive hook
//! - `release` - Owner-authorized release
//! - `config` - Fee policy, limiter and tag policy settings
//! - `admin` - Pause, unpause, ownership transfer and renunciation

mod admin;
mod config;
mod deposit;
mod release;

pub use admin::*;
pub use config::*;
pub use deposit::*;
pub use release::*;
