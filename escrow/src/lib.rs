//! Custody Escrow Contract - Accounted Deposits and Owner-Authorized Releases
//!
//! The escrow takes value into custody on one side of a bridge and lets only
//! its owner release it (or mint the equivalent) to a recipient. A relay
//! watches the `deposited` / `released` events and drives the other side.
//!
//! # Deposit Flow
//! 1. Depositor calls `Deposit { amount }`, attaching the fee in the payment denom
//! 2. Fee is resolved from the configured fee policy contract
//! 3. Optional per-account usage cap is enforced
//! 4. Custody strategy takes the amount (CW20 pull, CW20 burn, or native hold)
//! 5. Fee is forwarded to the owner, `deposited` event is emitted
//!
//! # Release Flow
//! 1. Owner calls `Release { recipient, amount, tag }` (works while paused)
//! 2. Custody strategy pays out (CW20 transfer, CW20 mint, or bank send)
//! 3. `released` event is emitted with the caller-supplied tag
//!
//! # Security
//! - Single owner with irreversible renunciation (renounce also pauses)
//! - Deposits are pausable, releases are not
//! - Direct CW20 sends and stray funds are rejected
//! - All state is written before any token message is dispatched

pub mod contract;
pub mod custody;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::custody::{Custody, CustodyStrategy};
pub use crate::error::ContractError;
pub use crate::hash::{compute_deposit_id, keccak256};
