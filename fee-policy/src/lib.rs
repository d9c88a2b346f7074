//! Fee Policy Contract
//!
//! Answers `Calculate { amount }` for an escrow. The default schedule is a
//! flat fee that ignores the deposit amount; a basis-point schedule with a
//! floor is also available. The owner can change the schedule at any time and
//! every escrow pointing at this contract picks it up on its next deposit.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::FeeSchedule;
