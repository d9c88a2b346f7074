//! Error types for the custody escrow contract

use common::{LimiterError, OwnershipError};
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Escrow State Errors
    // ========================================================================

    #[error("Escrow is paused")]
    NotActive,

    #[error("Direct transfers are not accepted; use Deposit")]
    DirectTransferRejected,

    #[error("This message does not accept funds")]
    UnexpectedFunds,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient payment: required {required} {denom}, got {got}")]
    InsufficientPayment {
        denom: String,
        required: Uint128,
        got: Uint128,
    },

    #[error("Insufficient custody balance: available {available}, requested {requested}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Limit & Replay Errors
    // ========================================================================

    #[error("Limit exceeded: limit is {limit}, usage {usage}, requested {requested}")]
    LimitExceeded {
        limit: Uint128,
        usage: Uint128,
        requested: Uint128,
    },

    #[error("Release tag already used: {tag}")]
    TagAlreadyUsed { tag: String },
}

impl From<OwnershipError> for ContractError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Std(e) => ContractError::Std(e),
            OwnershipError::Unauthorized => ContractError::Unauthorized,
        }
    }
}

impl From<LimiterError> for ContractError {
    fn from(err: LimiterError) -> Self {
        match err {
            LimiterError::Std(e) => ContractError::Std(e),
            LimiterError::LimitExceeded {
                limit,
                usage,
                requested,
            } => ContractError::LimitExceeded {
                limit,
                usage,
                requested,
            },
        }
    }
}
