use common::{LimiterError, OwnershipError};
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Limit exceeded: limit is {limit}, usage {usage}, requested {requested}")]
    LimitExceeded {
        limit: Uint128,
        usage: Uint128,
        requested: Uint128,
    },

    #[error("This contract does not accept funds")]
    UnexpectedFunds,
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
