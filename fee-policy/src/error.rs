use common::OwnershipError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid fee schedule: {reason}")]
    InvalidSchedule { reason: String },

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
