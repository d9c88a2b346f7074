use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_storage_plus::Item;

use crate::error::ContractError;

pub const CONTRACT_NAME: &str = "crates.io:escrow-fee-policy";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// How the fee for a deposit is derived
#[cw_serde]
pub enum FeeSchedule {
    /// Same fee for every deposit, whatever the amount
    Flat { fee: Uint128 },
    /// `amount * bps / 10000`, never below `min_fee`
    BasisPoints { bps: u64, min_fee: Uint128 },
}

impl FeeSchedule {
    pub fn calculate(&self, amount: Uint128) -> Uint128 {
        match self {
            FeeSchedule::Flat { fee } => *fee,
            FeeSchedule::BasisPoints { bps, min_fee } => {
                let proportional = amount.multiply_ratio(*bps as u128, BPS_DENOMINATOR);
                proportional.max(*min_fee)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        if let FeeSchedule::BasisPoints { bps, .. } = self {
            if *bps as u128 > BPS_DENOMINATOR {
                return Err(ContractError::InvalidSchedule {
                    reason: format!("{} bps exceeds max {}", bps, BPS_DENOMINATOR),
                });
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FeeSchedule::Flat { .. } => "flat",
            FeeSchedule::BasisPoints { .. } => "basis_points",
        }
    }
}

pub const SCHEDULE: Item<FeeSchedule> = Item::new("schedule");
