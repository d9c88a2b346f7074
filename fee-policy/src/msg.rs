use common::{CalculateFeeResponse, OwnershipResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::FeeSchedule;

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner who can change the schedule
    pub owner: String,
    /// Initial fee schedule
    pub schedule: FeeSchedule,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: switch to (or update) the flat schedule
    SetFee { fee: Uint128 },
    /// Owner: replace the schedule
    SetSchedule { schedule: FeeSchedule },
    /// Owner: hand the contract to a new owner
    TransferOwnership { new_owner: String },
    /// Owner: give up ownership permanently
    RenounceOwnership {},
}

/// The `Calculate` variant is wire-compatible with `common::FeePolicyQueryMsg`.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CalculateFeeResponse)]
    Calculate { amount: Uint128 },
    #[returns(ScheduleResponse)]
    Schedule {},
    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ScheduleResponse {
    pub schedule: FeeSchedule,
}
