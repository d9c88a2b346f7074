use common::{IsLimitedResponse, LimitResponse, OwnershipResponse, UsageResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner who assigns limits
    pub owner: String,
    /// Window length in seconds; None keeps usage cumulative forever
    pub period_seconds: Option<u64>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: set the cap for an account (usage is kept)
    SetLimit { account: String, limit: Uint128 },
    /// Meter `amount` against the sender's own cap
    IncreaseUsage { amount: Uint128 },
    /// Owner: change the window length
    SetPeriod { period_seconds: Option<u64> },
    /// Owner: hand the contract to a new owner
    TransferOwnership { new_owner: String },
    /// Owner: give up ownership permanently
    RenounceOwnership {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(UsageResponse)]
    Usage { account: String },
    #[returns(LimitResponse)]
    Limit { account: String },
    #[returns(IsLimitedResponse)]
    IsLimited { account: String, amount: Uint128 },
    #[returns(PeriodResponse)]
    Period {},
    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct PeriodResponse {
    pub period_seconds: Option<u64>,
}
