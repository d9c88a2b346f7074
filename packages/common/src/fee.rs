//! Fee policy interface.
//!
//! Any contract that answers `FeePolicyQueryMsg::Calculate` can be plugged
//! into an escrow as its fee policy. The escrow stores only the policy
//! address and resolves the fee with a smart query on every deposit.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};

/// Query surface a fee policy contract must expose
#[cw_serde]
#[derive(QueryResponses)]
pub enum FeePolicyQueryMsg {
    /// Fee owed on a deposit of `amount`
    #[returns(CalculateFeeResponse)]
    Calculate { amount: Uint128 },
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub fee: Uint128,
}

/// Ask the policy at `policy` for the fee owed on `amount`.
pub fn query_fee(querier: &QuerierWrapper, policy: &Addr, amount: Uint128) -> StdResult<Uint128> {
    let response: CalculateFeeResponse =
        querier.query_wasm_smart(policy, &FeePolicyQueryMsg::Calculate { amount })?;
    Ok(response.fee)
}
