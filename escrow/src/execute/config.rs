//! Configuration handlers (owner only).

use common::limiter;
use common::ownership::assert_owner;
use common::query_fee;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{ExcessPayment, CONFIG};

/// Point the escrow at a different fee policy. The new policy must answer
/// a `Calculate` query, so a typo cannot brick deposits.
pub fn execute_set_fee_policy(
    deps: DepsMut,
    info: MessageInfo,
    fee_policy: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let fee_policy = deps.api.addr_validate(&fee_policy)?;
    query_fee(&deps.querier, &fee_policy, Uint128::zero())?;

    let mut config = CONFIG.load(deps.storage)?;
    config.fee_policy = fee_policy.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_policy")
        .add_attribute("fee_policy", fee_policy))
}

pub fn execute_set_limit(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    limit: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    limiter::set_limit(deps.storage, &account, limit)?;

    Ok(Response::new()
        .add_attribute("action", "set_limit")
        .add_attribute("account", account)
        .add_attribute("limit", limit))
}

pub fn execute_set_limiter_enabled(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.limiter_enabled = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_limiter_enabled")
        .add_attribute("enabled", enabled.to_string()))
}

pub fn execute_set_limiter_period(
    deps: DepsMut,
    info: MessageInfo,
    period_seconds: Option<u64>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if period_seconds == Some(0) {
        return Err(ContractError::InvalidConfig {
            reason: "Limiter period must be positive".to_string(),
        });
    }
    limiter::set_period(deps.storage, period_seconds)?;

    Ok(Response::new()
        .add_attribute("action", "set_limiter_period")
        .add_attribute(
            "period_seconds",
            period_seconds.map_or_else(|| "none".to_string(), |p| p.to_string()),
        ))
}

pub fn execute_set_tag_policy(
    deps: DepsMut,
    info: MessageInfo,
    unique_tags: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.unique_tags = unique_tags;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_tag_policy")
        .add_attribute("unique_tags", unique_tags.to_string()))
}

pub fn execute_set_excess_payment(
    deps: DepsMut,
    info: MessageInfo,
    excess_payment: ExcessPayment,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.excess_payment = excess_payment.clone();
    CONFIG.save(deps.storage, &config)?;

    let label = match excess_payment {
        ExcessPayment::Refund => "refund",
        ExcessPayment::Retain => "retain",
    };
    Ok(Response::new()
        .add_attribute("action", "set_excess_payment")
        .add_attribute("excess_payment", label))
}
