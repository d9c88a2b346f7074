use common::limiter::{self, IsLimitedResponse, LimitResponse, UsageResponse};
use common::ownership::{
    assert_owner, initialize_owner, load_ownership, renounce_ownership, transfer_ownership,
};
use common::OwnershipResponse;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, PeriodResponse, QueryMsg};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    initialize_owner(deps.storage, owner.clone())?;
    limiter::set_period(deps.storage, msg.period_seconds)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("period_seconds", format_period(msg.period_seconds)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    match msg {
        ExecuteMsg::SetLimit { account, limit } => execute_set_limit(deps, info, account, limit),
        ExecuteMsg::IncreaseUsage { amount } => execute_increase_usage(deps, env, info, amount),
        ExecuteMsg::SetPeriod { period_seconds } => {
            assert_owner(deps.storage, &info.sender)?;
            limiter::set_period(deps.storage, period_seconds)?;
            Ok(Response::new()
                .add_attribute("action", "set_period")
                .add_attribute("period_seconds", format_period(period_seconds)))
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            let new_owner = deps.api.addr_validate(&new_owner)?;
            transfer_ownership(deps.storage, &info.sender, new_owner.clone())?;
            Ok(Response::new()
                .add_attribute("action", "transfer_ownership")
                .add_attribute("new_owner", new_owner))
        }
        ExecuteMsg::RenounceOwnership {} => {
            let previous = renounce_ownership(deps.storage, &info.sender)?;
            Ok(Response::new()
                .add_attribute("action", "renounce_ownership")
                .add_attribute("previous_owner", previous))
        }
    }
}

fn execute_set_limit(
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

/// The metered account is always the sender.
fn execute_increase_usage(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let usage = limiter::increase_usage(deps.storage, env.block.time, &info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "increase_usage")
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("usage", usage))
}

fn format_period(period_seconds: Option<u64>) -> String {
    period_seconds.map_or_else(|| "none".to_string(), |p| p.to_string())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Usage { account } => {
            let account = deps.api.addr_validate(&account)?;
            let usage = limiter::usage_of(deps.storage, env.block.time, &account)?;
            to_json_binary(&UsageResponse { account, usage })
        }
        QueryMsg::Limit { account } => {
            let account = deps.api.addr_validate(&account)?;
            let limit = limiter::limit_of(deps.storage, &account)?;
            to_json_binary(&LimitResponse { account, limit })
        }
        QueryMsg::IsLimited { account, amount } => {
            let account = deps.api.addr_validate(&account)?;
            let limited = limiter::is_limited(deps.storage, env.block.time, &account, amount)?;
            to_json_binary(&IsLimitedResponse { limited })
        }
        QueryMsg::Period {} => to_json_binary(&PeriodResponse {
            period_seconds: limiter::period(deps.storage)?,
        }),
        QueryMsg::Ownership {} => {
            to_json_binary(&OwnershipResponse::from(load_ownership(deps.storage)?))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
