//! Custody Escrow Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `custody` - Token movements per custody variant

use common::limiter;
use common::ownership::initialize_owner;
use common::query_fee;
use cosmwasm_std::{
    entry_point, to_json_binary, Api, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::custody::Custody;
use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_pause, execute_receive, execute_release,
    execute_renounce_ownership, execute_set_excess_payment, execute_set_fee_policy,
    execute_set_limit, execute_set_limiter_enabled, execute_set_limiter_period,
    execute_set_tag_policy, execute_transfer_ownership, execute_unpause,
};
use crate::msg::{CustodyMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_calculate_fee, query_config, query_custody_balance, query_deposit, query_is_limited,
    query_limit, query_ownership, query_release, query_release_by_tag, query_simulate_deposit,
    query_stats, query_usage,
};
use crate::state::{
    Config, ExcessPayment, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CUSTODY_BALANCE,
    DEPOSIT_NONCE, RELEASE_NONCE, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let custody = validate_custody(deps.api, msg.custody)?;
    let payment_denom = resolve_payment_denom(&custody, msg.payment_denom)?;

    if msg.limiter_period_seconds == Some(0) {
        return Err(ContractError::InvalidConfig {
            reason: "Limiter period must be positive".to_string(),
        });
    }

    // The fee policy must answer before deposits depend on it
    let fee_policy = deps.api.addr_validate(&msg.fee_policy)?;
    query_fee(&deps.querier, &fee_policy, Uint128::zero())?;

    let config = Config {
        custody,
        payment_denom,
        fee_policy,
        limiter_enabled: msg.limiter_enabled,
        unique_tags: msg.unique_tags,
        excess_payment: msg.excess_payment.unwrap_or(ExcessPayment::Refund),
    };
    CONFIG.save(deps.storage, &config)?;

    initialize_owner(deps.storage, owner.clone())?;
    limiter::set_period(deps.storage, msg.limiter_period_seconds)?;

    STATS.save(deps.storage, &Stats::default())?;
    CUSTODY_BALANCE.save(deps.storage, &Uint128::zero())?;
    DEPOSIT_NONCE.save(deps.storage, &0u64)?;
    RELEASE_NONCE.save(deps.storage, &0u64)?;

    let kind = config.custody.strategy().kind();

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("custody", kind)
        .add_attribute("payment_denom", config.payment_denom)
        .add_attribute("fee_policy", config.fee_policy))
}

fn validate_custody(api: &dyn Api, custody: CustodyMsg) -> Result<Custody, ContractError> {
    match custody {
        CustodyMsg::HoldCustody { token } => Ok(Custody::HoldCustody {
            token: api.addr_validate(&token)?,
        }),
        CustodyMsg::BurnMint { token } => Ok(Custody::BurnMint {
            token: api.addr_validate(&token)?,
        }),
        CustodyMsg::NativeHold { denom } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidConfig {
                    reason: "Native custody denom must not be empty".to_string(),
                });
            }
            Ok(Custody::NativeHold { denom })
        }
    }
}

/// NativeHold takes amount and fee in one coin, so the payment denom is the
/// custody denom. CW20 custody needs an explicit native denom for the fee.
fn resolve_payment_denom(
    custody: &Custody,
    payment_denom: Option<String>,
) -> Result<String, ContractError> {
    match (custody, payment_denom) {
        (Custody::NativeHold { denom }, None) => Ok(denom.clone()),
        (Custody::NativeHold { denom }, Some(payment)) => {
            if &payment != denom {
                return Err(ContractError::InvalidConfig {
                    reason: format!(
                        "Payment denom {} must match native custody denom {}",
                        payment, denom
                    ),
                });
            }
            Ok(payment)
        }
        (_, Some(payment)) if !payment.is_empty() => Ok(payment),
        _ => Err(ContractError::InvalidConfig {
            reason: "CW20 custody requires a payment denom".to_string(),
        }),
    }
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Only Deposit carries value
    if !matches!(msg, ExecuteMsg::Deposit { .. }) && !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    match msg {
        // Custody
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, amount),
        ExecuteMsg::Release {
            recipient,
            amount,
            tag,
        } => execute_release(deps, env, info, recipient, amount, tag),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(info, cw20_msg),

        // Configuration
        ExecuteMsg::SetFeePolicy { fee_policy } => execute_set_fee_policy(deps, info, fee_policy),
        ExecuteMsg::SetLimit { account, limit } => execute_set_limit(deps, info, account, limit),
        ExecuteMsg::SetLimiterEnabled { enabled } => {
            execute_set_limiter_enabled(deps, info, enabled)
        }
        ExecuteMsg::SetLimiterPeriod { period_seconds } => {
            execute_set_limiter_period(deps, info, period_seconds)
        }
        ExecuteMsg::SetTagPolicy { unique_tags } => execute_set_tag_policy(deps, info, unique_tags),
        ExecuteMsg::SetExcessPayment { excess_payment } => {
            execute_set_excess_payment(deps, info, excess_payment)
        }

        // Ownership
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::RenounceOwnership {} => execute_renounce_ownership(deps, env, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CalculateFee { amount } => to_json_binary(&query_calculate_fee(deps, amount)?),
        QueryMsg::SimulateDeposit { amount, depositor } => {
            to_json_binary(&query_simulate_deposit(deps, env, amount, depositor)?)
        }
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, env)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Records
        QueryMsg::Deposit { nonce } => to_json_binary(&query_deposit(deps, nonce)?),
        QueryMsg::Release { nonce } => to_json_binary(&query_release(deps, nonce)?),
        QueryMsg::ReleaseByTag { tag } => to_json_binary(&query_release_by_tag(deps, tag)?),

        // Limiter
        QueryMsg::Usage { account } => to_json_binary(&query_usage(deps, env, account)?),
        QueryMsg::Limit { account } => to_json_binary(&query_limit(deps, account)?),
        QueryMsg::IsLimited { account, amount } => {
            to_json_binary(&query_is_limited(deps, env, account, amount)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
