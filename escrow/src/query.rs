//! Query handlers for the custody escrow contract.

use common::ownership::load_ownership;
use common::{
    limiter, query_fee, CalculateFeeResponse, IsLimitedResponse, LimitResponse,
    OwnershipResponse, UsageResponse,
};
use cosmwasm_std::{Binary, Deps, Env, StdResult, Uint128};

use crate::msg::{ConfigResponse, CustodyBalanceResponse, SimulateDepositResponse};
use crate::state::{
    DepositRecord, ReleaseRecord, Stats, CONFIG, CUSTODY_BALANCE, DEPOSITS, RELEASED_TAGS,
    RELEASES, STATS,
};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    Ok(load_ownership(deps.storage)?.into())
}

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        custody: config.custody,
        payment_denom: config.payment_denom,
        fee_policy: config.fee_policy,
        limiter_enabled: config.limiter_enabled,
        limiter_period_seconds: limiter::period(deps.storage)?,
        unique_tags: config.unique_tags,
        excess_payment: config.excess_payment,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

/// Tracked balance next to what the ledger actually reports for the escrow.
pub fn query_custody_balance(deps: Deps, env: Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let strategy = config.custody.strategy();
    Ok(CustodyBalanceResponse {
        kind: strategy.kind().to_string(),
        tracked: CUSTODY_BALANCE.load(deps.storage)?,
        ledger: strategy.ledger_balance(&deps.querier, &env)?,
    })
}

// ============================================================================
// Fee Queries
// ============================================================================

pub fn query_calculate_fee(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee = query_fee(&deps.querier, &config.fee_policy, amount)?;
    Ok(CalculateFeeResponse { fee })
}

/// Preview what a deposit of `amount` needs attached and whether it would pass
/// the pause gate and the limiter.
pub fn query_simulate_deposit(
    deps: Deps,
    env: Env,
    amount: Uint128,
    depositor: Option<String>,
) -> StdResult<SimulateDepositResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ownership = load_ownership(deps.storage)?;
    let strategy = config.custody.strategy();

    let fee = query_fee(&deps.querier, &config.fee_policy, amount)?;
    let exact_payment = strategy.amount_attached();
    let required_payment = if exact_payment {
        amount.checked_add(fee)?
    } else {
        fee
    };

    let limited = match depositor {
        Some(depositor) if config.limiter_enabled => {
            let depositor = deps.api.addr_validate(&depositor)?;
            limiter::is_limited(deps.storage, env.block.time, &depositor, amount)?
        }
        _ => false,
    };

    Ok(SimulateDepositResponse {
        fee,
        required_payment,
        exact_payment,
        payment_denom: config.payment_denom,
        limited,
        paused: ownership.paused || ownership.owner.is_none(),
    })
}

// ============================================================================
// Record Queries
// ============================================================================

pub fn query_deposit(deps: Deps, nonce: u64) -> StdResult<Option<DepositRecord>> {
    DEPOSITS.may_load(deps.storage, nonce)
}

pub fn query_release(deps: Deps, nonce: u64) -> StdResult<Option<ReleaseRecord>> {
    RELEASES.may_load(deps.storage, nonce)
}

pub fn query_release_by_tag(deps: Deps, tag: Binary) -> StdResult<Option<ReleaseRecord>> {
    match RELEASED_TAGS.may_load(deps.storage, tag.as_slice())? {
        Some(nonce) => RELEASES.may_load(deps.storage, nonce),
        None => Ok(None),
    }
}

// ============================================================================
// Limiter Queries
// ============================================================================

pub fn query_usage(deps: Deps, env: Env, account: String) -> StdResult<UsageResponse> {
    let account = deps.api.addr_validate(&account)?;
    let usage = limiter::usage_of(deps.storage, env.block.time, &account)?;
    Ok(UsageResponse { account, usage })
}

pub fn query_limit(deps: Deps, account: String) -> StdResult<LimitResponse> {
    let account = deps.api.addr_validate(&account)?;
    let limit = limiter::limit_of(deps.storage, &account)?;
    Ok(LimitResponse { account, limit })
}

pub fn query_is_limited(
    deps: Deps,
    env: Env,
    account: String,
    amount: Uint128,
) -> StdResult<IsLimitedResponse> {
    let account = deps.api.addr_validate(&account)?;
    let limited = limiter::is_limited(deps.storage, env.block.time, &account, amount)?;
    Ok(IsLimitedResponse { limited })
}
