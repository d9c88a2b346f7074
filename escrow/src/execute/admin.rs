//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause deposits
//! - Ownership transfer
//! - Ownership renunciation (with the NativeHold sweep)

use common::ownership::{renounce_ownership, set_paused, transfer_ownership};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, CUSTODY_BALANCE};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the escrow (stops deposits; releases keep working).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps.storage, &info.sender, true)?;
    Ok(Response::new().add_attribute("action", "pause"))
}

/// Unpause the escrow (resumes deposits).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps.storage, &info.sender, false)?;
    Ok(Response::new().add_attribute("action", "unpause"))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    transfer_ownership(deps.storage, &info.sender, new_owner.clone())?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", new_owner))
}

/// Renounce ownership. The escrow is left paused with no owner, so no
/// owner-gated call can ever succeed again.
///
/// NativeHold custody sweeps the whole native balance to the outgoing owner.
/// CW20 custody leaves ledger holdings where they are.
pub fn execute_renounce_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let previous = renounce_ownership(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let strategy = config.custody.strategy();
    let messages = strategy.sweep_on_renounce(&deps.querier, &env, &previous)?;

    let mut swept = Uint128::zero();
    if !messages.is_empty() {
        swept = strategy.ledger_balance(&deps.querier, &env)?;
        CUSTODY_BALANCE.save(deps.storage, &Uint128::zero())?;
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "renounce_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("swept", swept))
}
