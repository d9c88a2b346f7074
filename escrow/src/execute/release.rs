//! Release handler.

use common::ownership::assert_owner;
use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128};

use crate::error::ContractError;
use crate::hash::bytes_to_hex;
use crate::state::{
    ReleaseRecord, CONFIG, CUSTODY_BALANCE, RELEASED_TAGS, RELEASES, RELEASE_NONCE, STATS,
};

/// Release `amount` to `recipient`. Owner only; works while paused.
pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    tag: Binary,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Release amount must be positive".to_string(),
        });
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let config = CONFIG.load(deps.storage)?;
    let strategy = config.custody.strategy();

    if config.unique_tags && RELEASED_TAGS.has(deps.storage, tag.as_slice()) {
        return Err(ContractError::TagAlreadyUsed {
            tag: bytes_to_hex(&tag),
        });
    }

    if strategy.holds_balance() {
        let available = CUSTODY_BALANCE.load(deps.storage)?;
        if available < amount {
            return Err(ContractError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        CUSTODY_BALANCE.save(deps.storage, &(available - amount))?;
    }

    let nonce = RELEASE_NONCE.load(deps.storage)?;
    RELEASE_NONCE.save(deps.storage, &(nonce + 1))?;

    RELEASES.save(
        deps.storage,
        nonce,
        &ReleaseRecord {
            nonce,
            recipient: recipient.clone(),
            amount,
            tag: tag.clone(),
            released_at: env.block.time,
        },
    )?;
    RELEASED_TAGS.save(deps.storage, tag.as_slice(), &nonce)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_releases += 1;
    stats.total_released = stats
        .total_released
        .checked_add(amount)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    let messages = strategy.release(&recipient, amount)?;

    let event = Event::new("released")
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount)
        .add_attribute("tag", bytes_to_hex(&tag))
        .add_attribute("nonce", nonce.to_string());

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "release")
        .add_attribute("custody", strategy.kind())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}
