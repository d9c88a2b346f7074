//! Deposit handler.
//!
//! Order of operations: pause gate, fee lookup, payment check, limiter,
//! then all state writes, then the token messages. Nothing is dispatched
//! until the handler returns, and any failing message reverts the call.

use common::limiter;
use common::ownership::load_ownership;
use common::query_fee;
use cosmwasm_std::{
    coins, BankMsg, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, StdError,
    Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::hash::{bytes_to_hex, compute_deposit_id};
use crate::state::{
    DepositRecord, ExcessPayment, CONFIG, CUSTODY_BALANCE, DEPOSITS, DEPOSIT_NONCE, STATS,
};

/// Deposit `amount` into custody, paying the policy fee to the owner.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ownership = load_ownership(deps.storage)?;
    if ownership.paused {
        return Err(ContractError::NotActive);
    }
    let owner = ownership.owner.ok_or(ContractError::NotActive)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Deposit amount must be positive".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let strategy = config.custody.strategy();

    // Fee and payment
    let fee = query_fee(&deps.querier, &config.fee_policy, amount)?;
    let paid = attached_payment(&info.funds, &config.payment_denom)?;

    let excess = if strategy.amount_attached() {
        let required = amount.checked_add(fee).map_err(StdError::from)?;
        if paid != required {
            return Err(ContractError::InsufficientPayment {
                denom: config.payment_denom.clone(),
                required,
                got: paid,
            });
        }
        Uint128::zero()
    } else {
        if paid < fee {
            return Err(ContractError::InsufficientPayment {
                denom: config.payment_denom.clone(),
                required: fee,
                got: paid,
            });
        }
        paid - fee
    };

    let (to_owner, refund) = match config.excess_payment {
        ExcessPayment::Refund => (fee, excess),
        ExcessPayment::Retain => (fee + excess, Uint128::zero()),
    };

    // Usage cap
    if config.limiter_enabled {
        limiter::increase_usage(deps.storage, env.block.time, &info.sender, amount)?;
    }

    // Custody accounting
    if strategy.holds_balance() {
        CUSTODY_BALANCE.update(deps.storage, |balance| -> Result<_, ContractError> {
            Ok(balance.checked_add(amount).map_err(StdError::from)?)
        })?;
    }

    let nonce = DEPOSIT_NONCE.load(deps.storage)?;
    DEPOSIT_NONCE.save(deps.storage, &(nonce + 1))?;

    let deposit_id = compute_deposit_id(&env.contract.address, nonce, &info.sender, amount);
    DEPOSITS.save(
        deps.storage,
        nonce,
        &DepositRecord {
            nonce,
            account: info.sender.clone(),
            amount,
            fee,
            deposit_id,
            deposited_at: env.block.time,
        },
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_deposits += 1;
    stats.total_deposited = stats
        .total_deposited
        .checked_add(amount)
        .map_err(StdError::from)?;
    stats.total_fees_collected = stats
        .total_fees_collected
        .checked_add(to_owner)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    // Token movements
    let mut messages: Vec<CosmosMsg> = strategy.acquire(&env, &info.sender, amount)?;
    if !to_owner.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: owner.to_string(),
            amount: coins(to_owner.u128(), &config.payment_denom),
        }));
    }
    if !refund.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(refund.u128(), &config.payment_denom),
        }));
    }

    let event = Event::new("deposited")
        .add_attribute("account", info.sender.as_str())
        .add_attribute("amount", amount)
        .add_attribute("fee", fee)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("deposit_id", bytes_to_hex(&deposit_id));

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "deposit")
        .add_attribute("custody", strategy.kind())
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("fee", fee)
        .add_attribute("refund", refund)
        .add_attribute("nonce", nonce.to_string()))
}

/// Sum of attached coins in `denom`; any other denom is rejected.
fn attached_payment(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    let mut paid = Uint128::zero();
    for coin in funds {
        if coin.denom != denom {
            return Err(ContractError::InvalidAmount {
                reason: format!("Only {} is accepted as payment, got {}", denom, coin.denom),
            });
        }
        paid = paid.checked_add(coin.amount).map_err(StdError::from)?;
    }
    Ok(paid)
}

/// CW20 tokens sent straight to the escrow bypass fee and accounting.
pub fn execute_receive(_info: MessageInfo, _msg: Cw20ReceiveMsg) -> Result<Response, ContractError> {
    Err(ContractError::DirectTransferRejected)
}
