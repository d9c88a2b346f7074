//! Custody strategies.
//!
//! The escrow state machine is identical for every kind of custody; only the
//! token movements differ. Each variant of [`Custody`] maps to a
//! [`CustodyStrategy`] that turns "take `amount` from the payer" and "pay
//! `amount` to the recipient" into ledger messages.
//!
//! | Variant     | Acquire                    | Release          | Escrow holds |
//! |-------------|----------------------------|------------------|--------------|
//! | HoldCustody | CW20 `TransferFrom`        | CW20 `Transfer`  | yes          |
//! | BurnMint    | CW20 `BurnFrom`            | CW20 `Mint`      | never        |
//! | NativeHold  | keep attached coins        | `BankMsg::Send`  | yes          |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, CosmosMsg, Env, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Stored custody configuration
#[cw_serde]
pub enum Custody {
    /// CW20 tokens pulled into and paid out of the escrow's own balance
    HoldCustody { token: Addr },
    /// CW20 tokens burned on deposit and minted on release
    BurnMint { token: Addr },
    /// Native coins kept in the escrow's bank balance
    NativeHold { denom: String },
}

impl Custody {
    pub fn strategy(&self) -> Box<dyn CustodyStrategy + '_> {
        match self {
            Custody::HoldCustody { token } => Box::new(HoldCustody { token }),
            Custody::BurnMint { token } => Box::new(BurnMint { token }),
            Custody::NativeHold { denom } => Box::new(NativeHold { denom }),
        }
    }
}

pub trait CustodyStrategy {
    /// Label used in attributes and queries
    fn kind(&self) -> &'static str;

    /// Whether the deposited amount travels as attached funds
    fn amount_attached(&self) -> bool {
        false
    }

    /// Whether deposits accumulate in the escrow's own balance
    fn holds_balance(&self) -> bool;

    /// Messages moving `amount` from `payer` into custody.
    fn acquire(&self, env: &Env, payer: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>>;

    /// Messages paying `amount` out of custody to `recipient`.
    fn release(&self, recipient: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>>;

    /// Balance the ledger reports for the escrow.
    fn ledger_balance(&self, querier: &QuerierWrapper, env: &Env) -> StdResult<Uint128>;

    /// Messages paying custody out to the outgoing owner on renunciation.
    fn sweep_on_renounce(
        &self,
        _querier: &QuerierWrapper,
        _env: &Env,
        _to: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![])
    }
}

fn cw20_execute(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

fn cw20_balance(querier: &QuerierWrapper, token: &Addr, env: &Env) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(response.balance)
}

// ============================================================================
// HoldCustody
// ============================================================================

/// Pulls CW20 tokens from the depositor (requires a prior allowance).
pub struct HoldCustody<'a> {
    pub token: &'a Addr,
}

impl CustodyStrategy for HoldCustody<'_> {
    fn kind(&self) -> &'static str {
        "hold_custody"
    }

    fn holds_balance(&self) -> bool {
        true
    }

    fn acquire(&self, env: &Env, payer: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![cw20_execute(
            self.token,
            &Cw20ExecuteMsg::TransferFrom {
                owner: payer.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            },
        )?])
    }

    fn release(&self, recipient: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![cw20_execute(
            self.token,
            &Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            },
        )?])
    }

    fn ledger_balance(&self, querier: &QuerierWrapper, env: &Env) -> StdResult<Uint128> {
        cw20_balance(querier, self.token, env)
    }
}

// ============================================================================
// BurnMint
// ============================================================================

/// Burns from the depositor (requires allowance) and mints on release
/// (requires the escrow to be the token's minter).
pub struct BurnMint<'a> {
    pub token: &'a Addr,
}

impl CustodyStrategy for BurnMint<'_> {
    fn kind(&self) -> &'static str {
        "burn_mint"
    }

    fn holds_balance(&self) -> bool {
        false
    }

    fn acquire(&self, _env: &Env, payer: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![cw20_execute(
            self.token,
            &Cw20ExecuteMsg::BurnFrom {
                owner: payer.to_string(),
                amount,
            },
        )?])
    }

    fn release(&self, recipient: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![cw20_execute(
            self.token,
            &Cw20ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            },
        )?])
    }

    fn ledger_balance(&self, querier: &QuerierWrapper, env: &Env) -> StdResult<Uint128> {
        cw20_balance(querier, self.token, env)
    }
}

// ============================================================================
// NativeHold
// ============================================================================

/// Keeps the attached native coins. Renouncing sweeps them to the outgoing owner.
pub struct NativeHold<'a> {
    pub denom: &'a str,
}

impl CustodyStrategy for NativeHold<'_> {
    fn kind(&self) -> &'static str {
        "native_hold"
    }

    fn amount_attached(&self) -> bool {
        true
    }

    fn holds_balance(&self) -> bool {
        true
    }

    fn acquire(&self, _env: &Env, _payer: &Addr, _amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        // Coins already arrived with the message
        Ok(vec![])
    }

    fn release(&self, recipient: &Addr, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), self.denom),
        })])
    }

    fn ledger_balance(&self, querier: &QuerierWrapper, env: &Env) -> StdResult<Uint128> {
        Ok(querier
            .query_balance(&env.contract.address, self.denom)?
            .amount)
    }

    fn sweep_on_renounce(
        &self,
        querier: &QuerierWrapper,
        env: &Env,
        to: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        let balance = self.ledger_balance(querier, env)?;
        if balance.is_zero() {
            return Ok(vec![]);
        }
        self.release(to, balance)
    }
}
