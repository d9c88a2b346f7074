//! Message types for the custody escrow contract

use common::{CalculateFeeResponse, IsLimitedResponse, LimitResponse, OwnershipResponse, UsageResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::custody::Custody;
use crate::state::{DepositRecord, ExcessPayment, ReleaseRecord, Stats};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Custody configuration as supplied at instantiation (unvalidated addresses)
#[cw_serde]
pub enum CustodyMsg {
    HoldCustody { token: String },
    BurnMint { token: String },
    NativeHold { denom: String },
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (receives fees, authorizes releases)
    pub owner: String,
    /// Custody variant
    pub custody: CustodyMsg,
    /// Denom the fee is paid in. Defaults to the custody denom for NativeHold,
    /// where it must match if given; required otherwise.
    pub payment_denom: Option<String>,
    /// Fee policy contract address
    pub fee_policy: String,
    /// Meter deposits against per-account limits
    pub limiter_enabled: bool,
    /// Limiter window in seconds (None = cumulative forever)
    pub limiter_period_seconds: Option<u64>,
    /// Reject a release whose tag was already used
    pub unique_tags: bool,
    /// Handling of payment above the fee (defaults to Refund)
    pub excess_payment: Option<ExcessPayment>,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Custody
    // ========================================================================
    /// Deposit `amount` into custody.
    ///
    /// Attach the fee in the payment denom. For NativeHold attach exactly
    /// `amount + fee`. For CW20 custody grant the escrow an allowance of
    /// `amount` first.
    Deposit { amount: Uint128 },

    /// Release `amount` to `recipient`.
    ///
    /// Authorization: Owner only (works while paused)
    Release {
        recipient: String,
        amount: Uint128,
        /// Opaque correlation value (e.g. source transaction hash)
        tag: Binary,
    },

    /// CW20 receive hook. Always rejected: value only enters through Deposit.
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Configuration (Owner only)
    // ========================================================================
    /// Point the escrow at a different fee policy contract
    SetFeePolicy { fee_policy: String },
    /// Set the deposit limit for an account
    SetLimit { account: String, limit: Uint128 },
    /// Turn deposit metering on or off
    SetLimiterEnabled { enabled: bool },
    /// Change the limiter window
    SetLimiterPeriod { period_seconds: Option<u64> },
    /// Require release tags to be unique
    SetTagPolicy { unique_tags: bool },
    /// Change how overpayment is handled
    SetExcessPayment { excess_payment: ExcessPayment },

    // ========================================================================
    // Ownership (Owner only)
    // ========================================================================
    Pause {},
    Unpause {},
    TransferOwnership { new_owner: String },
    /// Clear the owner and pause permanently. NativeHold sweeps its balance
    /// to the outgoing owner first.
    RenounceOwnership {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner and pause flag
    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(ConfigResponse)]
    Config {},

    /// Fee the current policy charges on `amount`
    #[returns(CalculateFeeResponse)]
    CalculateFee { amount: Uint128 },

    /// Preview a deposit: fee, exact payment to attach, limiter outcome
    #[returns(SimulateDepositResponse)]
    SimulateDeposit {
        amount: Uint128,
        depositor: Option<String>,
    },

    /// Tracked custody balance and what the ledger reports
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},

    #[returns(Stats)]
    Stats {},

    #[returns(Option<DepositRecord>)]
    Deposit { nonce: u64 },

    #[returns(Option<ReleaseRecord>)]
    Release { nonce: u64 },

    /// Latest release that used `tag`
    #[returns(Option<ReleaseRecord>)]
    ReleaseByTag { tag: Binary },

    #[returns(UsageResponse)]
    Usage { account: String },

    #[returns(LimitResponse)]
    Limit { account: String },

    #[returns(IsLimitedResponse)]
    IsLimited { account: String, amount: Uint128 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub custody: Custody,
    pub payment_denom: String,
    pub fee_policy: Addr,
    pub limiter_enabled: bool,
    pub limiter_period_seconds: Option<u64>,
    pub unique_tags: bool,
    pub excess_payment: ExcessPayment,
}

#[cw_serde]
pub struct SimulateDepositResponse {
    pub fee: Uint128,
    /// Payment to attach in `payment_denom`
    pub required_payment: Uint128,
    /// Whether the payment must match exactly (NativeHold) or is a minimum
    pub exact_payment: bool,
    pub payment_denom: String,
    /// Whether the limiter would reject the depositor (false when no depositor given)
    pub limited: bool,
    pub paused: bool,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub kind: String,
    /// Balance accounted by the escrow
    pub tracked: Uint128,
    /// Balance reported by the ledger
    pub ledger: Uint128,
}
