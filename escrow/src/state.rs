//! State definitions for the custody escrow contract
//!
//! Ownership and pause live in `common::ownership`; usage limits live in
//! `common::limiter`. Everything escrow-specific is defined here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::custody::Custody;

// ============================================================================
// Core Configuration
// ============================================================================

/// What happens to payment attached above the fee (non-native custody only)
#[cw_serde]
pub enum ExcessPayment {
    /// Return `payment - fee` to the depositor
    Refund,
    /// Forward the whole payment to the owner
    Retain,
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// How deposited value is held and released
    pub custody: Custody,
    /// Native denom the fee is paid in
    pub payment_denom: String,
    /// Fee policy contract consulted on every deposit
    pub fee_policy: Addr,
    /// Whether deposits are metered against per-account limits
    pub limiter_enabled: bool,
    /// Whether a release tag may only be used once
    pub unique_tags: bool,
    /// Handling of payment above the fee
    pub excess_payment: ExcessPayment,
}

/// Escrow statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_deposits: u64,
    pub total_releases: u64,
    pub total_deposited: Uint128,
    pub total_released: Uint128,
    /// Fees forwarded to the owner (in payment denom)
    pub total_fees_collected: Uint128,
}

/// Deposit record, keyed by deposit nonce
#[cw_serde]
pub struct DepositRecord {
    pub nonce: u64,
    pub account: Addr,
    pub amount: Uint128,
    pub fee: Uint128,
    /// keccak256 over (escrow, nonce, account, amount)
    pub deposit_id: [u8; 32],
    pub deposited_at: Timestamp,
}

/// Release record, keyed by release nonce
#[cw_serde]
pub struct ReleaseRecord {
    pub nonce: u64,
    pub recipient: Addr,
    pub amount: Uint128,
    pub tag: Binary,
    pub released_at: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-escrow";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Amount held by the escrow for hold-type custody (always zero for BurnMint)
pub const CUSTODY_BALANCE: Item<Uint128> = Item::new("custody_balance");

/// Next deposit nonce
pub const DEPOSIT_NONCE: Item<u64> = Item::new("deposit_nonce");

/// Next release nonce
pub const RELEASE_NONCE: Item<u64> = Item::new("release_nonce");

/// Key: deposit nonce
pub const DEPOSITS: Map<u64, DepositRecord> = Map::new("deposits");

/// Key: release nonce
pub const RELEASES: Map<u64, ReleaseRecord> = Map::new("releases");

/// Key: release tag bytes, Value: nonce of the latest release using it
pub const RELEASED_TAGS: Map<&[u8], u64> = Map::new("released_tags");
