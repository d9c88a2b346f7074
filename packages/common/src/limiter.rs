//! Usage Limiter Module
//!
//! Tracks a running usage total per account and rejects any increase that
//! would push it past the account's configured limit.
//!
//! ## Rules
//!
//! | Condition                 | Result           |
//! |---------------------------|------------------|
//! | `usage + delta <= limit`  | allowed          |
//! | `usage + delta > limit`   | `LimitExceeded`  |
//! | `delta == 0`              | allowed, no-op   |
//!
//! Unseen accounts have a limit and usage of zero. Setting a limit never
//! resets usage.
//!
//! By default usage is a plain cumulative counter. When a period is set, the
//! counter restarts once `period_seconds` have elapsed since the account's
//! window opened (fixed window, not sliding).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

// ============================================================================
// Data Structures
// ============================================================================

/// Usage window tracking for an account
#[cw_serde]
pub struct UsageWindow {
    /// Timestamp when the current window started
    pub window_start: Timestamp,
    /// Amount used in the current window
    pub used: Uint128,
}

#[cw_serde]
pub struct UsageResponse {
    pub account: Addr,
    pub usage: Uint128,
}

#[cw_serde]
pub struct LimitResponse {
    pub account: Addr,
    pub limit: Uint128,
}

#[cw_serde]
pub struct IsLimitedResponse {
    pub limited: bool,
}

#[derive(Error, Debug, PartialEq)]
pub enum LimiterError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Limit exceeded: limit is {limit}, usage {usage}, requested {requested}")]
    LimitExceeded {
        limit: Uint128,
        usage: Uint128,
        requested: Uint128,
    },
}

// ============================================================================
// Storage
// ============================================================================

/// Per-account limits
pub const LIMITS: Map<&Addr, Uint128> = Map::new("limiter_limits");

/// Per-account usage windows
pub const USAGE: Map<&Addr, UsageWindow> = Map::new("limiter_usage");

/// Window length in seconds (None = never resets)
pub const PERIOD: Item<Option<u64>> = Item::new("limiter_period");

// ============================================================================
// Configuration
// ============================================================================

pub fn set_period(storage: &mut dyn Storage, period_seconds: Option<u64>) -> StdResult<()> {
    if period_seconds == Some(0) {
        return Err(StdError::generic_err("Limiter period must be positive"));
    }
    PERIOD.save(storage, &period_seconds)
}

pub fn period(storage: &dyn Storage) -> StdResult<Option<u64>> {
    Ok(PERIOD.may_load(storage)?.flatten())
}

pub fn set_limit(storage: &mut dyn Storage, account: &Addr, limit: Uint128) -> StdResult<()> {
    LIMITS.save(storage, account, &limit)
}

pub fn limit_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(LIMITS.may_load(storage, account)?.unwrap_or_default())
}

// ============================================================================
// Usage
// ============================================================================

/// Load the account's window as of `now`, rolled over if the period expired.
fn current_window(storage: &dyn Storage, now: Timestamp, account: &Addr) -> StdResult<UsageWindow> {
    let fresh = UsageWindow {
        window_start: now,
        used: Uint128::zero(),
    };
    let Some(window) = USAGE.may_load(storage, account)? else {
        return Ok(fresh);
    };

    // A window end past the end of time never expires
    let expired = match period(storage)? {
        Some(period) => window
            .window_start
            .seconds()
            .checked_add(period)
            .map_or(false, |end| now.seconds() >= end),
        None => false,
    };
    Ok(if expired { fresh } else { window })
}

pub fn usage_of(storage: &dyn Storage, now: Timestamp, account: &Addr) -> StdResult<Uint128> {
    Ok(current_window(storage, now, account)?.used)
}

/// True iff `usage + amount > limit`. An overflowing sum counts as limited.
pub fn is_limited(
    storage: &dyn Storage,
    now: Timestamp,
    account: &Addr,
    amount: Uint128,
) -> StdResult<bool> {
    let limit = limit_of(storage, account)?;
    let usage = usage_of(storage, now, account)?;
    Ok(match usage.checked_add(amount) {
        Ok(total) => total > limit,
        Err(_) => true,
    })
}

/// Add `amount` to the account's usage, failing if the limit would be
/// exceeded. Returns the usage after the increase.
pub fn increase_usage(
    storage: &mut dyn Storage,
    now: Timestamp,
    account: &Addr,
    amount: Uint128,
) -> Result<Uint128, LimiterError> {
    let mut window = current_window(storage, now, account)?;
    if amount.is_zero() {
        return Ok(window.used);
    }

    let limit = limit_of(storage, account)?;
    let new_used = match window.used.checked_add(amount) {
        Ok(total) if total <= limit => total,
        _ => {
            return Err(LimiterError::LimitExceeded {
                limit,
                usage: window.used,
                requested: amount,
            })
        }
    };

    window.used = new_used;
    USAGE.save(storage, account, &window)?;
    Ok(new_used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const ONE: u128 = 1_000_000;

    fn now() -> Timestamp {
        Timestamp::from_seconds(1_700_000_000)
    }

    #[test]
    fn test_unseen_account_defaults_to_zero() {
        let storage = MockStorage::new();
        let account = Addr::unchecked("user");

        assert_eq!(limit_of(&storage, &account).unwrap(), Uint128::zero());
        assert_eq!(usage_of(&storage, now(), &account).unwrap(), Uint128::zero());
        assert!(!is_limited(&storage, now(), &account, Uint128::zero()).unwrap());
        assert!(is_limited(&storage, now(), &account, Uint128::one()).unwrap());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_limit(&mut storage, &account, Uint128::new(ONE)).unwrap();

        let half = Uint128::new(ONE / 2);
        increase_usage(&mut storage, now(), &account, half).unwrap();
        let usage = increase_usage(&mut storage, now(), &account, half).unwrap();
        assert_eq!(usage, Uint128::new(ONE));

        // 0.01 over the cap
        let err = increase_usage(&mut storage, now(), &account, Uint128::new(ONE / 100)).unwrap_err();
        assert_eq!(
            err,
            LimiterError::LimitExceeded {
                limit: Uint128::new(ONE),
                usage: Uint128::new(ONE),
                requested: Uint128::new(ONE / 100),
            }
        );

        // Zero is always allowed and changes nothing
        let usage = increase_usage(&mut storage, now(), &account, Uint128::zero()).unwrap();
        assert_eq!(usage, Uint128::new(ONE));
    }

    #[test]
    fn test_single_unit_over_limit_rejected() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_limit(&mut storage, &account, Uint128::new(100)).unwrap();

        assert!(!is_limited(&storage, now(), &account, Uint128::new(100)).unwrap());
        assert!(is_limited(&storage, now(), &account, Uint128::new(101)).unwrap());
        assert!(increase_usage(&mut storage, now(), &account, Uint128::new(101)).is_err());
        assert_eq!(usage_of(&storage, now(), &account).unwrap(), Uint128::zero());
    }

    #[test]
    fn test_set_limit_keeps_usage() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_limit(&mut storage, &account, Uint128::new(100)).unwrap();
        increase_usage(&mut storage, now(), &account, Uint128::new(80)).unwrap();

        set_limit(&mut storage, &account, Uint128::new(50)).unwrap();
        assert_eq!(usage_of(&storage, now(), &account).unwrap(), Uint128::new(80));
        assert!(is_limited(&storage, now(), &account, Uint128::one()).unwrap());
    }

    #[test]
    fn test_overflow_counts_as_limited() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_limit(&mut storage, &account, Uint128::MAX).unwrap();
        increase_usage(&mut storage, now(), &account, Uint128::MAX).unwrap();

        assert!(is_limited(&storage, now(), &account, Uint128::one()).unwrap());
        assert!(increase_usage(&mut storage, now(), &account, Uint128::one()).is_err());
    }

    #[test]
    fn test_cumulative_without_period() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_limit(&mut storage, &account, Uint128::new(100)).unwrap();
        increase_usage(&mut storage, now(), &account, Uint128::new(100)).unwrap();

        let much_later = now().plus_seconds(365 * 86_400);
        assert_eq!(usage_of(&storage, much_later, &account).unwrap(), Uint128::new(100));
        assert!(increase_usage(&mut storage, much_later, &account, Uint128::one()).is_err());
    }

    #[test]
    fn test_window_resets_after_period() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_period(&mut storage, Some(86_400)).unwrap();
        set_limit(&mut storage, &account, Uint128::new(100)).unwrap();
        increase_usage(&mut storage, now(), &account, Uint128::new(100)).unwrap();

        let almost = now().plus_seconds(86_399);
        assert!(increase_usage(&mut storage, almost, &account, Uint128::one()).is_err());

        let next_day = now().plus_seconds(86_400);
        assert_eq!(usage_of(&storage, next_day, &account).unwrap(), Uint128::zero());
        let usage = increase_usage(&mut storage, next_day, &account, Uint128::new(60)).unwrap();
        assert_eq!(usage, Uint128::new(60));
    }

    #[test]
    fn test_huge_period_never_expires() {
        let mut storage = MockStorage::new();
        let account = Addr::unchecked("user");
        set_period(&mut storage, Some(u64::MAX)).unwrap();
        set_limit(&mut storage, &account, Uint128::new(100)).unwrap();
        increase_usage(&mut storage, now(), &account, Uint128::new(10)).unwrap();

        let later = now().plus_seconds(10 * 365 * 86_400);
        assert_eq!(usage_of(&storage, later, &account).unwrap(), Uint128::new(10));
        assert!(!is_limited(&storage, later, &account, Uint128::new(90)).unwrap());
        assert!(increase_usage(&mut storage, later, &account, Uint128::new(91)).is_err());
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut storage = MockStorage::new();
        assert!(set_period(&mut storage, Some(0)).is_err());
        set_period(&mut storage, None).unwrap();
        assert_eq!(period(&storage).unwrap(), None);
    }
}
