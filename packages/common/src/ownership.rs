//! Ownership and pause state shared by every contract in the workspace.
//!
//! A contract has at most one owner. Only the owner may pause, unpause,
//! transfer or renounce. Renouncing clears the owner and forces the pause
//! flag on; since no sender can equal an absent owner, the state is terminal.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

// ============================================================================
// Types
// ============================================================================

/// Owner identity and pause flag
#[cw_serde]
pub struct Ownership {
    /// Current owner (None once renounced)
    pub owner: Option<Addr>,
    /// Whether owner-pausable operations are stopped
    pub paused: bool,
}

impl Ownership {
    pub fn new(owner: Addr) -> Self {
        Self {
            owner: Some(owner),
            paused: false,
        }
    }

    pub fn is_owner(&self, sender: &Addr) -> bool {
        self.owner.as_ref() == Some(sender)
    }
}

/// Response for ownership queries
#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Option<Addr>,
    pub paused: bool,
}

impl From<Ownership> for OwnershipResponse {
    fn from(ownership: Ownership) -> Self {
        Self {
            owner: ownership.owner,
            paused: ownership.paused,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,
}

// ============================================================================
// Storage
// ============================================================================

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

// ============================================================================
// Operations
// ============================================================================

/// Store the initial owner, unpaused.
pub fn initialize_owner(storage: &mut dyn Storage, owner: Addr) -> StdResult<Ownership> {
    let ownership = Ownership::new(owner);
    OWNERSHIP.save(storage, &ownership)?;
    Ok(ownership)
}

pub fn load_ownership(storage: &dyn Storage) -> StdResult<Ownership> {
    OWNERSHIP.load(storage)
}

/// Load ownership and fail unless `sender` is the current owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Ownership, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    if !ownership.is_owner(sender) {
        return Err(OwnershipError::Unauthorized);
    }
    Ok(ownership)
}

pub fn transfer_ownership(
    storage: &mut dyn Storage,
    sender: &Addr,
    new_owner: Addr,
) -> Result<Ownership, OwnershipError> {
    let mut ownership = assert_owner(storage, sender)?;
    ownership.owner = Some(new_owner);
    OWNERSHIP.save(storage, &ownership)?;
    Ok(ownership)
}

/// Clear the owner and force the pause flag on. Returns the outgoing owner.
pub fn renounce_ownership(storage: &mut dyn Storage, sender: &Addr) -> Result<Addr, OwnershipError> {
    assert_owner(storage, sender)?;
    OWNERSHIP.save(
        storage,
        &Ownership {
            owner: None,
            paused: true,
        },
    )?;
    Ok(sender.clone())
}

pub fn set_paused(
    storage: &mut dyn Storage,
    sender: &Addr,
    paused: bool,
) -> Result<Ownership, OwnershipError> {
    let mut ownership = assert_owner(storage, sender)?;
    ownership.paused = paused;
    OWNERSHIP.save(storage, &ownership)?;
    Ok(ownership)
}
