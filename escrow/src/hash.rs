//! Deposit identifier computation
//!
//! Every deposit gets a 32-byte identifier a relay can use to refer to it on
//! the other side without trusting attribute formatting.
//!
//! # Byte Layout
//! - escrow address bytes (variable)
//! - nonce (u64, big-endian, 8 bytes)
//! - depositor address bytes (variable)
//! - amount (u128, big-endian, 16 bytes)
//!
//! Both addresses are length-prefixed (u32 big-endian) so that no two
//! distinct inputs share an encoding.

use cosmwasm_std::{Addr, Uint128};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the identifier of a deposit.
pub fn compute_deposit_id(escrow: &Addr, nonce: u64, account: &Addr, amount: Uint128) -> [u8; 32] {
    let escrow = escrow.as_bytes();
    let account = account.as_bytes();

    let mut data = Vec::with_capacity(4 + escrow.len() + 8 + 4 + account.len() + 16);
    data.extend_from_slice(&(escrow.len() as u32).to_be_bytes());
    data.extend_from_slice(escrow);
    data.extend_from_slice(&nonce.to_be_bytes());
    data.extend_from_slice(&(account.len() as u32).to_be_bytes());
    data.extend_from_slice(account);
    data.extend_from_slice(&amount.u128().to_be_bytes());

    keccak256(&data)
}

/// Convert bytes to a 0x-prefixed hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        // Well-known keccak256 of the empty string
        assert_eq!(
            bytes_to_hex(&keccak256(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_deposit_id_depends_on_every_field() {
        let escrow = Addr::unchecked("escrow");
        let user = Addr::unchecked("user");
        let base = compute_deposit_id(&escrow, 0, &user, Uint128::new(100));

        assert_eq!(base, compute_deposit_id(&escrow, 0, &user, Uint128::new(100)));
        assert_ne!(base, compute_deposit_id(&escrow, 1, &user, Uint128::new(100)));
        assert_ne!(base, compute_deposit_id(&escrow, 0, &user, Uint128::new(101)));
        assert_ne!(
            base,
            compute_deposit_id(&escrow, 0, &Addr::unchecked("other"), Uint128::new(100))
        );
        assert_ne!(
            base,
            compute_deposit_id(&Addr::unchecked("escrow2"), 0, &user, Uint128::new(100))
        );
    }

    #[test]
    fn test_length_prefix_prevents_ambiguity() {
        let a = compute_deposit_id(&Addr::unchecked("ab"), 0, &Addr::unchecked("c"), Uint128::zero());
        let b = compute_deposit_id(&Addr::unchecked("a"), 0, &Addr::unchecked("bc"), Uint128::zero());
        assert_ne!(a, b);
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0xab, 0x01]), "0xab01");
    }
}
