//! Shared cw-multi-test harness for the escrow integration tests.

#![allow(dead_code)]

use anyhow::Result as AnyResult;
use common::OwnershipResponse;
use cosmwasm_std::{coins, Addr, Binary, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use escrow::msg::{CustodyBalanceResponse, CustodyMsg, ExecuteMsg, InstantiateMsg, QueryMsg};
use escrow::state::{ExcessPayment, Stats};
use fee_policy::FeeSchedule;

pub const OWNER: &str = "terra1owner";
pub const ALICE: &str = "terra1alice";
pub const BOB: &str = "terra1bob";
pub const DENOM: &str = "uluna";

/// One whole token (6 decimals)
pub const ONE: u128 = 1_000_000;
/// 0.1 token, the default flat fee
pub const FEE: u128 = 100_000;

/// Starting balance of every account, native and CW20
pub const INITIAL: u128 = 100 * ONE;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_escrow() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        escrow::contract::execute,
        escrow::contract::instantiate,
        escrow::contract::query,
    );
    Box::new(contract)
}

pub fn contract_fee_policy() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        fee_policy::contract::execute,
        fee_policy::contract::instantiate,
        fee_policy::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Setup
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    Hold,
    BurnMint,
    Native,
}

pub struct SuiteConfig {
    pub kind: Kind,
    pub fee: u128,
    pub limiter_enabled: bool,
    pub limiter_period_seconds: Option<u64>,
    pub unique_tags: bool,
    pub excess_payment: Option<ExcessPayment>,
}

impl SuiteConfig {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            fee: FEE,
            limiter_enabled: false,
            limiter_period_seconds: None,
            unique_tags: false,
            excess_payment: None,
        }
    }
}

pub struct Suite {
    pub app: App,
    pub escrow: Addr,
    pub policy: Addr,
    pub token: Option<Addr>,
    pub owner: Addr,
    pub alice: Addr,
    pub bob: Addr,
}

pub fn setup(kind: Kind) -> Suite {
    setup_with(SuiteConfig::new(kind))
}

pub fn setup_with(config: SuiteConfig) -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);
    let alice = Addr::unchecked(ALICE);
    let bob = Addr::unchecked(BOB);

    app.init_modules(|router, _, storage| {
        for account in [&owner, &alice, &bob] {
            router
                .bank
                .init_balance(storage, account, coins(INITIAL, DENOM))
                .unwrap();
        }
    });

    let policy_code = app.store_code(contract_fee_policy());
    let policy = app
        .instantiate_contract(
            policy_code,
            owner.clone(),
            &fee_policy::msg::InstantiateMsg {
                owner: owner.to_string(),
                schedule: FeeSchedule::Flat {
                    fee: Uint128::new(config.fee),
                },
            },
            &[],
            "fee-policy",
            None,
        )
        .unwrap();

    // The owner mints until the escrow takes over (BurnMint)
    let token = match config.kind {
        Kind::Native => None,
        Kind::Hold | Kind::BurnMint => {
            let cw20_code = app.store_code(contract_cw20());
            let token = app
                .instantiate_contract(
                    cw20_code,
                    owner.clone(),
                    &cw20_base::msg::InstantiateMsg {
                        name: "Custody Token".to_string(),
                        symbol: "CUST".to_string(),
                        decimals: 6,
                        initial_balances: vec![
                            Cw20Coin {
                                address: alice.to_string(),
                                amount: Uint128::new(INITIAL),
                            },
                            Cw20Coin {
                                address: bob.to_string(),
                                amount: Uint128::new(INITIAL),
                            },
                        ],
                        mint: Some(cw20::MinterResponse {
                            minter: owner.to_string(),
                            cap: None,
                        }),
                        marketing: None,
                    },
                    &[],
                    "cw20-custody",
                    None,
                )
                .unwrap();
            Some(token)
        }
    };

    let (custody, payment_denom) = match (config.kind, &token) {
        (Kind::Hold, Some(token)) => (
            CustodyMsg::HoldCustody {
                token: token.to_string(),
            },
            Some(DENOM.to_string()),
        ),
        (Kind::BurnMint, Some(token)) => (
            CustodyMsg::BurnMint {
                token: token.to_string(),
            },
            Some(DENOM.to_string()),
        ),
        _ => (
            CustodyMsg::NativeHold {
                denom: DENOM.to_string(),
            },
            None,
        ),
    };

    let escrow_code = app.store_code(contract_escrow());
    let escrow = app
        .instantiate_contract(
            escrow_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                custody,
                payment_denom,
                fee_policy: policy.to_string(),
                limiter_enabled: config.limiter_enabled,
                limiter_period_seconds: config.limiter_period_seconds,
                unique_tags: config.unique_tags,
                excess_payment: config.excess_payment,
            },
            &[],
            "custody-escrow",
            Some(owner.to_string()),
        )
        .unwrap();

    if config.kind == Kind::BurnMint {
        let token = token.clone().unwrap();
        app.execute_contract(
            owner.clone(),
            token,
            &Cw20ExecuteMsg::UpdateMinter {
                new_minter: Some(escrow.to_string()),
            },
            &[],
        )
        .unwrap();
    }

    Suite {
        app,
        escrow,
        policy,
        token,
        owner,
        alice,
        bob,
    }
}

// ============================================================================
// Actions
// ============================================================================

fn funds(amount: u128) -> Vec<Coin> {
    if amount == 0 {
        vec![]
    } else {
        coins(amount, DENOM)
    }
}

impl Suite {
    pub fn token(&self) -> Addr {
        self.token.clone().expect("suite has no cw20 token")
    }

    /// Allow the escrow to pull or burn `amount` of `sender`'s tokens.
    pub fn approve(&mut self, sender: &Addr, amount: u128) {
        let token = self.token();
        self.app
            .execute_contract(
                sender.clone(),
                token,
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.escrow.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn deposit(&mut self, sender: &Addr, amount: u128, payment: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.escrow.clone(),
            &ExecuteMsg::Deposit {
                amount: Uint128::new(amount),
            },
            &funds(payment),
        )
    }

    pub fn release(
        &mut self,
        sender: &Addr,
        recipient: &Addr,
        amount: u128,
        tag: &[u8],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.escrow.clone(),
            &ExecuteMsg::Release {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
                tag: Binary::from(tag),
            },
            &[],
        )
    }

    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.escrow.clone(), msg, &[])
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn native_balance(&self, addr: &Addr) -> u128 {
        self.app.wrap().query_balance(addr, DENOM).unwrap().amount.u128()
    }

    pub fn token_balance(&self, addr: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token(),
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn total_supply(&self) -> u128 {
        let res: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.token(), &Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply.u128()
    }

    pub fn ownership(&self) -> OwnershipResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.escrow, &QueryMsg::Ownership {})
            .unwrap()
    }

    pub fn stats(&self) -> Stats {
        self.app
            .wrap()
            .query_wasm_smart(&self.escrow, &QueryMsg::Stats {})
            .unwrap()
    }

    pub fn custody_balance(&self) -> CustodyBalanceResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.escrow, &QueryMsg::CustodyBalance {})
            .unwrap()
    }
}

/// Assert that a failed call reports `needle` somewhere in its error chain.
pub fn assert_err_contains(res: AnyResult<AppResponse>, needle: &str) {
    let err = res.unwrap_err();
    assert!(
        err.root_cause().to_string().contains(needle),
        "expected error containing {:?}, got {:?}",
        needle,
        err.root_cause().to_string()
    );
}
