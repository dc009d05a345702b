//! Ledger operations over [`VestingLedger`](crate::state::VestingLedger).
//!
//! Nothing here reads the clock, the signer or token balances directly: the
//! instruction handlers pass an [`ExecContext`] and a [`TokenPort`], so the
//! same code runs on-chain and in plain unit tests.

pub mod batch;
pub mod claim;
pub mod pool;
pub mod registry;

pub use batch::*;
pub use claim::*;
pub use registry::*;

use anchor_lang::prelude::*;

/// Who is calling and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecContext {
    pub now: i64,
    pub caller: Pubkey,
}

impl ExecContext {
    pub fn new(now: i64, caller: Pubkey) -> Self {
        Self { now, caller }
    }
}

/// Token movements into and out of the ledger vault.
pub trait TokenPort {
    /// Pull `amount` from `from` into the vault.
    fn transfer_from(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Pay `amount` out of the vault to `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}
