use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::ledger::{ExecContext, TokenPort};
use crate::state::{PoolStatus, VestingLedger};

impl VestingLedger {
    /// Pulls `amount` from the operator into the vault and credits the pool.
    /// Returns the new `total_deposited`.
    pub fn deposit<P: TokenPort>(
        &mut self,
        ctx: &ExecContext,
        amount: u64,
        port: &mut P,
    ) -> Result<u64> {
        self.require_operator(ctx)?;
        require!(amount > 0, VestingError::InvalidAmount);

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;

        port.transfer_from(&ctx.caller, amount)
            .map_err(|_| error!(VestingError::TransferFailed))?;

        self.total_deposited = total_deposited;
        Ok(total_deposited)
    }

    pub fn unallocated(&self) -> u64 {
        self.total_deposited.saturating_sub(self.total_allocated)
    }

    pub fn pool_balance(&self) -> u64 {
        self.total_deposited.saturating_sub(self.total_claimed)
    }

    pub fn pool_status(&self) -> PoolStatus {
        PoolStatus {
            total_deposited: self.total_deposited,
            total_allocated: self.total_allocated,
            total_claimed: self.total_claimed,
            unallocated: self.unallocated(),
            pool_balance: self.pool_balance(),
        }
    }

    pub fn token(&self) -> Pubkey {
        self.mint
    }

    pub(crate) fn require_operator(&self, ctx: &ExecContext) -> Result<()> {
        require_keys_eq!(ctx.caller, self.admin, VestingError::Unauthorized);
        Ok(())
    }
}
