use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::ledger::{ExecContext, TokenPort};
use crate::state::VestingLedger;
use crate::utils::accrual;

/// A claim whose accounting has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub schedule_id: u64,
    pub recipient: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    /// Schedule's `claimed_amount` after this claim.
    pub claimed_total: u64,
}

impl VestingLedger {
    /// Pays the caller's claimable amount to `destination` (the caller when
    /// `None`). Accounting is applied before the transfer and undone if the
    /// transfer fails.
    pub fn claim<P: TokenPort>(
        &mut self,
        ctx: &ExecContext,
        destination: Option<Pubkey>,
        port: &mut P,
    ) -> Result<ClaimReceipt> {
        let receipt = self.begin_claim(ctx, destination)?;
        if port.transfer(&receipt.destination, receipt.amount).is_err() {
            self.abort_claim(&receipt)?;
            return err!(VestingError::TransferFailed);
        }
        self.finish_claim();
        Ok(receipt)
    }

    /// Validates the claim, bumps `claimed_amount`/`total_claimed` and locks
    /// the claim path until `finish_claim` or `abort_claim`.
    pub fn begin_claim(
        &mut self,
        ctx: &ExecContext,
        destination: Option<Pubkey>,
    ) -> Result<ClaimReceipt> {
        require!(!self.claim_in_progress, VestingError::ReentrantClaim);

        let destination = destination.unwrap_or(ctx.caller);
        require!(destination != Pubkey::default(), VestingError::InvalidPubkey);

        // An unregistered caller has nothing to claim.
        let pos = self
            .schedule_id_of(&ctx.caller)
            .ok()
            .and_then(|id| self.position_of_id(id))
            .ok_or(VestingError::NothingToClaim)?;

        let amount = accrual::claimable_amount(&self.schedules[pos], ctx.now)?;
        require!(amount > 0, VestingError::NothingToClaim);

        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let schedule = &mut self.schedules[pos];
        let claimed_total = schedule
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(
            claimed_total <= schedule.allocated_amount,
            VestingError::MathOverflow
        );

        schedule.claimed_amount = claimed_total;
        let schedule_id = schedule.id;
        self.total_claimed = total_claimed;
        self.claim_in_progress = true;

        Ok(ClaimReceipt {
            schedule_id,
            recipient: ctx.caller,
            destination,
            amount,
            claimed_total,
        })
    }

    pub fn finish_claim(&mut self) {
        self.claim_in_progress = false;
    }

    /// Reverts the accounting applied by `begin_claim`.
    pub fn abort_claim(&mut self, receipt: &ClaimReceipt) -> Result<()> {
        let pos = self
            .position_of_id(receipt.schedule_id)
            .ok_or(VestingError::NotFound)?;
        let schedule = &mut self.schedules[pos];
        schedule.claimed_amount = schedule
            .claimed_amount
            .checked_sub(receipt.amount)
            .ok_or(VestingError::MathOverflow)?;
        self.total_claimed = self
            .total_claimed
            .checked_sub(receipt.amount)
            .ok_or(VestingError::MathOverflow)?;
        self.claim_in_progress = false;
        Ok(())
    }
}
