use anchor_lang::prelude::*;

/// One recipient's allocation and its accrual clock.
///
/// Times are absolute unix seconds (`start_time`) or seconds relative to it
/// (`cliff_duration`, `vesting_period`).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// 1-based, dense, never reused.
    pub id: u64,
    pub recipient: Pubkey,
    pub allocated_amount: u64,
    pub start_time: i64,
    pub cliff_duration: i64,
    pub vesting_period: i64,
    /// Cumulative payout; only ever grows.
    pub claimed_amount: u64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        8 +  // id
        32 + // recipient
        8 +  // allocated_amount
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // vesting_period
        8;   // claimed_amount

    pub fn remaining(&self) -> u64 {
        self.allocated_amount.saturating_sub(self.claimed_amount)
    }

    pub fn is_exhausted(&self) -> bool {
        self.claimed_amount >= self.allocated_amount
    }
}

/// Secondary index entry: recipient -> schedule id.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecipientSlot {
    pub recipient: Pubkey,
    pub schedule_id: u64,
}

impl RecipientSlot {
    pub const SIZE: usize = 32 + 8;
}
