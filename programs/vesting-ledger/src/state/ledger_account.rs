use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{RecipientSlot, VestingSchedule};

/// Ledger PDA: schedules, recipient index and pool accounting for one mint.
#[account]
pub struct VestingLedger {
    /// Operator authority; the only signer allowed to deposit and register.
    pub admin: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Vault token account (PDA, authority = this ledger).
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    /// Seconds per registered duration unit.
    pub time_unit: i64,
    /// Tokens pulled into the vault by the operator.
    pub total_deposited: u64,
    /// Sum of `allocated_amount` over all schedules.
    pub total_allocated: u64,
    /// Sum of `claimed_amount` over all schedules.
    pub total_claimed: u64,
    /// Id the next registered schedule receives.
    pub next_id: u64,
    /// Set between `begin_claim` and `finish_claim`/`abort_claim`.
    pub claim_in_progress: bool,
    /// BLAKE3 chain over every committed batch.
    pub registry_digest: [u8; 32],
    /// Primary store; schedule `id` lives at `id - 1`.
    pub schedules: Vec<VestingSchedule>,
    /// Sorted by recipient.
    pub recipient_index: Vec<RecipientSlot>,
}

impl VestingLedger {
    pub const FIXED_SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        1 +  // bump
        1 +  // vault_bump
        8 +  // time_unit
        8 +  // total_deposited
        8 +  // total_allocated
        8 +  // total_claimed
        8 +  // next_id
        1 +  // claim_in_progress
        32;  // registry_digest

    /// Discriminator + fixed fields + both vecs at full capacity.
    pub const fn space(max_schedules: usize) -> usize {
        8 + Self::FIXED_SIZE
            + 4 + max_schedules * VestingSchedule::SIZE
            + 4 + max_schedules * RecipientSlot::SIZE
    }

    pub fn new(
        admin: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        bump: u8,
        vault_bump: u8,
        time_unit: i64,
    ) -> Result<Self> {
        require!(time_unit > 0, VestingError::InvalidConfig);
        require!(admin != Pubkey::default(), VestingError::InvalidPubkey);
        require!(mint != Pubkey::default(), VestingError::InvalidPubkey);

        Ok(Self {
            admin,
            mint,
            vault,
            bump,
            vault_bump,
            time_unit,
            total_deposited: 0,
            total_allocated: 0,
            total_claimed: 0,
            next_id: 1,
            claim_in_progress: false,
            registry_digest: [0u8; 32],
            schedules: Vec::new(),
            recipient_index: Vec::new(),
        })
    }
}

/// Snapshot of the pool counters.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolStatus {
    pub total_deposited: u64,
    pub total_allocated: u64,
    pub total_claimed: u64,
    /// Deposited but not promised to any schedule.
    pub unallocated: u64,
    /// Deposited minus paid out.
    pub pool_balance: u64,
}
