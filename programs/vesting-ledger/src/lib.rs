#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod vesting_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, time_unit: i64) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, time_unit)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn create_schedules(
        ctx: Context<CreateSchedules>,
        recipients: Vec<Pubkey>,
        cliff_durations: Vec<u64>,
        vesting_periods: Vec<u64>,
        start_delays: Vec<u64>,
        allocated_amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::create_schedules::create_schedules(
            ctx,
            recipients,
            cliff_durations,
            vesting_periods,
            start_delays,
            allocated_amounts,
        )
    }

    pub fn claim_vested_tokens(ctx: Context<ClaimVestedTokens>) -> Result<()> {
        instructions::claim_vested_tokens::claim_vested_tokens(ctx, None)
    }

    pub fn claim_vested_tokens_to(
        ctx: Context<ClaimVestedTokens>,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::claim_vested_tokens::claim_vested_tokens(ctx, Some(destination))
    }

    pub fn get_vesting_schedule_by_id(
        ctx: Context<ReadLedger>,
        id: u64,
    ) -> Result<VestingSchedule> {
        instructions::queries::get_vesting_schedule_by_id(ctx, id)
    }

    pub fn get_vesting_schedule_by_address(
        ctx: Context<ReadLedger>,
        recipient: Pubkey,
    ) -> Result<VestingSchedule> {
        instructions::queries::get_vesting_schedule_by_address(ctx, recipient)
    }

    pub fn get_vesting_account_by_id(ctx: Context<ReadLedger>, id: u64) -> Result<Pubkey> {
        instructions::queries::get_vesting_account_by_id(ctx, id)
    }

    pub fn get_vesting_accounts_count(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::queries::get_vesting_accounts_count(ctx)
    }

    pub fn get_claimable(ctx: Context<ReadLedger>, recipient: Pubkey) -> Result<u64> {
        instructions::queries::get_claimable(ctx, recipient)
    }

    pub fn get_token(ctx: Context<ReadLedger>) -> Result<Pubkey> {
        instructions::queries::get_token(ctx)
    }

    pub fn get_pool_status(ctx: Context<ReadLedger>) -> Result<PoolStatus> {
        instructions::queries::get_pool_status(ctx)
    }
}
