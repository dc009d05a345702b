use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::{PoolStatus, VestingLedger, VestingSchedule};

// Read-only views; values are returned through Anchor return data.

pub fn get_vesting_schedule_by_id(ctx: Context<ReadLedger>, id: u64) -> Result<VestingSchedule> {
    Ok(*ctx.accounts.ledger.schedule_by_id(id)?)
}

pub fn get_vesting_schedule_by_address(
    ctx: Context<ReadLedger>,
    recipient: Pubkey,
) -> Result<VestingSchedule> {
    Ok(*ctx.accounts.ledger.schedule_by_address(&recipient)?)
}

pub fn get_vesting_account_by_id(ctx: Context<ReadLedger>, id: u64) -> Result<Pubkey> {
    ctx.accounts.ledger.account_by_id(id)
}

pub fn get_vesting_accounts_count(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.accounts_count())
}

pub fn get_claimable(ctx: Context<ReadLedger>, recipient: Pubkey) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.ledger.claimable_of(&recipient, now)
}

pub fn get_token(ctx: Context<ReadLedger>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.token())
}

pub fn get_pool_status(ctx: Context<ReadLedger>) -> Result<PoolStatus> {
    Ok(ctx.accounts.ledger.pool_status())
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Box<Account<'info, VestingLedger>>,
}
