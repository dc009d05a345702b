use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::ledger::ExecContext;
use crate::state::VestingLedger;

/// Column-wise batch registration. Durations are in the ledger's `time_unit`.
pub fn create_schedules(
    ctx: Context<CreateSchedules>,
    recipients: Vec<Pubkey>,
    cliff_durations: Vec<u64>,
    vesting_periods: Vec<u64>,
    start_delays: Vec<u64>,
    allocated_amounts: Vec<u64>,
) -> Result<()> {
    let exec = ExecContext::new(Clock::get()?.unix_timestamp, ctx.accounts.admin.key());
    let ledger = &mut ctx.accounts.ledger;

    let outcome = ledger.create_schedules_from_columns(
        &exec,
        &recipients,
        &cliff_durations,
        &vesting_periods,
        &start_delays,
        &allocated_amounts,
    )?;

    emit!(SchedulesCreated {
        first_id: outcome.first_id,
        count: outcome.count,
        batch_allocation: outcome.batch_allocation,
        total_allocated: ledger.total_allocated,
        batch_digest: outcome.batch_digest,
        registry_digest: outcome.registry_digest,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedules<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Box<Account<'info, VestingLedger>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SchedulesCreated {
    pub first_id: u64,
    pub count: u64,
    pub batch_allocation: u64,
    pub total_allocated: u64,
    pub batch_digest: [u8; 32],
    pub registry_digest: [u8; 32],
}
