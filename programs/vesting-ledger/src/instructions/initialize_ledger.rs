use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, MAX_SCHEDULES, VAULT_SEED};
use crate::state::VestingLedger;

pub fn initialize_ledger(ctx: Context<InitializeLedger>, time_unit: i64) -> Result<()> {
    let ledger = VestingLedger::new(
        ctx.accounts.admin.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.vault.key(),
        ctx.bumps.ledger,
        ctx.bumps.vault,
        time_unit,
    )?;
    ctx.accounts.ledger.set_inner(ledger);

    emit!(LedgerInitialized {
        ledger: ctx.accounts.ledger.key(),
        admin: ctx.accounts.admin.key(),
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
        time_unit,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = VestingLedger::space(MAX_SCHEDULES),
        seeds = [LEDGER_SEED, mint.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub time_unit: i64,
}
