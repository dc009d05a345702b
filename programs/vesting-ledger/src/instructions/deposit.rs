use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::instructions::token_port::SplTokenPort;
use crate::ledger::ExecContext;
use crate::state::VestingLedger;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let exec = ExecContext::new(Clock::get()?.unix_timestamp, ctx.accounts.admin.key());

    // Capture AccountInfos before taking the mutable ledger borrow.
    let mut port = SplTokenPort::inbound(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.to_account_info(),
    );

    let ledger = &mut ctx.accounts.ledger;
    let total_deposited = ledger.deposit(&exec, amount, &mut port)?;

    emit!(TokensDeposited {
        admin: exec.caller,
        amount,
        total_deposited,
        unallocated: ledger.unallocated(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub unallocated: u64,
}
