use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::instructions::token_port::SplTokenPort;
use crate::ledger::ExecContext;
use crate::state::VestingLedger;

/// Pays the signer's claimable amount to `destination`, or to the signer.
pub fn claim_vested_tokens(
    ctx: Context<ClaimVestedTokens>,
    destination: Option<Pubkey>,
) -> Result<()> {
    let exec = ExecContext::new(Clock::get()?.unix_timestamp, ctx.accounts.recipient.key());

    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let mint = ctx.accounts.ledger.mint;
    let bump = [ctx.accounts.ledger.bump];
    let seeds: &[&[u8]] = &[LEDGER_SEED, mint.as_ref(), &bump];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut port = SplTokenPort::outbound(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ledger_ai,
        signer_seeds,
        ctx.accounts.destination_token_account.to_account_info(),
        ctx.accounts.destination_token_account.owner,
    );

    let ledger = &mut ctx.accounts.ledger;
    let receipt = ledger.claim(&exec, destination, &mut port)?;

    emit!(TokensClaimed {
        schedule_id: receipt.schedule_id,
        recipient: receipt.recipient,
        destination: receipt.destination,
        amount: receipt.amount,
        claimed_total: receipt.claimed_total,
        time: exec.now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimVestedTokens<'info> {
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
        constraint = destination_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub recipient: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub schedule_id: u64,
    pub recipient: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub time: i64,
}
