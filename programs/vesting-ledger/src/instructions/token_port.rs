use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::error::VestingError;
use crate::ledger::TokenPort;

/// `TokenPort` backed by SPL Token CPIs against the ledger vault.
///
/// Inbound transfers are signed by the depositor; outbound transfers are
/// signed by the ledger PDA through `signer_seeds`.
pub struct SplTokenPort<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    /// Source (deposit) or destination (claim) token account.
    counterparty: AccountInfo<'info>,
    /// Wallet owning `counterparty`.
    counterparty_owner: Pubkey,
    /// Depositor signature for inbound transfers.
    depositor: Option<AccountInfo<'info>>,
    /// Ledger PDA and its seeds for outbound transfers.
    vault_authority: Option<(AccountInfo<'info>, &'a [&'a [&'a [u8]]])>,
}

impl<'a, 'info> SplTokenPort<'a, 'info> {
    pub fn inbound(
        token_program: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        source: AccountInfo<'info>,
        source_owner: Pubkey,
        depositor: AccountInfo<'info>,
    ) -> Self {
        Self {
            token_program,
            vault,
            counterparty: source,
            counterparty_owner: source_owner,
            depositor: Some(depositor),
            vault_authority: None,
        }
    }

    pub fn outbound(
        token_program: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        ledger: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
        destination: AccountInfo<'info>,
        destination_owner: Pubkey,
    ) -> Self {
        Self {
            token_program,
            vault,
            counterparty: destination,
            counterparty_owner: destination_owner,
            depositor: None,
            vault_authority: Some((ledger, signer_seeds)),
        }
    }
}

/// The token account on the far side of the transfer must belong to the
/// wallet the ledger decided to debit or pay.
fn check_counterparty(owner: &Pubkey, wallet: &Pubkey) -> Result<()> {
    require_keys_eq!(*wallet, *owner, VestingError::InvalidTokenAccount);
    Ok(())
}

impl TokenPort for SplTokenPort<'_, '_> {
    fn transfer_from(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        check_counterparty(&self.counterparty_owner, from)?;
        let depositor = self
            .depositor
            .clone()
            .ok_or(VestingError::TransferFailed)?;

        token::transfer(
            CpiContext::new(
                self.token_program.clone(),
                Transfer {
                    from: self.counterparty.clone(),
                    to: self.vault.clone(),
                    authority: depositor,
                },
            ),
            amount,
        )
        .map_err(|e| {
            msg!("deposit transfer of {} failed: {:?}", amount, e);
            e
        })
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        check_counterparty(&self.counterparty_owner, to)?;
        let (authority, signer_seeds) = self
            .vault_authority
            .clone()
            .ok_or(VestingError::TransferFailed)?;

        // CPI transfer from vault to destination, signed by the ledger PDA.
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.counterparty.clone(),
                    authority,
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("payout of {} to {} failed: {:?}", amount, to, e);
            e
        })
    }
}
