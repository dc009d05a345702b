use anchor_lang::prelude::*;

use crate::constants::{MAX_BATCH_SIZE, MAX_SCHEDULES};
use crate::error::VestingError;
use crate::ledger::{ExecContext, ScheduleBatch};
use crate::state::{RecipientSlot, VestingLedger, VestingSchedule};
use crate::utils::{accrual, digest};

/// Result of a committed `create_schedules` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    pub first_id: u64,
    pub count: u64,
    pub batch_allocation: u64,
    pub batch_digest: [u8; 32],
    pub registry_digest: [u8; 32],
}

impl VestingLedger {
    /// Registers a batch of schedules, all or nothing.
    ///
    /// Every entry is checked and staged against the state as of the call;
    /// the ledger is only touched once the whole batch, including the pool
    /// check, has passed.
    pub fn create_schedules(
        &mut self,
        ctx: &ExecContext,
        batch: &ScheduleBatch,
    ) -> Result<BatchOutcome> {
        self.require_operator(ctx)?;

        let entries = batch.entries();
        require!(
            !entries.is_empty() && entries.len() <= MAX_BATCH_SIZE,
            VestingError::InvalidBatchSize
        );
        require!(
            self.schedules.len() + entries.len() <= MAX_SCHEDULES,
            VestingError::LedgerFull
        );

        let mut staged: Vec<VestingSchedule> = Vec::with_capacity(entries.len());
        let mut batch_allocation: u64 = 0;
        let mut next_id = self.next_id;

        for (i, params) in entries.iter().enumerate() {
            params.validate()?;

            // Reject duplicates vs existing index.
            require!(
                self.index_position(&params.recipient).is_err(),
                VestingError::DuplicateRecipient
            );
            // Reject duplicates within the batch itself.
            require!(
                !entries[..i].iter().any(|p| p.recipient == params.recipient),
                VestingError::DuplicateRecipient
            );

            let schedule = VestingSchedule {
                id: next_id,
                recipient: params.recipient,
                allocated_amount: params.allocated_amount,
                start_time: ctx
                    .now
                    .checked_add(params.start_delay)
                    .ok_or(VestingError::MathOverflow)?,
                cliff_duration: params.cliff_duration,
                vesting_period: params.vesting_period,
                claimed_amount: 0,
            };
            // The end of the schedule must be representable.
            accrual::vesting_end(&schedule)?;

            batch_allocation = batch_allocation
                .checked_add(params.allocated_amount)
                .ok_or(VestingError::InsufficientPool)?;
            next_id = next_id.checked_add(1).ok_or(VestingError::MathOverflow)?;
            staged.push(schedule);
        }

        // Allocation sum must stay within deposits.
        let total_allocated = self
            .total_allocated
            .checked_add(batch_allocation)
            .ok_or(VestingError::InsufficientPool)?;
        require!(
            total_allocated <= self.total_deposited,
            VestingError::InsufficientPool
        );

        let batch_digest = digest::batch_digest(&staged);
        let registry_digest = digest::chain_digest(&self.registry_digest, &batch_digest);
        let first_id = self.next_id;
        let count = staged.len() as u64;

        for schedule in staged {
            self.index_insert(schedule.recipient, schedule.id);
            self.schedules.push(schedule);
        }
        self.next_id = next_id;
        self.total_allocated = total_allocated;
        self.registry_digest = registry_digest;

        Ok(BatchOutcome {
            first_id,
            count,
            batch_allocation,
            batch_digest,
            registry_digest,
        })
    }

    /// Column-wise registration as received by the `create_schedules`
    /// instruction. Durations are in `time_unit`s. Only the operator gets
    /// past the first check, whatever the shape of the columns.
    pub fn create_schedules_from_columns(
        &mut self,
        ctx: &ExecContext,
        recipients: &[Pubkey],
        cliff_durations: &[u64],
        vesting_periods: &[u64],
        start_delays: &[u64],
        allocated_amounts: &[u64],
    ) -> Result<BatchOutcome> {
        self.require_operator(ctx)?;
        let batch = ScheduleBatch::from_columns(
            recipients,
            cliff_durations,
            vesting_periods,
            start_delays,
            allocated_amounts,
            self.time_unit,
        )?;
        self.create_schedules(ctx, &batch)
    }

    pub fn schedule_by_id(&self, id: u64) -> Result<&VestingSchedule> {
        let pos = self.position_of_id(id).ok_or(VestingError::NotFound)?;
        Ok(&self.schedules[pos])
    }

    pub fn schedule_by_address(&self, recipient: &Pubkey) -> Result<&VestingSchedule> {
        let id = self.schedule_id_of(recipient)?;
        self.schedule_by_id(id)
    }

    pub fn account_by_id(&self, id: u64) -> Result<Pubkey> {
        Ok(self.schedule_by_id(id)?.recipient)
    }

    pub fn accounts_count(&self) -> u64 {
        self.next_id.saturating_sub(1)
    }

    pub fn schedule_id_of(&self, recipient: &Pubkey) -> Result<u64> {
        let pos = self
            .index_position(recipient)
            .map_err(|_| VestingError::NotFound)?;
        Ok(self.recipient_index[pos].schedule_id)
    }

    /// Claimable amount for `recipient` at `now`; 0 is a valid answer.
    pub fn claimable_of(&self, recipient: &Pubkey, now: i64) -> Result<u64> {
        let schedule = self.schedule_by_address(recipient)?;
        Ok(accrual::claimable_amount(schedule, now)?)
    }

    pub(crate) fn position_of_id(&self, id: u64) -> Option<usize> {
        let pos = usize::try_from(id.checked_sub(1)?).ok()?;
        (pos < self.schedules.len()).then_some(pos)
    }

    fn index_position(&self, recipient: &Pubkey) -> std::result::Result<usize, usize> {
        self.recipient_index
            .binary_search_by(|slot| slot.recipient.cmp(recipient))
    }

    fn index_insert(&mut self, recipient: Pubkey, schedule_id: u64) {
        if let Err(pos) = self.index_position(&recipient) {
            self.recipient_index.insert(
                pos,
                RecipientSlot {
                    recipient,
                    schedule_id,
                },
            );
        }
    }
}
