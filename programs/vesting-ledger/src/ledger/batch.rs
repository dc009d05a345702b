use anchor_lang::prelude::*;

use crate::error::VestingError;

/// One schedule to register. Durations are in seconds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleParams {
    pub recipient: Pubkey,
    pub allocated_amount: u64,
    pub cliff_duration: i64,
    pub vesting_period: i64,
    pub start_delay: i64,
}

impl ScheduleParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.recipient != Pubkey::default(), VestingError::InvalidPubkey);
        require!(self.allocated_amount > 0, VestingError::InvalidSchedule);
        require!(self.cliff_duration > 0, VestingError::InvalidSchedule);
        require!(
            self.vesting_period >= self.cliff_duration,
            VestingError::InvalidSchedule
        );
        require!(self.start_delay >= 0, VestingError::InvalidSchedule);
        Ok(())
    }
}

/// Ordered batch of schedules, validated and committed as a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleBatch {
    entries: Vec<ScheduleParams>,
}

impl ScheduleBatch {
    pub fn new(entries: Vec<ScheduleParams>) -> Self {
        Self { entries }
    }

    /// Zips the column-wise instruction input into records, converting
    /// durations from `time_unit`s to seconds.
    pub fn from_columns(
        recipients: &[Pubkey],
        cliff_durations: &[u64],
        vesting_periods: &[u64],
        start_delays: &[u64],
        allocated_amounts: &[u64],
        time_unit: i64,
    ) -> Result<Self> {
        let n = recipients.len();
        require!(
            cliff_durations.len() == n
                && vesting_periods.len() == n
                && start_delays.len() == n
                && allocated_amounts.len() == n,
            VestingError::ArityMismatch
        );
        require!(time_unit > 0, VestingError::InvalidConfig);

        let mut entries = Vec::with_capacity(n);
        for i in 0..n {
            entries.push(ScheduleParams {
                recipient: recipients[i],
                allocated_amount: allocated_amounts[i],
                cliff_duration: to_seconds(cliff_durations[i], time_unit)?,
                vesting_period: to_seconds(vesting_periods[i], time_unit)?,
                start_delay: to_seconds(start_delays[i], time_unit)?,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleParams] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_seconds(units: u64, time_unit: i64) -> Result<i64> {
    let units = i64::try_from(units).map_err(|_| VestingError::MathOverflow)?;
    Ok(units
        .checked_mul(time_unit)
        .ok_or(VestingError::MathOverflow)?)
}
