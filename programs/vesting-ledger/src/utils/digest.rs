//! Batch commitments: BLAKE3 over fixed-layout schedule records, chained per
//! committed batch so indexers can check they replayed every registration.

use bytemuck::{Pod, Zeroable};

use crate::state::VestingSchedule;

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct ScheduleRecord {
    id: u64,
    recipient: [u8; 32],
    allocated_amount: u64,
    start_time: i64,
    cliff_duration: i64,
    vesting_period: i64,
}

impl From<&VestingSchedule> for ScheduleRecord {
    fn from(s: &VestingSchedule) -> Self {
        Self {
            id: s.id,
            recipient: s.recipient.to_bytes(),
            allocated_amount: s.allocated_amount,
            start_time: s.start_time,
            cliff_duration: s.cliff_duration,
            vesting_period: s.vesting_period,
        }
    }
}

/// Order-sensitive hash of a batch. `claimed_amount` is not covered.
pub fn batch_digest(schedules: &[VestingSchedule]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for s in schedules {
        hasher.update(bytemuck::bytes_of(&ScheduleRecord::from(s)));
    }
    *hasher.finalize().as_bytes()
}

pub fn chain_digest(prev: &[u8; 32], batch: &[u8; 32]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(prev);
    hasher.update(batch);
    *hasher.finalize().as_bytes()
}
