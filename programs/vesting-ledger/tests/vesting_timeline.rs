//! Twelve-recipient vesting timeline replayed against the ledger with an
//! in-memory token: deposit, batch registration, redirect claim, periodic
//! claims and exhaustion.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use vesting_ledger::ledger::{ExecContext, ScheduleBatch, TokenPort};
use vesting_ledger::{VestingError, VestingLedger, SECONDS_PER_DAY};

const DAY: i64 = SECONDS_PER_DAY;
const DECIMALS: u32 = 9;
const T0: i64 = 1_700_000_000;

/// Token balances keyed by wallet; the vault is tracked separately.
#[derive(Default)]
struct MockToken {
    balances: BTreeMap<Pubkey, u64>,
    vault: u64,
}

impl MockToken {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }
}

impl TokenPort for MockToken {
    fn transfer_from(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.balances.entry(*from).or_default();
        *balance = balance
            .checked_sub(amount)
            .ok_or(error!(VestingError::InvalidAmount))?;
        self.vault += amount;
        Ok(())
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        self.vault = self
            .vault
            .checked_sub(amount)
            .ok_or(error!(VestingError::InvalidAmount))?;
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

/// Whole tokens with up to 4 fractional digits, scaled to base units.
fn tokens(whole: u64, frac_e4: u64) -> u64 {
    whole * 10u64.pow(DECIMALS) + frac_e4 * 10u64.pow(DECIMALS - 4)
}

struct Timeline {
    ledger: VestingLedger,
    token: MockToken,
    admin: Pubkey,
    accounts: Vec<Pubkey>,
    allocations: Vec<u64>,
}

impl Timeline {
    fn at(&self, days: i64, caller: Pubkey) -> ExecContext {
        ExecContext::new(T0 + days * DAY, caller)
    }

    fn claim(&mut self, days: i64, i: usize) -> Result<u64> {
        let ctx = self.at(days, self.accounts[i]);
        self.ledger
            .claim(&ctx, None, &mut self.token)
            .map(|r| r.amount)
    }

    fn assert_pool_invariants(&self) {
        let allocated: u64 = self.ledger.schedules.iter().map(|s| s.allocated_amount).sum();
        let claimed: u64 = self.ledger.schedules.iter().map(|s| s.claimed_amount).sum();
        assert_eq!(allocated, self.ledger.total_allocated);
        assert_eq!(claimed, self.ledger.total_claimed);
        assert!(allocated <= self.ledger.total_deposited);
        assert_eq!(self.token.vault, self.ledger.pool_balance());
        for s in &self.ledger.schedules {
            assert!(s.claimed_amount <= s.allocated_amount);
        }
    }
}

fn setup() -> Timeline {
    let admin = Pubkey::new_unique();
    let accounts: Vec<Pubkey> = (0..13).map(|_| Pubkey::new_unique()).collect();

    // (allocation, cliff days, period days, start delay days)
    let rows: [(u64, u64, u64, u64); 12] = [
        (tokens(666_666, 6667), 30, 360, 0),
        (tokens(333_333, 3333), 30, 360, 0),
        (tokens(220_000, 0), 30, 360, 0),
        (tokens(3_333_333, 3330), 30, 360, 90),
        (tokens(10_000_000, 0), 30, 360, 90),
        (tokens(2_500_000, 0), 30, 360, 90),
        (tokens(115_000_000, 0), 30, 720, 180),
        (tokens(10_000_000, 0), 30, 720, 180),
        (tokens(5_000_000, 0), 30, 720, 180),
        (tokens(2_000_000, 0), 30, 720, 180),
        (tokens(10_000_000, 0), 30, 1080, 60),
        (tokens(10_000_000, 0), 30, 1080, 90),
    ];

    let mut ledger = VestingLedger::new(
        admin,
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        255,
        254,
        DAY,
    )
    .unwrap();
    let mut token = MockToken::default();
    token.balances.insert(admin, tokens(200_000_000, 0));

    let deposit = tokens(169_053_334, 0);
    ledger
        .deposit(&ExecContext::new(T0, admin), deposit, &mut token)
        .unwrap();
    assert_eq!(token.vault, deposit);
    assert_eq!(token.balance_of(&admin), tokens(200_000_000, 0) - deposit);

    let batch = ScheduleBatch::from_columns(
        &accounts[..12],
        &rows.iter().map(|r| r.1).collect::<Vec<_>>(),
        &rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        &rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        &rows.iter().map(|r| r.0).collect::<Vec<_>>(),
        ledger.time_unit,
    )
    .unwrap();
    let outcome = ledger
        .create_schedules(&ExecContext::new(T0, admin), &batch)
        .unwrap();
    assert_eq!(outcome.first_id, 1);
    assert_eq!(outcome.count, 12);

    Timeline {
        ledger,
        token,
        admin,
        accounts,
        allocations: rows.iter().map(|r| r.0).collect(),
    }
}

fn assert_err<T: std::fmt::Debug>(res: Result<T>, expected: VestingError) {
    assert_eq!(res.unwrap_err(), anchor_lang::error::Error::from(expected));
}

#[test]
fn registered_schedules_are_queryable_both_ways() {
    let t = setup();
    assert_eq!(t.ledger.accounts_count(), 12);
    assert_eq!(t.ledger.token(), t.ledger.mint);
    assert_ne!(t.ledger.registry_digest, [0u8; 32]);

    for i in 0..12 {
        let id = i as u64 + 1;
        let by_id = *t.ledger.schedule_by_id(id).unwrap();
        let by_address = *t.ledger.schedule_by_address(&t.accounts[i]).unwrap();
        assert_eq!(by_id, by_address);
        assert_eq!(t.ledger.account_by_id(id).unwrap(), by_id.recipient);
        assert_eq!(by_id.allocated_amount, t.allocations[i]);
        assert_eq!(by_id.cliff_duration, 30 * DAY);
        assert_eq!(by_id.claimed_amount, 0);
    }

    let s = t.ledger.schedule_by_id(7).unwrap();
    assert_eq!(s.start_time, T0 + 180 * DAY);
    assert_eq!(s.vesting_period, 720 * DAY);
    assert_eq!(t.ledger.unallocated(), tokens(0, 6670));
    t.assert_pool_invariants();
}

#[test]
fn full_timeline() {
    let mut t = setup();

    // Day 10: inside the cliff.
    assert_err(t.claim(10, 0), VestingError::NothingToClaim);
    assert_eq!(t.token.balance_of(&t.accounts[0]), 0);

    // Day 60: account 11 starts at day 90, cliff ends at day 120.
    assert_err(t.claim(60, 11), VestingError::NothingToClaim);

    // Day 90: account 0 claims a quarter of its allocation to account 12.
    let claimable = t.ledger.claimable_of(&t.accounts[0], T0 + 90 * DAY).unwrap();
    assert_eq!(claimable, t.allocations[0] * 90 / 360);
    let redirect = t.accounts[12];
    let ctx = t.at(90, t.accounts[0]);
    let receipt = t.ledger.claim(&ctx, Some(redirect), &mut t.token).unwrap();
    assert_eq!(receipt.amount, claimable);
    assert_eq!(t.token.balance_of(&redirect), claimable);
    assert_eq!(t.token.balance_of(&t.accounts[0]), 0);

    // Account 12 never had a schedule.
    assert_err(t.claim(90, 12), VestingError::NothingToClaim);
    assert_err(
        t.ledger.claimable_of(&redirect, T0 + 90 * DAY),
        VestingError::NotFound,
    );
    t.assert_pool_invariants();

    // Day 210: every schedule is past its cliff.
    for i in 0..12 {
        assert!(t.claim(210, i).unwrap() > 0, "account {i} at day 210");
    }
    t.assert_pool_invariants();

    // Day 390: first three schedules are done.
    for i in 0..12 {
        assert!(t.claim(390, i).unwrap() > 0, "account {i} at day 390");
    }
    assert_eq!(t.token.balance_of(&t.accounts[0]) + claimable, t.allocations[0]);
    for i in 0..3 {
        if i > 0 {
            assert_eq!(t.token.balance_of(&t.accounts[i]), t.allocations[i]);
        }
        assert!(t.ledger.schedule_by_id(i as u64 + 1).unwrap().is_exhausted());
    }

    // Day 750: accounts 3..=5 ended at day 450, 6..=9 end at day 900.
    for i in 3..12 {
        assert!(t.claim(750, i).unwrap() > 0, "account {i} at day 750");
    }
    for i in 0..6 {
        assert!(t.ledger.schedule_by_id(i as u64 + 1).unwrap().is_exhausted());
    }

    // Day 1110: only the long schedules are still running.
    for i in 6..12 {
        assert!(t.claim(1110, i).unwrap() > 0, "account {i} at day 1110");
    }
    for i in 0..10 {
        assert_err(t.claim(1120, i), VestingError::NothingToClaim);
    }
    t.assert_pool_invariants();

    // Day 1200: accounts 10 and 11 (ending at 1140 and 1170) collect the rest.
    for i in 10..12 {
        assert!(t.claim(1200, i).unwrap() > 0);
    }

    for day in [1200, 1500, 10_000] {
        for i in 0..13 {
            assert_err(t.claim(day, i), VestingError::NothingToClaim);
        }
    }

    for i in 1..12 {
        assert_eq!(t.token.balance_of(&t.accounts[i]), t.allocations[i]);
    }
    assert_eq!(
        t.token.balance_of(&t.accounts[0]) + t.token.balance_of(&redirect),
        t.allocations[0]
    );
    assert_eq!(t.ledger.total_claimed, t.ledger.total_allocated);
    // Only the unallocated remainder stays in the vault.
    assert_eq!(t.token.vault, t.ledger.unallocated());
    t.assert_pool_invariants();
}

#[test]
fn delayed_schedule_waits_for_delay_plus_cliff() {
    let mut t = setup();
    // Account 3: 90 day delay + 30 day cliff.
    assert_err(t.claim(60, 3), VestingError::NothingToClaim);
    assert_err(t.claim(119, 3), VestingError::NothingToClaim);
    assert_eq!(t.claim(120, 3).unwrap(), t.allocations[3] * 30 / 360);
}

#[test]
fn failed_claims_change_nothing() {
    let mut t = setup();
    let before = t.ledger.schedules.clone();
    let vault = t.token.vault;

    // Day 10 is inside every cliff; account 12 was never registered.
    for i in 0..13 {
        assert_err(t.claim(10, i), VestingError::NothingToClaim);
    }
    assert_eq!(t.ledger.schedules, before);
    assert_eq!(t.token.vault, vault);
    assert_eq!(t.ledger.total_claimed, 0);
}

#[test]
fn second_batch_cannot_exceed_remaining_pool() {
    let mut t = setup();
    let admin = t.admin;
    let newcomer = Pubkey::new_unique();

    let over = ScheduleBatch::from_columns(
        &[newcomer],
        &[30],
        &[360],
        &[0],
        &[t.ledger.unallocated() + 1],
        t.ledger.time_unit,
    )
    .unwrap();
    let ctx = t.at(5, admin);
    assert_err(
        t.ledger.create_schedules(&ctx, &over),
        VestingError::InsufficientPool,
    );
    assert_eq!(t.ledger.accounts_count(), 12);

    // A top-up makes room.
    t.token.balances.insert(admin, tokens(1, 0));
    t.ledger.deposit(&ctx, tokens(1, 0), &mut t.token).unwrap();
    let out = t.ledger.create_schedules(&ctx, &over).unwrap();
    assert_eq!(out.first_id, 13);
    assert_eq!(t.ledger.schedule_by_address(&newcomer).unwrap().start_time, T0 + 5 * DAY);
    t.assert_pool_invariants();
}

#[test]
fn recipients_cannot_deposit_or_register() {
    let mut t = setup();
    let intruder = t.accounts[0];
    t.token.balances.insert(intruder, tokens(10, 0));

    let ctx = t.at(1, intruder);
    assert_err(
        t.ledger.deposit(&ctx, tokens(1, 0), &mut t.token),
        VestingError::Unauthorized,
    );
    let batch = ScheduleBatch::from_columns(&[intruder], &[1], &[1], &[0], &[1], DAY).unwrap();
    assert_err(
        t.ledger.create_schedules(&ctx, &batch),
        VestingError::Unauthorized,
    );
    assert_eq!(t.token.balance_of(&intruder), tokens(10, 0));
}
