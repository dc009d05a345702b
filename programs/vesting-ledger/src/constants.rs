//! Program-wide constants.

/// PDA seed of the ledger account (`["ledger", mint]`).
pub const LEDGER_SEED: &[u8] = b"ledger";

/// PDA seed of the token vault owned by the ledger (`["vault", ledger]`).
pub const VAULT_SEED: &[u8] = b"vault";

/// Max schedules stored in one ledger account.
pub const MAX_SCHEDULES: usize = 64;

/// Max schedules registered per `create_schedules` call. Bounded by the
/// 1232-byte transaction size: 12 entries leave room for a compute-budget
/// instruction next to `create_schedules`.
pub const MAX_BATCH_SIZE: usize = 12;

/// Seconds per day (UTC). Default duration unit for registered schedules.
pub const SECONDS_PER_DAY: i64 = 86_400;
