pub mod claim_vested_tokens;
pub mod create_schedules;
pub mod deposit;
pub mod initialize_ledger;
pub mod queries;
pub mod token_port;

pub use claim_vested_tokens::*;
pub use create_schedules::*;
pub use deposit::*;
pub use initialize_ledger::*;
pub use queries::*;
