pub mod ledger_account;
pub mod schedule;

pub use ledger_account::*;
pub use schedule::*;
