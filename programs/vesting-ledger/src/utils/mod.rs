pub mod accrual;
pub mod digest;
