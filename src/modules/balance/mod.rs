pub mod controller;
pub mod router;
pub mod service;

pub use router::init_balance_router;
pub use service::BalanceService;
