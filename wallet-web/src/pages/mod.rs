//! Page modules

pub mod fund;

pub use fund::FundPage;
