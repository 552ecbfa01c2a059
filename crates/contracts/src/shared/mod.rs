pub mod display;
pub mod error;
pub mod filter;
