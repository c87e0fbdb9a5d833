//! Loanterms Core - Fixed-point token amounts
//!
//! Every monetary value in Loanterms is an arbitrary-precision integer in the
//! token's smallest unit. This crate converts between that representation and
//! the decimal strings users type and read.

pub mod amount;

pub use amount::{format_amount, parse_amount, parse_integer, scale, AmountError, DEFAULT_DECIMALS};
