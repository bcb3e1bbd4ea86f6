#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod columns;
pub mod error;
pub mod estimate;
pub mod numeric;
pub mod prelude;
pub mod quantity;
pub mod scenario;
pub mod sizing;
pub mod tables;
pub mod tariff;

pub use self::error::{Error, Result};
