#![no_std]

pub mod types;
pub mod storage;
pub mod pricing;
pub mod clock;
mod validation;
mod events;
pub mod ledger;
pub mod sale;

pub use sale::{MntlPresale, MntlPresaleClient};
pub use types::*;
