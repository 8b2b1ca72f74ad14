#![no_std]

pub mod storage;
pub mod types;
mod validation;
mod events;
pub mod token;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use token::{MntlToken, MntlTokenClient};
pub use types::*;
