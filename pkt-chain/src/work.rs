//! Proof-of-work data carried in blocks.

pub mod difficulty;
pub mod proof;
