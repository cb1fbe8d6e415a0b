//! Roll system - weighted defense, borrow enforcement, encounter generation

mod borrow;
mod encounter;
mod sampler;

pub use borrow::{
    damage_borrows, remaining_borrows, round_borrows, synthesis_probability, BorrowEnforcer,
    EnforcedPair, Strategy, REROLLS_PER_LEVEL,
};
pub use encounter::EncounterGenerator;
pub use sampler::{sample_weighted, weight};
