pub mod error;
pub mod explanation;
pub mod markdown;
pub mod propositional_logic;
