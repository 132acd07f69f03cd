pub mod argument;
pub mod evaluate;
pub mod formula;
pub mod postfix;
pub mod table;
pub mod tokenizer;
pub mod types;
