pub mod parse;
pub mod search;
