pub mod pagination;
pub mod parse;
pub mod search;
