pub mod markdown;
pub mod parse;
