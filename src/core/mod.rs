pub mod materialize;
pub mod parse;
