pub mod invite;
pub mod parse;
pub mod validate;
