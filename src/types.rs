pub mod book;
pub mod outcome;
