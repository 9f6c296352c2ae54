pub mod assign;
pub mod catalog;
pub mod log;
pub mod matcher;
pub mod pages;
pub mod parser;
pub mod tally;
