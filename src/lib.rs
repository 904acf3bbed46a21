pub mod catalog;
pub mod cli;
pub mod matching;
pub mod pantry;
pub mod shopping_list;
