pub mod catalog;
pub mod recommendation;
