pub mod current;
pub mod library_tree;
pub mod outcome;
