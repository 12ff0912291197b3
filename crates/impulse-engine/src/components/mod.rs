pub mod body;
pub mod shape;
