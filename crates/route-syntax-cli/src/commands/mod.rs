pub mod check;
pub mod input;
pub mod params;
pub mod tree;
