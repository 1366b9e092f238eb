pub mod builtin;
pub mod exam;
