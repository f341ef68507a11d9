pub mod ancestors;
pub mod find;
