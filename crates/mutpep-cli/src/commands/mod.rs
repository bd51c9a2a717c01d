pub mod codes;
pub mod process;
