pub mod input;
pub mod preview;
pub mod progress;
