pub mod analyze;
pub mod cli;
pub mod cloud;
pub mod input;
pub mod morpheme;
