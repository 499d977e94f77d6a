pub mod console;
pub mod demo;
