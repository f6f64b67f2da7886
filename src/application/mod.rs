pub mod demo;
pub mod translate;
