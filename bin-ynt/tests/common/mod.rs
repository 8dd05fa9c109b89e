#![allow(unused)]
#[path = "../../src/app/mod.rs"]
pub mod app;
