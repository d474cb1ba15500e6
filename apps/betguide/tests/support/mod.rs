#![allow(dead_code)]

pub mod app_builder;
pub mod db;

pub use app_builder::create_test_app;
pub use db::{seeded_state, unseeded_state};
