// ABOUTME: Library crate for Git Push Tool exposing public API for testing and external use

pub mod app;
pub mod components;
pub mod config;
pub mod git;
pub mod headless;
