//! Portfolio TUI - Terminal surface for the portfolio
//!
//! This crate draws the three portfolio pages in a full-screen terminal and
//! forwards input to the headless [`portfolio_core::Portfolio`].
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering and off-screen slides
//! - **Input**: Keys, wheel notches and drags mapped to surface events
//! - **Views**: Hero, projects and contact pages plus the fixed chrome
//! - **Theme**: Dark and light palettes, blended during a change
//! - **Backdrop**: Floating squares behind the pages

pub mod app;
pub mod backdrop;
pub mod compositor;
pub mod input;
pub mod theme;
pub mod views;

pub use app::App;
