//! Portfolio Core - Headless State for a Three-Page Portfolio
//!
//! This crate holds everything the portfolio *does*, independent of how it
//! is drawn: which page is showing, whether the theme is dark, how wheel and
//! swipe input turn into page changes, what the project showcase is
//! filtering on, and how a contact message is delivered.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Surface (TUI)                        │
//! │   crossterm input ──▶ SurfaceEvent        frame ◀── render   │
//! └──────────────────────────┬───────────────────────▲───────────┘
//!                            │ handle_event(now)     │ read accessors
//! ┌──────────────────────────▼───────────────────────┴───────────┐
//! │                          Portfolio                           │
//! │  ┌─────────────┐  ┌─────────────────────┐  ┌───────────────┐ │
//! │  │GestureRouter│─▶│PageNavigation-      │  │ThemeController│ │
//! │  │(thresholds) │  │Controller (cooldown)│  │(cross-fade)   │ │
//! │  └─────────────┘  └──────────┬──────────┘  └───────┬───────┘ │
//! │  ProjectShowcase  EditorShowcase  NoticeBoard      │         │
//! │  ContactService ─▶ EmailJS   │                     │         │
//! │                              └──── Storage ◀───────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Time
//!
//! Every mutating call takes the current [`std::time::Instant`]. Deferred
//! work (clearing a transition flag, rotating the editor panel) is a
//! [`timer::DeferredTimer`] polled from [`Portfolio::update`]. Nothing in this
//! crate sleeps or spawns.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::time::Instant;
//! use portfolio_core::{load_config, FileStorage, Portfolio, SurfaceEvent};
//!
//! let config = load_config()?;
//! let storage = FileStorage::open("state.json").shared();
//! let mut portfolio = Portfolio::from_config(&config, storage, Instant::now())?;
//!
//! portfolio.handle_event(SurfaceEvent::Wheel { delta_y: 120.0 }, Instant::now());
//! portfolio.update(Instant::now());
//! ```
//!
//! # Module Overview
//!
//! - [`pages`]: The three pages and their cyclic order
//! - [`navigation`]: Page navigation with cooldown and transition guard
//! - [`theme`]: Dark/light theme with cross-fade guard
//! - [`gestures`]: Wheel/touch to navigation intent
//! - [`animation`]: Easing, tweens and transition records
//! - [`storage`]: Key-value persistence (memory, JSON file)
//! - [`config`]: TOML configuration with env/CLI overrides
//! - [`contact`]: Contact form validation and email delivery
//! - [`projects`]: Project catalog and category filter
//! - [`editor`]: Hero page's rotating editor panel
//! - [`notices`]: Self-expiring notices
//! - [`events`]: Events from surfaces
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod config;
pub mod contact;
pub mod editor;
pub mod events;
pub mod gestures;
pub mod navigation;
pub mod notices;
pub mod pages;
pub mod portfolio;
pub mod preference;
pub mod projects;
pub mod storage;
pub mod theme;
pub mod timer;

// Re-exports for convenience
pub use pages::{NavDirection, PageId, UnknownPage};
pub use portfolio::{ContactSubmission, Portfolio};

pub use events::SurfaceEvent;

// Controller exports
pub use gestures::{GestureConfig, GestureRouter};
pub use navigation::{NavigationConfig, NavigationState, PageNavigationController};
pub use theme::{ThemeController, ThemeOrigin, ThemeState};

// Animation exports
pub use animation::{CountUp, EasingFunction, PageTransition, ThemeTransition, Tween};

// Storage exports
pub use storage::{
    default_state_path, FileStorage, MemoryStorage, SharedStorage, Storage, StorageError,
};

// Showcase exports
pub use editor::{EditorShowcase, EditorView};
pub use notices::{Notice, NoticeBoard, NoticeId, NoticeLevel};
pub use projects::{CategoryFilter, Project, ProjectShowcase};

// Contact exports
pub use contact::{
    ContactConfig, ContactError, ContactField, ContactForm, ContactMessage, ContactService,
    EmailJsSender, EmailSender, TemplateParams,
};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, PortfolioConfig, PortfolioToml, Profile, Stat,
};
