//! # Connect Four
//!
//! A terminal Connect Four game with a pure, fully-tested rules engine.
//! Two players take turns dropping pieces into a 6×7 grid; the first to
//! line up four in a row wins. The UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
