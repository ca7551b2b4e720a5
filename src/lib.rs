//! # Tic-Tac-Toe TUI
//!
//! A terminal tic-tac-toe game built with Ratatui. Supports local
//! two-player play and a single-player mode against a scripted computer
//! opponent that wins when it can, blocks when it must, and otherwise
//! plays a random empty cell.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait and the scripted / random opponents
//! - [`session`] — Turn orchestration and the opponent on/off toggle
//! - [`ui`] — Terminal UI: event loop, game view, board rendering
//! - [`config`] — TOML configuration loading
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
