//! # Hopper
//! A draughts (checkers) rules engine: board state, move validation,
//! captures and turn alternation.
//!
//! It is usable as both a library to embed into your own projects and a standalone
//! binary for playing on the command line.

pub mod game;
pub mod players;
