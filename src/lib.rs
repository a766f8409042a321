//! Human versus computer naval combat on a square grid.
//!
//! The crate models the boards and fleets of both sides and provides the
//! computer opponent's targeting engine. Rendering and input live elsewhere;
//! a front end reads cell states, applies missiles with
//! [`Board::receive_missile`] and asks [`TargetingEngine::find_target`] for the
//! computer's move, or drives the whole turn loop through [`Game`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cell;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;

pub use ai::*;
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, parse_level, LOG_ENV};
pub use placement::random_direction;
pub use ship::*;
