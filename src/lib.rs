#![cfg_attr(not(feature = "std"), no_std)]

mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod game;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::run_game;
pub use common::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
