//! Minesweeper game logic without any presentation attached: the hidden
//! [`MineField`] and the player-visible [`VisibleField`] state machine,
//! including flood-fill reveal and win/loss detection.
//!
//! A frontend drives a game by routing player input to
//! [`VisibleField::cycle_guess`] and [`VisibleField::uncover`], then asking
//! [`VisibleField::is_game_over`] whether the session is finished. The
//! per-square display states are available both as [`CellStatus`] values and
//! as the fixed integer codes of [`VisibleField::status_code`].
//!
//! ```rust
//! use minesweeper_core::{GameParams, MineField, VisibleField};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), minesweeper_core::FieldError> {
//! let mut field = MineField::with_params(GameParams::default())?;
//! field.populate(&mut StdRng::seed_from_u64(7), 4, 4)?;
//!
//! let mut game = VisibleField::new(field);
//! assert!(game.uncover(4, 4));
//! game.cycle_guess(0, 0);
//! if game.is_game_over() {
//!     // the terminal board reveal has been applied, render and stop
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod logic;
pub mod model;

pub use data::{CellStatus, FieldError};
pub use logic::{MineField, VisibleField};
pub use model::{Cell, GameParams};
