//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over grids and boards. Storage lives in `Cell` and
//! `Board`; these functions only read it.

pub mod line;
pub mod majority;
pub mod send_to;

pub use line::{Vacancy, has_line, is_full};
pub use majority::majority;
pub use send_to::{directed_cell, legal_moves};
