//! Thin CSV collaborators around the model core. The core itself
//! performs no I/O; everything here loads once per run or writes once
//! per run, with errors carrying the file and expected columns.

pub mod limits;
pub mod output;
pub mod prices;

pub use limits::*;
pub use output::*;
pub use prices::*;
