pub mod cgu;
pub mod dispatch;

pub use cgu::*;
pub use dispatch::*;
