pub mod limits;
pub mod scenario;
pub mod table;

pub use limits::*;
pub use scenario::*;
pub use table::*;
