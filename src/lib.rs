pub mod config;
pub mod domain;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod solver;
pub mod telemetry;
