pub mod error;
pub mod consts;
pub mod preset;
pub mod io;
pub mod geometry;
pub mod viewport;
pub mod compose;
pub mod session;
pub mod config;
