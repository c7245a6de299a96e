pub mod config;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod index;
pub mod io;
pub mod jobs;
pub mod viewer;
