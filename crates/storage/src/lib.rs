#![warn(clippy::pedantic)]

pub mod document;
pub mod file;
pub mod rest;

pub use document::{Document, DocumentError};
pub use file::FileStore;
pub use rest::RestSync;
