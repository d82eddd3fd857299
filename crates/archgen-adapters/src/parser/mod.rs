//! Source parser adapters.

mod go;

pub use go::GoSourceParser;
