pub mod ast;
pub mod cleaner;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod merger;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod tokens;

pub use cleaner::Cleaner;
pub use error::{Error, Result};
pub use pipeline::{Layout, Report};
pub use tokens::TokenTable;
