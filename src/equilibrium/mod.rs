//! Security levels and pure-strategy Nash equilibria.
mod nash;
mod security;

pub use nash::*;
pub use security::*;
