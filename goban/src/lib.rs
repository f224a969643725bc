pub use board::*;
pub use errors::*;
pub use game::*;
pub use record::*;
pub use stone::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod record;
mod stone;
mod visualization;
