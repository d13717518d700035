pub mod board;
pub mod protocol;
pub mod tile;

pub use board::Board;
pub use protocol::{ClientMessage, Direction, ServerMessage};
pub use tile::Tile;
