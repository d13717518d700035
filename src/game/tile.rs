/// What occupies a single board cell.
///
/// `Empty`, `Wall` and `Exit` make up the terrain laid down on `init`;
/// the remaining variants come from the per-frame entity overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Exit,
    Player { is_self: bool },
    Enemy,
    Treasure { collected: bool },
}

impl Tile {
    /// Higher wins when several entities share a cell
    pub(crate) fn overlay_rank(&self) -> u8 {
        match self {
            Tile::Treasure { .. } => 4,
            Tile::Enemy => 3,
            Tile::Player { is_self: true } => 2,
            Tile::Player { is_self: false } => 1,
            Tile::Empty | Tile::Wall | Tile::Exit => 0,
        }
    }
}
