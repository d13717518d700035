use std::collections::HashMap;
use tracing::{debug, warn};

use super::protocol::{InitMessage, Position, StateMessage, TreasureState};
use super::tile::Tile;

/// Widest board the renderer can address (two columns per cell)
pub const MAX_WIDTH: usize = (u16::MAX / 2) as usize;
/// Tallest board the renderer can address
pub const MAX_HEIGHT: usize = u16::MAX as usize;

/// Client-side picture of the game board.
///
/// The terrain is fixed between `init` frames. Entities are rebuilt from
/// scratch on every `state` frame, so a player that moves leaves no trace
/// in its old cell. The treasure is the exception: it stays where it was
/// last reported until a frame says otherwise.
#[derive(Debug, Default)]
pub struct Board {
    width: usize,
    height: usize,
    // only non-empty cells
    terrain: HashMap<(usize, usize), Tile>,
    overlay: HashMap<(usize, usize), Tile>,
    treasure: Option<TreasureState>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_initialized(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Replace the whole board with the layout from an `init` frame.
    ///
    /// A frame whose size the terminal cannot show is logged and ignored,
    /// leaving the current board untouched.
    pub fn apply_init(&mut self, init: &InitMessage) {
        let fits = init.width <= MAX_WIDTH
            && init.height <= MAX_HEIGHT
            && init.width.checked_mul(init.height).is_some();
        if !fits {
            warn!(
                width = init.width,
                height = init.height,
                max_width = MAX_WIDTH,
                max_height = MAX_HEIGHT,
                "Ignoring init frame with unsupported board size"
            );
            return;
        }

        self.width = init.width;
        self.height = init.height;
        self.terrain.clear();
        self.overlay.clear();
        self.treasure = None;

        for wall in &init.walls {
            self.set_terrain(*wall, Tile::Wall);
        }
        if let Some(exit) = init.exit {
            self.set_terrain(exit, Tile::Exit);
        }

        debug!(
            width = self.width,
            height = self.height,
            walls = init.walls.len(),
            "Board initialized"
        );
    }

    /// Rebuild the entity overlay from a `state` frame
    pub fn apply_state(&mut self, state: &StateMessage) {
        self.overlay.clear();

        for (id, pos) in &state.players {
            let is_self = state.you.as_deref() == Some(id.as_str());
            self.place(*pos, Tile::Player { is_self });
        }

        for pos in &state.enemies {
            self.place(*pos, Tile::Enemy);
        }

        if let Some(treasure) = &state.treasure {
            self.treasure = Some(treasure.clone());
        }
        if let Some(treasure) = self.treasure.clone() {
            self.place(
                treasure.position(),
                Tile::Treasure {
                    collected: treasure.collected,
                },
            );
        }
    }

    /// Tile visible at a cell, or `None` outside the board
    pub fn tile_at(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(
            self.overlay
                .get(&(x, y))
                .copied()
                .or_else(|| self.terrain.get(&(x, y)).copied())
                .unwrap_or(Tile::Empty),
        )
    }

    fn index_of(&self, pos: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    fn set_terrain(&mut self, pos: Position, tile: Tile) {
        match self.index_of(pos) {
            Some(cell) => {
                self.terrain.insert(cell, tile);
            }
            None => warn!(x = pos.x, y = pos.y, ?tile, "Ignoring terrain outside the board"),
        }
    }

    fn place(&mut self, pos: Position, tile: Tile) {
        let Some(cell) = self.index_of(pos) else {
            warn!(x = pos.x, y = pos.y, ?tile, "Ignoring entity outside the board");
            return;
        };

        match self.overlay.get(&cell) {
            Some(existing) if existing.overlay_rank() > tile.overlay_rank() => {}
            _ => {
                self.overlay.insert(cell, tile);
            }
        }
    }
}
