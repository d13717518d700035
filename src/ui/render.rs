use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::game::{Board, Tile};

const BLOCK: &str = "██";
const SHADE: &str = "▒▒";
const HORIZONTAL_WALL: &str = "══";
const TOP_LEFT_CORNER: &str = "╔═";
const TOP_RIGHT_CORNER: &str = "═╗";
const BOTTOM_LEFT_CORNER: &str = "╚═";
const BOTTOM_RIGHT_CORNER: &str = "═╝";
const LEFT_WALL: &str = "║";
const RIGHT_WALL: &str = " ║";

const IVORY4: Color = Color::Rgb { r: 139, g: 139, b: 131 };
const DARK_OLIVE_GREEN: Color = Color::Rgb { r: 85, g: 107, b: 47 };
const CYAN2: Color = Color::Rgb { r: 0, g: 238, b: 238 };
const ORANGE4: Color = Color::Rgb { r: 139, g: 90, b: 0 };
const GOLD: Color = Color::Rgb { r: 255, g: 215, b: 0 };
const GRAY: Color = Color::Rgb { r: 190, g: 190, b: 190 };

/// How a single cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub symbol: &'static str,
    pub fg: Color,
    pub bg: Option<Color>,
}

impl CellStyle {
    fn fg(symbol: &'static str, fg: Color) -> Self {
        Self { symbol, fg, bg: None }
    }
}

/// Paints a [`Board`] onto a terminal, two columns per cell
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pretty_walls: bool,
}

impl Renderer {
    pub fn new(pretty_walls: bool) -> Self {
        Self { pretty_walls }
    }

    pub fn cell_style(&self, board: &Board, x: usize, y: usize, tile: Tile) -> CellStyle {
        match tile {
            Tile::Empty => CellStyle {
                symbol: "  ",
                fg: Color::White,
                bg: Some(DARK_OLIVE_GREEN),
            },
            Tile::Wall => CellStyle::fg(self.wall_symbol(board, x, y), IVORY4),
            Tile::Exit => CellStyle::fg("XX", Color::White),
            Tile::Player { is_self: true } => CellStyle::fg(BLOCK, CYAN2),
            Tile::Player { is_self: false } => CellStyle::fg(BLOCK, ORANGE4),
            Tile::Enemy => CellStyle::fg(BLOCK, Color::Red),
            Tile::Treasure { collected: false } => CellStyle::fg(BLOCK, GOLD),
            Tile::Treasure { collected: true } => CellStyle::fg(BLOCK, GRAY),
        }
    }

    fn wall_symbol(&self, board: &Board, x: usize, y: usize) -> &'static str {
        let last_x = board.width().saturating_sub(1);
        let last_y = board.height().saturating_sub(1);
        let on_border = x == 0 || y == 0 || x == last_x || y == last_y;

        if !on_border {
            return SHADE;
        }
        if !self.pretty_walls {
            return BLOCK;
        }

        match (x, y) {
            (0, 0) => TOP_LEFT_CORNER,
            (x, 0) if x == last_x => TOP_RIGHT_CORNER,
            (0, y) if y == last_y => BOTTOM_LEFT_CORNER,
            (x, y) if x == last_x && y == last_y => BOTTOM_RIGHT_CORNER,
            (0, _) => LEFT_WALL,
            (x, _) if x == last_x => RIGHT_WALL,
            _ => HORIZONTAL_WALL,
        }
    }

    /// Clear the screen and draw every cell of the board
    pub fn draw<W: Write>(&self, out: &mut W, board: &Board) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;

        for y in 0..board.height() {
            for x in 0..board.width() {
                let Some(tile) = board.tile_at(x, y) else {
                    continue;
                };
                let style = self.cell_style(board, x, y, tile);
                let column = u16::try_from(x * 2).unwrap_or(u16::MAX);
                let row = u16::try_from(y).unwrap_or(u16::MAX);

                queue!(out, MoveTo(column, row), SetForegroundColor(style.fg))?;
                if let Some(bg) = style.bg {
                    queue!(out, SetBackgroundColor(bg))?;
                }
                queue!(out, Print(style.symbol), ResetColor)?;
            }
        }

        let below = u16::try_from(board.height()).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, below))?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::protocol::{InitMessage, Position};

    fn walled_board(width: usize, height: usize) -> Board {
        let mut walls = Vec::new();
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                if x == 0 || y == 0 || x == width as i64 - 1 || y == height as i64 - 1 {
                    walls.push(Position::new(x, y));
                }
            }
        }
        walls.push(Position::new(2, 2));

        let mut board = Board::new();
        board.apply_init(&InitMessage {
            width,
            height,
            walls,
            exit: Some(Position::new(1, 1)),
        });
        board
    }

    #[test]
    fn test_plain_walls() {
        let board = walled_board(5, 5);
        let renderer = Renderer::new(false);

        assert_eq!(renderer.cell_style(&board, 0, 0, Tile::Wall).symbol, BLOCK);
        assert_eq!(renderer.cell_style(&board, 4, 2, Tile::Wall).symbol, BLOCK);
        assert_eq!(renderer.cell_style(&board, 2, 2, Tile::Wall).symbol, SHADE);
        assert_eq!(renderer.cell_style(&board, 2, 2, Tile::Wall).fg, IVORY4);
    }

    #[test]
    fn test_pretty_walls() {
        let board = walled_board(5, 4);
        let renderer = Renderer::new(true);
        let symbol = |x, y| renderer.cell_style(&board, x, y, Tile::Wall).symbol;

        assert_eq!(symbol(0, 0), TOP_LEFT_CORNER);
        assert_eq!(symbol(4, 0), TOP_RIGHT_CORNER);
        assert_eq!(symbol(0, 3), BOTTOM_LEFT_CORNER);
        assert_eq!(symbol(4, 3), BOTTOM_RIGHT_CORNER);
        assert_eq!(symbol(0, 1), LEFT_WALL);
        assert_eq!(symbol(4, 1), RIGHT_WALL);
        assert_eq!(symbol(2, 0), HORIZONTAL_WALL);
        assert_eq!(symbol(2, 3), HORIZONTAL_WALL);
        assert_eq!(symbol(2, 2), SHADE);
    }

    #[test]
    fn test_entity_colours() {
        let board = walled_board(5, 5);
        let renderer = Renderer::default();

        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Player { is_self: true }).fg, CYAN2);
        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Player { is_self: false }).fg, ORANGE4);
        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Enemy).fg, Color::Red);
        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Treasure { collected: false }).fg, GOLD);
        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Treasure { collected: true }).fg, GRAY);
        assert_eq!(renderer.cell_style(&board, 1, 1, Tile::Exit).symbol, "XX");

        let empty = renderer.cell_style(&board, 1, 2, Tile::Empty);
        assert_eq!(empty.symbol, "  ");
        assert_eq!(empty.bg, Some(DARK_OLIVE_GREEN));
    }

    #[test]
    fn test_draw_writes_every_glyph() {
        let board = walled_board(4, 3);
        let mut out = Vec::new();

        Renderer::new(false).draw(&mut out, &board).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(BLOCK).count(), 10);
        assert!(text.contains("XX"));
    }

    #[test]
    fn test_draw_uninitialized_board_only_clears() {
        let mut out = Vec::new();
        Renderer::default().draw(&mut out, &Board::new()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(BLOCK));
    }
}
