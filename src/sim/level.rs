//! Level layouts: file-backed with a deterministic procedural fallback
//!
//! A layout is a fixed `BRICK_ROWS x BRICK_COLS` grid of cells. File-backed
//! levels are plain text, one row per line: `#` is an ordinary live brick,
//! `A` a special brick that drops a collectible, anything else (including
//! short or missing rows) is empty. Whenever a level file is absent or
//! unreadable, the procedural generator takes over; it is a pure function of
//! the level index so fallback layouts replay identically.

use std::fs;
use std::path::PathBuf;

use crate::consts::{BRICK_COLORS, BRICK_COLS, BRICK_ROWS};

/// One cell of a level layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub alive: bool,
    /// Live brick that drops a collectible when destroyed
    pub special: bool,
    /// Palette index in `0..BRICK_COLORS`
    pub color: u8,
}

/// A full brick grid for one level, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Vec<Cell>,
}

impl Layout {
    /// An all-empty grid
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::default(); BRICK_ROWS * BRICK_COLS],
        }
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BRICK_COLS + col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * BRICK_COLS + col] = cell;
    }

    /// Number of live cells
    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.alive).count() as u32
    }
}

/// Supplies the brick layout for a given level index
pub trait LevelProvider {
    fn layout_for(&self, level: u32) -> Layout;
}

/// Palette index shared by the file and procedural paths
#[inline]
fn cell_color(row: usize, col: usize, level: u32) -> u8 {
    ((row as u32 + col as u32 + level) % BRICK_COLORS as u32) as u8
}

/// Deterministic integer mix for per-cell decisions; no RNG involved
#[inline]
fn cell_hash(row: usize, col: usize, level: u32) -> u32 {
    level
        .wrapping_mul(2654435761)
        .wrapping_add((row as u32).wrapping_mul(7919))
        .wrapping_add((col as u32).wrapping_mul(104729))
}

/// Procedural layout generator, a pure function of the level index
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralLevels;

impl LevelProvider for ProceduralLevels {
    fn layout_for(&self, level: u32) -> Layout {
        let mut layout = Layout::empty();
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let mix = row as u32 + col as u32 + level;
                let alive = level <= 1 || mix % (1 + level / 2) != 0;
                layout.set_cell(
                    row,
                    col,
                    Cell {
                        alive,
                        special: alive && cell_hash(row, col, level) % 18 == 0,
                        color: cell_color(row, col, level),
                    },
                );
            }
        }
        layout
    }
}

/// File-backed levels (`level{N}.txt` under a directory), falling back to
/// [`ProceduralLevels`] when a file is missing or unreadable
#[derive(Debug, Clone)]
pub struct FileLevels {
    dir: PathBuf,
}

impl FileLevels {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl LevelProvider for FileLevels {
    fn layout_for(&self, level: u32) -> Layout {
        let path = self.dir.join(format!("level{level}.txt"));
        match fs::read_to_string(&path) {
            Ok(text) => parse_layout(&text, level),
            Err(err) => {
                log::info!(
                    "level file {} unavailable ({err}), using procedural layout",
                    path.display()
                );
                ProceduralLevels.layout_for(level)
            }
        }
    }
}

/// Parse level text. Cells beyond the provided rows/columns stay empty;
/// unexpected characters read as empty. Never fails.
pub fn parse_layout(text: &str, level: u32) -> Layout {
    let mut layout = Layout::empty();
    let mut lines = text.lines();
    for row in 0..BRICK_ROWS {
        let line = lines.next().unwrap_or("");
        let bytes = line.as_bytes();
        for col in 0..BRICK_COLS {
            let (alive, special) = match bytes.get(col) {
                Some(b'#') => (true, false),
                Some(b'A') => (true, true),
                _ => (false, false),
            };
            layout.set_cell(
                row,
                col,
                Cell {
                    alive,
                    special,
                    color: cell_color(row, col, level),
                },
            );
        }
    }
    layout
}
