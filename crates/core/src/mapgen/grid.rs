//! Wall/floor grid storage, text and byte encodings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cell, Point, Pos};

const WALL_GLYPH: char = '#';
const FLOOR_GLYPH: char = '.';

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown cell glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },
    #[error("byte encoding is truncated or has trailing data")]
    BadLength,
    #[error("unknown cell byte {value} at offset {offset}")]
    UnknownByte { value: u8, offset: usize },
}

/// Rectangular wall/floor matrix. Cells outside the grid read as walls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_floor(&self, pos: Pos) -> bool {
        self.cell_at(pos).is_floor()
    }

    /// Whether the cell containing `point` is floor.
    pub fn is_open(&self, point: Point) -> bool {
        self.is_floor(point.cell())
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width - 1
            || pos.y as usize == self.height - 1
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }

    pub fn border_is_solid(&self) -> bool {
        self.positions().filter(|&pos| self.is_border(pos)).all(|pos| !self.is_floor(pos))
    }

    pub fn seal_border(&mut self) {
        let border: Vec<Pos> = self.positions().filter(|&pos| self.is_border(pos)).collect();
        for pos in border {
            self.set(pos, Cell::Wall);
        }
    }

    pub fn center(&self) -> Point {
        Point { x: self.width as f64 / 2.0, y: self.height as f64 / 2.0 }
    }

    /// One string per row, `#` for walls and `.` for floor.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => WALL_GLYPH,
                        Cell::Floor => FLOOR_GLYPH,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow { row: row_index, expected: width, found });
            }
            for (column, glyph) in row.chars().enumerate() {
                cells.push(match glyph {
                    WALL_GLYPH => Cell::Wall,
                    FLOOR_GLYPH => Cell::Floor,
                    _ => return Err(GridError::UnknownGlyph { glyph, row: row_index, column }),
                });
            }
        }

        Ok(Self { width, height: rows.len(), cells })
    }

    /// Little-endian width and height followed by one byte per cell.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Floor => 1,
            });
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GridError> {
        let (Some(width_bytes), Some(height_bytes)) = (bytes.get(0..4), bytes.get(4..8)) else {
            return Err(GridError::BadLength);
        };
        let width = u32::from_le_bytes(width_bytes.try_into().map_err(|_| GridError::BadLength)?);
        let height =
            u32::from_le_bytes(height_bytes.try_into().map_err(|_| GridError::BadLength)?);
        let (width, height) = (width as usize, height as usize);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let body = &bytes[8..];
        if body.len() != width * height {
            return Err(GridError::BadLength);
        }
        let cells = body
            .iter()
            .enumerate()
            .map(|(offset, &value)| match value {
                0 => Ok(Cell::Wall),
                1 => Ok(Cell::Floor),
                _ => Err(GridError::UnknownByte { value, offset: offset + 8 }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { width, height, cells })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
