//! In-memory drawing surface.
//!
//! Tasks paint into the canvas during a tick; the binary flushes it to the
//! terminal once the tick is over.  Drawing is forgiving: anything outside
//! the surface is clipped without complaint, and the bottom-right cell is
//! never written because terminals scroll when it is.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStyle {
    Dim,
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub style: CellStyle,
}

impl Cell {
    const BLANK: Cell = Cell {
        symbol: ' ',
        style: CellStyle::Normal,
    };
}

#[derive(Clone, Debug)]
pub struct Canvas {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::BLANK; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Draw a multi-line text block with its top-left corner at
    /// `(row, column)`, rounded to the nearest cell.  Spaces are
    /// transparent.  With `erase` set, every non-space symbol of the block
    /// is blanked instead.
    pub fn draw_frame(&mut self, row: f64, column: f64, text: &str, erase: bool) {
        let start_row = row.round() as i64;
        let start_column = column.round() as i64;

        for (line_offset, line) in text.lines().enumerate() {
            let r = start_row + line_offset as i64;
            if r < 0 {
                continue;
            }
            if r >= self.rows as i64 {
                break;
            }
            for (char_offset, symbol) in line.chars().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                let c = start_column + char_offset as i64;
                if c < 0 {
                    continue;
                }
                if c >= self.columns as i64 {
                    break;
                }
                let cell = if erase {
                    Cell::BLANK
                } else {
                    Cell {
                        symbol,
                        style: CellStyle::Normal,
                    }
                };
                self.set(r, c, cell);
            }
        }
    }

    /// Put a single styled symbol.
    pub fn put(&mut self, row: i64, column: i64, symbol: char, style: CellStyle) {
        self.set(row, column, Cell { symbol, style });
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row as i64, column as i64).map(|i| self.cells[i])
    }

    pub fn symbol_at(&self, row: usize, column: usize) -> Option<char> {
        self.cell(row, column).map(|cell| cell.symbol)
    }

    /// Row `row` as a string of exactly `columns` symbols.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter()
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, row: i64, column: i64, cell: Cell) {
        if row == self.rows as i64 - 1 && column == self.columns as i64 - 1 {
            return;
        }
        if let Some(i) = self.index(row, column) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, row: i64, column: i64) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i64 || column >= self.columns as i64 {
            return None;
        }
        Some(row as usize * self.columns + column as usize)
    }
}
