use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::error::{BoggleError, Result};
use super::util::{letter_offset, offset_letter, Position};
use super::ALPHABET_SIZE;

/// Square grid of letter offsets (0 = 'a' ... 25 = 'z')
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<u8>,
}

impl Board {
    /// Wraps an existing grid after checking it is a non-empty square of
    /// valid letter offsets
    pub fn from_array(cells: Array2<u8>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(BoggleError::invalid_board("board is empty"));
        }
        if rows != cols {
            return Err(BoggleError::invalid_board(format!(
                "board is {}x{}, expected a square",
                rows, cols
            )));
        }
        if let Some(bad) = cells.iter().find(|&&c| c as usize >= ALPHABET_SIZE) {
            return Err(BoggleError::invalid_board(format!(
                "{} is not a letter offset",
                bad
            )));
        }
        Ok(Self { cells })
    }

    /// Caller guarantees a non-empty square of offsets below `ALPHABET_SIZE`
    pub(crate) fn from_array_unchecked(cells: Array2<u8>) -> Self {
        debug_assert!(cells.is_square() && !cells.is_empty());
        Self { cells }
    }

    /// Builds a board from raw rows of letter offsets
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|r| r.len() != size) {
            return Err(BoggleError::invalid_board(format!(
                "row of length {} on a board with {} rows",
                row.len(),
                size
            )));
        }
        let flat = rows.iter().flatten().copied().collect::<Vec<_>>();
        let cells = Array2::from_shape_vec((size, size), flat)
            .map_err(|e| BoggleError::invalid_board(e.to_string()))?;
        Self::from_array(cells)
    }

    /// Reads a board from a text file. Whitespace is ignored, so both a single
    /// line and one row per line work.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let letters: String = data.split_whitespace().collect::<String>().to_lowercase();
        letters.parse()
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    pub fn letter(&self, pos: Position) -> char {
        offset_letter(self[pos])
    }

    /// Iterates over every position, row major
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position { row, col }))
    }

    /// Row major string form, the inverse of [`Board::from_str`]
    pub fn letters(&self) -> String {
        self.cells.iter().map(|&c| offset_letter(c)).collect()
    }
}

impl FromStr for Board {
    type Err = BoggleError;

    /// Converts a string of `size * size` lowercase letters into a board,
    /// filling rows first
    fn from_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        let size = (len as f64).sqrt().round() as usize;
        if len == 0 || size * size != len {
            return Err(BoggleError::invalid_board(format!(
                "{} letters cannot form a square board",
                len
            )));
        }

        let letters = s
            .chars()
            .map(|c| {
                letter_offset(c).ok_or_else(|| {
                    BoggleError::invalid_board(format!("'{}' is not a lowercase letter", c))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cells = Array2::from_shape_vec((size, size), letters)
            .map_err(|e| BoggleError::invalid_board(e.to_string()))?;
        Ok(Self { cells })
    }
}

impl std::ops::Index<Position> for Board {
    type Output = u8;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[[index.row, index.col]]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row
                .iter()
                .map(|&c| offset_letter(c).to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
