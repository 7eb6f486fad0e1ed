use super::ALPHABET_SIZE;

/// Offsets of the eight cells surrounding a position, row first
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns every in-bounds position touching this one on a `size` x `size`
    /// grid, diagonals included. The position itself is never returned.
    pub fn neighbours(self, size: usize) -> impl Iterator<Item = Position> {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            if row < size && col < size {
                Some(Position { row, col })
            } else {
                None
            }
        })
    }

    /// Checks whether two positions touch (Chebyshev distance of exactly 1)
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

/// Maps `a`..=`z` to 0..26. Anything else has no offset.
pub fn letter_offset(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

pub fn offset_letter(offset: u8) -> char {
    debug_assert!((offset as usize) < ALPHABET_SIZE);
    (b'a' + offset) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_neighbours() {
        let mut n = Position::new(0, 0).neighbours(4).collect::<Vec<_>>();
        n.sort();
        assert_eq!(
            n,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_inner_neighbours() {
        let pos = Position::new(1, 2);
        let n = pos.neighbours(4).collect::<Vec<_>>();
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|p| p.is_adjacent(&pos)));
        assert!(!n.contains(&pos));
    }

    #[test]
    fn test_single_cell_has_no_neighbours() {
        assert_eq!(Position::new(0, 0).neighbours(1).count(), 0);
    }

    #[test]
    fn test_letter_offsets() {
        assert_eq!(letter_offset('a'), Some(0));
        assert_eq!(letter_offset('z'), Some(25));
        assert_eq!(letter_offset('A'), None);
        assert_eq!(letter_offset('-'), None);
        assert_eq!(offset_letter(2), 'c');
    }
}
