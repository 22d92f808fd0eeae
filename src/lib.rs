pub mod clock;
pub mod collision;
pub mod game;
pub mod input;
pub mod menu;
pub mod pellet;
pub mod session;
pub mod settings;
pub mod snake;
pub mod term;

use snake::Direction;

/// Terminal cell coordinate type, as used by crossterm.
pub type TermInt = u16;
/// Terminal position as (x, y).
pub type Coords = (TermInt, TermInt);

/// A single grid cell of the play field. Row 0 is the top border,
/// column 0 the left border.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub row: i32,
    pub col: i32,
}

impl Segment {
    pub fn new(row: i32, col: i32) -> Self {
        Segment { row, col }
    }

    /// The cell one stride away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.stride();
        Segment { row: self.row + d_row, col: self.col + d_col }
    }
}

/// Play field dimensions. The outermost ring of cells is the border.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub height: i32,
    pub width: i32,
}

impl Field {
    pub fn new(height: i32, width: i32) -> Self {
        Field { height, width }
    }

    /// Starting cell for a new snake: the middle row and the odd column
    /// nearest the horizontal center, so horizontal strides stay on the
    /// same column parity as pellets.
    pub fn center(&self) -> Segment {
        Segment::new(self.height / 2, (self.width / 2) | 1)
    }

    pub fn contains(&self, pos: Segment) -> bool {
        pos.row >= 0 && pos.col >= 0 && pos.row < self.height && pos.col < self.width
    }
}
