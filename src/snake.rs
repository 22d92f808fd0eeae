use crate::Segment;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Row and column offsets for one move. Horizontal moves cover two
    /// columns because terminal cells are about twice as tall as wide.
    pub fn stride(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -2),
            Right => (0, 2),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Segment>,
}

impl Snake {
    /// Builds a snake of `size` segments with its head at `head`, the rest
    /// trailing behind it as if it had been moving towards `direction`.
    pub fn new(head: Segment, size: usize, direction: Direction) -> Self {
        let behind = direction.opposite();
        let mut body = Vec::with_capacity(size.max(1));
        let mut pos = head;

        for _ in 0..size.max(1) {
            body.push(pos);
            pos = pos.step(behind);
        }

        Snake { body }
    }

    /// Snake made of exactly the given segments, head first.
    /// Returns `None` for an empty body.
    pub fn from_segments(body: Vec<Segment>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    pub fn head(&self) -> Segment {
        self.body[0]
    }

    pub fn tail(&self) -> Segment {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Segment) -> bool {
        self.body.contains(&pos)
    }

    /// Every segment takes its predecessor's old place, walking from the
    /// tail towards the head, then the head moves one stride.
    pub fn advance(&mut self, direction: Direction) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        self.body[0] = self.body[0].step(direction);
    }

    /// Appends a copy of the current tail. The next `advance` leaves the
    /// copy in place while the rest of the body moves, so the snake ends up
    /// one segment longer.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(row: i32, col: i32) -> Segment {
        Segment::new(row, col)
    }

    #[test]
    fn new_snake_trails_behind_the_head() {
        let snake = Snake::new(seg(5, 11), 3, Right);
        assert_eq!(snake.body(), &[seg(5, 11), seg(5, 9), seg(5, 7)]);

        let snake = Snake::new(seg(5, 11), 2, Up);
        assert_eq!(snake.body(), &[seg(5, 11), seg(6, 11)]);
    }

    #[test]
    fn zero_size_still_has_a_head() {
        let snake = Snake::new(seg(3, 3), 0, Left);
        assert_eq!(snake.len(), 1);
        assert!(Snake::from_segments(vec![]).is_none());
    }

    #[test]
    fn advance_moves_head_by_stride_and_body_follows() {
        for &dir in &[Up, Down, Left, Right] {
            let mut snake = Snake::from_segments(vec![seg(10, 11), seg(10, 9), seg(11, 9), seg(12, 9)]).unwrap();
            let before = snake.body().to_vec();
            let (d_row, d_col) = dir.stride();

            snake.advance(dir);

            assert_eq!(snake.head(), seg(before[0].row + d_row, before[0].col + d_col));
            for i in 1..before.len() {
                assert_eq!(snake.body()[i], before[i - 1]);
            }
        }
    }

    #[test]
    fn horizontal_stride_is_two_columns() {
        assert_eq!(Left.stride(), (0, -2));
        assert_eq!(Right.stride(), (0, 2));
        assert_eq!(Up.stride(), (-1, 0));
        assert_eq!(Down.stride(), (1, 0));
    }

    #[test]
    fn grow_then_advance_keeps_old_tail() {
        let mut snake = Snake::new(seg(4, 7), 2, Right);
        let old_tail = snake.tail();

        snake.grow();
        assert_eq!(snake.len(), 3);
        snake.advance(Right);

        assert_eq!(snake.body(), &[seg(4, 9), seg(4, 7), old_tail]);
    }

    #[test]
    fn single_segment_grows_behind_the_head() {
        let mut snake = Snake::new(seg(4, 7), 1, Down);
        snake.grow();
        snake.advance(Down);
        assert_eq!(snake.body(), &[seg(5, 7), seg(4, 7)]);
    }

    #[test]
    fn opposites() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite().opposite(), Right);
    }
}
