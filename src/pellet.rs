use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Field, Segment};
use crate::snake::Snake;

/// Rejected draws tolerated before falling back to sampling the free cells.
const MAX_REJECTED_DRAWS: usize = 64;

/// Number of odd interior columns (1, 3, 5, ...) strictly inside the
/// border. For an even width the last interior column is even and gets
/// skipped; for an odd width it is odd and included. Both reduce to
/// `(width - 1) / 2`.
fn aligned_columns(field: Field) -> i32 {
    ((field.width - 1) / 2).max(0)
}

/// Picks a pellet cell inside the border, on an odd column, that the snake
/// does not occupy.
///
/// Draws uniformly and rejects occupied cells. While the board is sparse
/// this almost always succeeds in a couple of draws; after
/// `MAX_REJECTED_DRAWS` misses the free cells are listed and one is chosen
/// uniformly, so a crowded board still terminates. Returns `None` when
/// no aligned cell is free.
pub fn spawn<R: Rng>(rng: &mut R, snake: &Snake, field: Field) -> Option<Segment> {
    let columns = aligned_columns(field);
    if field.height < 3 || columns == 0 {
        return None;
    }

    for _ in 0..MAX_REJECTED_DRAWS {
        let row = rng.gen_range(1..=field.height - 2);
        let col = 2 * rng.gen_range(0..columns) + 1;
        let candidate = Segment::new(row, col);

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Segment> = free_cells(field)
        .filter(|pos| !snake.occupies(*pos))
        .collect();
    free.choose(rng).copied()
}

/// True when the head has reached the pellet.
pub fn collect_if_eaten(snake: &Snake, pellet: Segment) -> bool {
    snake.head() == pellet
}

fn free_cells(field: Field) -> impl Iterator<Item = Segment> {
    let columns = aligned_columns(field);
    (1..field.height - 1).flat_map(move |row| (0..columns).map(move |k| Segment::new(row, 2 * k + 1)))
}
