use crate::Field;
use crate::snake::Snake;

/// True when the head sits on the border ring or beyond it.
pub fn is_out_of_bounds(snake: &Snake, field: Field) -> bool {
    let head = snake.head();
    head.row <= 0 || head.row >= field.height - 1 || head.col <= 0 || head.col >= field.width - 1
}

/// True when the head shares a cell with any other segment.
pub fn is_self_collision(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body()[1..].contains(&head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;
    use crate::snake::Direction::*;

    const FIELD: Field = Field { height: 20, width: 40 };

    fn at(row: i32, col: i32) -> Snake {
        Snake::new(Segment::new(row, col), 1, Right)
    }

    #[test]
    fn border_ring_is_out_of_bounds() {
        assert!(is_out_of_bounds(&at(0, 11), FIELD));
        assert!(is_out_of_bounds(&at(19, 11), FIELD));
        assert!(is_out_of_bounds(&at(10, 0), FIELD));
        assert!(is_out_of_bounds(&at(10, 39), FIELD));
        assert!(is_out_of_bounds(&at(10, -1), FIELD));
        assert!(is_out_of_bounds(&at(10, 41), FIELD));
    }

    #[test]
    fn interior_is_in_bounds() {
        for row in 1..19 {
            for col in 1..39 {
                assert!(!is_out_of_bounds(&at(row, col), FIELD), "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn fresh_snakes_do_not_collide_with_themselves() {
        assert!(!is_self_collision(&Snake::new(Segment::new(5, 5), 1, Right)));
        assert!(!is_self_collision(&Snake::new(Segment::new(5, 5), 2, Up)));
    }

    #[test]
    fn coiled_snake_collides() {
        // Head at (5, 5) folded back onto the last segment.
        let snake = Snake::from_segments(vec![
            Segment::new(5, 5),
            Segment::new(5, 7),
            Segment::new(6, 7),
            Segment::new(5, 5),
        ])
        .unwrap();
        assert!(is_self_collision(&snake));
    }

    #[test]
    fn turning_into_the_body_collides_after_advance() {
        let mut snake = Snake::from_segments(vec![
            Segment::new(5, 5),
            Segment::new(5, 3),
            Segment::new(6, 3),
            Segment::new(6, 5),
            Segment::new(6, 7),
        ])
        .unwrap();
        snake.advance(Down);
        assert!(is_self_collision(&snake));
    }
}
