use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use crate::{Field, Segment};
use crate::clock::Clock;
use crate::collision::{is_out_of_bounds, is_self_collision};
use crate::input::Key;
use crate::pellet;
use crate::snake::{Direction::{self, *}, Snake};

/// Delay between two passes of the loop, whether or not the snake moved.
pub const POLL_DELAY: Duration = Duration::from_millis(10);
pub const PELLET_POINTS: u64 = 100;
pub const INITIAL_SNAKE_LENGTH: usize = 2;

/// What a cell of the field shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Head(Direction),
    Body,
    Pellet,
    Wreck,
}

/// Drawing and input surface the game loop talks to. Positions are field
/// cells; mapping them to the screen is up to the implementor.
pub trait Surface {
    fn draw_char(&mut self, pos: Segment, glyph: Glyph) -> Result<()>;
    fn clear_cell(&mut self, pos: Segment) -> Result<()>;
    /// Next pending key, without waiting for one.
    fn read_key(&mut self) -> Result<Option<Key>>;
    fn set_score(&mut self, score: u64) -> Result<()>;
    fn set_paused(&mut self, paused: bool) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Kept for symmetry with `Lost`; no rule produces it yet.
    Won,
    Lost,
}

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// What changed during one tick, for incremental redraws.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ate: bool,
    /// Cell the tail left behind. `None` on growth ticks.
    pub vacated: Option<Segment>,
    /// Pellet placed during this tick.
    pub spawned: Option<Segment>,
}

/// One game from first move to game over.
pub struct Session<R: Rng> {
    field: Field,
    snake: Snake,
    pellet: Option<Segment>,
    /// Direction of the last executed move.
    heading: Direction,
    /// Direction the next move will take.
    direction: Direction,
    score: u64,
    state: GameState,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(field: Field, rng: R) -> Self {
        let snake = Snake::new(field.center(), INITIAL_SNAKE_LENGTH, Right);
        Self::with_snake(field, snake, Right, rng)
    }

    pub fn with_snake(field: Field, snake: Snake, heading: Direction, mut rng: R) -> Self {
        let pellet = pellet::spawn(&mut rng, &snake, field);

        Session {
            field,
            snake,
            pellet,
            heading,
            direction: heading,
            score: 0,
            state: GameState::Running,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn pellet(&self) -> Option<Segment> {
        self.pellet
    }

    /// Replaces the current pellet, e.g. to stage a position in tests.
    pub fn place_pellet(&mut self, pos: Option<Segment>) {
        self.pellet = pos;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Queues `dir` for the next move unless it would reverse the last
    /// executed move. Returns whether the direction was accepted.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.heading.opposite() {
            return false;
        }

        self.direction = dir;
        true
    }

    /// Moves the session to `Lost` if the head is on or past the border.
    pub fn check_bounds(&mut self) -> bool {
        if is_out_of_bounds(&self.snake, self.field) {
            self.state = GameState::Lost;
            return true;
        }

        false
    }

    /// Eats a pellet under the head if there is one, moves the snake and
    /// checks for self-collision.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        if let Some(pos) = self.pellet {
            if pellet::collect_if_eaten(&self.snake, pos) {
                self.score += PELLET_POINTS;
                self.snake.grow();
                self.pellet = pellet::spawn(&mut self.rng, &self.snake, self.field);

                report.ate = true;
                report.spawned = self.pellet;
                debug!("pellet eaten at {:?}, score {}, next pellet {:?}", pos, self.score, self.pellet);
            }
        }

        let old_tail = self.snake.tail();
        self.snake.advance(self.direction);
        self.heading = self.direction;

        if !report.ate {
            report.vacated = Some(old_tail);
        }

        if is_self_collision(&self.snake) {
            self.state = GameState::Lost;
        }

        report
    }
}

/// Runs the session until it is lost or the player quits. `interval` is
/// the time between two moves.
///
/// Ticks are decided by comparing the time since the last tick with the
/// interval, so a long stall yields a single late tick rather than a burst.
pub fn run_session<R, S, C>(session: &mut Session<R>, surface: &mut S, clock: &mut C, interval: Duration) -> Result<Outcome>
where
    R: Rng,
    S: Surface,
    C: Clock,
{
    info!("session started: field {}x{}, tick {:?}", session.field.height, session.field.width, interval);
    draw_all(session, surface)?;

    let mut last_tick = clock.now();
    let mut paused = false;

    loop {
        let now = clock.now();

        if session.check_bounds() {
            return finish(session, surface, Outcome::Lost);
        }

        while let Some(key) = surface.read_key()? {
            match key {
                Key::Dir(dir) if !paused => {
                    session.steer(dir);
                }
                Key::Pause => {
                    paused = !paused;
                    debug!("paused: {}", paused);
                    surface.set_paused(paused)?;
                }
                Key::Quit => return finish(session, surface, Outcome::Quit),
                _ => {}
            }
        }

        if paused {
            last_tick = now;
        } else if now.saturating_sub(last_tick) >= interval {
            let report = session.tick();
            draw_tick(session, surface, &report)?;

            if session.state == GameState::Lost {
                return finish(session, surface, Outcome::Lost);
            }

            last_tick = now;
        }

        clock.sleep(POLL_DELAY);
    }
}

fn finish<R: Rng, S: Surface>(session: &Session<R>, surface: &mut S, outcome: Outcome) -> Result<Outcome> {
    info!("session over: {:?}, score {}, length {}", outcome, session.score, session.snake.len());

    if outcome == Outcome::Lost {
        for pos in session.snake.body() {
            surface.draw_char(*pos, Glyph::Wreck)?;
        }
        surface.present()?;
    }

    Ok(outcome)
}

fn draw_all<R: Rng, S: Surface>(session: &Session<R>, surface: &mut S) -> Result<()> {
    if let Some(pos) = session.pellet {
        surface.draw_char(pos, Glyph::Pellet)?;
    }

    // Tail first so the head ends up on top of any stacked segments
    for (i, pos) in session.snake.body().iter().enumerate().rev() {
        let glyph = if i == 0 { Glyph::Head(session.heading) } else { Glyph::Body };
        surface.draw_char(*pos, glyph)?;
    }

    surface.set_score(session.score)?;
    surface.present()
}

fn draw_tick<R: Rng, S: Surface>(session: &Session<R>, surface: &mut S, report: &TickReport) -> Result<()> {
    if let Some(pos) = report.vacated {
        surface.clear_cell(pos)?;
    }

    if let Some(pos) = report.spawned {
        surface.draw_char(pos, Glyph::Pellet)?;
    }

    if report.ate {
        surface.set_score(session.score)?;
    }

    let body = session.snake.body();
    if body.len() > 1 {
        surface.draw_char(body[1], Glyph::Body)?;
    }
    surface.draw_char(body[0], Glyph::Head(session.heading))?;

    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FIELD: Field = Field { height: 20, width: 40 };

    fn session_with(snake: Snake, heading: Direction) -> Session<StdRng> {
        Session::with_snake(FIELD, snake, heading, StdRng::seed_from_u64(5))
    }

    #[test]
    fn new_session_starts_centered_with_a_pellet() {
        let session = Session::new(FIELD, StdRng::seed_from_u64(1));
        assert_eq!(session.snake().head(), FIELD.center());
        assert_eq!(session.snake().len(), INITIAL_SNAKE_LENGTH);
        assert_eq!(session.state(), GameState::Running);
        assert_eq!(session.score(), 0);

        let pellet = session.pellet().unwrap();
        assert!(!session.snake().occupies(pellet));
    }

    #[test]
    fn reversal_is_rejected() {
        let mut session = session_with(Snake::new(Segment::new(10, 21), 2, Right), Right);
        assert!(!session.steer(Left));
        assert_eq!(session.direction(), Right);

        assert!(session.steer(Up));
        // Still heading right until the next tick, so Left stays forbidden
        assert!(!session.steer(Left));
        assert_eq!(session.direction(), Up);

        session.tick();
        assert_eq!(session.heading(), Up);
        assert!(session.steer(Left));
    }

    #[test]
    fn five_ticks_right_from_the_center() {
        let mut session = session_with(Snake::new(FIELD.center(), 1, Right), Right);
        session.place_pellet(None);
        let start = session.snake().head();

        for _ in 0..5 {
            assert!(!session.check_bounds());
            session.tick();
        }

        assert!(!session.check_bounds());
        assert_eq!(session.snake().head(), Segment::new(start.row, start.col + 10));
        assert_eq!(session.state(), GameState::Running);
    }

    #[test]
    fn eating_scores_grows_and_respawns() {
        let head = Segment::new(10, 21);
        let mut session = session_with(Snake::new(head, 2, Right), Right);
        session.place_pellet(Some(head));

        let report = session.tick();

        assert!(report.ate);
        assert_eq!(report.vacated, None);
        assert_eq!(session.score(), PELLET_POINTS);
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().body(), &[Segment::new(10, 23), head, Segment::new(10, 19)]);

        let next = session.pellet().unwrap();
        assert_eq!(report.spawned, Some(next));
        assert!(!session.snake().body()[1..].contains(&next));
    }

    #[test]
    fn ordinary_tick_vacates_the_tail() {
        let mut session = session_with(Snake::new(Segment::new(10, 21), 3, Right), Right);
        session.place_pellet(None);

        let report = session.tick();
        assert!(!report.ate);
        assert_eq!(report.vacated, Some(Segment::new(10, 17)));
        assert_eq!(report.spawned, None);
    }

    #[test]
    fn running_into_the_body_is_lost() {
        let snake = Snake::from_segments(vec![
            Segment::new(5, 5),
            Segment::new(5, 3),
            Segment::new(6, 3),
            Segment::new(6, 5),
            Segment::new(6, 7),
        ])
        .unwrap();
        let mut session = session_with(snake, Left);
        session.place_pellet(None);

        assert!(session.steer(Down));
        session.tick();
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn bounds_are_checked_for_single_segment_snakes() {
        let mut session = session_with(Snake::new(Segment::new(10, 1), 1, Left), Left);
        session.place_pellet(None);

        assert!(!session.check_bounds());
        session.tick();
        assert!(session.check_bounds());
        assert_eq!(session.state(), GameState::Lost);
    }
}
