use crate::{Coords, Field, Segment, TermInt};
use crate::input::Key;
use crate::session::{Glyph, Surface};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result, bail};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::{Attribute, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};

/// Rows reserved above the field for the score panel.
pub const SCORE_PANEL_HEIGHT: TermInt = 3;
const SCORE_PANEL_WIDTH: TermInt = 17;
pub const MIN_WIDTH: TermInt = 40;
pub const MIN_HEIGHT: TermInt = 15;

const SNAKE_BODY_CHAR: char = '█';
const PELLET_CHAR: char = 'O';
const WRECK_CHAR: char = 'X';

#[derive(Copy, Clone, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell { ch: ' ', color: Color::Reset };

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<Cell>,
    current_msg: Option<Message>,
    snake_color: Color,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("failed to read terminal size")?;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            bail!("terminal is {}x{}, need at least {}x{}", width, height, MIN_WIDTH, MIN_HEIGHT);
        }

        let stdout = stdout();
        let screen = vec![BLANK; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None, snake_color: Color::Green })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("failed to hide cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking).context("failed to show cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("failed to leave alternate screen")?;
        Ok(())
    }

    /// Play field below the score panel, border included.
    pub fn field(&self) -> Field {
        Field::new((self.height - SCORE_PANEL_HEIGHT) as i32, self.width as i32)
    }

    pub fn set_snake_color(&mut self, color: Color) {
        self.snake_color = color;
    }

    pub fn read_key_blocking(&self) -> Result<Key> {
        loop {
            if let Event::Key(ev) = read().context("failed to read terminal event")? {
                return Ok(Key::from(ev));
            }
        }
    }

    pub fn poll_key(&self) -> Result<Option<Key>> {
        while poll(Duration::from_millis(0)).context("failed to poll terminal events")? {
            if let Event::Key(ev) = read().context("failed to read terminal event")? {
                return Ok(Some(Key::from(ev)));
            }
        }

        Ok(None)
    }

    /// Draws the field border and the empty score panel.
    pub fn draw_play_area(&mut self) -> Result<()> {
        let field = self.field();
        self.draw_box((0, SCORE_PANEL_HEIGHT), (field.width as TermInt, field.height as TermInt))?;

        let panel_x = (self.width - SCORE_PANEL_WIDTH) / 2;
        self.draw_box((panel_x, 0), (SCORE_PANEL_WIDTH, SCORE_PANEL_HEIGHT))?;
        self.flush()
    }

    /// Draws a titled vertical menu in the middle of the screen, the
    /// selected entry in reverse video.
    pub fn show_menu(&mut self, title: &str, labels: &[&str], selected: usize) -> Result<()> {
        self.clear()?;
        self.draw_box((0, 0), (self.width, self.height))?;

        let top = (self.height / 2).saturating_sub(labels.len() as TermInt + 1);
        self.print_centered(top, title)?;

        for (i, label) in labels.iter().enumerate() {
            let y = top + 2 + 2 * i as TermInt;
            if i == selected {
                queue!(self.stdout, style::SetAttribute(Attribute::Reverse))?;
                self.print_centered(y, label)?;
                queue!(self.stdout, style::SetAttribute(Attribute::Reset))?;
            } else {
                self.print_centered(y, label)?;
            }
        }

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush()
    }

    /// Removes the message box, restoring what was drawn beneath it.
    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                if let Some(cell) = self.cell(x, y) {
                    queue!(self.stdout, cursor::MoveTo(x, y), style::SetForegroundColor(cell.color), style::Print(cell.ch), style::ResetColor)?;
                }
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char, color: Color) -> Result<()> {
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }

        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(ch), style::ResetColor)?;
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = Cell { ch, color };
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.current_msg = None;
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("failed to clear screen")?;
        self.screen = vec![BLANK; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("failed to flush stdout")
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn cell(&self, x: TermInt, y: TermInt) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.screen[self.width as usize * y as usize + x as usize])
        } else {
            None
        }
    }

    fn to_screen(&self, pos: Segment) -> Option<Coords> {
        if self.field().contains(pos) {
            Some((pos.col as TermInt, pos.row as TermInt + SCORE_PANEL_HEIGHT))
        } else {
            None
        }
    }

    fn draw_box(&mut self, top_left: Coords, size: Coords) -> Result<()> {
        let (x0, y0) = top_left;
        let (width, height) = size;
        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        for x in x0..=end_x {
            let ch = if x == x0 || x == end_x {'+'} else {'-'};
            self.print_at((x, y0), ch, Color::Reset)?;
            self.print_at((x, end_y), ch, Color::Reset)?;
        }

        for y in y0 + 1..end_y {
            self.print_at((x0, y), '|', Color::Reset)?;
            self.print_at((end_x, y), '|', Color::Reset)?;
        }

        Ok(())
    }

    fn print_centered(&mut self, y: TermInt, text: &str) -> Result<()> {
        let x = (self.width / 2).saturating_sub(text.chars().count() as TermInt / 2);
        for (i, ch) in text.chars().enumerate() {
            self.print_at((x + i as TermInt, y), ch, Color::Reset)?;
        }
        Ok(())
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn glyph_cell(&self, glyph: Glyph) -> Cell {
        match glyph {
            Glyph::Head(dir) => Cell { ch: dir.head_char(), color: self.snake_color },
            Glyph::Body => Cell { ch: SNAKE_BODY_CHAR, color: self.snake_color },
            Glyph::Pellet => Cell { ch: PELLET_CHAR, color: Color::Reset },
            Glyph::Wreck => Cell { ch: WRECK_CHAR, color: Color::Reset },
        }
    }
}

impl Surface for TermManager {
    fn draw_char(&mut self, pos: Segment, glyph: Glyph) -> Result<()> {
        if let Some(coords) = self.to_screen(pos) {
            let cell = self.glyph_cell(glyph);
            self.print_at(coords, cell.ch, cell.color)?;
        }
        Ok(())
    }

    fn clear_cell(&mut self, pos: Segment) -> Result<()> {
        match self.to_screen(pos) {
            Some(coords) => self.print_at(coords, ' ', Color::Reset),
            None => Ok(()),
        }
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        self.poll_key()
    }

    fn set_score(&mut self, score: u64) -> Result<()> {
        let text = format!("SCORE: {:<8}", score);
        let x = (self.width - SCORE_PANEL_WIDTH) / 2 + 1;
        for (i, ch) in text.chars().take(SCORE_PANEL_WIDTH as usize - 2).enumerate() {
            self.print_at((x + i as TermInt, 1), ch, Color::Reset)?;
        }
        Ok(())
    }

    fn set_paused(&mut self, paused: bool) -> Result<()> {
        if paused {
            self.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])
        } else {
            self.hide_message()
        }
    }

    fn present(&mut self) -> Result<()> {
        self.flush()
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}
