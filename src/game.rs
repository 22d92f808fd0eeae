use anyhow::Result;
use log::info;

use crate::clock::SystemClock;
use crate::input::Key;
use crate::menu::{self, MainChoice, Menu, MenuEvent};
use crate::session::{Outcome, Session, run_session};
use crate::settings::Settings;
use crate::term::TermManager;

/// Whether the player asked to leave the program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct SnakeGame {
    term: TermManager,
    settings: Settings,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        Ok(SnakeGame { term: TermManager::new()?, settings: Settings::default() })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.clear()
    }

    /// Gives the terminal back to the shell.
    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Runs intro, menus and games until the player exits.
    pub fn run(&mut self) -> Result<()> {
        if self.show_intro()? == Flow::Exit {
            return Ok(());
        }

        loop {
            let choice = match self.pick(menu::main_menu(), None)? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            let flow = match choice {
                MainChoice::Play => self.play()?,
                MainChoice::Settings => self.edit_settings()?,
                MainChoice::Exit => {
                    self.say_goodbye()?;
                    Flow::Exit
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn show_intro(&mut self) -> Result<Flow> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;
        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;

        Ok(if key == Key::Quit { Flow::Exit } else { Flow::Continue })
    }

    fn play(&mut self) -> Result<Flow> {
        self.term.clear()?;
        self.term.set_snake_color(self.settings.color.color());
        self.term.draw_play_area()?;

        let field = self.term.field();
        let mut session = Session::new(field, rand::thread_rng());
        let mut clock = SystemClock::new();
        info!("starting game with {:?}", self.settings);

        let outcome = run_session(&mut session, &mut self.term, &mut clock, self.settings.difficulty.tick_interval())?;
        if outcome == Outcome::Quit {
            return Ok(Flow::Continue);
        }

        let title = if outcome == Outcome::Won {"You won!"} else {"Game over!"};
        self.term.show_message(&[
            title,
            &*format!("Score: {}", session.score()),
            "",
            "Press any key to continue,",
            "or CTRL+C to quit."
        ])?;

        if self.term.read_key_blocking()? == Key::Quit {
            return Ok(Flow::Exit);
        }

        Ok(Flow::Continue)
    }

    fn edit_settings(&mut self) -> Result<Flow> {
        let difficulty = match self.pick(menu::speed_menu(self.settings.difficulty), Some(self.settings.difficulty))? {
            Some(difficulty) => difficulty,
            None => return Ok(Flow::Exit),
        };
        self.settings.difficulty = difficulty;

        let color = match self.pick(menu::color_menu(self.settings.color), Some(self.settings.color))? {
            Some(color) => color,
            None => return Ok(Flow::Exit),
        };
        self.settings.color = color;

        info!("settings changed to {:?}", self.settings);
        Ok(Flow::Continue)
    }

    /// Shows `menu` until an entry is picked. Backing out answers `back`
    /// when given and is ignored otherwise; quitting returns `None`.
    fn pick<T: Copy + PartialEq>(&mut self, mut menu: Menu<T>, back: Option<T>) -> Result<Option<T>> {
        loop {
            self.term.show_menu(menu.title(), &menu.labels(), menu.selected_index())?;

            match menu.handle(self.term.read_key_blocking()?) {
                Some(MenuEvent::Picked(value)) => return Ok(Some(value)),
                Some(MenuEvent::Back) if back.is_some() => return Ok(back),
                Some(MenuEvent::Quit) => return Ok(None),
                _ => {}
            }
        }
    }

    fn say_goodbye(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.show_message(&["SEE YA!", "", "Press any key"])?;
        self.term.read_key_blocking()?;
        Ok(())
    }
}
