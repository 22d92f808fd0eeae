use crate::input::Key;
use crate::settings::{Difficulty, SnakeColor};
use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Play,
    Settings,
    Exit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent<T> {
    Picked(T),
    Back,
    Quit,
}

/// A vertical list of labelled choices with one highlighted entry.
/// Moving past either end is ignored.
pub struct Menu<T: Copy> {
    title: &'static str,
    entries: Vec<(&'static str, T)>,
    selected: usize,
}

impl<T: Copy + PartialEq> Menu<T> {
    pub fn new(title: &'static str, entries: Vec<(&'static str, T)>) -> Self {
        Menu { title, entries, selected: 0 }
    }

    /// Highlights the entry holding `value`, if any.
    pub fn with_selected(mut self, value: T) -> Self {
        if let Some(i) = self.entries.iter().position(|(_, v)| *v == value) {
            self.selected = i;
        }
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(label, _)| *label).collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> T {
        self.entries[self.selected].1
    }

    pub fn up(&mut self) {
        if self.selected != 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn handle(&mut self, key: Key) -> Option<MenuEvent<T>> {
        match key {
            Key::Dir(Direction::Up) => self.up(),
            Key::Dir(Direction::Down) => self.down(),
            Key::Select => return Some(MenuEvent::Picked(self.selected())),
            Key::Pause => return Some(MenuEvent::Back),
            Key::Quit => return Some(MenuEvent::Quit),
            _ => {}
        }

        None
    }
}

pub fn main_menu() -> Menu<MainChoice> {
    Menu::new("SNAKE", vec![
        ("Play Snake!", MainChoice::Play),
        ("Settings!", MainChoice::Settings),
        ("Exit Snake!", MainChoice::Exit),
    ])
}

pub fn speed_menu(current: Difficulty) -> Menu<Difficulty> {
    let entries = Difficulty::ALL.iter().map(|d| (d.label(), *d)).collect();
    Menu::new("Speed", entries).with_selected(current)
}

pub fn color_menu(current: SnakeColor) -> Menu<SnakeColor> {
    let entries = SnakeColor::ALL.iter().map(|c| (c.label(), *c)).collect();
    Menu::new("Color", entries).with_selected(current)
}
