//! Terminal input handling.
//!
//! Maps crossterm events to logical game inputs and buffers them until the
//! next frame drains the queue.

use crate::sim::GameInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::collections::VecDeque;

/// Result of handling a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// A game input to queue for the next frame.
    Game(GameInput),
    /// Leave the game loop.
    Quit,
    /// Not bound to anything.
    Ignored,
}

/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> InputResult {
    // Releases only arrive on terminals with enhanced keyboard reporting.
    if key.kind == KeyEventKind::Release {
        return InputResult::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            InputResult::Game(GameInput::Flap)
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            InputResult::Game(GameInput::Reset)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
        _ => InputResult::Ignored,
    }
}

/// Map any terminal event. A left mouse press counts as a flap.
pub fn map_event(event: &Event) -> InputResult {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            InputResult::Game(GameInput::Flap)
        }
        _ => InputResult::Ignored,
    }
}

/// FIFO of inputs received between frames.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<GameInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: GameInput) {
        self.pending.push_back(input);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending input in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = GameInput> + '_ {
        self.pending.drain(..)
    }
}
