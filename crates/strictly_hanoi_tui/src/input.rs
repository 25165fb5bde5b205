//! Terminal events to game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_hanoi::{Interaction, PegId};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward a pointer interaction to the session.
    Interact(Interaction),
    /// Restart with one more disk.
    MoreDisks,
    /// Restart with one fewer disk.
    FewerDisks,
    /// Restart with the same disk count.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a terminal event, resolving mouse cells to pegs with `resolve`.
pub fn map_event(event: &Event, resolve: impl Fn(u16, u16) -> Option<PegId>) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, resolve),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::MoreDisks,
        KeyCode::Char('-') => Command::FewerDisks,
        // Keys act as taps: one click, no press.
        KeyCode::Char(c @ '1'..='3') => {
            let peg = c
                .to_digit(10)
                .and_then(|n| u8::try_from(n).ok())
                .and_then(PegId::from_number);
            Command::Interact(Interaction::PointerClick(peg))
        }
        _ => return None,
    };
    Some(command)
}

fn map_mouse(mouse: &MouseEvent, resolve: impl Fn(u16, u16) -> Option<PegId>) -> Option<Command> {
    let peg = || resolve(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(Command::Interact(Interaction::PointerDown(peg())))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(Command::Interact(Interaction::PointerClick(peg())))
        }
        _ => None,
    }
}
