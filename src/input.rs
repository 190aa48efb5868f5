use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{config::CourtBounds, vector::Vector2};

/// Input the game understands, already in court coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { y: f32 },
    PrimaryClick,
}

/// What a terminal event asks of the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Game(InputEvent),
    Quit,
}

/// The terminal cells the court was last drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    area: Rect,
    court_width: f32,
    court_height: f32,
}

impl Viewport {
    pub fn new(area: Rect, bounds: &CourtBounds) -> Self {
        Self {
            area,
            court_width: bounds.width,
            court_height: bounds.height,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Court coordinates of the centre of a cell, if the cell is on the court.
    pub fn to_court(&self, column: u16, row: u16) -> Option<Vector2> {
        if !self.contains(column, row) {
            return None;
        }

        let fx = (column - self.area.x) as f32 + 0.5;
        let fy = (row - self.area.y) as f32 + 0.5;

        Some(Vector2::new(
            fx * self.court_width / self.area.width as f32,
            fy * self.court_height / self.area.height as f32,
        ))
    }
}

pub fn translate(event: &Event, viewport: &Viewport) -> Option<Action> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Game(InputEvent::PrimaryClick)),
            _ => None,
        },
        Event::Mouse(mouse_event) => {
            let point = viewport.to_court(mouse_event.column, mouse_event.row)?;
            match mouse_event.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(Action::Game(InputEvent::PointerMoved { y: point.y }))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(Action::Game(InputEvent::PrimaryClick))
                }
                _ => None,
            }
        }
        _ => None,
    }
}
