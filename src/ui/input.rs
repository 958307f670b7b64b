use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::ui::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    NextDoha,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Some(AppMessage::NextDoha),
            _ => None,
        }
    }

    /// Left press inside the button region requests the next doha; any
    /// other mouse activity is ignored.
    pub fn handle_mouse(mouse: MouseEvent, frame_area: Rect) -> Option<AppMessage> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }
        let button = layout::regions(frame_area).button;
        button
            .contains(Position::new(mouse.column, mouse.row))
            .then_some(AppMessage::NextDoha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn space_and_enter_request_the_next_doha() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' '))),
            Some(AppMessage::NextDoha)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter)),
            Some(AppMessage::NextDoha)
        );
    }

    #[test]
    fn quit_bindings() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q'))),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc)),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(AppMessage::Quit)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(InputHandler::handle_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn click_on_the_button_requests_the_next_doha() {
        let area = Rect::new(0, 0, 80, 24);
        let button = crate::ui::layout::regions(area).button;
        let inside = click(button.x + 1, button.y + 1);
        assert_eq!(
            InputHandler::handle_mouse(inside, area),
            Some(AppMessage::NextDoha)
        );
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(InputHandler::handle_mouse(click(0, 0), area), None);
    }

    #[test]
    fn non_left_press_is_ignored() {
        let area = Rect::new(0, 0, 80, 24);
        let button = crate::ui::layout::regions(area).button;
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: button.x + 1,
            row: button.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(InputHandler::handle_mouse(scroll, area), None);
    }
}
