use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::{PaintButton, PaintCommand};

use super::App;

fn paint_button(button: MouseButton) -> Option<PaintButton> {
    match button {
        MouseButton::Left => Some(PaintButton::Primary),
        MouseButton::Right => Some(PaintButton::Secondary),
        MouseButton::Middle => None,
    }
}

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if self.in_confirm_modal() {
            self.handle_confirm_key(key);
        } else {
            self.handle_normal_key(key);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_chart(),
            KeyCode::Char('l') | KeyCode::Char('L') => self.open_confirm(),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.session.clear();
                self.set_status("Cleared");
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.close_confirm();
                self.load_chart();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                self.close_confirm();
            }
            _ => {}
        }
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The confirmation modal suspends painting entirely.
        if self.in_confirm_modal() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(button) => {
                if let (Some(paint), Some((column, row))) =
                    (paint_button(button), self.hit_test(mouse.column, mouse.row))
                    && let Some(command) = self.gestures.button_down(paint, column, row)
                {
                    self.apply(command);
                }
            }
            MouseEventKind::Drag(_) => {
                if let Some((column, row)) = self.hit_test(mouse.column, mouse.row) {
                    for command in self.gestures.pointer_moved(column, row) {
                        self.apply(command);
                    }
                }
            }
            MouseEventKind::Up(button) => {
                if let Some(paint) = paint_button(button) {
                    self.gestures.button_up(paint);
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, command: PaintCommand) {
        self.session
            .grid_mut()
            .adjust_level(command.column, command.row, command.delta);
        self.render_needed = true;
    }

    fn save_chart(&mut self) {
        match self.session.save() {
            Ok(()) => self.set_status(format!("Saved {}", self.session.path().display())),
            // A failed save keeps the grid in memory; the user can retry or
            // keep painting.
            Err(error) => self.set_status(format!("Save failed: {}", error)),
        }
    }

    fn load_chart(&mut self) {
        match self.session.load() {
            Ok(()) => self.set_status(format!("Loaded {}", self.session.path().display())),
            // A missing or garbled chart ends the session; the live grid was
            // never touched.
            Err(error) => self.fatal = Some(error),
        }
        self.render_needed = true;
    }
}
