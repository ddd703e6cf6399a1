use std::collections::HashSet;

/// One paintable pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintButton {
    Primary,
    Secondary,
}

impl PaintButton {
    pub fn delta(self) -> i16 {
        match self {
            PaintButton::Primary => 1,
            PaintButton::Secondary => -1,
        }
    }
}

/// A single cell mutation requested by a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintCommand {
    pub column: usize,
    pub row: usize,
    pub delta: i16,
}

#[derive(Debug, Default)]
struct ButtonGesture {
    down: bool,
    visited: HashSet<(usize, usize)>,
}

impl ButtonGesture {
    fn begin(&mut self, column: usize, row: usize) -> bool {
        self.down = true;
        self.visited.insert((column, row))
    }

    fn enter(&mut self, column: usize, row: usize) -> bool {
        self.down && self.visited.insert((column, row))
    }

    fn end(&mut self) {
        self.down = false;
        self.visited.clear();
    }
}

/// Turns press/move/release pointer events into cell deltas, touching each
/// cell at most once per continuous press. The two buttons track
/// independent gestures; when both are held and enter a fresh cell, the
/// primary delta is emitted before the secondary one.
#[derive(Debug, Default)]
pub struct GestureTracker {
    primary: ButtonGesture,
    secondary: ButtonGesture,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button_down(
        &mut self,
        button: PaintButton,
        column: usize,
        row: usize,
    ) -> Option<PaintCommand> {
        self.gesture_mut(button).begin(column, row).then(|| PaintCommand {
            column,
            row,
            delta: button.delta(),
        })
    }

    pub fn button_up(&mut self, button: PaintButton) {
        self.gesture_mut(button).end();
    }

    pub fn pointer_moved(&mut self, column: usize, row: usize) -> Vec<PaintCommand> {
        let mut commands = Vec::new();
        for button in [PaintButton::Primary, PaintButton::Secondary] {
            if self.gesture_mut(button).enter(column, row) {
                commands.push(PaintCommand {
                    column,
                    row,
                    delta: button.delta(),
                });
            }
        }
        commands
    }

    fn gesture_mut(&mut self, button: PaintButton) -> &mut ButtonGesture {
        match button {
            PaintButton::Primary => &mut self.primary,
            PaintButton::Secondary => &mut self.secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_down_emits_one_command() {
        let mut tracker = GestureTracker::new();
        let command = tracker.button_down(PaintButton::Primary, 3, 2);
        assert_eq!(
            command,
            Some(PaintCommand {
                column: 3,
                row: 2,
                delta: 1,
            })
        );
    }

    #[test]
    fn test_revisited_cell_is_painted_once_per_gesture() {
        let mut tracker = GestureTracker::new();
        let mut commands = Vec::new();

        commands.extend(tracker.button_down(PaintButton::Primary, 3, 2));
        commands.extend(tracker.pointer_moved(4, 2));
        commands.extend(tracker.pointer_moved(3, 2));
        commands.extend(tracker.pointer_moved(4, 2));
        commands.extend(tracker.pointer_moved(3, 2));

        let touches_3_2 = commands
            .iter()
            .filter(|c| c.column == 3 && c.row == 2)
            .count();
        assert_eq!(touches_3_2, 1);
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_release_ends_the_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.button_down(PaintButton::Primary, 0, 0);
        tracker.button_up(PaintButton::Primary);

        // Moves with no button held emit nothing.
        assert!(tracker.pointer_moved(1, 0).is_empty());

        // A new press over the same cell is a new gesture.
        let command = tracker.button_down(PaintButton::Primary, 0, 0);
        assert!(command.is_some());
    }

    #[test]
    fn test_secondary_button_decrements() {
        let mut tracker = GestureTracker::new();
        let command = tracker.button_down(PaintButton::Secondary, 5, 5).unwrap();
        assert_eq!(command.delta, -1);
    }

    #[test]
    fn test_buttons_track_independent_visited_sets() {
        let mut tracker = GestureTracker::new();
        tracker.button_down(PaintButton::Primary, 2, 2);
        tracker.button_down(PaintButton::Secondary, 8, 1);

        let commands = tracker.pointer_moved(2, 2);
        // Primary already visited (2,2); secondary has not.
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].delta, -1);

        tracker.button_up(PaintButton::Secondary);
        let commands = tracker.pointer_moved(9, 1);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].delta, 1);
    }

    #[test]
    fn test_both_buttons_emit_primary_first() {
        let mut tracker = GestureTracker::new();
        tracker.button_down(PaintButton::Primary, 0, 0);
        tracker.button_down(PaintButton::Secondary, 0, 0);

        let commands = tracker.pointer_moved(1, 0);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].delta, 1);
        assert_eq!(commands[1].delta, -1);
    }
}
