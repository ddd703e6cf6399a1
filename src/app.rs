use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use thiserror::Error;

use crate::{
    constants::{TILE, TIME_SETTINGS},
    gesture::GestureTracker,
    session::ChartSession,
    storage::StorageError,
};

mod event_handlers;
mod render_views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Main,
    ConfirmLoad,
}

struct App {
    session: ChartSession,
    gestures: GestureTracker,
    ui_mode: UiMode,
    status: Option<String>,
    render_needed: bool,
    should_quit: bool,
    fatal: Option<StorageError>,
}

impl App {
    fn new(path: PathBuf) -> Self {
        Self {
            session: ChartSession::new(path),
            gestures: GestureTracker::new(),
            ui_mode: UiMode::Main,
            status: None,
            render_needed: true,
            should_quit: false,
            fatal: None,
        }
    }

    fn open_confirm(&mut self) {
        self.ui_mode = UiMode::ConfirmLoad;
        self.render_needed = true;
    }

    fn close_confirm(&mut self) {
        self.ui_mode = UiMode::Main;
        self.render_needed = true;
    }

    fn in_confirm_modal(&self) -> bool {
        matches!(self.ui_mode, UiMode::ConfirmLoad)
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.render_needed = true;
    }

    /// Maps a terminal position to chart cell coordinates. Positions on or
    /// left of the frame border miss; positions past the chart's far edge
    /// map to out-of-chart cells the grid ignores.
    fn hit_test(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let column = (x.checked_sub(1)? as usize) / TILE.width;
        let row = y.checked_sub(1)? as usize;
        Some((column, row))
    }

    fn modal_rect(&self, terminal_size: Rect) -> Rect {
        let max_width = terminal_size.width.saturating_sub(2).max(1);
        let max_height = terminal_size.height.saturating_sub(2).max(1);

        let modal_width = 40u16.clamp(1, max_width);
        let modal_height = 7u16.clamp(1, max_height);

        let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
        let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

        Rect::new(modal_x, modal_y, modal_width, modal_height)
    }
}

pub fn run_ui(path: PathBuf) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path);
    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_render: Option<Instant> = None;

    let result = loop {
        if app.render_needed && last_render.is_none_or(|at| at.elapsed() >= render_rate) {
            terminal.draw(|f| app.draw_frame(f))?;
            app.render_needed = false;
            last_render = Some(Instant::now());
        }

        if event::poll(Duration::from_millis(TIME_SETTINGS.poll_ms))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_, _) => app.render_needed = true,
                _ => {}
            }
        }

        if let Some(error) = app.fatal.take() {
            break Err(AppError::Storage(error));
        }

        if app.should_quit {
            // The editor saves on the way out, like closing the window did
            // in the original. A fatal load above skips this on purpose.
            break app.session.save().map_err(AppError::Storage);
        }
    };

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
