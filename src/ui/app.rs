//! Main TUI application state and logic

use crate::calculator::CalculatorState;
use crate::config::Config;
use crate::dispatch::{button_by_name, button_for_input, dispatch, input_for_key, Input};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;

/// Width of the calculator column, in cells
const CALCULATOR_WIDTH: u16 = 44;

/// The main application state
pub struct App {
    /// Current calculator snapshot, replaced on every input
    pub state: CalculatorState,

    /// Heading shown on the display pane
    pub title: String,

    /// Whether mouse clicks reach the keypad
    pub mouse_enabled: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last input dispatched, highlighted on the keypad
    pub last_pressed: Option<Input>,

    /// Keypad button rects from the last render, for mouse hit-testing
    button_areas: FxHashMap<Input, Rect>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            state: CalculatorState::new(),
            title: config.title.clone(),
            mouse_enabled: !config.no_mouse,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_pressed: None,
            button_areas: FxHashMap::default(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }

        Ok(())
    }

    /// Text currently on the display
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Dispatch an input and replace the state with its successor
    pub fn press(&mut self, input: Input) {
        let next = dispatch(&self.state, input);
        tracing::debug!(?input, display = %next.display(), "input dispatched");

        self.status_message = if next.is_error() {
            "Cannot compute that".to_string()
        } else {
            match button_for_input(input) {
                Some(button) => format!("Pressed {}", button.name),
                None => format!("Pressed {:?}", input),
            }
        };
        self.last_pressed = Some(input);
        self.state = next;
    }

    /// Press the keypad button with the given accessible name or label.
    ///
    /// Returns `false` when no such button exists.
    pub fn click(&mut self, name: &str) -> bool {
        match button_by_name(name) {
            Some(button) => {
                self.press(button.input);
                true
            }
            None => false,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Calculator column (top) and status bar (bottom)
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(CALCULATOR_WIDTH),
                Constraint::Fill(1),
            ])
            .split(main_chunks[0]);

        // Display (expression line + value line) above the keypad
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[1]);

        let value = self.state.display();
        let expression = self.state.expression();
        super::panes::render_display_pane(
            frame,
            rows[0],
            &self.title,
            &super::panes::DisplayRenderData {
                value: &value,
                expression: &expression,
                is_error: self.state.is_error(),
            },
        );

        super::panes::render_keypad_pane(
            frame,
            rows[1],
            self.last_pressed,
            &mut self.button_areas,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                pending_operator: self.state.pending_operator(),
                is_error: self.state.is_error(),
                mouse_enabled: self.mouse_enabled,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q')
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                if let Some(input) = input_for_key(key) {
                    self.press(input);
                }
            }
        }
    }

    /// Handle mouse events: a left click on a keypad button presses it
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position {
            x: mouse.column,
            y: mouse.row,
        };
        let hit = self
            .button_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(input, _)| *input);

        if let Some(input) = hit {
            self.press(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keyboard_drives_state() {
        let mut app = App::new(&Config::default());
        for code in [
            KeyCode::Char('7'),
            KeyCode::Char('/'),
            KeyCode::Char('2'),
            KeyCode::Enter,
        ] {
            app.handle_key_event(key(code));
        }
        assert_eq!(app.display(), "3.5");
        assert_eq!(app.status_message, "Pressed equals");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Config::default());
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(&Config::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&Config::default());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_error_status_message() {
        let mut app = App::new(&Config::default());
        for name in ["7", "divide", "0", "equals"] {
            assert!(app.click(name));
        }
        assert_eq!(app.display(), "Error");
        assert_eq!(app.status_message, "Cannot compute that");
        assert!(!app.click("square root"));
    }

    #[test]
    fn test_render_shows_display_and_keypad() {
        let mut app = App::new(&Config::default());
        for name in ["1", "2", "add"] {
            app.click(name);
        }
        let screen = draw(&mut app).join("\n");

        assert!(screen.contains("Калькулятор"));
        assert!(screen.contains("12 +"));
        assert!(screen.contains("AC"));
        assert_eq!(app.button_areas.len(), 21);
    }

    #[test]
    fn test_render_error_state() {
        let mut app = App::new(&Config::default());
        for name in ["5", "divide", "0", "equals"] {
            app.click(name);
        }
        let screen = draw(&mut app).join("\n");
        assert!(screen.contains("Error"));
        assert!(screen.contains("ERROR"));
    }

    #[test]
    fn test_mouse_click_presses_button() {
        let mut app = App::new(&Config::default());
        draw(&mut app);

        let seven = app
            .button_areas
            .get(&Input::Digit(crate::calculator::Digit::new(7).unwrap()))
            .copied()
            .unwrap();
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: seven.x + seven.width / 2,
            row: seven.y + seven.height / 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_mouse_disabled() {
        let config = Config {
            no_mouse: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        draw(&mut app);

        let area = app.button_areas.values().next().copied().unwrap();
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.state, CalculatorState::new());
        assert_eq!(app.last_pressed, None);
    }
}
