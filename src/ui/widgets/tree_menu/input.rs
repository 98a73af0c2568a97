//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to tree actions and runs the terminal
//! loop that feeds them to a [`TreeMenu`].

use std::io::{self, Stdout, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::TotuiResult;

use super::menu::{TreeAction, TreeMenu};

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    match key.code {
        KeyCode::Up => Some(TreeAction::Up),
        KeyCode::Down => Some(TreeAction::Down),
        KeyCode::Enter => Some(TreeAction::Toggle),
        _ => None,
    }
}

/// Keys that end the interactive loop: `q`, `Esc` and `Ctrl+C`
pub fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Host-side state drawn next to the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameState {
    /// Last selection callback failure, cleared by the next handled key
    pub error: Option<String>,
}

/// Restores the terminal when dropped, on every exit path
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { stdout })
    }

    fn paint(&mut self, frame: &str) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // Raw mode: lines need an explicit carriage return.
        for line in frame.lines() {
            write!(self.stdout, "{}\r\n", line)?;
        }
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, execute, terminal};

        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the tree menu interactively until a quit key is pressed
///
/// `draw` composes the whole screen from the menu and the host state. Failed
/// selection callbacks are logged and surfaced through [`FrameState::error`];
/// they never end the loop.
pub fn run_interactive<F>(menu: &mut TreeMenu, mut draw: F) -> TotuiResult<()>
where
    F: FnMut(&TreeMenu, &FrameState) -> String,
{
    use crossterm::event::{self, Event, KeyEventKind};

    let mut terminal = TerminalGuard::enter()?;
    let mut state = FrameState::default();
    terminal.paint(&draw(menu, &state))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(key) {
                    break;
                }
                let Some(action) = key_to_action(key) else {
                    continue;
                };

                match menu.handle_action(action) {
                    Ok(changed) => {
                        let had_error = state.error.take().is_some();
                        if !changed && !had_error {
                            continue;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "selection callback failed");
                        state.error = Some(err.to_string());
                    }
                }
            }
            Event::Resize(..) => {}
            _ => continue,
        }

        terminal.paint(&draw(menu, &state))?;
    }

    tracing::debug!(cursor = menu.cursor_position(), "interactive tree closed");
    Ok(())
}
