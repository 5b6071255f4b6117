use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// What the user asked for at a generation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKey {
    Advance,
    Quit,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocks until a single keystroke: `q`, `Q` or ctrl-c quit the run, any
/// other key advances one generation. The terminal is switched to raw mode
/// for the duration of the wait and restored on every exit path.
pub fn wait_step_key() -> io::Result<StepKey> {
    let _raw = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(StepKey::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(StepKey::Quit)
                }
                _ => return Ok(StepKey::Advance),
            }
        }
    }
}
