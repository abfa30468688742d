//! Terminal session lifecycle
//!
//! [`TerminalSession`] switches to the alternate screen, hides the cursor and
//! puts stdin into raw mode. Dropping it undoes all three on every exit path
//! including early returns and panics.
//!
//! A panic report produced while the session owns the screen would be drawn
//! on the alternate screen and lost when it is left, so the panic hook hands
//! it to [`defer_panic_report`] and the session prints it after restoring.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use nix::sys::termios::{self, SetArg, Termios};
use tracing::{info, warn};

use crate::error::{Result, TerminalError};

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static DEFERRED_REPORT: Mutex<Option<String>> = Mutex::new(None);

/// Hold a panic report until the active session has restored the terminal
///
/// Returns the report back when no session owns the screen, in which case
/// the caller should print it right away.
pub fn defer_panic_report(report: String) -> Option<String> {
    if !SESSION_ACTIVE.load(Ordering::SeqCst) {
        return Some(report);
    }
    match DEFERRED_REPORT.lock() {
        Ok(mut slot) => {
            *slot = Some(report);
            None
        }
        Err(_) => Some(report),
    }
}

fn take_deferred_report() -> Option<String> {
    DEFERRED_REPORT.lock().ok().and_then(|mut slot| slot.take())
}

/// Write the sequences that enter the alternate screen and hide the cursor
pub fn write_enter_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

/// Write the sequences that show the cursor and leave the alternate screen
pub fn write_leave_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

/// Source of the terminal input mode
pub trait InputMode {
    /// Mode recorded before switching to raw
    type Saved;

    fn save(&mut self) -> nix::Result<Self::Saved>;
    fn set_raw(&mut self, saved: &Self::Saved) -> nix::Result<()>;
    fn restore(&mut self, saved: &Self::Saved) -> nix::Result<()>;
}

/// Termios attributes of the process's stdin
#[derive(Debug, Default)]
pub struct StdinTermios;

impl InputMode for StdinTermios {
    type Saved = Termios;

    fn save(&mut self) -> nix::Result<Termios> {
        termios::tcgetattr(io::stdin())
    }

    fn set_raw(&mut self, saved: &Termios) -> nix::Result<()> {
        let mut raw = saved.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(io::stdin(), SetArg::TCSANOW, &raw)
    }

    fn restore(&mut self, saved: &Termios) -> nix::Result<()> {
        termios::tcsetattr(io::stdin(), SetArg::TCSADRAIN, saved)
    }
}

/// Guard owning the terminal for the duration of an interactive session
pub struct TerminalSession<W: Write = Stdout, M: InputMode = StdinTermios> {
    out: W,
    mode: M,
    /// Input mode saved before entering raw mode; `None` until raw mode is on
    saved: Option<M::Saved>,
    screen_entered: bool,
    restored: bool,
    defers_panics: bool,
}

impl TerminalSession {
    /// Take over the process terminal
    pub fn enter() -> Result<Self> {
        let mut session = Self::enter_with(io::stdout(), StdinTermios)?;
        session.defers_panics = true;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        Ok(session)
    }
}

impl<W: Write, M: InputMode> TerminalSession<W, M> {
    /// Take over the terminal behind `out` and `mode`
    ///
    /// If a step fails, the steps already taken are undone before the error
    /// is returned.
    pub fn enter_with(out: W, mut mode: M) -> Result<Self> {
        let saved = mode.save().map_err(TerminalError::from)?;

        let mut session = Self {
            out,
            mode,
            saved: None,
            screen_entered: false,
            restored: false,
            defers_panics: false,
        };

        write_enter_sequence(&mut session.out)
            .map_err(|e| TerminalError::RawModeFailed(e.to_string()))?;
        session.screen_entered = true;

        session.mode.set_raw(&saved).map_err(TerminalError::from)?;
        session.saved = Some(saved);

        info!("Terminal session entered");
        Ok(session)
    }

    /// Restore the terminal, reporting the first failure
    ///
    /// Every step is attempted even when an earlier one fails. Calling this
    /// more than once is harmless.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let mut first_error: Option<TerminalError> = None;

        if let Some(saved) = self.saved.take() {
            if let Err(e) = self.mode.restore(&saved) {
                first_error.get_or_insert(TerminalError::RestoreFailed(e.to_string()));
            }
        }

        if self.screen_entered {
            self.screen_entered = false;
            if let Err(e) = write_leave_sequence(&mut self.out) {
                first_error.get_or_insert(TerminalError::RestoreFailed(e.to_string()));
            }
        }

        if self.defers_panics {
            SESSION_ACTIVE.store(false, Ordering::SeqCst);
            if let Some(report) = take_deferred_report() {
                eprintln!("{report}");
            }
        }

        info!("Terminal session restored");
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl<W: Write, M: InputMode> Drop for TerminalSession<W, M> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}
