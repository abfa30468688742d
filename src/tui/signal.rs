//! Termination signal handling
//!
//! While a session is active, SIGTERM, SIGHUP and SIGINT only set a flag.
//! The handlers are installed without `SA_RESTART`, so a blocking read on
//! stdin fails with `EINTR`; [`Interruptible`] turns that into end of input,
//! the loop quits and the session guard restores the terminal.

use std::io::{self, ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};

use nix::libc::c_int;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use tracing::{debug, warn};

use crate::error::{Result, TerminalError};

const TERMINATION_SIGNALS: [Signal; 3] = [Signal::SIGTERM, Signal::SIGHUP, Signal::SIGINT];

static TERMINATION_REQUESTED: AtomicBool = AtomicBool::new(false);

extern "C" fn record_termination(_signal: c_int) {
    TERMINATION_REQUESTED.store(true, Ordering::SeqCst);
}

/// Installed termination handlers; dropping reinstates the previous ones
pub struct TerminationSignals {
    previous: Vec<(Signal, SigAction)>,
}

impl TerminationSignals {
    /// Install the handlers and clear any earlier request
    pub fn install() -> Result<Self> {
        TERMINATION_REQUESTED.store(false, Ordering::SeqCst);

        let action = SigAction::new(
            SigHandler::Handler(record_termination),
            SaFlags::empty(),
            SigSet::empty(),
        );
        let mut installed = Self {
            previous: Vec::with_capacity(TERMINATION_SIGNALS.len()),
        };
        for sig in TERMINATION_SIGNALS {
            // SAFETY: the handler only stores to an atomic, which is
            // async-signal-safe
            let previous = unsafe { signal::sigaction(sig, &action) }
                .map_err(|e| TerminalError::SignalSetupFailed(e.to_string()))?;
            installed.previous.push((sig, previous));
        }

        debug!("Termination handlers installed");
        Ok(installed)
    }

    /// Flag set by the handlers
    pub fn flag(&self) -> &'static AtomicBool {
        &TERMINATION_REQUESTED
    }

    /// Whether a termination signal arrived since `install`
    pub fn requested(&self) -> bool {
        TERMINATION_REQUESTED.load(Ordering::SeqCst)
    }
}

impl Drop for TerminationSignals {
    fn drop(&mut self) {
        for (sig, previous) in self.previous.drain(..).rev() {
            // SAFETY: reinstates the action that was in place before install
            if let Err(e) = unsafe { signal::sigaction(sig, &previous) } {
                warn!("Failed to reinstate handler for {}: {}", sig, e);
            }
        }
    }
}

/// Reader that reports end of input once `flag` is set
///
/// The flag is checked before each read and again when a read is
/// interrupted.
pub struct Interruptible<R> {
    inner: R,
    flag: &'static AtomicBool,
}

impl<R: Read> Interruptible<R> {
    pub fn new(inner: R, flag: &'static AtomicBool) -> Self {
        Self { inner, flag }
    }
}

impl<R: Read> Read for Interruptible<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.flag.load(Ordering::SeqCst) {
            return Ok(0);
        }
        match self.inner.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted && self.flag.load(Ordering::SeqCst) => {
                Ok(0)
            }
            other => other,
        }
    }
}
