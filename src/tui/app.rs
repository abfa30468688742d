//! Main TUI application
//!
//! A single synchronous loop: draw a frame, block on one input command,
//! apply it. Nothing runs between reads.

use std::io::{self, Read, Write};

use tracing::{debug, info};

use super::controller::Viewport;
use super::event::{read_command, UserCommand};
use super::render::Renderer;
use super::session::TerminalSession;
use super::signal::{Interruptible, TerminationSignals};
use super::theme::Theme;
use crate::checklist::{group_items, sample_document, sample_items, Document};
use crate::config::Config;
use crate::error::{Result, TerminalError};

/// Build the document described by `config`
pub fn build_document(config: &Config) -> Document {
    match config.group {
        Some(grouping) => group_items(sample_items(), config.sort, grouping),
        None => sample_document(),
    }
}

/// Main TUI application
pub struct App {
    document: Document,
    viewport: Viewport,
    renderer: Renderer,
}

impl App {
    /// Create a new application over `document`
    pub fn new(config: &Config, document: Document) -> Self {
        let viewport = Viewport::new(&document, config.viewport_height);
        let renderer = Renderer::new(Theme::default(), config.show_timestamps);

        Self {
            document,
            viewport,
            renderer,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Run the interactive session on the process terminal
    ///
    /// A termination signal ends the loop like `q` does, but the session
    /// then reports [`TerminalError::Interrupted`] so the process exits
    /// non-zero.
    pub fn run(&mut self) -> Result<()> {
        let signals = TerminationSignals::install()?;
        let mut session = TerminalSession::enter()?;

        let result = {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut input = Interruptible::new(stdin.lock(), signals.flag());
            self.run_with(&mut input, &mut stdout.lock())
        };

        // Restore before surfacing any loop error; a restore failure is only
        // reported when the loop itself succeeded.
        let restored = session.restore();
        result.and(restored)?;

        if signals.requested() {
            info!("Session ended by signal");
            return Err(TerminalError::Interrupted.into());
        }
        Ok(())
    }

    /// Run the loop against arbitrary input and output streams
    pub fn run_with<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        info!("Entering main loop");
        loop {
            self.renderer.draw(&self.document, &self.viewport, output)?;

            let Some(cmd) = read_command(input)? else {
                continue;
            };
            debug!("Command: {:?}", cmd);

            if !self.handle_command(cmd) {
                break;
            }
        }
        info!("Main loop exited");
        Ok(())
    }

    /// Apply one command. Returns `false` when the loop should stop.
    pub fn handle_command(&mut self, cmd: UserCommand) -> bool {
        match cmd {
            UserCommand::Quit => return false,
            UserCommand::ToggleSelected => {
                self.viewport.toggle_selected(&mut self.document);
            }
            UserCommand::ScrollUp => self.viewport.move_selection(&self.document, -1),
            UserCommand::ScrollDown => self.viewport.move_selection(&self.document, 1),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Grouping;

    #[test]
    fn test_handle_command() {
        let config = Config::default();
        let mut app = App::new(&config, sample_document());
        assert_eq!(app.viewport().selected, Some(2));

        assert!(app.handle_command(UserCommand::ScrollDown));
        assert_eq!(app.viewport().selected, Some(3));

        assert!(app.handle_command(UserCommand::ToggleSelected));
        assert!(app.document().get(3).unwrap().as_item().unwrap().checked);

        assert!(!app.handle_command(UserCommand::Quit));
    }

    #[test]
    fn test_build_document() {
        let config = Config::default();
        assert_eq!(build_document(&config), sample_document());

        let config = Config {
            group: Some(Grouping::Years),
            ..Config::default()
        };
        let doc = build_document(&config);
        assert_eq!(doc.items().count(), 3);
        assert_eq!(doc.len(), 8);
    }
}
