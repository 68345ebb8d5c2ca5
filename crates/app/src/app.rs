//! Main editor loop.

use anyhow::Result;
use ratatui::{backend::Backend, Frame, Terminal};

use pow_buffer::Persistence;
use pow_clipboard::PasteSource;
use pow_keyboard::{Command, KeyCadence, RepeatTracker};

use crate::event::{Event, EventSource};
use crate::{dispatch, Services, Session};

/// Event loop around a [`Session`]
pub struct App {
    persistence: Box<dyn Persistence>,
    clipboard: Box<dyn PasteSource>,
    events: Box<dyn EventSource>,
    tracker: RepeatTracker,
}

impl App {
    pub fn new(
        persistence: Box<dyn Persistence>,
        clipboard: Box<dyn PasteSource>,
        events: Box<dyn EventSource>,
        redraw_interval: usize,
    ) -> Self {
        Self {
            persistence,
            clipboard,
            events,
            tracker: RepeatTracker::new(redraw_interval),
        }
    }

    /// Apply one event to the session. Returns true when the screen should be redrawn.
    pub fn handle_event(&mut self, session: &mut Session, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                let command = Command::from_key_event(key);
                let was_normal = session.mode.is_normal();
                let cadence = if was_normal {
                    self.tracker.observe(&command)
                } else {
                    self.tracker.reset();
                    KeyCadence {
                        row_delta: 1,
                        redraw: true,
                    }
                };

                let services = Services {
                    persistence: self.persistence.as_ref(),
                    clipboard: self.clipboard.as_ref(),
                };
                dispatch(session, command, cadence.row_delta, &services);

                cadence.redraw || !session.mode.is_normal()
            }
            Event::Resize(_, rows) => {
                self.tracker.reset();
                session.resize(rows);
                true
            }
            Event::Ignored => false,
        }
    }

    /// Run until the session asks to quit
    pub fn run<B: Backend>(
        &mut self,
        session: &mut Session,
        terminal: &mut Terminal<B>,
        mut render_fn: impl FnMut(&mut Frame<'_>, &mut Session),
    ) -> Result<()> {
        let size = terminal.size()?;
        session.resize(size.height);
        terminal.draw(|frame| render_fn(frame, session))?;

        while !session.should_quit {
            let event = self.events.next()?;
            if self.handle_event(session, event) && !session.should_quit {
                terminal.draw(|frame| render_fn(frame, session))?;
            }
        }

        pow_logger::info("Editor loop finished");
        Ok(())
    }
}
