//! In-process core runtime
//!
//! Owns the core behind the [`Core`] trait and hands it events one at a
//! time. Events are passed by value, so non-finite gesture values reach the
//! core untouched and are rejected there.

use sixsides_protocol::{Command, Core, Event};

pub struct CoreRuntime {
    core: Box<dyn Core>,
    events_sent: usize,
}

impl CoreRuntime {
    pub fn new(core: Box<dyn Core>) -> Self {
        Self { core, events_sent: 0 }
    }

    /// Send an event to the core and get back commands
    pub fn send_event(&mut self, event: &Event) -> Vec<Command> {
        let commands = self.core.handle(event.clone());
        self.events_sent += 1;
        if !commands.is_empty() {
            log::debug!("Event {} produced {} commands", self.events_sent, commands.len());
        }
        commands
    }

    pub fn events_sent(&self) -> usize {
        self.events_sent
    }
}
