//! Host session: the imperative shell around the prompt machine.
//!
//! A [`Session`] owns the machine, a single-consumer event queue, the
//! pointer registry and the running activities. Every event source
//! (keyboard glue, focus tracking, raw host messages) only enqueues;
//! [`Session::pump`] drains the queue one event at a time, runs the
//! resulting effects against the [`Host`] and hands the host a fresh
//! snapshot after each transition.

use crate::activity::{
    ActivityRunner, Bounds, FocusTracker, PointerHub, PointerKind, RootHandle,
};
use crate::event::{Event, Key, RawEvent, RejectedEvent};
use crate::machine::{Activity, Effect, PromptMachine};
use crate::render::Snapshot;
use std::sync::mpsc::{self, Receiver, Sender};

/// Environment the session drives.
///
/// Effects are directives: the session calls them and never waits on or
/// inspects their outcome.
pub trait Host {
    /// Whatever a pointer signal reports as its target.
    type Target: 'static;
    /// The widget's root element.
    type Root: Bounds<Self::Target> + 'static;

    /// Root element, once attached. `None` while the surface is not mounted.
    /// Asked again before every pointer signal.
    fn root(&self) -> Option<Self::Root>;

    /// Move input focus to the text-capture surface.
    fn set_input_focused(&mut self);

    /// Blank the text-capture surface.
    fn clear_command_input(&mut self);

    /// Present the machine state after a transition.
    fn render(&mut self, snapshot: &Snapshot);
}

pub struct Session<H: Host> {
    machine: PromptMachine,
    host: H,
    pointers: PointerHub<H::Target>,
    root: RootHandle<H::Root>,
    activities: ActivityRunner,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl<H: Host> Session<H> {
    pub fn new(machine: PromptMachine, host: H) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            machine,
            host,
            pointers: PointerHub::new(),
            root: RootHandle::default(),
            activities: ActivityRunner::new(),
            sender,
            receiver,
        }
    }

    pub fn machine(&self) -> &PromptMachine {
        &self.machine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Registry pointer signals are delivered through. Signals emitted on
    /// it directly are tested against the root as of the last
    /// [`pointer_down`](Self::pointer_down).
    pub fn pointers(&self) -> &PointerHub<H::Target> {
        &self.pointers
    }

    /// Sender for event sources living outside the session.
    pub fn events(&self) -> Sender<Event> {
        self.sender.clone()
    }

    pub fn is_running(&self, activity: Activity) -> bool {
        self.activities.is_running(activity)
    }

    /// Signal that the host surfaces are attached and process the result.
    pub fn boot(&mut self) -> usize {
        self.send(Event::Booted)
    }

    /// Enqueue an event and drain the queue.
    pub fn send(&mut self, event: Event) -> usize {
        self.enqueue(event);
        self.pump()
    }

    /// Text-field change: the whole new buffer.
    pub fn input_changed(&mut self, text: impl Into<String>) -> usize {
        self.send(Event::update(text))
    }

    pub fn key_down(&mut self, key: impl Into<Key>) -> usize {
        self.send(Event::key_down(key))
    }

    /// Decode a loosely-typed host event and process it. Malformed events
    /// are rejected without reaching the machine.
    pub fn dispatch_raw(&mut self, raw: &RawEvent) -> Result<usize, RejectedEvent> {
        match raw.decode() {
            Ok(event) => Ok(self.send(event)),
            Err(rejected) => {
                tracing::warn!(
                    session = %self.machine.session(),
                    error = %rejected,
                    "Raw event rejected"
                );
                Err(rejected)
            }
        }
    }

    /// Deliver a pointer signal to subscribed listeners, then drain the queue.
    pub fn pointer_down(&mut self, kind: PointerKind, target: &H::Target) -> usize {
        self.root.set(self.host.root());
        self.pointers.emit(kind, target);
        self.pump()
    }

    /// Process queued events until the queue is empty. Returns the number
    /// of events the machine handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.receiver.try_recv() {
            if self.process(event) {
                handled += 1;
            }
        }
        handled
    }

    /// Stop the machine and tear down its activities.
    pub fn shutdown(&mut self) {
        let effects = self.machine.stop();
        self.execute(effects);
        self.activities.stop_all();
    }

    fn enqueue(&self, event: Event) {
        if let Err(error) = self.sender.send(event) {
            tracing::trace!(
                session = %self.machine.session(),
                event = error.0.name(),
                "Event queue closed; event dropped"
            );
        }
    }

    fn process(&mut self, event: Event) -> bool {
        let outcome = self.machine.send(event);
        if !outcome.is_handled() {
            return false;
        }

        self.execute(outcome.into_effects());
        let snapshot = self.machine.snapshot();
        self.host.render(&snapshot);
        true
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            tracing::trace!(session = %self.machine.session(), ?effect, "Running effect");
            match effect {
                Effect::SetInputFocused => self.host.set_input_focused(),
                Effect::ClearCommandInput => self.host.clear_command_input(),
                Effect::StartActivity(activity) => self.start_activity(activity),
                Effect::StopActivity(activity) => {
                    self.activities.stop(activity);
                }
            }
        }
    }

    fn start_activity(&mut self, activity: Activity) {
        match activity {
            Activity::FocusTracking => {
                self.root.set(self.host.root());
                let tracker = FocusTracker::new(self.root.clone(), self.sender.clone());
                let pointers = &self.pointers;
                self.activities.start(activity, || tracker.start(pointers));
            }
        }
    }
}

impl<H: Host> Drop for Session<H> {
    fn drop(&mut self) {
        self.activities.stop_all();
    }
}
