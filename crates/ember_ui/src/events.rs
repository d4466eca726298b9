//! # UI Notifications
//!
//! High-level events emitted by widgets for application logic.
//!
//! ```text
//! ┌──────────┐  emit   ┌──────────────┐ dispatch ┌─────────────┐
//! │ Widgets  │────────>│ bounded queue│─────────>│ Subscribers │
//! └──────────┘         └──────────────┘          └─────────────┘
//! ```
//!
//! Widgets only see [`EventSender`]; the queue is drained once per frame by
//! [`Dispatcher::dispatch`], outside the UI passes.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

use crate::widget::WidgetId;

/// Notifications emitted on widget state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A widget became active.
    WidgetActive(WidgetId),
    /// A widget stopped being active.
    WidgetInactive(WidgetId),
    /// A press started on a widget.
    WidgetPress(WidgetId),
    /// A press completed on the widget it started on.
    WidgetRelease(WidgetId),
    /// A slider value changed.
    WidgetProgress {
        /// The slider.
        id: WidgetId,
        /// New value in `[0, 1]`.
        value: f32,
    },
    /// A text field was submitted.
    TextSubmit {
        /// The text field.
        id: WidgetId,
        /// Submitted text.
        text: String,
    },
    /// A text field was edited.
    TextUpdate {
        /// The text field.
        id: WidgetId,
        /// Current text.
        text: String,
    },
}

impl UiEvent {
    /// The widget that emitted the event.
    #[must_use]
    pub const fn source(&self) -> WidgetId {
        match self {
            Self::WidgetActive(id)
            | Self::WidgetInactive(id)
            | Self::WidgetPress(id)
            | Self::WidgetRelease(id)
            | Self::WidgetProgress { id, .. }
            | Self::TextSubmit { id, .. }
            | Self::TextUpdate { id, .. } => *id,
        }
    }
}

/// Handle for emitting notifications.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<UiEvent>,
}

impl EventSender {
    /// Queues an event (non-blocking).
    ///
    /// Returns `false` if the queue is full or closed; the event is dropped.
    #[inline]
    pub fn emit(&self, event: UiEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(source = %event.source(), "UI event queue full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// A subscriber callback. Returning `true` consumes the event.
pub type Subscriber = Box<dyn FnMut(&UiEvent) -> bool + Send>;

/// Publish/subscribe hub for [`UiEvent`]s.
pub struct Dispatcher {
    sender: Sender<UiEvent>,
    receiver: Receiver<UiEvent>,
    subscribers: Mutex<Vec<Subscriber>>,
    /// Registered but not yet merged into `subscribers`.
    incoming: Mutex<Vec<Subscriber>>,
}

impl Dispatcher {
    /// Creates a dispatcher queueing at most `capacity` events per frame.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self {
            sender,
            receiver,
            subscribers: Mutex::new(Vec::new()),
            incoming: Mutex::new(Vec::new()),
        }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Queues an event.
    pub fn emit(&self, event: UiEvent) -> bool {
        self.sender().emit(event)
    }

    /// Registers a callback. Callbacks run in subscription order.
    ///
    /// May be called from inside a subscriber; the new callback sees
    /// events from the next one delivered onwards.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: FnMut(&UiEvent) -> bool + Send + 'static,
    {
        self.incoming.lock().push(Box::new(callback));
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Takes every queued event without notifying subscribers.
    pub fn drain(&self) -> Vec<UiEvent> {
        self.receiver.try_iter().collect()
    }

    /// Delivers every queued event to subscribers.
    ///
    /// Returns the number of events delivered. Subscribers must not call
    /// `dispatch` themselves.
    pub fn dispatch(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        let mut delivered = 0;
        subscribers.append(&mut self.incoming.lock());
        while let Ok(event) = self.receiver.try_recv() {
            subscribers.append(&mut self.incoming.lock());
            for subscriber in subscribers.iter_mut() {
                if subscriber(&event) {
                    break;
                }
            }
            delivered += 1;
        }
        subscribers.append(&mut self.incoming.lock());
        delivered
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(1024)
    }
}
