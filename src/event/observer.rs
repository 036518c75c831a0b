use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::internal_event::InternalEvent;
use crate::error::AnalyticsError;

/// Receives every event recorded by the client it is registered on.
///
/// Called inline from `record_event`, so implementations should return
/// quickly and must handle their own failures.
pub trait EventObserver: Send + Sync {
    fn notify(&self, event: Arc<InternalEvent>);
}

/// Keeps every received event, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Arc<InternalEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Arc<InternalEvent>> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<Arc<InternalEvent>> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventObserver for RecordingObserver {
    fn notify(&self, event: Arc<InternalEvent>) {
        self.events.lock().push(event);
    }
}

/// Writes each event to the `tracing` log at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl EventObserver for LoggingObserver {
    fn notify(&self, event: Arc<InternalEvent>) {
        debug!(
            event_type = %event.event_type(),
            locale = %event.locale(),
            payload = %event.to_json_string(),
            "Analytics event recorded"
        );
    }
}

/// Forwards events into a bounded channel for an async consumer.
///
/// Never blocks the recorder: when the channel is full or closed the event
/// is dropped and a warning is logged.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::Sender<Arc<InternalEvent>>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::Sender<Arc<InternalEvent>>) -> Self {
        Self { tx }
    }

    /// Create an observer together with the receiving end of its channel.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Arc<InternalEvent>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    pub fn try_forward(&self, event: Arc<InternalEvent>) -> Result<(), AnalyticsError> {
        self.tx.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => AnalyticsError::ChannelFull,
            mpsc::error::TrySendError::Closed(_) => AnalyticsError::ChannelClosed,
        })
    }
}

impl EventObserver for ChannelObserver {
    fn notify(&self, event: Arc<InternalEvent>) {
        let event_type = event.event_type().to_string();
        match self.try_forward(event) {
            Ok(()) => trace!(%event_type, "Event forwarded"),
            Err(e) => warn!(error = %e, %event_type, "Dropping analytics event"),
        }
    }
}
