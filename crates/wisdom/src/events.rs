//! # Wisdom Wheel Event System
//!
//! Bounded channels between the UI controls and the frame loop.
//!
//! ```text
//! ┌─────────────┐  SpinRequested / Quit   ┌─────────────┐
//! │  Controls   │────────────────────────>│ Frame Loop  │
//! │ (stdin, UI) │<────────────────────────│  (engine)   │
//! └─────────────┘  Started / Ignored /    └─────────────┘
//!                  Completed
//! ```
//!
//! Requests that do not fit in the channel are dropped, the same as a
//! request arriving while the wheel is spinning.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default capacity of each channel.
pub const DEFAULT_CAPACITY: usize = 64;

/// Events exchanged between the controls and the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum WheelEvent {
    // =========================================================================
    // Controls → Frame Loop
    // =========================================================================
    /// The spin control was activated.
    SpinRequested,

    /// Stop the frame loop after the current frame.
    Quit,

    // =========================================================================
    // Frame Loop → Controls
    // =========================================================================
    /// A spin started; controls should show a busy state.
    SpinStarted,

    /// A request arrived mid-spin and was dropped.
    SpinIgnored,

    /// A spin finished on a segment.
    SpinCompleted {
        /// Selected segment index.
        index: usize,
        /// Citation of the selected segment.
        reference: String,
    },
}

/// A single bounded channel.
pub struct EventBus {
    sender: Sender<WheelEvent>,
    receiver: Receiver<WheelEvent>,
}

impl EventBus {
    /// Creates a bus holding at most `capacity` events in flight.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<WheelEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the channel is full or closed; the event is dropped.
    #[inline]
    pub fn send(&self, event: WheelEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!("Event channel full, dropped {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<WheelEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    #[inline]
    pub fn drain(&self) -> Vec<WheelEvent> {
        self.receiver.try_iter().collect()
    }

    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<WheelEvent> {
        self.receiver.try_recv().ok()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

/// Both directions of the wheel's event traffic.
pub struct EventSystem {
    /// Controls send requests here.
    pub control_sender: EventSender,
    /// The frame loop reads requests here.
    pub loop_receiver: EventReceiver,
    /// The frame loop publishes outcomes here.
    pub loop_sender: EventSender,
    /// Controls read outcomes here.
    pub control_receiver: EventReceiver,
}

impl EventSystem {
    /// Creates both channels with `capacity` slots each.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let requests = EventBus::new(capacity);
        let outcomes = EventBus::new(capacity);
        Self {
            control_sender: requests.sender(),
            loop_receiver: requests.receiver(),
            loop_sender: outcomes.sender(),
            control_receiver: outcomes.receiver(),
        }
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_send_receive() {
        let bus = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(WheelEvent::SpinCompleted {
            index: 3,
            reference: "BG 6.35".into(),
        }));
        assert!(receiver.has_events());

        match receiver.try_recv() {
            Some(WheelEvent::SpinCompleted { index, reference }) => {
                assert_eq!(index, 3);
                assert_eq!(reference, "BG 6.35");
            }
            other => panic!("Wrong event: {other:?}"),
        }
    }

    #[test]
    fn test_full_channel_drops() {
        let bus = EventBus::new(2);
        let sender = bus.sender();

        assert!(sender.send(WheelEvent::SpinRequested));
        assert!(sender.send(WheelEvent::SpinRequested));
        assert!(!sender.send(WheelEvent::SpinRequested));

        assert_eq!(bus.receiver().drain().len(), 2);
        assert!(!bus.receiver().has_events());
    }

    #[test]
    fn test_event_system_directions() {
        let system = EventSystem::default();

        system.control_sender.send(WheelEvent::SpinRequested);
        assert_eq!(system.loop_receiver.drain(), vec![WheelEvent::SpinRequested]);
        assert!(!system.control_receiver.has_events());

        system.loop_sender.send(WheelEvent::SpinStarted);
        assert_eq!(system.control_receiver.try_recv(), Some(WheelEvent::SpinStarted));
    }
}
