//! Signal/slot system for Horizon Quill.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism.
//! Signals are emitted by components when their state changes, and connected
//! slots (callbacks) are invoked in response.
//!
//! Slots are always invoked directly on the emitting thread. The overlay
//! core is single-threaded and event-driven, so there is no queued or
//! cross-thread dispatch here; the host event loop decides when signals
//! fire.
//!
//! # Example
//!
//! ```
//! use horizon_quill_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke (Arc-wrapped so emission can run
    /// outside the connection lock).
    slot: Arc<dyn Fn(Args) + Send + Sync>,
}

/// A type-safe signal that notifies connected slots when emitted.
///
/// `Args` is the argument type passed to each slot. Use `()` for signals
/// that carry no data.
///
/// # Related
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII alternative that auto-disconnects
pub struct Signal<Args> {
    /// All active connections, keyed by connection ID.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        let connection = Connection {
            slot: Arc::new(slot),
        };
        self.connections.lock().insert(connection)
    }

    /// Connect a slot with an RAII guard that disconnects on drop.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Disconnect a slot by its connection ID.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of active connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking every connected slot with a clone of
    /// `args`.
    ///
    /// Slots are invoked outside the connection lock, so a slot may
    /// connect or disconnect other slots without deadlocking. Slots added
    /// during emission are not invoked for the current emission.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Arc<dyn Fn(Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.values().map(|c| Arc::clone(&c.slot)).collect()
        };

        tracing::trace!(
            target: "horizon_quill_core::signal",
            slot_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(args.clone());
        }
    }
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}

/// RAII guard that disconnects a signal connection when dropped.
///
/// Returned by [`Signal::connect_scoped`]. Useful for connections tied to
/// a scope shorter than the signal's lifetime.
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<'_, Args> {
    /// Get the underlying connection ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.connections.lock().remove(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(AtomicUsize::new(0));

        let received_clone = Arc::clone(&received);
        signal.connect(move |value| {
            received_clone.store(value as usize, Ordering::SeqCst);
        });

        signal.emit(42);
        assert_eq!(received.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_multiple_slots_all_invoked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count = Arc::clone(&count);
            signal.connect(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Second disconnect is a no-op.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_connection_guard_disconnects_on_drop() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        {
            let count = Arc::clone(&count);
            let _guard = signal.connect_scoped(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
            signal.emit(());
        }

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_emit_with_no_connections() {
        let signal = Signal::<String>::new();
        // Must not panic.
        signal.emit("nobody listening".to_string());
    }
}
