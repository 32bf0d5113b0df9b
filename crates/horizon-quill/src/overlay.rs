//! Overlay lifecycle control.
//!
//! [`OverlayController`] is the single authoritative owner of the
//! suggestion popup's visibility and position. It reacts to text-change,
//! selection-change, and focus events from the host, recomputes the caret
//! anchor and candidate list once layout has settled, and drives the
//! host's overlay layer accordingly.
//!
//! # Ordering
//!
//! Text and selection handlers never recompute directly: caret geometry is
//! only valid after the host's layout pass commits, so they mark a
//! recompute pending and the host calls
//! [`layout_committed`](OverlayController::layout_committed) once reflow
//! is done. The recompute then reads the host's *current* text, selection,
//! and geometry — not state captured when the event fired. Rapid edits
//! coalesce into a single pending recompute; the popup is rebuilt
//! idempotently from current state, never diffed.
//!
//! # Focus
//!
//! Focus loss starts a short grace timer instead of tearing the popup down
//! immediately, so focus transiently moving onto the popup (a tap on a
//! suggestion) does not destroy it. Focus regained in time cancels the
//! timer explicitly; expiry dismisses the popup.

use std::time::Duration;

use horizon_quill_core::{Point, Signal, TimerId, TimerManager};

use crate::caret::{CaretLocator, ContentInsets};
use crate::complete::{CompletionModel, apply_completion};
use crate::editor::EditorState;
use crate::host::{OverlayHost, TextInputHost};
use crate::text::FontMetrics;

/// Grace period before a focus loss tears the popup down.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(150);

/// The popup's current lifecycle state.
///
/// Owned exclusively by the [`OverlayController`]; at most one popup
/// exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    /// No popup is shown.
    #[default]
    Absent,
    /// A popup is shown at `anchor` with `items`.
    Visible {
        /// Absolute screen coordinate the popup is anchored to.
        anchor: Point,
        /// The suggestions shown, in resolver order.
        items: Vec<String>,
    },
}

impl OverlayState {
    /// Check if a popup is currently shown.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// Owns the suggestion popup's lifecycle and keeps its anchor synchronized
/// with the caret.
///
/// # Signals
///
/// - `activated(String)`: Emitted when a suggestion is accepted
/// - `shown(Point)`: Emitted when a popup is inserted or re-anchored
/// - `dismissed(())`: Emitted when the popup is torn down
pub struct OverlayController {
    /// The completion source.
    model: Box<dyn CompletionModel>,

    /// Font metrics of the field's text style.
    metrics: Box<dyn FontMetrics + Send>,

    /// Caret locator carrying the field's content insets.
    locator: CaretLocator,

    /// Current popup state.
    state: OverlayState,

    /// Whether a recompute is pending for the next committed layout pass.
    recompute_pending: bool,

    /// Timers owned by this controller.
    timers: TimerManager,

    /// The pending focus-loss teardown timer, if any.
    teardown_timer: Option<TimerId>,

    /// How long a focus loss is tolerated before teardown.
    grace_period: Duration,

    /// Signal emitted when a suggestion is accepted.
    pub activated: Signal<String>,

    /// Signal emitted when a popup is inserted or re-anchored.
    pub shown: Signal<Point>,

    /// Signal emitted when the popup is torn down.
    pub dismissed: Signal<()>,
}

impl OverlayController {
    /// Create a controller for a field with the given completion model,
    /// font metrics, and content insets.
    pub fn new(
        model: Box<dyn CompletionModel>,
        metrics: Box<dyn FontMetrics + Send>,
        insets: ContentInsets,
    ) -> Self {
        Self {
            model,
            metrics,
            locator: CaretLocator::new(insets),
            state: OverlayState::Absent,
            recompute_pending: false,
            timers: TimerManager::new(),
            teardown_timer: None,
            grace_period: DEFAULT_GRACE_PERIOD,
            activated: Signal::new(),
            shown: Signal::new(),
            dismissed: Signal::new(),
        }
    }

    /// Set the focus-loss grace period using builder pattern.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Get the current popup state.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Check if the popup is currently visible.
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Check if a recompute is pending for the next layout pass.
    pub fn is_recompute_pending(&self) -> bool {
        self.recompute_pending
    }

    /// Check if a focus-loss teardown is pending.
    pub fn has_pending_teardown(&self) -> bool {
        self.teardown_timer.is_some()
    }

    /// Get the duration until the pending teardown fires, if any.
    ///
    /// Hosts can use this to bound their event-loop wait.
    pub fn time_until_teardown(&mut self) -> Option<Duration> {
        self.teardown_timer.and(self.timers.time_until_next())
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    /// The field's text changed.
    ///
    /// Schedules a recompute for the next committed layout pass.
    pub fn notify_text_changed(&mut self) {
        tracing::trace!(target: "horizon_quill::overlay", "text changed, recompute pending");
        self.recompute_pending = true;
    }

    /// The field's selection changed.
    ///
    /// Schedules a recompute for the next committed layout pass.
    pub fn notify_selection_changed(&mut self) {
        tracing::trace!(target: "horizon_quill::overlay", "selection changed, recompute pending");
        self.recompute_pending = true;
    }

    /// The field gained focus.
    ///
    /// Cancels any pending teardown (the focus loss turned out to be
    /// transient) and schedules a recompute to re-validate the popup.
    pub fn notify_focus_gained(&mut self) {
        if let Some(id) = self.teardown_timer.take() {
            let _ = self.timers.stop(id);
            tracing::debug!(
                target: "horizon_quill::overlay",
                "focus regained within grace period, teardown cancelled"
            );
        }
        self.recompute_pending = true;
    }

    /// The field lost focus.
    ///
    /// Starts the grace timer; the popup is torn down only if focus does
    /// not return before it fires. A fresh focus loss restarts the timer.
    pub fn notify_focus_lost(&mut self) {
        if let Some(id) = self.teardown_timer.take() {
            let _ = self.timers.stop(id);
        }
        let id = self.timers.start_one_shot(self.grace_period);
        self.teardown_timer = Some(id);
        tracing::debug!(
            target: "horizon_quill::overlay",
            grace_ms = self.grace_period.as_millis() as u64,
            "focus lost, teardown scheduled"
        );
    }

    /// The host's layout pass committed; field geometry is now current.
    ///
    /// Executes the pending recompute, if any, against the host's current
    /// text, selection, and geometry. This is the only place a popup is
    /// (re)anchored, which guarantees anchors never reflect pre-reflow
    /// geometry.
    pub fn layout_committed(
        &mut self,
        input: &dyn TextInputHost,
        overlay: &mut dyn OverlayHost,
    ) {
        if !self.recompute_pending {
            return;
        }
        self.recompute_pending = false;
        self.recompute(input, overlay);
    }

    /// Process controller timers; call from the host event loop.
    ///
    /// Fires the deferred teardown when the focus-loss grace period has
    /// elapsed without the focus returning.
    pub fn process_timers(&mut self, overlay: &mut dyn OverlayHost) {
        let fired = self.timers.process_expired();
        if fired.is_empty() {
            return;
        }

        if let Some(id) = self.teardown_timer
            && fired.contains(&id)
        {
            self.teardown_timer = None;
            tracing::debug!(
                target: "horizon_quill::overlay",
                "grace period elapsed, dismissing popup"
            );
            self.dismiss(overlay);
        }
    }

    /// A suggestion was tapped.
    ///
    /// Replaces the trailing token (or appends after a trailing delimiter),
    /// moves the caret to the end of the new text, and schedules a
    /// recompute — accepting after a delimiter re-enters the resolver's
    /// next menu level. Returns `false` if no popup is visible or the
    /// index is out of range.
    pub fn accept_suggestion(&mut self, index: usize, input: &mut dyn TextInputHost) -> bool {
        let OverlayState::Visible { items, .. } = &self.state else {
            return false;
        };
        let Some(choice) = items.get(index).cloned() else {
            return false;
        };

        // The tap moved focus onto the popup; keep it alive until the
        // recompute replaces it.
        if let Some(id) = self.teardown_timer.take() {
            let _ = self.timers.stop(id);
        }

        let new_text = apply_completion(input.text(), &choice, self.model.delimiter());
        let caret = new_text.len();
        tracing::debug!(
            target: "horizon_quill::overlay",
            choice = %choice,
            caret,
            "suggestion accepted"
        );
        input.set_text_and_caret(new_text, caret);

        self.activated.emit(choice);
        self.recompute_pending = true;
        true
    }

    /// Tear the popup down immediately and cancel any pending work.
    pub fn dismiss(&mut self, overlay: &mut dyn OverlayHost) {
        self.recompute_pending = false;
        if self.state.is_visible() {
            overlay.remove();
            self.dismissed.emit(());
        }
        self.state = OverlayState::Absent;
    }

    // =========================================================================
    // Recompute
    // =========================================================================

    fn recompute(&mut self, input: &dyn TextInputHost, overlay: &mut dyn OverlayHost) {
        let text = input.text();
        let items = self.model.resolve(text);

        if items.is_empty() {
            // Empty candidate list suppresses the popup; not an error.
            tracing::trace!(target: "horizon_quill::overlay", "no candidates, popup suppressed");
            if self.state.is_visible() {
                overlay.remove();
                self.dismissed.emit(());
            }
            self.state = OverlayState::Absent;
            return;
        }

        let snapshot = EditorState::new(text, input.caret());
        let anchor = self
            .locator
            .locate(&snapshot, input.field_rect(), self.metrics.as_ref());

        // The previous popup is fully removed before the replacement is
        // inserted; no two popups coexist, even transiently.
        if self.state.is_visible() {
            overlay.remove();
        }
        overlay.insert(anchor, &items);

        tracing::debug!(
            target: "horizon_quill::overlay",
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            count = items.len(),
            "popup shown"
        );

        self.state = OverlayState::Visible { anchor, items };
        self.shown.emit(anchor);
    }
}

impl std::fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("state", &self.state)
            .field("recompute_pending", &self.recompute_pending)
            .field("teardown_pending", &self.teardown_timer.is_some())
            .field("grace_period", &self.grace_period)
            .finish()
    }
}
