//! # UI Feedback State
//!
//! Front-end agnostic state for transient notifications and busy controls.
//! Nothing here owns a timer: the GUI feeds elapsed time into
//! [`ToastQueue::advance`] and [`CopyButton::advance`] from a periodic tick,
//! which keeps every transition testable without sleeping.
//!
//! ```text
//! push ──► visible (lifetime) ──► fading (300 ms) ──► removed
//!             │                        │
//!             └──── dismiss(id) ───────┴──► removed
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Toast lifetime before the fade starts
pub const DEFAULT_TOAST_SECONDS: f32 = 5.0;
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Label shown on a control while its action runs
pub const PROCESSING_LABEL: &str = "Processing...";

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    elapsed: Duration,
    lifetime: Duration,
}

impl Toast {
    fn new(kind: ToastKind, message: String, lifetime: Duration) -> Self {
        Toast {
            id: Uuid::new_v4(),
            kind,
            message,
            elapsed: Duration::ZERO,
            lifetime,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.elapsed >= self.lifetime
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.lifetime + FADE_DURATION
    }

    /// 1.0 while visible, then linear down to 0.0 over the fade.
    pub fn opacity(&self) -> f32 {
        if !self.is_fading() {
            return 1.0;
        }
        let into_fade = (self.elapsed - self.lifetime).as_secs_f32();
        (1.0 - into_fade / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Ordered stack of live toasts, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast::new(kind, message.into(), self.lifetime);
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    /// Age every toast by `dt` and drop the ones whose fade has finished.
    pub fn advance(&mut self, dt: Duration) {
        for toast in &mut self.toasts {
            toast.elapsed += dt;
        }
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Remove a toast right away. Returns false for unknown ids.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::new(Duration::from_secs_f32(DEFAULT_TOAST_SECONDS))
    }
}

/// The three backend actions a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Calculate,
    Polar,
    Envelope,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Calculate, Action::Polar, Action::Envelope];

    /// Idle label of the button that triggers this action
    pub fn label(&self) -> &'static str {
        match self {
            Action::Calculate => "Calculate Properties",
            Action::Polar => "Plot Stiffness Polar",
            Action::Envelope => "Plot Failure Envelope",
        }
    }

    /// Toast text after a successful run
    pub fn success_message(&self) -> &'static str {
        match self {
            Action::Calculate => "Calculation complete",
            Action::Polar => "Stiffness polar plotted",
            Action::Envelope => "Failure envelope plotted",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label and enabled state of one action button.
///
/// [`begin`](Self::begin) saves the current state and shows
/// [`PROCESSING_LABEL`]; [`finish`](Self::finish) puts back exactly what was
/// saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    label: String,
    disabled: bool,
    saved: Option<(String, bool)>,
}

impl ActionControl {
    pub fn new(label: impl Into<String>) -> Self {
        ActionControl {
            label: label.into(),
            disabled: false,
            saved: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_busy(&self) -> bool {
        self.saved.is_some()
    }

    /// Enter the loading state. Returns false (and changes nothing) when
    /// the control is already busy.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        let previous_label = std::mem::replace(&mut self.label, PROCESSING_LABEL.to_string());
        self.saved = Some((previous_label, self.disabled));
        self.disabled = true;
        true
    }

    /// Leave the loading state. A no-op when not busy.
    pub fn finish(&mut self) {
        if let Some((label, disabled)) = self.saved.take() {
            self.label = label;
            self.disabled = disabled;
        }
    }
}

/// One [`ActionControl`] per [`Action`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionControls {
    calculate: ActionControl,
    polar: ActionControl,
    envelope: ActionControl,
}

impl ActionControls {
    pub fn get(&self, action: Action) -> &ActionControl {
        match action {
            Action::Calculate => &self.calculate,
            Action::Polar => &self.polar,
            Action::Envelope => &self.envelope,
        }
    }

    pub fn get_mut(&mut self, action: Action) -> &mut ActionControl {
        match action {
            Action::Calculate => &mut self.calculate,
            Action::Polar => &mut self.polar,
            Action::Envelope => &mut self.envelope,
        }
    }

    pub fn begin(&mut self, action: Action) -> bool {
        self.get_mut(action).begin()
    }

    pub fn finish(&mut self, action: Action) {
        self.get_mut(action).finish()
    }
}

impl Default for ActionControls {
    fn default() -> Self {
        ActionControls {
            calculate: ActionControl::new(Action::Calculate.label()),
            polar: ActionControl::new(Action::Polar.label()),
            envelope: ActionControl::new(Action::Envelope.label()),
        }
    }
}

/// Copy button that reads "Copied!" for a moment after a successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopyButton {
    remaining: Option<Duration>,
}

impl CopyButton {
    pub fn label(&self) -> &'static str {
        if self.remaining.is_some() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn mark_copied(&mut self) {
        self.remaining = Some(COPIED_DURATION);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.remaining = self
            .remaining
            .and_then(|left| left.checked_sub(dt))
            .filter(|left| !left.is_zero());
    }
}
