//! Toast notifications.
//!
//! Every user action (upload, chart submission, reset) ends in exactly one
//! transient message. Toasts expire on their own; nothing is persisted.

use crate::constants::{MAX_VISIBLE_TOASTS, TOAST_FADE_FRACTION};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Visual style of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    /// How long a toast of this variant stays visible
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
        }
    }
}

/// A single transient notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    /// Short heading, e.g. "File Loaded Successfully"
    pub title: Option<String>,
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            title: None,
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the display time left, 1.0 when fresh and 0.0 when expired
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity for rendering; the toast fades out over the end of its life
    pub fn opacity(&self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 1.0;
        }
        (self.remaining_percent() / TOAST_FADE_FRACTION).min(1.0)
    }

    /// One-line rendering, e.g. `✓ File Loaded Successfully: data.csv has been loaded and parsed.`
    pub fn display_line(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}: {}", self.variant.icon(), title, self.message),
            None => format!("{} {}", self.variant.icon(), self.message),
        }
    }
}

/// Queue of visible toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, dropping the oldest when the queue is full
    pub fn push(&mut self, toast: Toast) {
        match toast.variant {
            ToastVariant::Error => tracing::warn!(message = %toast.message, "Error toast"),
            _ => tracing::info!(message = %toast.message, "Toast"),
        }
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts; returns how many were removed
    pub fn remove_expired(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        before - self.toasts.len()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    /// Most recently pushed toast
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}
