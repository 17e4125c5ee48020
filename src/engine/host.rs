// Host engine capabilities consumed by the game core
//
// The character never talks to a concrete engine. Movement, jumping and the
// on-screen message overlay are reached through the two traits below, which
// the host implements and injects into the input dispatcher.

use glam::Vec3;

/// How long every transient notification stays on screen (seconds)
pub const NOTIFICATION_DURATION: f32 = 1.5;

/// Movement primitives the host engine exposes to the character
pub trait HostCapabilities {
    /// Apply per-tick displacement intent along `direction`, scaled by `scale`
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);

    /// Start a jump
    fn jump(&mut self);

    /// Stop jumping (jump button released)
    fn stop_jumping(&mut self);
}

/// Colors used by the notification overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationColor {
    Red,
    Magenta,
    Green,
    Blue,
    Yellow,
}

impl NotificationColor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

/// A transient, fire-and-forget on-screen message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Display time in seconds
    pub duration_secs: f32,
    pub color: NotificationColor,
    pub message: String,
}

impl Notification {
    /// Create a notification with the standard display duration
    pub fn new(color: NotificationColor, message: impl Into<String>) -> Self {
        Self {
            duration_secs: NOTIFICATION_DURATION,
            color,
            message: message.into(),
        }
    }
}

/// Receiver of transient notifications (the host's debug overlay)
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Buffers notifications so the host can draw them later
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Sink that writes every notification to the log
#[derive(Debug, Default)]
pub struct LogSink {
    shown: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications written so far
    pub fn shown(&self) -> u64 {
        self.shown
    }
}

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: Notification) {
        self.shown += 1;
        log::info!(
            "[{} {:.1}s] {}",
            notification.color.name(),
            notification.duration_secs,
            notification.message
        );
    }
}
