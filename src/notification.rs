//! System notifications for countdown completion

use std::io::Write;

#[cfg(target_os = "macos")]
use notify_rust::Notification;

/// System sound used when the alarm asset cannot be played
pub const SYSTEM_ALERT_SOUND: &str = "Glass";

/// Send a notification when the countdown reaches zero
#[cfg_attr(not(target_os = "macos"), allow(unused_variables))]
pub fn notify_time_up(sound_name: Option<&str>) {
    #[cfg(target_os = "macos")]
    {
        let mut notification = Notification::new();
        notification.summary("Ringtimer").body("Time's up!");
        if let Some(sound) = sound_name {
            notification.sound_name(sound);
        }
        if let Err(e) = notification.show() {
            tracing::warn!(error = %e, "failed to show notification");
        }
    }
}

/// Ring the terminal bell.
///
/// Goes to stderr so it never lands inside a frame the TUI is writing to stdout.
pub fn ring_bell() {
    let mut err = std::io::stderr();
    let _ = err.write_all(b"\x07");
    let _ = err.flush();
}

/// Generic alert used in place of the alarm asset
pub fn system_alert() {
    ring_bell();
    notify_time_up(Some(SYSTEM_ALERT_SOUND));
}
