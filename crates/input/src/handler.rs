//! Soft drop latch for terminal environments.
//!
//! Soft drop lasts while the drop key is held. Every key release sends
//! `SoftDropOff`, which also resets the game speed to its default. Many
//! terminals never emit release events, so the latch also lets go once no
//! drop key press (or auto-repeat) has been seen for a grace period.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{Intent, SOFT_DROP_GRACE_MS};

/// Tracks whether soft drop is held.
#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    /// Milliseconds left before an implicit release
    grace_left_ms: u32,
    grace_ms: u32,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            grace_left_ms: 0,
            grace_ms,
        }
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Translate one key event into an intent.
    ///
    /// Press and auto-repeat map through the key table; the drop key only
    /// emits `SoftDropOn` on its first press. Any release ends soft drop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => match handle_key_event(key) {
                Some(Intent::SoftDropOn) => {
                    self.grace_left_ms = self.grace_ms;
                    if self.held {
                        return None;
                    }
                    self.held = true;
                    Some(Intent::SoftDropOn)
                }
                other => other,
            },
            KeyEventKind::Release => self.release(),
        }
    }

    /// Release of any key, held drop key or not
    pub fn release(&mut self) -> Option<Intent> {
        self.held = false;
        self.grace_left_ms = 0;
        Some(Intent::SoftDropOff)
    }

    /// Advance the grace timer; emits `SoftDropOff` when it runs out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Intent> {
        if !self.held {
            return None;
        }
        self.grace_left_ms = self.grace_left_ms.saturating_sub(elapsed_ms);
        if self.grace_left_ms == 0 {
            return self.release();
        }
        None
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.grace_left_ms = 0;
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
