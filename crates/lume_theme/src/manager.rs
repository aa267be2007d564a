//! Theme state container
//!
//! [`ThemeManager`] owns the current [`ThemeState`] and the listeners that
//! re-render on change. It is an ordinary value: the app creates one per
//! session and hands it to consumers by reference.
//!
//! Every mutating call emits exactly one notification, after the state has
//! been fully updated, even when the new state equals the old one.

use crate::accessibility::{self, AccessibilitySignals};
use crate::config::ThemeConfig;
use crate::error::Result;
use crate::state::ThemeState;
use crate::style::{StyleSheet, StyleTable};
use crate::theme::{Brightness, ThemeMode};
use lume_core::{ListenerId, Notifier};
use std::sync::Arc;

/// Owner of the session's theme state
pub struct ThemeManager {
    state: ThemeState,
    table: Arc<StyleTable>,
    /// Last brightness reported by the platform, used by `ThemeMode::System`
    platform_brightness: Brightness,
    notifier: Notifier<ThemeState>,
}

impl ThemeManager {
    /// Manager over the built-in style table
    pub fn new(state: ThemeState) -> Self {
        Self::with_table(state, StyleTable::builtin())
    }

    pub fn with_table(state: ThemeState, table: Arc<StyleTable>) -> Self {
        Self {
            state,
            table,
            platform_brightness: Brightness::Light,
            notifier: Notifier::new(),
        }
    }

    /// Manager initialized from a configuration document
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let table = config.build_table()?;
        Ok(Self::with_table(config.initial_state(), Arc::new(table)))
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.mode()
    }

    pub fn high_contrast_enabled(&self) -> bool {
        self.state.high_contrast_enabled()
    }

    pub fn font_scale(&self) -> f32 {
        self.state.font_scale()
    }

    pub fn reduce_motion(&self) -> bool {
        self.state.reduce_motion()
    }

    /// Brightness the current state renders with
    pub fn brightness(&self) -> Brightness {
        self.state.mode().resolve(self.platform_brightness)
    }

    pub fn is_dark(&self) -> bool {
        self.brightness() == Brightness::Dark
    }

    /// Shared style table
    pub fn table(&self) -> Arc<StyleTable> {
        self.table.clone()
    }

    /// Style sheet for the current state
    pub fn style_sheet(&self) -> StyleSheet {
        self.table.resolve(&self.state, self.platform_brightness)
    }

    // ========== Mutations ==========

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.commit(self.state.with_mode(mode), "set_mode");
    }

    /// Swap light and dark. Does nothing to `System`, but still notifies.
    pub fn toggle_mode(&mut self) {
        self.commit(self.state.with_mode(self.state.mode().toggled()), "toggle_mode");
    }

    /// Enabling high contrast also switches to dark mode
    pub fn set_high_contrast(&mut self, enabled: bool) {
        let mut next = self.state.with_high_contrast(enabled);
        if enabled {
            next = next.with_mode(ThemeMode::Dark);
        }
        self.commit(next, "set_high_contrast");
    }

    /// Set the font scale, clamped to the supported range
    pub fn set_font_scale(&mut self, scale: f32) {
        let next = self.state.with_font_scale(scale);
        if next.font_scale() != scale {
            tracing::warn!(
                requested = scale,
                applied = next.font_scale(),
                "font scale out of range, clamped"
            );
        }
        self.commit(next, "set_font_scale");
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.commit(self.state.with_reduce_motion(reduce), "set_reduce_motion");
    }

    /// Apply platform accessibility signals
    pub fn update_from_system(&mut self, signals: &AccessibilitySignals) {
        let next = accessibility::derive(signals, &self.state);
        self.commit(next, "update_from_system");
    }

    /// Record the platform brightness. Only affects rendering in `System` mode.
    pub fn set_platform_brightness(&mut self, brightness: Brightness) {
        self.platform_brightness = brightness;
        self.commit(self.state, "set_platform_brightness");
    }

    // ========== Observers ==========

    /// Listen for state changes
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeState) + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Number of notifications emitted so far
    pub fn revision(&self) -> u64 {
        self.notifier.revision()
    }

    fn commit(&mut self, next: ThemeState, operation: &'static str) {
        if next != self.state {
            tracing::debug!(
                operation,
                from = ?self.state,
                to = ?next,
                "ThemeManager state changed"
            );
        }
        self.state = next;
        self.notifier.notify(&self.state);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeState::default())
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("state", &self.state)
            .field("platform_brightness", &self.platform_brightness)
            .field("notifier", &self.notifier)
            .finish()
    }
}
