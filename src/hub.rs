//! Deployment hub state.
//!
//! The hub is the modal that hands the export kit to the site owner. Its
//! state is three small, component-scoped values:
//!
//! - whether the modal is open,
//! - which tab is showing ([`HubTab`]),
//! - whether the "copied" confirmation is lit ([`CopyIndicator`]).
//!
//! The indicator is time-based instead of timer-based: copying records the
//! instant, and the flag reads as lit until exactly [`COPIED_FLASH`] has
//! passed. Rendering passes the current instant in, which keeps the state
//! free of threads and trivially testable.

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::export::build_embed_snippet;
use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays lit after a copy.
pub const COPIED_FLASH: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HubTab {
    /// Embed snippet and standalone download.
    #[default]
    Embed,
    /// Theme descriptor download.
    Theme,
}

impl HubTab {
    pub fn id(self) -> &'static str {
        match self {
            HubTab::Embed => "hub-tab-embed",
            HubTab::Theme => "hub-tab-theme",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HubTab::Embed => "1. Embed Design",
            HubTab::Theme => "2. Sync Theme",
        }
    }
}

/// Transient "copied" flag with a fixed reset interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    /// Light the indicator as of `now`, restarting the interval if lit.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// True from the mark until [`COPIED_FLASH`] has fully elapsed.
    pub fn is_lit(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPIED_FLASH,
            None => false,
        }
    }

    /// Time left before the indicator reverts, zero when dark.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.copied_at {
            Some(at) => COPIED_FLASH.saturating_sub(now.saturating_duration_since(at)),
            None => Duration::ZERO,
        }
    }
}

/// Modal state for the deployment hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HubState {
    pub open: bool,
    pub active_tab: HubTab,
    pub copied: CopyIndicator,
}

impl HubState {
    /// State with the modal open on `tab`.
    pub fn opened_on(tab: HubTab) -> Self {
        let mut state = Self::default();
        state.open();
        state.select_tab(tab);
        state
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_tab(&mut self, tab: HubTab) {
        self.active_tab = tab;
    }

    /// Copy the embed snippet and light the indicator.
    ///
    /// A failed write leaves the indicator untouched and hands the error
    /// back; the hub itself never shows a failure state.
    pub fn copy_embed(
        &mut self,
        now: Instant,
        sink: &mut dyn ClipboardSink,
    ) -> Result<(), ClipboardError> {
        sink.write_text(&build_embed_snippet())?;
        self.copied.mark(now);
        Ok(())
    }
}
