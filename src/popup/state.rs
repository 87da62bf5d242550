use std::time::Duration;

use crate::config::{AppConfig, DisplayMode};
use crate::content::VerseContent;
use crate::error::LookupError;

/// Host-assigned identity of a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Show,
    Hide,
}

/// Where the popup is in its show/hide cycle. At most one target is
/// pending or visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Idle,
    PendingShow {
        target: TargetId,
        timer: TimerToken,
    },
    Visible {
        target: TargetId,
    },
    PendingHide {
        target: TargetId,
        timer: TimerToken,
    },
}

impl PopupPhase {
    pub fn target(&self) -> Option<TargetId> {
        match *self {
            PopupPhase::Idle => None,
            PopupPhase::PendingShow { target, .. }
            | PopupPhase::Visible { target }
            | PopupPhase::PendingHide { target, .. } => Some(target),
        }
    }

    /// Target whose popup is on screen (visible or waiting to hide).
    pub fn shown_target(&self) -> Option<TargetId> {
        match *self {
            PopupPhase::Visible { target } | PopupPhase::PendingHide { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn timer(&self) -> Option<TimerToken> {
        match *self {
            PopupPhase::PendingShow { timer, .. } | PopupPhase::PendingHide { timer, .. } => {
                Some(timer)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentState {
    #[default]
    Empty,
    Loading {
        request_id: u64,
    },
    Loaded(VerseContent),
    Failed(LookupError),
}

/// Timing and input settings the transitions consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupBehavior {
    pub mode: DisplayMode,
    pub show_delay: Duration,
    pub hide_delay: Duration,
    pub long_press: Duration,
    pub hover_capable: bool,
}

impl Default for PopupBehavior {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PopupBehavior {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: config.display_mode,
            show_delay: config.show_delay(),
            hide_delay: config.hide_delay(),
            long_press: config.long_press(),
            hover_capable: config.hover_capable,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PopupMachine {
    pub(super) behavior: PopupBehavior,
    pub(super) phase: PopupPhase,
    pub(super) content: ContentState,
    pub(super) expanded: Option<TargetId>,
    pub(super) touch_target: Option<TargetId>,
    pub(super) request_id: u64,
    pub(super) next_timer: u64,
}

impl PopupMachine {
    pub fn new(behavior: PopupBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    pub fn behavior(&self) -> &PopupBehavior {
        &self.behavior
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    /// Target currently carrying `aria-expanded="true"`.
    pub fn expanded(&self) -> Option<TargetId> {
        self.expanded
    }

    pub fn current_target(&self) -> Option<TargetId> {
        self.phase.target()
    }

    pub fn is_visible(&self) -> bool {
        self.phase.shown_target().is_some()
    }

    pub(super) fn issue_timer(&mut self) -> TimerToken {
        self.next_timer = self.next_timer.wrapping_add(1);
        TimerToken(self.next_timer)
    }

    pub(super) fn issue_request(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }
}
