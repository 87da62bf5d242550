//! Reference preview popup: a pure state machine plus a single-threaded
//! runtime that owns timers, fetches and the host surface.

pub mod position;
pub mod runtime;
pub mod state;
pub mod transitions;
pub mod view;

pub use position::{Placement, PlacementSettings, Rect, Side, Size, Viewport, place_popup};
pub use runtime::{NavigationRequest, PopupRuntime, PopupSurface};
pub use state::{
    ContentState, PopupBehavior, PopupMachine, PopupPhase, TargetId, TimerKind, TimerToken,
};
pub use transitions::{PopupEffect, PopupEvent, PopupKey, transition};
pub use view::{PopupBody, PopupView, PopupViewSettings, ShareLink, share_links, share_url};
