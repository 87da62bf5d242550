use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::position::{Placement, PlacementSettings, Rect, Size, Viewport, place_popup};
use super::state::{PopupBehavior, PopupMachine, TargetId, TimerToken};
use super::transitions::{PopupEffect, PopupEvent, transition};
use super::view::{PopupBody, PopupView, PopupViewSettings};
use crate::config::AppConfig;
use crate::content::{ChapterSource, VerseFetcher, VerseRequest};
use crate::detect::ParsedVerseReference;
use crate::error::LookupError;

/// Host page operations the popup needs.
pub trait PopupSurface {
    fn set_expanded(&mut self, target: TargetId, expanded: bool);
    fn target_rect(&self, target: TargetId) -> Option<Rect>;
    fn viewport(&self) -> Viewport;
    /// Size of the popup as currently rendered.
    fn popup_size(&self) -> Size;
    fn render(&mut self, html: &str);
    fn place(&mut self, placement: Placement);
    fn close(&mut self);
    fn focus(&mut self, target: TargetId);
    fn navigate(&mut self, request: NavigationRequest);
}

/// Passed to the host when a reference is activated in a navigating mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub section_id: String,
    pub verse_id: Option<String>,
    pub edition: Option<String>,
}

/// Drives the popup on a single thread: feeds events through the
/// transitions, runs timers and fetches as local tasks, and guards fetch
/// completions against the current target.
///
/// `dispatch` spawns local tasks and must run inside a `LocalSet`.
pub struct PopupRuntime<S, U> {
    machine: PopupMachine,
    fetcher: Rc<VerseFetcher<S>>,
    surface: U,
    view: PopupViewSettings,
    placement: PlacementSettings,
    targets: HashMap<TargetId, VerseRequest>,
    next_target: u64,
    timers: HashMap<TimerToken, JoinHandle<()>>,
    tx: UnboundedSender<PopupEvent>,
    rx: UnboundedReceiver<PopupEvent>,
}

impl<S, U> PopupRuntime<S, U>
where
    S: ChapterSource + 'static,
    U: PopupSurface,
{
    pub fn new(config: &AppConfig, fetcher: Rc<VerseFetcher<S>>, surface: U) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            machine: PopupMachine::new(PopupBehavior::from_config(config)),
            fetcher,
            surface,
            view: PopupViewSettings::from_config(config),
            placement: PlacementSettings::from_config(config),
            targets: HashMap::new(),
            next_target: 0,
            timers: HashMap::new(),
            tx,
            rx,
        }
    }

    pub fn register_target(&mut self, request: VerseRequest) -> TargetId {
        self.next_target += 1;
        let id = TargetId(self.next_target);
        trace!(target = id.0, reference = %request.label, "Registered popup target");
        self.targets.insert(id, request);
        id
    }

    /// Registers a scanner detection; `None` when its book did not resolve.
    pub fn register_detection(
        &mut self,
        detection: &ParsedVerseReference,
        edition: Option<&str>,
    ) -> Option<TargetId> {
        let reference = detection.to_reference()?;
        let mut request = VerseRequest::new(reference, detection.language).with_label(&detection.text);
        if let Some(id) = edition.map(str::trim).filter(|id| !id.is_empty()) {
            request = request.with_edition(id);
        }
        Some(self.register_target(request))
    }

    pub fn machine(&self) -> &PopupMachine {
        &self.machine
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn fetcher(&self) -> &VerseFetcher<S> {
        &self.fetcher
    }

    /// Handle for host input; events sent here are handled by `step`/`run`.
    pub fn sender(&self) -> UnboundedSender<PopupEvent> {
        self.tx.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn dispatch(&mut self, event: PopupEvent) {
        if let PopupEvent::TimerFired { token } = &event {
            self.timers.remove(token);
        }
        let effects = transition(&mut self.machine, event);
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Handle every event already queued without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and handle it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Handle events for as long as the runtime lives.
    pub async fn run(mut self) {
        while self.step().await {}
    }

    fn apply(&mut self, effect: PopupEffect) {
        match effect {
            PopupEffect::ArmTimer { token, kind, delay } => {
                trace!(token = token.0, ?kind, delay_ms = delay.as_millis() as u64, "Arming popup timer");
                let tx = self.tx.clone();
                let handle = tokio::task::spawn_local(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(PopupEvent::TimerFired { token });
                });
                self.timers.insert(token, handle);
            }
            PopupEffect::CancelTimer { token } => {
                if let Some(handle) = self.timers.remove(&token) {
                    handle.abort();
                }
            }
            PopupEffect::SetExpanded { target, expanded } => {
                self.surface.set_expanded(target, expanded);
            }
            PopupEffect::Open { target } => {
                let label = self.label_of(target);
                let html = PopupView::new(&label, PopupBody::Loading).render_html(&self.view);
                self.surface.render(&html);
            }
            PopupEffect::RequestContent { target, request_id } => self.request_content(target, request_id),
            PopupEffect::ShowContent { target, content } => {
                let label = self.label_of(target);
                let html = PopupView::new(&label, PopupBody::Content(&content)).render_html(&self.view);
                self.surface.render(&html);
            }
            PopupEffect::ShowError { target, message } => {
                let label = self.label_of(target);
                let html = PopupView::new(&label, PopupBody::Error(&message)).render_html(&self.view);
                self.surface.render(&html);
            }
            PopupEffect::Reposition { target } => self.reposition(target),
            PopupEffect::Close { .. } => self.surface.close(),
            PopupEffect::FocusTarget { target } => self.surface.focus(target),
            PopupEffect::Navigate { target } => self.navigate(target),
        }
    }

    fn label_of(&self, target: TargetId) -> String {
        self.targets
            .get(&target)
            .map(|request| request.label.clone())
            .unwrap_or_default()
    }

    fn request_content(&mut self, target: TargetId, request_id: u64) {
        let tx = self.tx.clone();
        let Some(request) = self.targets.get(&target).cloned() else {
            warn!(target = target.0, "Content requested for unknown target");
            let _ = tx.send(PopupEvent::ContentLoaded {
                target,
                request_id,
                result: Err(LookupError::InvalidReference(format!("unknown target {}", target.0))),
            });
            return;
        };
        let fetcher = Rc::clone(&self.fetcher);
        debug!(target = target.0, request_id, reference = %request.label, "Requesting verse content");
        tokio::task::spawn_local(async move {
            let result = fetcher.fetch_verse_content(&request).await;
            let _ = tx.send(PopupEvent::ContentLoaded {
                target,
                request_id,
                result,
            });
        });
    }

    fn reposition(&mut self, target: TargetId) {
        let Some(rect) = self.surface.target_rect(target) else {
            debug!(target = target.0, "Target has no layout box; skipping placement");
            return;
        };
        let placement = place_popup(
            rect,
            self.surface.popup_size(),
            self.surface.viewport(),
            &self.placement,
        );
        self.surface.place(placement);
    }

    fn navigate(&mut self, target: TargetId) {
        let Some(request) = self.targets.get(&target) else {
            warn!(target = target.0, "Navigation requested for unknown target");
            return;
        };
        let edition = self
            .fetcher
            .link_edition(request.language, request.edition.as_deref());
        let navigation = NavigationRequest {
            section_id: request.reference.section_id(),
            verse_id: request.reference.fragment_id(),
            edition,
        };
        debug!(section = %navigation.section_id, "Navigating to reference");
        self.surface.navigate(navigation);
    }
}
