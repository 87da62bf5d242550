use std::time::Duration;

use tracing::{debug, info};

use super::state::{ContentState, PopupMachine, PopupPhase, TargetId, TimerKind, TimerToken};
use crate::config::DisplayMode;
use crate::content::VerseContent;
use crate::error::LookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
    Escape,
    Enter,
    Space,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    PointerEnter {
        target: TargetId,
    },
    PointerLeave {
        target: TargetId,
    },
    PopupPointerEnter,
    PopupPointerLeave,
    TouchStart {
        target: TargetId,
    },
    TouchEnd {
        target: TargetId,
        held: Duration,
    },
    Click {
        target: TargetId,
    },
    Key {
        target: TargetId,
        key: PopupKey,
    },
    Blur {
        target: TargetId,
    },
    TimerFired {
        token: TimerToken,
    },
    ContentLoaded {
        target: TargetId,
        request_id: u64,
        result: Result<VerseContent, LookupError>,
    },
}

/// Side effects the runtime performs for a transition, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEffect {
    ArmTimer {
        token: TimerToken,
        kind: TimerKind,
        delay: Duration,
    },
    CancelTimer {
        token: TimerToken,
    },
    SetExpanded {
        target: TargetId,
        expanded: bool,
    },
    Open {
        target: TargetId,
    },
    RequestContent {
        target: TargetId,
        request_id: u64,
    },
    ShowContent {
        target: TargetId,
        content: VerseContent,
    },
    ShowError {
        target: TargetId,
        message: String,
    },
    Reposition {
        target: TargetId,
    },
    Close {
        target: TargetId,
    },
    FocusTarget {
        target: TargetId,
    },
    Navigate {
        target: TargetId,
    },
}

pub fn transition(machine: &mut PopupMachine, event: PopupEvent) -> Vec<PopupEffect> {
    // A touch only suppresses the click that immediately follows it. Any
    // other input in between means the host swallowed that click.
    if is_other_input(&event) {
        machine.touch_target = None;
    }
    match event {
        PopupEvent::PointerEnter { target } => on_pointer_enter(machine, target),
        PopupEvent::PointerLeave { target } => on_pointer_leave(machine, target),
        PopupEvent::PopupPointerEnter => on_popup_pointer_enter(machine),
        PopupEvent::PopupPointerLeave => on_popup_pointer_leave(machine),
        PopupEvent::TouchStart { target } => {
            machine.touch_target = Some(target);
            Vec::new()
        }
        PopupEvent::TouchEnd { target, held } => on_touch_end(machine, target, held),
        PopupEvent::Click { target } => on_click(machine, target),
        PopupEvent::Key { target, key } => on_key(machine, target, key),
        PopupEvent::Blur { target } => on_blur(machine, target),
        PopupEvent::TimerFired { token } => on_timer_fired(machine, token),
        PopupEvent::ContentLoaded {
            target,
            request_id,
            result,
        } => on_content_loaded(machine, target, request_id, result),
    }
}

fn is_other_input(event: &PopupEvent) -> bool {
    !matches!(
        event,
        PopupEvent::TouchStart { .. }
            | PopupEvent::TouchEnd { .. }
            | PopupEvent::Click { .. }
            | PopupEvent::TimerFired { .. }
            | PopupEvent::ContentLoaded { .. }
    )
}

fn on_pointer_enter(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    if !machine.behavior.hover_capable || !machine.behavior.mode.shows_popup() {
        return Vec::new();
    }
    match machine.phase {
        PopupPhase::Idle => arm_show(machine, target, Vec::new()),
        PopupPhase::PendingShow { target: pending, .. } if pending == target => Vec::new(),
        PopupPhase::PendingShow { timer, .. } => {
            arm_show(machine, target, vec![PopupEffect::CancelTimer { token: timer }])
        }
        PopupPhase::Visible { target: shown } if shown == target => Vec::new(),
        PopupPhase::Visible { .. } => show(machine, target, Vec::new()),
        PopupPhase::PendingHide { target: shown, timer } => {
            let effects = vec![PopupEffect::CancelTimer { token: timer }];
            if shown == target {
                machine.phase = PopupPhase::Visible { target };
                effects
            } else {
                show(machine, target, effects)
            }
        }
    }
}

fn on_pointer_leave(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    if !machine.behavior.hover_capable {
        return Vec::new();
    }
    leave(machine, target)
}

fn on_blur(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    leave(machine, target)
}

fn leave(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    match machine.phase {
        PopupPhase::PendingShow {
            target: pending,
            timer,
        } if pending == target => {
            debug!(target = target.0, "Show cancelled before popup appeared");
            machine.phase = PopupPhase::Idle;
            vec![PopupEffect::CancelTimer { token: timer }]
        }
        PopupPhase::Visible { target: shown } if shown == target => arm_hide(machine, target),
        _ => Vec::new(),
    }
}

fn on_popup_pointer_enter(machine: &mut PopupMachine) -> Vec<PopupEffect> {
    match machine.phase {
        PopupPhase::PendingHide { target, timer } => {
            machine.phase = PopupPhase::Visible { target };
            vec![PopupEffect::CancelTimer { token: timer }]
        }
        _ => Vec::new(),
    }
}

fn on_popup_pointer_leave(machine: &mut PopupMachine) -> Vec<PopupEffect> {
    match machine.phase {
        PopupPhase::Visible { target } => arm_hide(machine, target),
        _ => Vec::new(),
    }
}

fn on_touch_end(machine: &mut PopupMachine, target: TargetId, held: Duration) -> Vec<PopupEffect> {
    if machine.touch_target != Some(target) {
        machine.touch_target = None;
    }
    if held >= machine.behavior.long_press {
        debug!(target = target.0, held_ms = held.as_millis() as u64, "Long press");
        return ensure_shown(machine, target);
    }
    match machine.behavior.mode {
        DisplayMode::LinkOnly => vec![PopupEffect::Navigate { target }],
        DisplayMode::PopupOnly => toggle(machine, target),
        DisplayMode::Both => {
            if machine.phase.shown_target() == Some(target) {
                let mut effects = dismiss(machine, target);
                effects.push(PopupEffect::Navigate { target });
                effects
            } else {
                ensure_shown(machine, target)
            }
        }
    }
}

fn on_click(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    // Touch already handled this activation; drop the synthesized click.
    if machine.touch_target.take() == Some(target) {
        return Vec::new();
    }
    if machine.behavior.mode.navigates() {
        let mut effects = match machine.phase.target() {
            Some(current) => dismiss(machine, current),
            None => Vec::new(),
        };
        effects.push(PopupEffect::Navigate { target });
        return effects;
    }
    toggle(machine, target)
}

fn on_key(machine: &mut PopupMachine, target: TargetId, key: PopupKey) -> Vec<PopupEffect> {
    match key {
        PopupKey::Escape => {
            let Some(current) = machine.phase.target() else {
                return Vec::new();
            };
            let mut effects = dismiss(machine, current);
            effects.push(PopupEffect::FocusTarget { target: current });
            effects
        }
        PopupKey::Enter | PopupKey::Space => {
            if !machine.behavior.mode.shows_popup() {
                return Vec::new();
            }
            toggle(machine, target)
        }
    }
}

fn on_timer_fired(machine: &mut PopupMachine, token: TimerToken) -> Vec<PopupEffect> {
    match machine.phase {
        PopupPhase::PendingShow { target, timer } if timer == token => {
            show(machine, target, Vec::new())
        }
        PopupPhase::PendingHide { target, timer } if timer == token => hide(machine, target),
        _ => {
            debug!(token = token.0, "Ignoring stale popup timer");
            Vec::new()
        }
    }
}

fn on_content_loaded(
    machine: &mut PopupMachine,
    target: TargetId,
    request_id: u64,
    result: Result<VerseContent, LookupError>,
) -> Vec<PopupEffect> {
    let current = machine.phase.shown_target() == Some(target)
        && machine.content == ContentState::Loading { request_id };
    if !current {
        debug!(
            target = target.0,
            request_id,
            current_request = machine.request_id,
            "Ignoring stale verse content"
        );
        return Vec::new();
    }

    let shown = match result {
        Ok(content) => {
            machine.content = ContentState::Loaded(content.clone());
            PopupEffect::ShowContent { target, content }
        }
        Err(err) => {
            info!(target = target.0, "Verse lookup failed: {err}");
            let message = err.to_string();
            machine.content = ContentState::Failed(err);
            PopupEffect::ShowError { target, message }
        }
    };
    vec![shown, PopupEffect::Reposition { target }]
}

fn arm_show(machine: &mut PopupMachine, target: TargetId, mut effects: Vec<PopupEffect>) -> Vec<PopupEffect> {
    let token = machine.issue_timer();
    machine.phase = PopupPhase::PendingShow {
        target,
        timer: token,
    };
    effects.push(PopupEffect::ArmTimer {
        token,
        kind: TimerKind::Show,
        delay: machine.behavior.show_delay,
    });
    effects
}

fn arm_hide(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    let token = machine.issue_timer();
    machine.phase = PopupPhase::PendingHide {
        target,
        timer: token,
    };
    vec![PopupEffect::ArmTimer {
        token,
        kind: TimerKind::Hide,
        delay: machine.behavior.hide_delay,
    }]
}

/// Open the popup for `target` now, moving `aria-expanded` off any previous target.
fn show(machine: &mut PopupMachine, target: TargetId, mut effects: Vec<PopupEffect>) -> Vec<PopupEffect> {
    if let Some(previous) = machine.expanded.filter(|previous| *previous != target) {
        effects.push(PopupEffect::SetExpanded {
            target: previous,
            expanded: false,
        });
    }
    let request_id = machine.issue_request();
    machine.phase = PopupPhase::Visible { target };
    machine.content = ContentState::Loading { request_id };
    machine.expanded = Some(target);
    info!(target = target.0, request_id, "Showing popup");
    effects.extend([
        PopupEffect::SetExpanded {
            target,
            expanded: true,
        },
        PopupEffect::Open { target },
        PopupEffect::Reposition { target },
        PopupEffect::RequestContent { target, request_id },
    ]);
    effects
}

fn hide(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    machine.phase = PopupPhase::Idle;
    machine.content = ContentState::Empty;
    let mut effects = Vec::new();
    if let Some(expanded) = machine.expanded.take() {
        effects.push(PopupEffect::SetExpanded {
            target: expanded,
            expanded: false,
        });
    }
    effects.push(PopupEffect::Close { target });
    debug!(target = target.0, "Popup hidden");
    effects
}

/// Cancel any pending timer and return to idle from whatever phase.
fn dismiss(machine: &mut PopupMachine, current: TargetId) -> Vec<PopupEffect> {
    let mut effects = Vec::new();
    if let Some(token) = machine.phase.timer() {
        effects.push(PopupEffect::CancelTimer { token });
    }
    if machine.phase.shown_target().is_some() {
        effects.extend(hide(machine, current));
    } else {
        machine.phase = PopupPhase::Idle;
    }
    effects
}

fn ensure_shown(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    match machine.phase {
        PopupPhase::Visible { target: shown } if shown == target => Vec::new(),
        PopupPhase::PendingHide { target: shown, timer } if shown == target => {
            machine.phase = PopupPhase::Visible { target };
            vec![PopupEffect::CancelTimer { token: timer }]
        }
        _ => {
            let effects = machine
                .phase
                .timer()
                .map(|token| vec![PopupEffect::CancelTimer { token }])
                .unwrap_or_default();
            show(machine, target, effects)
        }
    }
}

fn toggle(machine: &mut PopupMachine, target: TargetId) -> Vec<PopupEffect> {
    if machine.phase.shown_target() == Some(target) {
        dismiss(machine, target)
    } else {
        ensure_shown(machine, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popup::state::PopupBehavior;

    const A: TargetId = TargetId(1);
    const B: TargetId = TargetId(2);

    fn machine(mode: DisplayMode) -> PopupMachine {
        PopupMachine::new(PopupBehavior {
            mode,
            show_delay: Duration::from_millis(300),
            hide_delay: Duration::from_millis(200),
            long_press: Duration::from_millis(500),
            hover_capable: true,
        })
    }

    fn armed_token(effects: &[PopupEffect]) -> TimerToken {
        effects
            .iter()
            .find_map(|effect| match effect {
                PopupEffect::ArmTimer { token, .. } => Some(*token),
                _ => None,
            })
            .expect("timer armed")
    }

    fn request_of(effects: &[PopupEffect]) -> u64 {
        effects
            .iter()
            .find_map(|effect| match effect {
                PopupEffect::RequestContent { request_id, .. } => Some(*request_id),
                _ => None,
            })
            .expect("content requested")
    }

    fn open(machine: &mut PopupMachine, target: TargetId) -> u64 {
        let effects = transition(machine, PopupEvent::PointerEnter { target });
        let token = armed_token(&effects);
        let effects = transition(machine, PopupEvent::TimerFired { token });
        request_of(&effects)
    }

    #[test]
    fn hover_walks_through_pending_show_and_pending_hide() {
        let mut m = machine(DisplayMode::Both);
        let effects = transition(&mut m, PopupEvent::PointerEnter { target: A });
        assert_eq!(
            effects,
            vec![PopupEffect::ArmTimer {
                token: TimerToken(1),
                kind: TimerKind::Show,
                delay: Duration::from_millis(300),
            }]
        );
        assert!(matches!(m.phase(), PopupPhase::PendingShow { target: A, .. }));

        let effects = transition(&mut m, PopupEvent::TimerFired { token: TimerToken(1) });
        assert_eq!(m.phase(), PopupPhase::Visible { target: A });
        assert_eq!(m.expanded(), Some(A));
        assert!(effects.contains(&PopupEffect::Open { target: A }));
        assert_eq!(m.content(), &ContentState::Loading { request_id: 1 });

        let effects = transition(&mut m, PopupEvent::PointerLeave { target: A });
        let hide_token = armed_token(&effects);
        assert!(matches!(m.phase(), PopupPhase::PendingHide { target: A, .. }));

        let effects = transition(&mut m, PopupEvent::TimerFired { token: hide_token });
        assert_eq!(m.phase(), PopupPhase::Idle);
        assert_eq!(m.expanded(), None);
        assert!(effects.contains(&PopupEffect::Close { target: A }));
    }

    #[test]
    fn leaving_during_pending_show_never_opens() {
        let mut m = machine(DisplayMode::Both);
        let token = armed_token(&transition(&mut m, PopupEvent::PointerEnter { target: A }));
        let effects = transition(&mut m, PopupEvent::PointerLeave { target: A });
        assert_eq!(effects, vec![PopupEffect::CancelTimer { token }]);
        assert_eq!(m.phase(), PopupPhase::Idle);

        assert!(transition(&mut m, PopupEvent::TimerFired { token }).is_empty());
        assert_eq!(m.phase(), PopupPhase::Idle);
    }

    #[test]
    fn reentering_cancels_the_hide_timer() {
        let mut m = machine(DisplayMode::Both);
        open(&mut m, A);
        let hide = armed_token(&transition(&mut m, PopupEvent::PointerLeave { target: A }));
        let effects = transition(&mut m, PopupEvent::PointerEnter { target: A });
        assert_eq!(effects, vec![PopupEffect::CancelTimer { token: hide }]);
        assert_eq!(m.phase(), PopupPhase::Visible { target: A });

        let hide = armed_token(&transition(&mut m, PopupEvent::PointerLeave { target: A }));
        let effects = transition(&mut m, PopupEvent::PopupPointerEnter);
        assert_eq!(effects, vec![PopupEffect::CancelTimer { token: hide }]);
        assert!(m.is_visible());
    }

    #[test]
    fn new_target_takes_over_pending_and_expanded_state() {
        let mut m = machine(DisplayMode::Both);
        let first = armed_token(&transition(&mut m, PopupEvent::PointerEnter { target: A }));
        let effects = transition(&mut m, PopupEvent::PointerEnter { target: B });
        assert_eq!(effects[0], PopupEffect::CancelTimer { token: first });
        assert!(matches!(m.phase(), PopupPhase::PendingShow { target: B, .. }));

        let mut m = machine(DisplayMode::Both);
        open(&mut m, A);
        transition(&mut m, PopupEvent::PointerLeave { target: A });
        let effects = transition(&mut m, PopupEvent::PointerEnter { target: B });
        assert!(matches!(effects[0], PopupEffect::CancelTimer { .. }));
        assert!(effects.contains(&PopupEffect::SetExpanded {
            target: A,
            expanded: false
        }));
        assert!(effects.contains(&PopupEffect::SetExpanded {
            target: B,
            expanded: true
        }));
        assert_eq!(m.phase(), PopupPhase::Visible { target: B });
        assert_eq!(m.expanded(), Some(B));
    }

    #[test]
    fn stale_content_is_ignored() {
        let mut m = machine(DisplayMode::Both);
        let first_request = open(&mut m, A);
        transition(&mut m, PopupEvent::PointerLeave { target: A });
        let second_request = request_of(&transition(&mut m, PopupEvent::PointerEnter { target: B }));
        assert_ne!(first_request, second_request);

        let content = VerseContent {
            edition: "ENGWEB".to_string(),
            html: "old".to_string(),
            footnotes: Vec::new(),
        };
        let effects = transition(
            &mut m,
            PopupEvent::ContentLoaded {
                target: A,
                request_id: first_request,
                result: Ok(content.clone()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(m.content(), &ContentState::Loading { request_id: second_request });

        let effects = transition(
            &mut m,
            PopupEvent::ContentLoaded {
                target: B,
                request_id: second_request,
                result: Ok(content.clone()),
            },
        );
        assert_eq!(
            effects,
            vec![
                PopupEffect::ShowContent { target: B, content: content.clone() },
                PopupEffect::Reposition { target: B },
            ]
        );
        assert_eq!(m.content(), &ContentState::Loaded(content));
    }

    #[test]
    fn failed_content_keeps_the_popup_visible() {
        let mut m = machine(DisplayMode::Both);
        let request_id = open(&mut m, A);
        let err = LookupError::fetch("https://example.test/ENGWEB/RM8.html", "HTTP 404");
        let effects = transition(
            &mut m,
            PopupEvent::ContentLoaded {
                target: A,
                request_id,
                result: Err(err.clone()),
            },
        );
        assert!(matches!(&effects[0], PopupEffect::ShowError { message, .. } if message.contains("HTTP 404")));
        assert_eq!(m.phase(), PopupPhase::Visible { target: A });
        assert_eq!(m.content(), &ContentState::Failed(err));
    }

    #[test]
    fn taps_follow_the_display_mode() {
        let tap = Duration::from_millis(100);

        let mut m = machine(DisplayMode::LinkOnly);
        let effects = transition(&mut m, PopupEvent::TouchEnd { target: A, held: tap });
        assert_eq!(effects, vec![PopupEffect::Navigate { target: A }]);

        let mut m = machine(DisplayMode::Both);
        let effects = transition(&mut m, PopupEvent::TouchEnd { target: A, held: tap });
        assert!(effects.contains(&PopupEffect::Open { target: A }));
        assert!(!effects.contains(&PopupEffect::Navigate { target: A }));
        let effects = transition(&mut m, PopupEvent::TouchEnd { target: A, held: tap });
        assert_eq!(effects.last(), Some(&PopupEffect::Navigate { target: A }));
        assert_eq!(m.phase(), PopupPhase::Idle);

        let mut m = machine(DisplayMode::PopupOnly);
        transition(&mut m, PopupEvent::TouchEnd { target: A, held: tap });
        assert!(m.is_visible());
        let effects = transition(&mut m, PopupEvent::TouchEnd { target: A, held: tap });
        assert!(!effects.contains(&PopupEffect::Navigate { target: A }));
        assert_eq!(m.phase(), PopupPhase::Idle);
    }

    #[test]
    fn long_press_always_shows() {
        let long = Duration::from_millis(600);
        for mode in [DisplayMode::LinkOnly, DisplayMode::PopupOnly, DisplayMode::Both] {
            let mut m = machine(mode);
            let effects = transition(&mut m, PopupEvent::TouchEnd { target: A, held: long });
            assert!(effects.contains(&PopupEffect::Open { target: A }), "mode {mode}");
            let again = transition(&mut m, PopupEvent::TouchEnd { target: A, held: long });
            assert!(again.is_empty());
            assert!(m.is_visible());
        }
    }

    #[test]
    fn clicks_navigate_or_toggle() {
        let mut m = machine(DisplayMode::Both);
        open(&mut m, A);
        let effects = transition(&mut m, PopupEvent::Click { target: A });
        assert!(effects.contains(&PopupEffect::Close { target: A }));
        assert_eq!(effects.last(), Some(&PopupEffect::Navigate { target: A }));

        let mut m = machine(DisplayMode::PopupOnly);
        transition(&mut m, PopupEvent::Click { target: A });
        assert!(m.is_visible());
        transition(&mut m, PopupEvent::Click { target: A });
        assert_eq!(m.phase(), PopupPhase::Idle);

        let mut m = machine(DisplayMode::Both);
        transition(&mut m, PopupEvent::TouchStart { target: A });
        transition(&mut m, PopupEvent::TouchEnd { target: A, held: Duration::from_millis(50) });
        assert!(transition(&mut m, PopupEvent::Click { target: A }).is_empty());
        assert!(m.is_visible());
    }

    #[test]
    fn touch_only_suppresses_the_click_right_after_it() {
        let mut m = machine(DisplayMode::PopupOnly);
        transition(&mut m, PopupEvent::TouchStart { target: A });
        transition(&mut m, PopupEvent::TouchEnd { target: A, held: Duration::from_millis(800) });
        assert!(m.is_visible());
        transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Escape });
        assert_eq!(m.phase(), PopupPhase::Idle);
        let effects = transition(&mut m, PopupEvent::Click { target: A });
        assert!(effects.contains(&PopupEffect::Open { target: A }));
        assert!(m.is_visible());

        let mut m = machine(DisplayMode::PopupOnly);
        transition(&mut m, PopupEvent::TouchStart { target: A });
        transition(&mut m, PopupEvent::TouchEnd { target: B, held: Duration::from_millis(50) });
        assert_eq!(m.phase().shown_target(), Some(B));
        let effects = transition(&mut m, PopupEvent::Click { target: A });
        assert!(effects.contains(&PopupEffect::Open { target: A }));
    }

    #[test]
    fn keyboard_toggles_and_escape_returns_focus() {
        let mut m = machine(DisplayMode::Both);
        let effects = transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Enter });
        assert!(effects.contains(&PopupEffect::Open { target: A }));
        let effects = transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Escape });
        assert!(effects.contains(&PopupEffect::Close { target: A }));
        assert_eq!(effects.last(), Some(&PopupEffect::FocusTarget { target: A }));
        assert_eq!(m.phase(), PopupPhase::Idle);

        transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Space });
        assert!(m.is_visible());
        transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Space });
        assert_eq!(m.phase(), PopupPhase::Idle);
        assert!(transition(&mut m, PopupEvent::Key { target: A, key: PopupKey::Escape }).is_empty());
    }

    #[test]
    fn hover_is_ignored_without_hover_support() {
        let mut m = machine(DisplayMode::Both);
        m.behavior.hover_capable = false;
        assert!(transition(&mut m, PopupEvent::PointerEnter { target: A }).is_empty());
        assert_eq!(m.phase(), PopupPhase::Idle);
    }

    #[test]
    fn blur_cancels_a_pending_show() {
        let mut m = machine(DisplayMode::Both);
        transition(&mut m, PopupEvent::PointerEnter { target: A });
        let effects = transition(&mut m, PopupEvent::Blur { target: A });
        assert!(matches!(effects.as_slice(), [PopupEffect::CancelTimer { .. }]));
        assert_eq!(m.phase(), PopupPhase::Idle);
    }
}
