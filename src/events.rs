//! Notifications - kinds, payloads and dispatch.
//!
//! Each gesture phase maps to one closed `NotificationKind`; the string
//! names hosts subscribe to come from a fixed table rather than being
//! assembled at runtime.

use crate::config::InteractOptions;
use crate::host::ElementHost;
use crate::registry::ListenerTable;
use crate::types::{ElementId, Modifiers, Point, PointerButton};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Kinds
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    ResizeStart,
    ResizeMove,
    ResizeEnd,
    DragStart,
    DragMove,
    DragEnd,
}

/// Internal key, public name.
const EVENT_TABLE: [(NotificationKind, &str, &str); 6] = [
    (NotificationKind::ResizeStart, "interactresizestart", "resizestart"),
    (NotificationKind::ResizeMove, "interactresizemove", "resizemove"),
    (NotificationKind::ResizeEnd, "interactresizeend", "resizeend"),
    (NotificationKind::DragStart, "interactdragstart", "dragstart"),
    (NotificationKind::DragMove, "interactdragmove", "dragmove"),
    (NotificationKind::DragEnd, "interactdragend", "dragend"),
];

impl NotificationKind {
    pub const ALL: [NotificationKind; 6] = [
        Self::ResizeStart,
        Self::ResizeMove,
        Self::ResizeEnd,
        Self::DragStart,
        Self::DragMove,
        Self::DragEnd,
    ];

    fn row(self) -> (NotificationKind, &'static str, &'static str) {
        EVENT_TABLE[self as usize]
    }

    pub fn internal_key(self) -> &'static str {
        self.row().1
    }

    /// The public notification name hosts subscribe to.
    pub fn name(self) -> &'static str {
        self.row().2
    }

    pub fn from_internal_key(key: &str) -> Option<Self> {
        EVENT_TABLE
            .iter()
            .find(|(_, internal, _)| *internal == key)
            .map(|(kind, _, _)| *kind)
    }

    pub fn is_drag(self) -> bool {
        matches!(self, Self::DragStart | Self::DragMove | Self::DragEnd)
    }
}

/// Public name for an internal gesture-phase key.
pub fn event_name_for(internal_key: &str) -> Option<&'static str> {
    NotificationKind::from_internal_key(internal_key).map(NotificationKind::name)
}

/// The full internal key to public name table.
pub fn all_event_names() -> BTreeMap<&'static str, &'static str> {
    EVENT_TABLE
        .iter()
        .map(|(_, internal, public)| (*internal, *public))
        .collect()
}

// ============================================================================
// Payload
// ============================================================================

/// Detail carried by every notification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    /// Gesture origin
    pub x0: f64,
    pub y0: f64,
    /// Offset from the origin, zero along inactive resize axes
    pub dx: f64,
    pub dy: f64,
    pub page_x: f64,
    pub page_y: f64,
    #[serde(flatten)]
    pub modifiers: Modifiers,
    pub button: PointerButton,
}

impl InteractionEvent {
    pub fn new(
        origin: Point,
        (dx, dy): (f64, f64),
        page: Point,
        modifiers: Modifiers,
        button: PointerButton,
    ) -> Self {
        Self {
            x0: origin.x,
            y0: origin.y,
            dx,
            dy,
            page_x: page.x,
            page_y: page.y,
            modifiers,
            button,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn delta(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    pub fn page(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }
}

// ============================================================================
// Deferred Commands
// ============================================================================

/// Registry change requested from inside a listener.
///
/// Listeners cannot reach the engine while it is mid-transition; the
/// engine applies deferred commands once the current handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Register(ElementId, InteractOptions),
    Unregister(ElementId),
}

// ============================================================================
// Notification
// ============================================================================

/// A bubbling, cancelable notification being delivered to listeners.
pub struct Notification<'a> {
    kind: NotificationKind,
    target: ElementId,
    current_target: ElementId,
    detail: InteractionEvent,
    propagation_stopped: bool,
    default_prevented: bool,
    commands: &'a mut Vec<Command>,
}

impl<'a> Notification<'a> {
    fn new(
        kind: NotificationKind,
        target: ElementId,
        detail: InteractionEvent,
        commands: &'a mut Vec<Command>,
    ) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            detail,
            propagation_stopped: false,
            default_prevented: false,
            commands,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Element the gesture happened on
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Element whose listener is currently running
    pub fn current_target(&self) -> ElementId {
        self.current_target
    }

    pub fn detail(&self) -> &InteractionEvent {
        &self.detail
    }

    pub fn bubbles(&self) -> bool {
        true
    }

    pub fn cancelable(&self) -> bool {
        true
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Queue a registry change to run after the current transition.
    pub fn defer(&mut self, command: Command) {
        self.commands.push(command);
    }
}

/// Dispatch a notification on `target` and bubble it through its ancestors.
///
/// Dispatching on a detached element does nothing.
pub fn emit<H: ElementHost + ?Sized>(
    listeners: &mut ListenerTable,
    host: &H,
    target: ElementId,
    kind: NotificationKind,
    detail: InteractionEvent,
    commands: &mut Vec<Command>,
) {
    if !host.is_attached(target) {
        tracing::trace!(%target, kind = kind.name(), "Skipping dispatch on detached element");
        return;
    }

    let mut notification = Notification::new(kind, target, detail, commands);
    let mut visited: Vec<ElementId> = Vec::new();
    let mut current = Some(target);

    while let Some(element) = current {
        if visited.contains(&element) {
            tracing::warn!(%element, "Parent cycle while bubbling, stopping");
            break;
        }
        visited.push(element);

        notification.current_target = element;
        listeners.invoke(element, &mut notification);
        if notification.propagation_stopped {
            break;
        }
        current = host.parent(element);
    }

    tracing::trace!(
        %target,
        kind = kind.name(),
        dx = detail.dx,
        dy = detail.dy,
        default_prevented = notification.default_prevented,
        "Dispatched notification"
    );
}
