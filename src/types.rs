//! Core types shared by the engine and its hosts.
//!
//! Geometry is expressed in page coordinates (`f64`), the same space the
//! host reports pointer positions and element boxes in.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// Opaque handle for a host element.
///
/// The engine never owns elements; it only uses this handle as a lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`
    #[inline]
    pub fn offset_from(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned bounding box in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

// ============================================================================
// Pointer Input
// ============================================================================

/// Input modality of a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Which button produced a pointer event.
///
/// Serialized as the numeric code hosts conventionally report
/// (0 primary, 1 auxiliary, 2 secondary).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl From<u16> for PointerButton {
    fn from(code: u16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

impl From<PointerButton> for u16 {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => 0,
            PointerButton::Auxiliary => 1,
            PointerButton::Secondary => 2,
            PointerButton::Other(code) => code,
        }
    }
}

/// Keyboard modifier state at the time of a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    #[serde(rename = "ctrlKey")]
    pub ctrl: bool,
    #[serde(rename = "altKey")]
    pub alt: bool,
    #[serde(rename = "shiftKey")]
    pub shift: bool,
    #[serde(rename = "metaKey")]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };
}

/// A raw pointer event as forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    /// Pointer position in page coordinates
    pub page: Point,
    /// Element the host resolved the event to, if any
    pub target: Option<ElementId>,
    pub modifiers: Modifiers,
    pub button: PointerButton,
}

impl PointerInput {
    /// A primary-button mouse event at `(x, y)` with no target.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            page: Point::new(x, y),
            target: None,
            modifiers: Modifiers::NONE,
            button: PointerButton::Primary,
        }
    }

    /// A touch contact at `(x, y)` with no target.
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Touch,
            ..Self::mouse(x, y)
        }
    }

    pub fn on(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What the host should do with the native event after the engine saw it.
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the platform run its default behavior
    #[default]
    Allow,
    /// Suppress text selection, scrolling and similar native gestures
    Prevent,
}

impl DefaultAction {
    #[inline]
    pub fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}
