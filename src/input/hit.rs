//! Edge-zone hit classification.
//!
//! Only the right and bottom edges act as resize handles.

use crate::constants::{CLASS_XRESIZE, CLASS_XYRESIZE, CLASS_YRESIZE};
use crate::types::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Which dimensions a resize gesture changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAxes {
    #[default]
    None,
    X,
    Y,
    Xy,
}

impl ResizeAxes {
    fn from_edges(right: bool, bottom: bool) -> Self {
        match (right, bottom) {
            (true, true) => Self::Xy,
            (true, false) => Self::X,
            (false, true) => Self::Y,
            (false, false) => Self::None,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn has_x(self) -> bool {
        matches!(self, Self::X | Self::Xy)
    }

    #[inline]
    pub fn has_y(self) -> bool {
        matches!(self, Self::Y | Self::Xy)
    }

    /// Zero the components of `(dx, dy)` along inactive axes.
    #[inline]
    pub fn mask(self, (dx, dy): (f64, f64)) -> (f64, f64) {
        (
            if self.has_x() { dx } else { 0.0 },
            if self.has_y() { dy } else { 0.0 },
        )
    }

    /// Cursor class for this edge zone, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::X => Some(CLASS_XRESIZE),
            Self::Y => Some(CLASS_YRESIZE),
            Self::Xy => Some(CLASS_XYRESIZE),
        }
    }
}

/// Classify a point against the resize zones of a box.
///
/// A point is in the x zone when its offset from the left edge exceeds
/// `width - margin`, and likewise for y against the bottom edge.
pub fn classify(bounds: &Rect, point: Point, margin: f64) -> ResizeAxes {
    let right = (point.x - bounds.left) > (bounds.width - margin);
    let bottom = (point.y - bounds.top) > (bounds.height - margin);
    ResizeAxes::from_edges(right, bottom)
}
