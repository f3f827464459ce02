//! Crate-wide constants.
//!
//! Centralizes resize margins and affordance class names so hosts can
//! style against them.

// ============================================================================
// Resize Margins
// ============================================================================

/// Distance from the right/bottom edge that counts as a resize grab for mice
pub const MOUSE_RESIZE_MARGIN: f64 = 10.0;

/// Touch contact is imprecise, so the grab zone is wider
pub const TOUCH_RESIZE_MARGIN: f64 = 30.0;

// ============================================================================
// Affordance Classes
// ============================================================================

/// Applied to every registered element
pub const CLASS_NODE: &str = "interact-node";

/// Applied to registered elements that allow dragging
pub const CLASS_DRAGGABLE: &str = "interact-draggable";

/// Applied to registered elements that allow resizing
pub const CLASS_RESIZEABLE: &str = "interact-resizeable";

/// Applied to the element under an active gesture
pub const CLASS_TARGET: &str = "interact-target";

/// Applied to the element while it is being dragged
pub const CLASS_DRAGGING: &str = "interact-dragging";

/// Applied to the element while it is being resized
pub const CLASS_RESIZING: &str = "interact-resizing";

/// Applied once the first resize move has been reported
pub const CLASS_RESIZE_TARGET: &str = "interact-resize-target";

/// Edge-zone cursor classes, indexed by axis designator
pub const CLASS_XRESIZE: &str = "interact-xresize";
pub const CLASS_YRESIZE: &str = "interact-yresize";
pub const CLASS_XYRESIZE: &str = "interact-xyresize";

/// Every class the crate may leave on an element
pub const ALL_ELEMENT_CLASSES: [&str; 10] = [
    CLASS_NODE,
    CLASS_DRAGGABLE,
    CLASS_RESIZEABLE,
    CLASS_TARGET,
    CLASS_DRAGGING,
    CLASS_RESIZING,
    CLASS_RESIZE_TARGET,
    CLASS_XRESIZE,
    CLASS_YRESIZE,
    CLASS_XYRESIZE,
];

// ============================================================================
// Configuration
// ============================================================================

/// Directory under the platform config dir holding `config.json`
pub const CONFIG_DIR_NAME: &str = "interact";

/// File name of the engine configuration
pub const CONFIG_FILE_NAME: &str = "config.json";
