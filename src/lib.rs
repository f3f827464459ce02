//! Drag and resize gesture tracking for host-managed visual elements.
//!
//! A host application registers elements as draggable and/or resizable,
//! forwards raw pointer input to an [`InteractEngine`], and receives
//! normalized `dragstart`/`dragmove`/`dragend` and
//! `resizestart`/`resizemove`/`resizeend` notifications.
//!
//! ## Modules
//!
//! - `input` - Gesture state machine (pointer down/move/up) and hit classifier
//! - `registry` - Registered elements, pointer bindings and listener tables
//! - `events` - Notification kinds, payloads and dispatch
//! - `host` - The `ElementHost` trait through which the engine sees elements
//! - `memory_host` - In-memory host used by tests and the replay tool
//! - `config` - Registration options and engine configuration
//! - `perf` - Optional handler profiling
//! - `replay` - Scripted pointer replay over a `MemoryHost`

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod memory_host;
pub mod perf;
pub mod registry;
pub mod replay;
pub mod spatial_index;
pub mod types;

pub use config::{EngineConfig, InteractOptions};
pub use engine::{DebugSnapshot, InteractEngine, Lookup};
pub use error::{InteractError, InteractResult};
pub use events::{
    all_event_names, event_name_for, Command, InteractionEvent, Notification, NotificationKind,
};
pub use host::{ElementHost, StyleTarget};
pub use input::{classify, GestureMode, GestureState, ResizeAxes};
pub use memory_host::MemoryHost;
pub use registry::{ElementRegistry, RegisteredElement, SubscriptionId};
pub use types::{
    DefaultAction, ElementId, Modifiers, Point, PointerButton, PointerInput, PointerKind, Rect,
};
