//! The interaction engine - registration API and gesture context.
//!
//! An engine owns its host, registry and gesture state. Nothing is global,
//! so several engines can run side by side (one per window, one per test).

use crate::config::{EngineConfig, InteractOptions};
use crate::constants::{ALL_ELEMENT_CLASSES, CLASS_DRAGGABLE, CLASS_NODE, CLASS_RESIZEABLE};
use crate::error::InteractResult;
use crate::events::{Command, Notification, NotificationKind};
use crate::host::{ElementHost, StyleTarget};
use crate::input::{GestureMode, GestureState, ResizeAxes};
use crate::registry::{
    BindingTarget, ElementRegistry, Handler, PointerPhase, RegisteredElement, SubscriptionId,
};
use crate::types::{ElementId, Point};
use serde::Serialize;

/// How `lookup` identifies an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Element(ElementId),
    /// Host-level identifier, resolved through `ElementHost::resolve`
    Identifier(&'a str),
}

impl From<ElementId> for Lookup<'_> {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl<'a> From<&'a str> for Lookup<'a> {
    fn from(identifier: &'a str) -> Self {
        Self::Identifier(identifier)
    }
}

/// Read-only view of the engine for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugSnapshot {
    pub active_element: Option<ElementId>,
    pub last: Point,
    pub origin: Point,
    pub mode: GestureMode,
    pub resize_axes: ResizeAxes,
    pub pointer_down: bool,
    pub registry_size: usize,
}

pub struct InteractEngine<H: ElementHost> {
    pub(crate) host: H,
    pub(crate) config: EngineConfig,
    pub(crate) registry: ElementRegistry,
    pub(crate) gesture: GestureState,
    /// Registry changes requested by listeners mid-transition
    pub(crate) deferred: Vec<Command>,
}

impl<H: ElementHost> InteractEngine<H> {
    /// Create an engine with the default margins.
    pub fn new(host: H) -> Self {
        let mut engine = Self {
            host,
            config: EngineConfig::default(),
            registry: ElementRegistry::new(),
            gesture: GestureState::default(),
            deferred: Vec::new(),
        };
        engine.bind_document();
        engine
    }

    /// Create an engine after validating `config`.
    pub fn with_config(host: H, config: EngineConfig) -> InteractResult<Self> {
        config.validate()?;
        let mut engine = Self::new(host);
        engine.config = config;
        Ok(engine)
    }

    fn bind_document(&mut self) {
        let bindings = &mut self.registry.bindings;
        bindings.bind(BindingTarget::Document, PointerPhase::Up, Handler::GestureEnd);
        bindings.bind(BindingTarget::Document, PointerPhase::Move, Handler::Hover);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register an element, or replace the capabilities of a registered one.
    ///
    /// Replacement is wholesale: flags absent from `options` reset to false.
    pub fn register(&mut self, element: ElementId, options: InteractOptions) {
        let is_new = self.registry.insert(element, options);

        let target: StyleTarget = element.into();
        self.host.remove_classes(target, &[CLASS_DRAGGABLE, CLASS_RESIZEABLE]);
        self.host.add_class(target, CLASS_NODE);
        if options.drag {
            self.host.add_class(target, CLASS_DRAGGABLE);
        }
        if options.resize {
            self.host.add_class(target, CLASS_RESIZEABLE);
        }

        tracing::debug!(
            %element,
            drag = options.drag,
            resize = options.resize,
            replaced = !is_new,
            "Registered element"
        );
    }

    /// Register with options given as an untyped JSON value.
    pub fn register_value(&mut self, element: ElementId, options: &serde_json::Value) {
        self.register(element, InteractOptions::from_value(options));
    }

    /// Remove an element and everything attached for it.
    ///
    /// Crate classes are stripped even when the element is not registered.
    /// Unregistering the element under an active gesture aborts the gesture
    /// without an end notification.
    pub fn unregister(&mut self, element: ElementId) {
        self.host.remove_classes(element.into(), &ALL_ELEMENT_CLASSES);
        if self.registry.remove(element).is_none() {
            return;
        }

        if self.gesture.active_element == Some(element) {
            tracing::debug!(%element, "Aborting gesture on unregistered element");
            self.finish_gesture();
        }
        if self.gesture.hovered == Some(element) {
            self.gesture.hovered = None;
        }

        tracing::debug!(%element, "Unregistered element");
    }

    pub fn is_registered(&self, element: ElementId) -> bool {
        self.registry.contains(element)
    }

    /// Resolve an element or host identifier to its registration record.
    pub fn lookup<'a>(&self, target: impl Into<Lookup<'a>>) -> Option<&RegisteredElement> {
        let element = match target.into() {
            Lookup::Element(id) => id,
            Lookup::Identifier(identifier) => self.host.resolve(identifier)?,
        };
        self.registry.get(element)
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Listen for one notification kind on an element (or bubbling from
    /// its descendants).
    pub fn listen<F>(
        &mut self,
        element: ElementId,
        kind: NotificationKind,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&mut Notification<'_>) + 'static,
    {
        self.registry.listeners.add(element, Some(kind), Box::new(listener))
    }

    /// Listen for every notification kind on an element.
    pub fn listen_all<F>(&mut self, element: ElementId, listener: F) -> SubscriptionId
    where
        F: FnMut(&mut Notification<'_>) + 'static,
    {
        self.registry.listeners.add(element, None, Box::new(listener))
    }

    pub fn unlisten(&mut self, id: SubscriptionId) -> bool {
        self.registry.listeners.remove(id)
    }

    pub(crate) fn apply_deferred(&mut self) {
        while !self.deferred.is_empty() {
            let commands = std::mem::take(&mut self.deferred);
            for command in commands {
                match command {
                    Command::Register(element, options) => self.register(element, options),
                    Command::Unregister(element) => self.unregister(element),
                }
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let snapshot = DebugSnapshot {
            active_element: self.gesture.active_element,
            last: self.gesture.last,
            origin: self.gesture.origin,
            mode: self.gesture.mode,
            resize_axes: self.gesture.resize_axes,
            pointer_down: self.gesture.pointer_down,
            registry_size: self.registry.len(),
        };
        if self.config.log_snapshots {
            tracing::debug!(?snapshot, "Engine snapshot");
        }
        snapshot
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to update layout between events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
