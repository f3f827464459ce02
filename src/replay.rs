//! Scripted pointer replay.
//!
//! Loads a JSON description of elements and pointer steps, drives an engine
//! over a `MemoryHost`, and records what a host would have observed.

use crate::config::{EngineConfig, InteractOptions};
use crate::engine::{DebugSnapshot, InteractEngine};
use crate::error::{InteractError, InteractResult};
use crate::events::InteractionEvent;
use crate::memory_host::MemoryHost;
use crate::perf::HandlerStats;
use crate::types::{
    DefaultAction, ElementId, Modifiers, Point, PointerButton, PointerInput, PointerKind, Rect,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptElement {
    pub id: ElementId,
    #[serde(default)]
    pub name: Option<String>,
    pub rect: Rect,
    #[serde(default)]
    pub parent: Option<ElementId>,
    /// Untyped: malformed options fall back to defaults. Elements without
    /// options are laid out but not registered.
    #[serde(default)]
    pub options: serde_json::Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPhase {
    Down,
    Move,
    Up,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptStep {
    pub phase: StepPhase,
    #[serde(default)]
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    /// Resolved with a topmost hit test when absent
    #[serde(default)]
    pub target: Option<ElementId>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub button: PointerButton,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub elements: Vec<ScriptElement>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// A notification as observed on its target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordedNotification {
    pub name: &'static str,
    pub target: ElementId,
    pub detail: InteractionEvent,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    pub notifications: Vec<RecordedNotification>,
    /// Steps whose native default action was suppressed, by index
    pub prevented_steps: Vec<usize>,
    pub snapshot: DebugSnapshot,
}

impl Script {
    pub fn from_json(json: &str) -> InteractResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> InteractResult<Self> {
        let path = path.as_ref();
        let script = Self::from_json(&fs::read_to_string(path)?)?;
        script.check(path)?;
        Ok(script)
    }

    /// Every referenced element must be declared.
    pub fn check(&self, path: &Path) -> InteractResult<()> {
        let declared: HashSet<ElementId> = self.elements.iter().map(|e| e.id).collect();
        let invalid = |reason: String| InteractError::InvalidScript {
            path: PathBuf::from(path),
            reason,
        };

        for element in &self.elements {
            if let Some(parent) = element.parent {
                if !declared.contains(&parent) {
                    return Err(invalid(format!("{} has undeclared parent {}", element.id, parent)));
                }
            }
        }
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(target) = step.target {
                if !declared.contains(&target) {
                    return Err(invalid(format!("step {} targets undeclared {}", index, target)));
                }
            }
        }
        Ok(())
    }

    pub fn run(&self) -> InteractResult<ReplayReport> {
        let mut host = MemoryHost::new();
        for element in &self.elements {
            host.insert(element.id, element.rect);
            if let Some(parent) = element.parent {
                host.set_parent(element.id, parent);
            }
            if let Some(name) = &element.name {
                host.set_name(name.clone(), element.id);
            }
        }

        let mut engine = InteractEngine::with_config(host, self.config.clone())?;
        let recorded: Rc<RefCell<Vec<RecordedNotification>>> = Rc::default();

        for element in &self.elements {
            if element.options.is_null() {
                continue;
            }
            engine.register(element.id, InteractOptions::from_value(&element.options));
            let sink = Rc::clone(&recorded);
            engine.listen_all(element.id, move |n| {
                if n.current_target() == n.target() {
                    sink.borrow_mut().push(RecordedNotification {
                        name: n.name(),
                        target: n.target(),
                        detail: *n.detail(),
                    });
                }
            });
        }

        let mut prevented_steps = Vec::new();
        let mut stats = HandlerStats::new();
        for (index, step) in self.steps.iter().enumerate() {
            let page = Point::new(step.x, step.y);
            let input = PointerInput {
                kind: step.kind,
                page,
                target: step.target.or_else(|| engine.host().element_at(page)),
                modifiers: step.modifiers,
                button: step.button,
            };
            let action = match step.phase {
                StepPhase::Down => stats.time("pointer_down", || engine.pointer_down(&input)),
                StepPhase::Move => stats.time("pointer_move", || engine.pointer_move(&input)),
                StepPhase::Up => stats.time("pointer_up", || engine.pointer_up(&input)),
            };
            if action == DefaultAction::Prevent {
                prevented_steps.push(index);
            }
        }

        stats.log_summary();

        let notifications = recorded.borrow().clone();
        Ok(ReplayReport {
            notifications,
            prevented_steps,
            snapshot: engine.debug_snapshot(),
        })
    }
}
