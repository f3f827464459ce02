//! Host notification listeners, keyed by element.

use crate::events::{Notification, NotificationKind};
use crate::types::ElementId;
use serde::Serialize;
use std::collections::HashMap;

/// Callback invoked with each notification delivered to an element.
pub type Listener = Box<dyn FnMut(&mut Notification<'_>)>;

/// Handle returned by `listen`, used to detach a single listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    /// `None` listens to every kind
    kind: Option<NotificationKind>,
    listener: Listener,
}

#[derive(Default)]
pub struct ListenerTable {
    next_id: u64,
    by_element: HashMap<ElementId, Vec<Subscription>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        element: ElementId,
        kind: Option<NotificationKind>,
        listener: Listener,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.by_element.entry(element).or_default().push(Subscription {
            id,
            kind,
            listener,
        });
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let mut found = None;
        for (element, subs) in self.by_element.iter_mut() {
            if let Some(pos) = subs.iter().position(|s| s.id == id) {
                subs.remove(pos);
                found = Some(*element);
                break;
            }
        }
        match found {
            Some(element) => {
                if self.by_element.get(&element).is_some_and(|subs| subs.is_empty()) {
                    self.by_element.remove(&element);
                }
                true
            }
            None => false,
        }
    }

    pub fn remove_all(&mut self, element: ElementId) -> usize {
        self.by_element.remove(&element).map_or(0, |subs| subs.len())
    }

    pub fn count(&self, element: ElementId) -> usize {
        self.by_element.get(&element).map_or(0, Vec::len)
    }

    /// Run the listeners of one element that match the notification kind.
    ///
    /// Listeners run in subscription order; `stop_propagation` only affects
    /// bubbling to ancestors, not siblings on the same element.
    pub fn invoke(&mut self, element: ElementId, notification: &mut Notification<'_>) {
        let Some(subs) = self.by_element.get_mut(&element) else {
            return;
        };
        let kind = notification.kind();
        for sub in subs.iter_mut() {
            if sub.kind.is_none_or(|k| k == kind) {
                (sub.listener)(notification);
            }
        }
    }
}

impl std::fmt::Debug for ListenerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerTable")
            .field("elements", &self.by_element.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
