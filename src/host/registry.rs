/// Token returned when a handler is registered; pass it back to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Ordered set of registered callbacks.
///
/// Hosts keep one per event kind. Ids are never reused, so removing a stale
/// id after a re-registration is harmless.
pub struct HandlerRegistry<H> {
    next_id: u64,
    handlers: Vec<(HandlerId, H)>,
}

impl<H: Clone> HandlerRegistry<H> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: H) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Returns whether `id` was registered.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Copies of the handlers, so they can run after the host lock is released.
    pub fn snapshot(&self) -> Vec<H> {
        self.handlers.iter().map(|(_, h)| h.clone()).collect()
    }
}

impl<H: Clone> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
