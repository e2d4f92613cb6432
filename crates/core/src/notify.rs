//! Listener registry for widget change events.
//!
//! Each widget owns one `Notifier` and emits through it after every
//! completed mutation. Listeners run synchronously, in subscription
//! order, on the emitting thread; the run-to-completion event model
//! means no second mutation can interleave with delivery.

use std::fmt;

/// Subscription list for events of type `E`.
pub struct Notifier<E> {
    listeners: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener. There is no unsubscribe; listeners live as
    /// long as the owning widget.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver one event to every listener.
    pub fn emit(&mut self, event: &E) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_listeners_in_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut notifier: Notifier<String> = Notifier::new();

        let first = Rc::clone(&seen);
        notifier.subscribe(move |e: &String| first.borrow_mut().push(format!("first:{e}")));
        let second = Rc::clone(&seen);
        notifier.subscribe(move |e: &String| second.borrow_mut().push(format!("second:{e}")));

        notifier.emit(&"hello".to_string());

        assert_eq!(
            *seen.borrow(),
            vec!["first:hello".to_string(), "second:hello".to_string()]
        );
    }

    #[test]
    fn test_emit_without_listeners_is_fine() {
        let mut notifier: Notifier<u32> = Notifier::new();
        notifier.emit(&7);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_one_emit_per_call() {
        let count = Rc::new(RefCell::new(0usize));
        let mut notifier: Notifier<()> = Notifier::new();

        let counter = Rc::clone(&count);
        notifier.subscribe(move |_| *counter.borrow_mut() += 1);

        notifier.emit(&());
        notifier.emit(&());
        assert_eq!(*count.borrow(), 2);
    }
}
