//! Observable state holder shared by the view models.

use tokio::sync::watch;

/// Current value plus change notifications for subscribed views.
#[derive(Debug)]
pub struct Observable<S> {
    sender: watch::Sender<S>,
}

impl<S: Clone> Observable<S> {
    pub fn new(initial: S) -> Self {
        // Updates go through send_modify, which works without receivers
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Reads the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Mutates the state in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.sender.send_modify(f);
    }
}

impl<S: Clone + Default> Default for Observable<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
