use log::warn;
use wasm_bindgen::JsValue;

/// The address-bar fragment and the history stack behind it.
///
/// Paths are passed without the leading `#`.
pub trait HashHistory {
    /// The current fragment as the platform reports it.
    fn fragment(&self) -> String;

    /// Assigns a new fragment and creates a history entry. The platform
    /// announces the change later with a `hashchange` notification.
    fn push(&mut self, path: &str);

    /// Swaps the current entry in place. No notification follows.
    fn replace(&mut self, path: &str);
}

/// The real browser, reached through `web-sys`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HashHistory for BrowserHistory {
    fn fragment(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn push(&mut self, path: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window, cannot push {}", path);
            return;
        };
        if let Err(e) = window.location().set_hash(path) {
            warn!("Failed to set hash to {}: {:?}", path, e);
        }
    }

    fn replace(&mut self, path: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window, cannot replace with {}", path);
            return;
        };
        let result = window.history().and_then(|history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", path)))
        });
        if let Err(e) = result {
            warn!("Failed to replace history entry with {}: {:?}", path, e);
        }
    }
}

/// An in-process history stack that behaves like the browser's.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    notifications: usize,
}

#[cfg(test)]
impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
            notifications: 0,
        }
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Steps back like the browser back button. Returns false at the bottom.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.notifications += 1;
        true
    }

    /// Consumes one pending `hashchange` notification, if any.
    pub fn take_notification(&mut self) -> bool {
        if self.notifications == 0 {
            return false;
        }
        self.notifications -= 1;
        true
    }

    pub fn pending_notifications(&self) -> usize {
        self.notifications
    }
}

#[cfg(test)]
impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
impl HashHistory for MemoryHistory {
    fn fragment(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        // Browsers ignore assigning the fragment that is already there.
        if self.entries[self.cursor] == path {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor += 1;
        self.notifications += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_adds_an_entry_and_a_notification() {
        let mut history = MemoryHistory::default();
        history.push("/about");
        assert_eq!(history.len(), 2);
        assert_eq!(history.fragment(), "/about");
        assert!(history.take_notification());
        assert!(!history.take_notification());
    }

    #[test]
    fn pushing_the_current_fragment_is_ignored() {
        let mut history = MemoryHistory::new("/about");
        history.push("/about");
        assert_eq!(history.len(), 1);
        assert_eq!(history.pending_notifications(), 0);
    }

    #[test]
    fn replace_is_silent() {
        let mut history = MemoryHistory::new("/services/web-dev");
        history.replace("/services/ai-agents");
        assert_eq!(history.len(), 1);
        assert_eq!(history.fragment(), "/services/ai-agents");
        assert_eq!(history.pending_notifications(), 0);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        history.push("/b");
        assert!(history.back());
        history.push("/c");
        assert_eq!(history.len(), 3);
        assert_eq!(history.fragment(), "/c");
    }

    #[test]
    fn back_stops_at_the_first_entry() {
        let mut history = MemoryHistory::default();
        assert!(!history.back());
        assert_eq!(history.pending_notifications(), 0);
    }
}
