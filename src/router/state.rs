use log::debug;

use super::history::HashHistory;
use super::path::{depth, logical_parent, normalize_fragment, Location};

/// How a navigation touched the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// The router's state machine, independent of any UI.
///
/// Pushes are applied when the platform reports the fragment change through
/// [`HashRouter::handle_hash_change`]. Silent replaces apply immediately and
/// arm a guard so a late notification for the same fragment is not processed
/// twice.
pub struct HashRouter<H> {
    history: H,
    location: Location,
    // Fragment written by the last silent replace.
    silenced: Option<String>,
}

impl<H: HashHistory> HashRouter<H> {
    pub fn new(history: H) -> Self {
        let location = Location::new(normalize_fragment(&history.fragment()));
        Self {
            history,
            location,
            silenced: None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    #[cfg(test)]
    pub fn path(&self) -> &str {
        &self.location.path
    }

    #[cfg(test)]
    pub fn history(&self) -> &H {
        &self.history
    }

    #[cfg(test)]
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Reacts to a `hashchange` notification.
    ///
    /// Returns the new location, or `None` when the notification belongs to
    /// a silent replace that was already applied. Every notification disarms
    /// the guard, so a replace whose notification never arrives cannot
    /// swallow a later, unrelated one.
    pub fn handle_hash_change(&mut self) -> Option<Location> {
        let path = normalize_fragment(&self.history.fragment());
        if let Some(expected) = self.silenced.take() {
            if expected == path {
                debug!("Skipping hashchange for {}, already applied", path);
                return None;
            }
        }
        self.apply(path);
        Some(self.location.clone())
    }

    /// Moves to `target`.
    ///
    /// Sideways moves between pages of the same non-zero depth replace the
    /// current entry; everything else pushes. Navigating to where the
    /// address bar already points does nothing and returns `None`.
    ///
    /// The address bar runs ahead of `location` while a push is waiting for
    /// its notification, so it is the one compared against.
    pub fn navigate(&mut self, target: &str) -> Option<HistoryMode> {
        let target = normalize_fragment(target);
        if target == normalize_fragment(&self.history.fragment()) {
            debug!("Already at {}", target);
            return None;
        }

        let current_depth = depth(&self.location.path);
        let next_depth = depth(&target);

        if current_depth == next_depth && current_depth > 0 {
            debug!("Lateral move {} -> {} (replace)", self.location.path, target);
            self.replace_silently(target);
            Some(HistoryMode::Replace)
        } else {
            debug!(
                "Move {} -> {} (push, depth {} -> {})",
                self.location.path, target, current_depth, next_depth
            );
            self.silenced = None;
            self.history.push(&target);
            Some(HistoryMode::Push)
        }
    }

    /// Goes to the logical parent of the current page without adding a
    /// history entry. Returns the parent path.
    pub fn go_back(&mut self) -> &str {
        let parent = logical_parent(&self.location.path);
        debug!("Logical back {} -> {}", self.location.path, parent);
        self.replace_silently(parent.to_string());
        &self.location.path
    }

    fn replace_silently(&mut self, path: String) {
        self.silenced = Some(path.clone());
        self.history.replace(&path);
        self.apply(path);
    }

    fn apply(&mut self, path: String) {
        self.location = Location::new(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::history::MemoryHistory;

    fn router_at(path: &str) -> HashRouter<MemoryHistory> {
        HashRouter::new(MemoryHistory::new(path))
    }

    // Delivers queued notifications the way the event loop would.
    fn settle(router: &mut HashRouter<MemoryHistory>) {
        while router.history_mut().take_notification() {
            router.handle_hash_change();
        }
    }

    #[test]
    fn starts_at_home_without_a_fragment() {
        let router = HashRouter::new(MemoryHistory::default());
        assert_eq!(router.path(), "/");
        assert!(router.location().params.is_empty());

        let router = router_at("#");
        assert_eq!(router.path(), "/");
    }

    #[test]
    fn starts_from_a_deep_link_with_params() {
        let router = router_at("/services/video-editing/cat-shorts");
        assert_eq!(
            router.location().params.get("categoryId"),
            Some("cat-shorts")
        );
    }

    #[test]
    fn moving_deeper_pushes_and_applies_on_notification() {
        let mut router = router_at("/");
        assert_eq!(router.navigate("/services/web-dev"), Some(HistoryMode::Push));
        assert_eq!(router.history().len(), 2);
        // Nothing changes until the platform reports the new fragment.
        assert_eq!(router.path(), "/");

        settle(&mut router);
        assert_eq!(router.path(), "/services/web-dev");
        assert_eq!(router.location().params.get("slug"), Some("web-dev"));
    }

    #[test]
    fn sibling_services_replace_the_entry() {
        let mut router = router_at("/");
        router.navigate("/services/web-dev");
        settle(&mut router);
        let entries = router.history().len();

        assert_eq!(
            router.navigate("/services/ai-agents"),
            Some(HistoryMode::Replace)
        );
        assert_eq!(router.history().len(), entries);
        assert_eq!(router.path(), "/services/ai-agents");
        assert_eq!(router.location().params.get("slug"), Some("ai-agents"));
        assert_eq!(router.history().pending_notifications(), 0);
    }

    #[test]
    fn top_level_page_to_service_is_lateral() {
        let mut router = router_at("/careers");
        assert_eq!(
            router.navigate("/services/video-editing"),
            Some(HistoryMode::Replace)
        );
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn lateral_category_switch_refreshes_category_param() {
        let mut router = router_at("/services/video-editing/cat-shorts");
        assert_eq!(
            router.navigate("/services/video-editing/cat-promo"),
            Some(HistoryMode::Replace)
        );
        assert_eq!(router.location().params.get("categoryId"), Some("cat-promo"));
    }

    #[test]
    fn moving_up_pushes() {
        let mut router = router_at("/services/web-dev");
        assert_eq!(router.navigate("/"), Some(HistoryMode::Push));
        settle(&mut router);
        assert_eq!(router.path(), "/");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn navigating_to_the_current_path_is_a_no_op() {
        let mut router = router_at("/services/web-dev");
        assert_eq!(router.navigate("/services/web-dev"), None);
        assert_eq!(router.navigate("#/services/web-dev"), None);
        assert_eq!(router.path(), "/services/web-dev");
        assert_eq!(router.history().len(), 1);

        let mut home = router_at("");
        assert_eq!(home.navigate("/"), None);
        assert_eq!(home.history().len(), 1);
    }

    #[test]
    fn going_home_while_a_push_is_pending_still_goes_home() {
        let mut router = router_at("/");
        assert_eq!(router.navigate("/about"), Some(HistoryMode::Push));
        // The /about notification has not been delivered yet.
        assert_eq!(router.path(), "/");
        assert_eq!(router.navigate("/"), Some(HistoryMode::Push));

        settle(&mut router);
        assert_eq!(router.path(), "/");
        assert_eq!(router.history().fragment(), "/");
    }

    #[test]
    fn repeating_a_pending_push_adds_nothing() {
        let mut router = router_at("/");
        router.navigate("/careers");
        assert_eq!(router.navigate("/careers"), None);
        assert_eq!(router.history().len(), 2);

        settle(&mut router);
        assert_eq!(router.path(), "/careers");
    }

    #[test]
    fn go_back_from_a_category_lands_on_its_service() {
        let mut router = router_at("/services/video-editing/cat-shorts");
        assert_eq!(router.go_back(), "/services/video-editing");
        assert_eq!(router.history().len(), 1);
        assert_eq!(router.history().fragment(), "/services/video-editing");
        assert_eq!(router.location().params.get("slug"), Some("video-editing"));
    }

    #[test]
    fn go_back_from_a_top_level_page_lands_home() {
        let mut router = router_at("/about");
        assert_eq!(router.go_back(), "/");
        assert!(router.location().params.is_empty());
    }

    #[test]
    fn late_notification_for_a_silent_replace_is_swallowed() {
        let mut router = router_at("/services/video-editing/cat-shorts");
        router.go_back();
        assert_eq!(router.handle_hash_change(), None);
        assert_eq!(router.path(), "/services/video-editing");
    }

    #[test]
    fn guard_does_not_swallow_an_unrelated_notification() {
        let mut router = router_at("/");
        router.navigate("/careers");
        settle(&mut router);

        // The lateral replace never produces a notification; the next one
        // is the user pressing the browser back button.
        router.navigate("/services/web-dev");
        assert!(router.history_mut().back());
        settle(&mut router);
        assert_eq!(router.path(), "/");
        assert!(router.location().params.is_empty());
    }

    #[test]
    fn guard_is_single_use() {
        let mut router = router_at("/services/web-dev");
        router.go_back();
        assert_eq!(router.handle_hash_change(), None);
        let again = router.handle_hash_change();
        assert_eq!(again.map(|l| l.path), Some("/".to_string()));
    }

    #[test]
    fn push_disarms_a_pending_guard() {
        let mut router = router_at("/services/web-dev");
        router.go_back();
        router.navigate("/services/web-dev");
        router.history_mut().replace("/");
        // The fragment matches the old guard, yet it must be processed.
        assert!(router.handle_hash_change().is_some());
    }
}
