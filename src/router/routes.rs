use log::info;
use yew::prelude::*;

use super::use_router;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Dynamic(String),
}

/// A route path such as `/services/:slug`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .map(|part| match part.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Dynamic(name.to_string()),
                _ => Segment::Static(part.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_dynamic(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Dynamic(_)))
    }

    /// A dynamic segment takes any non-empty run without a slash; static
    /// segments must be equal.
    pub fn matches(&self, path: &str) -> bool {
        if !self.is_dynamic() {
            return self.raw == path;
        }
        let parts: Vec<&str> = path.split('/').collect();
        parts.len() == self.segments.len()
            && self
                .segments
                .iter()
                .zip(parts)
                .all(|(segment, part)| match segment {
                    Segment::Static(s) => s == part,
                    Segment::Dynamic(_) => !part.is_empty(),
                })
    }
}

/// One registered route: a pattern and what it renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEntry<V> {
    pub pattern: RoutePattern,
    pub view: V,
}

impl<V> RouteEntry<V> {
    pub fn new(pattern: &str, view: V) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            view,
        }
    }
}

/// Picks the entry for `path`.
///
/// The first match in registration order wins. An unmatched path gets the
/// first registered entry instead of a not-found state.
pub fn resolve<'a, V>(entries: &'a [RouteEntry<V>], path: &str) -> Option<&'a RouteEntry<V>> {
    entries
        .iter()
        .find(|entry| entry.pattern.matches(path))
        .or_else(|| entries.first())
}

#[derive(Properties, PartialEq)]
pub struct RouteProps {
    pub path: AttrValue,
    pub view: Html,
}

/// Declares a route inside [`Routes`]. Renders nothing by itself.
#[function_component]
pub fn Route(_props: &RouteProps) -> Html {
    html! {}
}

#[derive(Properties, PartialEq)]
pub struct RoutesProps {
    #[prop_or_default]
    pub children: ChildrenWithProps<Route>,
}

#[function_component(Routes)]
pub fn routes(props: &RoutesProps) -> Html {
    let router = use_router();
    let entries: Vec<RouteEntry<Html>> = props
        .children
        .iter()
        .map(|child| RouteEntry::new(&child.props.path, child.props.view.clone()))
        .collect();

    match resolve(&entries, router.path()) {
        Some(entry) => {
            info!("Rendering {} for {}", entry.pattern.as_str(), router.path());
            entry.view.clone()
        }
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Page {
        Home,
        Careers,
        Category,
        Service,
    }

    fn table() -> Vec<RouteEntry<Page>> {
        vec![
            RouteEntry::new("/", Page::Home),
            RouteEntry::new("/careers", Page::Careers),
            RouteEntry::new("/services/video-editing/:categoryId", Page::Category),
            RouteEntry::new("/services/:slug", Page::Service),
        ]
    }

    fn page_for(path: &str) -> Option<Page> {
        resolve(&table(), path).map(|entry| entry.view)
    }

    #[test]
    fn static_patterns_match_exactly() {
        let careers = RoutePattern::parse("/careers");
        assert!(!careers.is_dynamic());
        assert!(careers.matches("/careers"));
        assert!(!careers.matches("/careers/"));
        assert!(!careers.matches("/careers/open"));
    }

    #[test]
    fn dynamic_segment_takes_one_component() {
        let service = RoutePattern::parse("/services/:slug");
        assert!(service.is_dynamic());
        assert!(service.matches("/services/web-dev"));
        assert!(!service.matches("/services/"));
        assert!(!service.matches("/services"));
        assert!(!service.matches("/services/web-dev/more"));
        assert!(!service.matches("/other/web-dev"));
    }

    #[test]
    fn service_path_resolves_to_service_view() {
        let routes = vec![
            RouteEntry::new("/", Page::Home),
            RouteEntry::new("/services/:slug", Page::Service),
        ];
        let entry = resolve(&routes, "/services/web-dev").map(|e| e.view);
        assert_eq!(entry, Some(Page::Service));
    }

    #[test]
    fn unknown_path_falls_back_to_first_entry() {
        assert_eq!(page_for("/unknown/path"), Some(Page::Home));
        assert_eq!(page_for("/services/web-dev/extra/deep"), Some(Page::Home));
    }

    #[test]
    fn registration_order_decides() {
        assert_eq!(page_for("/"), Some(Page::Home));
        assert_eq!(page_for("/careers"), Some(Page::Careers));
        assert_eq!(
            page_for("/services/video-editing/cat-shorts"),
            Some(Page::Category)
        );
        assert_eq!(page_for("/services/video-editing"), Some(Page::Service));
    }

    #[test]
    fn empty_table_resolves_to_nothing() {
        let empty: Vec<RouteEntry<Page>> = Vec::new();
        assert!(resolve(&empty, "/").is_none());
    }
}
