use std::collections::BTreeMap;

const VIDEO_EDITING_ROOT: &str = "/services/video-editing";

// Where the on-page back control goes. Keys are exact paths.
const ROUTE_HIERARCHY: &[(&str, &str)] = &[
    ("/services/video-editing", "/"),
    ("/services/web-dev", "/"),
    ("/services/ai-agents", "/"),
    ("/about", "/"),
    ("/process", "/"),
    ("/careers", "/"),
    ("/contact", "/"),
];

/// Named parameters pulled out of the current path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn single(name: &str, value: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(name.to_string(), value.to_string());
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Where the app currently is: the path and the params derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub params: RouteParams,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let params = extract_params(&path);
        Self { path, params }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Turns a raw URL fragment into a path.
///
/// `""`, `"#"` and `"#/"` all mean home. A fragment that lost its leading
/// slash (`#about`) is treated as `/about` so a path always starts with `/`.
pub fn normalize_fragment(raw: &str) -> String {
    let trimmed = raw.strip_prefix('#').unwrap_or(raw);
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_start_matches('#')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Nesting level used to pick push or replace.
///
/// Service roots (`/services/<slug>`) sit on the same level as top-level
/// pages so hopping between them counts as a sideways move. Anything one
/// level below a service root is depth 2.
pub fn depth(path: &str) -> usize {
    let segments = segments(path);
    match segments.as_slice() {
        [] => 0,
        [_] => 1,
        ["services", _] => 1,
        ["services", _, _] => 2,
        more => more.len(),
    }
}

// A single non-empty segment with nothing after it.
fn single_segment(rest: &str) -> Option<&str> {
    if rest.is_empty() || rest.contains('/') {
        None
    } else {
        Some(rest)
    }
}

/// Derives params from the known dynamic shapes, first match wins.
pub fn extract_params(path: &str) -> RouteParams {
    if let Some(category) = path
        .strip_prefix("/services/video-editing/")
        .and_then(single_segment)
    {
        return RouteParams::single("categoryId", category);
    }
    if let Some(slug) = path.strip_prefix("/services/").and_then(single_segment) {
        return RouteParams::single("slug", slug);
    }
    RouteParams::default()
}

/// The page the on-screen back control leads to, regardless of what the
/// browser history holds.
pub fn logical_parent(current: &str) -> &'static str {
    let path = current.strip_prefix('#').unwrap_or(current);

    if let Some((_, parent)) = ROUTE_HIERARCHY.iter().find(|(child, _)| *child == path) {
        return *parent;
    }
    if path.starts_with("/services/video-editing/") {
        return VIDEO_EDITING_ROOT;
    }
    if path.contains("/services/") {
        return "/";
    }
    "/"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "/")]
    #[case("#", "/")]
    #[case("#/", "/")]
    #[case("#/about", "/about")]
    #[case("/services/web-dev", "/services/web-dev")]
    #[case("#contact", "/contact")]
    fn fragments_normalize_to_rooted_paths(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_fragment(raw), expected);
    }

    #[rstest]
    #[case("/", 0)]
    #[case("", 0)]
    #[case("#/", 0)]
    #[case("/about", 1)]
    #[case("/careers", 1)]
    #[case("/services", 1)]
    #[case("/services/web-dev", 1)]
    #[case("/services/video-editing", 1)]
    #[case("/services/video-editing/cat-shorts", 2)]
    #[case("/services/web-dev/landing", 2)]
    #[case("/services/video-editing/cat-shorts/clip", 4)]
    #[case("/blog/post", 2)]
    #[case("/a/b/c/d", 4)]
    fn depth_levels(#[case] path: &str, #[case] expected: usize) {
        assert_eq!(depth(path), expected);
    }

    #[test]
    fn video_category_yields_category_id() {
        let params = extract_params("/services/video-editing/cat-promo");
        assert_eq!(params.get("categoryId"), Some("cat-promo"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn service_root_yields_slug() {
        let params = extract_params("/services/ai-agents");
        assert_eq!(params.get("slug"), Some("ai-agents"));
        assert_eq!(params.len(), 1);

        let video = extract_params("/services/video-editing");
        assert_eq!(video.get("slug"), Some("video-editing"));
        assert_eq!(video.get("categoryId"), None);
    }

    #[rstest]
    #[case("/")]
    #[case("/careers")]
    #[case("/services")]
    #[case("/services/")]
    #[case("/services/web-dev/")]
    #[case("/services/web-dev/extra")]
    #[case("/services/video-editing/cat-shorts/clip")]
    fn unknown_shapes_yield_no_params(#[case] path: &str) {
        assert!(extract_params(path).is_empty(), "{path} should have no params");
    }

    #[rstest]
    #[case("/services/video-editing/cat-shorts", "/services/video-editing")]
    #[case("/services/video-editing/cat-anything", "/services/video-editing")]
    #[case("#/services/video-editing/cat-promo", "/services/video-editing")]
    #[case("/services/video-editing", "/")]
    #[case("/services/web-dev", "/")]
    #[case("/services/web-dev/item", "/")]
    #[case("/about", "/")]
    #[case("/careers", "/")]
    #[case("/", "/")]
    #[case("/nowhere/at/all", "/")]
    fn parents(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(logical_parent(path), expected);
    }

    #[test]
    fn location_carries_params_for_its_path() {
        let location = Location::new("/services/web-dev");
        assert_eq!(location.params.get("slug"), Some("web-dev"));
        assert_eq!(Location::default().path, "/");
        assert!(Location::default().params.is_empty());
    }

    #[test]
    fn params_collect_from_pairs() {
        let params: RouteParams = [("slug", "web-dev")].into_iter().collect();
        assert_eq!(params, extract_params("/services/web-dev"));
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("slug", "web-dev")]);
    }
}
