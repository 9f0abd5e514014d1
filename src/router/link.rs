use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use super::use_router;
use crate::config;

/// What a link points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A router path such as `/careers`.
    Path(String),
    /// An element id on the home page, written as `#contact`.
    Anchor(String),
}

impl LinkTarget {
    pub fn parse(to: &str) -> Self {
        match to.strip_prefix('#') {
            Some(rest) if !rest.starts_with('/') => Self::Anchor(rest.to_string()),
            Some(rest) => Self::Path(rest.to_string()),
            None => Self::Path(to.to_string()),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Path(path) => format!("#{}", path),
            Self::Anchor(id) => format!("#{}", id),
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No element #{} to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// An anchor that routes instead of letting the browser follow it.
///
/// `#section` targets scroll to a section of the home page, going home
/// first when needed.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let router = use_router();
    let target = LinkTarget::parse(&props.to);
    let href = target.href();

    let onclick = {
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(extra) = &extra {
                extra.emit(());
            }
            match &target {
                LinkTarget::Anchor(id) => {
                    if router.path() != "/" {
                        router.navigate("/");
                        let id = id.clone();
                        Timeout::new(config::ANCHOR_SCROLL_DELAY_MS, move || {
                            scroll_to_element(&id);
                        })
                        .forget();
                    } else {
                        scroll_to_element(id);
                    }
                }
                LinkTarget::Path(path) => {
                    router.navigate(path.clone());
                    scroll_to_top();
                }
            }
        })
    };

    html! {
        <a href={href} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_anchors() {
        assert_eq!(
            LinkTarget::parse("#contact"),
            LinkTarget::Anchor("contact".to_string())
        );
        assert_eq!(LinkTarget::parse("#contact").href(), "#contact");
    }

    #[test]
    fn slashed_targets_are_paths() {
        assert_eq!(
            LinkTarget::parse("/careers"),
            LinkTarget::Path("/careers".to_string())
        );
        assert_eq!(
            LinkTarget::parse("#/services/web-dev"),
            LinkTarget::Path("/services/web-dev".to_string())
        );
        assert_eq!(LinkTarget::parse("/careers").href(), "#/careers");
    }
}
