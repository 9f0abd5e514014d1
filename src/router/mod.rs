//! Hash based client router.
//!
//! The current location lives in the URL fragment (`#/services/web-dev`), so
//! reloads and deep links land on the same page. [`RouterProvider`] owns a
//! [`HashRouter`] bound to the browser and hands a [`RouterContext`] to the
//! view tree.

pub mod history;
pub mod link;
pub mod path;
pub mod routes;
pub mod state;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub use history::BrowserHistory;
pub use link::Link;
pub use path::{Location, RouteParams};
pub use routes::{Route, Routes};
pub use state::{HashRouter, HistoryMode};

/// What the view tree sees of the router.
#[derive(Clone, PartialEq)]
pub struct RouterContext {
    pub location: Location,
    on_navigate: Callback<String>,
    on_go_back: Callback<()>,
}

impl RouterContext {
    pub fn path(&self) -> &str {
        &self.location.path
    }

    pub fn navigate(&self, to: impl Into<String>) {
        self.on_navigate.emit(to.into());
    }

    pub fn go_back(&self) {
        self.on_go_back.emit(());
    }

    // Used when a component renders outside a provider.
    fn detached() -> Self {
        Self {
            location: Location::default(),
            on_navigate: Callback::from(|to: String| {
                warn!("navigate({}) called outside RouterProvider", to)
            }),
            on_go_back: Callback::from(|_| warn!("go_back() called outside RouterProvider")),
        }
    }
}

#[hook]
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().unwrap_or_else(RouterContext::detached)
}

#[hook]
pub fn use_params() -> RouteParams {
    use_router().location.params
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let router = use_mut_ref(|| HashRouter::new(BrowserHistory));
    let location = {
        let router = router.clone();
        use_state(move || router.borrow().location().clone())
    };

    // Follow the address bar.
    {
        let router = router.clone();
        let location = location.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let on_change = {
                    let router = router.clone();
                    let location = location.clone();
                    Closure::wrap(Box::new(move |_: web_sys::Event| {
                        let next = router.borrow_mut().handle_hash_change();
                        if let Some(next) = next {
                            debug!("hashchange -> {}", next.path);
                            location.set(next);
                        }
                    }) as Box<dyn FnMut(web_sys::Event)>)
                };

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "hashchange",
                        on_change.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for hashchange: {:?}", e);
                    }
                }

                // The fragment may have moved between first render and now.
                let next = router.borrow_mut().handle_hash_change();
                if let Some(next) = next {
                    location.set(next);
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_navigate = {
        let router = router.clone();
        let location = location.clone();
        Callback::from(move |to: String| {
            let mode = router.borrow_mut().navigate(&to);
            // Pushes arrive through hashchange; replaces don't fire one.
            if mode == Some(HistoryMode::Replace) {
                location.set(router.borrow().location().clone());
            }
        })
    };

    let on_go_back = {
        let router = router.clone();
        let location = location.clone();
        Callback::from(move |_| {
            let next = {
                let mut router = router.borrow_mut();
                router.go_back();
                router.location().clone()
            };
            location.set(next);
        })
    };

    let context = RouterContext {
        location: (*location).clone(),
        on_navigate,
        on_go_back,
    };

    html! {
        <ContextProvider<RouterContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<RouterContext>>
    }
}
