use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::data::all_services;
use crate::router::{use_router, Link};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Process", "#process"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let router = use_router();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);

    // Any route change closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            router.path().to_string(),
        );
    }

    let solid = scroll_y > config::NAV_SCROLL_THRESHOLD || router.path() != "/";

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            services_open.set(false);
        })
    };

    let open_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(true))
    };
    let close_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(false))
    };

    html! {
        <header class={classes!("site-nav", solid.then(|| "solid"))}>
            <div class="site-nav-content">
                <Link to="/" classes="site-nav-logo" onclick={close_menu.clone()}>
                    <img src="/logo.png" alt="Logician Creatives" />
                    <span class="site-nav-tagline">{"AI • Video • Web"}</span>
                </Link>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("site-nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div
                        class="site-nav-dropdown"
                        onmouseenter={open_services}
                        onmouseleave={close_services}
                    >
                        <Link to="#services" classes="nav-link" onclick={close_menu.clone()}>
                            {"Services"}
                        </Link>
                        {
                            if *services_open || *menu_open {
                                html! {
                                    <div class="site-nav-dropdown-panel">
                                        { for all_services().iter().map(|service| html! {
                                            <Link
                                                to={service.path()}
                                                classes={classes!("dropdown-item", service.color)}
                                                onclick={close_menu.clone()}
                                            >
                                                <span class="dropdown-icon">{service.icon}</span>
                                                <span>{service.title}</span>
                                            </Link>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    { for NAV_ITEMS.iter().map(|(label, href)| html! {
                        <Link to={*href} classes="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </Link>
                    }) }
                    <Link to="/careers" classes="nav-link" onclick={close_menu.clone()}>
                        {"Careers"}
                    </Link>
                </nav>
            </div>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                    background: transparent;
                }
                .site-nav.solid {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .site-nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .site-nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                }
                .site-nav-logo img {
                    height: 40px;
                }
                .site-nav-tagline {
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    color: #a1a1aa;
                }
                .site-nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #d4d4d8;
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .site-nav-dropdown {
                    position: relative;
                }
                .site-nav-dropdown-panel {
                    position: absolute;
                    top: 100%;
                    left: -1rem;
                    width: 260px;
                    margin-top: 0.75rem;
                    background: #09090b;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    overflow: hidden;
                }
                .dropdown-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    color: #fff;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .dropdown-item:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .dropdown-item.pink .dropdown-icon { color: #f472b6; }
                .dropdown-item.cyan .dropdown-icon { color: #22d3ee; }
                .dropdown-item.violet .dropdown-icon { color: #a78bfa; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .site-nav-links {
                        display: none;
                    }
                    .site-nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(0, 0, 0, 0.95);
                    }
                    .site-nav-dropdown-panel {
                        position: static;
                        width: 100%;
                    }
                }
                "#}
            </style>
        </header>
    }
}
