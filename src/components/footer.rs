use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::data::{all_services, SOCIAL_LINKS};
use crate::router::Link;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-grid">
                <div class="site-footer-brand">
                    <Link to="/" classes="site-footer-logo">
                        <img src="/logo.png" alt="Logician Creatives" />
                    </Link>
                    <p>{"AI agents, cinematic video and fast websites for brands that want to lead."}</p>
                    <div class="site-footer-social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                key={link.id}
                                href={link.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                style={format!("--brand: {};", link.color)}
                            >
                                {link.name}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for all_services().iter().map(|service| html! {
                            <li key={service.slug}>
                                <Link to={service.path()}>{service.title}</Link>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link to="#process">{"Process"}</Link></li>
                        <li><Link to="#about">{"About"}</Link></li>
                        <li><Link to="/careers">{"Careers"}</Link></li>
                    </ul>
                </div>

                <div>
                    <h4>{"Start a project"}</h4>
                    <Link to="#contact" classes="site-footer-cta">{"Get in touch"}</Link>
                    <a class="site-footer-mail" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {config::CONTACT_EMAIL}
                    </a>
                </div>
            </div>
            <div class="site-footer-bottom">
                <span>{format!("© {} Logician Creatives. All rights reserved.", year)}</span>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: #000;
                    color: #a1a1aa;
                    padding: 4rem 1.5rem 2rem;
                }
                .site-footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .site-footer h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a {
                    color: #d4d4d8;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #fff;
                }
                .site-footer-logo img {
                    height: 36px;
                }
                .site-footer-social {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .site-footer-social a {
                    padding: 0.4rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    font-size: 0.8rem;
                }
                .site-footer-social a:hover {
                    border-color: var(--brand);
                }
                .site-footer-cta {
                    display: inline-block;
                    padding: 0.6rem 1.25rem;
                    border-radius: 8px;
                    background: #fff;
                    color: #000 !important;
                    font-weight: 700;
                }
                .site-footer-mail {
                    display: block;
                    margin-top: 0.75rem;
                    font-size: 0.85rem;
                }
                .site-footer-bottom {
                    max-width: 1280px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.8rem;
                    color: #52525b;
                }
                @media (max-width: 768px) {
                    .site-footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .site-footer-brand {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
