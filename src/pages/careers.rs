use log::info;
use yew::prelude::*;

use crate::router::Link;

#[function_component(CareersPage)]
pub fn careers_page() -> Html {
    info!("Rendering careers page");

    html! {
        <main class="careers">
            <h1>{"Careers"}</h1>
            <p>{"We're always happy to meet editors, engineers and automation nerds."}</p>
            <div class="careers-empty">
                <h3>{"No open positions right now"}</h3>
                <p>{"Check back soon, or say hello anyway."}</p>
                <Link to="/" classes="careers-home">{"Back to home"}</Link>
            </div>
            <style>
                {r#"
                .careers {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 10rem 1.5rem 6rem;
                    text-align: center;
                }
                .careers-empty {
                    margin-top: 3rem;
                    padding: 3rem 2rem;
                    border: 1px dashed rgba(255, 255, 255, 0.15);
                    border-radius: 20px;
                }
                .careers-home {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #a78bfa;
                }
                "#}
            </style>
        </main>
    }
}
