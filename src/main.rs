use log::info;
use yew::prelude::*;

mod config;
mod data;
mod forms;
mod router;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod navbar;
    pub mod sections;
}
mod pages {
    pub mod careers;
    pub mod home;
    pub mod service;
    pub mod video_category;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    careers::CareersPage, home::HomePage, service::ServicePage,
    video_category::VideoCategoryPage,
};
use router::{Route, RouterProvider, Routes};

#[function_component]
fn App() -> Html {
    html! {
        <RouterProvider>
            <Navbar />
            <Routes>
                <Route path="/" view={html! { <HomePage /> }} />
                <Route path="/careers" view={html! { <CareersPage /> }} />
                <Route path="/services/video-editing/:categoryId" view={html! { <VideoCategoryPage /> }} />
                <Route path="/services/:slug" view={html! { <ServicePage /> }} />
            </Routes>
            <Footer />
        </RouterProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
