use log::info;
use yew::prelude::*;

use crate::components::contact::{ContactSection, Newsletter};
use crate::components::sections::{
    About, FaqSection, Hero, Marquee, Process, ServicesOverview, Testimonials,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    info!("Rendering home page");

    html! {
        <main class="home">
            <Hero />
            <ServicesOverview />
            <Marquee />
            <Process />
            <About />
            <Testimonials />
            <FaqSection />
            <ContactSection />
            <Newsletter />
            <style>
                {r#"
                .home section {
                    scroll-margin-top: 96px;
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    max-width: 900px;
                    line-height: 1.1;
                }
                .hero-accent {
                    background: linear-gradient(45deg, #f472b6, #a78bfa, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .hero-primary,
                .hero-secondary {
                    padding: 0.9rem 1.75rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hero-primary {
                    background: #fff;
                    color: #000;
                }
                .hero-secondary {
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                }
                .services-overview,
                .process,
                .about,
                .testimonials,
                .faq {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .services-overview-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    text-align: left;
                    padding: 2rem;
                    border-radius: 20px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(255, 255, 255, 0.02);
                    color: #fff;
                    cursor: pointer;
                }
                .service-card:hover {
                    border-color: rgba(255, 255, 255, 0.25);
                }
                .service-card-icon {
                    font-size: 2rem;
                }
                .marquee {
                    overflow: hidden;
                    padding: 2rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .marquee-track {
                    display: flex;
                    gap: 3rem;
                    width: max-content;
                    animation: marquee 40s linear infinite;
                }
                .marquee-item {
                    font-weight: 700;
                    white-space: nowrap;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .process-steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1.5rem;
                }
                .process-step-number {
                    font-size: 0.8rem;
                    color: #a78bfa;
                    letter-spacing: 0.2em;
                }
                .testimonial blockquote {
                    font-size: 1.25rem;
                    line-height: 1.6;
                }
                .testimonial figcaption {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .testimonial figcaption img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                }
                .testimonial figcaption div {
                    display: flex;
                    flex-direction: column;
                }
                .testimonial-rating {
                    color: #facc15;
                }
                .testimonial-controls {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-top: 1.5rem;
                }
                .testimonial-controls button {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    width: 40px;
                    height: 40px;
                    color: #fff;
                    cursor: pointer;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer p {
                    color: #a1a1aa;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </main>
    }
}
