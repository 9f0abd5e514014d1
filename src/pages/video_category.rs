use log::info;
use yew::prelude::*;

use crate::data::{up_next, video_category, Aspect, Item, ItemMetadata};
use crate::router::link::scroll_to_top;
use crate::router::{use_params, use_router};

fn embed_url(youtube_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
        youtube_id
    )
}

#[function_component(VideoCategoryPage)]
pub fn video_category_page() -> Html {
    let router = use_router();
    let params = use_params();
    let category_id = params.get("categoryId").unwrap_or_default().to_string();
    let category = video_category(&category_id);

    // None means "first video of the category".
    let current = use_state(|| None::<Item>);

    // A lateral move to another category keeps this component mounted.
    {
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                current.set(None);
                || ()
            },
            category_id.clone(),
        );
    }

    info!("Rendering video category page for {}", category_id);

    let back = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.navigate("/services/video-editing"))
    };

    let Some(category) = category else {
        return html! { <main class="video-category empty"></main> };
    };

    let videos: Vec<&'static Item> = category.items.iter().filter(|i| i.is_video()).collect();
    let playing: Option<Item> = (*current).or_else(|| videos.first().map(|v| **v));
    let queue = up_next(&videos, playing.as_ref());

    let player = match playing {
        Some(Item {
            title,
            description,
            metadata: ItemMetadata::Video { youtube_id, aspect },
            ..
        }) => html! {
            <div class="player">
                <div
                    class={classes!("player-frame", (aspect == Aspect::Portrait).then(|| "portrait"))}
                    style={format!("aspect-ratio: {};", aspect.css_ratio())}
                >
                    <iframe
                        src={embed_url(youtube_id)}
                        title={title}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen={true}
                    />
                </div>
                <h2>{title}</h2>
                <p>{description}</p>
            </div>
        },
        _ => html! { <p class="player-empty">{"No videos in this category yet."}</p> },
    };

    html! {
        <main class="video-category">
            <button class="back-link" onclick={back}>{"← All categories"}</button>
            <header>
                <h1>{category.title}</h1>
                <p>{category.description}</p>
            </header>
            <div class="video-layout">
                { player }
                <aside class="up-next">
                    <h3>{"Up Next"}</h3>
                    { for queue.iter().map(|video| {
                        let video = **video;
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| {
                                current.set(Some(video));
                                scroll_to_top();
                            })
                        };
                        html! {
                            <button key={video.id} class="up-next-item" {onclick}>
                                <img src={video.thumbnail} alt={video.title} loading="lazy" />
                                <span>{video.title}</span>
                            </button>
                        }
                    }) }
                </aside>
            </div>
            <style>
                {r#"
                .video-category {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                    min-height: 60vh;
                }
                .video-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .player-frame {
                    width: 100%;
                    border-radius: 16px;
                    overflow: hidden;
                    background: #000;
                }
                .player-frame.portrait {
                    max-width: 420px;
                    margin: 0 auto;
                }
                .player-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                .up-next {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .up-next-item {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    padding: 0.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    background: rgba(255, 255, 255, 0.02);
                    color: #fff;
                    text-align: left;
                    cursor: pointer;
                }
                .up-next-item img {
                    width: 120px;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 8px;
                }
                @media (max-width: 900px) {
                    .video-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
