use yew::prelude::*;

use crate::content::{MAX_RATING, TESTIMONIALS};
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, TOP_75, TOP_80};

#[derive(Properties, PartialEq)]
struct RatingProps {
    score: u8,
}

#[function_component(Rating)]
fn rating(props: &RatingProps) -> Html {
    html! {
        <div class="rating" aria-label={format!("{} out of {} stars", props.score, MAX_RATING)}>
            { for (0..MAX_RATING).map(|i| html! {
                <svg class={classes!("star", (i < props.score).then(|| "filled"))} fill="currentColor" viewBox="0 0 20 20">
                    <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
                </svg>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let title = use_node_ref();
    let text = use_node_ref();
    let cards = use_memo(|_| node_refs(TESTIMONIALS.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(
            vec![title.clone(), text.clone()],
            &section,
            TOP_80,
            rise(50.0, 800.0),
        ),
        RevealGroup::on_scroll(cards.to_vec(), &section, TOP_75, rise(50.0, 600.0).stagger(200.0)),
    ]);

    html! {
        <section id="testimonials" class="section" ref={section}>
            <style>
                {r#"
                    .testimonial {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        height: 100%;
                        padding: 2rem;
                    }
                    .rating {
                        display: flex;
                        margin-bottom: 1rem;
                    }
                    .star {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #d1d5db;
                    }
                    html.dark .star {
                        color: #4b5563;
                    }
                    .star.filled, html.dark .star.filled {
                        color: #eab308;
                    }
                    .testimonial blockquote {
                        flex-grow: 1;
                        font-style: italic;
                        font-size: 1.1rem;
                        margin: 1rem 0;
                        padding: 0 1rem;
                        quotes: "\201C" "\201D";
                    }
                    .testimonial blockquote::before {
                        content: open-quote;
                        color: var(--muted);
                    }
                    .testimonial blockquote::after {
                        content: close-quote;
                        color: var(--muted);
                    }
                    .testimonial footer {
                        margin-top: auto;
                        padding-top: 1rem;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title" ref={title}>{"What Our Clients Say"}</h2>
                <p class="section-lead" ref={text}>
                    {"Hear directly from homeowners who trusted us with their roofing needs."}
                </p>
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().zip(cards.iter()).map(|(testimonial, node)| html! {
                        <div class="card hover-lift testimonial" ref={node.clone()}>
                            <Rating score={testimonial.rating} />
                            <blockquote>{testimonial.quote}</blockquote>
                            <footer>
                                <p class="strong">{testimonial.name}</p>
                                <p class="muted small">{testimonial.location}</p>
                            </footer>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
