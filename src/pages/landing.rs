use yew::prelude::*;

use crate::hooks::use_engine_ready;
use crate::content::{strip_labels, MANIFIESTO_CHECKLIST, MENTORIA_CARDS, SERVICES, STRIP_PANELS};
use crate::layout::horizontal::{HorizontalPanel, HorizontalScrollSection};

fn consultoria() -> Html {
    html! {
        <section id="consultoria" class="panel-section">
            <p class="eyebrow">{"Consultoria"}</p>
            <h2>{"Soluciones para la alta direccion"}</h2>
            <div class="service-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <article key={service.id} class="service">
                            <span class="service-id">{service.id}</span>
                            <h3>{service.title}</h3>
                            <p>{service.desc}</p>
                        </article>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

fn manifiesto() -> Html {
    html! {
        <section id="manifiesto" class="panel-section">
            <p class="eyebrow">{"Manifiesto 2026"}</p>
            <h2>{"Renacer no es volver a empezar."}</h2>
            <ul class="checklist">
                {
                    MANIFIESTO_CHECKLIST.iter().map(|item| html! {
                        <li key={*item}>{*item}</li>
                    }).collect::<Html>()
                }
            </ul>
        </section>
    }
}

fn panel_body(id: &str) -> Html {
    match id {
        "consultoria" => consultoria(),
        "manifiesto" => manifiesto(),
        _ => html! {},
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let ready = use_engine_ready();

    html! {
        <main class="landing-page">
            <header id="inicio" class="hero">
                <div class="hero-content">
                    <h1>{"Reconstruye tu liderazgo desde las cenizas."}</h1>
                    <p class="hero-subtitle">
                        {"Consultoria y mentoria ejecutiva para quienes deciden volver mas fuertes."}
                    </p>
                    <a href="#mentoria" class="hero-cta">{"Descubrir"}</a>
                </div>
            </header>

            <section id="mentoria" class="mentoria">
                <p class="eyebrow">{"Mentoria"}</p>
                <div class="mentoria-grid">
                    {
                        MENTORIA_CARDS.iter().map(|card| html! {
                            <article key={card.title} class="mentoria-card">
                                <h3>{card.title}</h3>
                                <blockquote>{card.quote}</blockquote>
                                <p>{card.sub}</p>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <HorizontalScrollSection ready={ready} labels={strip_labels()}>
                { for STRIP_PANELS.iter().map(|(id, _)| html! {
                    <HorizontalPanel key={*id} id={*id}>
                        { panel_body(id) }
                    </HorizontalPanel>
                }) }
            </HorizontalScrollSection>

            <section id="quote" class="quote">
                <blockquote>{"\"El fuego no destruye al fenix, lo revela.\""}</blockquote>
            </section>

            <footer id="contacto" class="footer">
                <p>{"FENIX 360"}</p>
                <nav class="footer-links">
                    <a href="#manifiesto">{"Manifiesto"}</a>
                    <a href="#mentoria">{"Mentoria"}</a>
                    <a href="#consultoria">{"Consultoria"}</a>
                </nav>
            </footer>
        </main>
    }
}
