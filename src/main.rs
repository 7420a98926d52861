use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod hooks;
mod layout {
    pub mod geometry;
    pub mod registry;
    pub mod panel_state;
    pub mod label;
    pub mod presenter;
    pub mod controller;
    pub mod horizontal;
}
mod navigation {
    pub mod resolver;
    pub mod anchors;
}
mod components {
    pub mod header;
    pub mod mobile_menu;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use config::HEADER_SCROLL_THRESHOLD;
use hooks::{use_engine_ready, use_is_desktop, use_scroll_lock, use_scroll_threshold};
use layout::registry::PinRegistry;
use navigation::anchors::{use_anchor_interception, use_hash_navigation};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Volver al inicio"}
                    </Link<Route>>
                </main>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    let registry = use_memo(|_| PinRegistry::new(), ());
    let registry = (*registry).clone();
    let ready = use_engine_ready();
    let is_desktop = use_is_desktop();
    let is_scrolled = use_scroll_threshold(HEADER_SCROLL_THRESHOLD);
    let menu_open = use_state(|| false);

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    // The overlay menu only exists below the breakpoint
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |is_desktop| {
                if *is_desktop {
                    menu_open.set(false);
                }
                || ()
            },
            is_desktop,
        );
    }

    use_scroll_lock(*menu_open);
    use_hash_navigation(registry.clone(), ready, close_menu.clone());
    use_anchor_interception(registry.clone(), close_menu.clone());

    html! {
        <ContextProvider<PinRegistry> context={registry}>
            <BrowserRouter>
                <style>
                    {r#"
                        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: #111827; background: #fff; overflow-x: hidden; }
                        .top-nav { position: fixed; top: 0; width: 100%; z-index: 60; padding: 1.5rem 0; transition: all 0.7s cubic-bezier(0.22, 1, 0.36, 1); }
                        .top-nav.scrolled { background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(12px); padding: 0.75rem 0; border-bottom: 1px solid rgba(243, 244, 246, 0.5); }
                        .nav-content { max-width: 1400px; margin: 0 auto; padding: 0 1.5rem; display: flex; justify-content: space-between; align-items: center; }
                        .nav-logo { font-family: serif; font-size: 1.75rem; font-weight: 700; color: #111827; text-decoration: none; }
                        .nav-logo-accent { color: #FF4D30; font-weight: 300; margin-left: 0.25rem; }
                        .nav-links { display: flex; gap: 3rem; }
                        .nav-link { font-size: 11px; font-weight: 600; letter-spacing: 0.2em; text-transform: uppercase; color: #9ca3af; text-decoration: none; }
                        .nav-link:hover { color: #111827; }
                        .nav-cta { font-size: 10px; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; padding: 1rem 2rem; border: 1px solid #111827; background: transparent; }
                        .burger-menu { display: none; background: none; border: none; }
                        .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: #111827; }
                        .mobile-menu { position: fixed; inset: 0; z-index: 55; background: #fff; opacity: 0; pointer-events: none; transition: opacity 0.3s ease; }
                        .mobile-menu-open { opacity: 1; pointer-events: auto; }
                        .mobile-menu-links { list-style: none; padding: 6rem 2rem; font-size: 2rem; font-family: serif; }
                        .mobile-menu-links a { color: #111827; text-decoration: none; }
                        .mobile-menu-close { position: absolute; top: 1.25rem; right: 1.5rem; font-size: 2rem; background: none; border: none; }
                        .hero { min-height: 100vh; display: flex; align-items: center; padding: 0 1.5rem; }
                        .hero-content { max-width: 1400px; margin: 0 auto; }
                        .hero-cta { display: inline-block; margin-top: 2rem; color: #FF4D30; letter-spacing: 0.2em; text-transform: uppercase; }
                        .eyebrow { font-size: 10px; font-weight: 700; letter-spacing: 0.25em; text-transform: uppercase; color: #FF4D30; }
                        .mentoria, .quote, .footer, .panel-section { padding: 6rem 1.5rem; }
                        .mentoria-grid, .service-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
                        .quote blockquote { font-family: serif; font-size: 2.5rem; text-align: center; }
                        @media (max-width: 767px) {
                            .nav-links, .nav-cta { display: none; }
                            .burger-menu { display: block; }
                        }
                    "#}
                </style>
                <Header
                    menu_open={*menu_open}
                    is_scrolled={is_scrolled}
                    on_toggle_menu={toggle_menu}
                    on_close_menu={close_menu}
                />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PinRegistry>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
