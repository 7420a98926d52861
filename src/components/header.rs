use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::content::NAV_ITEMS;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub is_scrolled: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu_open, is_scrolled, on_toggle_menu, on_close_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#inicio" class="nav-logo">
                        {"FENIX"}<span class="nav-logo-accent">{"360"}</span>
                    </a>

                    <div class="nav-links">
                        {
                            NAV_ITEMS.iter().map(|item| html! {
                                <a key={item.label} href={item.href} class="nav-link">
                                    {item.label}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>

                    <button class="nav-cta">{"Agenda Privada"}</button>
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Cerrar menu" } else { "Abrir menu" }}
                        aria-expanded={menu_open.to_string()}
                        aria-controls="mobile-navigation"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <MobileMenu open={*menu_open} on_close={on_close_menu.clone()} />
        </>
    }
}
