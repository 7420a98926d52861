use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_ITEMS;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Full-screen navigation for narrow viewports. Link clicks are routed by the
/// page-wide anchor interception, which also closes the menu.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div
            id="mobile-navigation"
            class={classes!("mobile-menu", props.open.then(|| "mobile-menu-open"))}
            aria-hidden={(!props.open).to_string()}
        >
            <button class="mobile-menu-close" onclick={close} aria-label="Cerrar menu">
                {"×"}
            </button>
            <ul class="mobile-menu-links">
                {
                    NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <li key={item.label} style={format!("transition-delay: {}ms;", 80 * i)}>
                            <a href={item.href}>{item.label}</a>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
