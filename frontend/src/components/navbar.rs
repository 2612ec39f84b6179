use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::components::Logo;
use crate::models::NAV_ITEMS;
use crate::styles;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Track whether the page has scrolled past the top
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                let target = w.clone();
                EventListener::new(&w, "scroll", move |_| {
                    let y = target.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > 10.0);
                })
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_class = classes!(
        styles::NAV,
        if *scrolled { styles::NAV_SCROLLED } else { styles::NAV_TOP }
    );

    html! {
        <header class={nav_class}>
            <div class={styles::NAV_INNER}>
                <a href="#" class={styles::NAV_BRAND}>
                    <Logo />
                </a>

                <nav class="hidden md:block">
                    <ul class="flex space-x-8">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>
                                <a href={item.href} class={styles::NAV_LINK}>{ item.label }</a>
                            </li>
                        }) }
                    </ul>
                </nav>

                <button
                    class={classes!(styles::BUTTON_ICON, "md:hidden")}
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Cerrar menú" } else { "Abrir menú" }}
                >
                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        if *menu_open {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </div>

            if *menu_open {
                <div class={styles::NAV_MOBILE}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.label} href={item.href} class={styles::NAV_MOBILE_LINK} onclick={close_menu.clone()}>
                            { item.label }
                        </a>
                    }) }
                </div>
            }
        </header>
    }
}
