use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_about: Callback<()>,
    pub on_contact: Callback<()>,
    pub on_home: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { on_about, on_contact, on_home } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every nav action also folds the mobile menu back up.
    let nav_action = |action: &Callback<()>| {
        let menu_open = menu_open.clone();
        let action = action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            action.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <button class="nav-logo" onclick={nav_action(on_home)}>
                    <div class="logo-mark">{"⚡"}</div>
                    <div class="logo-text">
                        <span class="brand">{"RepLinker"}</span>
                        <span class="tagline">{"Smart Connections. Faster Closings."}</span>
                    </div>
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    <button class="nav-link" onclick={nav_action(on_about)}>
                        {"About"}
                    </button>
                    <button class="nav-link" onclick={nav_action(on_contact)}>
                        {"Contact Us"}
                    </button>
                </nav>
            </div>
        </header>
    }
}
