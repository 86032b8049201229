use std::rc::Rc;

use yew::prelude::*;

use crate::config::LandingConfig;
use crate::hooks::use_scroll_nav;

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        padding: 1.5rem 1rem 0;
        transition: transform 0.3s ease-in-out;
    }
    .navbar.nav-shown {
        transform: translateY(0);
    }
    .navbar.nav-hidden {
        transform: translateY(-150%);
    }
    .navbar-inner {
        width: 100%;
        max-width: 80rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .navbar-logo {
        font-size: 1.5rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        color: #000;
        width: 8rem;
    }
    .navbar-pill {
        display: flex;
        align-items: center;
        background: #F0F0F0;
        border-radius: 9999px;
        padding: 0.375rem 0.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .navbar-pill a {
        padding: 0.5rem 1.25rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #4b5563;
        text-decoration: none;
        border-radius: 9999px;
        transition: color 0.2s ease;
    }
    .navbar-pill a:hover {
        color: #000;
    }
    .navbar-pill a.active {
        font-weight: 600;
        color: #000;
        background: #fff;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .navbar-cta {
        width: 8rem;
        text-align: right;
    }
    .navbar-cta button {
        background: #000;
        color: #fff;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 600;
        white-space: nowrap;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
        transition: background 0.2s ease;
    }
    .navbar-cta button:hover {
        background: #1f2937;
    }
    .navbar-toggle {
        display: none;
    }
    .navbar-toggle button {
        background: none;
        border: none;
        padding: 0.5rem;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .mobile-menu {
        position: absolute;
        top: 5rem;
        left: 1rem;
        right: 1rem;
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .mobile-menu a {
        font-size: 1.125rem;
        font-weight: 500;
        color: #4b5563;
        text-decoration: none;
    }
    .mobile-menu a.active {
        font-weight: 600;
        color: #000;
    }
    .mobile-menu button {
        background: #000;
        color: #fff;
        width: 100%;
        padding: 0.75rem 0;
        margin-top: 0.5rem;
        border: none;
        border-radius: 9999px;
        font-weight: 600;
    }
    @media (max-width: 768px) {
        .navbar-pill,
        .navbar-cta {
            display: none;
        }
        .navbar-toggle {
            display: block;
        }
    }
    @media (min-width: 769px) {
        .mobile-menu {
            display: none;
        }
    }
"#;

#[function_component]
pub fn Navbar() -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();
    let visible = use_scroll_nav(config.behavior.nav_dead_zone_px);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = config
        .nav_links
        .iter()
        .map(|link| {
            html! {
                <a href={link.href.clone()} class={classes!(link.active.then_some("active"))}>
                    {link.label.clone()}
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("navbar", if visible { "nav-shown" } else { "nav-hidden" })}>
            <style>{NAVBAR_CSS}</style>
            <div class="navbar-inner">
                <div class="navbar-logo">{config.brand.clone()}</div>
                <div class="navbar-pill">
                    {links.clone()}
                </div>
                <div class="navbar-cta">
                    <button>{config.cta_label.clone()}</button>
                </div>
                <div class="navbar-toggle">
                    <button onclick={toggle_menu} aria-label="Menu">
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    {links}
                    <button>{config.cta_label.clone()}</button>
                </div>
            }
        </nav>
    }
}
