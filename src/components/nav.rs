use yew::prelude::*;

use crate::config;
use crate::view::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_dark: Callback<()>,
}

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Home => "🏠",
        Section::Info => "ℹ️",
        Section::Gallery => "⭐",
        Section::Calendar => "📅",
        Section::Contact => "💬",
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, menu_open, dark_mode, on_navigate, on_toggle_menu, on_toggle_dark } = props;

    let nav_button = |section: Section, with_icon: bool| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        });
        html! {
            <button
                class={classes!("nav-link", (*active == section).then(|| "active"))}
                {onclick}
            >
                if with_icon {
                    <span class="nav-icon">{section_icon(section)}</span>
                }
                {section.label()}
            </button>
        }
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let toggle_dark = {
        let on_toggle_dark = on_toggle_dark.clone();
        Callback::from(move |_: MouseEvent| on_toggle_dark.emit(()))
    };

    html! {
        <header class={classes!("top-nav", (*active != Section::Home).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 30; transition: background 0.3s ease; }
                    .top-nav.scrolled { background: var(--card); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.1); }
                    .nav-content { max-width: 1120px; margin: 0 auto; padding: 1rem 1.5rem; display: flex; align-items: center; justify-content: space-between; }
                    .nav-logo { font-size: 1.5rem; font-weight: 700; }
                    .nav-desktop { display: flex; gap: 1.5rem; }
                    .nav-link { background: none; border: none; color: inherit; font: inherit; cursor: pointer; padding: 0.25rem 0; border-bottom: 2px solid transparent; }
                    .nav-link.active { color: #3b82f6; border-bottom-color: #3b82f6; }
                    .nav-actions { display: flex; gap: 0.75rem; align-items: center; }
                    .theme-toggle { background: var(--surface); border: none; border-radius: 999px; width: 2.5rem; height: 2.5rem; cursor: pointer; }
                    .burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
                    .burger-menu span { width: 24px; height: 2px; background: currentColor; }
                    .nav-mobile { display: flex; flex-direction: column; background: var(--card); padding: 1rem 1.5rem; gap: 0.75rem; }
                    .nav-icon { margin-right: 0.5rem; }


                    @media (max-width: 860px) {
                        .nav-desktop { display: none; }
                        .burger-menu { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <span class="nav-logo">{config::PROPERTY_NAME}</span>
                <nav class="nav-desktop">
                    { for Section::ALL.iter().map(|s| nav_button(*s, false)) }
                </nav>
                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_dark} aria-label="Cambia tema">
                        { if *dark_mode { "☀️" } else { "🌙" } }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="nav-mobile">
                    { for Section::ALL.iter().map(|s| nav_button(*s, true)) }
                </div>
            }
        </header>
    }
}
