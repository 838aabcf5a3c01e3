use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::view::Section;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
    pub on_cookie_settings: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let quick_link = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
        html! {
            <li><button class="footer-link" {onclick}>{section.label()}</button></li>
        }
    };

    let cookie_settings = {
        let on_cookie_settings = props.on_cookie_settings.clone();
        Callback::from(move |_: MouseEvent| on_cookie_settings.emit(()))
    };

    // The newsletter has no backend; the field is decorative.
    let subscribe = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #111827; color: #e5e7eb; padding: 4rem 1.5rem 2rem; }
                    .footer-grid { max-width: 1120px; margin: 0 auto; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .site-footer ul { list-style: none; padding: 0; }
                    .footer-link { background: none; border: none; padding: 0.2rem 0; color: #9ca3af; cursor: pointer; font: inherit; text-decoration: none; }
                    .footer-link:hover { color: #fff; }
                    .newsletter { display: flex; gap: 0.5rem; }
                    .footer-bottom { text-align: center; border-top: 1px solid #374151; margin-top: 2rem; padding-top: 1.5rem; }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{config::PROPERTY_NAME}</h3>
                    <p class="muted">{"La tua casa vacanze di lusso nel cuore della Costa Azzurra italiana."}</p>
                    <p>{format!("© {} {}. Tutti i diritti riservati.", year, config::PROPERTY_NAME)}</p>
                </div>
                <div>
                    <h3>{"Link Utili"}</h3>
                    <ul>
                        { quick_link(Section::Home) }
                        { quick_link(Section::Info) }
                        { quick_link(Section::Gallery) }
                        { quick_link(Section::Calendar) }
                    </ul>
                </div>
                <div>
                    <h3>{"Informazioni Legali"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Terms} classes="footer-link">{"Termini e Condizioni"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Cookies} classes="footer-link">{"Cookie Policy"}</Link<Route>></li>
                        <li><button class="footer-link" onclick={cookie_settings}>{"Gestisci cookie"}</button></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Newsletter"}</h3>
                    <p class="muted">{"Iscriviti per ricevere offerte esclusive e aggiornamenti."}</p>
                    <div class="newsletter">
                        <input type="email" placeholder="La tua email" />
                        <button class="primary-button" onclick={subscribe}>{"Iscriviti"}</button>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="muted small">{"Progettato e sviluppato con ❤️ in Italia"}</p>
            </div>
        </footer>
    }
}
