use yew::prelude::*;

use crate::consent::{ConsentCategory, ConsentState};

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub on_accept_all: Callback<()>,
    pub on_accept_necessary: Callback<()>,
    pub on_customize: Callback<()>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let click = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite">
            <style>
                {r#"
                    .cookie-banner { position: fixed; left: 0; right: 0; bottom: 0; z-index: 50; background: var(--card); border-top: 1px solid var(--border); padding: 1rem 1.5rem; box-shadow: 0 -4px 16px rgba(0, 0, 0, 0.1); }
                    .cookie-banner-content { max-width: 1120px; margin: 0 auto; display: flex; gap: 1.5rem; align-items: center; justify-content: space-between; flex-wrap: wrap; }
                    .cookie-banner-text { flex: 1; min-width: 280px; }
                    .cookie-banner-actions { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                "#}
            </style>
            <div class="cookie-banner-content">
                <div class="cookie-banner-text">
                    <h3>{"Il tuo consenso ai cookie"}</h3>
                    <p>
                        {"Utilizziamo cookie e tecnologie simili per migliorare la tua esperienza di navigazione, personalizzare contenuti e analizzare il traffico. Per saperne di più, consulta la nostra "}
                        <button class="link-button" onclick={click(&props.on_customize)}>
                            {"Cookie Policy"}
                        </button>
                        {"."}
                    </p>
                </div>
                <div class="cookie-banner-actions">
                    <button class="secondary-button" onclick={click(&props.on_accept_necessary)}>
                        {"Solo necessari"}
                    </button>
                    <button class="secondary-button" onclick={click(&props.on_customize)}>
                        {"Personalizza"}
                    </button>
                    <button class="primary-button" onclick={click(&props.on_accept_all)}>
                        {"Accetta tutti"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CookieSettingsProps {
    pub state: ConsentState,
    pub on_toggle: Callback<ConsentCategory>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CookieSettings)]
pub fn cookie_settings(props: &CookieSettingsProps) -> Html {
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <style>
                {r#"
                    .cookie-category { background: var(--surface); border-radius: 12px; padding: 1rem; margin-bottom: 0.75rem; }
                    .cookie-category-header { display: flex; justify-content: space-between; align-items: center; }
                    .cookie-category-title { display: flex; align-items: center; gap: 0.5rem; }
                    .cookie-category-title h4 { margin: 0; }
                    .pill { font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 999px; background: var(--border); }
                    .switch { position: relative; display: inline-block; width: 44px; height: 24px; }
                    .switch input { opacity: 0; width: 0; height: 0; }
                    .slider { position: absolute; inset: 0; background: #9ca3af; border-radius: 999px; cursor: pointer; transition: background 0.2s; }
                    .slider::after { content: ""; position: absolute; width: 20px; height: 20px; left: 2px; top: 2px; background: #fff; border-radius: 50%; transition: transform 0.2s; }
                    .slider.on { background: #2563eb; }
                    .slider.on::after { transform: translateX(20px); }
                "#}
            </style>
            <div class="modal">
                <div class="modal-header">
                    <h3>{"Impostazioni Cookie"}</h3>
                    <button class="modal-close" onclick={on_cancel.clone()} aria-label="Chiudi">{"✕"}</button>
                </div>
                <div class="modal-body">
                    <p class="muted">
                        {"La tua privacy è importante per noi. Puoi scegliere quali tipi di cookie accettare. I cookie necessari non possono essere disattivati poiché sono essenziali per il funzionamento del sito."}
                    </p>
                    <div class="cookie-categories">
                        { for ConsentCategory::ALL.iter().map(|category| {
                            let category = *category;
                            let enabled = props.state.allows(category);
                            let onchange = {
                                let on_toggle = props.on_toggle.clone();
                                Callback::from(move |_: Event| on_toggle.emit(category))
                            };
                            html! {
                                <div class="cookie-category" key={category.id()}>
                                    <div class="cookie-category-header">
                                        <div class="cookie-category-title">
                                            <h4>{category.name()}</h4>
                                            if category.is_required() {
                                                <span class="pill">{"Richiesto"}</span>
                                            }
                                        </div>
                                        <label class="switch">
                                            <input
                                                type="checkbox"
                                                checked={enabled}
                                                disabled={category.is_required()}
                                                {onchange}
                                            />
                                            <span class={classes!("slider", enabled.then(|| "on"))}></span>
                                        </label>
                                    </div>
                                    <p class="muted small">{category.description()}</p>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="modal-actions">
                        <button class="secondary-button" onclick={on_cancel}>{"Annulla"}</button>
                        <button class="primary-button" onclick={on_save}>{"Salva preferenze"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
