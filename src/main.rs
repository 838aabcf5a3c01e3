use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, Level};
use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod consent;
mod loader;
mod site;
mod storage;
mod theme;
mod view;

mod components {
    pub mod booking_form;
    pub mod cookie_banner;
    pub mod footer;
    pub mod gallery;
    pub mod gdpr_info;
    pub mod loading;
    pub mod nav;
    pub mod occupancy_chart;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::{
    cookie_banner::{CookieBanner, CookieSettings},
    gdpr_info::GdprInfo,
    loading::{LoadingOverlay, PerformanceBadge},
};
use consent::{ConsentCategory, ConsentController, Overlay};
use loader::{performance_score, LoadPhase};
use pages::{
    landing::Landing,
    legal::{CookiePolicy, PrivacyPolicy, TermsAndConditions},
};
use site::SiteContext;
use storage::LocalStore;
use theme::ThemeController;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/cookies")]
    Cookies,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Cookies => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let consent = use_state(|| {
        let mut consent = ConsentController::new(LocalStore);
        consent.load_persisted();
        consent
    });
    let theme = {
        let state = consent.state();
        use_state(move || ThemeController::load(LocalStore, &state))
    };
    let phase = use_state(|| LoadPhase::Loading);

    // Loading overlay, then the performance badge a little later.
    {
        let phase = phase.clone();
        use_effect_with_deps(move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
            let slot = pending.clone();
            let loading = Timeout::new(config::LOADING_DELAY_MS, move || {
                phase.set(LoadPhase::Ready);
                let measure = Timeout::new(config::BADGE_DELAY_MS, move || {
                    phase.set(LoadPhase::Measured(performance_score(Math::random())));
                });
                *slot.borrow_mut() = Some(measure);
            });
            move || {
                drop(loading);
                pending.borrow_mut().take();
            }
        }, ());
    }

    // Every consent action goes through here so the theme store follows it.
    let update_consent = {
        let consent = consent.clone();
        let theme = theme.clone();
        move |action: fn(&mut ConsentController<LocalStore>)| {
            let consent = consent.clone();
            let theme = theme.clone();
            Callback::from(move |_: ()| {
                let mut next = (*consent).clone();
                action(&mut next);
                if next.is_decided() {
                    theme.apply_consent(&next.state());
                }
                consent.set(next);
            })
        }
    };

    let on_accept_all = update_consent(ConsentController::accept_all);
    let on_accept_necessary = update_consent(ConsentController::accept_necessary_only);
    let on_save = update_consent(ConsentController::save_preferences);
    let on_open_settings = update_consent(ConsentController::open_settings);
    let on_cancel_settings = update_consent(ConsentController::close_settings);

    let on_toggle_category = {
        let consent = consent.clone();
        Callback::from(move |category: ConsentCategory| {
            let mut next = (*consent).clone();
            next.toggle_category(category);
            consent.set(next);
        })
    };

    let on_toggle_dark = {
        let theme = theme.clone();
        let consent_state = consent.state();
        Callback::from(move |_: ()| {
            let mut next = (*theme).clone();
            next.toggle(&consent_state);
            theme.set(next);
        })
    };

    let on_show_gdpr = update_consent(ConsentController::show_gdpr_info);
    let on_close_gdpr = update_consent(ConsentController::close_gdpr_info);

    let context = SiteContext {
        consent: consent.state(),
        dark_mode: theme.is_dark(),
        on_toggle_dark,
        on_show_gdpr,
        on_show_cookie_settings: on_open_settings.clone(),
    };

    html! {
        <ContextProvider<SiteContext> context={context.clone()}>
            <div class={classes!("site", context.theme_class())}>
                <style>
                    {r#"
                        * { box-sizing: border-box; }
                        html { scroll-behavior: smooth; }
                        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }

                        .site { min-height: 100vh; transition: background 0.5s ease, color 0.5s ease; }
                        .theme-light { background: #fff; color: #1f2937; --surface: #f3f4f6; --card: #fff; --muted: #4b5563; --border: #e5e7eb; }
                        .theme-dark { background: #111827; color: #fff; --surface: #1f2937; --card: #1f2937; --muted: #d1d5db; --border: #374151; }

                        .muted { color: var(--muted); }
                        .small { font-size: 0.875rem; }
                        .container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
                        .card { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08); }
                        .split { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; align-items: start; }

                        .primary-button { background: #2563eb; color: #fff; border: none; border-radius: 10px; padding: 0.6rem 1.2rem; font-weight: 600; cursor: pointer; }
                        .primary-button:hover { background: #1d4ed8; }
                        .primary-button.wide { width: 100%; padding: 0.9rem; }
                        .secondary-button { background: var(--surface); color: inherit; border: 1px solid var(--border); border-radius: 10px; padding: 0.6rem 1.2rem; cursor: pointer; }
                        .link-button { background: none; border: none; padding: 0; color: #3b82f6; cursor: pointer; text-decoration: underline; font: inherit; }

                        .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                        .form-field { margin-top: 1rem; }
                        .form-field label, .form-row label { display: block; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.35rem; }
                        input, select, textarea { width: 100%; padding: 0.6rem 0.75rem; border-radius: 8px; border: 1px solid var(--border); background: var(--surface); color: inherit; font: inherit; }
                        .modal-backdrop { position: fixed; inset: 0; z-index: 60; background: rgba(0, 0, 0, 0.6); display: flex; align-items: center; justify-content: center; padding: 1rem; }
                        .modal { width: 100%; max-width: 640px; max-height: 90vh; overflow-y: auto; background: var(--card); color: inherit; border-radius: 20px; }
                        .modal-header { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 1.5rem; border-bottom: 1px solid var(--border); }
                        .modal-header h3 { margin: 0; }
                        .modal-body { padding: 1.5rem; }
                        .modal-close { background: none; border: none; color: inherit; font-size: 1.1rem; cursor: pointer; }
                        .modal-actions { display: flex; justify-content: flex-end; gap: 0.75rem; margin-top: 1.5rem; }
                        .spinner { width: 40px; height: 40px; border: 4px solid #bfdbfe; border-top-color: #3b82f6; border-radius: 50%; animation: spin 1s linear infinite; margin: 0 auto 1rem; }
                        .spinner.large { width: 64px; height: 64px; }
                        @keyframes fadeIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
                        @keyframes scrolling { 0% { transform: translateY(0); opacity: 1; } 100% { transform: translateY(14px); opacity: 0; } }
                        @keyframes spin { to { transform: rotate(360deg); } }
                        @media (max-width: 860px) {
                            .split, .feature-grid, .footer-grid { grid-template-columns: 1fr; }
                            .room-grid { grid-template-columns: repeat(2, 1fr); }
                        }
                    "#}
                </style>
                if phase.is_loading() {
                    <LoadingOverlay />
                }
                if let Some(score) = phase.score() {
                    <PerformanceBadge {score} />
                }
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                if consent.shows_banner() {
                    <CookieBanner
                        {on_accept_all}
                        {on_accept_necessary}
                        on_customize={on_open_settings}
                    />
                }
                {
                    match consent.overlay() {
                        Overlay::Closed => html! {},
                        Overlay::CookieSettings => html! {
                            <CookieSettings
                                state={consent.state()}
                                on_toggle={on_toggle_category}
                                {on_save}
                                on_cancel={on_cancel_settings}
                            />
                        },
                        Overlay::GdprInfo => html! {
                            <GdprInfo on_close={on_close_gdpr} />
                        },
                    }
                }
            </div>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::PROPERTY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use crate::booking::{BookingError, BookingFormController, FieldValue};
    use crate::consent::{ConsentCategory, ConsentController};
    use crate::storage::MemoryStore;
    use crate::theme::ThemeController;
    use crate::view::{Section, ViewController};

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn scroll_then_book_with_late_consent() {
        let mut view = ViewController::default();
        view.on_scroll(2000.0);
        assert_eq!(view.active_section(), Section::Calendar);

        let mut form = BookingFormController::default();
        form.open();
        form.update_field("checkIn", text("2025-06-02"));
        form.update_field("checkOut", text("2025-06-09"));
        form.update_field("guests", text("2"));
        form.update_field("name", text("Marco Bianchi"));
        form.update_field("email", text("marco@example.com"));

        assert_eq!(form.submit(), Err(BookingError::PrivacyConsentRequired));
        assert!(form.is_open());
        assert_eq!(form.draft().name, "Marco Bianchi");

        form.update_field("privacyConsent", FieldValue::Checked(true));
        let handoff = form.submit().expect("consent given");

        assert_eq!(handoff.summary.guests, 2);
        assert!(!form.is_open());
    }

    #[test]
    fn revoking_preferences_forgets_theme_on_next_visit() {
        let store = MemoryStore::new();
        let mut consent = ConsentController::new(store.clone());
        consent.load_persisted();
        consent.accept_all();

        let mut theme = ThemeController::load(store.clone(), &consent.state());
        theme.toggle(&consent.state());

        consent.open_settings();
        consent.toggle_category(ConsentCategory::Preferences);
        consent.save_preferences();
        theme.apply_consent(&consent.state());

        let mut reloaded = ConsentController::new(store.clone());
        reloaded.load_persisted();
        let theme = ThemeController::load(store, &reloaded.state());
        assert!(!theme.is_dark());
        assert!(reloaded.state().allows(ConsentCategory::Analytics));
    }
}
