use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::booking::{BookingField, BookingFormController, FieldValue};
use crate::components::booking_form::BookingForm;
use crate::components::footer::Footer;
use crate::components::gallery::{RoomThumbnails, VirtualTour};
use crate::components::nav::Nav;
use crate::components::occupancy_chart::OccupancyChart;
use crate::config;
use crate::consent::ConsentCategory;
use crate::site::SiteContext;
use crate::view::{Sample, ScrollThrottle, Section, ViewAction, ViewController};

pub const RATES: [(&str, &str); 4] = [
    ("Bassa Stagione (Nov-Mar)", "€180/notte"),
    ("Media Stagione (Apr-Mag, Set-Ott)", "€250/notte"),
    ("Alta Stagione (Giu-Ago)", "€350/notte"),
    ("Deposito cauzionale", "€500"),
];

// Monotonic page clock; wall-clock time can step backwards.
fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(Date::now)
}

fn scroll_to_anchor(anchor: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_context::<SiteContext>().expect("Landing rendered outside SiteContext");
    let view = use_reducer(ViewController::default);
    let booking = use_state(BookingFormController::default);
    let booking_error = use_state(|| None::<String>);
    let booking_sent = use_state(|| false);

    // Scroll tracking, sampled at most once per throttle window.
    {
        let view = view.clone();
        use_effect_with_deps(move |_| {
            let window = window().expect("no global window");
            let throttle = Rc::new(RefCell::new(ScrollThrottle::new(config::SCROLL_THROTTLE_MS)));
            let trailing: Rc<RefCell<Option<Timeout>>> = Rc::default();

            let sample: Rc<dyn Fn()> = {
                let window = window.clone();
                Rc::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    view.dispatch(ViewAction::Scrolled(scroll_y));
                })
            };

            let scroll_callback = {
                let trailing = trailing.clone();
                let sample = sample.clone();
                Closure::wrap(Box::new(move || {
                    let decision = throttle.borrow_mut().offer(now_ms());
                    match decision {
                        Sample::Run => {
                            trailing.borrow_mut().take();
                            sample();
                        }
                        Sample::Defer(wait_ms) => {
                            let throttle = throttle.clone();
                            let sample = sample.clone();
                            let timeout = Timeout::new(wait_ms, move || {
                                let due = throttle.borrow_mut().fire_trailing(now_ms());
                                if due {
                                    sample();
                                }
                            });
                            *trailing.borrow_mut() = Some(timeout);
                        }
                        Sample::Drop => {}
                    }
                }) as Box<dyn FnMut()>)
            };

            let _ = window.add_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            );

            // Initial check
            sample();

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                trailing.borrow_mut().take();
            }
        }, ());
    }

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            view.dispatch(ViewAction::Navigate(section));
            scroll_to_anchor(section.anchor());
        })
    };

    // Any click on the page body dismisses the mobile menu.
    let close_menu = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::CloseMenu))
    };

    let on_toggle_menu = {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(ViewAction::ToggleMenu))
    };

    let go_to = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    let toggle_booking = {
        let booking = booking.clone();
        let booking_error = booking_error.clone();
        let booking_sent = booking_sent.clone();
        Callback::from(move |_: ()| {
            let mut next = (*booking).clone();
            next.toggle();
            booking_error.set(None);
            booking_sent.set(false);
            booking.set(next);
        })
    };

    let on_field = {
        let booking = booking.clone();
        Callback::from(move |(field, value): (BookingField, FieldValue)| {
            let mut next = (*booking).clone();
            next.update_field(field.name(), value);
            booking.set(next);
        })
    };

    let on_submit = {
        let booking = booking.clone();
        let booking_error = booking_error.clone();
        let booking_sent = booking_sent.clone();
        let analytics = site.consent.allows(ConsentCategory::Analytics);
        Callback::from(move |_: ()| {
            let mut next = (*booking).clone();
            match next.submit() {
                Ok(handoff) => {
                    if analytics {
                        let summary = serde_json::to_string(&handoff.summary).unwrap_or_default();
                        gloo_console::log!("Prenotazione effettuata:", summary);
                    }
                    booking_error.set(None);
                    booking_sent.set(true);
                    info!("Handing off to payment provider");
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(config::PAYMENT_REDIRECT_DELAY_MS).await;
                        if let Some(window) = window() {
                            let _ = window.location().set_href(config::payment_redirect_url());
                        }
                    });
                }
                Err(e) => booking_error.set(Some(e.to_string())),
            }
            booking.set(next);
        })
    };

    let open_booking_click = {
        let toggle_booking = toggle_booking.clone();
        Callback::from(move |_: MouseEvent| toggle_booking.emit(()))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero { position: relative; height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; overflow: hidden; color: #fff; }
                    .hero-background { position: absolute; inset: 0; background: linear-gradient(135deg, #1e3a8a, #0f766e); }
                    .hero-video-placeholder { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; opacity: 0.15; font-size: 2rem; }
                    .hero-content { position: relative; z-index: 1; padding: 0 1.5rem; animation: fadeIn 1s ease-out; }
                    .hero-content h1 { font-size: 3.5rem; margin: 0 0 1rem; }
                    .hero-subtitle { font-size: 1.25rem; max-width: 640px; margin: 0 auto 2rem; }
                    .hero-cta-group { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .hero-cta { background: rgba(255, 255, 255, 0.15); color: #fff; border: 1px solid rgba(255, 255, 255, 0.6); border-radius: 999px; padding: 0.8rem 1.8rem; cursor: pointer; font-weight: 600; }
                    .hero-cta.primary { background: #2563eb; border-color: #2563eb; }
                    .scroll-hint { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); text-align: center; }
                    .scroll-mouse { width: 24px; height: 40px; border: 2px solid #fff; border-radius: 12px; margin: 0.5rem auto 0; position: relative; }
                    .scroll-wheel { width: 4px; height: 8px; background: #fff; border-radius: 2px; position: absolute; left: 8px; top: 6px; animation: scrolling 1.5s infinite; }

                    .page-section { padding: 6rem 0; }
                    .page-section.alt { background: var(--surface); }
                    .page-section h2 { font-size: 2.25rem; text-align: center; margin: 0 0 3rem; }
                    .feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 3rem; }
                    .feature-card { background: var(--card); border-radius: 16px; padding: 2rem; text-align: center; border: 1px solid var(--border); }
                    .feature-icon { font-size: 2.25rem; margin-bottom: 1rem; }
                    .image-placeholder { min-height: 280px; }
                    .rate-row { display: flex; justify-content: space-between; padding: 0.6rem 0; border-bottom: 1px solid var(--border); }
                    .rate-price { font-weight: 700; }
                    .contact-item { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1rem; }
                    .contact-item h4 { margin: 0; }
                    .contact-item p { margin: 0.25rem 0 0; color: var(--muted); }
                    .contact-icon { font-size: 1.5rem; }

                    .card-header-row { display: flex; justify-content: space-between; align-items: center; }
                    @media (max-width: 860px) {
                        .hero-content h1 { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <Nav
                active={view.active_section()}
                menu_open={view.is_menu_open()}
                dark_mode={site.dark_mode}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
                on_toggle_dark={site.on_toggle_dark.clone()}
            />

            <main onclick={close_menu}>
                <section id={Section::Home.anchor()} class="hero">
                    <div class="hero-background">
                        <div class="hero-video-placeholder">{"Video Background"}</div>
                    </div>
                    <div class="hero-content">
                        <h1>{config::PROPERTY_NAME}</h1>
                        <p class="hero-subtitle">
                            {"Un'oasi di pace immersa nella natura, la tua casa lontano da casa."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={go_to(Section::Gallery)}>{"Esplora in 3D"}</button>
                            <button class="hero-cta primary" onclick={go_to(Section::Calendar)}>{"Prenota Ora"}</button>
                        </div>
                    </div>
                    <div class="scroll-hint">
                        <p>{"Scorri per scoprire"}</p>
                        <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
                    </div>
                </section>

                <section id={Section::Info.anchor()} class="page-section">
                    <div class="container">
                        <h2>{"La Tua Vacanza da Sogno"}</h2>
                        <div class="feature-grid">
                            <div class="feature-card">
                                <div class="feature-icon">{"🏠"}</div>
                                <h3>{"Villa di Lusso"}</h3>
                                <p>{"Villa di 250 mq con 4 camere da letto, 3 bagni, piscina privata, e vista panoramica sul mare e le montagne."}</p>
                            </div>
                            <div class="feature-card">
                                <div class="feature-icon">{"🗺️"}</div>
                                <h3>{"Posizione Ideale"}</h3>
                                <p>{"A soli 10 minuti dalla spiaggia e 15 minuti dal centro storico. Immersa nel verde con privacy totale."}</p>
                            </div>
                            <div class="feature-card">
                                <div class="feature-icon">{"⭐"}</div>
                                <h3>{"Servizi Premium"}</h3>
                                <p>{"Wi-Fi ad alta velocità, climatizzazione, cucina completamente attrezzata, barbecue, e possibilità di chef privato."}</p>
                            </div>
                        </div>
                        <div class="card split">
                            <div>
                                <h3>{"Un'esperienza indimenticabile"}</h3>
                                <p>{"Villa Paradiso è la destinazione perfetta per chi cerca una vacanza all'insegna del relax e del lusso. Immersa in un contesto naturale mozzafiato, la nostra villa offre tutti i comfort per un soggiorno indimenticabile."}</p>
                                <p>{"Gli spazi interni sono eleganti e accoglienti, arredati con gusto e dotati di tutte le comodità. Gli ambienti esterni, dal giardino alla piscina a sfioro, sono progettati per offrire momenti di puro relax."}</p>
                                <button class="primary-button" onclick={go_to(Section::Gallery)}>{"Scopri gli Ambienti"}</button>
                            </div>
                            <div class="image-placeholder"><span>{"Immagine Villa"}</span></div>
                        </div>
                    </div>
                </section>

                <section id={Section::Gallery.anchor()} class="page-section alt">
                    <div class="container">
                        <h2>{"Esplora in 3D"}</h2>
                        <div class="split">
                            <div>
                                <h3>{"Tour Virtuale Immersivo"}</h3>
                                <p>{"Esplora ogni angolo della villa con il nostro tour virtuale in 3D. Naviga liberamente tra le stanze, goditi la vista panoramica e immagina la tua prossima vacanza in questo paradiso."}</p>
                                <p>{"Grazie alla tecnologia all'avanguardia, potrai vivere un'esperienza immersiva e realistica, perfetta per farti un'idea dettagliata degli spazi e dell'atmosfera della villa."}</p>
                            </div>
                            <VirtualTour />
                        </div>
                        <RoomThumbnails />
                    </div>
                </section>

                <section id={Section::Calendar.anchor()} class="page-section">
                    <div class="container">
                        <h2>{"Prenota il Tuo Soggiorno"}</h2>
                        <div class="split">
                            <div>
                                <h3>{"Disponibilità"}</h3>
                                <div class="card">
                                    <h4>{"Occupazione mensile"}</h4>
                                    <OccupancyChart dark={site.dark_mode} />
                                </div>
                                <div class="card">
                                    <h4>{"Tariffe"}</h4>
                                    <div class="rate-table">
                                        { for RATES.iter().map(|(season, price)| html! {
                                            <div class="rate-row">
                                                <span>{*season}</span>
                                                <span class="rate-price">{*price}</span>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                                <button class="primary-button wide" onclick={open_booking_click.clone()}>
                                    {"Verifica Disponibilità e Prenota"}
                                </button>
                            </div>
                            <div>
                                if booking.is_open() {
                                    <BookingForm
                                        draft={booking.draft().clone()}
                                        error={(*booking_error).clone()}
                                        {on_field}
                                        {on_submit}
                                        on_close={toggle_booking.clone()}
                                        on_show_gdpr={site.on_show_gdpr.clone()}
                                    />
                                } else if *booking_sent {
                                    <div class="card booking-sent" role="status">
                                        <h3>{"Prenotazione inviata!"}</h3>
                                        <p>{"Ti reindirizzeremo a PayPal per completare il pagamento."}</p>
                                    </div>
                                } else {
                                    <div class="card booking-teaser">
                                        <div class="teaser-icon">{"📅"}</div>
                                        <h3>{"Verifica la disponibilità"}</h3>
                                        <p>{"Seleziona le date del tuo soggiorno e scopri la disponibilità in tempo reale."}</p>
                                        <button class="primary-button" onclick={open_booking_click}>
                                            {"Verifica Disponibilità"}
                                        </button>
                                    </div>
                                }
                            </div>
                        </div>
                    </div>
                </section>

                <section id={Section::Contact.anchor()} class="page-section alt">
                    <div class="container">
                        <h2>{"Contattaci"}</h2>
                        <div class="split">
                            <div>
                                <h3>{"Hai domande?"}</h3>
                                <p>{"Compila il modulo o contattaci direttamente usando uno dei metodi elencati qui sotto. Siamo qui per aiutarti a pianificare la vacanza perfetta."}</p>
                                <div class="contact-list">
                                    <div class="contact-item">
                                        <span class="contact-icon">{"💬"}</span>
                                        <div><h4>{"Email"}</h4><p>{config::CONTACT_EMAIL}</p></div>
                                    </div>
                                    <div class="contact-item">
                                        <span class="contact-icon">{"🕘"}</span>
                                        <div><h4>{"Orari"}</h4><p>{config::OFFICE_HOURS}</p></div>
                                    </div>
                                    <div class="contact-item">
                                        <span class="contact-icon">{"📍"}</span>
                                        <div>
                                            <h4>{"Indirizzo"}</h4>
                                            <p>{ for config::ADDRESS_LINES.iter().map(|line| html! { <>{*line}<br /></> }) }</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                            <ContactForm />
                        </div>
                    </div>
                </section>
            </main>

            <Footer
                {on_navigate}
                on_cookie_settings={site.on_show_cookie_settings.clone()}
            />
        </div>
    }
}

/// Unvalidated message form. There is no delivery target yet, so submitting
/// only stops the browser from reloading the page.
#[function_component(ContactForm)]
fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="card">
            <h3>{"Inviaci un messaggio"}</h3>
            <form {onsubmit}>
                <div class="form-row">
                    <div>
                        <label>{"Nome"}</label>
                        <input type="text" placeholder="Il tuo nome" />
                    </div>
                    <div>
                        <label>{"Email"}</label>
                        <input type="email" placeholder="La tua email" />
                    </div>
                </div>
                <div class="form-field">
                    <label>{"Oggetto"}</label>
                    <input type="text" placeholder="Oggetto del messaggio" />
                </div>
                <div class="form-field">
                    <label>{"Messaggio"}</label>
                    <textarea rows="5" placeholder="Scrivi il tuo messaggio qui..."></textarea>
                </div>
                <button type="submit" class="primary-button wide">{"Invia Messaggio"}</button>
            </form>
        </div>
    }
}
