use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gdpr_info::{bullet_list, controller_address, DATA_COLLECTED, PURPOSES, RIGHTS};
use crate::config;
use crate::consent::ConsentCategory;
use crate::site::SiteContext;
use crate::Route;

const LEGAL_STYLES: &str = r#"
    .legal-content { min-height: 100vh; padding: 4rem 2rem; display: flex; flex-direction: column; align-items: center; }
    .legal-content > div { max-width: 800px; width: 100%; }
    .legal-content section { background: var(--surface); border-radius: 12px; padding: 2rem; margin: 1.5rem auto; }
    .legal-content h2 { color: #3b82f6; }
    .legal-links { margin-top: 2rem; text-align: center; }
    .legal-links a { color: #3b82f6; text-decoration: none; }
"#;

fn back_home() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"← Torna alla home"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. Titolare del trattamento"}</h2>
                    { controller_address() }
                </section>

                <section>
                    <h2>{"2. Dati raccolti"}</h2>
                    <p>{"Raccogliamo i seguenti dati personali:"}</p>
                    { bullet_list(&DATA_COLLECTED) }
                </section>

                <section>
                    <h2>{"3. Finalità del trattamento"}</h2>
                    { bullet_list(&PURPOSES) }
                </section>

                <section>
                    <h2>{"4. Pagamenti"}</h2>
                    <p>{"I pagamenti sono gestiti da PayPal. Non conserviamo i dati della tua carta o del tuo conto."}</p>
                </section>

                <section>
                    <h2>{"5. Conservazione locale"}</h2>
                    <p>{"Il sito salva nel tuo browser solo le tue scelte sui cookie e, se acconsenti ai cookie di preferenza, il tema chiaro o scuro. La bozza di prenotazione non viene mai salvata."}</p>
                </section>

                <section>
                    <h2>{"6. I tuoi diritti"}</h2>
                    <p>{"Hai diritto di:"}</p>
                    { bullet_list(&RIGHTS) }
                    <p>{format!("Per esercitare i tuoi diritti scrivi a {}.", config::PRIVACY_EMAIL)}</p>
                </section>

                { back_home() }
            </div>
        </div>
    }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    let site = use_context::<SiteContext>().expect("CookiePolicy rendered outside SiteContext");
    let manage = {
        let open = site.on_show_cookie_settings.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    html! {
        <div class="legal-content cookie-policy">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Cookie Policy"}</h1>

                <section>
                    <h2>{"Categorie di cookie"}</h2>
                    { for ConsentCategory::ALL.iter().map(|category| html! {
                        <>
                            <h3>{category.name()}</h3>
                            <p>{category.description()}</p>
                            <p class="small">
                                { if site.consent.allows(*category) { "Stato: attivo" } else { "Stato: non attivo" } }
                            </p>
                        </>
                    }) }
                </section>

                <section>
                    <h2>{"Archiviazione locale"}</h2>
                    <ul>
                        <li>{"Le tue scelte sui cookie (necessario)"}</li>
                        <li>{"Il tema chiaro o scuro (solo con i cookie di preferenza)"}</li>
                    </ul>
                    <button class="primary-button" onclick={manage}>{"Gestisci preferenze"}</button>
                </section>

                { back_home() }
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Termini e Condizioni"}</h1>

                <section>
                    <h2>{"1. Richiesta di prenotazione"}</h2>
                    <p>{"L'invio del modulo di prenotazione costituisce una richiesta di soggiorno. La prenotazione è confermata solo dopo il pagamento tramite PayPal."}</p>
                </section>

                <section>
                    <h2>{"2. Tariffe"}</h2>
                    <ul>
                        { for crate::pages::landing::RATES.iter().map(|(season, price)| html! {
                            <li>{format!("{}: {}", season, price)}</li>
                        }) }
                    </ul>
                </section>

                <section>
                    <h2>{"3. Ospiti"}</h2>
                    <p>{"La villa accoglie da 1 a 8 ospiti."}</p>
                </section>

                <section>
                    <h2>{"4. Contatti"}</h2>
                    <p>{format!("Per qualsiasi domanda scrivi a {} ({}).", config::CONTACT_EMAIL, config::OFFICE_HOURS)}</p>
                </section>

                { back_home() }
            </div>
        </div>
    }
}
