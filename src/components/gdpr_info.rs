use yew::prelude::*;

use crate::config;

pub const DATA_COLLECTED: [&str; 4] = [
    "Dati di contatto (nome, email, telefono)",
    "Dati di prenotazione (date di soggiorno, numero di ospiti)",
    "Dati di pagamento (gestiti in modo sicuro tramite PayPal)",
    "Dati tecnici (indirizzo IP, tipo di browser)",
];

pub const PURPOSES: [&str; 4] = [
    "Gestione delle prenotazioni",
    "Comunicazioni relative al tuo soggiorno",
    "Miglioramento dei nostri servizi",
    "Adempimento di obblighi legali",
];

pub const RIGHTS: [&str; 6] = [
    "Accedere ai tuoi dati personali",
    "Rettificare i tuoi dati personali",
    "Cancellare i tuoi dati personali",
    "Limitare il trattamento dei tuoi dati",
    "Opporti al trattamento dei tuoi dati",
    "Portabilità dei dati",
];

pub fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

/// Name and postal address of the data controller.
pub fn controller_address() -> Html {
    html! {
        <p class="muted small">
            {"Villa Paradiso S.r.l."}<br />
            { for config::ADDRESS_LINES.iter().map(|line| html! { <>{*line}<br /></> }) }
            {format!("Email: {}", config::PRIVACY_EMAIL)}
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct GdprInfoProps {
    pub on_close: Callback<()>,
}

#[function_component(GdprInfo)]
pub fn gdpr_info(props: &GdprInfoProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <style>
                {r#"
                    .gdpr-notice { display: flex; gap: 0.75rem; background: var(--surface); border-radius: 12px; padding: 1rem; margin-bottom: 1.5rem; }
                    .gdpr-shield { font-size: 1.5rem; }
                "#}
            </style>
            <div class="modal">
                <div class="modal-header">
                    <h3>{"Informativa sulla Privacy (GDPR)"}</h3>
                    <button class="modal-close" onclick={on_close.clone()} aria-label="Chiudi">{"✕"}</button>
                </div>
                <div class="modal-body">
                    <div class="gdpr-notice">
                        <span class="gdpr-shield">{"🛡"}</span>
                        <p class="small">
                            {"Villa Paradiso rispetta pienamente il Regolamento Generale sulla Protezione dei Dati (GDPR) dell'Unione Europea. Ci impegniamo a proteggere e rispettare la tua privacy."}
                        </p>
                    </div>
                    <div class="gdpr-sections">
                        <div>
                            <h4>{"Titolare del trattamento"}</h4>
                            { controller_address() }
                        </div>
                        <div>
                            <h4>{"Dati raccolti"}</h4>
                            <p class="muted small">{"Raccogliamo i seguenti dati personali:"}</p>
                            { bullet_list(&DATA_COLLECTED) }
                        </div>
                        <div>
                            <h4>{"Finalità del trattamento"}</h4>
                            { bullet_list(&PURPOSES) }
                        </div>
                        <div>
                            <h4>{"I tuoi diritti"}</h4>
                            <p class="muted small">{"Hai diritto di:"}</p>
                            { bullet_list(&RIGHTS) }
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button class="primary-button" onclick={on_close}>{"Ho capito"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
