use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::booking::{BookingDraft, BookingField, FieldValue, MAX_GUESTS, MIN_GUESTS};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_field: Callback<(BookingField, FieldValue)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    pub on_show_gdpr: Callback<()>,
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let draft = &props.draft;

    let text_input = |field: BookingField| {
        let on_field = props.on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, FieldValue::Text(input.value())));
        })
    };

    let on_guests = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((BookingField::Guests, FieldValue::Text(select.value())));
        })
    };

    let on_consent = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((BookingField::PrivacyConsent, FieldValue::Checked(input.checked())));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_privacy = {
        let on_show_gdpr = props.on_show_gdpr.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_show_gdpr.emit(());
        })
    };

    html! {
        <div class="card booking-card">
            <style>
                {r#"
                    .card-header-row { display: flex; justify-content: space-between; align-items: center; }
                    .form-consent { display: flex; gap: 0.6rem; align-items: flex-start; margin: 1.25rem 0; }
                    .form-consent input { width: auto; margin-top: 0.2rem; }
                    .form-error { color: #dc2626; font-weight: 600; }
                    .booking-teaser, .booking-sent { text-align: center; }
                    .teaser-icon { font-size: 4rem; }
                "#}
            </style>
            <div class="card-header-row">
                <h3>{"Prenota Ora"}</h3>
                <button class="modal-close" onclick={on_close} aria-label="Chiudi">{"✕"}</button>
            </div>
            <form {onsubmit}>
                <div class="form-row">
                    <div>
                        <label for="checkIn">{"Check-in"}</label>
                        <input
                            id="checkIn"
                            type="date"
                            name={BookingField::CheckIn.name()}
                            value={date_value(draft.check_in)}
                            oninput={text_input(BookingField::CheckIn)}
                            required={true}
                        />
                    </div>
                    <div>
                        <label for="checkOut">{"Check-out"}</label>
                        <input
                            id="checkOut"
                            type="date"
                            name={BookingField::CheckOut.name()}
                            value={date_value(draft.check_out)}
                            oninput={text_input(BookingField::CheckOut)}
                            required={true}
                        />
                    </div>
                </div>
                <div class="form-field">
                    <label for="guests">{"Numero di ospiti"}</label>
                    <select id="guests" name={BookingField::Guests.name()} onchange={on_guests}>
                        { for (MIN_GUESTS..=MAX_GUESTS).map(|n| html! {
                            <option value={n.to_string()} selected={n == draft.guests}>
                                {format!("{} {}", n, if n == 1 { "ospite" } else { "ospiti" })}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label for="name">{"Nome e Cognome"}</label>
                    <input
                        id="name"
                        type="text"
                        name={BookingField::Name.name()}
                        value={draft.name.clone()}
                        oninput={text_input(BookingField::Name)}
                        placeholder="Inserisci il tuo nome completo"
                        required={true}
                    />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        name={BookingField::Email.name()}
                        value={draft.email.clone()}
                        oninput={text_input(BookingField::Email)}
                        placeholder="Inserisci la tua email"
                        required={true}
                    />
                </div>
                <div class="form-consent">
                    <input
                        id="privacyConsent"
                        type="checkbox"
                        name={BookingField::PrivacyConsent.name()}
                        checked={draft.privacy_consent}
                        onchange={on_consent}
                    />
                    <label for="privacyConsent" class="small">
                        {"Ho letto e accetto la "}
                        <button type="button" class="link-button" onclick={on_privacy}>{"Privacy Policy"}</button>
                        {" e autorizzo il trattamento dei miei dati personali in conformità al GDPR."}
                    </label>
                </div>
                if let Some(error) = &props.error {
                    <p class="form-error" role="alert">{error.clone()}</p>
                }
                <button type="submit" class="primary-button wide">
                    {"Procedi al Pagamento con PayPal"}
                </button>
            </form>
        </div>
    }
}
