use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

pub const ROOMS: [&str; 6] = [
    "Salotto",
    "Cucina",
    "Camera Principale",
    "Bagno",
    "Piscina",
    "Vista Panoramica",
];

/// Placeholder for the 3D tour. Shows a loading state first, the way a
/// heavy lazily-loaded viewer would.
#[function_component(VirtualTour)]
pub fn virtual_tour() -> Html {
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::TOUR_LOAD_DELAY_MS, move || {
                loaded.set(true);
            });
            // Dropping the handle on unmount cancels the timer.
            move || drop(timeout)
        }, ());
    }

    if !*loaded {
        return html! {
            <div class="tour-frame tour-loading">
                <div class="spinner"></div>
                <p>{"Caricamento modello 3D..."}</p>
            </div>
        };
    }

    html! {
        <div class="tour-frame">
            <div class="tour-overlay"></div>
            <div class="tour-caption">
                <p class="tour-title">{"Calendario 3D Interattivo"}</p>
                <p class="small">{"Scorri per interagire con le date disponibili"}</p>
            </div>
        </div>
    }
}

#[function_component(RoomThumbnails)]
pub fn room_thumbnails() -> Html {
    html! {
        <div class="room-grid">
            <style>
                {r#"
                    .image-placeholder, .room-thumb, .tour-frame { background: linear-gradient(135deg, #93c5fd, #c4b5fd); border-radius: 16px; display: flex; align-items: center; justify-content: center; }
                    .tour-frame { aspect-ratio: 1 / 1; position: relative; overflow: hidden; }
                    .tour-overlay { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(59, 130, 246, 0.2), rgba(147, 51, 234, 0.2)); }
                    .tour-caption { position: relative; text-align: center; }
                    .tour-title { font-size: 1.25rem; font-weight: 600; }
                    .tour-loading { flex-direction: column; background: var(--card); border: 1px solid var(--border); }
                    .room-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 2rem; }
                    .room-thumb { aspect-ratio: 4 / 3; align-items: flex-end; justify-content: flex-start; }
                    .room-label { padding: 0.75rem 1rem; color: #fff; font-weight: 600; }
                "#}
            </style>
            { for ROOMS.iter().map(|room| html! {
                <div class="room-thumb" key={*room}>
                    <div class="room-label"><p>{*room}</p></div>
                </div>
            }) }
        </div>
    }
}
