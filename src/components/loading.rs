use yew::prelude::*;

use crate::config;
use crate::loader::badge_class;

#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    html! {
        <div class="loading-overlay">
            <style>
                {r#"
                    .loading-overlay { position: fixed; inset: 0; z-index: 70; background: rgba(0, 0, 0, 0.8); display: flex; align-items: center; justify-content: center; color: #fff; text-align: center; }
                "#}
            </style>
            <div class="loading-content">
                <div class="spinner large"></div>
                <p>{format!("Caricamento di {}...", config::PROPERTY_NAME)}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PerformanceBadgeProps {
    pub score: u8,
}

#[function_component(PerformanceBadge)]
pub fn performance_badge(props: &PerformanceBadgeProps) -> Html {
    html! {
        <div class={badge_class(props.score)}>
            <style>
                {r#"
                    .perf-badge { position: fixed; right: 1rem; bottom: 6rem; z-index: 40; color: #fff; padding: 0.5rem 1rem; border-radius: 10px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); }
                    .perf-badge.good { background: #16a34a; }
                    .perf-badge.fair { background: #ca8a04; }
                    .perf-label { font-weight: 600; margin-right: 0.4rem; }
                "#}
            </style>
            <span class="perf-label">{"Performance:"}</span>
            <span>{format!("{}/100", props.score)}</span>
        </div>
    }
}
