//! Dashboard page showing the crop advisory for a logged-in user.

use leptos::prelude::*;

use crate::components::advisory_row::{AdvisoryRow, RowIcon};
use crate::state::advisory::AdvisoryRecord;
use crate::state::view::ViewState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"Welcome to Kheti App"</h1>
            {move || match view_state.get().advisory().cloned() {
                Some(record) => view! { <AdvisoryPanel record/> }.into_any(),
                None => view! {
                    <div class="dashboard-page__loading">
                        <span class="spinner" aria-label="Loading"></span>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn AdvisoryPanel(record: AdvisoryRecord) -> impl IntoView {
    let fertilizers = record.fertilizer_summary();

    view! {
        <div class="advisory-panel">
            <AdvisoryRow icon=RowIcon::Leaf label="Crop to Plant" value=record.crop_to_plant/>
            <AdvisoryRow icon=RowIcon::Seedling label="Planting Time" value=record.planting_time/>
            <AdvisoryRow icon=RowIcon::CloudSun label="Weather Forecast" value=record.weather_forecast/>
            <AdvisoryRow label="Recommended Fertilizers" value=fertilizers/>
            <AdvisoryRow label="Best Yield Time" value=record.best_yield_time/>
            <AdvisoryRow label="Worst Yield Time" value=record.worst_yield_time/>
            <div class="advisory-row">
                <span class="advisory-row__icon" aria-hidden="true">{RowIcon::Warning.glyph()}</span>
                <span class="advisory-row__label">"Precautions:"</span>
            </div>
            <ul class="advisory-panel__precautions">
                {record
                    .precautions
                    .into_iter()
                    .map(|p| view! { <li>{p}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
