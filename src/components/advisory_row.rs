//! One labelled line of the advisory dashboard.

use leptos::prelude::*;

/// Icon glyph shown before a row label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowIcon {
    Leaf,
    Seedling,
    CloudSun,
    Warning,
}

impl RowIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Leaf => "🍃",
            Self::Seedling => "🌱",
            Self::CloudSun => "⛅",
            Self::Warning => "⚠",
        }
    }
}

#[component]
pub fn AdvisoryRow(
    label: &'static str,
    value: String,
    #[prop(optional)] icon: Option<RowIcon>,
) -> impl IntoView {
    view! {
        <div class="advisory-row">
            {icon.map(|i| view! { <span class="advisory-row__icon" aria-hidden="true">{i.glyph()}</span> })}
            <span class="advisory-row__label">{label}": "</span>
            <span class="advisory-row__value">{value}</span>
        </div>
    }
}
