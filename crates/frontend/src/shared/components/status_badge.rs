use contracts::domain::release::RELEASE_STATUSES;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: &str) -> BadgeColor {
    match status {
        "completed" => BadgeColor::Success,
        "processing" => BadgeColor::Brand,
        "failed" => BadgeColor::Danger,
        "draft" => BadgeColor::Warning,
        _ => BadgeColor::Informative,
    }
}

/// Release status rendered as a tinted badge with its human label.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let label = RELEASE_STATUSES
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| status.clone());

    view! {
        <Badge appearance=BadgeAppearance::Tint color=status_color(&status)>
            {label}
        </Badge>
    }
}
