use crate::shared::icons::icon;
use leptos::prelude::*;

/// Group thousands with a thin space: 12345 -> "12 345".
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{202f}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or after an error
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().map(format_count).unwrap_or_else(|| "—".to_string())}
            </div>
            {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1\u{202f}234");
        assert_eq!(format_count(1234567), "1\u{202f}234\u{202f}567");
    }
}
