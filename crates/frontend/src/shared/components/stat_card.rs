use super::card_animated::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline number with a translated caption.
#[component]
pub fn StatCard(
    icon_name: &'static str,
    label: Signal<String>,
    value: Signal<String>,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="stat-card">
                <div class="stat-card__icon">{icon(icon_name)}</div>
                <div class="stat-card__body">
                    <div class="stat-card__value">{move || value.get()}</div>
                    <div class="stat-card__label">{move || label.get()}</div>
                </div>
            </div>
        </CardAnimated>
    }
}

/// `"92.5%"`, or a dash when there is nothing to average.
pub fn format_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(92.54)), "92.5%");
        assert_eq!(format_percent(None), "-");
    }
}
