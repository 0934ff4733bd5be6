use leptos::*;

/// Horizontal progress bar, `percent` clamped to 0..=100
#[component]
pub fn ProgressBar(
    #[prop(into)]
    percent: MaybeSignal<u32>,
    #[prop(default = "bg-gradient-to-r from-primary to-success")]
    fill: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full h-2 bg-gray-700 rounded-full overflow-hidden">
            <div
                class=format!("h-full rounded-full transition-all duration-500 {}", fill)
                style=move || width_style(percent.get())
            />
        </div>
    }
}

fn width_style(percent: u32) -> String {
    format!("width: {}%", percent.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed percentages must be accepted as well as signals
    #[allow(dead_code)]
    fn fixed_and_reactive_percent() -> impl IntoView {
        let (percent, _) = create_signal(10u32);
        view! {
            <ProgressBar percent=87u32 />
            <ProgressBar percent=percent fill="bg-green-500" />
        }
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(width_style(42), "width: 42%");
        assert_eq!(width_style(250), "width: 100%");
    }
}
