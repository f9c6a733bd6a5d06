//! CardAnimated: Thaw `Card` with an appear animation.
//!
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation from `app.css`.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds, for a stagger effect.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
