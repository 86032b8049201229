use yew::prelude::*;

use crate::config::Span;

/// Renders copy with `<strong>` emphasis where the content asks for it.
pub fn spans(parts: &[Span]) -> Html {
    parts
        .iter()
        .map(|part| match part {
            Span::Plain(text) => html! { <>{text.clone()}</> },
            Span::Strong { strong } => html! { <strong>{strong.clone()}</strong> },
        })
        .collect::<Html>()
}
