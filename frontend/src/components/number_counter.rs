use yew::prelude::*;

use crate::behavior::counter::{CounterConfig, DEFAULT_DURATION_MS};
use crate::hooks::{use_animated_counter, use_viewport_trigger};

#[derive(Properties, PartialEq, Clone)]
pub struct NumberCounterProps {
    pub end: f64,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: f64,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Visible fraction needed before counting starts.
    #[prop_or(0.1)]
    pub threshold: f64,
}

/// Counts up from 0 to `end` the first time it scrolls into view.
#[function_component]
pub fn NumberCounter(props: &NumberCounterProps) -> Html {
    let (node, visible) = use_viewport_trigger(props.threshold);
    let config = CounterConfig::new(props.end)
        .duration_ms(props.duration)
        .decimals(props.decimals)
        .suffix(props.suffix.to_string());
    let text = use_animated_counter(config, visible);

    html! {
        <span ref={node} class="number-counter">{text}</span>
    }
}
