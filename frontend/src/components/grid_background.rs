use web_sys::js_sys::Math;
use yew::prelude::*;

const TILE_COUNT: usize = 60;

const GRID_CSS: &str = r#"
    .grid-background {
        position: absolute;
        inset: 0;
        z-index: 0;
        overflow: hidden;
        pointer-events: none;
        user-select: none;
        background: #F9F9F9;
    }
    .grid-background-tiles {
        width: 100%;
        height: 100%;
        display: flex;
        flex-wrap: wrap;
        align-content: flex-start;
        justify-content: center;
        opacity: 0.5;
    }
    .grid-tile {
        width: 8rem;
        height: 8rem;
        margin: 0.5rem;
        background: #fff;
        border-radius: 24px;
        box-shadow: inset 0 0 20px rgba(0, 0, 0, 0.01);
        animation-name: tile-pulse;
        animation-timing-function: cubic-bezier(0.4, 0, 0.6, 1);
        animation-iteration-count: infinite;
    }
    .grid-background-mask {
        position: absolute;
        inset: 0;
        z-index: 10;
    }
    .grid-background-mask.vertical {
        background: linear-gradient(to bottom, #F9F9F9, transparent, #F9F9F9);
    }
    .grid-background-mask.horizontal {
        background: linear-gradient(to right, #F9F9F9, transparent, #F9F9F9);
    }
    .grid-background-mask.radial {
        background: radial-gradient(circle at center, transparent 20%, #F9F9F9 80%);
    }
    @keyframes tile-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    @media (max-width: 768px) {
        .grid-background-tiles {
            opacity: 0.4;
        }
        .grid-tile {
            width: 6rem;
            height: 6rem;
        }
    }
"#;

/// Per-tile pulse timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TileTiming {
    delay: f64,
    duration: f64,
}

impl TileTiming {
    /// Maps two unit-interval samples to a 0..5 s delay and a 3..7 s period.
    fn from_samples(delay_sample: f64, duration_sample: f64) -> Self {
        Self {
            delay: delay_sample * 5.0,
            duration: 3.0 + duration_sample * 4.0,
        }
    }

    fn random() -> Self {
        Self::from_samples(Math::random(), Math::random())
    }

    fn style(&self) -> String {
        format!("animation-delay: {:.2}s; animation-duration: {:.2}s;", self.delay, self.duration)
    }
}

/// Softly pulsing tiles behind the authority section.
#[function_component]
pub fn GridBackground() -> Html {
    let timings = use_state(|| (0..TILE_COUNT).map(|_| TileTiming::random()).collect::<Vec<_>>());

    html! {
        <div class="grid-background">
            <style>{GRID_CSS}</style>
            <div class="grid-background-tiles">
                { for timings.iter().enumerate().map(|(index, timing)| html! {
                    <div key={index} class="grid-tile" style={timing.style()}></div>
                }) }
            </div>
            <div class="grid-background-mask vertical"></div>
            <div class="grid-background-mask horizontal"></div>
            <div class="grid-background-mask radial"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_stay_in_range() {
        assert_eq!(TileTiming::from_samples(0.0, 0.0), TileTiming { delay: 0.0, duration: 3.0 });
        let late = TileTiming::from_samples(0.999, 0.999);
        assert!(late.delay < 5.0);
        assert!(late.duration < 7.0);
    }

    #[test]
    fn style_sets_both_properties() {
        let timing = TileTiming::from_samples(0.5, 0.25);
        assert_eq!(timing.style(), "animation-delay: 2.50s; animation-duration: 4.00s;");
    }
}
