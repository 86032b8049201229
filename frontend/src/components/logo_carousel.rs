use yew::prelude::*;

const CAROUSEL_CSS: &str = r#"
    .logo-carousel {
        position: relative;
        width: 100%;
        overflow: hidden;
        padding: 2.5rem 0;
        opacity: 0.7;
    }
    .logo-carousel-fade {
        position: absolute;
        top: 0;
        height: 100%;
        width: 6rem;
        z-index: 10;
    }
    .logo-carousel-fade.left {
        left: 0;
        background: linear-gradient(to right, #F9F9F9, transparent);
    }
    .logo-carousel-fade.right {
        right: 0;
        background: linear-gradient(to left, #F9F9F9, transparent);
    }
    .logo-carousel-track {
        display: flex;
        width: 200%;
        animation: logo-scroll 40s linear infinite;
    }
    .logo-carousel-loop {
        display: flex;
        width: 50%;
        justify-content: space-around;
        align-items: center;
    }
    .logo-carousel-item {
        padding: 0 2rem;
        font-size: 1.5rem;
        font-weight: 700;
        color: #616161;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        white-space: nowrap;
        cursor: default;
        transition: color 0.2s ease;
    }
    .logo-carousel-item:hover {
        color: #000;
    }
    @keyframes logo-scroll {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LogoCarouselProps {
    pub logos: Vec<String>,
}

/// Endless horizontal marquee. The list is rendered twice so the CSS loop
/// can jump back by exactly half the track width without a visible seam.
#[function_component]
pub fn LogoCarousel(props: &LogoCarouselProps) -> Html {
    let render_loop = |pass: u8| {
        html! {
            <div class="logo-carousel-loop">
                { for props.logos.iter().enumerate().map(|(index, logo)| html! {
                    <span key={format!("logo-{}-{}", pass, index)} class="logo-carousel-item">{logo.clone()}</span>
                }) }
            </div>
        }
    };

    html! {
        <div class="logo-carousel">
            <style>{CAROUSEL_CSS}</style>
            <div class="logo-carousel-fade left"></div>
            <div class="logo-carousel-fade right"></div>
            <div class="logo-carousel-track">
                {render_loop(1)}
                {render_loop(2)}
            </div>
        </div>
    }
}
