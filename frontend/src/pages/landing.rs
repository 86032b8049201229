use std::rc::Rc;

use yew::prelude::*;

use crate::components::floating_widget::{FloatingWidget, WIDGET_CSS};
use crate::components::grid_background::GridBackground;
use crate::components::logo_carousel::LogoCarousel;
use crate::components::navbar::Navbar;
use crate::components::number_counter::NumberCounter;
use crate::components::text::spans;
use crate::config::LandingConfig;

#[hook]
fn use_landing_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>().unwrap_or_default()
}

#[function_component]
fn Hero() -> Html {
    let config = use_landing_config();
    let hero = &config.hero;

    html! {
        <section class="hero">
            <style>{WIDGET_CSS}</style>
            <div class="hero-glow"></div>
            { for hero.widgets.iter().enumerate().map(|(index, widget)| html! {
                <FloatingWidget key={index} widget={widget.clone()} />
            }) }
            <div class="hero-content">
                <div class="hero-badge">{hero.badge.clone()}</div>
                <div class="hero-headlines">
                    <h1>{hero.headline.clone()}</h1>
                    <h2>{hero.subheadline.clone()}</h2>
                </div>
                <p class="hero-description">{spans(&hero.description)}</p>
                <div class="hero-cta">
                    <button class="cta-primary">
                        {hero.cta.clone()}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
                <div class="hero-trust">
                    <p class="eyebrow">{hero.carousel_label.clone()}</p>
                    <LogoCarousel logos={hero.carousel_logos.clone()} />
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Deliverables() -> Html {
    let config = use_landing_config();
    let deliverables = &config.deliverables;

    html! {
        <section id="entregaveis" class="plain-section">
            <span class="section-badge">{deliverables.badge.clone()}</span>
            <h2 class="section-heading">{deliverables.heading.clone()}</h2>
            <p class="section-description">{spans(&deliverables.description)}</p>
            <div class="card-grid">
                { for deliverables.cards.iter().enumerate().map(|(index, card)| html! {
                    <div key={index} class="deliverable-card">
                        <h3>{spans(&card.title)}</h3>
                        <div class="deliverable-image">
                            <img src={card.image.clone()} alt={card.alt.clone()} loading="lazy" />
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component]
fn Integrations() -> Html {
    let config = use_landing_config();
    let integrations = &config.integrations;

    html! {
        <section id="integracoes" class="integrations-section">
            <div class="integrations-panel">
                <div class="integrations-grid-lines"></div>
                <div class="integrations-shade"></div>
                <div class="integrations-content">
                    <div class="integrations-badge">
                        <i class="fas fa-puzzle-piece"></i>
                        <span>{integrations.badge.clone()}</span>
                    </div>
                    <h2>{integrations.heading.clone()}</h2>
                    <p>{spans(&integrations.intro)}</p>
                    <p class="integrations-follow-up">{spans(&integrations.follow_up)}</p>
                    <a href="#integracoes" class="integrations-link">{integrations.link_label.clone()}</a>
                    <div class="integrations-logos">
                        { for integrations.logos.iter().map(|logo| html! {
                            <div key={logo.name.clone()} class="integration-tile">
                                <img src={logo.url.clone()} alt={logo.name.clone()} loading="lazy" />
                            </div>
                        }) }
                    </div>
                    <button class="cta-light">{integrations.cta.clone()}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Testimonials() -> Html {
    let config = use_landing_config();
    let testimonials = &config.testimonials;

    html! {
        <section id="depoimentos" class="plain-section">
            <span class="section-badge">{testimonials.badge.clone()}</span>
            <h2 class="section-heading">{testimonials.heading.clone()}</h2>
            <p class="section-description">{testimonials.description.clone()}</p>
            <div class="card-grid narrow">
                { for testimonials.items.iter().enumerate().map(|(index, item)| html! {
                    <div key={index} class="testimonial-card">
                        <div class="testimonial-avatar">
                            <img src={item.image.clone()} alt={item.name.clone()} loading="lazy" />
                        </div>
                        <p class="testimonial-text">{format!("\"{}\"", item.text)}</p>
                        <div class="testimonial-author">
                            <h4>{item.name.clone()}</h4>
                            <p>{item.role.clone()}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component]
fn Authority() -> Html {
    let config = use_landing_config();
    let authority = &config.authority;
    let behavior = &config.behavior;

    html! {
        <section class="authority-section">
            <GridBackground />
            <div class="authority-content">
                <h2>{authority.headline.clone()}</h2>
                <p class="authority-subheadline">{spans(&authority.subheadline)}</p>
                <div class="hero-cta">
                    <button class="cta-primary">{authority.cta.clone()}</button>
                </div>
                <div class="stats-grid">
                    { for authority.stats.iter().map(|stat| {
                        let counter = stat.counter_config(behavior);
                        html! {
                            <div key={stat.label.clone()} class="stat">
                                <div class="stat-value">
                                    <NumberCounter
                                        end={counter.target}
                                        duration={counter.duration_ms}
                                        decimals={counter.decimals}
                                        suffix={counter.suffix}
                                        threshold={behavior.counter_threshold}
                                    />
                                </div>
                                <p class="stat-label">{stat.label.clone()}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Footer() -> Html {
    let config = use_landing_config();

    html! {
        <footer class="landing-footer">
            <p>{config.footer.clone()}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <Navbar />
            <Hero />
            <Deliverables />
            <Integrations />
            <Testimonials />
            <Authority />
            <Footer />
            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        background: #F9F9F9;
        font-family: ui-sans-serif, system-ui, sans-serif;
    }
    .landing-page ::selection {
        background: #FF5500;
        color: #fff;
    }
    .landing-page strong {
        font-weight: 700;
        color: #111827;
    }
    .cta-primary {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: #000;
        color: #fff;
        padding: 1.25rem 2.5rem;
        border: none;
        border-radius: 1rem;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .cta-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.4);
    }
    .cta-primary i {
        transition: transform 0.2s ease;
    }
    .cta-primary:hover i {
        transform: translateX(0.25rem);
    }
    .cta-light {
        background: #fff;
        color: #1C2E2A;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 700;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .cta-light:hover {
        background: #f3f4f6;
        transform: translateY(-0.25rem);
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        padding: 5rem 1rem 0;
        overflow: hidden;
    }
    .hero-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 800px;
        height: 800px;
        transform: translate(-50%, -50%);
        background: #fff;
        border-radius: 9999px;
        filter: blur(64px);
        opacity: 0.6;
        pointer-events: none;
    }
    .hero-content {
        position: relative;
        z-index: 20;
        width: 100%;
        max-width: 64rem;
        margin: 0 auto;
        text-align: center;
        animation: fade-in-up 0.8s ease-out both;
    }
    .hero-badge {
        display: inline-block;
        background: rgba(176, 181, 185, 0.6);
        color: #fff;
        backdrop-filter: blur(4px);
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 700;
        letter-spacing: 0.025em;
    }
    .hero-headlines h1 {
        margin: 2rem 0 0.5rem;
        font-size: 4.5rem;
        font-weight: 600;
        line-height: 1.1;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .hero-headlines h2 {
        margin: 0;
        font-size: 3rem;
        font-weight: 700;
        line-height: 1.2;
        letter-spacing: -0.025em;
        color: #FF5500;
    }
    .hero-description {
        max-width: 42rem;
        margin: 2rem auto 0;
        font-size: 1.125rem;
        font-weight: 500;
        line-height: 1.625;
        color: #4b5563;
    }
    .hero-cta {
        padding: 2rem 0 1rem;
    }
    .hero-trust {
        padding-top: 2rem;
    }
    .eyebrow {
        margin-bottom: 1rem;
        font-size: 0.75rem;
        font-weight: 700;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .plain-section {
        width: 100%;
        padding: 6rem 1rem;
        background: #F9F9F9;
        display: flex;
        flex-direction: column;
        align-items: center;
        box-sizing: border-box;
    }
    .section-badge {
        display: inline-block;
        margin-bottom: 2rem;
        background: #fff;
        border: 1px solid #e5e7eb;
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        color: #4b5563;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .section-heading {
        max-width: 56rem;
        margin: 0 0 2rem;
        font-size: 3.75rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        text-align: center;
        color: #111827;
    }
    .section-description {
        max-width: 48rem;
        margin: 0 auto 4rem;
        font-size: 1.25rem;
        font-weight: 500;
        line-height: 1.625;
        text-align: center;
        color: #6b7280;
    }
    .card-grid {
        width: 100%;
        max-width: 80rem;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
    }
    .card-grid.narrow {
        max-width: 72rem;
    }
    .deliverable-card {
        position: relative;
        height: 280px;
        padding: 2rem;
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 32px;
        overflow: hidden;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .deliverable-card:hover {
        transform: translateY(-0.25rem);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .deliverable-card h3 {
        position: relative;
        z-index: 10;
        max-width: 60%;
        margin: 0;
        font-size: 1.875rem;
        font-weight: 400;
        line-height: 1.25;
        color: #1f2937;
    }
    .deliverable-image {
        position: absolute;
        right: -20px;
        bottom: -20px;
        width: 55%;
        height: 80%;
        transition: transform 0.5s ease;
    }
    .deliverable-card:hover .deliverable-image {
        transform: scale(1.05);
    }
    .deliverable-image img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        object-position: bottom right;
        border-top-left-radius: 0.75rem;
    }
    .integrations-section {
        width: 100%;
        padding: 0 1rem 6rem;
        display: flex;
        justify-content: center;
        box-sizing: border-box;
    }
    .integrations-panel {
        position: relative;
        width: 100%;
        max-width: 80rem;
        padding: 4rem;
        background: #1C2E2A;
        border-radius: 48px;
        overflow: hidden;
        text-align: center;
        box-sizing: border-box;
    }
    .integrations-grid-lines {
        position: absolute;
        inset: 0;
        opacity: 0.05;
        pointer-events: none;
        background-image: linear-gradient(#fff 1px, transparent 1px), linear-gradient(90deg, #fff 1px, transparent 1px);
        background-size: 40px 40px;
    }
    .integrations-shade {
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: linear-gradient(to top, #1C2E2A, transparent, transparent);
    }
    .integrations-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .integrations-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
        padding: 0.375rem 1rem;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 9999px;
        color: #e5e7eb;
        font-size: 0.75rem;
        font-weight: 600;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .integrations-content h2 {
        margin: 0 0 1.5rem;
        font-size: 3.75rem;
        font-weight: 600;
        line-height: 1.25;
        color: #fff;
    }
    .integrations-content p {
        max-width: 42rem;
        margin: 0 0 0.5rem;
        font-size: 1.125rem;
        color: #9ca3af;
    }
    .integrations-content p.integrations-follow-up {
        margin-bottom: 2rem;
    }
    .integrations-content strong {
        font-weight: 500;
        color: #fff;
    }
    .integrations-link {
        margin-bottom: 3rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #d1d5db;
        text-decoration: underline;
        text-underline-offset: 4px;
    }
    .integrations-link:hover {
        color: #fff;
    }
    .integrations-logos {
        max-width: 48rem;
        margin-bottom: 4rem;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
    }
    .integration-tile {
        width: 4rem;
        height: 4rem;
        padding: 0.75rem;
        background: #fff;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        box-sizing: border-box;
        transition: transform 0.3s ease;
    }
    .integration-tile:hover {
        transform: scale(1.1);
    }
    .integration-tile img {
        width: 100%;
        height: 100%;
        object-fit: contain;
    }
    .testimonial-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2.5rem;
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 32px;
        text-align: center;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .testimonial-card:hover {
        transform: translateY(-0.25rem);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .testimonial-avatar {
        width: 5rem;
        height: 5rem;
        margin-bottom: 1.5rem;
        border: 2px solid #fff;
        border-radius: 9999px;
        overflow: hidden;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .testimonial-avatar img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .testimonial-text {
        margin: 0 0 1.5rem;
        font-size: 1.125rem;
        font-weight: 500;
        line-height: 1.625;
        color: #4b5563;
    }
    .testimonial-author {
        margin-top: auto;
    }
    .testimonial-author h4 {
        margin: 0;
        font-size: 1.125rem;
        font-weight: 700;
        color: #111827;
    }
    .testimonial-author p {
        margin: 0;
        font-size: 0.875rem;
        font-weight: 600;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.025em;
    }
    .authority-section {
        position: relative;
        width: 100%;
        padding: 8rem 0;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
    }
    .authority-content {
        position: relative;
        z-index: 20;
        max-width: 56rem;
        padding: 0 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .authority-content h2 {
        margin: 0 0 1.5rem;
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.25;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .authority-subheadline {
        max-width: 42rem;
        margin: 0 0 3rem;
        font-size: 1.25rem;
        font-weight: 500;
        color: #6b7280;
    }
    .stats-grid {
        width: 100%;
        max-width: 48rem;
        margin-top: 3rem;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 3rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .stat-value {
        margin-bottom: 0.5rem;
        font-size: 3.75rem;
        letter-spacing: -0.05em;
        color: #111827;
    }
    .number-counter {
        font-weight: 700;
    }
    .stat-label {
        margin: 0;
        font-size: 0.875rem;
        font-weight: 500;
        color: #6b7280;
        text-transform: uppercase;
        letter-spacing: 0.025em;
    }
    .landing-footer {
        width: 100%;
        padding: 2rem 1rem;
        background: #F9F9F9;
        border-top: 1px solid #e5e7eb;
        text-align: center;
        box-sizing: border-box;
    }
    .landing-footer p {
        margin: 0;
        font-size: 0.875rem;
        font-weight: 500;
        color: #9ca3af;
    }
    @media (max-width: 768px) {
        .hero-headlines h1 {
            font-size: 3rem;
        }
        .hero-headlines h2 {
            font-size: 1.875rem;
        }
        .section-heading,
        .integrations-content h2,
        .authority-content h2 {
            font-size: 2.25rem;
        }
        .card-grid,
        .stats-grid {
            grid-template-columns: 1fr;
        }
        .deliverable-card {
            height: 260px;
        }
        .deliverable-card h3 {
            font-size: 1.5rem;
        }
        .integrations-panel {
            padding: 2rem;
        }
        .integration-tile {
            width: 3.5rem;
            height: 3.5rem;
        }
        .stats-grid {
            padding-top: 3rem;
            border-top: 1px solid rgba(229, 231, 235, 0.5);
        }
    }
                "#}
            </style>
        </div>
    }
}
