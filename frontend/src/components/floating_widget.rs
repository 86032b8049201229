use yew::prelude::*;

use crate::config::{FloatSpeed, WidgetContent, WidgetKind};

pub const WIDGET_CSS: &str = r#"
    .floating-widget {
        position: absolute;
        z-index: 10;
        display: flex;
        flex-direction: column;
        background: #fff;
        padding: 1rem;
        border: 1px solid #f3f4f6;
        border-radius: 1rem;
        box-shadow: 0 20px 40px -12px rgba(0, 0, 0, 0.1);
    }
    .floating-widget.sale {
        width: 16rem;
    }
    .floating-widget.schedule {
        width: 18rem;
    }
    .floating-widget .widget-date {
        font-size: 10px;
        font-weight: 600;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 0.75rem;
    }
    .floating-widget .widget-body {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        background: #f9fafb;
        padding: 0.5rem;
        border-radius: 0.75rem;
    }
    .floating-widget .widget-icon {
        background: #dcfce7;
        color: #16a34a;
        padding: 0.5rem;
        border-radius: 0.5rem;
    }
    .floating-widget .widget-avatar {
        position: relative;
        width: 2.5rem;
        height: 2.5rem;
        background: #e5e7eb;
        color: #6b7280;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .floating-widget .widget-avatar::after {
        content: "";
        position: absolute;
        bottom: -0.25rem;
        right: -0.25rem;
        width: 0.75rem;
        height: 0.75rem;
        background: #22c55e;
        border: 2px solid #fff;
        border-radius: 9999px;
    }
    .floating-widget .widget-title {
        margin: 0;
        font-size: 0.75rem;
        font-weight: 500;
        color: #6b7280;
    }
    .floating-widget .widget-subtitle {
        margin: 0;
        font-size: 0.875rem;
        font-weight: 700;
        color: #111827;
    }
    .float-slow { animation: widget-float 6s ease-in-out infinite; }
    .float-medium { animation: widget-float 5s ease-in-out infinite; }
    .float-fast { animation: widget-float 4s ease-in-out infinite; }
    @keyframes widget-float {
        0%, 100% { translate: 0 0; }
        50% { translate: 0 -12px; }
    }
    @media (max-width: 1024px) {
        .floating-widget {
            display: none;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FloatingWidgetProps {
    pub widget: WidgetContent,
}

/// Decorative notification card floating around the hero.
#[function_component]
pub fn FloatingWidget(props: &FloatingWidgetProps) -> Html {
    let widget = &props.widget;
    let kind = match widget.kind {
        WidgetKind::Sale => "sale",
        WidgetKind::Schedule => "schedule",
    };
    let speed = match widget.speed {
        FloatSpeed::Slow => "float-slow",
        FloatSpeed::Medium => "float-medium",
        FloatSpeed::Fast => "float-fast",
    };
    let style = format!("{} transform: rotate({}deg);", widget.position, widget.rotation);

    html! {
        <div class={classes!("floating-widget", kind, speed)} style={style}>
            <span class="widget-date">{widget.date.clone()}</span>
            <div class="widget-body">
                {
                    match widget.kind {
                        WidgetKind::Sale => html! {
                            <div class="widget-icon"><i class="fas fa-arrow-trend-up"></i></div>
                        },
                        WidgetKind::Schedule => html! {
                            <div class="widget-avatar"><i class="fas fa-user"></i></div>
                        },
                    }
                }
                <div>
                    <p class="widget-title">{widget.title.clone()}</p>
                    <p class="widget-subtitle">{widget.subtitle.clone()}</p>
                </div>
            </div>
        </div>
    }
}
