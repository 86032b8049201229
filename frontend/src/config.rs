use serde::Deserialize;
use thiserror::Error;

use crate::behavior::counter::{CounterConfig, DEFAULT_DURATION_MS};
use crate::behavior::nav::DEFAULT_DEAD_ZONE_PX;

/// Page copy and tuning, compiled into the binary.
const LANDING_JSON: &str = include_str!("../landing.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse landing content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Counter threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),
    #[error("Navbar dead zone must be a non-negative number of pixels, got {0}")]
    InvalidDeadZone(f64),
    #[error("Counter duration must be a non-negative number of milliseconds, got {0}")]
    InvalidDuration(f64),
    #[error("Stat '{label}' has an invalid target")]
    InvalidStat { label: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub nav_dead_zone_px: f64,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_dead_zone_px: DEFAULT_DEAD_ZONE_PX,
            counter_threshold: 0.1,
            counter_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// A piece of copy, optionally emphasised. In JSON either `"text"` or
/// `{ "strong": "text" }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Plain(String),
    Strong { strong: String },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    #[default]
    Sale,
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WidgetContent {
    pub kind: WidgetKind,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    /// Degrees.
    pub rotation: f64,
    /// Inline CSS offsets inside the hero.
    pub position: String,
    pub speed: FloatSpeed,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub subheadline: String,
    pub description: Vec<Span>,
    pub cta: String,
    pub carousel_label: String,
    pub carousel_logos: Vec<String>,
    pub widgets: Vec<WidgetContent>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeliverableCard {
    pub title: Vec<Span>,
    pub image: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeliverablesContent {
    pub badge: String,
    pub heading: String,
    pub description: Vec<Span>,
    pub cards: Vec<DeliverableCard>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct IntegrationLogo {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct IntegrationsContent {
    pub badge: String,
    pub heading: String,
    pub intro: Vec<Span>,
    pub follow_up: Vec<Span>,
    pub link_label: String,
    pub logos: Vec<IntegrationLogo>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub image: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub badge: String,
    pub heading: String,
    pub description: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Stat {
    pub end: f64,
    #[serde(default)]
    pub decimals: usize,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    /// Overrides `behavior.counter_duration_ms` for this stat.
    #[serde(default)]
    pub duration_ms: Option<f64>,
}

impl Stat {
    pub fn counter_config(&self, behavior: &BehaviorConfig) -> CounterConfig {
        CounterConfig::new(self.end)
            .duration_ms(self.duration_ms.unwrap_or(behavior.counter_duration_ms))
            .decimals(self.decimals)
            .suffix(self.suffix.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AuthorityContent {
    pub headline: String,
    pub subheadline: Vec<Span>,
    pub cta: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub behavior: BehaviorConfig,
    pub brand: String,
    pub nav_links: Vec<NavLink>,
    pub cta_label: String,
    pub hero: HeroContent,
    pub deliverables: DeliverablesContent,
    pub integrations: IntegrationsContent,
    pub testimonials: TestimonialsContent,
    pub authority: AuthorityContent,
    pub footer: String,
}

impl LandingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let behavior = &self.behavior;
        if !(0.0..=1.0).contains(&behavior.counter_threshold) {
            return Err(ConfigError::InvalidThreshold(behavior.counter_threshold));
        }
        if !behavior.nav_dead_zone_px.is_finite() || behavior.nav_dead_zone_px < 0.0 {
            return Err(ConfigError::InvalidDeadZone(behavior.nav_dead_zone_px));
        }
        check_duration(behavior.counter_duration_ms)?;

        for stat in &self.authority.stats {
            if !stat.end.is_finite() {
                return Err(ConfigError::InvalidStat {
                    label: stat.label.clone(),
                });
            }
            if let Some(duration) = stat.duration_ms {
                check_duration(duration)?;
            }
        }
        Ok(())
    }
}

fn check_duration(duration_ms: f64) -> Result<(), ConfigError> {
    if duration_ms.is_finite() && duration_ms >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration(duration_ms))
    }
}

pub fn parse(raw: &str) -> Result<LandingConfig, ConfigError> {
    let config: LandingConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Loads the embedded landing content.
pub fn load() -> Result<LandingConfig, ConfigError> {
    parse(LANDING_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let config = load().expect("embedded landing.json should be valid");

        assert_eq!(config.brand, "Reflex");
        assert_eq!(config.behavior, BehaviorConfig::default());
        assert_eq!(config.nav_links.len(), 3);
        assert_eq!(config.hero.carousel_logos.len(), 10);
        assert_eq!(config.hero.widgets.len(), 3);
        assert_eq!(config.hero.widgets[1].kind, WidgetKind::Schedule);
        assert_eq!(config.deliverables.cards.len(), 4);
        assert_eq!(config.integrations.logos.len(), 13);
        assert_eq!(config.testimonials.items.len(), 4);

        let stats = &config.authority.stats;
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[2].end, 4.9);
        assert_eq!(stats[2].decimals, 1);
        assert_eq!(stats[2].suffix, "+");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = parse(r#"{ "brand": "Acme" }"#).expect("partial content is fine");
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.behavior.nav_dead_zone_px, 50.0);
        assert_eq!(config.behavior.counter_threshold, 0.1);
        assert!(config.authority.stats.is_empty());
    }

    #[test]
    fn spans_accept_plain_and_strong() {
        let spans: Vec<Span> = serde_json::from_str(r#"["a ", { "strong": "b" }]"#).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::Plain("a ".to_string()),
                Span::Strong {
                    strong: "b".to_string()
                }
            ]
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("{ not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_out_of_range_tuning() {
        let threshold = parse(r#"{ "behavior": { "counter_threshold": 1.5 } }"#);
        assert!(matches!(threshold, Err(ConfigError::InvalidThreshold(t)) if t == 1.5));

        let dead_zone = parse(r#"{ "behavior": { "nav_dead_zone_px": -1 } }"#);
        assert!(matches!(dead_zone, Err(ConfigError::InvalidDeadZone(_))));

        let duration = parse(r#"{ "behavior": { "counter_duration_ms": -10 } }"#);
        assert!(matches!(duration, Err(ConfigError::InvalidDuration(_))));

        let stat = parse(
            r#"{ "authority": { "stats": [ { "end": 5, "label": "x", "duration_ms": -1 } ] } }"#,
        );
        assert!(matches!(stat, Err(ConfigError::InvalidDuration(_))));
    }

    #[test]
    fn stat_builds_counter_config() {
        let behavior = BehaviorConfig::default();
        let stat = Stat {
            end: 4.9,
            decimals: 1,
            suffix: "+".to_string(),
            label: "Taxa de avaliação".to_string(),
            duration_ms: None,
        };
        assert_eq!(
            stat.counter_config(&behavior),
            CounterConfig::new(4.9).duration_ms(2000.0).decimals(1).suffix("+")
        );

        let quick = Stat {
            duration_ms: Some(500.0),
            ..stat
        };
        assert_eq!(quick.counter_config(&behavior).duration_ms, 500.0);
    }
}
