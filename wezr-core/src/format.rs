//! Placeholder substitution for the rendered weather line.
//!
//! Placeholders are replaced one at a time in [`Placeholder::ORDER`], each as
//! a single pass over the text with no escaping. `$summary` comes last, so a
//! summary that happens to contain `$temp` is printed as-is.

use crate::{
    model::{DataPoint, WeatherSnapshot},
    units::Units,
};

pub const DEFAULT_TEMPLATE: &str =
    "$summary $temp (feels like $apparentTemp) precipitation chance $precipitationChance";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Temp,
    ApparentTemp,
    PrecipitationChance,
    Summary,
}

impl Placeholder {
    pub const ORDER: [Placeholder; 4] = [
        Placeholder::Temp,
        Placeholder::ApparentTemp,
        Placeholder::PrecipitationChance,
        Placeholder::Summary,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Temp => "$temp",
            Placeholder::ApparentTemp => "$apparentTemp",
            Placeholder::PrecipitationChance => "$precipitationChance",
            Placeholder::Summary => "$summary",
        }
    }

    fn value(&self, current: &DataPoint, units: Units) -> String {
        match self {
            Placeholder::Temp => temperature(current.temperature, units),
            Placeholder::ApparentTemp => temperature(current.apparent_temperature, units),
            // Truncated, not rounded.
            Placeholder::PrecipitationChance => {
                format!("{}%", (current.precip_probability * 100.0) as i64)
            }
            Placeholder::Summary => current.summary.clone(),
        }
    }
}

fn temperature(value: f64, units: Units) -> String {
    format!("{:.1}{}", value, units.temperature_suffix())
}

/// Render `template` for `current`. Values are printed as received; no unit
/// conversion happens here.
pub fn render(current: &DataPoint, units: Units, template: &str) -> String {
    Placeholder::ORDER.iter().fold(template.to_string(), |text, placeholder| {
        if text.contains(placeholder.token()) {
            text.replace(placeholder.token(), &placeholder.value(current, units))
        } else {
            text
        }
    })
}

/// Like [`render`], but `None` when the snapshot has no current conditions.
pub fn render_snapshot(snapshot: &WeatherSnapshot, units: Units, template: &str) -> Option<String> {
    snapshot.currently.as_ref().map(|current| render(current, units, template))
}
