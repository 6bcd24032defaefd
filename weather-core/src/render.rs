use chrono::NaiveDateTime;
use thiserror::Error;

use crate::{client::WeatherState, model::CurrentWeather};

/// Sections a weather view can be composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Loading,
    Error,
    Data,
}

/// Misassembled view. This is a usage defect caught at construction, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("A weather view must include the Data section")]
    MissingDataSection,
}

/// Declarative composition of weather sections.
///
/// Callers list the sections they want, in render order. The Data section is
/// mandatory. Each section decides for itself whether it has anything to
/// show for a given state, with `loading` authoritative: Error and Data stay
/// silent while a cycle is in flight.
#[derive(Debug, Clone)]
pub struct WeatherView {
    sections: Vec<Section>,
}

impl WeatherView {
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, ViewError> {
        let sections: Vec<Section> = sections.into_iter().collect();
        if !sections.contains(&Section::Data) {
            return Err(ViewError::MissingDataSection);
        }
        Ok(Self { sections })
    }

    /// Loading, Error and Data, in that order.
    pub fn full() -> Self {
        Self { sections: vec![Section::Loading, Section::Error, Section::Data] }
    }

    /// Render every section that applies to `state`, one block per line.
    pub fn render(&self, state: &WeatherState) -> String {
        self.sections
            .iter()
            .filter_map(|section| render_section(*section, state))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_section(section: Section, state: &WeatherState) -> Option<String> {
    match section {
        Section::Loading => state.loading.then(|| "Loading weather data...".to_string()),
        Section::Error => {
            if state.loading {
                return None;
            }
            state.error.as_ref().map(|error| error.to_string())
        }
        Section::Data => {
            if state.loading {
                return None;
            }
            state.data.as_ref().map(render_data)
        }
    }
}

fn render_data(weather: &CurrentWeather) -> String {
    let unit = weather.request.unit;
    let current = &weather.current;

    let description = current
        .weather_descriptions
        .first()
        .map(String::as_str)
        .unwrap_or("Unknown");

    [
        format!("{}, {}", weather.location.name, weather.location.country),
        format!("{}{}", current.temperature, unit.temperature_suffix()),
        description.to_string(),
        format!(
            "Wind: {}° {}, {} {}",
            current.wind_degree, current.wind_dir, current.wind_speed, unit.speed_label()
        ),
        local_date(&weather.location.localtime),
        format!("[{}]", unit.toggle_label()),
    ]
    .join("\n")
}

/// The provider reports local time as `YYYY-MM-DD HH:MM`; show the date
/// part. An unparseable value is shown as-is.
fn local_date(localtime: &str) -> String {
    NaiveDateTime::parse_from_str(localtime, "%Y-%m-%d %H:%M")
        .map(|dt| dt.date().to_string())
        .unwrap_or_else(|_| localtime.to_string())
}
