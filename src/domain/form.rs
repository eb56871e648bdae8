//! Form state and the assembled one-row record.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

use crate::domain::choices::{
    AreaAccident, DayOfWeek, LaneOrMedians, LightConditions, RoadSurfaceConditions,
    RoadSurfaceType, SexOfDriver, TypeOfVehicle, WeatherConditions,
};

/// Minute slider granularity.
pub const MINUTE_STEP: u8 = 5;

/// The ten columns of an `InputRecord`, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    DayOfWeek,
    AreaAccident,
    TypeOfVehicle,
    LaneOrMedians,
    RoadSurfaceType,
    RoadSurfaceConditions,
    LightConditions,
    WeatherConditions,
    SexOfDriver,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Time,
        Field::DayOfWeek,
        Field::AreaAccident,
        Field::TypeOfVehicle,
        Field::LaneOrMedians,
        Field::RoadSurfaceType,
        Field::RoadSurfaceConditions,
        Field::LightConditions,
        Field::WeatherConditions,
        Field::SexOfDriver,
    ];

    /// Column name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::DayOfWeek => "day_of_week",
            Field::AreaAccident => "area_accident",
            Field::TypeOfVehicle => "type_of_vehicle",
            Field::LaneOrMedians => "lane_or_medians",
            Field::RoadSurfaceType => "road_surface_type",
            Field::RoadSurfaceConditions => "road_surface_conditions",
            Field::LightConditions => "light_conditions",
            Field::WeatherConditions => "weather_conditions",
            Field::SexOfDriver => "sex_of_driver",
        }
    }

    /// Widget title.
    pub fn title(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::DayOfWeek => "Day of the Week",
            Field::AreaAccident => "Area of Accident",
            Field::TypeOfVehicle => "Type of Vehicle",
            Field::LaneOrMedians => "Lane or Medians",
            Field::RoadSurfaceType => "Road Surface Type",
            Field::RoadSurfaceConditions => "Road Surface Conditions",
            Field::LightConditions => "Light Conditions",
            Field::WeatherConditions => "Weather Conditions",
            Field::SexOfDriver => "Sex of Driver",
        }
    }

    /// Plain category values for the categorical fields, in option order.
    ///
    /// `None` for `Time`, which is encoded numerically.
    pub fn vocabulary(self) -> Option<Vec<&'static str>> {
        fn values<T: Copy>(all: &[T], value: fn(T) -> &'static str) -> Option<Vec<&'static str>> {
            Some(all.iter().copied().map(value).collect())
        }
        match self {
            Field::Time => None,
            Field::DayOfWeek => values(DayOfWeek::ALL, DayOfWeek::value),
            Field::AreaAccident => values(AreaAccident::ALL, AreaAccident::value),
            Field::TypeOfVehicle => values(TypeOfVehicle::ALL, TypeOfVehicle::value),
            Field::LaneOrMedians => values(LaneOrMedians::ALL, LaneOrMedians::value),
            Field::RoadSurfaceType => values(RoadSurfaceType::ALL, RoadSurfaceType::value),
            Field::RoadSurfaceConditions => {
                values(RoadSurfaceConditions::ALL, RoadSurfaceConditions::value)
            }
            Field::LightConditions => values(LightConditions::ALL, LightConditions::value),
            Field::WeatherConditions => values(WeatherConditions::ALL, WeatherConditions::value),
            Field::SexOfDriver => values(SexOfDriver::ALL, SexOfDriver::value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Hour + minute as picked on the sliders (minutes in 5-minute steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && minute % MINUTE_STEP == 0 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parse `HH:MM`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| format!("invalid time '{s}': {e}"))?;
        Self::new(t.hour() as u8, t.minute() as u8).ok_or_else(|| {
            format!("invalid time '{s}': minutes must be a multiple of {MINUTE_STEP}")
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Step the hour slider, wrapping around midnight.
    pub fn cycle_hour(self, delta: i32) -> Self {
        let hour = (self.hour as i32 + delta).rem_euclid(24) as u8;
        Self { hour, ..self }
    }

    /// Step the minute slider by whole 5-minute notches, wrapping within the hour.
    pub fn cycle_minute(self, delta: i32) -> Self {
        let notches = 60 / MINUTE_STEP as i32;
        let idx = (self.minute as i32 / MINUTE_STEP as i32 + delta).rem_euclid(notches);
        Self {
            minute: (idx * MINUTE_STEP as i32) as u8,
            ..self
        }
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { hour: 8, minute: 30 }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The widget selections, one slot per record field.
///
/// Slots are optional so that a caller building the form by hand can leave one
/// out; the assembler reports that as a missing field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub time: Option<TimeOfDay>,
    pub day_of_week: Option<DayOfWeek>,
    pub area_accident: Option<AreaAccident>,
    pub type_of_vehicle: Option<TypeOfVehicle>,
    pub lane_or_medians: Option<LaneOrMedians>,
    pub road_surface_type: Option<RoadSurfaceType>,
    pub road_surface_conditions: Option<RoadSurfaceConditions>,
    pub light_conditions: Option<LightConditions>,
    pub weather_conditions: Option<WeatherConditions>,
    pub sex_of_driver: Option<SexOfDriver>,
}

impl Default for FormInput {
    /// The form's initial widget positions.
    fn default() -> Self {
        Self {
            time: Some(TimeOfDay::default()),
            day_of_week: Some(DayOfWeek::Mon),
            area_accident: Some(AreaAccident::first()),
            type_of_vehicle: Some(TypeOfVehicle::Automobile),
            lane_or_medians: Some(LaneOrMedians::first()),
            road_surface_type: Some(RoadSurfaceType::first()),
            road_surface_conditions: Some(RoadSurfaceConditions::first()),
            light_conditions: Some(LightConditions::first()),
            weather_conditions: Some(WeatherConditions::first()),
            sex_of_driver: Some(SexOfDriver::first()),
        }
    }
}

impl FormInput {
    /// Every categorical field at its first listed option.
    pub fn first_options(time: TimeOfDay, day_of_week: DayOfWeek) -> Self {
        Self {
            time: Some(time),
            day_of_week: Some(day_of_week),
            area_accident: Some(AreaAccident::first()),
            type_of_vehicle: Some(TypeOfVehicle::first()),
            lane_or_medians: Some(LaneOrMedians::first()),
            road_surface_type: Some(RoadSurfaceType::first()),
            road_surface_conditions: Some(RoadSurfaceConditions::first()),
            light_conditions: Some(LightConditions::first()),
            weather_conditions: Some(WeatherConditions::first()),
            sex_of_driver: Some(SexOfDriver::first()),
        }
    }
}

/// One labeled row: field name → raw string value, in `Field::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    columns: Vec<(Field, String)>,
}

impl InputRecord {
    pub(crate) fn from_columns(columns: Vec<(Field, String)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(f, _)| f.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.columns.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl Serialize for InputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (field, value) in &self.columns {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_parse_accepts_slider_values() {
        let t = TimeOfDay::parse("08:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 30));
        assert_eq!(t.to_string(), "08:30");
        assert_eq!(TimeOfDay::parse("23:55").unwrap().to_string(), "23:55");
    }

    #[test]
    fn time_parse_rejects_off_slider_values() {
        assert!(TimeOfDay::parse("08:31").is_err());
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("8h30").is_err());
    }

    #[test]
    fn time_sliders_wrap() {
        let t = TimeOfDay::new(23, 55).unwrap();
        assert_eq!(t.cycle_hour(1).to_string(), "00:55");
        assert_eq!(t.cycle_minute(1).to_string(), "23:00");
        assert_eq!(TimeOfDay::new(0, 0).unwrap().cycle_minute(-1).to_string(), "00:55");
    }

    #[test]
    fn default_form_matches_widget_defaults() {
        let form = FormInput::default();
        assert_eq!(form.time.unwrap().to_string(), "08:30");
        assert_eq!(form.type_of_vehicle, Some(TypeOfVehicle::Automobile));
        assert_eq!(TypeOfVehicle::Automobile.index(), 7);
    }

    #[test]
    fn time_has_no_vocabulary() {
        assert!(Field::Time.vocabulary().is_none());
        assert_eq!(Field::LightConditions.vocabulary().unwrap().len(), 4);
    }
}
