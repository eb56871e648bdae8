//! Command-line parsing for the accident risk predictor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the encoding/scoring code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_LOG_LEVEL, DEFAULT_MODEL_PATH, MODEL_PATH_ENV};
use crate::domain::{
    AreaAccident, DayOfWeek, FormInput, LaneOrMedians, LightConditions, RoadSurfaceConditions,
    RoadSurfaceType, SexOfDriver, TimeOfDay, TypeOfVehicle, WeatherConditions,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "accident-risk",
    version,
    about = "Road accident risk predictor (pre-trained classifier)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive form (default).
    Tui(TuiArgs),
    /// Score one set of conditions given as flags and print the result.
    Predict(PredictArgs),
    /// Print the encoding contract: version and ordered feature names.
    Schema(SchemaArgs),
}

/// Options shared by every command that loads the model.
#[derive(Debug, Args, Clone)]
pub struct RuntimeArgs {
    /// Model artifact JSON.
    #[arg(long, env = MODEL_PATH_ENV, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Log filter when RUST_LOG is unset (e.g. `info`, `debug`).
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Append logs to this file instead of stderr (the TUI logs only here).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

/// Same fields, choices and defaults as the interactive form.
#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    /// Time of day, HH:MM (minutes in 5-minute steps).
    #[arg(long, default_value = "08:30", value_parser = TimeOfDay::parse)]
    pub time: TimeOfDay,

    #[arg(long, value_enum, default_value_t = DayOfWeek::Mon)]
    pub day: DayOfWeek,

    /// Area of accident.
    #[arg(long, value_enum, default_value_t = AreaAccident::OfficeAreas)]
    pub area: AreaAccident,

    #[arg(long, value_enum, default_value_t = TypeOfVehicle::Automobile)]
    pub vehicle: TypeOfVehicle,

    /// Lane or medians.
    #[arg(long, value_enum, default_value_t = LaneOrMedians::UndividedTwoWay)]
    pub lane: LaneOrMedians,

    #[arg(long, value_enum, default_value_t = RoadSurfaceType::AsphaltRoads)]
    pub surface_type: RoadSurfaceType,

    /// Junction / crossing type.
    #[arg(long, value_enum, default_value_t = RoadSurfaceConditions::NoJunction)]
    pub surface_conditions: RoadSurfaceConditions,

    #[arg(long, value_enum, default_value_t = LightConditions::Daylight)]
    pub light: LightConditions,

    #[arg(long, value_enum, default_value_t = WeatherConditions::Normal)]
    pub weather: WeatherConditions,

    /// Sex of driver.
    #[arg(long, value_enum, default_value_t = SexOfDriver::Male)]
    pub sex: SexOfDriver,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    pub fn form(&self) -> FormInput {
        FormInput {
            time: Some(self.time),
            day_of_week: Some(self.day),
            area_accident: Some(self.area),
            type_of_vehicle: Some(self.vehicle),
            lane_or_medians: Some(self.lane),
            road_surface_type: Some(self.surface_type),
            road_surface_conditions: Some(self.surface_conditions),
            light_conditions: Some(self.light),
            weather_conditions: Some(self.weather),
            sex_of_driver: Some(self.sex),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct SchemaArgs {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}
