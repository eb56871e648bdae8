//! Record assembler: widget selections → one labeled row.

use crate::domain::form::{Field, FormInput, InputRecord};
use crate::error::PredictError;

/// Pack the form selections into an `InputRecord` with exactly the ten
/// record columns.
///
/// Values are the labels exactly as the form displays them; decoding them is
/// the encoder's job.
pub fn assemble_record(form: &FormInput) -> Result<InputRecord, PredictError> {
    fn required<T>(slot: Option<T>, field: Field) -> Result<T, PredictError> {
        slot.ok_or(PredictError::MissingField(field.key()))
    }

    let time = required(form.time, Field::Time)?;
    let columns = vec![
        (Field::Time, time.to_string()),
        (
            Field::DayOfWeek,
            required(form.day_of_week, Field::DayOfWeek)?.label().to_string(),
        ),
        (
            Field::AreaAccident,
            required(form.area_accident, Field::AreaAccident)?.label().to_string(),
        ),
        (
            Field::TypeOfVehicle,
            required(form.type_of_vehicle, Field::TypeOfVehicle)?.label().to_string(),
        ),
        (
            Field::LaneOrMedians,
            required(form.lane_or_medians, Field::LaneOrMedians)?.label().to_string(),
        ),
        (
            Field::RoadSurfaceType,
            required(form.road_surface_type, Field::RoadSurfaceType)?.label().to_string(),
        ),
        (
            Field::RoadSurfaceConditions,
            required(form.road_surface_conditions, Field::RoadSurfaceConditions)?
                .label()
                .to_string(),
        ),
        (
            Field::LightConditions,
            required(form.light_conditions, Field::LightConditions)?.label().to_string(),
        ),
        (
            Field::WeatherConditions,
            required(form.weather_conditions, Field::WeatherConditions)?.label().to_string(),
        ),
        (
            Field::SexOfDriver,
            required(form.sex_of_driver, Field::SexOfDriver)?.label().to_string(),
        ),
    ];

    Ok(InputRecord::from_columns(columns))
}
