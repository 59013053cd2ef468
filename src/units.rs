//! Units of measurement and exact conversions.
//!
//! Conversions go through meters as the common base and use decimal
//! arithmetic throughout, so chained conversions never accumulate
//! floating-point rounding error.

use crate::error::{DxfError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Angle direction as stored in the `$ANGDIR` header variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleDirection {
    /// Angles increase counter-clockwise (code 0)
    CounterClockwise,
    /// Angles increase clockwise (code 1)
    Clockwise,
}

impl AngleDirection {
    /// Decode an `$ANGDIR` code.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(AngleDirection::CounterClockwise),
            1 => Ok(AngleDirection::Clockwise),
            other => Err(DxfError::Parse(format!(
                "angle direction code <{}> is not 0 or 1",
                other
            ))),
        }
    }
}

/// A unit of measurement as stored in the `$INSUNITS` header variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Unitless,
    Inches,
    Feet,
    Miles,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Microinches,
    Mils,
    Yards,
    Angstroms,
    Nanometers,
    Microns,
    Decimeters,
    Decameters,
    Hectometers,
    Gigameters,
    AstronomicalUnits,
    LightYears,
    Parsecs,
}

impl Unit {
    /// Decode a numeric `$INSUNITS` code.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Unit::Unitless),
            1 => Ok(Unit::Inches),
            2 => Ok(Unit::Feet),
            3 => Ok(Unit::Miles),
            4 => Ok(Unit::Millimeters),
            5 => Ok(Unit::Centimeters),
            6 => Ok(Unit::Meters),
            7 => Ok(Unit::Kilometers),
            8 => Ok(Unit::Microinches),
            9 => Ok(Unit::Mils),
            10 => Ok(Unit::Yards),
            11 => Ok(Unit::Angstroms),
            12 => Ok(Unit::Nanometers),
            13 => Ok(Unit::Microns),
            14 => Ok(Unit::Decimeters),
            15 => Ok(Unit::Decameters),
            16 => Ok(Unit::Hectometers),
            17 => Ok(Unit::Gigameters),
            18 => Ok(Unit::AstronomicalUnits),
            19 => Ok(Unit::LightYears),
            20 => Ok(Unit::Parsecs),
            other => Err(DxfError::UnknownUnit(format!("code {}", other))),
        }
    }

    /// Decode a unit name as found in the `$INSUNITS` mapping.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "UNITLESS" => Ok(Unit::Unitless),
            "INCHES" => Ok(Unit::Inches),
            "FEET" => Ok(Unit::Feet),
            "MILES" => Ok(Unit::Miles),
            "MILLIMETERS" => Ok(Unit::Millimeters),
            "CENTIMETERS" => Ok(Unit::Centimeters),
            "METERS" => Ok(Unit::Meters),
            "KILOMETERS" => Ok(Unit::Kilometers),
            "MICROINCHES" => Ok(Unit::Microinches),
            "MILS" => Ok(Unit::Mils),
            "YARDS" => Ok(Unit::Yards),
            "ANGSTROMS" => Ok(Unit::Angstroms),
            "NANOMETERS" => Ok(Unit::Nanometers),
            "MICRONS" => Ok(Unit::Microns),
            "DECIMETERS" => Ok(Unit::Decimeters),
            "DECAMETERS" => Ok(Unit::Decameters),
            "HECTOMETERS" => Ok(Unit::Hectometers),
            "GIGAMETERS" => Ok(Unit::Gigameters),
            "ASTRONOMICAL_UNITS" => Ok(Unit::AstronomicalUnits),
            "LIGHT_YEARS" => Ok(Unit::LightYears),
            "PARSECS" => Ok(Unit::Parsecs),
            other => Err(DxfError::UnknownUnit(other.to_string())),
        }
    }

    /// The unit's name in the `$INSUNITS` mapping
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Unitless => "UNITLESS",
            Unit::Inches => "INCHES",
            Unit::Feet => "FEET",
            Unit::Miles => "MILES",
            Unit::Millimeters => "MILLIMETERS",
            Unit::Centimeters => "CENTIMETERS",
            Unit::Meters => "METERS",
            Unit::Kilometers => "KILOMETERS",
            Unit::Microinches => "MICROINCHES",
            Unit::Mils => "MILS",
            Unit::Yards => "YARDS",
            Unit::Angstroms => "ANGSTROMS",
            Unit::Nanometers => "NANOMETERS",
            Unit::Microns => "MICRONS",
            Unit::Decimeters => "DECIMETERS",
            Unit::Decameters => "DECAMETERS",
            Unit::Hectometers => "HECTOMETERS",
            Unit::Gigameters => "GIGAMETERS",
            Unit::AstronomicalUnits => "ASTRONOMICAL_UNITS",
            Unit::LightYears => "LIGHT_YEARS",
            Unit::Parsecs => "PARSECS",
        }
    }

    /// The unit's numeric `$INSUNITS` code
    pub fn code(&self) -> i32 {
        match self {
            Unit::Unitless => 0,
            Unit::Inches => 1,
            Unit::Feet => 2,
            Unit::Miles => 3,
            Unit::Millimeters => 4,
            Unit::Centimeters => 5,
            Unit::Meters => 6,
            Unit::Kilometers => 7,
            Unit::Microinches => 8,
            Unit::Mils => 9,
            Unit::Yards => 10,
            Unit::Angstroms => 11,
            Unit::Nanometers => 12,
            Unit::Microns => 13,
            Unit::Decimeters => 14,
            Unit::Decameters => 15,
            Unit::Hectometers => 16,
            Unit::Gigameters => 17,
            Unit::AstronomicalUnits => 18,
            Unit::LightYears => 19,
            Unit::Parsecs => 20,
        }
    }

    /// How many meters one of this unit is.
    ///
    /// `Unitless` measurements are treated as meters so they pass through
    /// conversion unchanged.
    pub fn meters_per_unit(&self) -> Decimal {
        match self {
            Unit::Angstroms => dec!(0.0000000001),
            Unit::Nanometers => dec!(0.000000001),
            Unit::Microns => dec!(0.000001),
            Unit::Millimeters => dec!(0.001),
            Unit::Centimeters => dec!(0.01),
            Unit::Decimeters => dec!(0.1),
            Unit::Meters => dec!(1),
            Unit::Unitless => dec!(1),
            Unit::Decameters => dec!(10),
            Unit::Hectometers => dec!(100),
            Unit::Kilometers => dec!(1000),
            Unit::Gigameters => dec!(1000000000),
            Unit::AstronomicalUnits => dec!(149597870700),
            Unit::LightYears => dec!(9460730472580800),
            Unit::Parsecs => dec!(30856776376340066.65169031476),
            Unit::Microinches => dec!(0.0000000254),
            Unit::Mils => dec!(0.0000254),
            Unit::Inches => dec!(0.0254),
            Unit::Feet => dec!(0.3048),
            Unit::Yards => dec!(0.9144),
            Unit::Miles => dec!(1609.344),
        }
    }
}

/// Convert a measurement from one unit to meters.
pub fn convert_to_meters(measurement: Decimal, source: Unit) -> Decimal {
    measurement * source.meters_per_unit()
}

/// Convert a measurement in meters to another unit.
pub fn convert_from_meters(measurement: Decimal, target: Unit) -> Decimal {
    measurement / target.meters_per_unit()
}

/// Convert a measurement between two units.
pub fn convert_units(measurement: Decimal, source: Unit, target: Unit) -> Decimal {
    convert_from_meters(convert_to_meters(measurement, source), target)
}

/// Convert a measurement between two units given by name.
pub fn convert_units_by_name(measurement: Decimal, source: &str, target: &str) -> Result<Decimal> {
    Ok(convert_units(
        measurement,
        Unit::from_name(source)?,
        Unit::from_name(target)?,
    ))
}
