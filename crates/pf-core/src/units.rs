//! Units, unit-aware text input, and uom interop.
//!
//! A [`Unit`] is a display label with a scale factor to coherent SI and the
//! [`Dimension`] it measures. Values are always stored in SI inside a
//! [`PhysicalQuantity`]; the unit only matters at the edges (parsing,
//! printing, converting out).
//!
//! Text input follows the `value unit` convention: `"5 eV"`, `"1e19 m^-3"`,
//! `"400 G"`. A comma-separated list of numbers becomes a sequence:
//! `"1e19,2e19 cm^-3"`. A bare number parses to [`Input::Bare`] and is treated
//! as SI by the formulary's validator.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::quantity::{Input, PhysicalQuantity};
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, Energy as UomEnergy, Frequency as UomFrequency,
    Length as UomLength, MagneticFluxDensity as UomMagneticFluxDensity, Mass as UomMass,
    MassDensity as UomMassDensity, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Energy = UomEnergy;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type MagneticField = UomMagneticFluxDensity;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

/// A named unit: symbol, scale to coherent SI, and dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    symbol: Cow<'static, str>,
    scale: f64,
    dim: Dimension,
}

impl Unit {
    pub const fn new(symbol: &'static str, scale: f64, dim: Dimension) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            scale,
            dim,
        }
    }

    /// The coherent SI unit of `dim`, labelled by its base-unit exponents.
    pub fn coherent(dim: Dimension) -> Self {
        let symbol = if dim.is_dimensionless() {
            String::new()
        } else {
            dim.to_string()
        };
        Self {
            symbol: Cow::Owned(symbol),
            scale: 1.0,
            dim,
        }
    }

    /// The conventional named unit for `dim`, falling back to [`Unit::coherent`].
    pub fn preferred(dim: Dimension) -> Self {
        const PREFERRED: &[Unit] = &[
            Unit::METER,
            Unit::KILOGRAM,
            Unit::SECOND,
            Unit::KELVIN,
            Unit::JOULE,
            Unit::TESLA,
            Unit::PER_CUBIC_METER,
            Unit::KILOGRAM_PER_CUBIC_METER,
            Unit::METER_PER_SECOND,
            Unit::PER_METER,
            Unit::PASCAL,
            Unit::RADIAN_PER_SECOND,
            Unit::HERTZ,
            Unit::DIMENSIONLESS,
        ];
        PREFERRED
            .iter()
            .find(|u| u.dimension() == dim)
            .cloned()
            .unwrap_or_else(|| Unit::coherent(dim))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Multiplier taking a value in this unit to coherent SI.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub const METER: Unit = Unit::new("m", 1.0, Dimension::LENGTH);
    pub const KILOGRAM: Unit = Unit::new("kg", 1.0, Dimension::MASS);
    pub const SECOND: Unit = Unit::new("s", 1.0, Dimension::TIME);
    pub const KELVIN: Unit = Unit::new("K", 1.0, Dimension::TEMPERATURE);
    pub const JOULE: Unit = Unit::new("J", 1.0, Dimension::ENERGY);
    pub const ELECTRONVOLT: Unit = Unit::new("eV", ELEMENTARY_CHARGE_SI, Dimension::ENERGY);
    pub const TESLA: Unit = Unit::new("T", 1.0, Dimension::MAGNETIC_FIELD);
    pub const GAUSS: Unit = Unit::new("G", 1e-4, Dimension::MAGNETIC_FIELD);
    pub const PER_CUBIC_METER: Unit = Unit::new("m^-3", 1.0, Dimension::NUMBER_DENSITY);
    pub const PER_CUBIC_CENTIMETER: Unit = Unit::new("cm^-3", 1e6, Dimension::NUMBER_DENSITY);
    pub const KILOGRAM_PER_CUBIC_METER: Unit =
        Unit::new("kg m^-3", 1.0, Dimension::MASS_DENSITY);
    pub const METER_PER_SECOND: Unit = Unit::new("m s^-1", 1.0, Dimension::VELOCITY);
    pub const PER_METER: Unit = Unit::new("m^-1", 1.0, Dimension::WAVENUMBER);
    pub const PASCAL: Unit = Unit::new("Pa", 1.0, Dimension::PRESSURE);
    pub const JOULE_PER_CUBIC_METER: Unit = Unit::new("J m^-3", 1.0, Dimension::PRESSURE);
    pub const RADIAN_PER_SECOND: Unit = Unit::new("rad s^-1", 1.0, Dimension::ANGULAR_FREQUENCY);
    pub const HERTZ: Unit = Unit::new("Hz", 1.0, Dimension::FREQUENCY);
    pub const PER_SECOND: Unit = Unit::new("s^-1", 1.0, Dimension::FREQUENCY);
    pub const DIMENSIONLESS: Unit = Unit::new("", 1.0, Dimension::DIMENSIONLESS);
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

const ELEMENTARY_CHARGE_SI: f64 = 1.602_176_634e-19;

/// Recognised unit spellings. Lookup is exact after whitespace normalisation,
/// so `T` (tesla) and `t` are distinct.
const UNIT_TABLE: &[(&[&str], Unit)] = &[
    (&["m", "meter"], Unit::METER),
    (&["cm"], Unit::new("cm", 1e-2, Dimension::LENGTH)),
    (&["mm"], Unit::new("mm", 1e-3, Dimension::LENGTH)),
    (&["um", "µm", "μm"], Unit::new("um", 1e-6, Dimension::LENGTH)),
    (&["km"], Unit::new("km", 1e3, Dimension::LENGTH)),
    (&["kg"], Unit::KILOGRAM),
    (&["g"], Unit::new("g", 1e-3, Dimension::MASS)),
    (&["u", "amu", "Da"], Unit::new("u", 1.660_539_066_60e-27, Dimension::MASS)),
    (&["s"], Unit::SECOND),
    (&["ms"], Unit::new("ms", 1e-3, Dimension::TIME)),
    (&["us", "µs", "μs"], Unit::new("us", 1e-6, Dimension::TIME)),
    (&["ns"], Unit::new("ns", 1e-9, Dimension::TIME)),
    (&["K", "kelvin"], Unit::KELVIN),
    (&["J"], Unit::JOULE),
    (&["eV"], Unit::ELECTRONVOLT),
    (&["keV"], Unit::new("keV", ELEMENTARY_CHARGE_SI * 1e3, Dimension::ENERGY)),
    (&["MeV"], Unit::new("MeV", ELEMENTARY_CHARGE_SI * 1e6, Dimension::ENERGY)),
    (&["T"], Unit::TESLA),
    (&["mT"], Unit::new("mT", 1e-3, Dimension::MAGNETIC_FIELD)),
    (&["uT", "µT", "μT"], Unit::new("uT", 1e-6, Dimension::MAGNETIC_FIELD)),
    (&["nT"], Unit::new("nT", 1e-9, Dimension::MAGNETIC_FIELD)),
    (&["G"], Unit::GAUSS),
    (&["mG"], Unit::new("mG", 1e-7, Dimension::MAGNETIC_FIELD)),
    (&["uG", "µG", "μG"], Unit::new("uG", 1e-10, Dimension::MAGNETIC_FIELD)),
    (&["m^-3", "m-3", "/m^3", "1/m^3", "m**-3"], Unit::PER_CUBIC_METER),
    (&["cm^-3", "cm-3", "/cm^3", "1/cm^3", "cm**-3"], Unit::PER_CUBIC_CENTIMETER),
    (&["kg/m^3", "kg m^-3", "kg/m3"], Unit::KILOGRAM_PER_CUBIC_METER),
    (&["g/cm^3", "g cm^-3", "g/cm3"], Unit::new("g cm^-3", 1e3, Dimension::MASS_DENSITY)),
    (&["m/s", "m s^-1"], Unit::METER_PER_SECOND),
    (&["km/s", "km s^-1"], Unit::new("km s^-1", 1e3, Dimension::VELOCITY)),
    (&["cm/s", "cm s^-1"], Unit::new("cm s^-1", 1e-2, Dimension::VELOCITY)),
    (&["cm/us", "cm us^-1"], Unit::new("cm us^-1", 1e4, Dimension::VELOCITY)),
    (&["m^-1", "1/m", "/m"], Unit::PER_METER),
    (&["cm^-1", "1/cm", "/cm"], Unit::new("cm^-1", 1e2, Dimension::WAVENUMBER)),
    (&["Pa"], Unit::PASCAL),
    (&["kPa"], Unit::new("kPa", 1e3, Dimension::PRESSURE)),
    (&["J/m^3", "J m^-3"], Unit::JOULE_PER_CUBIC_METER),
    (&["rad/s", "rad s^-1"], Unit::RADIAN_PER_SECOND),
    (&["Hz"], Unit::HERTZ),
    (&["kHz"], Unit::new("kHz", 1e3, Dimension::FREQUENCY)),
    (&["MHz"], Unit::new("MHz", 1e6, Dimension::FREQUENCY)),
    (&["GHz"], Unit::new("GHz", 1e9, Dimension::FREQUENCY)),
    (&["1/s", "s^-1", "/s"], Unit::PER_SECOND),
];

/// Look up a unit by its text spelling.
pub fn lookup_unit(text: &str) -> QuantityResult<Unit> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    UNIT_TABLE
        .iter()
        .find(|(aliases, _)| aliases.contains(&normalized.as_str()))
        .map(|(_, unit)| unit.clone())
        .ok_or(QuantityError::UnknownUnit(normalized))
}

/// Parse a quantity from user input text.
///
/// Returns [`Input::Bare`] when no unit is given, leaving the unit decision to
/// the validator of the parameter it is passed to.
pub fn parse_quantity(raw_text: &str) -> QuantityResult<Input> {
    let (value, unit) = split_value_and_unit(raw_text)?;
    if unit.is_empty() {
        return Ok(Input::Bare(value));
    }
    let unit = lookup_unit(&unit)?;
    Ok(Input::Quantity(PhysicalQuantity::new(value, unit)))
}

/// Split a value+unit string into (numeric value(s), unit string).
///
/// Examples:
/// - "5eV" -> (5.0, "eV")
/// - "1e19 m^-3" -> (1e19, "m^-3")
/// - "1,2,3 T" -> ([1, 2, 3], "T")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> QuantityResult<(Value, String)> {
    let trimmed = input.trim();

    // Exponent markers are only numeric when followed by a digit or sign;
    // otherwise "5 eV" would swallow the "e".
    let bytes: Vec<char> = trimmed.chars().collect();
    let mut split_idx = bytes.len();
    for (i, c) in bytes.iter().enumerate() {
        let numeric = c.is_ascii_digit()
            || matches!(c, '.' | '-' | '+' | ',')
            || (matches!(c, 'e' | 'E')
                && i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes
                    .get(i + 1)
                    .is_some_and(|n| n.is_ascii_digit() || matches!(n, '-' | '+')));
        if !numeric && !c.is_whitespace() {
            split_idx = i;
            break;
        }
    }

    let num_part: String = bytes[..split_idx].iter().collect();
    let unit_part: String = bytes[split_idx..].iter().collect();

    let numbers = num_part
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>().map_err(|_| {
                QuantityError::Parse(format!("could not parse numeric value from '{input}'"))
            })
        })
        .collect::<QuantityResult<Vec<f64>>>()?;

    let value = match (numbers.len(), num_part.contains(',')) {
        (0, _) => {
            return Err(QuantityError::Parse(format!(
                "no numeric value in '{input}'"
            )));
        }
        (1, false) => Value::Scalar(numbers[0]),
        _ => Value::Array(numbers),
    };

    Ok((value, unit_part.trim().to_string()))
}

#[inline]
pub fn tesla(v: f64) -> MagneticField {
    use uom::si::magnetic_flux_density::tesla;
    MagneticField::new::<tesla>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn ev(v: f64) -> Energy {
    use uom::si::energy::electronvolt;
    Energy::new::<electronvolt>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Bridge a uom quantity type into and out of [`PhysicalQuantity`].
///
/// uom stores values in SI base units, so the conversion is a relabel.
macro_rules! uom_interop {
    ($uom:ty, $base:ty, $unit:expr) => {
        impl From<$uom> for PhysicalQuantity {
            fn from(q: $uom) -> Self {
                PhysicalQuantity::new(q.get::<$base>(), $unit)
            }
        }

        impl From<$uom> for Input {
            fn from(q: $uom) -> Self {
                Input::Quantity(q.into())
            }
        }

        impl TryFrom<&PhysicalQuantity> for $uom {
            type Error = QuantityError;

            fn try_from(q: &PhysicalQuantity) -> QuantityResult<Self> {
                let unit = $unit;
                q.expect_dimension(unit.dimension(), stringify!($uom))?;
                let si = q.scalar(stringify!($uom))?;
                Ok(<$uom>::new::<$base>(si / unit.scale()))
            }
        }
    };
}

uom_interop!(Length, uom::si::length::meter, Unit::METER);
uom_interop!(Mass, uom::si::mass::kilogram, Unit::KILOGRAM);
uom_interop!(Velocity, uom::si::velocity::meter_per_second, Unit::METER_PER_SECOND);
uom_interop!(
    Temperature,
    uom::si::thermodynamic_temperature::kelvin,
    Unit::KELVIN
);
uom_interop!(Energy, uom::si::energy::joule, Unit::JOULE);
uom_interop!(
    MagneticField,
    uom::si::magnetic_flux_density::tesla,
    Unit::TESLA
);
uom_interop!(
    Density,
    uom::si::mass_density::kilogram_per_cubic_meter,
    Unit::KILOGRAM_PER_CUBIC_METER
);
uom_interop!(Pressure, uom::si::pressure::pascal, Unit::PASCAL);
uom_interop!(Frequency, uom::si::frequency::hertz, Unit::HERTZ);
uom_interop!(
    AngularVelocity,
    uom::si::angular_velocity::radian_per_second,
    Unit::RADIAN_PER_SECOND
);
uom_interop!(Ratio, uom::si::ratio::ratio, Unit::DIMENSIONLESS);

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(text: &str) -> PhysicalQuantity {
        match parse_quantity(text).unwrap() {
            Input::Quantity(q) => q,
            Input::Bare(v) => panic!("expected a unit in {text:?}, got bare {v:?}"),
        }
    }

    #[test]
    fn parse_energy_keeps_e_in_unit() {
        let q = quantity("5 eV");
        assert_eq!(q.dimension(), Dimension::ENERGY);
        assert!((q.value().as_scalar().unwrap() - 5.0 * ELEMENTARY_CHARGE_SI).abs() < 1e-30);

        let q = quantity("5eV");
        assert_eq!(q.unit().symbol(), "eV");
    }

    #[test]
    fn parse_scientific_notation() {
        let q = quantity("1e19 m^-3");
        assert_eq!(q.dimension(), Dimension::NUMBER_DENSITY);
        assert_eq!(q.value(), &Value::Scalar(1e19));

        let q = quantity("5e9 cm^-3");
        assert_eq!(q.value(), &Value::Scalar(5e15));
    }

    #[test]
    fn parse_gauss() {
        let q = quantity("400 G");
        assert!((q.value().as_scalar().unwrap() - 0.04).abs() < 1e-15);
    }

    #[test]
    fn parse_list_to_array() {
        let q = quantity("1,2,3 T");
        assert_eq!(q.value(), &Value::Array(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn bare_number_has_no_unit() {
        assert_eq!(parse_quantity("300").unwrap(), Input::Bare(Value::Scalar(300.0)));
        assert_eq!(
            parse_quantity("-1.5e-3").unwrap(),
            Input::Bare(Value::Scalar(-1.5e-3))
        );
    }

    #[test]
    fn reject_unknown_unit() {
        assert!(matches!(
            parse_quantity("3 furlongs"),
            Err(QuantityError::UnknownUnit(u)) if u == "furlongs"
        ));
    }

    #[test]
    fn reject_missing_number() {
        assert!(matches!(parse_quantity("eV"), Err(QuantityError::Parse(_))));
    }

    #[test]
    fn uom_round_trip() {
        let b: PhysicalQuantity = tesla(0.2).into();
        assert_eq!(b.dimension(), Dimension::MAGNETIC_FIELD);
        let back = MagneticField::try_from(&b).unwrap();
        assert!((back.value - 0.2).abs() < 1e-15);

        let t: PhysicalQuantity = ev(1.0).into();
        assert_eq!(t.dimension(), Dimension::ENERGY);
        assert!(Velocity::try_from(&t).is_err());
    }

    #[test]
    fn constructors_smoke() {
        let _b = tesla(0.1);
        let _t = k(300.0);
        let _e = ev(5.0);
        let _v = mps(1.0e5);
        let _l = m(2.0);
        let _rho = kg_per_m3(1.0e-7);
    }
}
