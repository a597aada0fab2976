//! Runtime physical dimensions.
//!
//! A [`Dimension`] is a vector of integer exponents over the SI base units
//! used by the formulary (length, mass, time, electric current, temperature)
//! plus plane angle. Angle is dimensionless in SI; it is tracked separately so
//! that rad/s and Hz stay distinguishable and the 2π between them is never
//! silently absorbed.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
    pub temperature: i8,
    pub angle: i8,
}

impl Dimension {
    pub const fn new(length: i8, mass: i8, time: i8, current: i8, temperature: i8) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            angle: 0,
        }
    }

    pub const fn with_angle(self, angle: i8) -> Self {
        Self { angle, ..self }
    }

    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0, 0);
    pub const CURRENT: Dimension = Dimension::new(0, 0, 0, 1, 0);
    pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 0, 1);
    pub const ANGLE: Dimension = Dimension::DIMENSIONLESS.with_angle(1);

    pub const CHARGE: Dimension = Dimension::new(0, 0, 1, 1, 0);
    pub const VELOCITY: Dimension = Dimension::new(1, 0, -1, 0, 0);
    pub const ENERGY: Dimension = Dimension::new(2, 1, -2, 0, 0);
    pub const PRESSURE: Dimension = Dimension::new(-1, 1, -2, 0, 0);
    pub const MAGNETIC_FIELD: Dimension = Dimension::new(0, 1, -2, -1, 0);
    pub const NUMBER_DENSITY: Dimension = Dimension::new(-3, 0, 0, 0, 0);
    pub const MASS_DENSITY: Dimension = Dimension::new(-3, 1, 0, 0, 0);
    pub const WAVENUMBER: Dimension = Dimension::new(-1, 0, 0, 0, 0);
    pub const FREQUENCY: Dimension = Dimension::new(0, 0, -1, 0, 0);
    pub const ANGULAR_FREQUENCY: Dimension = Dimension::FREQUENCY.with_angle(1);
    pub const ENTROPY: Dimension = Dimension::new(2, 1, -2, 0, -1);
    pub const PERMITTIVITY: Dimension = Dimension::new(-3, -1, 4, 2, 0);
    pub const PERMEABILITY: Dimension = Dimension::new(1, 1, -2, -2, 0);
    pub const ACTION: Dimension = Dimension::new(2, 1, -1, 0, 0);

    pub const fn mul(self, rhs: Dimension) -> Dimension {
        Dimension {
            length: self.length + rhs.length,
            mass: self.mass + rhs.mass,
            time: self.time + rhs.time,
            current: self.current + rhs.current,
            temperature: self.temperature + rhs.temperature,
            angle: self.angle + rhs.angle,
        }
    }

    pub const fn div(self, rhs: Dimension) -> Dimension {
        self.mul(rhs.powi(-1))
    }

    pub const fn powi(self, n: i8) -> Dimension {
        Dimension {
            length: self.length * n,
            mass: self.mass * n,
            time: self.time * n,
            current: self.current * n,
            temperature: self.temperature * n,
            angle: self.angle * n,
        }
    }

    /// Halve every exponent, or `None` if any exponent is odd.
    pub fn sqrt(self) -> Option<Dimension> {
        let exps = self.exponents();
        if exps.iter().any(|e| e % 2 != 0) {
            return None;
        }
        Some(Dimension {
            length: self.length / 2,
            mass: self.mass / 2,
            time: self.time / 2,
            current: self.current / 2,
            temperature: self.temperature / 2,
            angle: self.angle / 2,
        })
    }

    /// The same dimension with the plane-angle exponent dropped.
    pub const fn without_angle(self) -> Dimension {
        self.with_angle(0)
    }

    pub fn is_dimensionless(self) -> bool {
        self == Dimension::DIMENSIONLESS
    }

    fn exponents(self) -> [i8; 6] {
        [
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.angle,
        ]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SYMBOLS: [&str; 6] = ["m", "kg", "s", "A", "K", "rad"];
        let mut parts = Vec::new();
        for (sym, exp) in SYMBOLS.iter().zip(self.exponents()) {
            match exp {
                0 => {}
                1 => parts.push((*sym).to_string()),
                _ => parts.push(format!("{sym}^{exp}")),
            }
        }
        if parts.is_empty() {
            write!(f, "dimensionless")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}
