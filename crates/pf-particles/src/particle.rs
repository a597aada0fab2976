//! Particle species and descriptor parsing.

use crate::element::Element;
use crate::error::{ParticleError, ParticleResult};
use pf_core::constants::{AMU, M_ALPHA, M_D, M_E, M_N, M_P, M_T};
use std::fmt;
use std::str::FromStr;

/// A particle species resolved from a text descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Particle {
    Electron,
    Positron,
    Proton,
    Neutron,
    Deuteron,
    Triton,
    Alpha,
    /// An atom or ion of a tabulated element.
    ///
    /// `mass_number: None` uses the standard atomic weight; `charge: None`
    /// means the descriptor carried no charge information.
    Ion {
        element: &'static Element,
        mass_number: Option<u16>,
        charge: Option<i32>,
    },
}

impl Particle {
    /// Rest mass [kg].
    pub fn mass_kg(&self) -> ParticleResult<f64> {
        match self {
            Particle::Electron | Particle::Positron => Ok(M_E),
            Particle::Proton => Ok(M_P),
            Particle::Neutron => Ok(M_N),
            Particle::Deuteron => Ok(M_D),
            Particle::Triton => Ok(M_T),
            Particle::Alpha => Ok(M_ALPHA),
            Particle::Ion {
                element,
                mass_number,
                charge,
            } => {
                let atomic_mass_u = match mass_number {
                    Some(a) => element.isotope_mass(*a).ok_or(ParticleError::UnknownIsotope {
                        symbol: element.symbol,
                        mass_number: *a,
                    })?,
                    None => element.standard_weight,
                };
                let z = f64::from(charge.unwrap_or(0));
                Ok(atomic_mass_u * AMU - z * M_E)
            }
        }
    }

    /// Integer charge in units of the elementary charge, if known.
    pub fn charge(&self) -> Option<i32> {
        match self {
            Particle::Electron => Some(-1),
            Particle::Positron | Particle::Proton | Particle::Deuteron | Particle::Triton => {
                Some(1)
            }
            Particle::Neutron => Some(0),
            Particle::Alpha => Some(2),
            Particle::Ion { charge, .. } => *charge,
        }
    }

    /// Canonical symbol (e.g. `"p+"`, `"He-4 1+"`, `"Fe 3+"`).
    pub fn symbol(&self) -> String {
        match self {
            Particle::Electron => "e-".into(),
            Particle::Positron => "e+".into(),
            Particle::Proton => "p+".into(),
            Particle::Neutron => "n".into(),
            Particle::Deuteron => "D 1+".into(),
            Particle::Triton => "T 1+".into(),
            Particle::Alpha => "He-4 2+".into(),
            Particle::Ion {
                element,
                mass_number,
                charge,
            } => {
                let mut s = element.symbol.to_string();
                if let Some(a) = mass_number {
                    s.push_str(&format!("-{a}"));
                }
                if let Some(z) = charge {
                    let sign = if *z < 0 { '-' } else { '+' };
                    s.push_str(&format!(" {}{}", z.abs(), sign));
                }
                s
            }
        }
    }

    /// Fold hydrogen and helium-4 ions onto their named particles so that
    /// e.g. `"H-1 1+"` uses the proton mass.
    fn canonicalize(self) -> Particle {
        if let Particle::Ion {
            element,
            mass_number,
            charge,
        } = self
        {
            match (element.symbol, mass_number, charge) {
                ("H", Some(1), Some(1)) => return Particle::Proton,
                ("H", Some(2), Some(1)) => return Particle::Deuteron,
                ("H", Some(3), Some(1)) => return Particle::Triton,
                ("He", Some(4), Some(2)) => return Particle::Alpha,
                _ => {}
            }
        }
        self
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Particle {
    type Err = ParticleError;

    /// Parse a species descriptor.
    ///
    /// Accepted forms:
    /// - named particles: `e-`, `electron`, `e+`, `positron`, `p`, `p+`,
    ///   `proton`, `n`, `neutron`, `alpha`, `D+`, `deuteron`, `T+`, `triton`
    /// - element with optional mass number: `He`, `He-4`, `D`, `T`, `Fe-56`
    /// - followed by an optional charge: `He-4 +1`, `He-4 1+`, `He+`, `Fe+++`,
    ///   `O 2-`, `H-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParticleError::Unknown(s.to_string()));
        }

        if let Some(p) = named_particle(trimmed) {
            return Ok(p);
        }

        let (isotope, charge) = split_charge(trimmed)?;
        let (element, mass_number) = parse_isotope(isotope)
            .ok_or_else(|| ParticleError::Unknown(trimmed.to_string()))?;

        if let Some(a) = mass_number
            && element.isotope_mass(a).is_none()
        {
            return Err(ParticleError::UnknownIsotope {
                symbol: element.symbol,
                mass_number: a,
            });
        }

        if let Some(z) = charge
            && z > i32::from(element.atomic_number)
        {
            return Err(ParticleError::ChargeExceedsAtomicNumber {
                descriptor: trimmed.to_string(),
                charge: z,
                atomic_number: element.atomic_number,
            });
        }

        Ok(Particle::Ion {
            element,
            mass_number,
            charge,
        }
        .canonicalize())
    }
}

fn named_particle(s: &str) -> Option<Particle> {
    let p = match s {
        "e-" | "e" => Particle::Electron,
        "e+" => Particle::Positron,
        "p" | "p+" => Particle::Proton,
        "n" => Particle::Neutron,
        "D+" | "d+" => Particle::Deuteron,
        "T+" | "t+" => Particle::Triton,
        "He-4++" => Particle::Alpha,
        _ => match s.to_ascii_lowercase().as_str() {
            "electron" => Particle::Electron,
            "positron" => Particle::Positron,
            "proton" => Particle::Proton,
            "neutron" => Particle::Neutron,
            "deuteron" => Particle::Deuteron,
            "triton" => Particle::Triton,
            "alpha" => Particle::Alpha,
            _ => return None,
        },
    };
    Some(p)
}

/// Split a descriptor into its isotope part and optional charge.
fn split_charge(s: &str) -> ParticleResult<(&str, Option<i32>)> {
    if let Some((isotope, token)) = s.rsplit_once(char::is_whitespace) {
        let charge = parse_charge_token(token).ok_or_else(|| ParticleError::InvalidCharge {
            descriptor: s.to_string(),
            token: token.to_string(),
        })?;
        return Ok((isotope.trim(), Some(charge)));
    }

    // Trailing run of '+' or '-' (e.g. "Fe+++", "He+", "H-")
    let last = s.chars().last();
    if let Some(sign @ ('+' | '-')) = last {
        let isotope = s.trim_end_matches(sign);
        let count = (s.len() - isotope.len()) as i32;
        let charge = if sign == '+' { count } else { -count };
        return Ok((isotope, Some(charge)));
    }

    Ok((s, None))
}

/// `+1`, `-2`, `1+`, `2-`, `+`, `++`, `0`
fn parse_charge_token(token: &str) -> Option<i32> {
    if token.is_empty() {
        return None;
    }
    if token.chars().all(|c| c == '+') {
        return Some(token.len() as i32);
    }
    if token.chars().all(|c| c == '-') {
        return Some(-(token.len() as i32));
    }
    if let Some(rest) = token.strip_prefix('+') {
        return rest.parse::<i32>().ok().filter(|z| *z >= 0);
    }
    if let Some(rest) = token.strip_prefix('-') {
        return rest.parse::<i32>().ok().filter(|z| *z >= 0).map(|z| -z);
    }
    if let Some(rest) = token.strip_suffix('+') {
        return rest.parse::<i32>().ok();
    }
    if let Some(rest) = token.strip_suffix('-') {
        return rest.parse::<i32>().ok().map(|z| -z);
    }
    token.parse::<i32>().ok().filter(|z| *z == 0)
}

/// `He`, `He-4`, `D`, `T`, `helium`
fn parse_isotope(s: &str) -> Option<(&'static Element, Option<u16>)> {
    let hydrogen = Element::from_symbol("H")?;
    match s {
        "D" => return Some((hydrogen, Some(2))),
        "T" => return Some((hydrogen, Some(3))),
        _ => {}
    }
    if let Some((symbol, a)) = s.split_once('-') {
        let element = Element::from_symbol(symbol).or_else(|| Element::from_name(symbol))?;
        let a = a.parse::<u16>().ok()?;
        return Some((element, Some(a)));
    }
    let element = Element::from_symbol(s).or_else(|| Element::from_name(s))?;
    Some((element, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Particle {
        s.parse().unwrap()
    }

    #[test]
    fn named_particles() {
        assert_eq!(parse("e-"), Particle::Electron);
        assert_eq!(parse("electron"), Particle::Electron);
        assert_eq!(parse("p"), Particle::Proton);
        assert_eq!(parse("p+"), Particle::Proton);
        assert_eq!(parse("D+"), Particle::Deuteron);
        assert_eq!(parse("T+"), Particle::Triton);
        assert_eq!(parse("alpha"), Particle::Alpha);
        assert_eq!(parse("n"), Particle::Neutron);
    }

    #[test]
    fn element_with_charge_forms() {
        for s in ["He-4 +1", "He-4 1+", "He-4+"] {
            let p = parse(s);
            assert_eq!(p.charge(), Some(1), "{s}");
            assert!(matches!(p, Particle::Ion { mass_number: Some(4), .. }), "{s}");
        }
        assert_eq!(parse("Fe+++").charge(), Some(3));
        assert_eq!(parse("Fe 3+").charge(), Some(3));
        assert_eq!(parse("O 2-").charge(), Some(-2));
        assert_eq!(parse("H-").charge(), Some(-1));
    }

    #[test]
    fn hydrogen_ions_fold_to_named_particles() {
        assert_eq!(parse("H-1 1+"), Particle::Proton);
        assert_eq!(parse("D 1+"), Particle::Deuteron);
        assert_eq!(parse("He-4 2+"), Particle::Alpha);
    }

    #[test]
    fn missing_charge_is_none() {
        assert_eq!(parse("He").charge(), None);
        assert_eq!(parse("D").charge(), None);
    }

    #[test]
    fn ion_mass_subtracts_electrons() {
        let he1 = parse("He-4 1+").mass_kg().unwrap();
        let he0 = parse("He-4").mass_kg().unwrap();
        assert!(((he0 - he1) - M_E).abs() < 1e-40);
    }

    #[test]
    fn standard_weight_without_mass_number() {
        let fe = parse("Fe+++").mass_kg().unwrap();
        let expected = 55.845 * AMU - 3.0 * M_E;
        assert!((fe - expected).abs() / expected < 1e-14);
    }

    #[test]
    fn rejects_bad_descriptors() {
        assert!(matches!(
            "unobtainium".parse::<Particle>(),
            Err(ParticleError::Unknown(_))
        ));
        assert!(matches!(
            "He-9".parse::<Particle>(),
            Err(ParticleError::UnknownIsotope { .. })
        ));
        assert!(matches!(
            "He 3+".parse::<Particle>(),
            Err(ParticleError::ChargeExceedsAtomicNumber { .. })
        ));
        assert!(matches!(
            "He x".parse::<Particle>(),
            Err(ParticleError::InvalidCharge { .. })
        ));
        assert!("".parse::<Particle>().is_err());
    }

    #[test]
    fn symbol_round_trip() {
        for s in ["p+", "e-", "He-4 1+", "Fe 3+", "alpha", "D+"] {
            let p = parse(s);
            assert_eq!(parse(&p.symbol()), p, "{s}");
        }
    }
}
