//! Element and isotope reference data.
//!
//! Atomic masses in unified atomic mass units (AME2016 for isotopes, IUPAC
//! conventional standard atomic weights for elements).

/// A chemical element with its standard atomic weight and tabulated isotopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight [u].
    pub standard_weight: f64,
    /// (mass number, atomic mass [u])
    pub isotopes: &'static [(u16, f64)],
}

impl Element {
    /// Atomic mass [u] of the isotope with `mass_number`, if tabulated.
    pub fn isotope_mass(&self, mass_number: u16) -> Option<f64> {
        self.isotopes
            .iter()
            .find(|(a, _)| *a == mass_number)
            .map(|(_, m)| *m)
    }

    /// Look up an element by its symbol (case-sensitive, e.g. `"Fe"`).
    pub fn from_symbol(symbol: &str) -> Option<&'static Element> {
        ELEMENTS.iter().find(|e| e.symbol == symbol)
    }

    /// Look up an element by its English name (case-insensitive).
    pub fn from_name(name: &str) -> Option<&'static Element> {
        ELEMENTS.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }
}

pub const ELEMENTS: &[Element] = &[
    Element {
        symbol: "H",
        name: "hydrogen",
        atomic_number: 1,
        standard_weight: 1.008,
        isotopes: &[(1, 1.007_825_032_23), (2, 2.014_101_778_12), (3, 3.016_049_277_9)],
    },
    Element {
        symbol: "He",
        name: "helium",
        atomic_number: 2,
        standard_weight: 4.002_602,
        isotopes: &[(3, 3.016_029_320_1), (4, 4.002_603_254_13)],
    },
    Element {
        symbol: "Li",
        name: "lithium",
        atomic_number: 3,
        standard_weight: 6.94,
        isotopes: &[(6, 6.015_122_887_4), (7, 7.016_003_436_6)],
    },
    Element {
        symbol: "Be",
        name: "beryllium",
        atomic_number: 4,
        standard_weight: 9.012_183_1,
        isotopes: &[(9, 9.012_183_065)],
    },
    Element {
        symbol: "B",
        name: "boron",
        atomic_number: 5,
        standard_weight: 10.81,
        isotopes: &[(10, 10.012_936_95), (11, 11.009_305_36)],
    },
    Element {
        symbol: "C",
        name: "carbon",
        atomic_number: 6,
        standard_weight: 12.011,
        isotopes: &[(12, 12.0), (13, 13.003_354_835_07)],
    },
    Element {
        symbol: "N",
        name: "nitrogen",
        atomic_number: 7,
        standard_weight: 14.007,
        isotopes: &[(14, 14.003_074_004_43), (15, 15.000_108_898_88)],
    },
    Element {
        symbol: "O",
        name: "oxygen",
        atomic_number: 8,
        standard_weight: 15.999,
        isotopes: &[(16, 15.994_914_619_57), (18, 17.999_159_612_86)],
    },
    Element {
        symbol: "F",
        name: "fluorine",
        atomic_number: 9,
        standard_weight: 18.998_403_163,
        isotopes: &[(19, 18.998_403_162_73)],
    },
    Element {
        symbol: "Ne",
        name: "neon",
        atomic_number: 10,
        standard_weight: 20.1797,
        isotopes: &[(20, 19.992_440_176_2), (22, 21.991_385_114)],
    },
    Element {
        symbol: "Na",
        name: "sodium",
        atomic_number: 11,
        standard_weight: 22.989_769_28,
        isotopes: &[(23, 22.989_769_282)],
    },
    Element {
        symbol: "Mg",
        name: "magnesium",
        atomic_number: 12,
        standard_weight: 24.305,
        isotopes: &[(24, 23.985_041_697)],
    },
    Element {
        symbol: "Al",
        name: "aluminium",
        atomic_number: 13,
        standard_weight: 26.981_538_5,
        isotopes: &[(27, 26.981_538_53)],
    },
    Element {
        symbol: "Si",
        name: "silicon",
        atomic_number: 14,
        standard_weight: 28.085,
        isotopes: &[(28, 27.976_926_534_65)],
    },
    Element {
        symbol: "Ar",
        name: "argon",
        atomic_number: 18,
        standard_weight: 39.948,
        isotopes: &[(40, 39.962_383_123_7)],
    },
    Element {
        symbol: "K",
        name: "potassium",
        atomic_number: 19,
        standard_weight: 39.0983,
        isotopes: &[(39, 38.963_706_486_4)],
    },
    Element {
        symbol: "Ca",
        name: "calcium",
        atomic_number: 20,
        standard_weight: 40.078,
        isotopes: &[(40, 39.962_590_863)],
    },
    Element {
        symbol: "Fe",
        name: "iron",
        atomic_number: 26,
        standard_weight: 55.845,
        isotopes: &[(54, 53.939_608_99), (56, 55.934_936_33)],
    },
    Element {
        symbol: "Ni",
        name: "nickel",
        atomic_number: 28,
        standard_weight: 58.6934,
        isotopes: &[(58, 57.935_342_41)],
    },
    Element {
        symbol: "Cu",
        name: "copper",
        atomic_number: 29,
        standard_weight: 63.546,
        isotopes: &[(63, 62.929_597_72)],
    },
    Element {
        symbol: "Kr",
        name: "krypton",
        atomic_number: 36,
        standard_weight: 83.798,
        isotopes: &[(84, 83.911_497_728_2)],
    },
    Element {
        symbol: "Xe",
        name: "xenon",
        atomic_number: 54,
        standard_weight: 131.293,
        isotopes: &[(132, 131.904_155_085_6)],
    },
    Element {
        symbol: "W",
        name: "tungsten",
        atomic_number: 74,
        standard_weight: 183.84,
        isotopes: &[(184, 183.950_930_92)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_symbol_and_name() {
        assert_eq!(Element::from_symbol("Fe").unwrap().atomic_number, 26);
        assert_eq!(Element::from_name("Helium").unwrap().symbol, "He");
        assert!(Element::from_symbol("fe").is_none());
    }

    #[test]
    fn isotope_masses_near_mass_number() {
        for el in ELEMENTS {
            for (a, mass) in el.isotopes {
                assert!(
                    (mass - f64::from(*a)).abs() < 0.1,
                    "{}-{} mass {} too far from mass number",
                    el.symbol,
                    a,
                    mass
                );
            }
        }
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }
}
