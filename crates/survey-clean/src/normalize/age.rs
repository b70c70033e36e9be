//! Age bracket normalization.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::input::Cell;

/// Questionnaire age bracket.
///
/// Variants are declared in rank order, so the derived ordering sorts
/// youngest first with [`AgeBand::Unknown`] after every real band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    From18To24,
    From25To34,
    From35To44,
    From45To54,
    From55To64,
    From65,
    /// Any answer that is not one of the six bracket labels.
    Unknown,
}

impl AgeBand {
    /// The six real bands, in rank order.
    pub const ALL: [AgeBand; 6] = [
        AgeBand::From18To24,
        AgeBand::From25To34,
        AgeBand::From35To44,
        AgeBand::From45To54,
        AgeBand::From55To64,
        AgeBand::From65,
    ];

    /// Label as it appears in the questionnaire.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::From18To24 => "18-24 years",
            AgeBand::From25To34 => "25-34 years",
            AgeBand::From35To44 => "35-44 years",
            AgeBand::From45To54 => "45-54 years",
            AgeBand::From55To64 => "55-64 years",
            AgeBand::From65 => "65 & above",
            AgeBand::Unknown => "Unknown",
        }
    }

    /// Zero-based rank among the six bands. `Unknown` has no rank.
    pub fn rank(&self) -> Option<usize> {
        Self::ALL.iter().position(|band| band == self)
    }

    /// Match an exact band label after trimming. Anything else is `Unknown`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|band| band.label() == value)
            .unwrap_or(AgeBand::Unknown)
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AgeBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Normalize one age answer. Missing and non-text cells are `Unknown`.
pub fn normalize_age(cell: &Cell) -> AgeBand {
    match cell {
        Cell::Text(s) => AgeBand::parse(s),
        Cell::Age(band) => *band,
        _ => AgeBand::Unknown,
    }
}

/// Normalize a whole age column.
pub fn clean_age_group<'a>(column: impl IntoIterator<Item = &'a Cell>) -> Vec<Cell> {
    column
        .into_iter()
        .map(|cell| Cell::Age(normalize_age(cell)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_band_round_trips_its_label() {
        for band in AgeBand::ALL {
            assert_eq!(AgeBand::parse(band.label()), band);
            assert_eq!(normalize_age(&Cell::from(band.label())), band);
        }
    }

    #[test]
    fn test_unexpected_values_are_unknown() {
        for raw in ["99 years", "", "teen", "18-24", "25-34 Years"] {
            assert_eq!(AgeBand::parse(raw), AgeBand::Unknown, "{raw:?}");
        }
        assert_eq!(normalize_age(&Cell::Missing), AgeBand::Unknown);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(AgeBand::parse("  45-54 years "), AgeBand::From45To54);
    }

    #[test]
    fn test_ordering_and_rank() {
        assert!(AgeBand::From18To24 < AgeBand::From65);
        assert!(AgeBand::From65 < AgeBand::Unknown);
        assert_eq!(AgeBand::From18To24.rank(), Some(0));
        assert_eq!(AgeBand::From65.rank(), Some(5));
        assert_eq!(AgeBand::Unknown.rank(), None);
    }

    #[test]
    fn test_clean_age_group_column() {
        let column = [Cell::from("35-44 years"), Cell::Missing, Cell::from("old")];
        assert_eq!(
            clean_age_group(&column),
            vec![
                Cell::Age(AgeBand::From35To44),
                Cell::Age(AgeBand::Unknown),
                Cell::Age(AgeBand::Unknown),
            ]
        );
    }
}
