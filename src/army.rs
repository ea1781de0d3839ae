use std::{fmt::Display, str::FromStr};

use crate::{
    unit::{Unit, UnitClass},
    Error,
};

const PLATOON_SEPARATOR: char = ';';
const COUNT_SEPARATOR: char = '#';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Army {
    units: Vec<Unit>,
}

impl Army {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// Parses text like `Militia#10; Spearmen#5`. Empty segments between separators are skipped.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        text.split(PLATOON_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Self::parse_unit)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Same text as `to_string`, kept as a named counterpart of `parse`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    fn parse_unit(token: &str) -> Result<Unit, Error> {
        let (class_text, count_text) = token
            .split_once(COUNT_SEPARATOR)
            .filter(|(_, count_text)| !count_text.contains(COUNT_SEPARATOR))
            .ok_or_else(|| Error::InvalidPlatoonFormat(token.to_string()))?;
        let count = Self::parse_count(count_text.trim())
            .ok_or_else(|| Error::InvalidSoldierCount(token.to_string()))?;

        Ok(Unit::new(UnitClass::from(class_text.trim()), count))
    }

    /// Digits may be grouped by single underscores, e.g. `1_000`.
    fn parse_count(text: &str) -> Option<u32> {
        let grouped_ok = !text.starts_with('_') && !text.ends_with('_') && !text.contains("__");
        if !grouped_ok {
            return None;
        }

        text.replace('_', "").parse::<u32>().ok()
    }
}

impl FromStr for Army {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Unit> for Army {
    fn from_iter<T: IntoIterator<Item = Unit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Army {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ind, unit) in self.units.iter().enumerate() {
            if ind > 0 {
                write!(f, "{}", PLATOON_SEPARATOR)?;
            }
            write!(f, "{}", unit)?;
        }

        Ok(())
    }
}
