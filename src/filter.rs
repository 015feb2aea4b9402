//! Roster filtering by rarity or class

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Character, CharacterClass, Rarity};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterCriterion {
    #[default]
    All,
    RarityEquals(Rarity),
    /// Compared case-insensitively against the operator's class name.
    ClassEquals(String),
}

impl FilterCriterion {
    /// Filter tabs in display order: All, 6★, 5★, 4★, then every class.
    pub fn tabs() -> Vec<FilterCriterion> {
        let mut tabs = vec![FilterCriterion::All];
        tabs.extend(Rarity::DESCENDING.map(FilterCriterion::RarityEquals));
        tabs.extend(
            CharacterClass::ALL.map(|class| FilterCriterion::ClassEquals(class.name().into())),
        );
        tabs
    }

    pub fn label(&self) -> String {
        match self {
            FilterCriterion::All => "All".into(),
            FilterCriterion::RarityEquals(rarity) => rarity.to_string(),
            FilterCriterion::ClassEquals(name) => name.clone(),
        }
    }

    pub fn matches(&self, character: &Character) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::RarityEquals(rarity) => character.rarity == *rarity,
            FilterCriterion::ClassEquals(name) => {
                character.class.name().eq_ignore_ascii_case(name)
            }
        }
    }

    /// Position among `tabs()`, matching class names case-insensitively.
    pub fn tab_index(&self) -> Option<usize> {
        FilterCriterion::tabs()
            .iter()
            .position(|tab| match (tab, self) {
                (FilterCriterion::ClassEquals(a), FilterCriterion::ClassEquals(b)) => {
                    a.eq_ignore_ascii_case(b)
                }
                _ => tab == self,
            })
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterParseError {
    #[error("filter must not be empty")]
    Empty,
}

impl FromStr for FilterCriterion {
    type Err = FilterParseError;

    /// `all`, a star count (`6`, `6★`, `6*`), or a class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(FilterParseError::Empty);
        }
        if text.eq_ignore_ascii_case("all") {
            return Ok(FilterCriterion::All);
        }
        let stars = text
            .strip_suffix('★')
            .or_else(|| text.strip_suffix('*'))
            .unwrap_or(text);
        if let Some(rarity) = stars.parse().ok().and_then(Rarity::from_stars) {
            return Ok(FilterCriterion::RarityEquals(rarity));
        }
        Ok(FilterCriterion::ClassEquals(text.to_string()))
    }
}

/// Operators matching `criterion`, in catalog order.
pub fn filter<'a>(catalog: &'a [Character], criterion: &FilterCriterion) -> Vec<&'a Character> {
    catalog.iter().filter(|c| criterion.matches(c)).collect()
}
