//! Development-time integrity pass over the catalog
//!
//! Factions and the tier list refer to operators by display name. Lookups
//! silently fall back when a name does not resolve, so this pass is the only
//! place a typo'd reference becomes visible.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Tier};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogIssue {
    DuplicateId {
        id: String,
    },
    DuplicateName {
        name: String,
    },
    UnknownFactionMember {
        faction: String,
        name: String,
    },
    UnknownTierEntry {
        tier: Tier,
        name: String,
    },
    RankedTwice {
        name: String,
        first: Tier,
        second: Tier,
    },
    UnlistedFaction {
        operator: String,
        faction: String,
    },
    MissingFromRoster {
        operator: String,
        faction: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id } => write!(f, "duplicate operator id {id:?}"),
            CatalogIssue::DuplicateName { name } => write!(f, "duplicate operator name {name:?}"),
            CatalogIssue::UnknownFactionMember { faction, name } => {
                write!(f, "faction {faction:?} lists unknown operator {name:?}")
            }
            CatalogIssue::UnknownTierEntry { tier, name } => {
                write!(f, "tier {} lists unknown operator {name:?}", tier.label())
            }
            CatalogIssue::RankedTwice {
                name,
                first,
                second,
            } => write!(
                f,
                "operator {name:?} is ranked in both {} and {}",
                first.label(),
                second.label()
            ),
            CatalogIssue::UnlistedFaction { operator, faction } => {
                write!(f, "operator {operator:?} belongs to unknown faction {faction:?}")
            }
            CatalogIssue::MissingFromRoster { operator, faction } => {
                write!(f, "operator {operator:?} is missing from the {faction:?} roster")
            }
        }
    }
}

/// Cross-checks ids, names and by-name references. Issues come back in a
/// stable order: operators, factions, then tiers.
pub fn validate(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for character in &catalog.characters {
        if !ids.insert(character.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                id: character.id.clone(),
            });
        }
        if !names.insert(character.name.as_str()) {
            issues.push(CatalogIssue::DuplicateName {
                name: character.name.clone(),
            });
        }

        match catalog.factions.iter().find(|f| f.name == character.faction) {
            None => issues.push(CatalogIssue::UnlistedFaction {
                operator: character.name.clone(),
                faction: character.faction.clone(),
            }),
            Some(faction) if !faction.members.contains(&character.name) => {
                issues.push(CatalogIssue::MissingFromRoster {
                    operator: character.name.clone(),
                    faction: faction.name.clone(),
                })
            }
            Some(_) => {}
        }
    }

    for faction in &catalog.factions {
        for (name, resolved) in catalog.members_of(faction) {
            if resolved.is_none() {
                issues.push(CatalogIssue::UnknownFactionMember {
                    faction: faction.name.clone(),
                    name: name.to_string(),
                });
            }
        }
    }

    let mut ranked: HashMap<&str, Tier> = HashMap::new();
    for (tier, tier_names) in catalog.tier_list.iter() {
        for name in tier_names {
            if catalog.find_by_name(name).is_none() {
                issues.push(CatalogIssue::UnknownTierEntry {
                    tier,
                    name: name.clone(),
                });
            }
            if let Some(first) = ranked.insert(name.as_str(), tier) {
                issues.push(CatalogIssue::RankedTwice {
                    name: name.clone(),
                    first,
                    second: tier,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_catalog_is_consistent() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(validate(&catalog), Vec::new());
    }

    #[test]
    fn typo_in_tier_list_is_reported() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.tier_list.s[0] = "Laevatian".to_string();

        let issues = validate(&catalog);
        assert_eq!(
            issues,
            vec![CatalogIssue::UnknownTierEntry {
                tier: Tier::S,
                name: "Laevatian".into(),
            }]
        );
        // The display fallback still kicks in for the typo.
        assert_eq!(catalog.rarity_of("Laevatian").stars(), 4);
    }

    #[test]
    fn double_ranking_is_reported() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.tier_list.c.push("Laevatain".into());

        assert_eq!(
            validate(&catalog),
            vec![CatalogIssue::RankedTwice {
                name: "Laevatain".into(),
                first: Tier::S,
                second: Tier::C,
            }]
        );
    }

    #[test]
    fn roster_mismatches_are_reported() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.factions[2].members = vec!["Embr".into()];

        let issues = validate(&catalog);
        assert_eq!(
            issues,
            vec![
                CatalogIssue::MissingFromRoster {
                    operator: "Ember".into(),
                    faction: "Order of Steel Oath".into(),
                },
                CatalogIssue::UnknownFactionMember {
                    faction: "Order of Steel Oath".into(),
                    name: "Embr".into(),
                },
            ]
        );
    }

    #[test]
    fn duplicate_ids_and_unknown_factions() {
        let mut catalog = Catalog::embedded().unwrap();
        let mut clone = catalog.characters[0].clone();
        clone.name = "Endministrator Alter".into();
        clone.faction = "Ghost Division".into();
        catalog.characters.push(clone);

        let issues = validate(&catalog);
        assert!(issues.contains(&CatalogIssue::DuplicateId {
            id: "endministrator".into()
        }));
        assert!(issues.contains(&CatalogIssue::UnlistedFaction {
            operator: "Endministrator Alter".into(),
            faction: "Ghost Division".into(),
        }));
        assert_eq!(
            issues[0].to_string(),
            "duplicate operator id \"endministrator\""
        );
    }
}
