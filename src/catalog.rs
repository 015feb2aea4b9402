//! Operator catalog - the static dataset every view reads from
//!
//! The catalog ships as a versioned RON artifact embedded at compile time
//! (`data/catalog.ron`). A different file can be loaded at startup, but once
//! loaded the catalog is never mutated.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselError;

/// Catalog format version understood by this build.
pub const CATALOG_VERSION: u32 = 1;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.ron");

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("catalog has no factions: {0}")]
    Faction(#[from] CarouselError),
}

/// Star rating of an operator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    /// Also the fallback when a by-name lookup misses.
    #[default]
    Four,
    Five,
    Six,
}

impl Rarity {
    /// Highest first, the order the filter tabs use.
    pub const DESCENDING: [Rarity; 3] = [Rarity::Six, Rarity::Five, Rarity::Four];

    pub fn stars(self) -> u8 {
        match self {
            Rarity::Four => 4,
            Rarity::Five => 5,
            Rarity::Six => 6,
        }
    }

    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            4 => Some(Rarity::Four),
            5 => Some(Rarity::Five),
            6 => Some(Rarity::Six),
            _ => None,
        }
    }

    pub fn star_string(self) -> String {
        "★".repeat(self.stars() as usize)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.stars())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Guard,
    Caster,
    Striker,
    Vanguard,
    Defender,
    Support,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 6] = [
        CharacterClass::Guard,
        CharacterClass::Caster,
        CharacterClass::Striker,
        CharacterClass::Vanguard,
        CharacterClass::Defender,
        CharacterClass::Support,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Guard => "Guard",
            CharacterClass::Caster => "Caster",
            CharacterClass::Striker => "Striker",
            CharacterClass::Vanguard => "Vanguard",
            CharacterClass::Defender => "Defender",
            CharacterClass::Support => "Support",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elements in pentagon order: top, top-right, bottom-right, bottom-left, top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Physical,
    Heat,
    Electric,
    Cryo,
    Nature,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Physical,
        ElementKind::Heat,
        ElementKind::Electric,
        ElementKind::Cryo,
        ElementKind::Nature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Physical => "Physical",
            ElementKind::Heat => "Heat",
            ElementKind::Electric => "Electric",
            ElementKind::Cryo => "Cryo",
            ElementKind::Nature => "Nature",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Greatsword,
    ArtsUnit,
    Hammer,
    Sniper,
    Polearm,
}

impl WeaponType {
    pub fn name(self) -> &'static str {
        match self {
            WeaponType::Sword => "Sword",
            WeaponType::Greatsword => "Greatsword",
            WeaponType::ArtsUnit => "Arts Unit",
            WeaponType::Hammer => "Hammer",
            WeaponType::Sniper => "Sniper",
            WeaponType::Polearm => "Polearm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfectionStatus {
    Infected,
    NonInfected,
}

impl InfectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            InfectionStatus::Infected => "Infected",
            InfectionStatus::NonInfected => "Non-Infected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    Basic,
    Battle,
    Combo,
    Ultimate,
}

impl SkillKind {
    pub fn name(self) -> &'static str {
        match self {
            SkillKind::Basic => "Basic",
            SkillKind::Battle => "Battle",
            SkillKind::Combo => "Combo",
            SkillKind::Ultimate => "Ultimate",
        }
    }

    pub fn swatch(self) -> Swatch {
        match self {
            SkillKind::Basic => Swatch::rgb(0x6B, 0x72, 0x80),
            SkillKind::Battle => Swatch::rgb(0x3B, 0x82, 0xF6),
            SkillKind::Combo => Swatch::rgb(0x8B, 0x5C, 0xF6),
            SkillKind::Ultimate => Swatch::rgb(0xF5, 0x9E, 0x0B),
        }
    }
}

/// Symbolic class icon. Unknown names fail to deserialize, so a typo in the
/// catalog is caught at load time instead of falling back to a default glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassIcon {
    Sword,
    Sparkles,
    Zap,
    Shield,
    ShieldCheck,
    Heart,
}

impl ClassIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ClassIcon::Sword => "†",
            ClassIcon::Sparkles => "✧",
            ClassIcon::Zap => "ϟ",
            ClassIcon::Shield => "◇",
            ClassIcon::ShieldCheck => "◈",
            ClassIcon::Heart => "♥",
        }
    }
}

/// A `#RRGGBB` display colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid colour {0:?}, expected #RRGGBB")]
pub struct SwatchError(String);

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(text: &str) -> Result<Self, SwatchError> {
        let invalid = || SwatchError(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Swatch {
    type Error = SwatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Swatch::parse(&value)
    }
}

impl From<Swatch> for String {
    fn from(swatch: Swatch) -> Self {
        format!("#{:02X}{:02X}{:02X}", swatch.r, swatch.g, swatch.b)
    }
}

/// Attributes on a nominal 1-100 scale. Not bounds-checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub str: u16,
    pub agl: u16,
    pub intel: u16,
    pub wil: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    pub description: String,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub cooldown: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub class: CharacterClass,
    pub element: ElementKind,
    pub weapon: String,
    pub weapon_type: WeaponType,
    pub faction: String,
    pub quote: String,
    pub image: String,
    #[serde(default)]
    pub weapon_image: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub infection_status: Option<InfectionStatus>,

    pub stats: Stats,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub talents: Vec<String>,
    #[serde(default)]
    pub lore: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: Swatch,
    /// Operator names, resolved against the roster by exact match.
    pub members: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: ElementKind,
    pub color: Swatch,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: String,
    pub name: CharacterClass,
    pub icon: ClassIcon,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::S, Tier::A, Tier::B, Tier::C];

    pub fn label(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::S => "S-Tier",
            Tier::A => "A-Tier",
            Tier::B => "B-Tier",
            Tier::C => "C-Tier",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::S => "Top tier operators, essential for any team",
            Tier::A => "Excellent operators, strong additions to any squad",
            Tier::B => "Good operators, situational but effective",
            Tier::C => "Average operators, require more investment",
        }
    }

    pub fn swatch(self) -> Swatch {
        match self {
            Tier::S => Swatch::rgb(0xF5, 0x9E, 0x0B),
            Tier::A => Swatch::rgb(0x10, 0xB9, 0x81),
            Tier::B => Swatch::rgb(0x3B, 0x82, 0xF6),
            Tier::C => Swatch::rgb(0x6B, 0x72, 0x80),
        }
    }
}

/// Tier label to ordered operator names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TierList {
    #[serde(rename = "S", default)]
    pub s: Vec<String>,
    #[serde(rename = "A", default)]
    pub a: Vec<String>,
    #[serde(rename = "B", default)]
    pub b: Vec<String>,
    #[serde(rename = "C", default)]
    pub c: Vec<String>,
}

impl TierList {
    pub fn names(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::S => &self.s,
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
        }
    }

    /// Tiers from S down to C with their operator names.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[String])> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.names(tier)))
    }

    /// Highest tier the name is listed in, if any.
    pub fn tier_of(&self, name: &str) -> Option<Tier> {
        self.iter()
            .find(|(_, names)| names.iter().any(|listed| listed == name))
            .map(|(tier, _)| tier)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u32,
    pub characters: Vec<Character>,
    pub factions: Vec<Faction>,
    pub elements: Vec<Element>,
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub tier_list: TierList,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED_CATALOG)
    }

    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = ron::de::from_str(text)?;
        if catalog.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: catalog.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(catalog)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text)
    }

    /// First operator whose display name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Image path for a by-name reference, `None` when the name is unknown.
    pub fn image_of(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|c| c.image.as_str())
    }

    /// Rarity for a by-name reference. Unknown names fall back to 4★ rather
    /// than failing; `validate` reports them.
    pub fn rarity_of(&self, name: &str) -> Rarity {
        self.find_by_name(name)
            .map(|c| c.rarity)
            .unwrap_or_default()
    }

    /// Resolves a faction roster in roster order; unknown names resolve to `None`.
    pub fn members_of<'a>(
        &'a self,
        faction: &'a Faction,
    ) -> impl Iterator<Item = (&'a str, Option<&'a Character>)> + 'a {
        faction
            .members
            .iter()
            .map(move |name| (name.as_str(), self.find_by_name(name)))
    }

    pub fn element(&self, kind: ElementKind) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == kind)
    }

    pub fn class_info(&self, class: CharacterClass) -> Option<&ClassInfo> {
        self.classes.iter().find(|c| c.name == class)
    }

    /// Colour for an operator's element, white when the element table lacks it.
    pub fn element_swatch(&self, kind: ElementKind) -> Swatch {
        self.element(kind)
            .map(|e| e.color)
            .unwrap_or(Swatch::rgb(0xFF, 0xFF, 0xFF))
    }
}
