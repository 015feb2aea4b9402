//! Application state - single source of truth

use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::carousel::Carousel;
use crate::catalog::{Catalog, CatalogError, Character, CharacterClass, ElementKind, Faction};
use crate::filter::{filter, FilterCriterion};
use crate::selection::Selection;
use crate::validate::{validate, CatalogIssue};

/// Top-level sections in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Operators,
    Factions,
    Elements,
    TierList,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Operators,
        Section::Factions,
        Section::Elements,
        Section::TierList,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Operators => "Operators",
            Section::Factions => "Factions",
            Section::Elements => "Elements & Classes",
            Section::TierList => "Tier List",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Operators => 0,
            Section::Factions => 1,
            Section::Elements => 2,
            Section::TierList => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Tabs of the operator detail view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    #[default]
    Profile,
    Skills,
    Stats,
    Lore,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Profile,
        DetailTab::Skills,
        DetailTab::Stats,
        DetailTab::Lore,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailTab::Profile => "Profile",
            DetailTab::Skills => "Skills",
            DetailTab::Stats => "Stats",
            DetailTab::Lore => "Lore",
        }
    }

    pub fn index(self) -> usize {
        match self {
            DetailTab::Profile => 0,
            DetailTab::Skills => 1,
            DetailTab::Stats => 2,
            DetailTab::Lore => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which row of the explainer the cursor is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplainerRow {
    #[default]
    Elements,
    Classes,
}

impl ExplainerRow {
    pub fn toggle(self) -> Self {
        match self {
            ExplainerRow::Elements => ExplainerRow::Classes,
            ExplainerRow::Classes => ExplainerRow::Elements,
        }
    }
}

/// Headline numbers for the hero banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCounts {
    pub operators: usize,
    pub factions: usize,
    pub elements: usize,
    pub classes: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub catalog: Catalog,
    pub section: Section,

    pub filter: FilterCriterion,
    /// Index into the filtered roster.
    pub roster_cursor: usize,
    /// Operator id shown in the detail view.
    pub inspected: Selection<String>,
    pub detail_tab: DetailTab,

    pub factions: Carousel<Faction>,

    pub explainer_row: ExplainerRow,
    pub element_cursor: usize,
    pub class_cursor: usize,
    pub highlighted_element: Selection<ElementKind>,
    pub highlighted_class: Selection<CharacterClass>,

    pub issues: Vec<CatalogIssue>,
    pub message: Option<String>,
}

impl AppState {
    /// Builds the initial state and runs the validation pass. Fails only when
    /// the catalog has no factions to put in the carousel.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let factions = Carousel::new(catalog.factions.clone())?;
        let issues = validate(&catalog);
        Ok(Self {
            terminal_size: (80, 24),
            catalog,
            section: Section::default(),
            filter: FilterCriterion::All,
            roster_cursor: 0,
            inspected: Selection::new(),
            detail_tab: DetailTab::default(),
            factions,
            explainer_row: ExplainerRow::default(),
            element_cursor: 0,
            class_cursor: 0,
            highlighted_element: Selection::new(),
            highlighted_class: Selection::new(),
            issues,
            message: None,
        })
    }

    pub fn from_embedded() -> Result<Self, CatalogError> {
        Self::new(Catalog::embedded()?)
    }

    pub fn with_filter(mut self, filter: FilterCriterion) -> Self {
        self.filter = filter;
        self.roster_cursor = 0;
        self
    }

    /// Operators passing the current filter, in catalog order.
    pub fn roster(&self) -> Vec<&Character> {
        filter(&self.catalog.characters, &self.filter)
    }

    pub fn cursor_character(&self) -> Option<&Character> {
        self.roster().get(self.roster_cursor).copied()
    }

    /// Clamps the roster cursor into the filtered roster. Returns true if it moved.
    pub fn set_roster_cursor(&mut self, index: usize) -> bool {
        let len = self.roster().len();
        let bounded = if len == 0 { 0 } else { index.min(len - 1) };
        if bounded != self.roster_cursor {
            self.roster_cursor = bounded;
            return true;
        }
        false
    }

    /// The operator in the detail view. An id missing from the catalog reads as closed.
    pub fn inspected_character(&self) -> Option<&Character> {
        self.inspected
            .current()
            .and_then(|id| self.catalog.find_by_id(id))
    }

    pub fn detail_open(&self) -> bool {
        self.inspected_character().is_some()
    }

    pub fn current_faction(&self) -> &Faction {
        self.factions.current()
    }

    pub fn hero_counts(&self) -> HeroCounts {
        HeroCounts {
            operators: self.catalog.characters.len(),
            factions: self.catalog.factions.len(),
            elements: self.catalog.elements.len(),
            classes: self.catalog.classes.len(),
        }
    }

    pub fn explainer_len(&self, row: ExplainerRow) -> usize {
        match row {
            ExplainerRow::Elements => self.catalog.elements.len(),
            ExplainerRow::Classes => self.catalog.classes.len(),
        }
    }

    pub fn element_under_cursor(&self) -> Option<ElementKind> {
        self.catalog
            .elements
            .get(self.element_cursor)
            .map(|element| element.name)
    }

    pub fn class_under_cursor(&self) -> Option<CharacterClass> {
        self.catalog
            .classes
            .get(self.class_cursor)
            .map(|class| class.name)
    }
}

/// Filled cells for a stat bar `width` cells wide. Values clamp to 0-100.
pub fn stat_bar_width(value: u16, width: u16) -> u16 {
    let clamped = u32::from(value.min(100));
    (clamped * u32::from(width) / 100) as u16
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Catalog")
                .entry("version", ron_string(&self.catalog.version))
                .entry("operators", ron_string(&self.catalog.characters.len()))
                .entry("factions", ron_string(&self.catalog.factions.len()))
                .entry("issues", ron_string(&self.issues.len())),
            DebugSection::new("Roster")
                .entry("section", ron_string(&self.section))
                .entry("filter", ron_string(&self.filter))
                .entry("filtered", ron_string(&self.roster().len()))
                .entry("cursor", ron_string(&self.roster_cursor))
                .entry("inspected", ron_string(&self.inspected.current()))
                .entry("detail_tab", ron_string(&self.detail_tab)),
            DebugSection::new("Explainer")
                .entry("faction_index", ron_string(&self.factions.index()))
                .entry("row", ron_string(&self.explainer_row))
                .entry("element", ron_string(&self.highlighted_element.current()))
                .entry("class", ron_string(&self.highlighted_class.current())),
            DebugSection::new("Status").entry("message", ron_string(&self.message)),
        ]
    }
}
