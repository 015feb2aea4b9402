use serde::{Deserialize, Serialize};

use crate::filter::FilterCriterion;
use crate::state::Section;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    Init,

    SectionNext,
    SectionPrev,
    SectionSet(Section),

    FilterSet(FilterCriterion),
    FilterNext,
    FilterPrev,

    RosterMove(i16),
    RosterSelect(usize),

    /// Open the detail view for an operator id, or close it if already open.
    InspectToggle(String),
    InspectClose,
    DetailTabNext,
    DetailTabPrev,

    FactionNext,
    FactionPrev,
    FactionJump(isize),

    ExplainerRowToggle,
    ExplainerCursorMove(i16),
    /// Toggle the highlight of the entry under the explainer cursor.
    ExplainerToggle,

    UiTerminalResize(u16, u16),
    Quit,
}
