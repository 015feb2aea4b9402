//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::filter::FilterCriterion;
use crate::state::{AppState, DetailTab, ExplainerRow};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            if state.issues.is_empty() {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with(Effect::ReportIssues {
                issues: state.issues.clone(),
            })
        }

        // ===== Sections =====
        Action::SectionNext => {
            state.section = state.section.next();
            DispatchResult::changed()
        }

        Action::SectionPrev => {
            state.section = state.section.prev();
            DispatchResult::changed()
        }

        Action::SectionSet(section) => {
            if state.section == section {
                return DispatchResult::unchanged();
            }
            state.section = section;
            DispatchResult::changed()
        }

        // ===== Roster filter =====
        Action::FilterSet(criterion) => set_filter(state, criterion),
        Action::FilterNext => cycle_filter(state, 1),
        Action::FilterPrev => cycle_filter(state, -1),

        Action::RosterMove(delta) => {
            let index = (state.roster_cursor as i64 + i64::from(delta)).max(0) as usize;
            if !state.set_roster_cursor(index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::RosterSelect(index) => {
            if index >= state.roster().len() || !state.set_roster_cursor(index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        // ===== Detail view =====
        Action::InspectToggle(id) => {
            state.inspected.toggle(id);
            state.detail_tab = DetailTab::default();
            DispatchResult::changed()
        }

        Action::InspectClose => {
            if !state.inspected.clear() {
                return DispatchResult::unchanged();
            }
            state.detail_tab = DetailTab::default();
            DispatchResult::changed()
        }

        Action::DetailTabNext => {
            if !state.detail_open() {
                return DispatchResult::unchanged();
            }
            state.detail_tab = state.detail_tab.next();
            DispatchResult::changed()
        }

        Action::DetailTabPrev => {
            if !state.detail_open() {
                return DispatchResult::unchanged();
            }
            state.detail_tab = state.detail_tab.prev();
            DispatchResult::changed()
        }

        // ===== Faction carousel =====
        Action::FactionNext => {
            state.factions.next();
            state.message = None;
            DispatchResult::changed()
        }

        Action::FactionPrev => {
            state.factions.previous();
            state.message = None;
            DispatchResult::changed()
        }

        Action::FactionJump(index) => {
            let before = state.factions.index();
            match state.factions.jump_to(index) {
                Ok(()) => {
                    let had_message = state.message.take().is_some();
                    if state.factions.index() == before && !had_message {
                        return DispatchResult::unchanged();
                    }
                }
                Err(error) => state.message = Some(format!("Faction: {error}")),
            }
            DispatchResult::changed()
        }

        // ===== Element / class explainer =====
        Action::ExplainerRowToggle => {
            state.explainer_row = state.explainer_row.toggle();
            DispatchResult::changed()
        }

        Action::ExplainerCursorMove(delta) => {
            let len = state.explainer_len(state.explainer_row);
            if len == 0 {
                return DispatchResult::unchanged();
            }
            let cursor = match state.explainer_row {
                ExplainerRow::Elements => &mut state.element_cursor,
                ExplainerRow::Classes => &mut state.class_cursor,
            };
            let next = (*cursor as i64 + i64::from(delta)).rem_euclid(len as i64) as usize;
            if next == *cursor {
                return DispatchResult::unchanged();
            }
            *cursor = next;
            DispatchResult::changed()
        }

        Action::ExplainerToggle => {
            let changed = match state.explainer_row {
                ExplainerRow::Elements => match state.element_under_cursor() {
                    Some(kind) => state.highlighted_element.toggle(kind),
                    None => false,
                },
                ExplainerRow::Classes => match state.class_under_cursor() {
                    Some(class) => state.highlighted_class.toggle(class),
                    None => false,
                },
            };
            if changed {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_filter(state: &mut AppState, criterion: FilterCriterion) -> DispatchResult<Effect> {
    if state.filter == criterion {
        return DispatchResult::unchanged();
    }
    state.filter = criterion;
    state.roster_cursor = 0;
    DispatchResult::changed()
}

fn cycle_filter(state: &mut AppState, step: isize) -> DispatchResult<Effect> {
    let tabs = FilterCriterion::tabs();
    let len = tabs.len() as isize;
    let next = match state.filter.tab_index() {
        Some(index) => (index as isize + step).rem_euclid(len),
        // A free-form class from the command line sits outside the tab cycle.
        None if step >= 0 => 0,
        None => len - 1,
    };
    set_filter(state, tabs[next as usize].clone())
}
