//! Reducer and component tests driven through the store

use endfield_codex::{
    action::Action,
    carousel::CarouselError,
    catalog::Rarity,
    components::{Component, OperatorGrid, OperatorGridProps},
    filter::FilterCriterion,
    reducer::reducer,
    state::{AppState, Section},
};
use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};

fn state() -> AppState {
    AppState::from_embedded().unwrap()
}

fn roster_names(state: &AppState) -> Vec<String> {
    state.roster().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_six_star_filter_keeps_catalog_order() {
    let mut store = EffectStore::new(state(), reducer);

    let result = store.dispatch(Action::FilterSet(FilterCriterion::RarityEquals(Rarity::Six)));
    assert!(result.changed);
    assert_eq!(
        roster_names(store.state()),
        vec!["Endministrator", "Laevatain", "Ember", "Pogranichnik", "Last Rite"]
    );
}

#[test]
fn test_class_filter_from_text_ignores_case() {
    let mut store = EffectStore::new(state(), reducer);
    let criterion: FilterCriterion = "caster".parse().unwrap();

    store.dispatch(Action::FilterSet(criterion));
    assert_eq!(
        roster_names(store.state()),
        vec!["Perlica", "Last Rite", "Estella"]
    );
}

#[test]
fn test_tier_s_entries_are_six_star() {
    let state = state();
    for name in &state.catalog.tier_list.s {
        assert_eq!(state.catalog.rarity_of(name), Rarity::Six, "{name}");
    }
}

#[test]
fn test_four_faction_steps_wrap_to_start() {
    let mut store = EffectStore::new(state(), reducer);

    for _ in 0..4 {
        store.dispatch(Action::FactionNext);
    }
    assert_eq!(store.state().current_faction().name, "Endfield Industries");

    store.dispatch(Action::FactionPrev);
    assert_eq!(store.state().current_faction().name, "Seš'qa");
}

#[test]
fn test_faction_jump_bounds() {
    let mut store = EffectStore::new(state(), reducer);

    store.dispatch(Action::FactionJump(2));
    assert_eq!(store.state().current_faction().name, "Order of Steel Oath");

    for index in [4, -1] {
        let result = store.dispatch(Action::FactionJump(index));
        assert!(result.changed);
        assert_eq!(store.state().factions.index(), 2);
        let expected = CarouselError::OutOfRange { index, len: 4 };
        assert_eq!(
            store.state().message,
            Some(format!("Faction: {expected}"))
        );
    }

    store.dispatch(Action::FactionNext);
    assert!(store.state().message.is_none());
}

#[test]
fn test_inspect_twice_closes() {
    let mut store = EffectStore::new(state(), reducer);

    store.dispatch(Action::InspectToggle("laevatain".into()));
    assert_eq!(
        store.state().inspected_character().map(|c| c.name.as_str()),
        Some("Laevatain")
    );

    store.dispatch(Action::InspectToggle("laevatain".into()));
    assert!(!store.state().detail_open());
}

#[test]
fn test_grid_keys_move_cursor() {
    let mut harness = TestHarness::<AppState, Action>::new(state());
    let mut grid = OperatorGrid::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("j j 6", |state, event| {
        let roster = state.roster();
        let props = OperatorGridProps {
            catalog: &state.catalog,
            roster: &roster,
            filter: &state.filter,
            cursor: state.roster_cursor,
            is_focused: true,
        };
        grid.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(3);
    actions.assert_first(Action::RosterMove(1));
    assert_emitted!(
        actions,
        Action::FilterSet(FilterCriterion::RarityEquals(Rarity::Six))
    );
    assert_not_emitted!(actions, Action::Quit);
}

#[test]
fn test_grid_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::new(state());
    let mut grid = OperatorGrid::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("j k a", |state, event| {
        let roster = state.roster();
        let props = OperatorGridProps {
            catalog: &state.catalog,
            roster: &roster,
            filter: &state.filter,
            cursor: state.roster_cursor,
            is_focused: false,
        };
        grid.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let next = Action::FactionNext;
    let section = Action::SectionSet(Section::TierList);

    assert_eq!(next.category(), Some("faction"));
    assert_eq!(section.category(), Some("section"));
    assert_eq!(Action::Quit.category(), None);

    assert!(next.is_faction());
    assert!(section.is_section());
}
