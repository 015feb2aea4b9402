//! Render tests using RenderHarness

use endfield_codex::{
    components::{
        CodexDisplay, CodexDisplayProps, Component, OperatorDetail, OperatorDetailProps,
    },
    state::{AppState, DetailTab, Section},
};
use tui_dispatch::testing::*;

fn render_display(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut display = CodexDisplay::new();
    render.render_to_string_plain(|frame| {
        let props = CodexDisplayProps {
            state,
            is_focused: true,
        };
        display.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_each_section() {
    let mut state = AppState::from_embedded().unwrap();

    let cases = [
        (Section::Operators, "Endministrator"),
        (Section::Factions, "ENDFIELD INDUSTRIES"),
        (Section::Elements, "Select an element to see its description."),
        (Section::TierList, "TIER LIST"),
    ];
    for (section, expected) in cases {
        state.section = section;
        let output = render_display(&state, 110, 34);
        assert!(
            output.contains(expected),
            "{section:?} should show {expected:?}:\n{output}"
        );
    }
}

#[test]
fn test_render_faction_error_in_status_bar() {
    let mut state = AppState::from_embedded().unwrap();
    state.message = Some("Faction: bad jump".into());

    let output = render_display(&state, 110, 34);
    assert!(output.contains("Faction: bad jump"), "{output}");
}

#[test]
fn test_render_detail_stats_tab() {
    let state = AppState::from_embedded().unwrap();
    let character = state.catalog.find_by_id("ember").unwrap();
    let mut render = RenderHarness::new(100, 30);
    let mut detail = OperatorDetail::new();

    let output = render.render_to_string_plain(|frame| {
        let props = OperatorDetailProps {
            catalog: &state.catalog,
            character,
            tab: DetailTab::Stats,
            is_focused: true,
        };
        detail.render(frame, frame.area(), props);
    });

    assert!(output.contains("Ember"), "{output}");
    assert!(output.contains("STR"), "{output}");
    assert!(output.contains('█'), "{output}");
}
