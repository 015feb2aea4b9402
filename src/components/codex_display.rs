use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph, Tabs},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::theme::{title_style, ACCENT_AMBER, BG_BASE, ERROR_RED, TEXT_DIM};
use super::{
    Component, Explainer, ExplainerProps, FactionCarousel, FactionCarouselProps, HeroBanner,
    HeroBannerProps, OperatorGrid, OperatorGridProps, TierBoard, TierBoardProps,
};
use crate::action::Action;
use crate::state::{AppState, Section};

const DISCLAIMER: &str =
    "Fan-made database. Not affiliated with Hypergryph or Griffin Games.";

pub struct CodexDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Whole-screen layout: banner, section tabs, the active section, footer.
#[derive(Default)]
pub struct CodexDisplay {
    grid: OperatorGrid,
}

impl CodexDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn hints(section: Section) -> Vec<StatusBarHint<'static>> {
        let mut hints = vec![StatusBarHint::new("Tab", "section")];
        match section {
            Section::Operators => hints.extend([
                StatusBarHint::new("↑↓", "move"),
                StatusBarHint::new("[ ]", "filter"),
                StatusBarHint::new("Enter", "inspect"),
            ]),
            Section::Factions => hints.extend([
                StatusBarHint::new("←→", "cycle"),
                StatusBarHint::new("1-9", "jump"),
            ]),
            Section::Elements => hints.extend([
                StatusBarHint::new("↑↓", "row"),
                StatusBarHint::new("←→", "move"),
                StatusBarHint::new("Enter", "highlight"),
            ]),
            Section::TierList => {}
        }
        hints.push(StatusBarHint::new("q", "quit"));
        hints
    }

    /// Error message first, then the validation issue count.
    fn status_span(state: &AppState) -> Option<Span<'static>> {
        if let Some(message) = &state.message {
            return Some(Span::styled(message.clone(), Style::default().fg(ERROR_RED)));
        }
        match state.issues.len() {
            0 => None,
            1 => Some(Span::styled("1 catalog issue", Style::default().fg(ACCENT_AMBER))),
            n => Some(Span::styled(
                format!("{n} catalog issues"),
                Style::default().fg(ACCENT_AMBER),
            )),
        }
    }

    fn render_section(&mut self, frame: &mut Frame, area: Rect, props: &CodexDisplayProps<'_>) {
        let state = props.state;
        match state.section {
            Section::Operators => {
                let roster = state.roster();
                self.grid.render(
                    frame,
                    area,
                    OperatorGridProps {
                        catalog: &state.catalog,
                        roster: &roster,
                        filter: &state.filter,
                        cursor: state.roster_cursor,
                        is_focused: props.is_focused,
                    },
                );
            }
            Section::Factions => FactionCarousel.render(
                frame,
                area,
                FactionCarouselProps {
                    catalog: &state.catalog,
                    factions: &state.factions,
                    is_focused: props.is_focused,
                },
            ),
            Section::Elements => Explainer.render(
                frame,
                area,
                ExplainerProps {
                    catalog: &state.catalog,
                    row: state.explainer_row,
                    element_cursor: state.element_cursor,
                    class_cursor: state.class_cursor,
                    highlighted_element: state.highlighted_element.current().copied(),
                    highlighted_class: state.highlighted_class.current().copied(),
                    is_focused: props.is_focused,
                },
            ),
            Section::TierList => TierBoard.render(
                frame,
                area,
                TierBoardProps {
                    catalog: &state.catalog,
                },
            ),
        }
    }
}

impl Component<Action> for CodexDisplay {
    type Props<'a> = CodexDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Tab => return vec![Action::SectionNext],
            KeyCode::BackTab => return vec![Action::SectionPrev],
            _ => {}
        }

        let state = props.state;
        match state.section {
            Section::Operators => {
                let roster = state.roster();
                self.grid
                    .handle_event(
                        event,
                        OperatorGridProps {
                            catalog: &state.catalog,
                            roster: &roster,
                            filter: &state.filter,
                            cursor: state.roster_cursor,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .collect()
            }
            Section::Factions => FactionCarousel
                .handle_event(
                    event,
                    FactionCarouselProps {
                        catalog: &state.catalog,
                        factions: &state.factions,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Section::Elements => Explainer
                .handle_event(
                    event,
                    ExplainerProps {
                        catalog: &state.catalog,
                        row: state.explainer_row,
                        element_cursor: state.element_cursor,
                        class_cursor: state.class_cursor,
                        highlighted_element: state.highlighted_element.current().copied(),
                        highlighted_class: state.highlighted_class.current().copied(),
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Section::TierList => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);
        let chunks = Layout::vertical([
            Constraint::Length(3), // Hero banner
            Constraint::Length(1), // Section tabs
            Constraint::Min(8),    // Active section
            Constraint::Length(1), // Disclaimer
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        HeroBanner.render(
            frame,
            chunks[0],
            HeroBannerProps {
                counts: props.state.hero_counts(),
            },
        );

        let titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        let tabs = Tabs::new(titles)
            .select(props.state.section.index())
            .style(Style::default().fg(TEXT_DIM))
            .highlight_style(title_style().add_modifier(Modifier::UNDERLINED));
        frame.render_widget(tabs, chunks[1]);

        self.render_section(frame, chunks[2], &props);

        frame.render_widget(
            Paragraph::new(DISCLAIMER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEXT_DIM)),
            chunks[3],
        );

        let hints = Self::hints(props.state.section);
        let status: Vec<StatusBarItem> = Self::status_span(props.state)
            .map(StatusBarItem::span)
            .into_iter()
            .collect();
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::items(&status),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn state() -> AppState {
        AppState::from_embedded().unwrap()
    }

    fn handle(state: &AppState, event: EventKind) -> Vec<Action> {
        let mut display = CodexDisplay::new();
        display
            .handle_event(
                &event,
                CodexDisplayProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_global_keys() {
        let state = state();
        handle(&state, EventKind::Key(key("q"))).assert_first(Action::Quit);
        handle(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
        )
        .assert_first(Action::SectionNext);
    }

    #[test]
    fn test_keys_route_to_active_section() {
        let mut state = state();
        handle(&state, EventKind::Key(key("l"))).assert_empty();

        state.section = Section::Factions;
        handle(&state, EventKind::Key(key("l"))).assert_first(Action::FactionNext);

        state.section = Section::Elements;
        handle(&state, EventKind::Key(key("l"))).assert_first(Action::ExplainerCursorMove(1));

        state.section = Section::TierList;
        handle(&state, EventKind::Key(key("l"))).assert_empty();
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = state();
        let mut display = CodexDisplay::new();
        let actions: Vec<_> = display
            .handle_event(
                &EventKind::Key(key("q")),
                CodexDisplayProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_status_prefers_message() {
        let mut state = state();
        assert!(CodexDisplay::status_span(&state).is_none());

        state.issues.push(crate::validate::CatalogIssue::DuplicateId { id: "x".into() });
        assert_eq!(
            CodexDisplay::status_span(&state).map(|s| s.content.into_owned()),
            Some("1 catalog issue".to_string())
        );

        state.message = Some("Faction: index 7 out of range for 4 items".into());
        assert_eq!(
            CodexDisplay::status_span(&state).map(|s| s.content.into_owned()),
            Some("Faction: index 7 out of range for 4 items".to_string())
        );
    }

    #[test]
    fn test_render_screen() {
        let state = state();
        let mut render = RenderHarness::new(100, 30);
        let mut display = CodexDisplay::new();

        let output = render.render_to_string_plain(|frame| {
            display.render(
                frame,
                frame.area(),
                CodexDisplayProps {
                    state: &state,
                    is_focused: true,
                },
            );
        });

        assert!(output.contains("ENDFIELD CODEX"));
        assert!(output.contains("Tier List"));
        assert!(output.contains("OPERATORS (16)"));
        assert!(output.contains("Fan-made database"));
    }
}
