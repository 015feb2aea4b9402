use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::theme::{
    border_style, rarity_color, swatch_color, title_style, BG_PANEL, TEXT_DIM, TEXT_MAIN,
};
use super::Component;
use crate::action::Action;
use crate::catalog::{Catalog, Character, Rarity};
use crate::filter::FilterCriterion;

pub struct OperatorGrid {
    list: SelectList,
}

pub struct OperatorGridProps<'a> {
    pub catalog: &'a Catalog,
    pub roster: &'a [&'a Character],
    pub filter: &'a FilterCriterion,
    pub cursor: usize,
    pub is_focused: bool,
}

impl Default for OperatorGrid {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl OperatorGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn roster_items(catalog: &Catalog, roster: &[&Character]) -> Vec<Line<'static>> {
        roster
            .iter()
            .map(|character| {
                let class_glyph = catalog
                    .class_info(character.class)
                    .map(|info| info.icon.glyph())
                    .unwrap_or(" ");
                Line::from(vec![
                    Span::styled(
                        format!("{:<7}", character.rarity.star_string()),
                        Style::default().fg(rarity_color(character.rarity)),
                    ),
                    Span::styled(
                        format!("{:<16}", character.name),
                        Style::default()
                            .fg(TEXT_MAIN)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{class_glyph} {:<10}", character.class.name()),
                        Style::default().fg(TEXT_DIM),
                    ),
                    Span::styled(
                        format!("{:<9}", character.element.name()),
                        Style::default().fg(swatch_color(catalog.element_swatch(character.element))),
                    ),
                    Span::styled(character.weapon_type.name(), Style::default().fg(TEXT_DIM)),
                ])
            })
            .collect()
    }

    fn filter_tabs(filter: &FilterCriterion) -> (Vec<String>, usize) {
        let mut labels: Vec<String> = FilterCriterion::tabs().iter().map(|t| t.label()).collect();
        let selected = match filter.tab_index() {
            Some(index) => index,
            None => {
                labels.push(filter.label());
                labels.len() - 1
            }
        };
        (labels, selected)
    }
}

impl Component<Action> for OperatorGrid {
    type Props<'a> = OperatorGridProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::RosterMove(-1)),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::RosterMove(1)),
                KeyCode::PageUp => Some(Action::RosterMove(-10)),
                KeyCode::PageDown => Some(Action::RosterMove(10)),
                KeyCode::Home => Some(Action::RosterSelect(0)),
                KeyCode::End => Some(Action::RosterSelect(props.roster.len().saturating_sub(1))),
                KeyCode::Char('[') => Some(Action::FilterPrev),
                KeyCode::Char(']') => Some(Action::FilterNext),
                KeyCode::Char('a') => Some(Action::FilterSet(FilterCriterion::All)),
                KeyCode::Char(c @ '4'..='6') => c
                    .to_digit(10)
                    .and_then(|stars| Rarity::from_stars(stars as u8))
                    .map(|rarity| Action::FilterSet(FilterCriterion::RarityEquals(rarity))),
                KeyCode::Enter => props
                    .roster
                    .get(props.cursor)
                    .map(|character| Action::InspectToggle(character.id.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

        let (labels, selected) = Self::filter_tabs(props.filter);
        let tabs = Tabs::new(labels)
            .select(selected)
            .style(Style::default().fg(TEXT_DIM))
            .highlight_style(title_style());
        frame.render_widget(tabs, chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("OPERATORS ({})", props.roster.len()))
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(border_style(props.is_focused));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        if props.roster.is_empty() {
            frame.render_widget(
                Paragraph::new("No operators match this filter.").style(Style::default().fg(TEXT_DIM)),
                inner,
            );
            return;
        }

        let items = Self::roster_items(props.catalog, props.roster);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor.min(items.len() - 1),
            is_focused: props.is_focused,
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::RosterSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}
