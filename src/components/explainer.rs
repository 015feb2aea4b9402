use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{
    border_style, swatch_color, ACCENT_CYAN, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN,
};
use super::Component;
use crate::action::Action;
use crate::catalog::{Catalog, Character, CharacterClass, ElementKind};
use crate::state::ExplainerRow;

pub struct Explainer;

pub struct ExplainerProps<'a> {
    pub catalog: &'a Catalog,
    pub row: ExplainerRow,
    pub element_cursor: usize,
    pub class_cursor: usize,
    pub highlighted_element: Option<ElementKind>,
    pub highlighted_class: Option<CharacterClass>,
    pub is_focused: bool,
}

fn chip(text: String, color: Color, at_cursor: bool, highlighted: bool) -> Span<'static> {
    let mut style = Style::default().fg(color);
    if highlighted {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    if at_cursor {
        style = style.bg(BG_HIGHLIGHT).add_modifier(Modifier::UNDERLINED);
        Span::styled(format!("[{text}]"), style)
    } else {
        Span::styled(format!(" {text} "), style)
    }
}

/// Names of operators matching `keep`, comma separated.
fn operator_names(catalog: &Catalog, keep: impl Fn(&Character) -> bool) -> String {
    let names: Vec<&str> = catalog
        .characters
        .iter()
        .filter(|c| keep(c))
        .map(|c| c.name.as_str())
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn element_lines(props: &ExplainerProps<'_>) -> Vec<Line<'static>> {
    let at_row = props.is_focused && props.row == ExplainerRow::Elements;
    let chips: Vec<Span> = props
        .catalog
        .elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            chip(
                element.name.to_string(),
                swatch_color(element.color),
                at_row && i == props.element_cursor,
                props.highlighted_element == Some(element.name),
            )
        })
        .collect();

    let mut lines = vec![Line::from(chips), Line::default()];
    match props
        .highlighted_element
        .and_then(|kind| props.catalog.element(kind))
    {
        Some(element) => {
            lines.push(Line::from(Span::styled(
                element.description.clone(),
                Style::default().fg(TEXT_MAIN),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "Operators: {}",
                    operator_names(props.catalog, |c| c.element == element.name)
                ),
                Style::default().fg(TEXT_DIM),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Select an element to see its description.",
            Style::default().fg(TEXT_DIM),
        ))),
    }
    lines
}

fn class_lines(props: &ExplainerProps<'_>) -> Vec<Line<'static>> {
    let at_row = props.is_focused && props.row == ExplainerRow::Classes;
    let chips: Vec<Span> = props
        .catalog
        .classes
        .iter()
        .enumerate()
        .map(|(i, class)| {
            chip(
                format!("{} {}", class.icon.glyph(), class.name),
                ACCENT_CYAN,
                at_row && i == props.class_cursor,
                props.highlighted_class == Some(class.name),
            )
        })
        .collect();

    let mut lines = vec![Line::from(chips), Line::default()];
    match props
        .highlighted_class
        .and_then(|class| props.catalog.class_info(class))
    {
        Some(info) => {
            lines.push(Line::from(Span::styled(
                info.description.clone(),
                Style::default().fg(TEXT_MAIN),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "Operators: {}",
                    operator_names(props.catalog, |c| c.class == info.name)
                ),
                Style::default().fg(TEXT_DIM),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Select a class to see its role.",
            Style::default().fg(TEXT_DIM),
        ))),
    }
    lines
}

impl Component<Action> for Explainer {
    type Props<'a> = ExplainerProps<'a>;

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
                KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                    Some(Action::ExplainerRowToggle)
                }
                KeyCode::Left | KeyCode::Char('h') => Some(Action::ExplainerCursorMove(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::ExplainerCursorMove(1)),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ExplainerToggle),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        for (chunk, row, title, lines) in [
            (chunks[0], ExplainerRow::Elements, "ELEMENTS", element_lines(&props)),
            (chunks[1], ExplainerRow::Classes, "CLASSES", class_lines(&props)),
        ] {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
                .border_style(border_style(props.is_focused && props.row == row));
            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                chunk,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn props(catalog: &Catalog) -> ExplainerProps<'_> {
        ExplainerProps {
            catalog,
            row: ExplainerRow::Elements,
            element_cursor: 0,
            class_cursor: 0,
            highlighted_element: None,
            highlighted_class: None,
            is_focused: true,
        }
    }

    #[test]
    fn test_keys() {
        let catalog = Catalog::embedded().unwrap();
        let mut explainer = Explainer;

        let actions: Vec<_> = explainer
            .handle_event(&EventKind::Key(key("l")), props(&catalog))
            .into_iter()
            .collect();
        actions.assert_first(Action::ExplainerCursorMove(1));

        let actions: Vec<_> = explainer
            .handle_event(&EventKind::Key(key("j")), props(&catalog))
            .into_iter()
            .collect();
        actions.assert_first(Action::ExplainerRowToggle);
    }

    #[test]
    fn test_render_highlighted_element() {
        let catalog = Catalog::embedded().unwrap();
        let mut render = RenderHarness::new(100, 16);
        let mut explainer = Explainer;

        let output = render.render_to_string_plain(|frame| {
            let props = ExplainerProps {
                highlighted_element: Some(ElementKind::Cryo),
                ..props(&catalog)
            };
            explainer.render(frame, frame.area(), props);
        });

        assert!(output.contains("[Physical]"));
        assert!(output.contains("Last Rite, Estella, Snowshine"));
        assert!(output.contains("Select a class to see its role."));
    }
}
