use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{rarity_color, swatch_color, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::carousel::Carousel;
use crate::catalog::{Catalog, Faction};

pub struct FactionCarousel;

pub struct FactionCarouselProps<'a> {
    pub catalog: &'a Catalog,
    pub factions: &'a Carousel<Faction>,
    pub is_focused: bool,
}

/// One dot per faction, filled at the cursor.
fn indicator(factions: &Carousel<Faction>) -> Line<'static> {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(TEXT_DIM))];
    for (i, faction) in factions.items().iter().enumerate() {
        let (dot, style) = if i == factions.index() {
            ("●", Style::default().fg(swatch_color(faction.color)))
        } else {
            ("○", Style::default().fg(TEXT_DIM))
        };
        spans.push(Span::styled(format!("{dot} "), style));
    }
    spans.push(Span::styled(
        format!("▶  {}/{}", factions.index() + 1, factions.len()),
        Style::default().fg(TEXT_DIM),
    ));
    Line::from(spans)
}

/// Roster lines in roster order. Names that do not resolve stay listed, dimmed.
fn member_lines(catalog: &Catalog, faction: &Faction) -> Vec<Line<'static>> {
    catalog
        .members_of(faction)
        .map(|(name, member)| match member {
            Some(character) => Line::from(vec![
                Span::styled(
                    format!("{:<7}", character.rarity.star_string()),
                    Style::default().fg(rarity_color(character.rarity)),
                ),
                Span::styled(
                    format!("{:<16}", character.name),
                    Style::default().fg(TEXT_MAIN),
                ),
                Span::styled(
                    format!("{} · {}", character.class, character.element),
                    Style::default().fg(TEXT_DIM),
                ),
            ]),
            None => Line::from(Span::styled(
                format!("{:<7}{name}", "?"),
                Style::default()
                    .fg(TEXT_DIM)
                    .add_modifier(Modifier::CROSSED_OUT),
            )),
        })
        .collect()
}

impl Component<Action> for FactionCarousel {
    type Props<'a> = FactionCarouselProps<'a>;

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
                KeyCode::Left | KeyCode::Char('h') => Some(Action::FactionPrev),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::FactionNext),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .map(|digit| Action::FactionJump(digit as isize - 1)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let faction = props.factions.current();
        let accent = swatch_color(faction.color);
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).split(area);

        frame.render_widget(Paragraph::new(indicator(props.factions)), chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                faction.name.to_uppercase(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(if props.is_focused { accent } else { TEXT_DIM }));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let mut lines = vec![
            Line::from(Span::styled(
                faction.description.clone(),
                Style::default().fg(TEXT_MAIN),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("MEMBERS ({})", faction.members.len()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(member_lines(props.catalog, faction));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_digit_jumps_zero_based() {
        let catalog = Catalog::embedded().unwrap();
        let factions = Carousel::new(catalog.factions.clone()).unwrap();
        let mut component = FactionCarousel;
        let props = FactionCarouselProps {
            catalog: &catalog,
            factions: &factions,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("3")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::FactionJump(2));
    }

    #[test]
    fn test_render_current_faction() {
        let catalog = Catalog::embedded().unwrap();
        let mut factions = Carousel::new(catalog.factions.clone()).unwrap();
        factions.next();
        let mut render = RenderHarness::new(80, 20);
        let mut component = FactionCarousel;

        let output = render.render_to_string_plain(|frame| {
            let props = FactionCarouselProps {
                catalog: &catalog,
                factions: &factions,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("RHODES ISLAND"));
        assert!(output.contains("2/4"));
        assert!(output.contains("Laevatain"));
    }

    #[test]
    fn test_unresolved_member_stays_listed() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.factions[3].members.push("Mystery Operator".into());
        let lines = member_lines(&catalog, &catalog.factions[3]);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].to_string().contains("Mystery Operator"));
    }
}
