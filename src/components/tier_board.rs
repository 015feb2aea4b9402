use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{rarity_color, swatch_color, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::catalog::{Catalog, Tier};

/// Marks entries whose portrait resolves.
const IMAGE_MARKER: &str = "▣";

pub struct TierBoard;

pub struct TierBoardProps<'a> {
    pub catalog: &'a Catalog,
}

/// One line per tier, S first. Entries resolve rarity and image by name,
/// falling back to 4★ and no marker for names the roster lacks.
pub fn tier_lines(catalog: &Catalog) -> Vec<Line<'static>> {
    catalog
        .tier_list
        .iter()
        .map(|(tier, names)| {
            let accent = swatch_color(tier.swatch());
            let mut spans = vec![Span::styled(
                format!(" {} ", tier.label()),
                Style::default()
                    .fg(BG_PANEL)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            )];
            spans.push(Span::raw(" "));
            if names.is_empty() {
                spans.push(Span::styled(
                    "No operators",
                    Style::default()
                        .fg(TEXT_DIM)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", Style::default().fg(TEXT_DIM)));
                }
                if catalog.image_of(name).is_some() {
                    spans.push(Span::styled(
                        format!("{IMAGE_MARKER} "),
                        Style::default().fg(TEXT_DIM),
                    ));
                }
                spans.push(Span::styled(name.clone(), Style::default().fg(TEXT_MAIN)));
                let rarity = catalog.rarity_of(name);
                spans.push(Span::styled(
                    format!(" {rarity}"),
                    Style::default().fg(rarity_color(rarity)),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn legend_lines() -> Vec<Line<'static>> {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            Line::from(vec![
                Span::styled(
                    format!("{:<8}", tier.title()),
                    Style::default()
                        .fg(swatch_color(tier.swatch()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(tier.description(), Style::default().fg(TEXT_DIM)),
            ])
        })
        .collect()
}

impl Component<Action> for TierBoard {
    type Props<'a> = TierBoardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Min(6), Constraint::Length(6)]).split(area);

        let board = Block::default()
            .borders(Borders::ALL)
            .title("TIER LIST")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_DIM));
        let mut lines = Vec::new();
        for line in tier_lines(props.catalog) {
            lines.push(line);
            lines.push(Line::default());
        }
        frame.render_widget(
            Paragraph::new(lines).block(board).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let legend = Block::default()
            .borders(Borders::ALL)
            .title("LEGEND")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_DIM));
        frame.render_widget(Paragraph::new(legend_lines()).block(legend), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_tier_lines() {
        let catalog = Catalog::embedded().unwrap();
        let lines: Vec<String> = tier_lines(&catalog).iter().map(|l| l.to_string()).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(" S "));
        assert!(lines[0].contains("▣ Laevatain 6★"));
        assert!(lines[3].contains("No operators"));
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.tier_list.c.push("Nobody".into());
        let lines = tier_lines(&catalog);
        let c_tier = lines[3].to_string();
        assert!(c_tier.contains("Nobody 4★"));
        assert!(!c_tier.contains(IMAGE_MARKER));
    }

    #[test]
    fn test_render_legend() {
        let catalog = Catalog::embedded().unwrap();
        let mut render = RenderHarness::new(120, 24);
        let mut board = TierBoard;

        let output = render.render_to_string_plain(|frame| {
            board.render(frame, frame.area(), TierBoardProps { catalog: &catalog });
        });

        assert!(output.contains("TIER LIST"));
        assert!(output.contains("S-Tier"));
        assert!(output.contains("Average operators, require more investment"));
    }
}
