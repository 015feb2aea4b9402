use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{title_style, ACCENT_AMBER, BG_BASE, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::state::HeroCounts;

pub struct HeroBanner;

pub struct HeroBannerProps {
    pub counts: HeroCounts,
}

impl Component<Action> for HeroBanner {
    type Props<'a> = HeroBannerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let counts = props.counts;
        let stat = |value: usize, label: &'static str| {
            vec![
                Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(ACCENT_AMBER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {label}"), Style::default().fg(TEXT_DIM)),
            ]
        };

        let mut stats = Vec::new();
        for (i, (value, label)) in [
            (counts.operators, "Operators"),
            (counts.factions, "Factions"),
            (counts.elements, "Elements"),
            (counts.classes, "Classes"),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                stats.push(Span::styled("  ·  ", Style::default().fg(TEXT_DIM)));
            }
            stats.extend(stat(value, label));
        }

        let lines = vec![
            Line::from(Span::styled("ENDFIELD CODEX", title_style())),
            Line::from(Span::styled(
                "Operator database for Arknights: Endfield",
                Style::default().fg(TEXT_MAIN),
            )),
            Line::from(stats),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(BG_BASE)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_counts() {
        let mut render = RenderHarness::new(80, 3);
        let mut banner = HeroBanner;
        let counts = HeroCounts {
            operators: 16,
            factions: 4,
            elements: 5,
            classes: 6,
        };

        let output = render.render_to_string_plain(|frame| {
            banner.render(frame, frame.area(), HeroBannerProps { counts });
        });

        assert!(output.contains("ENDFIELD CODEX"));
        assert!(output.contains("16 Operators"));
        assert!(output.contains("6 Classes"));
    }
}
