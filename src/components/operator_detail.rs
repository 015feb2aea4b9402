use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    centered_rect, BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::theme::{
    rarity_color, swatch_color, title_style, ACCENT_AMBER, ACCENT_CYAN, BG_PANEL, TEXT_DIM,
    TEXT_MAIN,
};
use super::Component;
use crate::action::Action;
use crate::catalog::{Catalog, Character};
use crate::state::{stat_bar_width, DetailTab};

const STAT_BAR_CELLS: u16 = 20;

pub struct OperatorDetail {
    modal: Modal,
}

pub struct OperatorDetailProps<'a> {
    pub catalog: &'a Catalog,
    pub character: &'a Character,
    pub tab: DetailTab,
    pub is_focused: bool,
}

impl Default for OperatorDetail {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl OperatorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal_area(area: Rect) -> Rect {
        centered_rect(76, 24, area)
    }

    /// Closing goes through `handle_event`; the modal itself never closes.
    fn behavior() -> ModalBehavior {
        ModalBehavior {
            close_on_esc: false,
            close_on_backdrop: false,
        }
    }
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(format!("{text:<10}"), Style::default().fg(TEXT_DIM))
}

fn value(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(TEXT_MAIN))
}

fn header_lines(catalog: &Catalog, character: &Character) -> Vec<Line<'static>> {
    let element_color = swatch_color(catalog.element_swatch(character.element));
    vec![
        Line::from(vec![
            Span::styled(
                character.name.clone(),
                Style::default()
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                character.rarity.star_string(),
                Style::default().fg(rarity_color(character.rarity)),
            ),
        ]),
        Line::from(vec![
            Span::styled(character.class.name(), Style::default().fg(ACCENT_CYAN)),
            Span::styled(" · ", Style::default().fg(TEXT_DIM)),
            Span::styled(character.element.name(), Style::default().fg(element_color)),
            Span::styled(" · ", Style::default().fg(TEXT_DIM)),
            Span::styled(character.weapon.clone(), Style::default().fg(TEXT_DIM)),
        ]),
        Line::from(Span::styled(
            format!("\"{}\"", character.quote),
            Style::default()
                .fg(TEXT_DIM)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

/// Body of one detail tab. Absent profile fields are left out entirely.
pub fn tab_lines(character: &Character, tab: DetailTab) -> Vec<Line<'static>> {
    match tab {
        DetailTab::Profile => profile_lines(character),
        DetailTab::Skills => skill_lines(character),
        DetailTab::Stats => stat_lines(character),
        DetailTab::Lore => lore_lines(character),
    }
}

fn profile_lines(character: &Character) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let optional = [
        ("Birthday", character.date_of_birth.clone()),
        ("Race", character.race.clone()),
        ("Gender", Some(character.gender.clone())),
        ("Height", character.height.clone()),
        (
            "Infection",
            character
                .infection_status
                .map(|status| status.label().to_string()),
        ),
    ];
    for (name, field) in optional {
        if let Some(text) = field {
            lines.push(Line::from(vec![label(name), value(text)]));
        }
    }
    lines.push(Line::from(vec![label("Faction"), value(character.faction.clone())]));
    lines.push(Line::from(vec![
        label("Weapon"),
        value(format!(
            "{} ({})",
            character.weapon,
            character.weapon_type.name()
        )),
    ]));
    lines
}

fn skill_lines(character: &Character) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for skill in &character.skills {
        let kind_color = swatch_color(skill.kind.swatch());
        let mut head = vec![
            Span::styled(
                format!("[{}] ", skill.kind.name()),
                Style::default().fg(kind_color),
            ),
            Span::styled(
                skill.name.clone(),
                Style::default()
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        let mut extras = Vec::new();
        if let Some(damage) = &skill.damage {
            extras.push(damage.clone());
        }
        if let Some(cooldown) = &skill.cooldown {
            extras.push(format!("CD {cooldown}"));
        }
        if let Some(cost) = &skill.cost {
            extras.push(cost.clone());
        }
        if !extras.is_empty() {
            head.push(Span::styled(
                format!("  {}", extras.join(" · ")),
                Style::default().fg(ACCENT_AMBER),
            ));
        }
        lines.push(Line::from(head));
        lines.push(Line::from(Span::styled(
            format!("  {}", skill.description),
            Style::default().fg(TEXT_DIM),
        )));
    }
    if !character.talents.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Talents", title_style())));
        for talent in &character.talents {
            lines.push(Line::from(value(format!("• {talent}"))));
        }
    }
    lines
}

fn stat_lines(character: &Character) -> Vec<Line<'static>> {
    let stats = character.stats;
    let mut lines = vec![Line::from(vec![
        label("HP"),
        value(format!("{:<6}", stats.hp)),
        Span::styled("ATK ", Style::default().fg(TEXT_DIM)),
        value(format!("{:<6}", stats.atk)),
        Span::styled("DEF ", Style::default().fg(TEXT_DIM)),
        value(stats.def.to_string()),
    ])];
    lines.push(Line::default());
    for (name, stat) in [
        ("STR", stats.str),
        ("AGL", stats.agl),
        ("INT", stats.intel),
        ("WIL", stats.wil),
    ] {
        let filled = stat_bar_width(stat, STAT_BAR_CELLS);
        lines.push(Line::from(vec![
            label(name),
            Span::styled(
                "█".repeat(filled as usize),
                Style::default().fg(ACCENT_CYAN),
            ),
            Span::styled(
                "░".repeat((STAT_BAR_CELLS - filled) as usize),
                Style::default().fg(Color::Rgb(51, 65, 85)),
            ),
            value(format!(" {stat}")),
        ]));
    }
    lines
}

fn lore_lines(character: &Character) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(background) = &character.background {
        lines.push(Line::from(Span::styled("Background", title_style())));
        lines.push(Line::from(value(background.clone())));
        lines.push(Line::default());
    }
    if let Some(lore) = &character.lore {
        lines.push(Line::from(Span::styled("Lore", title_style())));
        lines.push(Line::from(value(lore.clone())));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![label("Faction"), value(character.faction.clone())]));
    lines
}

impl Component<Action> for OperatorDetail {
    type Props<'a> = OperatorDetailProps<'a>;

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
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => Some(Action::InspectClose),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                    Some(Action::DetailTabNext)
                }
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                    Some(Action::DetailTabPrev)
                }
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let modal_area = Self::modal_area(area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Tabs
                Constraint::Min(1),    // Tab body
            ])
            .split(content_area);

            frame.render_widget(
                Paragraph::new(header_lines(props.catalog, props.character)),
                chunks[0],
            );

            let titles: Vec<&str> = DetailTab::ALL.iter().map(|tab| tab.title()).collect();
            let tabs = Tabs::new(titles)
                .select(props.tab.index())
                .style(Style::default().fg(TEXT_DIM))
                .highlight_style(title_style());
            frame.render_widget(tabs, chunks[1]);

            frame.render_widget(
                Paragraph::new(tab_lines(props.character, props.tab)).wrap(Wrap { trim: true }),
                chunks[2],
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    dim_factor: 0.6,
                    base: BaseStyle {
                        border: Some(BorderStyle {
                            borders: Borders::ALL,
                            style: Style::default().fg(TEXT_DIM),
                            focused_style: Some(Style::default().fg(ACCENT_CYAN)),
                        }),
                        padding: Padding::xy(1, 0),
                        bg: Some(BG_PANEL),
                        fg: None,
                    },
                },
                behavior: Self::behavior(),
                on_close: || Action::InspectClose,
                render_content: &mut render_content,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_profile_skips_absent_fields() {
        let catalog = Catalog::embedded().unwrap();
        let endmin = catalog.find_by_id("endministrator").unwrap();
        let profile = text(&tab_lines(endmin, DetailTab::Profile));
        assert!(profile.contains("Selectable"));
        assert!(!profile.contains("Infection"));
        assert!(!profile.contains("Race"));

        let laevatain = catalog.find_by_id("laevatain").unwrap();
        let profile = text(&tab_lines(laevatain, DetailTab::Profile));
        assert!(profile.contains("Infected"));
        assert!(profile.contains("Sarkaz"));
        assert!(profile.contains("Flame Greatsword (Greatsword)"));
    }

    #[test]
    fn test_skills_tab_lists_kinds_and_talents() {
        let catalog = Catalog::embedded().unwrap();
        let laevatain = catalog.find_by_id("laevatain").unwrap();
        let skills = text(&tab_lines(laevatain, DetailTab::Skills));
        assert!(skills.contains("[Ultimate] Ragnarok"));
        assert!(skills.contains("520% ATK · 100 SP"));
        assert!(skills.contains("CD 15s"));
        assert!(skills.contains("Talents"));
    }

    #[test]
    fn test_stats_tab_bars() {
        let catalog = Catalog::embedded().unwrap();
        let laevatain = catalog.find_by_id("laevatain").unwrap();
        let lines = tab_lines(laevatain, DetailTab::Stats);
        let stats = text(&lines);
        assert!(stats.contains("ATK"));
        // STR 95 -> 19 of 20 cells
        let str_line = lines[2].to_string();
        assert!(str_line.starts_with("STR"));
        assert_eq!(str_line.matches('█').count(), 19);
        assert_eq!(str_line.matches('░').count(), 1);
    }

    #[test]
    fn test_esc_closes_once() {
        let catalog = Catalog::embedded().unwrap();
        let character = catalog.find_by_id("perlica").unwrap();
        let mut detail = OperatorDetail::new();
        let behavior = OperatorDetail::behavior();
        assert!(!behavior.close_on_esc);
        assert!(!behavior.close_on_backdrop);

        let props = OperatorDetailProps {
            catalog: &catalog,
            character,
            tab: DetailTab::Lore,
            is_focused: true,
        };
        let actions: Vec<_> = detail
            .handle_event(
                &EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
                props,
            )
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::InspectClose);
    }

    #[test]
    fn test_keys() {
        let catalog = Catalog::embedded().unwrap();
        let character = catalog.find_by_id("ember").unwrap();
        let mut detail = OperatorDetail::new();

        for (code, expected) in [
            (KeyCode::Esc, Action::InspectClose),
            (KeyCode::Right, Action::DetailTabNext),
            (KeyCode::Char('h'), Action::DetailTabPrev),
        ] {
            let props = OperatorDetailProps {
                catalog: &catalog,
                character,
                tab: DetailTab::Profile,
                is_focused: true,
            };
            let actions: Vec<_> = detail
                .handle_event(
                    &EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE)),
                    props,
                )
                .into_iter()
                .collect();
            actions.assert_first(expected);
        }
    }

    #[test]
    fn test_render_modal() {
        let catalog = Catalog::embedded().unwrap();
        let character = catalog.find_by_id("last-rite").unwrap();
        let mut render = RenderHarness::new(100, 30);
        let mut detail = OperatorDetail::new();

        let output = render.render_to_string_plain(|frame| {
            let props = OperatorDetailProps {
                catalog: &catalog,
                character,
                tab: DetailTab::Skills,
                is_focused: true,
            };
            detail.render(frame, frame.area(), props);
        });

        assert!(output.contains("Last Rite"));
        assert!(output.contains("Absolute Zero"));
        assert!(output.contains("Profile"));
    }
}
