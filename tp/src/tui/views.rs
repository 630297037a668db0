//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from AppState but never modifies it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::trace;

use crate::domain::{BudgetTier, GeneratedPlan};
use crate::planner::Tab;

use super::state::{AppState, EditBuffer, FormField, InteractionMode};

mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const ACCENT: Color = Color::Rgb(100, 149, 237); // Cornflower blue
    pub const INTEREST: Color = Color::Rgb(186, 85, 211); // Medium orchid
    pub const TIME: Color = Color::Rgb(100, 149, 237);
    pub const RATING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const PRICE: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
}

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(tab = ?state.active_tab(), "render: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match (state.active_tab(), state.planner.plan()) {
        (Tab::Plan, _) => render_plan_form(state, frame, chunks[1]),
        (Tab::Itinerary, Some(plan)) => render_itinerary(plan, state.itinerary_scroll, frame, chunks[1]),
        (Tab::Recommendations, Some(plan)) => {
            render_recommendations(plan, state.recommendations_scroll, frame, chunks[1])
        }
        (tab, None) => render_empty_state(tab, frame, chunks[1]),
    }

    render_footer(state, frame, chunks[2]);

    match &state.interaction_mode {
        InteractionMode::Help => render_help_overlay(frame, frame.area()),
        InteractionMode::Notice(message) => render_notice(message, frame, frame.area()),
        _ => {}
    }
}

/// Render header with title and tabs
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            "✈ AI Travel Planner",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
    ];

    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::DIM)));
        }
        let style = if tab == state.active_tab() {
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, tab.title()), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the trip parameter form
fn render_plan_form(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_plan_form: called");
    let focused = state.focused_field();
    let editing = match &state.interaction_mode {
        InteractionMode::Editing(buffer) => Some(buffer),
        _ => None,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Plan Your Perfect Trip",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick your preferences and let the planner build an itinerary",
            Style::default().fg(colors::DIM),
        )),
        Line::from(""),
    ];

    for field in FormField::all() {
        if field == FormField::Interest(crate::domain::Interest::Culture) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Interests",
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        if field == FormField::Generate {
            lines.push(Line::from(""));
        }

        let is_focused = field == focused;
        let mut line = match field {
            FormField::Interest(interest) => {
                let selected = state.planner.draft().has_interest(interest);
                let (mark, style) = if selected {
                    ("[x]", Style::default().fg(colors::INTEREST))
                } else {
                    ("[ ]", Style::default())
                };
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{} {}", mark, interest.label()), style),
                ])
            }
            FormField::Budget => budget_line(state.planner.draft().budget()),
            FormField::Generate => generate_line(state),
            _ => match editing {
                Some(buffer) if buffer.field == field => edit_line(buffer),
                _ => value_line(field, &state.field_value(field)),
            },
        };

        if is_focused {
            line = line.style(Style::default().bg(colors::SELECTED_BG));
            line.spans.insert(0, Span::styled("▸", Style::default().fg(colors::ACCENT)));
        } else {
            line.spans.insert(0, Span::raw(" "));
        }
        lines.push(line);

        if let Some(buffer) = editing.filter(|b| b.field == field) {
            let suggestions = buffer.suggestions();
            if !suggestions.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("                   Tab: {}", suggestions.join(" · ")),
                    Style::default().fg(colors::DIM),
                )));
            }
        }
    }

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Plan Trip "))
        .wrap(Wrap { trim: false });
    frame.render_widget(form, area);
}

fn value_line(field: FormField, value: &str) -> Line<'static> {
    let value_span = if value.is_empty() {
        let placeholder = match field {
            FormField::Destination => "Where do you want to go?",
            _ => "YYYY-MM-DD",
        };
        Span::styled(placeholder.to_string(), Style::default().fg(colors::DIM))
    } else if field == FormField::Travelers {
        Span::raw(format!("‹ {} ›", value))
    } else {
        Span::raw(value.to_string())
    };
    Line::from(vec![
        Span::styled(
            format!(" {:<16}", field.label()),
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ),
        value_span,
    ])
}

fn edit_line(buffer: &EditBuffer) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<16}", buffer.field.label()),
            Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
        ),
        Span::raw(buffer.text.clone()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])
}

fn budget_line(selected: BudgetTier) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {:<16}", FormField::Budget.label()),
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    )];
    for tier in BudgetTier::ALL {
        let text = format!(" {} {} ", tier.label(), tier.range());
        let style = if tier == selected {
            Style::default()
                .fg(Color::Black)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn generate_line(state: &AppState) -> Line<'static> {
    match state.generation_started {
        Some(started) if state.planner.is_generating() => {
            let frame_idx = (started.elapsed().as_millis() / 80) as usize % SPINNER.len();
            Line::from(vec![
                Span::raw("   "),
                Span::styled(SPINNER[frame_idx], Style::default().fg(colors::ACCENT)),
                Span::styled(
                    format!(" {} your perfect trip...", state.loading_word),
                    Style::default().fg(colors::DIM).add_modifier(Modifier::ITALIC),
                ),
            ])
        }
        _ => Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", FormField::Generate.label()),
                Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

/// Lines for the itinerary panel
fn itinerary_lines(plan: &GeneratedPlan) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(plan.headline(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("Estimated budget: ${} total", plan.total_budget()),
            Style::default().fg(colors::DIM),
        )),
    ];

    for day in &plan.itinerary {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Day {}: {}", day.day, day.title),
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )));
        for activity in &day.activities {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(activity.kind.glyph()),
                Span::raw("  "),
                Span::styled(
                    format!("{:>8}", activity.time),
                    Style::default().fg(colors::TIME).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(activity.description.clone()),
            ]));
        }
    }
    lines
}

fn render_itinerary(plan: &GeneratedPlan, scroll: u16, frame: &mut Frame, area: Rect) {
    trace!(destination = %plan.destination, "render_itinerary: called");
    let panel = Paragraph::new(itinerary_lines(plan))
        .block(Block::default().borders(Borders::ALL).title(" Itinerary "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(panel, area);
}

fn rating_span(rating: f64) -> Span<'static> {
    Span::styled(format!("★ {:.1}", rating), Style::default().fg(colors::RATING))
}

fn render_recommendations(plan: &GeneratedPlan, scroll: u16, frame: &mut Frame, area: Rect) {
    trace!("render_recommendations: called");
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut hotels = Vec::new();
    for hotel in &plan.recommendations.hotels {
        hotels.push(Line::from(vec![
            Span::styled(hotel.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            rating_span(hotel.rating),
        ]));
        hotels.push(Line::from(Span::styled(
            hotel.nightly_price.clone(),
            Style::default().fg(colors::PRICE),
        )));
        hotels.push(Line::from(Span::styled(
            hotel.features.join(" · "),
            Style::default().fg(colors::DIM),
        )));
        hotels.push(Line::from(""));
    }

    let mut restaurants = Vec::new();
    for restaurant in &plan.recommendations.restaurants {
        restaurants.push(Line::from(vec![
            Span::styled(restaurant.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            rating_span(restaurant.rating),
        ]));
        restaurants.push(Line::from(Span::styled(
            restaurant.cuisine.clone(),
            Style::default().fg(colors::DIM),
        )));
        restaurants.push(Line::from(Span::styled(
            restaurant.price_tier.clone(),
            Style::default().fg(colors::PRICE),
        )));
        restaurants.push(Line::from(""));
    }

    let hotels_panel = Paragraph::new(hotels)
        .block(Block::default().borders(Borders::ALL).title(" Hotels "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    let restaurants_panel = Paragraph::new(restaurants)
        .block(Block::default().borders(Borders::ALL).title(" Restaurants "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(hotels_panel, columns[0]);
    frame.render_widget(restaurants_panel, columns[1]);
}

/// Render the placeholder for a panel with nothing to show
fn render_empty_state(tab: Tab, frame: &mut Frame, area: Rect) {
    trace!(?tab, "render_empty_state: called");
    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", tab.title()));
    let inner = block.inner(area).inner(Margin {
        horizontal: 2,
        vertical: 2,
    });
    frame.render_widget(block, area);

    let Some((heading, hint)) = tab.empty_state() else {
        return;
    };
    let empty = Paragraph::new(vec![
        Line::from(Span::styled(heading, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(colors::DIM))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(empty, inner);
}

/// Render footer with keybinds, the edit hint, or the last error
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_footer: called");
    let content = if let Some(ref error) = state.error_message {
        Line::from(Span::styled(format!(" Error: {}", error), Style::default().fg(colors::ERROR)))
    } else {
        let keybinds: Vec<(&str, &str)> = match (&state.interaction_mode, state.active_tab()) {
            (InteractionMode::Editing(buffer), _) if buffer.field == FormField::Destination => {
                vec![("[Enter]", "Save"), ("[Tab]", "Complete"), ("[Esc]", "Cancel")]
            }
            (InteractionMode::Editing(_), _) => vec![("[Enter]", "Save"), ("[Esc]", "Cancel")],
            (_, Tab::Plan) => vec![
                ("[↑↓]", "Field"),
                ("[Enter]", "Edit"),
                ("[←→]", "Change"),
                ("[Space]", "Toggle"),
                ("[g]", "Generate"),
            ],
            (_, _) => vec![("[↑↓]", "Scroll")],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in keybinds {
            spans.push(Span::styled(
                key,
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {} ", action)));
        }
        for (key, action) in [("[Tab]", "Views"), ("[?]", "Help"), ("[q]", "Quit")] {
            spans.push(Span::styled(
                key,
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {} ", action)));
        }
        Line::from(spans)
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    trace!("render_help_overlay: called");
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled("Views", Style::default().add_modifier(Modifier::BOLD))),
        key_line("Tab/S-Tab", "Next / previous view"),
        key_line("1 2 3", "Plan / Itinerary / Recommendations"),
        Line::from(""),
        Line::from(Span::styled("Plan form", Style::default().add_modifier(Modifier::BOLD))),
        key_line("↑↓ / j k", "Move between fields"),
        key_line("Enter", "Edit text field / activate"),
        key_line("←→ / h l", "Change travelers or budget"),
        key_line("Space", "Toggle interest"),
        key_line("g", "Generate plan"),
        Line::from(""),
        Line::from(Span::styled("Editing", Style::default().add_modifier(Modifier::BOLD))),
        key_line("Tab", "Cycle destination suggestions"),
        key_line("Esc", "Cancel edit"),
        Line::from(""),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, popup_area);
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<12}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw(desc),
    ])
}

/// Render the blocking notice dialog
fn render_notice(message: &str, frame: &mut Frame, area: Rect) {
    trace!(%message, "render_notice: called");
    let popup_area = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled("Press any key to continue", Style::default().fg(colors::DIM))),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Notice ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(dialog, popup_area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
