#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::LogKind;
use crate::domain::models::MenuNode;
use crate::domain::models::SessionMode;
use crate::domain::services::AppState;

const ROOT_TITLE: &str = "ELMOS";

fn item_prefix(node: &MenuNode) -> &'static str {
    if node.is_category() {
        return "▸";
    }
    if node.interactive {
        return "⚡";
    }
    if node.needs_input() {
        return "✎";
    }
    return "•";
}

fn log_style(kind: LogKind) -> Style {
    return match kind {
        LogKind::Command => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LogKind::Output => Style::default(),
        LogKind::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        LogKind::Failure => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LogKind::Info => Style::default().fg(Color::DarkGray),
    };
}

fn footer_hint(mode: SessionMode) -> &'static str {
    return match mode {
        SessionMode::Browsing => {
            "↑/↓ move  Enter select  Esc back  c clear  [/] page  q quit"
        }
        SessionMode::InputCapture => "Enter confirm  Esc cancel",
        SessionMode::Running => "[/] page  {/} scroll  q quit",
        SessionMode::InteractiveHandoff | SessionMode::Quitting => "",
    };
}

fn render_menu(frame: &mut Frame, area: Rect, state: &AppState) {
    let nav = &state.navigation;
    let title = nav.title().unwrap_or(ROOT_TITLE);

    let mut items = vec![];
    if !nav.is_at_root() {
        items.push(ListItem::new(Line::styled(
            "← Back (Esc)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let first_item = items.len();

    for node in nav.items() {
        let prefix_style = match item_prefix(node) {
            "▸" => Style::default().fg(Color::Blue),
            "⚡" => Style::default().fg(Color::Yellow),
            "✎" => Style::default().fg(Color::Magenta),
            _ => Style::default().fg(Color::DarkGray),
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", item_prefix(node)), prefix_style),
            Span::raw(node.label.clone()),
        ])));
    }

    let mut highlight = Style::default().add_modifier(Modifier::REVERSED);
    if state.mode != SessionMode::Browsing {
        highlight = highlight.fg(Color::DarkGray);
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .highlight_style(highlight);

    let mut list_state = ListState::default().with_selected(Some(first_item + nav.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn output_title(state: &AppState) -> String {
    return match (state.mode, &state.running) {
        (SessionMode::InputCapture, _) => " Input Required ".to_string(),
        (SessionMode::Running | SessionMode::InteractiveHandoff, Some(request)) => {
            format!(" {} {} ", state.spinner(), request.display)
        }
        _ => " Output ".to_string(),
    };
}

fn header_height(state: &AppState) -> u16 {
    if state.mode == SessionMode::InputCapture && state.input.is_some() {
        return 4;
    }
    if state.mode != SessionMode::Browsing {
        return 0;
    }

    return match state.navigation.selected() {
        Some(node) if node.command_template.is_some() => 2,
        Some(node) if !node.description.is_empty() => 1,
        _ => 0,
    };
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    if let (SessionMode::InputCapture, Some(capture)) = (state.mode, &state.input) {
        let [prompt_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
        frame.render_widget(
            Paragraph::new(Line::styled(
                capture.pending().prompt.clone(),
                Style::default().fg(Color::Yellow),
            )),
            prompt_area,
        );
        frame.render_widget(capture.textarea(), field_area);
        return;
    }

    let node = match state.navigation.selected() {
        Some(node) => node,
        None => return,
    };

    let mut lines = vec![Line::styled(
        node.description.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    )];
    if let Some(template) = &node.command_template {
        lines.push(Line::styled(
            format!("$ {template}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_output(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let mut block = Block::default().borders(Borders::ALL);
    let [header_area, log_area] =
        Layout::vertical([Constraint::Length(header_height(state)), Constraint::Min(0)])
            .areas(block.inner(area));
    state.log.set_height(log_area.height as usize);

    block = block.title(output_title(state));
    if let Some(percent) = state.log.scroll_percent() {
        block = block.title_bottom(Line::from(format!(" {percent}% ")).right_aligned());
    }
    if state.mode == SessionMode::InputCapture {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    frame.render_widget(block, area);

    render_header(frame, header_area, state);

    let lines = state
        .log
        .window()
        .iter()
        .map(|line| return Line::styled(line.text.clone(), log_style(line.kind)))
        .collect::<Vec<Line>>();
    frame.render_widget(Paragraph::new(lines), log_area);
}

/// Draws one frame and fits the log window to the space it was given.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let [menu_area, output_area] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
            .areas(main_area);

    render_menu(frame, menu_area, state);
    render_output(frame, output_area, state);
    frame.render_widget(
        Paragraph::new(Line::styled(
            footer_hint(state.mode),
            Style::default().fg(Color::DarkGray),
        )),
        footer_area,
    );
}
