use crate::app::mode::AppMode;
use crate::app::toast::ToastKind;
use crate::app::RenderState;
use crate::engine::Field;
use crate::ui::theme::{colors, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = "\
Enter        submit the JSON in the input box
Tab          switch between input and field selection
Space        toggle the highlighted field (selection)
Up / Down    move through the field list
Esc          open the command deck

Commands
  :s :submit   classify the current input
  :c :clear    clear input and result
  @file.json   load a request file
  @@           load from clipboard
  :h :help     show this help
  :q :quit     quit

Press any key to close";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::dimmed())
    }
}

pub fn render_input_box(input: &str, focused: bool, scroll: u16) -> Paragraph<'_> {
    let body = if input.is_empty() {
        Line::from(Span::styled(
            r#"{"data": ["M", "1", "334", "4", "B"]}"#,
            Style::default().fg(colors::dimmed()),
        ))
    } else {
        Line::from(Span::styled(input, Style::default().fg(colors::text())))
    };

    Paragraph::new(body)
        .scroll((0, scroll))
        .block(
            Block::default()
                .title(" Request JSON ")
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_field_list(fields: &[(Field, bool)], cursor: usize, focused: bool) -> Paragraph<'static> {
    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, (field, selected))| {
            let mark = if *selected { "[x]" } else { "[ ]" };
            let style = if focused && i == cursor {
                Style::default()
                    .fg(colors::accent())
                    .add_modifier(Modifier::BOLD)
            } else if *selected {
                Style::default().fg(colors::text())
            } else {
                Style::default().fg(colors::dimmed())
            };
            Line::from(Span::styled(format!("{mark} {}", field.label()), style))
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Fields ")
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_output(output: Option<&str>) -> Paragraph<'_> {
    let paragraph = match output {
        Some(json) => Paragraph::new(json).style(Style::default().fg(colors::text())),
        None => Paragraph::new("Submit a request to see the response")
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::dimmed())),
    };

    paragraph
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Response ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_toast(kind: ToastKind, message: &str) -> Paragraph<'_> {
    let color = Theme::current().toast(kind);
    Paragraph::new(format!("{} {}", kind.icon(), message))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(color).bg(colors::surface()))
}

pub fn render_help() -> Paragraph<'static> {
    Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::accent())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, mode: AppMode, command: &str) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(colors::accent()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let text = if mode == AppMode::Command {
        format!("{}{}", mode.label(), command)
    } else {
        format!("{} Enter submit · Tab fields · Esc commands · :h help", mode.label())
    };

    let deck = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));
    frame.render_widget(deck, layout[1]);
}

fn toast_area(area: Rect) -> Rect {
    let width = area.width.min(48);
    let height = area.height.min(4);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn to_cell(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn place_cursor(frame: &mut Frame, area: Rect, x: u16, y: u16) {
    let x = x.min(area.right().saturating_sub(1));
    let y = y.min(area.bottom().saturating_sub(1));
    frame.set_cursor_position((x, y));
}

/// Draw the whole form for one frame.
pub fn render_app(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    let inner_width = rows[0].width.saturating_sub(2) as usize;
    let scroll = state
        .input_cursor
        .saturating_sub(inner_width.saturating_sub(1));
    frame.render_widget(
        render_input_box(&state.input, state.mode == AppMode::Input, to_cell(scroll)),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(10)])
        .split(rows[1]);
    frame.render_widget(
        render_field_list(&state.fields, state.field_cursor, state.mode == AppMode::Select),
        columns[0],
    );
    frame.render_widget(render_output(state.output.as_deref()), columns[1]);

    render_command_deck(frame, rows[2], state.mode, &state.command);

    match state.mode {
        AppMode::Input if inner_width > 0 => {
            // Column within the visible window, never wider than the box
            let column = to_cell(state.input_cursor - scroll);
            place_cursor(
                frame,
                area,
                rows[0].x.saturating_add(1).saturating_add(column),
                rows[0].y + 1,
            );
        }
        AppMode::Command => {
            let column = to_cell(state.command_cursor + AppMode::Command.label().len() + 1);
            place_cursor(frame, area, rows[2].x.saturating_add(column), rows[2].y + 1);
        }
        _ => {}
    }

    if state.mode == AppMode::Help {
        let help_area = centered_area(area, 56, 18);
        frame.render_widget(Clear, help_area);
        frame.render_widget(render_help(), help_area);
    }

    if let Some((kind, message)) = &state.toast {
        let toast = toast_area(area);
        frame.render_widget(Clear, toast);
        frame.render_widget(render_toast(*kind, message), toast);
    }
}
