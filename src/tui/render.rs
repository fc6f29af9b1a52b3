use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::host::{MainButton, Popup};
use crate::view::{MinutePackPanel, TripView, ViewBody};

use super::app::TerminalApp;
use super::theme::{TuiColors, DISABLED, STATUS_ERROR};

const FOOTER_HINTS: &str = " Enter: Submit │ Ctrl+R: Refresh │ Ctrl+T: Theme │ Ctrl+Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &TerminalApp) {
    let area = frame.area();
    let colors = app.colors();
    let view = app.view();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.text)),
        area,
    );

    let [header, pack, body, error, button, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(header_widget(&view, &colors), header);
    frame.render_widget(minute_pack_widget(view.minute_pack.as_ref(), &colors), pack);
    frame.render_widget(body_widget(&view.body, &colors), body);

    if let Some(message) = &view.error {
        frame.render_widget(
            Paragraph::new(message.as_str())
                .style(Style::default().fg(STATUS_ERROR))
                .alignment(Alignment::Center),
            error,
        );
    }

    let main_button = app.button();
    if main_button.visible {
        frame.render_widget(button_widget(&main_button, app.spinner(), &colors), button);
    }

    frame.render_widget(
        Paragraph::new(FOOTER_HINTS)
            .style(Style::default().fg(colors.hint).add_modifier(Modifier::DIM)),
        footer,
    );

    if let Some(popup) = app.popup() {
        draw_popup(frame, area, &popup, &colors);
    }
}

fn header_widget(view: &TripView, colors: &TuiColors) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        view.title,
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.hint)),
    )
}

fn minute_pack_widget(panel: Option<&MinutePackPanel>, colors: &TuiColors) -> Paragraph<'static> {
    let hint = Style::default().fg(colors.hint);
    let lines = match panel {
        None => vec![Line::from(Span::styled("Loading minute pack...", hint))],
        Some(MinutePackPanel::Unavailable) => {
            vec![Line::from(Span::styled("You have no active minute pack", hint))]
        }
        Some(MinutePackPanel::Available {
            name,
            time_left,
            duration,
        }) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("Time left: ", hint),
                    Span::raw(time_left.clone()),
                ]),
            ];
            if !duration.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Duration: ", hint),
                    Span::raw(duration.clone()),
                ]));
            }
            lines
        }
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Minute pack ")
            .style(Style::default().bg(colors.secondary_bg))
            .border_style(hint),
    )
}

fn body_widget(body: &ViewBody, colors: &TuiColors) -> Paragraph<'static> {
    let hint = Style::default().fg(colors.hint);

    let lines = match body {
        ViewBody::ActiveTrip { rows } => rows
            .iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", row.label), hint),
                    Span::styled(row.value.clone(), Style::default().fg(colors.text)),
                ])
            })
            .collect(),
        ViewBody::CodeEntry {
            code,
            submit_label,
            can_submit,
            input_locked,
        } => {
            let input_style = if *input_locked {
                Style::default().fg(DISABLED)
            } else {
                Style::default().fg(colors.text).add_modifier(Modifier::UNDERLINED)
            };
            let submit_style = if *can_submit {
                Style::default()
                    .fg(colors.button_text)
                    .bg(colors.button)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DISABLED)
            };
            let cursor = if *input_locked { "" } else { "_" };

            vec![
                Line::from(Span::styled("Scooter code", hint)),
                Line::from(Span::styled(format!("{code}{cursor}"), input_style)),
                Line::from(""),
                Line::from(Span::styled(format!("[ {submit_label} ]"), submit_style)),
            ]
        }
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE))
}

fn button_widget(button: &MainButton, spinner: &str, colors: &TuiColors) -> Paragraph<'static> {
    let label = if button.progress {
        format!("{spinner} {}", button.text)
    } else {
        button.text.clone()
    };
    let style = if button.enabled {
        Style::default()
            .fg(colors.button_text)
            .bg(colors.button)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.button_text).bg(DISABLED)
    };

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn draw_popup(frame: &mut Frame<'_>, area: Rect, popup: &Popup, colors: &TuiColors) {
    let mut lines: Vec<Line> = popup.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(colors.button_text)
                .bg(colors.button)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let content_width = lines
        .iter()
        .map(Line::width)
        .chain(std::iter::once(popup.title.chars().count() + 2))
        .max()
        .unwrap_or(0);
    let width = (content_width as u16 + 4).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = centered_rect_by_size(width, height, area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(colors.bg).fg(colors.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", popup.title))
                    .border_style(Style::default().fg(colors.link)),
            ),
        rect,
    );
}

fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
