use crate::modal::{ButtonRole, ModalPayload, ModalState};
use crate::ui::alerts::AlertsAction;
use crate::ui::app::{App, ModalSlot};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{bottom_anchored_rect, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DESTRUCTIVE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    POPUP_BORDER,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ABOUT: &str = "Because all data flows through the screen in a single direction, \
whether an alert or action sheet is displayed is itself state: the reducer puts a \
payload into a modal slot, the view renders whatever the slot holds, and every button \
is bound to the action it dispatches. Press a button bound to Increment from an open \
alert and the count changes while the alert stays up; only cancel-type actions dismiss.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(state.count), header);

    frame.render_widget(Clear, body);
    let mut lines: Vec<Line> = ABOUT
        .split('\n')
        .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(HEADER_TEXT))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Count: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(state.count.to_string(), Style::default().fg(ACCENT)),
    ]));
    let body_widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(body_widget, body);

    frame.render_widget(
        Footer::new().widget(footer, state.any_modal_shown()),
        footer,
    );

    // Sheet first, alert last: the alert draws on top when both are shown,
    // matching input routing in App::active_modal.
    let active = app.active_modal().map(|(slot, _)| slot);
    if let ModalState::Shown(payload) = &state.sheet {
        let selected = (active == Some(ModalSlot::Sheet)).then(|| app.button_selection());
        draw_modal(frame, body, payload, selected, true);
    }
    if let ModalState::Shown(payload) = &state.alert {
        let selected = (active == Some(ModalSlot::Alert)).then(|| app.button_selection());
        draw_modal(frame, body, payload, selected, false);
    }
}

fn draw_modal(
    frame: &mut Frame<'_>,
    body: ratatui::layout::Rect,
    payload: &ModalPayload<AlertsAction>,
    selected: Option<usize>,
    anchor_bottom: bool,
) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(message) = &payload.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));
    }

    for (idx, button) in payload.buttons.iter().enumerate() {
        let label_color = match button.role {
            ButtonRole::Default => HEADER_TEXT,
            ButtonRole::Cancel => HEADER_SEPARATOR,
            ButtonRole::Destructive => DESTRUCTIVE,
        };
        let mut line = Line::from(vec![
            Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(HEADER_TEXT)),
            Span::styled(button.label.clone(), Style::default().fg(label_color)),
        ]);
        if selected == Some(idx) {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let title_width = payload.title.chars().count() as u16;
    let popup_width = content_width.max(title_width).saturating_add(4).max(30);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = if anchor_bottom {
        bottom_anchored_rect(body, popup_width, popup_height)
    } else {
        centered_rect_by_size(body, popup_width, popup_height)
    };

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            payload.title.clone(),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
