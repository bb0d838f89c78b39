use crate::application::{App, AppMode, FormField, Screen};
use crate::domain::format_created_date;
use crate::presentation::content::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

const ACCENT: Color = Color::Rgb(230, 126, 34);

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.screen {
        Screen::Home => render_text_screen(f, app, chunks[1], RESTAURANT_NAME, home_lines()),
        Screen::About => render_text_screen(f, app, chunks[1], "About Kamayan", about_lines()),
        Screen::Reservations => render_reservations(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    match app.mode {
        AppMode::Form => render_form_popup(f, app),
        AppMode::ConfirmDelete => render_confirm_popup(f, app),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Browse => {}
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| format!("{} {}", i + 1, screen.title()));
    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .block(Block::default().borders(Borders::ALL).title("Kamayan"))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(Color::Gray)))
}

pub fn home_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(RESTAURANT_NAME),
        Line::from(TAGLINE),
        Line::from(format!("★ {}", RATING)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Reserve a Table ]", Style::default().fg(Color::Black).bg(ACCENT)),
            Span::raw("  press Enter or r"),
        ]),
        Line::from(""),
        Line::from(format!("Call Now: {}    Hours: {}", PHONE, HOURS_SUMMARY)),
        Line::from(""),
        heading("Featured Dishes"),
    ];

    for dish in FEATURED_DISHES.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", dish.name), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:>6}", dish.price), Style::default().fg(ACCENT)),
        ]));
        lines.push(muted(&format!("  {}", dish.description)));
    }

    lines.push(Line::from(""));
    lines.push(heading("Why Choose Kamayan?"));
    for (title, description) in FEATURES {
        lines.push(Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))));
        lines.push(muted(&format!("  {}", description)));
    }
    lines
}

pub fn about_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Authentic Filipino Dining Experience"), Line::from("")];

    lines.push(heading("Our Story"));
    for paragraph in STORY {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }

    let stats = STATS
        .iter()
        .map(|(value, label)| format!("{} {}", value, label))
        .collect::<Vec<_>>()
        .join("   |   ");
    lines.push(Line::from(Span::styled(stats, Style::default().fg(ACCENT))));
    lines.push(Line::from(""));

    lines.push(heading("Contact Information"));
    lines.push(Line::from(format!("Phone:   {}", PHONE)));
    lines.push(Line::from(format!("Email:   {}", EMAIL)));
    lines.push(Line::from(format!("Address: {}", ADDRESS[0])));
    lines.push(Line::from(format!("         {}", ADDRESS[1])));
    lines.push(Line::from("Hours:"));
    for hours in HOURS {
        lines.push(Line::from(format!("  {}", hours)));
    }
    lines.push(Line::from(""));

    lines.push(heading("Our Specialties"));
    for (name, description) in SPECIALTIES {
        lines.push(Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))));
        lines.push(muted(&format!("  {}", description)));
    }
    lines.push(Line::from(""));

    lines.push(heading("Our Mission"));
    lines.push(Line::from(MISSION));
    lines
}

/// Largest scroll offset for a text screen; zero for the reservations table.
pub fn max_scroll(screen: Screen) -> usize {
    let lines = match screen {
        Screen::Home => home_lines().len(),
        Screen::About => about_lines().len(),
        Screen::Reservations => 0,
    };
    lines.saturating_sub(1)
}

fn render_text_screen(f: &mut Frame, app: &App, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let max_scroll = lines.len().saturating_sub(1);
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.min(max_scroll) as u16, 0));
    f.render_widget(paragraph, area);
}

fn render_reservations(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Current Reservations ({})", app.reservations.len());

    if app.reservations.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No reservations yet", Style::default().add_modifier(Modifier::BOLD))),
            muted("Make your first reservation to get started"),
            Line::from(""),
            muted("Press r to make a reservation"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = (area.height as usize).saturating_sub(3).max(1);
    let offset = app.selected.saturating_sub(visible_rows - 1);

    let header = Row::new(["Name", "Guests", "Phone", "Date & Time"].map(|h| {
        Cell::from(h).style(Style::default().fg(Color::Yellow))
    }));

    let rows = app
        .reservations
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, r)| {
            let style = if i == app.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(r.guest_label()),
                Cell::from(r.phone.clone()),
                Cell::from(r.display_datetime()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Min(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match (&app.status_message, app.mode) {
        (Some(message), AppMode::Browse | AppMode::Form) => message.clone(),
        (_, AppMode::Browse) => match app.screen {
            Screen::Reservations => {
                "r: new | Enter/e: edit | d: cancel booking | ↑↓: select | Tab: next screen | ?: help | q: quit".to_string()
            }
            _ => "Tab/1-3: switch screen | r: reserve a table | ↑↓: scroll | ?: help | q: quit".to_string(),
        },
        (_, AppMode::Form) => "Tab/↓: next field | ↑: previous field | Enter: save | Esc: cancel".to_string(),
        (_, AppMode::ConfirmDelete) => "y: Cancel Reservation | n/Esc: Keep Reservation".to_string(),
        (_, AppMode::Help) => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = match app.mode {
        AppMode::Browse => Style::default(),
        AppMode::Form => Style::default().fg(Color::Green),
        AppMode::ConfirmDelete => Style::default().fg(Color::Red),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_form_popup(f: &mut Frame, app: &App) {
    let height = if app.form.is_editing() { 18 } else { 14 };
    let popup_area = centered_rect(f.area(), 60, height);
    f.render_widget(Clear, popup_area);

    let title = if app.form.is_editing() {
        "Update Reservation Details"
    } else {
        "Make a Reservation"
    };

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = app.form.focus == field;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", if focused { ">" } else { " " }, field.label()),
            label_style,
        )));

        let value = app.form.value(field);
        let mut spans = vec![Span::raw("  ")];
        if value.is_empty() && !field.placeholder().is_empty() {
            spans.push(Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(value.to_string()));
        }
        if focused {
            spans.push(Span::styled("_", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }

    if let Some(id) = app.form.editing {
        let created = app
            .form
            .created_at
            .as_deref()
            .map(format_created_date)
            .unwrap_or_default();
        lines.push(Line::from(""));
        lines.push(heading("Original Reservation"));
        lines.push(muted(&format!("  Created: {}", created)));
        lines.push(muted(&format!("  ID: {}", id)));
    }

    lines.push(Line::from(""));
    let submit = if app.form.is_editing() {
        "Enter: Update Reservation"
    } else {
        "Enter: Confirm Reservation"
    };
    lines.push(muted(&format!("{} | Esc: Cancel", submit)));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(form, popup_area);
}

fn render_confirm_popup(f: &mut Frame, app: &App) {
    let popup_area = centered_rect(f.area(), 60, 7);
    f.render_widget(Clear, popup_area);

    let prompt = app.delete_prompt().unwrap_or_default();
    let dialog = Paragraph::new(vec![
        Line::from(prompt),
        Line::from(""),
        muted("y: Cancel Reservation | n/Esc: Keep Reservation"),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Cancel Reservation")
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(dialog, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Kamayan Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"KAMAYAN RESERVATIONS

=== SCREENS ===
Tab / →         Next screen
Shift+Tab / ←   Previous screen
1 2 3           Home, About, Reservations
↑↓ or j/k       Scroll Home and About, select on Reservations

=== RESERVATIONS ===
r / Ctrl+N      Make a new reservation (from any screen)
Enter / e       Edit the selected reservation
d / Delete      Cancel the selected reservation (asks first)

=== RESERVATION FORM ===
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
Backspace       Delete last character
Enter           Save the reservation
Esc             Close the form without saving

All fields are required. Guests must be a whole number of at least 1.
Date & Time is free text, for example 2024-03-15 19:30.

=== CONFIRMATION ===
y / Enter       Cancel the reservation
n / Esc         Keep the reservation

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

Reservations are saved on this device after every change."#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReservationDetails, ReservationStore};
    use crate::infrastructure::MemoryStorage;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(ReservationStore::new(Box::new(MemoryStorage::new())))
    }

    #[test]
    fn test_home_screen_renders() {
        let text = screen_text(&app());
        assert!(text.contains("Kamayan Filipino Restaurant"));
        assert!(text.contains("Reserve a Table"));
        assert!(text.contains("Featured Dishes"));
    }

    #[test]
    fn test_empty_reservations_screen() {
        let mut app = app();
        app.show_screen(Screen::Reservations);

        let text = screen_text(&app);
        assert!(text.contains("Current Reservations (0)"));
        assert!(text.contains("No reservations yet"));
    }

    #[test]
    fn test_reservations_table_and_form() {
        let mut app = app();
        app.store
            .create(ReservationDetails::new("Juan Dela Cruz", "09171234567", "2024-03-15 19:30", 4));
        app.refresh();
        app.show_screen(Screen::Reservations);

        let text = screen_text(&app);
        assert!(text.contains("Current Reservations (1)"));
        assert!(text.contains("Juan Dela Cruz"));
        assert!(text.contains("4 guests"));

        assert!(!text.contains("Original Reservation"));

        app.open_edit_form();
        let reservation = &app.reservations[0];
        let text = screen_text(&app);
        assert!(text.contains("Update Reservation Details"));
        assert!(text.contains("Original Reservation"));
        assert!(text.contains(&format!("Created: {}", reservation.display_created_date())));
        assert!(text.contains(&format!("ID: {}", reservation.id)));
    }

    #[test]
    fn test_new_form_has_no_original_panel() {
        let mut app = app();
        app.open_new_form();

        let text = screen_text(&app);
        assert!(text.contains("Make a Reservation"));
        assert!(!text.contains("Original Reservation"));
    }

    #[test]
    fn test_about_lines_include_contact_details() {
        let text: String = about_lines()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains(PHONE));
        assert!(text.contains(EMAIL));
        assert!(text.contains("Our Mission"));
    }
}
