//! TUI rendering for Ticklist using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{fade_color, fade_style};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use ticklist_engine::{App, InputMode, Priority, RowDescriptor};

pub const TITLE: &str = "My To-Do List";
pub const INPUT_PLACEHOLDER: &str = "Add a task...";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(1), // Priority selector
            Constraint::Length(1), // Filter selector
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_input(frame, app, chunks[1], &palette, &glyphs);
    draw_priority_selector(frame, app, chunks[2], &palette);
    draw_filter_selector(frame, app, chunks[3], &palette);
    draw_task_list(frame, app, chunks[4], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[5], &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(TITLE, styles::title(palette))))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mode = app.input_mode();
    let draft = app.draft();
    let prefix = format!(" {} ", glyphs.prompt);
    let prefix_width = prefix.width() as u16;
    let content_width = area
        .width
        .saturating_sub(2)
        .saturating_sub(prefix_width)
        .max(1) as usize;

    let border_style = match mode {
        InputMode::Normal => Style::default().fg(palette.bg_border),
        InputMode::Insert => Style::default().fg(palette.success),
    };

    let cursor_display_pos = draft.text_before_cursor().width();
    let (display_text, horizontal_scroll) =
        if mode == InputMode::Insert && cursor_display_pos >= content_width {
            scroll_to_cursor(draft.text(), cursor_display_pos, content_width)
        } else {
            (draft.text().to_string(), 0u16)
        };

    let body = if display_text.is_empty() {
        Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(display_text, Style::default().fg(palette.text_primary))
    };
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.accent)),
        body,
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if mode == InputMode::Insert {
        let cursor_x = area
            .x
            .saturating_add(1 + prefix_width)
            .saturating_add(cursor_display_pos as u16)
            .saturating_sub(horizontal_scroll);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Drop leading graphemes until the cursor column fits in `content_width`.
fn scroll_to_cursor(text: &str, cursor_display_pos: usize, content_width: usize) -> (String, u16) {
    let scroll_target = cursor_display_pos - content_width + 1;
    let mut byte_offset = text.len();
    let mut skipped_width = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        if skipped_width >= scroll_target {
            byte_offset = idx;
            break;
        }
        skipped_width += grapheme.width();
    }
    (text[byte_offset..].to_string(), skipped_width as u16)
}

fn chip(label: &str, tone: Color, active: bool, palette: &Palette) -> Span<'static> {
    let style = if active {
        styles::chip_active(palette, tone)
    } else {
        styles::chip(tone)
    };
    Span::styled(format!(" {label} "), style)
}

fn draw_priority_selector(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let current = app.draft_priority();
    let mut spans = vec![
        Span::styled("Set Task Priority ", styles::section_title(palette)),
        Span::raw(" "),
    ];
    for (key, priority) in ["1", "2", "3"].into_iter().zip(Priority::ALL) {
        spans.push(Span::styled(key, styles::key_hint(palette)));
        spans.push(chip(
            priority.label(),
            palette.priority(priority),
            priority == current,
            palette,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_filter_selector(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let filter = app.filter();
    let mut spans = vec![
        Span::styled("Filter by Priority", styles::section_title(palette)),
        Span::raw(" "),
        Span::styled("a", styles::key_hint(palette)),
        chip("All", palette.accent, filter.is_none(), palette),
        Span::raw(" "),
    ];
    for (key, priority) in ["h", "m", "l"].into_iter().zip(Priority::ALL) {
        spans.push(Span::styled(key, styles::key_hint(palette)));
        spans.push(chip(
            priority.label(),
            palette.priority(priority),
            filter == Some(priority),
            palette,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_task_list(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = app.rows();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1));

    if rows.is_empty() {
        let message = if app.store().is_empty() {
            "No tasks yet. Press i to add one."
        } else {
            "No tasks match this filter."
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(palette.text_muted),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(task_line(row, palette, glyphs)))
        .collect();

    let mut state = ListState::default().with_selected(app.selected_index());
    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut state);
}

/// One task row. Fading rows are blended toward the background.
fn task_line<'a>(row: &'a RowDescriptor, palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    let row_bg = if row.selected {
        palette.bg_highlight
    } else {
        palette.bg_dark
    };
    let base = Style::default().bg(row_bg);

    let marker = if row.selected { glyphs.selected } else { " " };
    let checkbox = if row.completed {
        glyphs.checked
    } else {
        glyphs.unchecked
    };
    let text_style = if row.completed {
        base.fg(palette.text_muted).add_modifier(Modifier::CROSSED_OUT)
    } else {
        base.fg(palette.text_primary)
    };

    let mut spans = vec![
        Span::styled(format!("{marker} "), base.fg(palette.accent)),
        Span::styled(format!("{checkbox} "), base.fg(palette.text_secondary)),
        Span::styled(
            format!("{} ", glyphs.priority_dot),
            base.fg(palette.priority(row.priority)),
        ),
        Span::styled(row.text.as_str(), text_style),
    ];
    if row.fading {
        spans.push(Span::styled(
            format!(" {}", glyphs.fading),
            base.fg(palette.text_muted),
        ));
        for span in &mut spans {
            span.style = fade_style(span.style, palette.bg_dark, row.opacity);
        }
    }
    Line::from(spans)
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (mode_label, mode_style) = match app.input_mode() {
        InputMode::Normal => (" NORMAL ", styles::mode_normal(palette)),
        InputMode::Insert => (" INSERT ", styles::mode_insert(palette)),
    };

    let counts = app.counts();
    let counts_text = format!(
        " {} tasks {} {} done ",
        counts.total, glyphs.count_separator, counts.completed
    );
    let separator = format!("{} ", glyphs.separator);

    let mut spans = vec![
        Span::styled(mode_label, mode_style),
        Span::styled(counts_text, Style::default().fg(palette.text_secondary)),
        Span::styled(separator, styles::key_hint(palette)),
    ];
    let hints: &[(&str, &str)] = match app.input_mode() {
        InputMode::Normal => &[
            ("i", "add"),
            ("space", "toggle"),
            ("d", "remove"),
            ("f", "filter"),
            ("q", "quit"),
        ],
        InputMode::Insert => &[("Enter", "add"), ("Tab", "priority"), ("Esc", "done")],
    };
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
