//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop.
//! It paints cell by cell at the positions the layout engine computed, so
//! anything that lands outside the frame (mid-frame resize, tiny terminal)
//! is dropped instead of wrapping or panicking.
//!
//! This module should stay "pure rendering": it reads state + config and
//! paints, without owning navigation logic.

use crate::app::buffer::resolve_buffer;
use crate::app::{Mode, Session};
use crate::core::fm::{EntryKind, Listing};
use crate::core::layout::{HEADER_ROWS, layout_entries};
use crate::ui::widgets;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE: &str = "THE FILE GLOBBER";
const EDIT_PROMPT: &str = "> ";
const EMPTY_NOTICE: &str = "(nothing here)";

/// Renders one frame: header, entries, edit buffer line and the quit dialog.
pub fn render(frame: &mut Frame, session: &Session, listing: &Listing) {
    let area = frame.area();
    let nav = session.nav();
    let display = session.config().display();

    draw_header(frame.buffer_mut(), area, session);

    let placements = layout_entries(
        listing.folders(),
        listing.files(),
        nav.viewport(),
        0,
        listing.folders().len(),
        display.prefix_width(),
    );

    let buf = frame.buffer_mut();
    for (idx, (entry, placement)) in listing.iter().zip(&placements).enumerate() {
        let text = format!("{}{}", display.prefix(entry.kind()), entry.name_str());
        let style = if idx == nav.selected() {
            Style::new().add_modifier(Modifier::REVERSED)
        } else {
            entry_style(entry.kind())
        };
        paint(buf, area, placement.row, placement.column, &text, style);
    }

    if listing.is_empty() {
        paint(
            buf,
            area,
            HEADER_ROWS,
            1,
            EMPTY_NOTICE,
            Style::new().add_modifier(Modifier::DIM),
        );
    }

    draw_edit_line(frame, area, nav.edit_buffer());

    if let Mode::ConfirmQuit(prompt) = session.mode() {
        widgets::draw_quit_popup(frame, area, &prompt);
    }
}

fn entry_style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Directory => Style::new().add_modifier(Modifier::BOLD),
        EntryKind::File => Style::new(),
    }
}

/// Paints `text` at `(row, col)` relative to `area`, clipped to its right edge.
///
/// Returns `false` when the start cell lies outside `area` and nothing was painted.
pub(crate) fn paint(
    buf: &mut Buffer,
    area: Rect,
    row: usize,
    col: usize,
    text: &str,
    style: Style,
) -> bool {
    if row >= area.height as usize || col >= area.width as usize {
        return false;
    }
    let max_width = area.width as usize - col;
    buf.set_stringn(
        area.x + col as u16,
        area.y + row as u16,
        text,
        max_width,
        style,
    );
    true
}

fn draw_header(buf: &mut Buffer, area: Rect, session: &Session) {
    let cols = area.width as usize;
    let title_col = (cols / 2).saturating_sub(TITLE.width() / 2);
    paint(
        buf,
        area,
        0,
        title_col,
        TITLE,
        Style::new().add_modifier(Modifier::REVERSED),
    );

    let nav = session.nav();
    let mut path_line = shorten_home_path(nav.current_path());
    if let Some(pattern) = resolve_buffer(nav.edit_buffer()).pattern {
        path_line.push_str("  [");
        path_line.push_str(pattern);
        path_line.push(']');
    }
    paint(buf, area, 1, 1, &path_line, Style::new().add_modifier(Modifier::BOLD));
}

fn draw_edit_line(frame: &mut Frame, area: Rect, edit_buffer: &str) {
    let Some(row) = (area.height as usize).checked_sub(1) else {
        return;
    };
    let prompt_width = EDIT_PROMPT.width();
    let room = (area.width as usize).saturating_sub(prompt_width + 1);
    let visible = tail_to_width(edit_buffer, room);

    let buf = frame.buffer_mut();
    if !paint(buf, area, row, 0, EDIT_PROMPT, Style::new()) {
        return;
    }
    paint(buf, area, row, prompt_width, visible, Style::new());

    let cursor_col = prompt_width + visible.width();
    if cursor_col < area.width as usize {
        frame.set_cursor_position((area.x + cursor_col as u16, area.y + row as u16));
    }
}

/// Longest suffix of `s` that fits into `max_width` cells.
pub(crate) fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &s[start..]
}
