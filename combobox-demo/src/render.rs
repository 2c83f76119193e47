//! Plain-line rendering of the combobox view.

use std::io::{self, Write};

use combobox::combobox::props::{InputProps, ItemProps, RowContent};
use combobox::input::{FocusTarget, PointerTarget};
use combobox::item::ComboboxItem;
use combobox::rows::SyntheticRow;
use combobox::{Combobox, ComboboxKind, SearchBox};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HELP_LINE: u16 = 0;
const TOGGLE_LINE: u16 = 2;

/// Screen positions of the rendered parts, used for pointer hit testing.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    toggle_line: u16,
    /// Column range `[start, end)` of the "clear selection" badge.
    badge: Option<(u16, u16)>,
    input_line: Option<u16>,
    /// Column range of the "clear query" control.
    clear_input: Option<(u16, u16)>,
    first_row_line: u16,
    /// First interactive row shown (rows above it are scrolled out).
    row_offset: usize,
    rendered_rows: usize,
    bottom: u16,
}

impl Layout {
    pub fn hit(&self, column: u16, line: u16) -> PointerTarget {
        let within = |range: Option<(u16, u16)>| {
            range.is_some_and(|(start, end)| column >= start && column < end)
        };

        if line == self.toggle_line {
            if within(self.badge) {
                return PointerTarget::ClearSelection;
            }
            return PointerTarget::ToggleButton;
        }
        if Some(line) == self.input_line {
            if within(self.clear_input) {
                return PointerTarget::ClearInput;
            }
            return PointerTarget::Inside;
        }
        if line >= self.first_row_line {
            let offset = usize::from(line - self.first_row_line);
            if offset < self.rendered_rows {
                return PointerTarget::Row(self.row_offset + offset);
            }
        }
        if line > self.toggle_line && line < self.bottom {
            PointerTarget::Inside
        } else {
            PointerTarget::Outside
        }
    }

    /// Whether `line` holds the query input.
    pub fn is_input(&self, line: u16) -> bool {
        Some(line) == self.input_line
    }
}

/// Truncate `text` to `width` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push('…');
    out
}

fn column(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn put<W: Write>(out: &mut W, line: u16, text: &str, width: usize, reverse: bool) -> io::Result<()> {
    queue!(out, MoveTo(0, line))?;
    if reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    queue!(out, Print(truncate(text, width)))?;
    if reverse {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn draw_input<W: Write>(
    out: &mut W,
    line: u16,
    input: &InputProps,
    focus: FocusTarget,
    width: usize,
    layout: &mut Layout,
) -> io::Result<()> {
    let focus_mark = if focus == FocusTarget::Input { ">" } else { " " };
    let value = if input.value.is_empty() {
        input.placeholder.as_str()
    } else {
        input.value.as_str()
    };
    let mut text = format!("{} Search: {}", focus_mark, value);
    if focus == FocusTarget::Input {
        text.push('_');
    }
    if input.show_clear {
        text.push(' ');
        let start = text.width();
        text.push_str("[x]");
        layout.clear_input = Some((column(start), column(text.width())));
    }
    layout.input_line = Some(line);
    put(out, line, &text, width, false)
}

fn row_text<T>(props: &ItemProps<'_, T>, kind: ComboboxKind) -> String {
    let mark = match (kind, &props.content) {
        (ComboboxKind::Dropdown, _) if props.is_active => "*",
        (ComboboxKind::Dropdown, _) => " ",
        (_, RowContent::SelectAll { .. }) if props.indeterminate => "[-]",
        _ if props.checked => "[x]",
        _ => "[ ]",
    };
    format!("    {} {}", mark, props.label)
}

/// Draw the whole combobox and return where everything landed.
pub fn draw<W, T>(
    out: &mut W,
    combobox: &Combobox<T>,
    focus: FocusTarget,
    status: &str,
) -> io::Result<Layout>
where
    W: Write,
    T: ComboboxItem + Clone + 'static,
{
    let (width, height) = terminal::size()?;
    let width = usize::from(width);
    let mut layout = Layout {
        toggle_line: TOGGLE_LINE,
        ..Layout::default()
    };

    queue!(out, Clear(ClearType::All))?;
    put(
        out,
        HELP_LINE,
        "Tab: switch focus  Space/Enter: open  Ctrl+Q: quit",
        width,
        false,
    )?;

    let toggle = combobox.toggle_props();
    let indicator = if toggle.is_open { "▲" } else { "▼" };
    let focus_mark = if focus == FocusTarget::ToggleButton { ">" } else { " " };
    let text = toggle
        .inline_labels
        .map(|labels| labels.join(", "))
        .unwrap_or(toggle.text);
    let mut field = format!("{} {} {}", focus_mark, indicator, text);
    if let Some(count) = toggle.selection_count {
        field.push(' ');
        let start = field.width();
        field.push_str(&format!("({} ×)", count));
        layout.badge = Some((column(start), column(field.width())));
    }
    if toggle.disabled {
        field.push_str(" (disabled)");
    }
    put(out, TOGGLE_LINE, &field, width, false)?;
    let mut line = TOGGLE_LINE + 1;

    let input = combobox.input_props();
    if let Some(input) = input.as_ref().filter(|i| i.placement == SearchBox::Field) {
        draw_input(out, line, input, focus, width, &mut layout)?;
        line += 1;
    }

    if let Some(menu) = combobox.menu_props() {
        if let Some(input) = input
            .as_ref()
            .filter(|_| menu.leading_rows.contains(&SyntheticRow::SearchBox))
        {
            draw_input(out, line, input, focus, width, &mut layout)?;
            line += 1;
        }

        // Keep the highlighted row inside the window
        let capacity = usize::from(height.saturating_sub(line + 1)).max(1);
        let row_offset = match menu.highlighted_index {
            Some(row) if row >= capacity => row + 1 - capacity,
            _ => 0,
        };

        layout.first_row_line = line;
        layout.row_offset = row_offset;
        for props in combobox
            .menu_rows()
            .iter()
            .skip(row_offset)
            .take(capacity)
        {
            put(
                out,
                line,
                &row_text(props, combobox.kind()),
                width,
                props.is_highlighted,
            )?;
            layout.rendered_rows += 1;
            line += 1;
        }
        if menu.row_count == 0 {
            put(out, line, "    (no matches)", width, false)?;
            line += 1;
        }
    }
    layout.bottom = line;

    put(out, height.saturating_sub(1), status, width, false)?;
    out.flush()?;
    Ok(layout)
}
