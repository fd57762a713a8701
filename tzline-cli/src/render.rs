// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Terminal rendering of a timeline slice.
//!
//! Each cell is `cell_width` columns wide and the viewport is scrolled with
//! [`Timeline::scroll_offset`], so the reference minute sits under the
//! middle column exactly as it would in a pixel layout.

use std::fmt::Write;
use tzline::{Comparison, Palette, Rgb, Timeline};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cells visible at once.
    pub visible_cells: usize,
    /// Columns per cell.
    pub cell_width: usize,
    /// Emit 24-bit ANSI colours.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            visible_cells: 9,
            cell_width: 6,
            color: true,
        }
    }
}

/// The cell row and, beneath it, the date annotations of any midnight whose
/// left edge is visible.
pub fn render_timeline(
    timeline: &Timeline,
    options: &RenderOptions,
    palette: &Palette,
) -> (String, String) {
    let width = options.cell_width.max(1);
    let columns = options.visible_cells * width;
    let half = columns as f64 / 2.0;
    let offset = timeline.scroll_offset(width as f64);

    let mut row = String::new();
    let mut notes = vec![' '; columns];

    for col in 0..columns {
        let x = col as f64 + 0.5 - half;
        let position = (x - offset) / width as f64;
        let index = position.floor();
        if index < 0.0 || index as usize >= timeline.len() {
            push_cell(&mut row, ' ', None, options.color);
            continue;
        }
        let index = index as usize;
        let cell = &timeline.cells()[index];
        let within = position - index as f64;
        let slot = ((within * width as f64).floor() as usize).min(width - 1);
        let glyph = format!("{:^width$}", cell.label)
            .chars()
            .nth(slot)
            .unwrap_or(' ');

        let style = palette.cell_style(cell.phase);
        push_cell(
            &mut row,
            glyph,
            Some((style.fill.color_at(within), style.text)),
            options.color,
        );

        if slot == 0 {
            if let Some(note) = cell.annotation() {
                for (i, c) in note.chars().enumerate() {
                    if let Some(place) = notes.get_mut(col + i) {
                        *place = c;
                    }
                }
            }
        }
    }
    if options.color {
        row.push_str(RESET);
    }
    let notes: String = notes.into_iter().collect();
    (row, notes.trim_end().to_owned())
}

/// Heading line for one person, e.g. `Ada (Engineer)  Europe/London  5:30 PM  12-25-2023`.
pub fn render_heading(row: &Comparison<'_>) -> String {
    let mut heading = row.person.name.clone();
    if let Some(role) = &row.person.role {
        let _ = write!(heading, " ({role})");
    }
    format!(
        "{heading}  {}  {}  {}",
        row.person.timezone, row.result.time, row.result.date
    )
}

/// A caret under the middle column.
pub fn render_marker(options: &RenderOptions) -> String {
    let columns = options.visible_cells * options.cell_width.max(1);
    format!("{}^", " ".repeat(columns / 2))
}

fn push_cell(row: &mut String, glyph: char, colors: Option<(Rgb, Rgb)>, color: bool) {
    match colors {
        Some((bg, fg)) if color => {
            let _ = write!(
                row,
                "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{glyph}",
                bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
            );
        }
        None if color => {
            let _ = write!(row, "{RESET}{glyph}");
        }
        _ => row.push(glyph),
    }
}
