use comfy_table::Cell;

use crate::notes::SessionNote;
use crate::output::format::{create_styled_table, header_cell, right_cell, truncate};

const TITLE_WIDTH: usize = 60;

pub(crate) fn render_notes_table(notes: &[SessionNote], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Session", use_color),
        header_cell("Title", use_color),
        header_cell("Lines", use_color),
    ]);

    for note in notes {
        let lines = note.content.lines().count();
        table.add_row(vec![
            right_cell(&note.number.to_string(), false),
            Cell::new(truncate(&note.title, TITLE_WIDTH)),
            right_cell(&lines.to_string(), false),
        ]);
    }

    table.to_string()
}

pub(crate) fn print_notes_table(notes: &[SessionNote], use_color: bool) {
    println!("{}", render_notes_table(notes, use_color));
}

pub(crate) fn output_notes_json(notes: &[SessionNote]) -> String {
    serde_json::to_string_pretty(notes).unwrap_or_else(|_| "[]".to_string())
}
