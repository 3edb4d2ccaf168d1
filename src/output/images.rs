use comfy_table::Cell;

use crate::core::SessionImageMap;
use crate::output::format::{create_styled_table, header_cell, right_cell, truncate};

const URL_WIDTH: usize = 80;

/// Build the session listing table (session, image count, first URL)
pub(crate) fn render_image_table(images: &SessionImageMap, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Session", use_color),
        header_cell("Images", use_color),
        header_cell("First image", use_color),
    ]);

    for (session, urls) in images.iter() {
        let first = urls.first().map(String::as_str).unwrap_or_default();
        table.add_row(vec![
            right_cell(&session.to_string(), false),
            right_cell(&urls.len().to_string(), false),
            Cell::new(truncate(first, URL_WIDTH)),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total"),
        right_cell(&images.total_images().to_string(), true),
        Cell::new(""),
    ]);

    table.to_string()
}

pub(crate) fn print_image_table(images: &SessionImageMap, use_color: bool) {
    println!("{}", render_image_table(images, use_color));
}

/// `{"<session>": [urls...]}` keyed in ascending session order
pub(crate) fn output_image_json(images: &SessionImageMap) -> String {
    serde_json::to_string_pretty(images).unwrap_or_else(|_| "{}".to_string())
}
