mod format;
mod images;
mod notes;

pub(crate) use images::{output_image_json, print_image_table};
pub(crate) use notes::{output_notes_json, print_notes_table};
