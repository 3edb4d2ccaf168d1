//! Core module - types shared by every stage of the scrape pipeline

mod types;

pub(crate) use types::{SessionImageMap, SessionRange};
