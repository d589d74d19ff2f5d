// src/view/mod.rs
//! Turns (database, view, entries) into render-ready structures.

mod board;
mod normalize;
mod projection;

pub use board::{Board, BoardColumn};
pub use normalize::normalize_view_options;
pub use projection::{
    project_view, GalleryCard, GalleryProjection, TableColumn, TableProjection, TableRow,
    ViewProjection,
};
