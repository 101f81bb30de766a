//! Palmer notation engine.
//!
//! Tooth symbols, quadrants, the per-quadrant display sort and the combined
//! description. Everything here is pure: callers recompute from the current
//! input on every change.

pub mod compose;
pub mod error;
pub mod export;
pub mod finding;
pub mod history;
pub mod quadrant;
pub mod result;
pub mod sort;
pub mod symbol;

pub use compose::compose;
pub use error::NotationError;
pub use export::export_file_stem;
pub use finding::{Finding, QuadrantInput, describe_tooth, sanitize_entry};
pub use history::{HistoryItem, HistoryLog};
pub use quadrant::{Level, Quadrant, Side};
pub use result::{AnalysisResult, CorrectionSession, JawPlacement};
pub use sort::sort_quadrant;
pub use symbol::{Dentition, UNKNOWN_RANK, name_of, rank_of};
