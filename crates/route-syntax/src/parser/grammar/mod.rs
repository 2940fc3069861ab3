//! Grammar productions for route patterns.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Segment-level productions live in `segments`, everything between `{` and `}` in
//! `parameters`.

mod parameters;
mod segments;
