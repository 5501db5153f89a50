//! Scroll-position watching for section navigation.
//!
//! Given a scrollable viewport and an ordered set of content sections, the
//! watcher resolves which section is currently in focus and notifies an
//! observer whenever that changes — the machinery behind a navigation menu
//! whose active item follows the reader through a long document.
//!
//! Layout measurement stays behind the [`geometry::Geometry`] trait, so the
//! engine runs anywhere something can be scrolled: the bundled demo watches
//! a markdown document inside a terminal viewport. The pipeline of one
//! pulse is measure ([`bounds`]), window ([`view`]), overlap
//! ([`candidate`]), tie-break ([`resolve`]) and notify ([`watcher`]).
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod bounds;
pub mod candidate;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod mapper;
pub mod resolve;
pub mod trail;
pub mod ui;
pub mod view;
pub mod watcher;

pub use candidate::{Candidate, Focus};
pub use error::{Result, WatchError};
pub use geometry::{Geometry, ScrollMetrics, Scroller, Span, StaticGeometry};
pub use resolve::Resolution;
pub use view::View;
pub use watcher::{Options, Watcher};
