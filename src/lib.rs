//! folio: a terminal reader for article pages with a scroll-synced table of contents.
//!
//! Every page shares one template, and section tracking is implemented once: a
//! [`registry::SectionRegistry`] declares the sections, a [`tracker::VisibilityTracker`] promotes
//! whichever region scrolls into view, and the [`navigator::Navigator`] jumps to sections on
//! request. A [`controller::PageController`] owns all of it for the lifetime of one mounted page.

pub mod active;
pub mod app_state;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod formats;
pub mod input;
pub mod logging;
pub mod navigator;
pub mod page;
pub mod progress;
pub mod registry;
pub mod scroll;
pub mod section;
pub mod tracker;
pub mod ui;
pub mod visibility;
