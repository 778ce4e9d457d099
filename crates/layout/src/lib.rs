//! Timeline layout engine for Ganttline
//!
//! Generates calendar windows, projects task date ranges onto bar
//! geometry, composes task filters and steps the calendar anchor. Every
//! operation is a pure function over caller-owned data.

pub mod calendar;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod models;
pub mod navigation;
pub mod source;

pub use calendar::{
    CalendarWindow, DEFAULT_DAYS_BEFORE, DEFAULT_WINDOW_DAYS, MonthSpan, generate_window,
    is_weekend,
};
pub use error::{LayoutError, LayoutResult};
pub use filter::{ALL_SELECTION, StatusCounts, TaskFilter, filter_tasks};
pub use geometry::{
    BarGeometry, TaskLayout, TaskMarker, layout_task, layout_tasks, project_bar, project_task,
    today_marker,
};
pub use models::{PROJECT_PALETTE, Priority, Project, Task, TaskStatus, palette_color};
pub use navigation::{Direction, Granularity, advance};
pub use source::{InMemorySource, JsonFileSource, TaskSource, TimelineData};

// Layout results may be computed on one thread and rendered on another
static_assertions::assert_impl_all!(CalendarWindow: Send, Sync);
static_assertions::assert_impl_all!(TaskFilter: Send, Sync);
static_assertions::assert_impl_all!(TaskLayout: Send, Sync);
static_assertions::assert_impl_all!(JsonFileSource: Send, Sync);
