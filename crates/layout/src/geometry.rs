//! Task bar geometry.
//!
//! Maps task date ranges onto horizontal percentages of a calendar window.
//! Positions are measured against the window's span (last day minus first
//! day), so a task starting on the last day sits at 100%.
//!
//! Known limitation: a task that starts before the window but ends inside
//! it has its `left` clamped to zero while keeping its full width, so the
//! visible bar overstates how far into the window it runs.

use chrono::NaiveDate;
use tracing::trace;

use crate::calendar::CalendarWindow;
use crate::filter::TaskFilter;
use crate::models::Task;

/// Horizontal placement of a bar, in percent of the window width.
///
/// Always `0 <= left <= 100`, `0 <= width <= 100` and
/// `left + width <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    /// Offset of the bar's leading edge.
    pub left: f64,
    /// Width of the bar.
    pub width: f64,
}

impl BarGeometry {
    /// Geometry of a bar that is not drawn.
    pub const EMPTY: BarGeometry = BarGeometry {
        left: 0.0,
        width: 0.0,
    };

    /// Position of the trailing edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Centre of the bar, where a milestone marker is placed.
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// How a task is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskMarker {
    /// A spanning bar.
    Bar,
    /// A point marker at `position` percent.
    Milestone { position: f64 },
}

/// Layout of a single task within a window.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskLayout {
    /// ID of the task this layout belongs to.
    pub task_id: String,
    /// Bar placement.
    pub geometry: BarGeometry,
    /// Filled share of the bar, clamped to 0-100.
    pub progress: u8,
    /// Bar or milestone marker.
    pub marker: TaskMarker,
}

/// Project a date range onto `window`.
///
/// `window` is expected to be ordered; an empty, single-day or reversed
/// window has no span and yields [`BarGeometry::EMPTY`]. Ranges lying
/// wholly before the window are empty too. Ranges after the window sit at
/// `left = 100` with no width. Reversed ranges get zero width.
pub fn project_bar(start: NaiveDate, end: NaiveDate, window: &[NaiveDate]) -> BarGeometry {
    let (Some(&first), Some(&last)) = (window.first(), window.last()) else {
        return BarGeometry::EMPTY;
    };

    let total_span = (last - first).num_days() as f64;
    if total_span <= 0.0 {
        return BarGeometry::EMPTY;
    }

    if end < first {
        return BarGeometry::EMPTY;
    }

    let offset = (start - first).num_days() as f64;
    let duration = (end - start).num_days() as f64;

    let left = (offset / total_span * 100.0).clamp(0.0, 100.0);
    let width = (duration / total_span * 100.0).clamp(0.0, 100.0 - left);

    BarGeometry { left, width }
}

/// Project a task's date range onto `window`.
pub fn project_task(task: &Task, window: &CalendarWindow) -> BarGeometry {
    project_bar(task.start_date, task.end_date, window.days())
}

/// Lay out one task: geometry, progress fill and marker kind.
pub fn layout_task(task: &Task, window: &CalendarWindow) -> TaskLayout {
    let geometry = project_task(task, window);
    let marker = if task.milestone {
        TaskMarker::Milestone {
            position: geometry.center(),
        }
    } else {
        TaskMarker::Bar
    };

    TaskLayout {
        task_id: task.id.clone(),
        geometry,
        progress: task.progress_percent(),
        marker,
    }
}

/// Filter `tasks` and lay out the survivors, preserving order.
pub fn layout_tasks(
    tasks: &[Task],
    filter: &TaskFilter,
    window: &CalendarWindow,
) -> Vec<TaskLayout> {
    let layouts: Vec<TaskLayout> = filter
        .apply(tasks)
        .map(|task| layout_task(task, window))
        .collect();

    trace!(
        "Laid out {} of {} tasks over {} days",
        layouts.len(),
        tasks.len(),
        window.len()
    );

    layouts
}

/// Position of the "today" line, in percent.
///
/// Uses the day's index over the number of days rather than the span, so
/// it lines up with the left edge of the day's column. `None` when `today`
/// is outside the window.
pub fn today_marker(window: &CalendarWindow, today: NaiveDate) -> Option<f64> {
    window
        .index_of(today)
        .map(|index| index as f64 / window.len() as f64 * 100.0)
}
