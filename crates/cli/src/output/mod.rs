//! Output formatting module for Ganttline
//!
//! Provides table formatting and display utilities for CLI output.

use chrono::Datelike;
use ganttline_layout::{
    CalendarWindow, StatusCounts, Task, TaskLayout, TaskMarker, TimelineData, is_weekend,
};

/// Maximum width for the name column before truncation
const MAX_NAME_WIDTH: usize = 30;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Render rows under headers as an aligned table.
///
/// Produces output in the format:
/// ```text
/// ID  Name        Status
/// --  ----------  -----------
/// t1  Wireframes  in-progress
/// ```
///
/// Column widths fit the widest cell. The trailing newline is omitted.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row.get(i).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let render_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

/// Format the days of a window and its month header spans.
///
/// ```text
/// Date        Day  Weekend
/// ----------  ---  -------
/// 2024-09-16  Mon
/// ...
///
/// Months:
///   Sep 2024  15 days  33.3%
/// ```
pub fn format_window(window: &CalendarWindow) -> String {
    let rows: Vec<Vec<String>> = window
        .iter()
        .map(|day| {
            vec![
                day.format("%Y-%m-%d").to_string(),
                day.format("%a").to_string(),
                if is_weekend(*day) { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();

    let mut output = render_table(&["Date", "Day", "Weekend"], &rows);
    output.push_str("\n\nMonths:");
    for span in window.month_spans() {
        output.push_str(&format!(
            "\n  {} {}  {:>3} days  {:>5.1}%",
            span.first_day.format("%b"),
            span.first_day.year(),
            span.days,
            span.basis
        ));
    }

    output
}

/// Format tasks into an aligned table string.
///
/// Project names and colors are looked up in `data`; a task whose project
/// is missing shows its project ID and no color.
pub fn format_task_table(tasks: &[&Task], data: &TimelineData) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|task| {
            let project = data
                .project(&task.project)
                .map_or(task.project.as_str(), |p| p.name.as_str());
            vec![
                task.id.clone(),
                truncate(&task.name, MAX_NAME_WIDTH),
                project.to_string(),
                data.project_color(&task.project).unwrap_or("").to_string(),
                task.status.to_string(),
                task.priority.to_string(),
                task.start_date.to_string(),
                task.end_date.to_string(),
                format!("{}%", task.progress_percent()),
            ]
        })
        .collect();

    render_table(
        &[
            "ID", "Name", "Project", "Color", "Status", "Priority", "Start", "End", "Progress",
        ],
        &rows,
    )
}

/// Format a marker column cell.
fn format_marker(marker: &TaskMarker) -> String {
    match marker {
        TaskMarker::Bar => "bar".to_string(),
        TaskMarker::Milestone { position } => format!("milestone@{:.2}%", position),
    }
}

/// Format laid-out tasks with their bar geometry.
///
/// `rows` pairs each task with its layout, in display order.
pub fn format_layout_table(rows: &[(&Task, TaskLayout)]) -> String {
    if rows.is_empty() {
        return "No tasks found.".to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(task, layout)| {
            vec![
                layout.task_id.clone(),
                truncate(&task.name, MAX_NAME_WIDTH),
                task.status.to_string(),
                format!("{:.2}%", layout.geometry.left),
                format!("{:.2}%", layout.geometry.width),
                format!("{}%", layout.progress),
                format_marker(&layout.marker),
            ]
        })
        .collect();

    render_table(
        &["ID", "Name", "Status", "Left", "Width", "Progress", "Marker"],
        &cells,
    )
}

/// Format the "showing N tasks" summary with per-status counts.
pub fn format_status_summary(counts: &StatusCounts) -> String {
    let noun = if counts.total() == 1 { "task" } else { "tasks" };
    let breakdown: Vec<String> = counts
        .non_zero()
        .into_iter()
        .map(|(status, count)| format!("{}: {}", status, count))
        .collect();

    if breakdown.is_empty() {
        format!("Showing {} {}", counts.total(), noun)
    } else {
        format!(
            "Showing {} {} ({})",
            counts.total(),
            noun,
            breakdown.join(", ")
        )
    }
}
