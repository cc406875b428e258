use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::StatusColors;
use crate::data::filter::{self, FilterKey};
use crate::data::model::Finding;

// ---------------------------------------------------------------------------
// Stacked status bar charts
// ---------------------------------------------------------------------------

/// Distinct status values within `rows`, in first-appearance order. Drives
/// both the stacking order and the legend.
pub fn status_values(rows: &[&Finding]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for finding in rows {
        if !seen.iter().any(|s| s == &finding.status) {
            seen.push(finding.status.clone());
        }
    }
    seen
}

/// One bar per distinct value of `key` within `rows`, stacked by status.
pub fn status_chart(ui: &mut Ui, id: &str, rows: &[&Finding], key: FilterKey, colors: &StatusColors) {
    let categories = filter::options(rows, key);
    let statuses = status_values(rows);

    let mut charts: Vec<BarChart> = Vec::new();
    for status in &statuses {
        let bars: Vec<Bar> = categories
            .iter()
            .enumerate()
            .map(|(ci, category)| {
                let count = rows
                    .iter()
                    .filter(|f| f.status == *status && key.value(f) == category)
                    .count();
                Bar::new(ci as f64, count as f64).width(0.6)
            })
            .collect();

        let mut chart = BarChart::new(bars)
            .name(status)
            .color(colors.color_for(status));
        // Stack each status series on top of the ones already built.
        let prior: Vec<&BarChart> = charts.iter().collect();
        chart = chart.stack_on(&prior);
        charts.push(chart);
    }

    let labels = categories;
    Plot::new(id)
        .legend(Legend::default())
        .height(240.0)
        .y_axis_label("Count")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
