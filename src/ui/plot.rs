use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoint,
    PlotPoints, Points, Polygon, Text,
};

use health_data::color::{generate_palette, ColorScale};
use health_data::data::model::Indicator;
use health_data::report::cognitive::{CognitiveComparison, DENSITY_LEVELS};
use health_data::report::heatmap::{StateHeatmap, COLOR_BAR_LABEL};
use health_data::report::pairs::{PairGrid, PairPanel};
use health_data::report::race::RaceBars;
use health_data::report::sex::SexComparison;
use health_data::report::ChartOutcome;

use crate::state::{AppState, ReportTab};

const SCATTER_COLOR: Color32 = Color32::from_rgba_premultiplied(19, 45, 78, 153);
const BAR_WIDTH: f64 = 0.25;

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the active report block in the central panel.
pub fn report_plot(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a survey table to view the reports  (File → Open…)");
        });
        return;
    };

    let tab = state.active_tab;
    ui.heading(tab.title());
    ui.separator();

    match tab {
        ReportTab::Pairs => show_outcome(ui, &report.pair_grid, pair_grid_plot),
        ReportTab::Sex => show_outcome(ui, &report.sex, sex_box_plot),
        ReportTab::Heatmap => show_outcome(ui, &report.heatmap, heatmap_plot),
        ReportTab::Race => show_outcome(ui, &report.race, race_bar_plot),
        ReportTab::Cognitive => show_outcome(ui, &report.cognitive, cognitive_plot),
    }
}

/// Skipped blocks show their fallback message instead of a chart.
fn show_outcome<T>(ui: &mut Ui, outcome: &ChartOutcome<T>, render: fn(&mut Ui, &T)) {
    match outcome {
        ChartOutcome::Ready(data) => render(ui, data),
        ChartOutcome::Skipped(msg) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(*msg);
            });
        }
    }
}

/// Axis formatter that prints `names[k]` at integer positions only.
fn category_axis(names: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let v = mark.value;
        if (v - v.round()).abs() > 1e-6 || v < 0.0 {
            return String::new();
        }
        names.get(v.round() as usize).cloned().unwrap_or_default()
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn rect(x: [f64; 2], y: [f64; 2]) -> Vec<[f64; 2]> {
    vec![[x[0], y[0]], [x[1], y[0]], [x[1], y[1]], [x[0], y[1]]]
}

// ---------------------------------------------------------------------------
// 1) Pair grid
// ---------------------------------------------------------------------------

fn pair_grid_plot(ui: &mut Ui, grid: &PairGrid) {
    let labels = PairGrid::labels();
    let side = ((ui.available_width().min(ui.available_height()) - 40.0) / 3.0).max(120.0);

    egui::Grid::new("pair_grid").spacing([6.0, 6.0]).show(ui, |ui: &mut Ui| {
        for (row, panels) in grid.panels.iter().enumerate() {
            for (col, panel) in panels.iter().enumerate() {
                let mut plot = Plot::new(("pair_panel", row, col))
                    .width(side)
                    .height(side)
                    .allow_drag(false)
                    .allow_scroll(false);
                if row == labels.len() - 1 {
                    plot = plot.x_axis_label(labels[col]);
                }
                if col == 0 {
                    plot = plot.y_axis_label(labels[row]);
                }

                plot.show(ui, |plot_ui| match panel {
                    PairPanel::Density(Some(curve)) => {
                        plot_ui.line(
                            Line::new(PlotPoints::from(curve.clone()))
                                .color(Color32::from_rgb(76, 114, 176))
                                .fill(0.0)
                                .width(1.5),
                        );
                    }
                    PairPanel::Density(None) => {}
                    PairPanel::Scatter { points, fit } => {
                        plot_ui.points(
                            Points::new(PlotPoints::from(points.clone()))
                                .radius(3.5)
                                .color(SCATTER_COLOR),
                        );
                        let xs = value_range(points.iter().map(|p| p[0]));
                        if let (Some(fit), Some((x0, x1))) = (fit, xs) {
                            plot_ui.line(
                                Line::new(PlotPoints::from(vec![[x0, fit.at(x0)], [x1, fit.at(x1)]]))
                                    .color(Color32::BLACK)
                                    .width(1.0),
                            );
                        }
                    }
                });
            }
            ui.end_row();
        }
    });
}

// ---------------------------------------------------------------------------
// 2) Box plot by sex
// ---------------------------------------------------------------------------

fn sex_box_plot(ui: &mut Ui, cmp: &SexComparison) {
    let colors = generate_palette(cmp.groups.len());
    let names: Vec<String> = cmp.groups.iter().map(|g| g.category.clone()).collect();

    Plot::new("sex_box_plot")
        .legend(Legend::default())
        .x_axis_label("Sexo")
        .y_axis_label("Porcentaje (%)")
        .x_axis_formatter(category_axis(names))
        .show(ui, |plot_ui| {
            for (i, (group, color)) in cmp.groups.iter().zip(colors).enumerate() {
                let s = &group.stats;
                let x = i as f64;
                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker),
                )
                .name(&group.category)
                .fill(color.gamma_multiply(0.8))
                .stroke(Stroke::new(1.5, Color32::DARK_GRAY))
                .box_width(0.6);
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&group.category));

                if !s.outliers.is_empty() {
                    let pts: Vec<[f64; 2]> = s.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(
                        Points::new(PlotPoints::from(pts))
                            .radius(3.0)
                            .color(Color32::DARK_GRAY),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 3) Heat map
// ---------------------------------------------------------------------------

fn heatmap_plot(ui: &mut Ui, heat: &StateHeatmap) {
    let scale = ColorScale::coolwarm().reversed();
    let n = heat.matrix.len();
    let labels: Vec<String> = Indicator::ALL.iter().map(|i| i.label().to_string()).collect();
    // First state on top.
    let states: Vec<String> = heat.matrix.states.iter().rev().cloned().collect();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{COLOR_BAR_LABEL}:"));
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let v = heat.min + t * (heat.max - heat.min);
            ui.label(
                egui::RichText::new(format!("{v:.1}"))
                    .background_color(scale.at(t))
                    .color(Color32::BLACK),
            );
        }
    });

    Plot::new("state_heatmap")
        .x_axis_label("Indicadores")
        .y_axis_label("Estado")
        .x_axis_formatter(category_axis(labels))
        .y_axis_formatter(category_axis(states))
        .show_grid(false)
        .allow_drag(true)
        .show(ui, |plot_ui| {
            for (r, row) in heat.matrix.values.iter().enumerate() {
                let y = (n - 1 - r) as f64;
                for (c, &value) in row.iter().enumerate() {
                    let x = c as f64;
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(rect([x - 0.5, x + 0.5], [y - 0.5, y + 0.5])))
                            .fill_color(scale.at(heat.normalized(value)))
                            .stroke(Stroke::new(0.4, Color32::WHITE))
                            .name(format!("{}: {value:.1}", heat.matrix.states[r])),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 4) Grouped bars by race
// ---------------------------------------------------------------------------

fn race_bar_plot(ui: &mut Ui, chart: &RaceBars) {
    let races = RaceBars::races();
    let colors = ColorScale::coolwarm().sample(races.len());
    let labels: Vec<String> = Indicator::ALL
        .iter()
        .map(|i| i.short_label().to_string())
        .collect();

    ui.label("Raza");
    Plot::new("race_bar_plot")
        .legend(Legend::default())
        .x_axis_label("Indicador")
        .y_axis_label("Porcentaje (%)")
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            for (k, (race, color)) in races.iter().zip(colors).enumerate() {
                let offset = (k as f64 - (races.len() - 1) as f64 / 2.0) * BAR_WIDTH;
                let group: Vec<_> = chart.bars.iter().filter(|b| b.race == *race).collect();

                let bars: Vec<Bar> = group
                    .iter()
                    .map(|b| {
                        Bar::new(b.indicator.index() as f64 + offset, b.mean)
                            .width(BAR_WIDTH * 0.95)
                            .name(format!("{} · {race} (n={})", b.indicator.short_label(), b.n))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(color).name(*race));

                for b in group {
                    let Some(sd) = b.sd else { continue };
                    let x = b.indicator.index() as f64 + offset;
                    let (lo, hi) = (b.mean - sd, b.mean + sd);
                    let cap = BAR_WIDTH * 0.2;
                    for seg in [
                        vec![[x, lo], [x, hi]],
                        vec![[x - cap, lo], [x + cap, lo]],
                        vec![[x - cap, hi], [x + cap, hi]],
                    ] {
                        plot_ui.line(
                            Line::new(PlotPoints::from(seg))
                                .color(Color32::from_gray(40))
                                .width(1.5),
                        );
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 5) Teeth vs cognition
// ---------------------------------------------------------------------------

fn cognitive_plot(ui: &mut Ui, cmp: &CognitiveComparison) {
    let scale = ColorScale::mako();

    ui.label(cmp.correlation_line());
    Plot::new("cognitive_plot")
        .x_axis_label("Pérdida dental promedio (%)")
        .y_axis_label("Declive cognitivo promedio (%)")
        .show(ui, |plot_ui| {
            for cell in cmp.density_cells() {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(rect(cell.x, cell.y)))
                        .fill_color(scale.at(cell.level as f64 / DENSITY_LEVELS as f64))
                        .stroke(Stroke::NONE),
                );
            }

            let pts: Vec<[f64; 2]> = cmp
                .merged
                .iter()
                .map(|p| [p.teeth_mean, p.cognitive_mean])
                .collect();
            plot_ui.points(
                Points::new(PlotPoints::from(pts))
                    .radius(3.5)
                    .color(Color32::from_black_alpha(153)),
            );

            for p in &cmp.merged {
                plot_ui.text(
                    Text::new(PlotPoint::new(p.teeth_mean, p.cognitive_mean), &p.state)
                        .color(Color32::GRAY)
                        .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        });
}
