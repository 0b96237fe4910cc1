//! Drill-down chart panel

use egui::Frame;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotBounds, VLine};

use crate::constants::layout::STANDARD_PADDING;
use crate::constants::subplot::{
    NATIONAL_COLOR, NATIONAL_WIDTH, STATE_COLOR, STATE_WIDTH, TREND_WIDTH, YEAR_LINE_COLOR,
    YEAR_LINE_WIDTH,
};
use crate::constants::text::LEGEND_TITLE;
use crate::state::AppState;

/// Drill-down chart: the selected region against the national mean
pub fn render_subplot(state: &AppState, ui: &mut egui::Ui) {
    profiling::scope!("render_subplot");

    let Some(content) = state.subplot.content() else {
        return;
    };

    Frame::window(ui.style())
        .inner_margin(STANDARD_PADDING)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&content.title);
                ui.label(&content.summary);
            });
            ui.add_space(STANDARD_PADDING);

            let [mut x0, mut x1] = content.x_domain;
            if x1 <= x0 {
                x0 -= 1.0;
                x1 += 1.0;
            }
            let [y0, y1] = content.y_domain;

            Plot::new("drilldown")
                .legend(Legend::default().position(Corner::LeftTop))
                .x_axis_label("Year")
                .y_axis_label(LEGEND_TITLE)
                .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
                .show_grid([false, true])
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));

                    plot_ui.line(
                        Line::new("U.S. mean", content.national_curve.clone())
                            .color(NATIONAL_COLOR)
                            .width(NATIONAL_WIDTH)
                            .style(LineStyle::Dashed { length: 6.0 }),
                    );
                    plot_ui.line(
                        Line::new("State", content.state_curve.clone())
                            .color(STATE_COLOR)
                            .width(STATE_WIDTH),
                    );

                    let trends = [
                        ("U.S. trend", content.national_trend, NATIONAL_COLOR),
                        ("State trend", content.state_trend, STATE_COLOR),
                    ];
                    for (name, trend, color) in trends {
                        let Some(trend) = trend else { continue };
                        plot_ui.line(
                            Line::new(name, vec![[x0, trend.predict(x0)], [x1, trend.predict(x1)]])
                                .color(color.gamma_multiply(0.6))
                                .width(TREND_WIDTH)
                                .style(LineStyle::Dotted { spacing: 4.0 }),
                        );
                    }

                    if let Some(indicator) = state.subplot.indicator() {
                        plot_ui.vline(
                            VLine::new(indicator.label(), indicator.year as f64)
                                .color(YEAR_LINE_COLOR)
                                .width(YEAR_LINE_WIDTH)
                                .style(LineStyle::Dashed { length: 4.0 }),
                        );
                    }
                });
        });
}
