//! egui window showing p–V diagrams side by side.
//!
//! See [`DiagramPlot`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, Points};

use cycles_thermo::CycleDiagram;

use crate::style::{Trace, heading, traces};

/// Configuration for rendering a [`DiagramPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Ideal cycles").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each leg by its process.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects diagrams and displays them in one window, one plot per column.
///
/// # Example
///
/// ```ignore
/// let params = CycleParameters::default();
/// let mut plot = DiagramPlot::new();
/// for cycle in Cycle::ALL {
///     plot = plot.add(build_diagram(cycle, &params, &LegFilter::all())?);
/// }
/// plot.show(ShowConfig::new().title("Ideal cycles").legend())?;
/// ```
#[derive(Debug, Default)]
pub struct DiagramPlot {
    panels: Vec<Panel>,
}

#[derive(Debug)]
struct Panel {
    heading: String,
    traces: Vec<Trace>,
    states: Vec<[f64; 2]>,
}

impl DiagramPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagram as the next column.
    #[must_use]
    pub fn add(mut self, diagram: CycleDiagram) -> Self {
        self.panels.push(Panel {
            heading: heading(&diagram),
            traces: traces(&diagram),
            states: diagram.states.iter().copied().map(Into::into).collect(),
        });
        self
    }

    /// Returns the number of collected diagrams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if no diagram has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Opens a blocking egui window displaying all collected diagrams.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    panels: self.panels,
                    legend: config.legend,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders collected diagrams.
struct PlotApp {
    panels: Vec<Panel>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.panels.is_empty() {
                ui.label("No diagrams to show.");
                return;
            }

            ui.columns(self.panels.len(), |columns| {
                for (i, (ui, panel)) in columns.iter_mut().zip(&self.panels).enumerate() {
                    ui.heading(panel.heading.as_str());

                    let mut plot = Plot::new(("pv_diagram", i))
                        .x_axis_label("Volume")
                        .y_axis_label("Pressure");
                    if self.legend {
                        plot = plot.legend(Legend::default());
                    }

                    plot.show(ui, |plot_ui| {
                        for trace in &panel.traces {
                            let [r, g, b] = trace.style.color;
                            plot_ui.line(
                                Line::new(trace.points.clone())
                                    .name(trace.style.label)
                                    .color(Color32::from_rgb(r, g, b)),
                            );
                        }
                        plot_ui.points(
                            Points::new(panel.states.clone())
                                .name("States")
                                .radius(3.0)
                                .color(Color32::BLACK),
                        );
                    });
                }
            });
        });
    }
}
