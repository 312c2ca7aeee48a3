use std::error::Error;

use eframe::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints};

use balloon_ascent::sim::{self, Flight, Sample};
use balloon_ascent::SimConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sim_config.json".into());
    let config = SimConfig::load(&path)?;
    let (mut balloon, payload, settings) = config.build()?;
    let flight = sim::simulate_standard(&mut balloon, &payload, &settings)?;

    let title = if config.simulation.id.is_empty() {
        config.balloon.part_number.clone()
    } else {
        config.simulation.id.clone()
    };
    let app = AscentViz { title, flight, burst_diameter: balloon.spec().burst_diameter };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Balloon Ascent", options, Box::new(|_| Ok(Box::new(app))))?;
    Ok(())
}

struct AscentViz {
    title: String,
    flight: Flight,
    burst_diameter: f64,
}

impl AscentViz {
    fn series(&self, f: impl Fn(&Sample) -> f64) -> PlotPoints<'static> {
        let step = (self.flight.samples.len() / 2000).max(1);
        self.flight
            .samples
            .iter()
            .step_by(step)
            .map(|s| [s.time, f(s)])
            .collect()
    }
}

impl eframe::App for AscentViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(&self.title);
            let peak = self.flight.peak_altitude().map_or(0.0, |s| s.altitude);
            ui.label(format!(
                "Peak: {:.1} km  |  {}  |  {} steps at dt={} s",
                peak / 1000.0,
                self.flight.termination,
                self.flight.samples.len(),
                self.flight.time_step.effective,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / 4.0 - 12.0;

            ui.label("Altitude (m)");
            Plot::new("altitude")
                .height(height)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Altitude", self.series(|s| s.altitude)));
                });

            ui.label("Velocity (m/s)");
            Plot::new("velocity")
                .height(height)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Ascent rate", self.series(|s| s.ascent_rate)));
                });

            ui.label("Acceleration (m/s^2)");
            Plot::new("acceleration")
                .height(height)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Acceleration", self.series(|s| s.ascent_accel)));
                });

            ui.label("Balloon diameter (m)");
            Plot::new("diameter")
                .height(height)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Diameter", self.series(|s| s.balloon_diameter)));
                    plot_ui.hline(HLine::new("Burst", self.burst_diameter));
                });
        });
    }
}
