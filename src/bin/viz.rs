use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use nucleon_sim::{presets, RunSummary, Simulation};

fn main() -> eframe::Result {
    env_logger::init();
    let simulation = presets::head_on().run();
    let summary = RunSummary::from_simulation(&simulation);

    let app = SimViz { simulation, summary };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1060.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Relativistic Dynamics", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    simulation: Simulation,
    summary: RunSummary,
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let p1 = self.simulation.nucleon1_positions();
        let p2 = self.simulation.nucleon2_positions();
        let step = (p1.len() / 2000).max(1);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Nucleon motion");
            ui.label(format!(
                "Steps: {}  |  dt: {:e}  |  Closest approach: {}  |  Final separation: {:.3e}",
                self.summary.steps,
                self.simulation.time_step(),
                self.summary
                    .closest_approach
                    .map_or("n/a".to_string(), |a| format!("{:.3e} (step {})", a.separation, a.step)),
                self.summary.final_separation,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let line1: PlotPoints = p1.iter().step_by(step).map(|p| [p.x, p.y]).collect();
            let line2: PlotPoints = p2.iter().step_by(step).map(|p| [p.x, p.y]).collect();
            Plot::new("trajectories")
                .legend(Legend::default())
                .x_axis_label("X coordinate")
                .y_axis_label("Y coordinate")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Nucleon 1", line1));
                    plot_ui.line(Line::new("Nucleon 2", line2));
                });
        });
    }
}
