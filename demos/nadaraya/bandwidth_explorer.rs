//! Interactive bandwidth exploration for Nadaraya-Watson regression.
//!
//! This example fits mean monthly temperature against sales over two years
//! and renders the estimated curve for a chosen bandwidth:
//! - A small bandwidth tracks individual observations (jagged, overfitting)
//! - A large bandwidth gives a smoother curve that can miss local structure
//!
//! Usage:
//!
//! ```text
//! cargo run --example bandwidth_explorer -- 0.8 2.0 6.5
//! RUST_LOG=debug cargo run --example bandwidth_explorer
//! ```
//!
//! Bandwidths outside the explorer range are clamped to it.

#[cfg(feature = "std")]
use nadaraya::prelude::*;
#[cfg(feature = "std")]
use std::env;

// ============================================================================
// Explorer Configuration
// ============================================================================

/// Presentation settings for the explorer. The estimator never sees these.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
struct ExplorerConfig {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    min_bandwidth: f64,
    max_bandwidth: f64,
    default_bandwidth: f64,
    step: f64,
    grid_points: usize,
    plot_width: usize,
    plot_height: usize,
}

#[cfg(feature = "std")]
impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "Mean temperature vs. sales",
            x_label: "Mean temperature (x_i)",
            y_label: "Sales (y_i)",
            min_bandwidth: 0.1,
            max_bandwidth: 10.0,
            default_bandwidth: 2.0,
            step: 0.1,
            grid_points: 200,
            plot_width: 72,
            plot_height: 20,
        }
    }
}

#[cfg(feature = "std")]
impl ExplorerConfig {
    /// Snap a requested bandwidth to the slider range and step.
    fn slider_value(&self, requested: f64) -> f64 {
        if !requested.is_finite() {
            return self.default_bandwidth;
        }
        let clamped = requested.clamp(self.min_bandwidth, self.max_bandwidth);
        let steps = ((clamped - self.min_bandwidth) / self.step).round();
        (self.min_bandwidth + steps * self.step).min(self.max_bandwidth)
    }
}

// ============================================================================
// Reference Data
// ============================================================================

/// Mean monthly temperature (x) and sales (y) over two years.
#[cfg(feature = "std")]
fn temperature_sales() -> (Vec<f64>, Vec<f64>) {
    let x = vec![
        7.6, 6.0, 9.4, 14.5, 19.8, 22.5, 27.7, 28.3, 25.6, 18.8, 13.3, 8.8, 4.9, 6.6, 9.8, 15.7,
        19.5, 23.1, 28.5, 26.4, 23.2, 18.7, 13.1, 8.4,
    ];
    let y = vec![
        172.0, 144.0, 190.0, 202.0, 197.0, 276.0, 292.0, 220.0, 214.0, 172.0, 202.0, 240.0, 152.0,
        117.0, 176.0, 182.0, 181.0, 251.0, 249.0, 214.0, 167.0, 159.0, 185.0, 228.0,
    ];
    (x, y)
}

// ============================================================================
// Main
// ============================================================================

#[cfg(feature = "std")]
fn main() {
    env_logger::init();

    let config = ExplorerConfig::default();
    let requested: Vec<f64> = env::args()
        .skip(1)
        .filter_map(|arg| match arg.parse::<f64>() {
            Ok(h) => Some(h),
            Err(_) => {
                eprintln!("Ignoring '{}': not a number", arg);
                None
            }
        })
        .collect();

    let bandwidths: Vec<f64> = if requested.is_empty() {
        vec![config.default_bandwidth]
    } else {
        requested.iter().map(|&h| config.slider_value(h)).collect()
    };

    println!("{}", "=".repeat(80));
    println!("Nadaraya-Watson Estimator - {}", config.title);
    println!(
        "Bandwidth range: {:.1} to {:.1} (step {:.1})",
        config.min_bandwidth, config.max_bandwidth, config.step
    );
    println!("{}", "=".repeat(80));
    println!();

    let (x, y) = temperature_sales();
    for h in bandwidths {
        if let Err(e) = explore(&config, &x, &y, h) {
            eprintln!("Could not draw the regression curve: {}", e);
            eprintln!("Please check the '{}' setting.", e.parameter());
        }
    }
}

#[cfg(not(feature = "std"))]
fn main() {}

/// Fit, print and plot the curve for one bandwidth.
#[cfg(feature = "std")]
fn explore(
    config: &ExplorerConfig,
    x: &[f64],
    y: &[f64],
    bandwidth: f64,
) -> Result<(), InvalidParameterError> {
    println!("Bandwidth = {:.1}", bandwidth);
    println!("{}", "-".repeat(80));

    let model = NadarayaWatson::new()
        .bandwidth(bandwidth)
        .return_marginal_effects()
        .return_diagnostics()
        .build(x, y)?;

    let result = model.evaluate_grid(config.grid_points);
    println!("{}", result);
    println!("{}", render_plot(config, x, y, &result));
    println!();

    Ok(())
}

// ============================================================================
// Character Plot
// ============================================================================

/// Render the observations ('o') and the estimated curve ('*') on a text canvas.
#[cfg(feature = "std")]
fn render_plot(config: &ExplorerConfig, x: &[f64], y: &[f64], curve: &KernelRegResult<f64>) -> String {
    let (width, height) = (config.plot_width, config.plot_height);

    let curve_points: Vec<(f64, f64)> = curve.defined_points().collect();
    let all_x = x.iter().copied().chain(curve_points.iter().map(|p| p.0));
    let all_y = y.iter().copied().chain(curve_points.iter().map(|p| p.1));

    let (x_min, x_max) = all_x.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let (y_min, y_max) = all_y.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let x_span = (x_max - x_min).max(f64::EPSILON);
    let y_span = (y_max - y_min).max(f64::EPSILON);

    let column = |v: f64| (((v - x_min) / x_span) * (width - 1) as f64).round() as usize;
    let row = |v: f64| (((y_max - v) / y_span) * (height - 1) as f64).round() as usize;

    let mut canvas = vec![vec![' '; width]; height];
    for &(cx, cy) in &curve_points {
        canvas[row(cy)][column(cx)] = '*';
    }
    for (&px, &py) in x.iter().zip(y.iter()) {
        canvas[row(py)][column(px)] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!("{} (o = observed, * = estimate)\n", config.y_label));
    for (i, line) in canvas.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>8.1}", y_max)
        } else if i == height - 1 {
            format!("{:>8.1}", y_min)
        } else {
            " ".repeat(8)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(line.iter());
        out.push('\n');
    }
    out.push_str(&format!("{} +{}\n", " ".repeat(8), "-".repeat(width)));
    out.push_str(&format!(
        "{}  {:<8.1}{:^w$}{:>8.1}",
        " ".repeat(8),
        x_min,
        config.x_label,
        x_max,
        w = width.saturating_sub(16)
    ));
    out
}
