// ===== benchdash/src/reports/mod.rs =====
use benchdash::catalog;
use benchdash::error::DashResult;
use benchdash::synth::scores::{average_fps, GameResult, PerfRating};
use benchdash::synth::telemetry::{self, CpuMetrics, Severity};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

pub fn print_results(
    program: &str,
    sku: &str,
    build: &str,
    results: &[GameResult],
    with_telemetry: bool,
) {
    println!("\n=== 🎮 {} / {} / {} ===", program, sku, build);
    println!(
        "Average FPS: {}  |  Games: {}  |  {} {}",
        average_fps(results),
        results.len(),
        catalog::RESOLUTION,
        catalog::SETTINGS
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Game").add_attribute(Attribute::Bold),
        Cell::new("FPS").fg(Color::Cyan),
        Cell::new("Pctl"),
        Cell::new("Rating").add_attribute(Attribute::Bold),
    ];
    if with_telemetry {
        header.extend([
            Cell::new("P-core GHz"),
            Cell::new("E-core GHz"),
            Cell::new("IA W"),
            Cell::new("Pkg W"),
            Cell::new("Clipping"),
            Cell::new("Temp °C"),
        ]);
    }
    table.add_row(header);

    for result in results {
        let rating = result.rating();
        let mut row = vec![
            Cell::new(result.game),
            Cell::new(result.score),
            Cell::new(format!("{}%", result.percentile)),
            Cell::new(rating.to_string()).fg(rating_color(rating)),
        ];
        if with_telemetry {
            let m = telemetry::cpu_metrics(result.game);
            row.extend([
                Cell::new(format!("{:.2}", m.p_core_ghz)),
                Cell::new(format!("{:.2}", m.e_core_ghz)),
                Cell::new(format!("{:.1}", m.ia_power_w)),
                Cell::new(format!("{:.1}", m.package_power_w)),
                Cell::new(m.clipping.to_string()).fg(severity_color(m.clipping.severity())),
                Cell::new(m.package_temp_c)
                    .fg(severity_color(telemetry::temp_severity(m.package_temp_c))),
            ]);
        }
        table.add_row(row);
    }

    let numeric_cols = if with_telemetry { 1..=9 } else { 1..=2 };
    for i in numeric_cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
}

#[derive(Serialize)]
struct ReportDoc<'a> {
    program: &'a str,
    sku: &'a str,
    build: &'a str,
    resolution: &'static str,
    settings: &'static str,
    average_fps: u32,
    results: Vec<ReportRow>,
}

#[derive(Serialize)]
struct ReportRow {
    game: &'static str,
    score: u32,
    percentile: u32,
    rating: String,
    telemetry: CpuMetrics,
}

pub fn print_json(program: &str, sku: &str, build: &str, results: &[GameResult]) -> DashResult<()> {
    let doc = ReportDoc {
        program,
        sku,
        build,
        resolution: catalog::RESOLUTION,
        settings: catalog::SETTINGS,
        average_fps: average_fps(results),
        results: results
            .iter()
            .map(|r| ReportRow {
                game: r.game,
                score: r.score,
                percentile: r.percentile,
                rating: r.rating().to_string(),
                telemetry: telemetry::cpu_metrics(r.game),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn rating_color(rating: PerfRating) -> Color {
    match rating {
        PerfRating::Excellent => Color::Green,
        PerfRating::Good => Color::Yellow,
        PerfRating::Fair => Color::Red,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Nominal => Color::Green,
        Severity::Elevated => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}
