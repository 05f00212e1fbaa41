//! Chart rendering
//!
//! Static PNG charts for the derived tables, drawn with plotters into an
//! RGB buffer and encoded with the image crate.

use std::collections::BTreeMap;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{NormalizedFood, Sex, SexCounts};
use crate::names::NameShare;

// ============================================================================
// Colors
// ============================================================================

const COLOR_FEMALE: RGBColor = RGBColor(0, 128, 0);
const COLOR_MALE: RGBColor = RGBColor(0, 0, 255);
const COLOR_TOTAL: RGBColor = RGBColor(0, 0, 0);
const COLOR_BAR: RGBColor = RGBColor(112, 48, 160);

/// Longest food label drawn under a bar
const MAX_LABEL_CHARS: usize = 14;

fn chart_err<E: std::fmt::Display>(e: E) -> AnalysisError {
    AnalysisError::Chart(e.to_string())
}

/// One line of a line chart
struct Series<'a> {
    label: &'a str,
    color: RGBColor,
    points: Vec<(i32, f64)>,
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> AnalysisResult<Vec<u8>> {
    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| chart_err("Failed to create image from buffer"))?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(chart_err)?;
    Ok(png_bytes)
}

fn line_chart(
    title: &str,
    y_desc: &str,
    series: &[Series],
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let all_points = || series.iter().flat_map(|s| s.points.iter());
    if all_points().next().is_none() {
        return Err(chart_err("No data to chart"));
    }

    let x_min = all_points().map(|p| p.0).min().unwrap_or(0);
    let x_max = all_points().map(|p| p.0).max().unwrap_or(0).max(x_min + 1);
    let y_max = all_points().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let y_min = all_points().map(|p| p.1).fold(f64::INFINITY, f64::min).min(0.0);
    let y_max = if y_max > y_min { y_max * 1.05 } else { y_min + 1.0 };

    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(y_desc)
            .draw()
            .map_err(chart_err)?;

        for s in series {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(s.points.clone(), color.stroke_width(2)))
                .map_err(chart_err)?
                .label(s.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    encode_png(buffer, width, height)
}

/// Total births by year, one line per sex
pub fn births_by_sex_chart(
    births: &BTreeMap<u16, SexCounts>,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let points = |f: fn(&SexCounts) -> u64| {
        births
            .iter()
            .map(|(year, c)| (i32::from(*year), f(c) as f64))
            .collect::<Vec<_>>()
    };

    line_chart(
        "Total births by year and sex",
        "Births",
        &[
            Series { label: "Female", color: COLOR_FEMALE, points: points(|c| c.female) },
            Series { label: "Male", color: COLOR_MALE, points: points(|c| c.male) },
        ],
        width,
        height,
    )
}

/// One name's births by year, one line per sex
pub fn name_history_chart(
    name: &str,
    history: &BTreeMap<u16, SexCounts>,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let points = |f: fn(&SexCounts) -> u64| {
        history
            .iter()
            .map(|(year, c)| (i32::from(*year), f(c) as f64))
            .collect::<Vec<_>>()
    };

    line_chart(
        &format!("Births named {} by sex", name),
        "Births",
        &[
            Series { label: "Female", color: COLOR_FEMALE, points: points(|c| c.female) },
            Series { label: "Male", color: COLOR_MALE, points: points(|c| c.male) },
        ],
        width,
        height,
    )
}

/// Birth-weighted average name length by year
pub fn average_length_chart(
    averages: &BTreeMap<u16, f64>,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let points = averages.iter().map(|(year, avg)| (i32::from(*year), *avg)).collect();

    line_chart(
        "Average name length by year",
        "Characters",
        &[Series { label: "All names", color: COLOR_TOTAL, points }],
        width,
        height,
    )
}

fn short_label(identifier: &str) -> String {
    let first = identifier.split(',').next().unwrap_or(identifier).trim();
    if first.chars().count() > MAX_LABEL_CHARS {
        let truncated: String = first.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", truncated)
    } else {
        first.to_string()
    }
}

/// Bar chart of the top `top_n` ranked foods by protein per kcal.
///
/// Foods without a computed density are skipped.
pub fn protein_density_chart(
    ranked: &[NormalizedFood],
    top_n: usize,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let bars: Vec<(String, f64)> = ranked
        .iter()
        .filter_map(|f| f.protein_per_kcal.map(|d| (short_label(&f.identifier), d)))
        .take(top_n)
        .collect();

    if bars.is_empty() {
        return Err(chart_err("No ranked foods to chart"));
    }

    let y_max = bars.iter().map(|b| b.1).fold(0.0, f64::max).max(0.01) * 1.1;
    let n = bars.len() as i32;

    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Protein per kcal", ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(60)
            .build_cartesian_2d(0..n, 0.0..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&|x| {
                bars.get(*x as usize)
                    .map(|b| b.0.clone())
                    .unwrap_or_default()
            })
            .y_desc("g protein / kcal")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, (_, density))| {
                let x = i as i32;
                Rectangle::new([(x, 0.0), (x + 1, *density)], COLOR_BAR.mix(0.8).filled())
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    encode_png(buffer, width, height)
}

/// Number of (name, sex) rows recorded per year
pub fn unique_names_chart(
    unique: &BTreeMap<u16, usize>,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    let points = unique.iter().map(|(year, n)| (i32::from(*year), *n as f64)).collect();

    line_chart(
        "Number of unique names by year",
        "Names",
        &[Series { label: "All names", color: COLOR_TOTAL, points }],
        width,
        height,
    )
}

/// Horizontal bars: percentage of years each name was the most popular for `sex`
pub fn top_name_share_chart(
    shares: &[NameShare],
    sex: Sex,
    width: u32,
    height: u32,
) -> AnalysisResult<Vec<u8>> {
    if shares.is_empty() {
        return Err(chart_err("No top names to chart"));
    }

    let (title, color) = match sex {
        Sex::Female => ("Most popular female names (% of years)", COLOR_FEMALE),
        Sex::Male => ("Most popular male names (% of years)", COLOR_MALE),
    };
    let n = shares.len() as i32;
    let x_max = shares.iter().map(|s| s.pct).fold(0.0, f64::max).max(1.0) * 1.1;

    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(0.0..x_max, 0..n)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(shares.len())
            .y_label_formatter(&|y| {
                shares
                    .get(*y as usize)
                    .map(|s| s.name.clone())
                    .unwrap_or_default()
            })
            .x_desc("% of years")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(shares.iter().enumerate().map(|(i, share)| {
                let y = i as i32;
                Rectangle::new([(0.0, y), (share.pct, y + 1)], color.mix(0.8).filled())
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    encode_png(buffer, width, height)
}

/// PNG file name for a name's history chart; only ASCII letters and digits survive
pub fn name_chart_file(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if stem.is_empty() {
        "name_history.png".to_string()
    } else {
        format!("name_{}.png", stem)
    }
}
