use crate::config::ReportConfig;
use crate::domain::model::Movie;
use crate::utils::error::{Result, ShelfError};
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

const INDEX_TEMPLATE: &str = include_str!("../../assets/index_template.html");
const STYLESHEET: &str = include_str!("../../assets/style.css");

const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

fn render_err<E: std::fmt::Display>(e: E) -> ShelfError {
    ShelfError::Render {
        message: e.to_string(),
    }
}

/// Index of the width-1.0 bin a rating falls into; 10.0 lands in the top
/// bin rather than an eleventh.
fn bin_index(rating: f64) -> u32 {
    (rating.floor() as u32).min(9)
}

/// Draws the rating histogram PNG. Purely a function of the rating set, so
/// repeated runs over unchanged data produce identical files.
pub fn render_histogram(movies: &[Movie], config: &ReportConfig) -> Result<PathBuf> {
    let mut bins = [0u32; 10];
    for movie in movies {
        bins[bin_index(movie.rating) as usize] += 1;
    }
    let y_max = bins.iter().copied().max().unwrap_or(0).max(1);

    let path = config.histogram_path.clone();
    let root = BitMapBackend::new(&path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    // No captions or tick labels; text rendering would pull in a system
    // font dependency for an image that only needs the bars.
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0f64..10f64, 0u32..y_max + 1)
        .map_err(render_err)?;

    chart
        .draw_series(bins.iter().enumerate().map(|(i, &count)| {
            Rectangle::new(
                [(i as f64 + 0.05, 0), (i as f64 + 0.95, count)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    drop(chart);
    drop(root);
    tracing::debug!("Histogram written to {}", path.display());
    Ok(path)
}

fn serialize_movie(movie: &Movie) -> String {
    format!(
        "<li>\
         <div class=\"movie\">\
         <img class=\"movie-poster\" src=\"{}\">\
         <div class=\"movie-title\">{}</div>\
         <div class=\"movie-year\">{}</div>\
         </div>\
         </li>",
        movie.poster_url, movie.title, movie.year
    )
}

/// HTML fragment for the movie grid, in the same order the store lists
/// them.
fn movie_grid(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "<h2>There is no movie at the moment</h2>".to_string();
    }
    movies.iter().map(serialize_movie).collect()
}

/// Writes `index.html` and `style.css` into the configured output
/// directory.
pub fn render_website(movies: &[Movie], config: &ReportConfig) -> Result<PathBuf> {
    let page = INDEX_TEMPLATE
        .replace(TITLE_PLACEHOLDER, &config.page_title)
        .replace(GRID_PLACEHOLDER, &movie_grid(movies));

    fs::create_dir_all(&config.output_dir)?;
    let index_path = config.output_dir.join("index.html");
    fs::write(&index_path, page)?;
    fs::write(config.output_dir.join("style.css"), STYLESHEET)?;

    tracing::debug!("Website written to {}", index_path.display());
    Ok(index_path)
}
