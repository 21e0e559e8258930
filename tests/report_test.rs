use movie_shelf::core::report;
use movie_shelf::{Movie, ReportConfig};
use tempfile::TempDir;

fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            title: "Alien".to_string(),
            year: 1979,
            rating: 8.5,
            poster_url: "https://img.example/alien.jpg".to_string(),
        },
        Movie {
            title: "Heat".to_string(),
            year: 1995,
            rating: 8.3,
            poster_url: "N/A".to_string(),
        },
        Movie {
            title: "Cats".to_string(),
            year: 2019,
            rating: 2.7,
            poster_url: "https://img.example/cats.jpg".to_string(),
        },
    ]
}

fn config(temp_dir: &TempDir) -> ReportConfig {
    ReportConfig {
        output_dir: temp_dir.path().join("_static"),
        histogram_path: temp_dir.path().join("movie_rating_histogram.png"),
        page_title: "My Movie App".to_string(),
    }
}

#[test]
fn website_output_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let config = config(&temp_dir);
    let movies = sample_movies();

    let path = report::render_website(&movies, &config).unwrap();
    let first = std::fs::read(&path).unwrap();
    report::render_website(&movies, &config).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn histogram_output_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let config = config(&temp_dir);
    let movies = sample_movies();

    let path = report::render_histogram(&movies, &config).unwrap();
    let first = std::fs::read(&path).unwrap();
    report::render_histogram(&movies, &config).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn website_lists_movies_in_store_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = report::render_website(&sample_movies(), &config(&temp_dir)).unwrap();
    let page = std::fs::read_to_string(path).unwrap();

    let alien = page.find("Alien").unwrap();
    let heat = page.find("Heat").unwrap();
    let cats = page.find("Cats").unwrap();
    assert!(alien < heat && heat < cats);
    assert!(page.contains("<img class=\"movie-poster\" src=\"N/A\">"));
}
