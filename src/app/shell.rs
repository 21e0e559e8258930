use crate::config::ReportConfig;
use crate::core::{fuzzy, report, stats};
use crate::domain::model::Movie;
use crate::domain::ports::{MetadataSource, MovieStore};
use crate::utils::error::{Result, ShelfError};
use crate::utils::validation::validate_rating;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu:\n\
                    0. Exit\n\
                    1. List movies\n\
                    2. Add movie\n\
                    3. Delete movie\n\
                    4. Update movie\n\
                    5. Stats\n\
                    6. Random movie\n\
                    7. Search movie\n\
                    8. Movies sorted by rating\n\
                    9. Create rating histogram\n\
                    10. Generate website\n";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    UpdateRating,
    Stats,
    Random,
    Search,
    SortedByRating,
    Histogram,
    Website,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Delete),
            "4" => Some(MenuChoice::UpdateRating),
            "5" => Some(MenuChoice::Stats),
            "6" => Some(MenuChoice::Random),
            "7" => Some(MenuChoice::Search),
            "8" => Some(MenuChoice::SortedByRating),
            "9" => Some(MenuChoice::Histogram),
            "10" => Some(MenuChoice::Website),
            _ => None,
        }
    }
}

/// The menu loop as an explicit state machine. A command always returns to
/// the main menu; invalid input stays there too (re-prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MainMenu,
    Command(MenuChoice),
    Exit,
}

pub fn transition(state: ShellState, input: &str) -> ShellState {
    match state {
        ShellState::MainMenu => match MenuChoice::parse(input) {
            Some(MenuChoice::Exit) => ShellState::Exit,
            Some(choice) => ShellState::Command(choice),
            None => ShellState::MainMenu,
        },
        ShellState::Command(_) => ShellState::MainMenu,
        ShellState::Exit => ShellState::Exit,
    }
}

pub struct Shell<'a, S, M, R, W> {
    store: &'a S,
    metadata: &'a M,
    report_config: ReportConfig,
    input: R,
    output: W,
}

impl<'a, S, M, R, W> Shell<'a, S, M, R, W>
where
    S: MovieStore,
    M: MetadataSource,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, metadata: &'a M, report_config: ReportConfig, input: R, output: W) -> Self {
        Self {
            store,
            metadata,
            report_config,
            input,
            output,
        }
    }

    /// Runs the menu loop until exit or end of input. Component errors are
    /// printed and control returns to the menu; only I/O failures on the
    /// terminal itself propagate.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "********** My Movies Database **********")?;

        let mut state = ShellState::MainMenu;
        loop {
            match state {
                ShellState::MainMenu => {
                    writeln!(self.output, "{}", MENU)?;
                    let line = match self.prompt("Enter your choice (0-10): ")? {
                        Some(line) => line,
                        None => break,
                    };
                    let next = transition(state, &line);
                    if next == ShellState::MainMenu {
                        writeln!(self.output, "Invalid choice")?;
                    }
                    state = next;
                }
                ShellState::Command(choice) => {
                    writeln!(self.output)?;
                    if let Err(e) = self.execute(choice) {
                        match e {
                            ShelfError::Io(e) => return Err(ShelfError::Io(e)),
                            other => writeln!(self.output, "{}", other)?,
                        }
                    }
                    state = transition(state, "");
                }
                ShellState::Exit => break,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::List => self.list_movies(),
            MenuChoice::Add => self.add_movie(),
            MenuChoice::Delete => self.delete_movie(),
            MenuChoice::UpdateRating => self.update_movie(),
            MenuChoice::Stats => self.show_stats(),
            MenuChoice::Random => self.random_movie(),
            MenuChoice::Search => self.search_movies(),
            MenuChoice::SortedByRating => self.sorted_by_rating(),
            MenuChoice::Histogram => self.create_histogram(),
            MenuChoice::Website => self.generate_website(),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the user enters a non-empty value; `None` on end
    /// of input.
    fn prompt_non_empty(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(message)? {
                None => return Ok(None),
                Some(value) if value.is_empty() => {
                    writeln!(self.output, "Please enter a movie name")?;
                }
                Some(value) => return Ok(Some(value)),
            }
        }
    }

    fn list_movies(&mut self) -> Result<()> {
        let movies = self.store.list()?;
        writeln!(self.output, "{} in total", movies.len())?;
        for movie in &movies {
            writeln!(
                self.output,
                "{} ({}): {}",
                movie.title, movie.year, movie.rating
            )?;
        }
        Ok(())
    }

    fn add_movie(&mut self) -> Result<()> {
        let title = match self.prompt_non_empty("Enter new movie name: ")? {
            Some(title) => title,
            None => return Ok(()),
        };

        let movies = self.store.list()?;
        if movies.iter().any(|m| m.title.eq_ignore_ascii_case(&title)) {
            return Err(ShelfError::DuplicateTitle { title });
        }

        let fetched = self.metadata.fetch(&title)?;
        let movie: Movie = fetched.into();
        self.store.add(&movie)?;
        writeln!(self.output, "Movie '{}' added successfully", movie.title)?;
        Ok(())
    }

    fn delete_movie(&mut self) -> Result<()> {
        let title = match self.prompt_non_empty("Enter movie name to delete: ")? {
            Some(title) => title,
            None => return Ok(()),
        };
        self.store.delete(&title)?;
        writeln!(self.output, "Movie '{}' deleted successfully", title)?;
        Ok(())
    }

    fn update_movie(&mut self) -> Result<()> {
        let title = match self.prompt_non_empty("Enter movie name: ")? {
            Some(title) => title,
            None => return Ok(()),
        };

        let rating = match self.prompt("Enter new movie rating (0-10): ")? {
            Some(raw) => {
                let value: f64 = raw.parse().map_err(|_| ShelfError::InvalidInput {
                    message: format!("'{}' is not a number", raw),
                })?;
                validate_rating(value)?;
                value
            }
            None => return Ok(()),
        };

        self.store.update_rating(&title, rating)?;
        writeln!(self.output, "Movie '{}' updated successfully", title)?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let movies = self.store.list()?;
        let stats = stats::rating_stats(&movies)?;

        writeln!(self.output, "Average rating: {:.1}", stats.average)?;
        writeln!(self.output, "Median rating: {}", stats.median)?;
        for movie in &stats.best {
            writeln!(
                self.output,
                "Best movie: {} ({}), {}",
                movie.title, movie.year, movie.rating
            )?;
        }
        for movie in &stats.worst {
            writeln!(
                self.output,
                "Worst movie: {} ({}), {}",
                movie.title, movie.year, movie.rating
            )?;
        }
        Ok(())
    }

    fn random_movie(&mut self) -> Result<()> {
        let movies = self.store.list()?;
        let pick = movies
            .choose(&mut rand::thread_rng())
            .ok_or(ShelfError::EmptyCollection)?;
        writeln!(
            self.output,
            "Your movie for tonight: {}, it's rated {}",
            pick.title, pick.rating
        )?;
        Ok(())
    }

    fn search_movies(&mut self) -> Result<()> {
        let query = match self.prompt_non_empty("Enter part of movie name: ")? {
            Some(query) => query,
            None => return Ok(()),
        };

        let movies = self.store.list()?;
        let titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
        let by_title: HashMap<&str, &Movie> =
            movies.iter().map(|m| (m.title.as_str(), m)).collect();

        let matches = fuzzy::search(&query, &titles);
        if matches.is_empty() {
            writeln!(self.output, "Movie {} not found!", query)?;
            return Ok(());
        }

        // Substring hits print directly; fuzzy hits are suggestions.
        if matches[0].score < 100 {
            writeln!(
                self.output,
                "The movie \"{}\" does not exist. Did you mean:",
                query
            )?;
        }
        for m in &matches {
            if let Some(movie) = by_title.get(m.title.as_str()) {
                writeln!(
                    self.output,
                    "{} ({}): {}",
                    movie.title, movie.year, movie.rating
                )?;
            }
        }
        Ok(())
    }

    fn sorted_by_rating(&mut self) -> Result<()> {
        let mut movies = self.store.list()?;
        movies.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for movie in &movies {
            writeln!(
                self.output,
                "{} ({}): {}",
                movie.title, movie.year, movie.rating
            )?;
        }
        Ok(())
    }

    fn create_histogram(&mut self) -> Result<()> {
        let movies = self.store.list()?;
        if movies.is_empty() {
            return Err(ShelfError::EmptyCollection);
        }
        let path = report::render_histogram(&movies, &self.report_config)?;
        writeln!(self.output, "Histogram saved to {}", path.display())?;
        Ok(())
    }

    fn generate_website(&mut self) -> Result<()> {
        let movies = self.store.list()?;
        report::render_website(&movies, &self.report_config)?;
        writeln!(self.output, "Website was generated successfully.")?;
        Ok(())
    }
}
