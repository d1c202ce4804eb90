//! Actor/movie credit lists.
//!
//! A credit file has one `<actor>|<movie>` line per appearance. Parsing
//! groups the credits both ways: each actor with the movies they appear in,
//! and each movie with its cast, both in first-appearance order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::loader::TextLines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
    movies: Vec<usize>,
}

impl Actor {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    cast: Vec<usize>,
}

impl Movie {
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Every actor and movie seen in a credit list, cross-referenced.
#[derive(Debug, Clone, Default)]
pub struct Filmography {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: FxHashMap<String, usize>,
    movie_index: FxHashMap<String, usize>,
    skipped: Vec<usize>,
}

impl Filmography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens and parses a credit file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let films = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            actors = films.actors.len(),
            movies = films.movies.len(),
            skipped = films.skipped.len(),
            "credit file loaded"
        );
        Ok(films)
    }

    /// Parses `<actor>|<movie>` lines.
    ///
    /// Blank lines are ignored. Lines without a `|` separator, or with an
    /// empty actor or movie, are skipped with a warning and their numbers
    /// kept in [`skipped_lines`](Self::skipped_lines). Fields past the second
    /// one are ignored. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD, so such a name still gets its credit.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut films = Self::new();

        for next in TextLines::new(reader) {
            let (line_no, line) = next?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split('|');
            match (fields.next(), fields.next()) {
                (Some(actor), Some(movie)) if !actor.is_empty() && !movie.is_empty() => {
                    films.add_credit(actor, movie);
                }
                _ => {
                    warn!(line = line_no, "credit line is not of the form `actor|movie`");
                    films.skipped.push(line_no);
                }
            }
        }

        Ok(films)
    }

    /// Records that `actor` appears in `movie`.
    ///
    /// Returns false when this exact credit was already known.
    pub fn add_credit(&mut self, actor: &str, movie: &str) -> bool {
        let actor_at = match self.actor_index.get(actor) {
            Some(&at) => at,
            None => {
                let at = self.actors.len();
                self.actors.push(Actor {
                    name: actor.to_owned(),
                    movies: Vec::new(),
                });
                self.actor_index.insert(actor.to_owned(), at);
                at
            }
        };

        let movie_at = match self.movie_index.get(movie) {
            Some(&at) => at,
            None => {
                let at = self.movies.len();
                self.movies.push(Movie {
                    title: movie.to_owned(),
                    cast: Vec::new(),
                });
                self.movie_index.insert(movie.to_owned(), at);
                at
            }
        };

        if self.movies[movie_at].cast.contains(&actor_at) {
            return false;
        }
        self.movies[movie_at].cast.push(actor_at);
        self.actors[actor_at].movies.push(movie_at);
        true
    }

    /// Actors in first-appearance order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Movies in first-appearance order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actor_index.get(name).map(|&at| &self.actors[at])
    }

    pub fn movie(&self, title: &str) -> Option<&Movie> {
        self.movie_index.get(title).map(|&at| &self.movies[at])
    }

    /// Movies `actor` appears in, in credit order.
    pub fn movies_of<'a>(&'a self, actor: &'a Actor) -> impl Iterator<Item = &'a Movie> + 'a {
        actor.movies.iter().map(|&at| &self.movies[at])
    }

    /// Cast of `movie`, in credit order.
    pub fn cast_of<'a>(&'a self, movie: &'a Movie) -> impl Iterator<Item = &'a Actor> + 'a {
        movie.cast.iter().map(|&at| &self.actors[at])
    }

    /// Line numbers of malformed credit lines.
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn names<'a>(actors: impl Iterator<Item = &'a Actor>) -> Vec<&'a str> {
        actors.map(Actor::name).collect()
    }

    #[test]
    fn groups_credits_both_ways() {
        let text = "A|M1\nB|M1\nA|M2\nC|M2\n";
        let films = Filmography::from_reader(Cursor::new(text)).unwrap();

        assert_eq!(names(films.actors().iter()), vec!["A", "B", "C"]);
        let titles: Vec<&str> = films.movies().iter().map(Movie::title).collect();
        assert_eq!(titles, vec!["M1", "M2"]);

        let a = films.actor("A").unwrap();
        let a_movies: Vec<&str> = films.movies_of(a).map(Movie::title).collect();
        assert_eq!(a_movies, vec!["M1", "M2"]);

        let m2 = films.movie("M2").unwrap();
        assert_eq!(names(films.cast_of(m2)), vec!["A", "C"]);
        assert!(films.skipped_lines().is_empty());
    }

    #[test]
    fn malformed_and_blank_lines() {
        let text = "A|M1\r\n\nno separator\nB|M1|extra\n   \n|M3\n";
        let films = Filmography::from_reader(Cursor::new(text)).unwrap();

        assert_eq!(films.skipped_lines(), &[3, 6]);
        assert_eq!(names(films.actors().iter()), vec!["A", "B"]);
        // The carriage return does not leak into the title.
        assert!(films.movie("M1").is_some());
        assert_eq!(films.movies().len(), 1);
    }

    #[test]
    fn badly_encoded_names_keep_their_credits() {
        let bytes: &[u8] = b"Kevin Bacon (I)|M1\nRen\xe9e Zellweger|M1\nB|M1\n";
        let films = Filmography::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(
            names(films.actors().iter()),
            vec!["Kevin Bacon (I)", "Ren\u{FFFD}e Zellweger", "B"]
        );
        assert_eq!(films.cast_of(films.movie("M1").unwrap()).count(), 3);
        assert!(films.skipped_lines().is_empty());
    }

    #[test]
    fn repeated_credit_is_listed_once() {
        let mut films = Filmography::new();
        assert!(films.add_credit("A", "M"));
        assert!(!films.add_credit("A", "M"));
        assert!(films.add_credit("B", "M"));

        let m = films.movie("M").unwrap();
        assert_eq!(names(films.cast_of(m)), vec!["A", "B"]);
        assert_eq!(films.movies_of(films.actor("A").unwrap()).count(), 1);
    }

    #[test]
    fn names_keep_inner_spaces_and_parentheses() {
        let text = "Kevin Bacon (I)|Footloose (1984)\n";
        let films = Filmography::from_reader(Cursor::new(text)).unwrap();
        assert!(films.actor("Kevin Bacon (I)").is_some());
        assert!(films.movie("Footloose (1984)").is_some());
    }

    #[test]
    fn open_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A|M1").unwrap();
        writeln!(file, "B|M1").unwrap();

        let films = Filmography::open(file.path()).unwrap();
        assert_eq!(films.actors().len(), 2);
        assert!(!films.is_empty());

        let err = Filmography::open(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
