use crate::api::Movie;

/// Movies whose title contains `term`, ignoring case, in their original order.
///
/// An empty term keeps every movie.
pub fn filter<'a>(movies: &'a [Movie], term: &str) -> Vec<&'a Movie> {
    if term.is_empty() {
        return movies.iter().collect();
    }
    let needle = term.to_lowercase();
    movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect()
}
