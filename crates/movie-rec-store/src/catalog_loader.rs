use crate::error::{StoreError, StoreResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use movie_rec_models::{Catalog, Movie};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns of the movie CSV, in their positional order
const MOVIE_COLUMNS: [&str; 5] = ["id", "title", "genre", "year", "rating"];

/// A loaded catalog plus bookkeeping about rows that didn't make it in
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// Rows that failed to parse and were skipped
    pub skipped: usize,
    /// Rows whose id was already loaded (later row wins)
    pub replaced: usize,
}

/// Load the movie catalog from a CSV file with a header row
pub fn load_catalog<P: AsRef<Path>>(path: P) -> StoreResult<CatalogLoad> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let load = parse_catalog(file)?;

    info!(
        "Loaded movie catalog from {}: {} movies ({} rows skipped, {} duplicates replaced)",
        path.display(),
        load.catalog.len(),
        load.skipped,
        load.replaced
    );

    Ok(load)
}

/// Parse movie CSV: `id,title,genre,year,rating`
///
/// Columns are located by header name (case-insensitive). A header that
/// doesn't name them falls back to positional columns. Rows that fail to
/// parse are logged and skipped.
pub fn parse_catalog<R: Read>(reader: R) -> StoreResult<CatalogLoad> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut load = CatalogLoad {
        catalog: Catalog::new(),
        skipped: 0,
        replaced: 0,
    };

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable movie row: {}", e);
                load.skipped += 1;
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match parse_movie_row(&record, &columns) {
            Ok(movie) => {
                if let Some(previous) = load.catalog.insert(movie) {
                    warn!(line, id = %previous.id, "Duplicate movie id, keeping the later row");
                    load.replaced += 1;
                }
            }
            Err(reason) => {
                let err = StoreError::InvalidRecord { line, reason };
                warn!("Error parsing movie line: {}", err);
                load.skipped += 1;
            }
        }
    }

    Ok(load)
}

/// Map each movie column to its index in the record
fn resolve_columns(headers: &StringRecord) -> StoreResult<[usize; 5]> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect();
    let available: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    debug!("Available movie CSV columns: {:?}", available);

    let named: Option<Vec<usize>> = MOVIE_COLUMNS
        .iter()
        .map(|column| header_map.get(*column).copied())
        .collect();

    match named {
        Some(indices) => Ok([indices[0], indices[1], indices[2], indices[3], indices[4]]),
        None if headers.len() >= MOVIE_COLUMNS.len() => {
            warn!(
                "Movie CSV header {:?} doesn't name the expected columns, reading them by position",
                available
            );
            Ok([0, 1, 2, 3, 4])
        }
        None => {
            let column = MOVIE_COLUMNS
                .iter()
                .find(|column| !header_map.contains_key(**column))
                .copied()
                .unwrap_or("id");
            Err(StoreError::MissingColumn {
                column: column.to_string(),
                available,
            })
        }
    }
}

fn parse_movie_row(record: &StringRecord, columns: &[usize; 5]) -> Result<Movie, String> {
    let field = |i: usize| {
        record
            .get(columns[i])
            .ok_or_else(|| format!("expected {} fields, found {}", MOVIE_COLUMNS.len(), record.len()))
    };

    let id = field(0)?;
    if id.is_empty() {
        return Err("empty movie id".to_string());
    }
    let title = field(1)?;
    let genre = field(2)?;
    let year_str = field(3)?;
    let year = year_str
        .parse::<i32>()
        .map_err(|e| format!("invalid year '{}': {}", year_str, e))?;
    let rating_str = field(4)?;
    let rating = rating_str
        .parse::<f64>()
        .map_err(|e| format!("invalid rating '{}': {}", rating_str, e))?;
    if !rating.is_finite() {
        return Err(format!("invalid rating '{}'", rating_str));
    }

    Ok(Movie::new(id, title, genre, year, rating))
}
