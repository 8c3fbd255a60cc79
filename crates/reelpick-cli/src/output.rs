use clap::ValueEnum;
use comfy_table::{presets, modifiers, Attribute, Cell, CellAlignment, Table};
use movie_rec_models::Movie;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", msg.as_ref(), |m| println!("{} {}", "✓".green(), m));
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message("info", msg.as_ref(), |m| println!("{}", m));
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", msg.as_ref(), |m| println!("{} {}", "⚠".yellow(), m));
    }

    /// Section heading; only rendered in human mode
    pub fn heading(&self, title: impl AsRef<str>) {
        if self.quiet || self.format != OutputFormat::Human {
            return;
        }
        println!("\n{}", format!("=== {} ===", title.as_ref()).bright_cyan().bold());
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }
        self.print_json(data);
    }

    /// Render a list of movies; `empty_msg` is shown when there are none
    pub fn movies(&self, movies: &[&Movie], numbered: bool, empty_msg: &str) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                if movies.is_empty() {
                    println!("{}", empty_msg);
                    return;
                }
                println!("{}", movie_table(movies, numbered));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.json(&json!(movies));
            }
        }
    }

    fn message(&self, kind: &str, msg: &str, human: impl FnOnce(&str)) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => human(msg),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind, "message": msg }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}

pub fn movie_table(movies: &[&Movie], numbered: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);

    let mut header = Vec::new();
    if numbered {
        header.push(Cell::new("#").add_attribute(Attribute::Bold));
    }
    for title in ["ID", "Title", "Genre", "Year", "Rating"] {
        header.push(Cell::new(title).add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    for (i, movie) in movies.iter().enumerate() {
        let mut row = Vec::new();
        if numbered {
            row.push(Cell::new(i + 1).set_alignment(CellAlignment::Right));
        }
        row.push(Cell::new(&movie.id));
        row.push(Cell::new(&movie.title));
        row.push(Cell::new(&movie.genre));
        row.push(Cell::new(movie.year).set_alignment(CellAlignment::Right));
        row.push(Cell::new(format!("{:.1}", movie.rating)).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }

    table
}
