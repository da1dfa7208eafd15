//! Line-oriented command language over one in-memory catalog

use anyhow::{anyhow, bail, Context, Result};
use bookshelf_library::{Catalog, Rejection};
use console::style;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add NAME               add a book with no genre
  set-genre NAME GENRE   assign a known genre to a book
  genre NAME             show the genre of a book
  books                  list every book with its genre
  by-genre GENRE         list books of one genre
  children               list books safe for children
  fav NAME               add a book to the favorites
  unfav NAME             remove a book from the favorites
  favorites              list the favorites
  stats                  show catalog statistics
  export                 print the catalog as JSON
  help                   show this help
  quit                   end the session
Quote names that contain spaces: add \"Тайна забытого ключа\"";

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    SetGenre { name: String, genre: String },
    Genre(String),
    Books,
    ByGenre(String),
    Children,
    Fav(String),
    Unfav(String),
    Favorites,
    Stats,
    Export,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(trimmed).context("Could not split command line")?;
        let Some((verb, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match verb.as_str() {
            "add" => Self::Add(one(verb, args)?),
            "set-genre" => {
                let [name, genre] = args else {
                    bail!("'{}' takes 2 arguments, got {}", verb, args.len());
                };
                Self::SetGenre {
                    name: name.clone(),
                    genre: genre.clone(),
                }
            }
            "genre" => Self::Genre(one(verb, args)?),
            "books" => none(verb, args, Self::Books)?,
            "by-genre" => Self::ByGenre(one(verb, args)?),
            "children" => none(verb, args, Self::Children)?,
            "fav" => Self::Fav(one(verb, args)?),
            "unfav" => Self::Unfav(one(verb, args)?),
            "favorites" => none(verb, args, Self::Favorites)?,
            "stats" => none(verb, args, Self::Stats)?,
            "export" => none(verb, args, Self::Export)?,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list", other),
        };

        Ok(Some(command))
    }
}

fn one(verb: &str, args: &[String]) -> Result<String> {
    match args {
        [arg] => Ok(arg.clone()),
        _ => Err(anyhow!("'{}' takes 1 argument, got {}", verb, args.len())),
    }
}

fn none(verb: &str, args: &[String], command: ShellCommand) -> Result<ShellCommand> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(anyhow!("'{}' takes no arguments, got {}", verb, args.len()))
    }
}

/// Whether the session should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A catalog plus the writer its results are reported to
pub struct Session<W: Write> {
    catalog: Catalog,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(catalog: Catalog, out: W) -> Self {
        Self { catalog, out }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until end of input or `quit`
    ///
    /// A bad line is reported and skipped. Only I/O failures end the session
    /// early.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "{} ", style("bookshelf>").cyan().bold())?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;

            if self.run_line(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parses and executes one line
    pub fn run_line(&mut self, line: &str) -> Result<Flow> {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{} {:#}", style("error:").red().bold(), e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Add(name) => {
                let result = self.catalog.try_add_new_book(&name);
                self.report(result, &format!("Added '{}'", name))?;
            }
            ShellCommand::SetGenre { name, genre } => {
                let result = self.catalog.try_set_book_genre(&name, &genre);
                self.report(result, &format!("'{}' is now filed under {}", name, genre))?;
            }
            ShellCommand::Genre(name) => match self.catalog.get_book_genre(&name) {
                Some("") => writeln!(self.out, "{}: (no genre)", name)?,
                Some(genre) => writeln!(self.out, "{}: {}", name, genre)?,
                None => writeln!(self.out, "'{}' is not in the catalog", name)?,
            },
            ShellCommand::Books => self.print_books()?,
            ShellCommand::ByGenre(genre) => {
                let names = self.catalog.get_books_with_specific_genre(&genre);
                print_names(&mut self.out, &names, &format!("No books filed under '{}'", genre))?;
            }
            ShellCommand::Children => {
                let names = self.catalog.get_books_for_children();
                print_names(&mut self.out, &names, "No books for children")?;
            }
            ShellCommand::Fav(name) => {
                let result = self.catalog.try_add_book_in_favorites(&name);
                self.report(result, &format!("Added '{}' to favorites", name))?;
            }
            ShellCommand::Unfav(name) => {
                let result = self.catalog.try_delete_book_from_favorites(&name);
                self.report(result, &format!("Removed '{}' from favorites", name))?;
            }
            ShellCommand::Favorites => {
                let names = self.catalog.get_list_of_favorites_books();
                print_names(&mut self.out, &names, "No favorite books")?;
            }
            ShellCommand::Stats => self.print_stats()?,
            ShellCommand::Export => {
                let json = self
                    .catalog
                    .snapshot()
                    .to_json_pretty()
                    .context("Failed to serialize catalog")?;
                writeln!(self.out, "{}", json)?;
            }
            ShellCommand::Help => writeln!(self.out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: Result<(), Rejection>, success: &str) -> Result<()> {
        match result {
            Ok(()) => writeln!(self.out, "{} {}", style("✓").green().bold(), success)?,
            Err(rejection) => {
                writeln!(self.out, "{} Unchanged: {}", style("✗").yellow().bold(), rejection)?
            }
        }
        Ok(())
    }

    fn print_books(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.out, "No books in catalog. Use 'add' to create one.")?;
            return Ok(());
        }

        for (i, book) in self.catalog.books().enumerate() {
            let genre = if book.has_genre() {
                book.genre.clone()
            } else {
                "no genre".to_string()
            };
            write!(self.out, "{:>3}. {} [{}]", i + 1, style(&book.name).bold(), genre)?;
            if book.is_favorite {
                write!(self.out, "  {}", style("★").yellow())?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn print_stats(&mut self) -> Result<()> {
        let stats = self.catalog.stats();
        writeln!(self.out, "{}", style("Catalog Statistics").bold().cyan())?;
        writeln!(self.out, "Total books: {}", stats.total_books)?;
        writeln!(self.out, "Without genre: {}", stats.books_without_genre)?;
        writeln!(self.out, "For children: {}", stats.books_for_children)?;
        writeln!(self.out, "Favorites: {}", stats.favorite_count)?;
        for (genre, count) in &stats.per_genre {
            writeln!(self.out, "  {}: {}", genre, count)?;
        }
        Ok(())
    }
}

fn print_names<W: Write>(out: &mut W, names: &[&str], empty: &str) -> Result<()> {
    if names.is_empty() {
        writeln!(out, "{}", empty)?;
    }
    for name in names {
        writeln!(out, "  {}", name)?;
    }
    Ok(())
}
