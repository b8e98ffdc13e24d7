//! Interactive command parsing.

use anyhow::{anyhow, bail, Context};
use catalog_core::{CatalogEvent, SortControl, SortDirection, SortField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(CatalogEvent),
    Next,
    Prev,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>         filter by title (empty text clears)
  sort <field> <dir>    field: price|title, dir: asc|desc (or e.g. `sort price-desc`)
  page <n>              jump to page n
  next | prev           step one page
  per-page <n>          change page size
  show                  redraw the listing
  quit                  exit";

pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Event(CatalogEvent::Search(rest.to_string())),
        "sort" => {
            let (field, direction) = parse_sort_args(rest)?;
            Command::Event(CatalogEvent::Sort { field, direction })
        }
        "page" | "p" => Command::Event(CatalogEvent::GoToPage(parse_number(rest, "page")?)),
        "per-page" | "size" => Command::Event(CatalogEvent::SetItemsPerPage(parse_number(
            rest, "page size",
        )?)),
        "next" | "n" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command '{other}' (try `help`)"),
    };
    Ok(command)
}

fn parse_sort_args(rest: &str) -> anyhow::Result<(SortField, SortDirection)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(control), None) => Ok(control.parse::<SortControl>()?.parts()),
        (Some(field), Some(direction)) => Ok((field.parse()?, direction.parse()?)),
        _ => Err(anyhow!("usage: sort <price|title> <asc|desc>")),
    }
}

fn parse_number(raw: &str, what: &str) -> anyhow::Result<usize> {
    raw.parse::<usize>()
        .with_context(|| format!("expected a {what} number, got '{raw}'"))
}
