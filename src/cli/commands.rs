//! Shell command grammar.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use studentdesk_models::{SortConfig, SortOrder, StudentField, StudentId};

/// A record reference typed by the operator: a row number on the current
/// page, or an id (`id:<value>` forces the id reading for numeric ids).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Position(usize),
    Id(StudentId),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("expected a row number or id".to_string());
        }
        if let Some(id) = s.strip_prefix("id:") {
            return Ok(Self::Id(StudentId::new(id)));
        }
        match s.parse::<usize>() {
            Ok(position) => Ok(Self::Position(position)),
            Err(_) => Ok(Self::Id(StudentId::new(s))),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(n) => write!(f, "row {}", n),
            Self::Id(id) => write!(f, "id {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Clear,
    Sort(SortConfig),
    Page(usize),
    PerPage(usize),
    Next,
    Prev,
    Show(Target),
    Add,
    Edit(Target),
    Delete(Target),
    Avatar(Target, PathBuf),
    Reload,
    Logout,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>          filter by name, email, phone, enrollment or date
  clear                  remove the search filter
  sort <field> [asc|desc] sort by name, email, phone, enroll or date
  page <n>               go to page n
  per-page <n>           change the page size
  next | prev            move one page
  show <row|id>          show every field of a record
  add                    add a student
  edit <row|id>          edit a student
  delete <row|id>        delete a student
  avatar <row|id> <file> upload a new avatar for a student
  reload                 fetch the list again
  logout                 sign out
  help                   show this help
  quit                   leave the shell";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };
    if word.is_empty() {
        return Ok(None);
    }

    let mut args = rest.split_whitespace();
    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "find" | "/" => ShellCommand::Search(rest.trim_end().to_string()),
        "clear" => ShellCommand::Clear,
        "sort" => {
            let field = args
                .next()
                .ok_or("usage: sort <field> [asc|desc]")?
                .parse::<StudentField>()?;
            let order = args
                .next()
                .map(str::parse::<SortOrder>)
                .transpose()?
                .unwrap_or_default();
            ShellCommand::Sort(SortConfig::new(field, order))
        }
        "page" | "p" => ShellCommand::Page(number(args.next(), "page <n>")?),
        "per-page" | "perpage" | "pp" => ShellCommand::PerPage(number(args.next(), "per-page <n>")?),
        "next" | "n" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Prev,
        "show" | "view" => ShellCommand::Show(target(args.next())?),
        "add" | "new" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(target(args.next())?),
        "delete" | "rm" => ShellCommand::Delete(target(args.next())?),
        "avatar" => {
            let target = target(args.next())?;
            let path = args.next().ok_or("usage: avatar <row|id> <file>")?;
            ShellCommand::Avatar(target, PathBuf::from(path))
        }
        "reload" | "refresh" => ShellCommand::Reload,
        "logout" => ShellCommand::Logout,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}' (type `help`)", other)),
    };
    Ok(Some(command))
}

fn number(arg: Option<&str>, usage: &str) -> Result<usize, String> {
    arg.ok_or_else(|| format!("usage: {}", usage))?
        .parse()
        .map_err(|_| format!("usage: {}", usage))
}

fn target(arg: Option<&str>) -> Result<Target, String> {
    arg.ok_or_else(|| "expected a row number or id".to_string())?
        .parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("search  jane smith").unwrap(),
            Some(ShellCommand::Search(" jane smith".to_string()))
        );
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_command("sort date desc").unwrap(),
            Some(ShellCommand::Sort(SortConfig::new(
                StudentField::DateAdmission,
                SortOrder::Desc
            )))
        );
        assert_eq!(
            parse_command("sort email").unwrap(),
            Some(ShellCommand::Sort(SortConfig::new(
                StudentField::Email,
                SortOrder::Asc
            )))
        );
        assert!(parse_command("sort").is_err());
        assert!(parse_command("sort age").is_err());
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!(
            parse_command("show 3").unwrap(),
            Some(ShellCommand::Show(Target::Position(3)))
        );
        assert_eq!(
            parse_command("delete id:3").unwrap(),
            Some(ShellCommand::Delete(Target::Id(StudentId::new("3"))))
        );
        assert_eq!(
            parse_command("edit 5f0c-aa").unwrap(),
            Some(ShellCommand::Edit(Target::Id(StudentId::new("5f0c-aa"))))
        );
        assert!(parse_command("edit").is_err());
    }

    #[test]
    fn test_parse_paging() {
        assert_eq!(parse_command("page 4").unwrap(), Some(ShellCommand::Page(4)));
        assert_eq!(
            parse_command("per-page 20").unwrap(),
            Some(ShellCommand::PerPage(20))
        );
        assert!(parse_command("page two").is_err());
        assert_eq!(parse_command("N").unwrap(), Some(ShellCommand::Next));
    }

    #[test]
    fn test_parse_avatar() {
        assert_eq!(
            parse_command("avatar 2 ./me.png").unwrap(),
            Some(ShellCommand::Avatar(
                Target::Position(2),
                PathBuf::from("./me.png")
            ))
        );
        assert!(parse_command("avatar 2").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_command("launch rockets").unwrap_err().contains("unknown"));
    }
}
