//! Line commands understood by the interactive shell.

use std::str::FromStr;

use pf_core::catalog::CategoryFilter;
use pf_core::{ContactForm, Route};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Menu,
    Category(CategoryFilter),
    Search(String),
    ClearSearch,
    Size(usize),
    Page(usize),
    Next,
    Prev,
    Reset,
    Theme,
    Contact(ContactForm),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{command}`: invalid value `{value}`")]
    InvalidArgument { command: &'static str, value: String },
}

pub const HELP: &str = "\
Commands:
  go <page>                      open home, about, projects, experience or contact
  menu                           toggle the navigation menu
  category <all|fullstack|frontend|backend>
  search <text>                  filter projects by name, technology or description
  clear                          clear the search box
  size <3|6|9|12>                projects per page
  page <n> | next | prev         move between pages
  reset                          clear search and category
  theme                          switch light/dark
  contact name|email|subject|message
  help | quit";

fn required<'a>(
    command: &'static str,
    arg: &'a str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(arg)
    }
}

fn number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    required(command, arg, "a number")?
        .parse()
        .map_err(|_| CommandError::InvalidArgument {
            command,
            value: arg.to_string(),
        })
}

fn contact_form(arg: &str) -> Result<ContactForm, CommandError> {
    let arg = required("contact", arg, "name|email|subject|message")?;
    let parts: Vec<&str> = arg.splitn(4, '|').collect();
    match parts.as_slice() {
        [name, email, subject, message] => Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }),
        _ => Err(CommandError::InvalidArgument {
            command: "contact",
            value: arg.to_string(),
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, raw_arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = raw_arg.trim();

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "go" | "open" => {
                let target = required("go", arg, "a page name")?;
                Route::parse_loose(target)
                    .map(Command::Go)
                    .ok_or_else(|| CommandError::InvalidArgument {
                        command: "go",
                        value: target.to_string(),
                    })
            }
            "menu" => Ok(Command::Menu),
            "category" | "cat" => {
                let id = required("category", arg, "a category id")?;
                id.to_ascii_lowercase()
                    .parse()
                    .map(Command::Category)
                    .map_err(|_| CommandError::InvalidArgument {
                        command: "category",
                        value: id.to_string(),
                    })
            }
            // Only the first separator is dropped; the rest is the term as typed
            "search" => Ok(Command::Search(raw_arg.to_string())),
            "clear" => Ok(Command::ClearSearch),
            "size" => number("size", arg).map(Command::Size),
            "page" => number("page", arg).map(Command::Page),
            "next" => Ok(Command::Next),
            "prev" | "previous" => Ok(Command::Prev),
            "reset" => Ok(Command::Reset),
            "theme" => Ok(Command::Theme),
            "contact" => contact_form(arg).map(Command::Contact),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!("go projects".parse(), Ok(Command::Go(Route::Projects)));
        assert_eq!("go /contact".parse(), Ok(Command::Go(Route::Contact)));
        assert_eq!(
            "go blog".parse::<Command>(),
            Err(CommandError::InvalidArgument {
                command: "go",
                value: "blog".to_string()
            })
        );
    }

    #[test]
    fn parses_catalog_commands() {
        assert_eq!(
            "category Backend".parse(),
            Ok(Command::Category(CategoryFilter::Backend))
        );
        assert_eq!("size 9".parse(), Ok(Command::Size(9)));
        assert_eq!("page 2".parse(), Ok(Command::Page(2)));
        assert_eq!("  next ".parse(), Ok(Command::Next));
        assert_eq!("reset".parse(), Ok(Command::Reset));
    }

    #[test]
    fn search_keeps_inner_text() {
        assert_eq!(
            "search real-time chat".parse(),
            Ok(Command::Search("real-time chat".to_string()))
        );
        assert_eq!("search".parse(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn search_keeps_trailing_spaces() {
        assert_eq!(
            "search react ".parse(),
            Ok(Command::Search("react ".to_string()))
        );
        assert_eq!(
            "search  vue".parse(),
            Ok(Command::Search(" vue".to_string()))
        );
    }

    #[test]
    fn numbers_are_validated() {
        assert_eq!(
            "page two".parse::<Command>(),
            Err(CommandError::InvalidArgument {
                command: "page",
                value: "two".to_string()
            })
        );
        assert!(matches!(
            "size".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "size", .. })
        ));
    }

    #[test]
    fn contact_needs_four_fields() {
        let parsed: Command = "contact Ada|ada@example.com||Hi there".parse().unwrap();

        assert_eq!(
            parsed,
            Command::Contact(ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: String::new(),
                message: "Hi there".to_string(),
            })
        );
        assert!("contact Ada|ada@example.com".parse::<Command>().is_err());
    }

    #[test]
    fn unknown_and_empty_lines() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
