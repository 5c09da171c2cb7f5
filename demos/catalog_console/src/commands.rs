// catalog_console/src/commands.rs

//! Parsing of the console's line commands.

use crate::errors::{AppError, Result};
use catalog_admin::form::FormAction;
use catalog_admin::ProductId;

pub const HELP: &str = "\
Commands:
  login <username> <password>   sign in and persist the session
  logout                        forget the session
  home                          product count and greeting
  list                          products matching the current search
  search <keyword...>           filter by name, description or category
  clear                         drop the search keyword
  reload                        fetch products again
  categories                    list categories
  category <id>                 products of one category (server side)
  add                           open the form for a new product
  edit <id>                     open the form pre-filled with a product
  set name|desc|price|category <value>
  show                          print the current form
  save                          submit the form
  cancel                        close the form
  delete <id>                   remove a product (asks first)
  help                          this text
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Login { username: String, password: String },
  Logout,
  Home,
  List,
  Search(String),
  Clear,
  Reload,
  Categories,
  Category(i64),
  Add,
  Edit(ProductId),
  Set(FormAction),
  Show,
  Save,
  Cancel,
  Delete(ProductId),
  Help,
  Quit,
}

fn parse_id(raw: Option<&str>, what: &str) -> Result<i64> {
  raw
    .ok_or_else(|| AppError::Usage(format!("{} <id>", what)))?
    .parse::<i64>()
    .map_err(|_| AppError::Usage(format!("{} expects a numeric id", what)))
}

fn parse_set(rest: &str) -> Result<FormAction> {
  let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
  let value = value.trim();
  match field {
    "name" => Ok(FormAction::SetName(value.to_string())),
    "desc" | "description" => Ok(FormAction::SetDescription(value.to_string())),
    "price" => Ok(FormAction::price_from_input(value)),
    "category" => Ok(FormAction::category_from_input(value)),
    _ => Err(AppError::Usage("set name|desc|price|category <value>".to_string())),
  }
}

/// Parses one input line. `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>> {
  let line = line.trim();
  if line.is_empty() {
    return Ok(None);
  }
  let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
  let rest = rest.trim();
  let mut args = rest.split_whitespace();

  let command = match verb.to_ascii_lowercase().as_str() {
    "login" => match (args.next(), args.next()) {
      (Some(username), Some(password)) => Command::Login {
        username: username.to_string(),
        password: password.to_string(),
      },
      _ => return Err(AppError::Usage("login <username> <password>".to_string())),
    },
    "logout" => Command::Logout,
    "home" => Command::Home,
    "list" | "ls" => Command::List,
    "search" => Command::Search(rest.to_string()),
    "clear" => Command::Clear,
    "reload" => Command::Reload,
    "categories" => Command::Categories,
    "category" => Command::Category(parse_id(args.next(), "category")?),
    "add" => Command::Add,
    "edit" => Command::Edit(parse_id(args.next(), "edit")?),
    "set" => Command::Set(parse_set(rest)?),
    "show" => Command::Show,
    "save" => Command::Save,
    "cancel" => Command::Cancel,
    "delete" | "rm" => Command::Delete(parse_id(args.next(), "delete")?),
    "help" | "?" => Command::Help,
    "quit" | "exit" => Command::Quit,
    other => return Err(AppError::Usage(format!("unknown command '{}', try 'help'", other))),
  };
  Ok(Some(command))
}
