// catalog_console/src/main.rs

mod commands;
mod config;
mod errors;
mod state;

use crate::commands::{Command, HELP};
use crate::config::ConsoleConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::state::ConsoleState;

use anyhow::Context;
use async_trait::async_trait;
use catalog_admin::navigation::{self, Route};
use catalog_admin::pages::{DELETE_PRODUCT_FAILED, LOAD_PRODUCTS_FAILED, SAVE_PRODUCT_FAILED};
use catalog_admin::{Confirm, Product};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// Asks on the terminal; anything but `y`/`yes` declines.
struct TerminalConfirm {
  input: InputLines,
}

#[async_trait]
impl Confirm for TerminalConfirm {
  async fn confirm(&self, message: &str) -> bool {
    if prompt(&format!("{} [y/N] ", message)).await.is_err() {
      return false;
    }
    match self.input.lock().await.next_line().await {
      Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
      _ => false,
    }
  }
}

async fn prompt(text: &str) -> AppResult<()> {
  let mut stdout = tokio::io::stdout();
  stdout
    .write_all(text.as_bytes())
    .await
    .context("writing prompt to the terminal")?;
  stdout.flush().await.context("flushing the terminal")?;
  Ok(())
}

fn print_products(products: &[Product]) {
  if products.is_empty() {
    println!("(no products)");
    return;
  }
  println!("{:>5}  {:<28} {:>10}  {:<16} {}", "ID", "NAME", "PRICE", "CATEGORY", "DESCRIPTION");
  for p in products {
    println!(
      "{:>5}  {:<28} {:>10}  {:<16} {}",
      p.id,
      p.name,
      p.price_display(),
      p.category_name.as_deref().unwrap_or("-"),
      p.description_display()
    );
  }
}

/// Route a command needs, if any.
fn route_for(command: &Command) -> Option<Route> {
  match command {
    Command::Home => Some(Route::Home),
    Command::List
    | Command::Search(_)
    | Command::Clear
    | Command::Reload
    | Command::Categories
    | Command::Category(_)
    | Command::Add
    | Command::Edit(_)
    | Command::Set(_)
    | Command::Show
    | Command::Save
    | Command::Cancel
    | Command::Delete(_) => Some(Route::Products),
    _ => None,
  }
}

async fn ensure_products(state: &mut ConsoleState) {
  if !state.products_mounted {
    state.products.mount().await;
    state.products_mounted = true;
  }
}

fn print_banner(state: &ConsoleState) {
  if let Some(error) = state.products.error() {
    println!("! {}", error);
  }
}

/// Runs one command. Returns `false` when the loop should stop.
async fn execute(state: &mut ConsoleState, command: Command, confirm: &TerminalConfirm) -> AppResult<bool> {
  if let Some(wanted) = route_for(&command) {
    if navigation::resolve(wanted.path(), &state.session) == Route::Login {
      state.leave_products();
      println!("Please log in first (login <username> <password>).");
      return Ok(true);
    }
    if wanted == Route::Products {
      ensure_products(state).await;
    } else {
      state.leave_products();
    }
  }

  match command {
    Command::Login { username, password } => match state.login.submit(&username, &password).await {
      Ok(login) => println!("Signed in as {} ({}).", login.username, login.role),
      Err(_) => println!("! {}", state.login.error().unwrap_or_default()),
    },
    Command::Logout => {
      state.leave_products();
      state.session.clear()?;
      println!("Signed out.");
    }
    Command::Home => {
      let home = state.home();
      home.load().await;
      println!("{}", home.greeting(&state.session));
      println!("Products in catalog: {}", home.count_display());
    }
    Command::List => {
      print_banner(state);
      print_products(&state.products.filtered_view());
    }
    Command::Search(keyword) => {
      state.products.set_keyword(keyword);
      print_products(&state.products.filtered_view());
    }
    Command::Clear => {
      state.products.clear_keyword();
      print_products(&state.products.filtered_view());
    }
    Command::Reload => {
      if let Err(e) = state.products.load_products().await {
        tracing::debug!(error = %e, "Reload failed.");
      }
      print_banner(state);
      print_products(&state.products.filtered_view());
    }
    Command::Categories => {
      for c in state.products.categories() {
        println!("{:>5}  {}", c.id, c.name);
      }
    }
    Command::Category(id) => match state.products.products_in_category(id).await {
      Ok(products) => print_products(&products),
      Err(e) => println!("! {}", e.user_message(LOAD_PRODUCTS_FAILED)),
    },
    Command::Add => {
      state.products.open_add_modal();
      show_form(state);
    }
    Command::Edit(id) => {
      let opened = match state.products.product(id) {
        Some(product) => {
          state.products.open_edit_modal(&product);
          true
        }
        None => state.products.open_edit_modal_by_id(id).await.is_ok(),
      };
      if opened {
        show_form(state);
      } else {
        print_banner(state);
      }
    }
    Command::Set(action) => {
      if state.products.modal().is_none() {
        return Err(AppError::Usage("open the form with 'add' or 'edit <id>' first".to_string()));
      }
      state.products.dispatch(action);
    }
    Command::Show => show_form(state),
    Command::Save => match state.products.submit().await {
      Ok(saved) => {
        println!("Saved product {} ({}).", saved.id, saved.name);
        print_banner(state);
      }
      Err(e) => println!("! {}", e.user_message(SAVE_PRODUCT_FAILED)),
    },
    Command::Cancel => {
      state.products.close_modal();
      println!("Form closed.");
    }
    Command::Delete(id) => match state.products.delete(id, confirm).await {
      Ok(true) => println!("Deleted product {}.", id),
      Ok(false) => println!("Kept product {}.", id),
      Err(e) => println!("! {}", e.user_message(DELETE_PRODUCT_FAILED)),
    },
    Command::Help => println!("{}", HELP),
    Command::Quit => return Ok(false),
  }
  Ok(true)
}

fn show_form(state: &ConsoleState) {
  let Some(title) = state.products.modal_title() else {
    println!("No form is open.");
    return;
  };
  let draft = state.products.draft();
  let category = state
    .products
    .category_name(draft.category_id)
    .unwrap_or_else(|| "(none)".to_string());
  println!("-- {} --", title);
  println!("  name:        {}", draft.name);
  println!("  description: {}", draft.description);
  println!("  price:       {}", draft.price);
  println!("  category:    {} ({})", draft.category_id, category);
}

#[tokio::main]
async fn main() -> AppResult<()> {
  // Logs go to stderr so they do not interleave with command output.
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  let config = match ConsoleConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load console configuration.");
      return Err(e);
    }
  };

  let mut state = ConsoleState::build(Arc::clone(&config))?;
  tracing::info!(api = %state.gateway.base_url(), "Catalog console ready.");

  let input: InputLines = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
  let confirm = TerminalConfirm {
    input: Arc::clone(&input),
  };

  println!("Catalog admin console for {}. Type 'help' for commands.", state.config.api_base_url);
  if let Some(user) = state.session.username().filter(|_| state.session.is_authenticated()) {
    println!("Resuming session for {}.", user);
  }

  loop {
    prompt("> ").await?;
    let line = match input.lock().await.next_line().await.context("reading a command")? {
      Some(line) => line,
      None => break, // EOF
    };

    let command = match commands::parse(&line) {
      Ok(Some(command)) => command,
      Ok(None) => continue,
      Err(e) => {
        println!("{}", e);
        continue;
      }
    };

    match execute(&mut state, command, &confirm).await {
      Ok(true) => {}
      Ok(false) => break,
      Err(e) => println!("! {}", e.display_for_operator("Something went wrong")),
    }
  }

  state.leave_products();
  tracing::info!("Catalog console closed.");
  Ok(())
}
