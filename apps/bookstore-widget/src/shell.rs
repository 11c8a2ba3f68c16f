//! # Shell
//!
//! Line-oriented front end standing in for the page's buttons. Each input line
//! is one page event; each response is one line of JSON on the output.
//!
//! | Line          | Page event                    | Command               |
//! |---------------|-------------------------------|-----------------------|
//! | `products`    | product grid render           | `list_products`       |
//! | `cart`        | cart panel opened             | `get_cart`            |
//! | `add <id>`    | "Add to Cart" on a card       | `add_to_cart`         |
//! | `inc <id>`    | `+` on a cart row             | `update_cart_item +1` |
//! | `dec <id>`    | `-` on a cart row             | `update_cart_item -1` |
//! | `discount`    | USE / REMOVE button           | `toggle_discount`     |
//! | `clear`       | empty the cart                | `clear_cart`          |
//! | `config`      | page startup                  | `get_config`          |
//! | `help`        | list the commands             |                       |
//! | `quit`        | close the page                |                       |

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bookstore_core::ProductId;
use tracing::{debug, warn};

use crate::commands::{cart, catalog, config, discount};
use crate::error::ApiError;
use crate::storefront::Storefront;

const HELP: &str = "commands: products | cart | add <id> | inc <id> | dec <id> | discount | clear | config | help | quit";

/// One parsed shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    Cart,
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Discount,
    Clear,
    Config,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| ApiError::invalid_command("empty command"))?
            .to_lowercase();

        let command = match verb.as_str() {
            "products" => ShellCommand::Products,
            "cart" => ShellCommand::Cart,
            "add" => ShellCommand::Add(parse_id(&verb, parts.next())?),
            "inc" | "+" => ShellCommand::Increment(parse_id(&verb, parts.next())?),
            "dec" | "-" => ShellCommand::Decrement(parse_id(&verb, parts.next())?),
            "discount" => ShellCommand::Discount,
            "clear" => ShellCommand::Clear,
            "config" => ShellCommand::Config,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(ApiError::invalid_command(format!("unknown command: {}", other)));
            }
        };

        if let Some(extra) = parts.next() {
            return Err(ApiError::invalid_command(format!(
                "unexpected argument: {}",
                extra
            )));
        }

        Ok(command)
    }
}

fn parse_id(verb: &str, arg: Option<&str>) -> Result<ProductId, ApiError> {
    let raw = arg.ok_or_else(|| ApiError::invalid_command(format!("{} needs a product id", verb)))?;
    raw.parse::<i64>()
        .map(ProductId)
        .map_err(|_| ApiError::invalid_command(format!("invalid product id: {}", raw)))
}

/// Runs one command and returns its JSON response, or `None` on quit.
pub fn execute(store: &Storefront, command: ShellCommand) -> Result<Option<String>, ApiError> {
    debug!(?command, "shell command");

    let json = match command {
        ShellCommand::Products => serde_json::to_string(&catalog::list_products(store))?,
        ShellCommand::Cart => serde_json::to_string(&cart::get_cart(store))?,
        ShellCommand::Add(id) => serde_json::to_string(&cart::add_to_cart(store, id)?)?,
        ShellCommand::Increment(id) => {
            serde_json::to_string(&cart::update_cart_item(store, id, 1))?
        }
        ShellCommand::Decrement(id) => {
            serde_json::to_string(&cart::update_cart_item(store, id, -1))?
        }
        ShellCommand::Discount => serde_json::to_string(&discount::toggle_discount(store))?,
        ShellCommand::Clear => serde_json::to_string(&cart::clear_cart(store))?,
        ShellCommand::Config => serde_json::to_string(&config::get_config(store))?,
        ShellCommand::Help => serde_json::to_string(&serde_json::json!({ "help": HELP }))?,
        ShellCommand::Quit => return Ok(None),
    };

    Ok(Some(json))
}

/// Reads commands from `input` until EOF or `quit`, writing one response
/// line per command to `output`.
///
/// Command failures are written as an [`ApiError`] JSON object and the loop
/// continues. Only I/O errors end it early.
pub fn run_shell<R, W>(store: &Storefront, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<ShellCommand>()
            .and_then(|command| execute(store, command));

        match result {
            Ok(Some(json)) => writeln!(output, "{}", json)?,
            Ok(None) => break,
            Err(err) => {
                warn!(input = %line, error = %err, "shell command failed");
                let json = serde_json::to_string(&err)
                    .unwrap_or_else(|_| format!("{{\"message\":\"{}\"}}", err.message));
                writeln!(output, "{}", json)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}
