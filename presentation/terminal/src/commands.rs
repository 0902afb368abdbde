//! Shell command grammar. Each input line is split into words and parsed
//! with clap, so every command gets `--help` for free.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use thiserror::Error;

use business::domain::product::query::ProductSort;
use business::domain::product::value_objects::ProductCategory;
use business::domain::user::model::UserRole;

#[derive(Error, Debug, PartialEq)]
pub enum TokenizeError {
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Splits a line on whitespace. Single or double quotes group words and
/// a backslash escapes the next character.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                    in_token = true;
                }
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[derive(Parser, Debug, PartialEq)]
#[command(no_binary_name = true, disable_version_flag = true, name = "go-farm")]
pub struct ShellCommand {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Open a screen by path (/, /login, /register, /farmer, /consumer, /consumer/cart, /delivery)
    Goto { path: String },
    /// Sign in with an email and role
    Login {
        email: String,
        #[arg(short, long, default_value = "consumer")]
        role: UserRole,
    },
    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        #[arg(short, long, default_value = "consumer")]
        role: UserRole,
    },
    /// Sign out and empty the cart
    Logout,
    /// List a new product (farmers)
    AddProduct {
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        quantity: u32,
        #[arg(long, default_value = "vegetables")]
        category: ProductCategory,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image_url: String,
        /// Book now, deliver after --available-date
        #[arg(long)]
        pre_order: bool,
        /// YYYY-MM-DD
        #[arg(long)]
        available_date: Option<NaiveDate>,
    },
    /// Filter the catalogue by name; no words clears the search
    Search { words: Vec<String> },
    /// Filter the catalogue by category, or "all"
    Category { name: String },
    /// Hide products above this price
    MaxPrice { value: f64 },
    /// Order the catalogue
    Sort { order: ProductSort },
    /// Reset search, category and price filters
    ClearFilters,
    /// Open a product's details
    Show { product_id: String },
    /// Close the product details
    Close,
    /// Put a product in the cart (the open one if no id is given)
    Add {
        product_id: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change how many of a product are in the cart
    Qty {
        product_id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Take a product out of the cart
    Remove { product_id: String },
    /// Empty the cart
    ClearCart,
    /// Pay and place the order
    Checkout { address: Vec<String> },
    /// Take a pending order, priced by distance
    Accept { order_id: String, distance_km: f64 },
    /// Mark an accepted order as delivered
    Deliver { order_id: String },
    /// Cancel an order
    Cancel { order_id: String },
    /// Redraw the current screen
    Refresh,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
