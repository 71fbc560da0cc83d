//! Command handlers and argument wrappers.
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type with `From`, so clap attributes never leak into
//! `inventory-core`.

use anyhow::{Context, Result};
use clap::Args;
use inventory_core::{
    params::{Id, NewItem, UpdateItem},
    CreateResult, DeleteResult, Inventory, Items, UpdateResult,
};
use log::debug;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Add a new item
#[derive(Args)]
pub struct AddItemArgs {
    #[arg(help = "Name of the item")]
    pub name: String,
    #[arg(help = "Unit price, e.g. 19.99")]
    pub price: f64,
    #[arg(help = "Units in stock", allow_negative_numbers = true)]
    pub quantity: i64,
}

impl From<AddItemArgs> for NewItem {
    fn from(val: AddItemArgs) -> Self {
        NewItem {
            name: val.name,
            price: val.price,
            quantity: val.quantity,
        }
    }
}

/// Target a single item by ID
#[derive(Args)]
pub struct ItemIdArgs {
    #[arg(help = "Unique identifier of the item")]
    pub id: u64,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change one or more fields of an item
#[derive(Args)]
pub struct UpdateItemArgs {
    #[arg(help = "Unique identifier of the item to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New unit price")]
    pub price: Option<f64>,
    #[arg(short, long, help = "New stock quantity", allow_negative_numbers = true)]
    pub quantity: Option<i64>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            name: val.name,
            price: val.price,
            quantity: val.quantity,
        }
    }
}

/// Describes the fields an update touches, for the update summary.
fn describe_changes(params: &UpdateItem) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(name) = &params.name {
        changes.push(format!("Name set to {}", name.trim()));
    }
    if let Some(price) = params.price {
        changes.push(format!("Price set to {price}"));
    }
    if let Some(quantity) = params.quantity {
        changes.push(format!("Quantity set to {quantity}"));
    }
    changes
}

/// Runs CLI commands against an inventory.
pub struct Cli {
    inventory: Inventory,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(inventory: Inventory, renderer: TerminalRenderer) -> Self {
        Self {
            inventory,
            renderer,
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Add(args) => self.add_item(args.into()).await,
            Commands::List => self.list_items().await,
            Commands::Show(args) => self.show_item(args.into()).await,
            Commands::Update(args) => self.update_item(args.into()).await,
            Commands::Sell(args) => self.sell_item(args.into()).await,
            Commands::Remove(args) => self.remove_item(args.into()).await,
        }
    }

    async fn add_item(&self, params: NewItem) -> Result<()> {
        let item = self
            .inventory
            .add_item(&params)
            .await
            .context("Failed to add item")?;
        debug!("Created item {}", item.id);
        self.renderer.render(&CreateResult::new(item.clone()), &item)
    }

    pub async fn list_items(&self) -> Result<()> {
        let items = self
            .inventory
            .list_items()
            .await
            .context("Failed to list items")?;
        let json = items.clone();
        self.renderer.render(&Items(items), &json)
    }

    async fn show_item(&self, params: Id) -> Result<()> {
        let item = self
            .inventory
            .get_item(&params)
            .await
            .context("Failed to get item")?
            .with_context(|| format!("Item with ID {} not found", params.id))?;
        self.renderer.render(&item, &item)
    }

    async fn update_item(&self, params: UpdateItem) -> Result<()> {
        let changes = describe_changes(&params);
        let item = self
            .inventory
            .update_item(&params)
            .await
            .with_context(|| format!("Failed to update item {}", params.id))?;
        self.renderer
            .render(&UpdateResult::with_changes(item.clone(), changes), &item)
    }

    async fn sell_item(&self, params: Id) -> Result<()> {
        let item = self
            .inventory
            .sell_item(&params)
            .await
            .with_context(|| format!("Failed to sell item {}", params.id))?;
        let summary = format!(
            "Sold one unit of {}; {} left",
            item.item_name, item.quantity_in_stock
        );
        self.renderer
            .render(&UpdateResult::with_changes(item.clone(), vec![summary]), &item)
    }

    async fn remove_item(&self, params: Id) -> Result<()> {
        let item = self
            .inventory
            .remove_item(&params)
            .await
            .with_context(|| format!("Failed to remove item {}", params.id))?;
        self.renderer.render(&DeleteResult::new(item.clone()), &item)
    }
}
