//! Example demonstrating basic API calls.
//!
//! This example shows how to:
//! - Build a client with a bearer token
//! - Fetch the operating user account
//! - List boards with a typed options struct
//! - Handle API errors by machine-readable code
//!
//! Run with: `PINTEREST_ACCESS_TOKEN=... cargo run --example basic_call`

use pinterest_api::resources::{BoardPrivacy, ListBoardsOpts};
use pinterest_api::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("pinterest_api=info")
        .init();

    let token = std::env::var("PINTEREST_ACCESS_TOKEN")?;
    let client = Client::new(token)?;

    println!("=== Example 1: Fetching the user account ===");
    let account = client.user_account().get(None).await?;
    println!("  Username: {:?}", account.username);
    println!("  Account type: {:?}", account.account_type);
    println!();

    println!("=== Example 2: Listing public boards ===");
    let page = client
        .boards()
        .list(ListBoardsOpts {
            page_size: Some(10),
            privacy: Some(BoardPrivacy::Public),
            ..Default::default()
        })
        .await?;
    for board in &page.items {
        println!("  {:?} ({:?} pins)", board.name, board.pin_count);
    }
    println!("  Next bookmark: {:?}", page.next_bookmark());
    println!();

    println!("=== Example 3: Handling a missing board ===");
    match client.boards().get("0").await {
        Ok(board) => println!("  Unexpected board: {:?}", board.name),
        Err(Error::Api(api)) => {
            println!("  API error!");
            println!("    Status: {}", api.status);
            println!("    Code: {:?}", api.code);
            println!("    Message: {}", api.message);
        }
        Err(e) => println!("  Other error: {}", e),
    }

    Ok(())
}
