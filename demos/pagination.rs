//! Example demonstrating bookmark pagination.
//!
//! This example shows how to:
//! - Page through a list endpoint manually with bookmarks
//! - Drive the same loop lazily with `Paginator`
//!
//! Run with: `PINTEREST_ACCESS_TOKEN=... cargo run --example pagination`

use pinterest_api::{Client, ListOptions, Paginator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("pinterest_api=debug")
        .init();

    let token = std::env::var("PINTEREST_ACCESS_TOKEN")?;
    let client = Client::new(token)?;

    println!("=== Example 1: Manual bookmark loop ===");
    let mut bookmark = None;
    loop {
        let page = client
            .media()
            .list(ListOptions {
                bookmark,
                page_size: Some(25),
            })
            .await?;
        for upload in &page.items {
            println!("  {:?}: {:?}", upload.media_id, upload.status);
        }
        match page.next_bookmark() {
            Some(next) => bookmark = Some(next.to_string()),
            None => break,
        }
    }
    println!();

    println!("=== Example 2: The same loop via Paginator ===");
    let media = client.media();
    let mut uploads = Paginator::new(move |bookmark| {
        let media = media.clone();
        async move {
            media
                .list(ListOptions {
                    bookmark,
                    page_size: Some(25),
                })
                .await
        }
    });

    let mut count = 0usize;
    while let Some(upload) = uploads.try_next().await? {
        println!("  {:?}: {:?}", upload.media_id, upload.status);
        count += 1;
    }
    println!("  {} uploads total", count);

    Ok(())
}
