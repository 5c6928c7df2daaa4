//! # pinterest-api - a typed client for the Pinterest REST API v5
//!
//! A type-safe async client built on `reqwest`. Resource handles (boards,
//! pins, media, search, terms, user account) are thin typed call-sites; all
//! requests flow through one generic dispatch pipeline that encodes query
//! parameters and JSON bodies, attaches the bearer credential, and decodes
//! either the expected payload or a structured API error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pinterest_api::Client;
//! use pinterest_api::resources::{CreateBoardOpts, BoardPrivacy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pinterest_api::Error> {
//!     let client = Client::new("my-access-token")?;
//!
//!     // Fetch a single board.
//!     let board = client.boards().get("615668985984").await?;
//!     println!("board: {:?}", board.name);
//!
//!     // Create a board.
//!     let created = client
//!         .boards()
//!         .create(CreateBoardOpts {
//!             name: "Travel".to_string(),
//!             description: Some("Places to go".to_string()),
//!             privacy: Some(BoardPrivacy::Secret),
//!         })
//!         .await?;
//!     println!("created board {:?}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! List endpoints return a [`Page`]: items plus an opaque `bookmark` cursor.
//! Loop manually by feeding each bookmark back, or let [`Paginator`] drive
//! the loop lazily:
//!
//! ```no_run
//! use pinterest_api::{Client, ListOptions, Paginator};
//!
//! # async fn example() -> Result<(), pinterest_api::Error> {
//! let client = Client::new("my-access-token")?;
//! let media = client.media();
//!
//! let mut uploads = Paginator::new(move |bookmark| {
//!     let media = media.clone();
//!     async move {
//!         media
//!             .list(ListOptions { bookmark, page_size: Some(50) })
//!             .await
//!     }
//! });
//!
//! while let Some(upload) = uploads.try_next().await? {
//!     println!("{:?}: {:?}", upload.media_id, upload.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a distinct [`Error`] variant; API rejections carry the
//! HTTP status plus the server's machine-readable code:
//!
//! ```no_run
//! use pinterest_api::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("token")?;
//! match client.boards().get("nope").await {
//!     Ok(board) => println!("{:?}", board.name),
//!     Err(Error::Api(api)) if api.code.as_deref() == Some("NOT_FOUND") => {
//!         println!("no such board");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod codec;
mod error;
pub mod metadata;
mod page;
mod response;
pub mod resources;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use codec::comma_separated;
pub use error::{ApiError, Error, Result};
pub use page::{ListOptions, Page, Paginator};
pub use response::Response;
pub use resources::{Board, Pin};
