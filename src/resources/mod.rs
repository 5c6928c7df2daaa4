//! Typed resource handles, one per API area.
//!
//! Each handle is a thin, cloneable call-site: it holds an explicit
//! [`Client`](crate::Client) and translates typed arguments into dispatcher
//! calls. All request/response shapes live next to the handle that uses them.

mod board;
mod media;
mod pin;
mod search;
mod terms;
mod user_account;

pub use board::{
    Board, BoardMedia, BoardOwner, BoardPrivacy, BoardResource, CreateBoardOpts, ListBoardsOpts,
    UpdateBoardOpts,
};
pub use media::{
    Image, ImageItem, Media, MediaItem, MediaItemType, MediaResource, MediaType, MediaUpload,
    RegisterMediaUploadOpts, RegisteredMediaUpload, VideoItem,
};
pub use pin::{CreatePinOpts, Pin, PinMediaSource, PinResource};
pub use search::{SearchPartnerOpts, SearchResource, SearchResult, SearchUserOpts};
pub use terms::{RelatedTerms, RelatedTermsItem, RelatedTermsOpts, SuggestedTermsOpts, TermsResource};
pub use user_account::{ListFollowingBoardsOpts, UserAccount, UserAccountResource};
