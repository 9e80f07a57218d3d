pub mod archive;
pub mod error;
pub mod friend;
pub mod options;

pub use archive::{FriendsFile, ImportMode, ImportSummary, IncomingRecord, FORMAT_VERSION};
pub use error::WidgetError;
pub use friend::{ContactChannel, FriendRecord, FriendSubmission};
pub use options::WidgetOptions;
