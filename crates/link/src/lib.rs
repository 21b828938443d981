//! Link helpers used by the image and link folders.
//!
//! - [`split_link`] separates a destination from its optional title.
//! - [`LinkTable`] indexes `[name]: url "title"` reference definitions.
//! - [`UrlResolver`] joins relative destinations onto a base URL.
//! - [`LinkResolver`] is the seam a fold host exposes to folders.

mod error;
mod resolve;
mod resolver;
mod split;
/// Reference definition table.
pub mod table;

pub use error::{LinkError, Result};
pub use resolve::UrlResolver;
pub use resolver::{DocumentLinks, LinkResolver, NoLinks};
pub use split::{Link, split_link};
pub use table::LinkTable;
