//! Navigation menu model shared by every menu surface.
//!
//! Configuration arrives as an untyped sequence of [`RawMenuEntry`] values
//! (static or server-delivered JSON). It is parsed once into the tagged
//! [`MenuEntry`] union, after which visibility is decided by
//! [`resolve_menu`] against the viewer's authentication state.

pub mod entry;
pub mod resolve;

pub use entry::{MenuEntry, MenuGroup, MenuItem, RawMenuEntry};
pub use resolve::{is_visible, menu_from_json, parse_menu, resolve_menu, ResolveOptions, ViewerAuth};
