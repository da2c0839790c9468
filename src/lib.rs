//! Icon set and embedded asset source for GPUI applications.
//!
//! One import surface for every icon the application renders: each icon is
//! a [`VellumIcon`] variant backed by an SVG definition compiled into the
//! binary, and [`VellumAssets`] serves those definitions to the framework.
//! Because the set of names is an enum, referencing an icon that does not
//! exist is a compile error.
//!
//! ```no_run
//! use vellum_icons::{Icon, VellumIcon};
//!
//! let glyph = Icon::new(VellumIcon::Search);
//! ```

mod assets;
mod icon;

pub use assets::VellumAssets;
pub use icon::VellumIcon;

// Re-exported so consumers build icon elements without naming
// `gpui-component` themselves.
pub use gpui_component::{Icon, IconNamed};
