//! `ratatui-props` is a small set of presentational components for terminal UIs.
//!
//! Every component is a struct of props (plain owned strings) plus a pure
//! [`component::Component::lines`] method that turns those props into styled lines for a given
//! width. Nothing here holds state between renders, validates input, or fails: an empty prop
//! renders as empty text.
//!
//! ## Components
//!
//! - [`user_card::UserCard`]: `name`, `email`, `role` in a bordered card.
//! - [`button::Button`]: a pill-shaped label.
//! - [`blog_post::BlogPost`]: `title`, `author` byline and wrapped `content`.
//! - [`list::ListRenderer`]: ordered items, each prefixed with a marker (`🍎 ` by default).
//! - [`alert::AlertBox`]: a message on a background picked by a colour identifier.
//!
//! [`page::Page`] stacks components into a document and [`page_view::PageView`] scrolls it.
//!
//! ```
//! use ratatui_props::component::Component;
//! use ratatui_props::list::ListRenderer;
//! use ratatui_props::theme::Theme;
//!
//! let list = ListRenderer::new(["Apple", "Banana"]);
//! let values: Vec<String> = list.rows().into_iter().map(|r| r.value).collect();
//! assert_eq!(values, ["🍎 Apple", "🍎 Banana"]);
//! assert_eq!(list.lines(40, &Theme::default()).len(), 2);
//! ```
pub use ratatui_props_core::color;
pub use ratatui_props_core::frame;
pub use ratatui_props_core::input;
pub use ratatui_props_core::render;
pub use ratatui_props_core::text;
pub use ratatui_props_core::theme;
pub use ratatui_props_core::viewport;
pub use ratatui_props_core::wrapping;

#[cfg(feature = "crossterm")]
pub use ratatui_props_core::crossterm_input;

pub mod component;

pub mod alert;
pub mod blog_post;
pub mod button;
pub mod list;
pub mod user_card;

pub mod help;
pub mod page;
pub mod page_view;
