//! `ratatui-props-core` provides the small building blocks the `ratatui-props` components are
//! made of.
//!
//! Components in this workspace are plain prop structs with pure render methods. They describe
//! themselves as a list of styled lines for a given width (a *fragment*), and this crate holds
//! the pieces those fragments are built from and drawn with.
//!
//! ## Design goals
//!
//! - Pure rendering: every fragment is a function of props, width and [`theme::Theme`].
//! - Event-loop agnostic: the host drives input + drawing; see [`input`].
//! - No async runtime, no global state.
//!
//! Useful entry points:
//! - [`frame::framed`]: wrap lines in a box-drawn border with padding.
//! - [`wrapping::word_wrap`]: width-aware word wrapping.
//! - [`color::resolve_color`]: turn a display colour identifier (`"red"`, `"#007bff"`) into a
//!   [`ratatui::style::Color`].
//! - [`render::render_lines`]: draw lines into a buffer region, clipped.
pub mod theme;

pub mod text;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod color;
pub mod frame;
pub mod render;
pub mod viewport;
pub mod wrapping;

pub mod input;
