//! Terminal front end for the game.
//!
//! [`GameView`] turns a snapshot into a [`FrameBuffer`] of styled glyphs and
//! [`Screen`] writes framebuffers to the terminal, diffed against the frame
//! already shown. Board cells are two columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Overlay, Viewport};
pub use renderer::{encode_frame, Screen};
