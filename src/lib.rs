//! Snake Cage - a fenced, grid-based Snake world
//!
//! This library provides:
//! - Core world rules (game module)
//! - Key mapping for an input source (input module)
//! - Drawing through an injected render target (render module)
//! - Game and game over screens (screen module)
//! - Session statistics (metrics module)
//! - Headless drivers: autoplay and scripted input (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod screen;
