use anyhow::Result;
use log::info;

use super::session::Session;
use super::summary::SessionSummary;
use crate::render::RenderTarget;

/// Key that stands for "no key this frame"
pub const IDLE_KEY: char = '.';

/// Replays a key script, one character per frame
pub struct ScriptMode<T: RenderTarget> {
    session: Session<T>,
    script: String,
}

impl<T: RenderTarget> ScriptMode<T> {
    pub fn new(session: Session<T>, script: impl Into<String>) -> Self {
        Self {
            session,
            script: script.into(),
        }
    }

    /// Run the script to its end or until the session exits
    pub fn run(mut self, mut on_frame: impl FnMut(&Session<T>)) -> Result<SessionSummary> {
        info!("script mode: {} frames", self.script.chars().count());

        for key in self.script.chars() {
            if self.session.is_finished() {
                break;
            }
            if key != IDLE_KEY && !key.is_whitespace() {
                self.session.press(key);
            }
            self.session.step()?;
            on_frame(&self.session);
        }

        Ok(SessionSummary::from_session("script", &self.session))
    }
}
