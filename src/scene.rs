//! Named game states (title screen, level, game over) and the loop that
//! hops between them.

use std::collections::HashMap;

use tracing::trace;

use crate::error::Error;

/// One game state. `C` is whatever the game loop hands every scene: window,
/// input, loaded assets.
pub trait Scene<C> {
    /// Run one frame and return the name of the scene for the next frame.
    /// Returning the scene's own name keeps it running.
    fn tick(&mut self, ctx: &mut C, dt: f32) -> anyhow::Result<String>;
}

impl<C, F> Scene<C> for F
where
    F: FnMut(&mut C, f32) -> anyhow::Result<String>,
{
    fn tick(&mut self, ctx: &mut C, dt: f32) -> anyhow::Result<String> {
        self(ctx, dt)
    }
}

/// Owns the registered scenes and runs the current one.
pub struct Director<C> {
    scenes: HashMap<String, Box<dyn Scene<C>>>,
    current: String,
}

impl<C> Director<C> {
    /// `initial` must be registered before the first [`Director::tick`].
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            scenes: HashMap::new(),
            current: initial.into(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, scene: impl Scene<C> + 'static) -> &mut Self {
        self.scenes.insert(name.into(), Box::new(scene));
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Run the current scene for one frame and switch to the scene it names.
    ///
    /// An unregistered name fails with [`Error::UnknownScene`] and leaves the
    /// current scene in place.
    pub fn tick(&mut self, ctx: &mut C, dt: f32) -> anyhow::Result<()> {
        let scene = self
            .scenes
            .get_mut(&self.current)
            .ok_or_else(|| Error::UnknownScene(self.current.clone()))?;
        let next = scene.tick(ctx, dt)?;
        if next != self.current {
            if !self.scenes.contains_key(&next) {
                return Err(Error::UnknownScene(next).into());
            }
            trace!(from = %self.current, to = %next, "switching scene");
            self.current = next;
        }
        Ok(())
    }
}
