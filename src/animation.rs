//! Sprite-sheet animations.
//!
//! Each named sequence cuts `frames` equally sized rectangles out of one row
//! of the sheet, left to right from `x = 0`, and shows each one for
//! `duration / frames` seconds.

use std::collections::HashMap;
use std::io::Read;

use glam::Vec2;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::SpriteTarget;
use crate::error::{check_version, Error, Result};
use crate::types::{Direction, Rect};

/// How a sequence behaves once it runs out of frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cycle {
    /// Play forward once and hold the last frame.
    Single,
    /// Play backward once and hold the first frame.
    SingleReverse,
    /// Play forward and wrap around.
    Circular,
    /// Play backward and wrap around.
    CircularReverse,
}

impl Cycle {
    pub fn is_reverse(self) -> bool {
        matches!(self, Cycle::SingleReverse | Cycle::CircularReverse)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    frames: Vec<Rect>,
    time_per_frame: f32,
    cycle: Cycle,
}

impl Sequence {
    /// Cut `frames` rectangles of `size` from the sheet row at `y_offset`.
    pub fn new(frames: usize, y_offset: f32, size: Vec2, duration: f32, cycle: Cycle) -> Self {
        let frames = (0..frames)
            .map(|i| {
                let min = Vec2::new(size.x * i as f32, y_offset);
                Rect::new(min, min + size)
            })
            .collect::<Vec<_>>();
        let time_per_frame = if frames.is_empty() {
            0.0
        } else {
            duration / frames.len() as f32
        };
        Self {
            frames,
            time_per_frame,
            cycle,
        }
    }

    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    pub fn time_per_frame(&self) -> f32 {
        self.time_per_frame
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    fn last(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    fn first_frame(&self) -> usize {
        if self.cycle.is_reverse() { self.last() } else { 0 }
    }

    fn next_frame(&self, frame: usize) -> usize {
        let last = self.last();
        match self.cycle {
            Cycle::Single => (frame + 1).min(last),
            Cycle::Circular => {
                if frame >= last {
                    0
                } else {
                    frame + 1
                }
            }
            Cycle::SingleReverse => frame.saturating_sub(1),
            Cycle::CircularReverse => {
                if frame == 0 {
                    last
                } else {
                    frame - 1
                }
            }
        }
    }
}

/// A set of named sequences sharing one sprite sheet, plus playback state.
#[derive(Clone, Debug)]
pub struct Animation {
    sheet: String,
    anims: HashMap<String, Sequence>,
    current: Option<String>,
    frame: usize,
    elapsed: f32,
    /// Where the current frame is drawn (frame center).
    pub position: Vec2,
    /// Facing; `LEFT` mirrors the frame horizontally.
    pub dir: Direction,
}

impl Animation {
    pub fn new(sheet: impl Into<String>, position: Vec2) -> Self {
        Self {
            sheet: sheet.into(),
            anims: HashMap::new(),
            current: None,
            frame: 0,
            elapsed: 0.0,
            position,
            dir: Direction::RIGHT,
        }
    }

    pub fn from_reader<R: Read>(reader: R, position: Vec2) -> Result<Self> {
        Self::from_file(serde_json::from_reader(reader)?, position)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str, position: Vec2) -> Result<Self> {
        Self::from_file(serde_json::from_str(s)?, position)
    }

    fn from_file(file: AnimFile, position: Vec2) -> Result<Self> {
        check_version(&file.version)?;
        if file.anims.is_empty() {
            warn!(sheet = %file.sheet, "animation file declares no animations");
            return Err(Error::EmptyDeclaration { what: "animation" });
        }

        let mut anim = Animation::new(file.sheet, position);
        for (id, a) in file.anims {
            let seq = Sequence::new(
                a.frames,
                a.y_offset,
                Vec2::new(a.width, a.height),
                a.duration,
                a.cycle,
            );
            anim.add(id, seq)?;
        }
        debug!(sheet = %anim.sheet, anims = anim.anims.len(), "loaded animations");
        Ok(anim)
    }

    /// Register a sequence under `id`, replacing any previous one.
    pub fn add(&mut self, id: impl Into<String>, seq: Sequence) -> Result<()> {
        let id = id.into();
        if seq.frames.is_empty() {
            warn!(id = %id, "animation has no frames");
            return Err(Error::NoFrames { id });
        }
        self.anims.insert(id, seq);
        Ok(())
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn sequence(&self, id: &str) -> Option<&Sequence> {
        self.anims.get(id)
    }

    /// Switch to animation `id`. Re-selecting the playing one keeps its state.
    pub fn set_current(&mut self, id: &str) -> Result<()> {
        let Some(seq) = self.anims.get(id) else {
            return Err(Error::MissingAnimation(id.to_owned()));
        };
        if self.current.as_deref() != Some(id) {
            self.frame = seq.first_frame();
            self.elapsed = 0.0;
            self.current = Some(id.to_owned());
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_frame_number(&self) -> usize {
        self.frame
    }

    /// Sheet region of the frame on screen, if an animation is selected.
    pub fn current_frame(&self) -> Option<Rect> {
        self.current_sequence()
            .and_then(|s| s.frames.get(self.frame))
            .copied()
    }

    fn current_sequence(&self) -> Option<&Sequence> {
        self.current.as_deref().and_then(|id| self.anims.get(id))
    }

    /// Let `dt` seconds pass and move to the next frame when due.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        let Some(seq) = self.current_sequence() else {
            return;
        };
        if self.elapsed <= seq.time_per_frame {
            return;
        }
        let next = seq.next_frame(self.frame);
        if next != self.frame {
            self.frame = next;
            self.elapsed = 0.0;
        }
    }

    /// Draw the current frame, then advance by `dt`.
    pub fn draw(&mut self, target: &mut impl SpriteTarget, dt: f32) {
        if let Some(frame) = self.current_frame() {
            target.draw_frame(&self.sheet, frame, self.position, self.dir == Direction::LEFT);
        }
        self.advance(dt);
    }
}

#[derive(Deserialize)]
struct AnimFile {
    version: String,
    #[serde(default)]
    sheet: String,
    #[serde(default)]
    anims: HashMap<String, AnimEntry>,
}

#[derive(Deserialize)]
struct AnimEntry {
    frames: usize,
    cycle: Cycle,
    duration: f32,
    #[serde(default)]
    y_offset: f32,
    width: f32,
    height: f32,
}
