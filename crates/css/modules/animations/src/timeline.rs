//! The ordered frames of one named animation.

use crate::config::{AnimationConfig, TimelineOrder};
use crate::error::AnimationError;
use crate::frame::Frame;
use core::mem;
use core::slice::Iter;
use css_values_units::Percentage;
use log::{debug, warn};

/// Owns the frames of one animation and enforces its [`TimelineOrder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    name: String,
    order: TimelineOrder,
    frames: Vec<Frame>,
}

impl Timeline {
    /// An empty timeline with the default (strict) ordering.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: TimelineOrder::default(),
            frames: Vec::new(),
        }
    }

    /// An empty timeline using the ordering from `config`.
    pub fn from_config(name: impl Into<String>, config: &AnimationConfig) -> Self {
        Self::new(name).with_order(config.timeline_order)
    }

    /// Switch the ordering policy. Switching to `Sorted` re-sorts the frames
    /// already held and merges repeated positions; other policies leave them
    /// as they are, so use [`Timeline::validate`] to check them.
    #[must_use]
    pub fn with_order(mut self, order: TimelineOrder) -> Self {
        if order == TimelineOrder::Sorted && self.order != TimelineOrder::Sorted {
            let frames = mem::take(&mut self.frames);
            for frame in frames {
                self.insert_sorted(frame);
            }
        }
        self.order = order;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn order(&self) -> TimelineOrder {
        self.order
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Add a frame according to the timeline's ordering policy.
    ///
    /// # Errors
    /// On a strict timeline, returns `FrameOutOfOrder` or `DuplicateFramePosition`
    /// when `frame` does not come after every existing frame.
    pub fn push(&mut self, frame: Frame) -> Result<(), AnimationError> {
        let position = frame.position();
        match self.order {
            TimelineOrder::Strict => {
                if let Some(previous) = self.frames.last().map(Frame::position) {
                    check_follows(previous, position).inspect_err(|err| {
                        warn!(target: "css_animations", "timeline {:?}: {err}", self.name);
                    })?;
                }
                self.frames.push(frame);
            }
            TimelineOrder::Sorted => {
                if !self.insert_sorted(frame) {
                    return Ok(());
                }
            }
            TimelineOrder::Unchecked => self.frames.push(frame),
        }
        debug!(
            target: "css_animations",
            "timeline {:?}: frame at {position} ({} total)",
            self.name,
            self.frames.len()
        );
        Ok(())
    }

    /// Insert in position order. A repeated position is merged into the
    /// existing frame and returns `false`.
    fn insert_sorted(&mut self, frame: Frame) -> bool {
        let position = frame.position();
        match self
            .frames
            .binary_search_by_key(&position, Frame::position)
        {
            Ok(index) => {
                debug!(
                    target: "css_animations",
                    "timeline {:?}: merging frame at {position}",
                    self.name
                );
                if let Some(existing) = self.frames.get_mut(index) {
                    existing.absorb(frame.into_styles());
                }
                false
            }
            Err(index) => {
                self.frames.insert(index, frame);
                true
            }
        }
    }

    /// Create a frame at `position`, let `build` fill it, then push it.
    ///
    /// # Errors
    /// Returns `InvalidFramePosition` for positions outside `0%..=100%`, or
    /// any ordering error from [`Timeline::push`].
    pub fn frame<F>(
        &mut self,
        position: impl Into<Percentage>,
        build: F,
    ) -> Result<&mut Self, AnimationError>
    where
        F: FnOnce(&mut Frame),
    {
        let mut frame = Frame::at(position)?;
        build(&mut frame);
        self.push(frame)?;
        Ok(self)
    }

    /// Check the frames against strict ordering, whatever this timeline's own policy.
    ///
    /// # Errors
    /// Returns the first `FrameOutOfOrder` or `DuplicateFramePosition` found.
    pub fn validate(&self) -> Result<(), AnimationError> {
        self.frames
            .windows(2)
            .try_for_each(|pair| match pair {
                [previous, next] => check_follows(previous.position(), next.position()),
                _ => Ok(()),
            })
    }
}

impl<'timeline> IntoIterator for &'timeline Timeline {
    type Item = &'timeline Frame;
    type IntoIter = Iter<'timeline, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

fn check_follows(previous: Percentage, position: Percentage) -> Result<(), AnimationError> {
    if position == previous {
        Err(AnimationError::DuplicateFramePosition(position))
    } else if position < previous {
        Err(AnimationError::FrameOutOfOrder { previous, position })
    } else {
        Ok(())
    }
}
