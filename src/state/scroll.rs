//! Scroll synchronization between the label panel and the timeline panel.
//!
//! The two panels scroll independently but must appear as one surface: the
//! label panel and timeline body share a vertical offset, and the timeline
//! body's horizontal offset also drives the header strip. The controller
//! owns the single authoritative offset and turns observed scroll events
//! into at most one write against the opposite panel per frame. A
//! re-entrancy guard swallows the echo of that programmatic write until the
//! next frame, which also coalesces event bursts from both panels.

/// The two independently scrolling panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Labels,
    Timeline,
}

impl Panel {
    fn other(self) -> Panel {
        match self {
            Panel::Labels => Panel::Timeline,
            Panel::Timeline => Panel::Labels,
        }
    }
}

/// A scroll offset in pixels. The label panel only ever contributes `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pending programmatic scroll write the presentation layer must apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWrite {
    pub target: Panel,
    pub offset: ScrollOffset,
}

/// Owns the shared scroll position for both panels.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    offset: ScrollOffset,
    guard: Option<Panel>,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current authoritative offset. The header strip translates by
    /// `offset().x`.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Record a scroll observed on `source` and return the write to apply
    /// to the other panel, if any.
    ///
    /// While a programmatic write is in flight (guard held), events are
    /// dropped so the write's echo cannot ping-pong back. Re-reporting an
    /// unchanged offset is a no-op.
    pub fn on_scroll(&mut self, source: Panel, observed: ScrollOffset) -> Option<ScrollWrite> {
        if self.guard.is_some() {
            return None;
        }
        let next = match source {
            // The label panel has no horizontal scroll of its own.
            Panel::Labels => ScrollOffset::new(self.offset.x, observed.y),
            Panel::Timeline => observed,
        };
        if next == self.offset {
            return None;
        }
        self.offset = next;
        let target = source.other();
        self.guard = Some(target);
        Some(ScrollWrite {
            target,
            offset: self.offset,
        })
    }

    /// Release the re-entrancy guard. Called once per paint frame, after
    /// any pending write has been applied.
    pub fn end_frame(&mut self) {
        self.guard = None;
    }

    /// After a layout reflow, re-read the label panel's position and
    /// re-apply it to the timeline so any drift is corrected.
    pub fn on_resize(&mut self, labels_y: f32) -> ScrollWrite {
        self.offset.y = labels_y;
        self.guard = Some(Panel::Timeline);
        ScrollWrite {
            target: Panel::Timeline,
            offset: self.offset,
        }
    }
}
