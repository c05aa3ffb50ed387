//! Scripted surface shared by the layout tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use weft_text::{Point, Rectangle, Size, TextSurface};

/// One observable surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A run drawn directly onto the root surface.
    Draw { x: i32, y: i32, text: String },
    /// A run drawn into an offscreen patch.
    PatchDraw { x: i32, y: i32, text: String },
    /// An offscreen patch allocated.
    Offscreen { width: u32, height: u32 },
    /// A region copied back onto the root surface.
    Blit { x: i32, y: i32, width: u32, height: u32 },
}

/// Deterministic measurement surface: every character has a scripted
/// advance width and every run is `LINE_PX` tall.
pub struct TestSurface {
    size: Size,
    char_px: fn(char) -> u32,
    log: Rc<RefCell<Vec<Event>>>,
    offscreen: bool,
}

pub const LINE_PX: u32 = 20;

impl TestSurface {
    /// Every character 10px wide.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_widths(width, height, |_| 10)
    }

    pub fn with_widths(width: u32, height: u32, char_px: fn(char) -> u32) -> Self {
        Self {
            size: Size::new(width, height),
            char_px,
            log: Rc::new(RefCell::new(Vec::new())),
            offscreen: false,
        }
    }

    /// Everything observed so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Only the runs drawn directly onto the root surface.
    pub fn draws(&self) -> Vec<(i32, i32, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Draw { x, y, text } => Some((x, y, text)),
                _ => None,
            })
            .collect()
    }
}

impl TextSurface for TestSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn text_extent(&self, text: &[char]) -> Size {
        Size::new(text.iter().map(|&c| (self.char_px)(c)).sum(), LINE_PX)
    }

    fn glyph_pixels(&self, text: &[char]) -> Vec<u32> {
        text.iter().map(|&c| (self.char_px)(c)).collect()
    }

    fn draw_text(&mut self, pos: Point, text: &[char]) {
        let text = text.iter().collect();
        let event = if self.offscreen {
            Event::PatchDraw { x: pos.x, y: pos.y, text }
        } else {
            Event::Draw { x: pos.x, y: pos.y, text }
        };
        self.log.borrow_mut().push(event);
    }

    fn make_offscreen(&self, size: Size) -> weft_text::Result<Self> {
        self.log.borrow_mut().push(Event::Offscreen {
            width: size.width,
            height: size.height,
        });
        Ok(Self {
            size,
            char_px: self.char_px,
            log: Rc::clone(&self.log),
            offscreen: true,
        })
    }

    fn blit(&mut self, dst: Rectangle, _src: &Self, _src_origin: Point) {
        // Background copies into a patch are not interesting to assert on;
        // only the copy back onto the root surface is recorded.
        if !self.offscreen {
            self.log.borrow_mut().push(Event::Blit {
                x: dst.x,
                y: dst.y,
                width: dst.width,
                height: dst.height,
            });
        }
    }
}
