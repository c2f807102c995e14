//! HUD state mirrored into the host page.
//!
//! The engine never touches the DOM. Games write text into numbered slots and
//! publish a numeric gauge; the host polls `is_dirty` after each tick and
//! copies whatever changed into its own elements.

/// Text slots plus a numeric gauge, with change tracking.
#[derive(Debug, Clone)]
pub struct HudState {
    texts: Vec<String>,
    gauge: Vec<f32>,
    dirty: bool,
}

impl HudState {
    pub fn new(slots: usize) -> Self {
        Self {
            texts: vec![String::new(); slots],
            gauge: Vec::new(),
            dirty: true,
        }
    }

    /// Set the text of a slot. Out-of-range slots are ignored.
    pub fn set_text(&mut self, slot: usize, text: impl Into<String>) {
        let text = text.into();
        match self.texts.get_mut(slot) {
            Some(current) if *current != text => {
                *current = text;
                self.dirty = true;
            }
            Some(_) => {}
            None => log::warn!("HUD slot {} out of range ({} slots)", slot, self.texts.len()),
        }
    }

    /// Text of a slot, empty for unknown slots.
    pub fn text(&self, slot: usize) -> &str {
        self.texts.get(slot).map(String::as_str).unwrap_or("")
    }

    pub fn set_gauge(&mut self, values: Vec<f32>) {
        if self.gauge != values {
            self.gauge = values;
            self.dirty = true;
        }
    }

    pub fn gauge(&self) -> &[f32] {
        &self.gauge
    }

    pub fn gauge_ptr(&self) -> *const f32 {
        self.gauge.as_ptr()
    }

    pub fn slot_count(&self) -> usize {
        self.texts.len()
    }

    /// Whether anything changed since the last `mark_clean`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
