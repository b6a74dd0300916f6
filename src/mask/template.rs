//! Static description of an input mask.
//!
//! A template is parsed once from a mask string such as `+1 (XXX) XXX-XXXX`,
//! where every slot marker (`X` by default) becomes a mutable slot and every
//! other character a literal. All queries are pure.

use super::buffer::MaskBuffer;
use super::error::MaskError;

/// Character filter for mutable slots. Returns true if the character is allowed.
pub type SlotFilter = fn(char) -> bool;

/// Character that marks a mutable slot in a mask string
pub const DEFAULT_SLOT_MARKER: char = 'X';

/// Character shown in an empty mutable slot
pub const DEFAULT_PLACEHOLDER: char = 'X';

/// One position of the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Fixed character the user can never overwrite
    Literal(char),
    /// User-writable position
    Mutable,
}

/// A maximal run of contiguous mutable slots, as the half-open range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub start: usize,
    pub end: usize,
}

impl Group {
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Immutable mask layout with precomputed slot lookups.
#[derive(Debug, Clone)]
pub struct Template {
    mask: String,
    slots: Vec<SlotKind>,
    /// Sorted indexes of mutable slots
    mutable: Vec<usize>,
    groups: Vec<Group>,
    placeholder: char,
    filter: Option<SlotFilter>,
}

impl Template {
    /// Build a template using the default slot marker and placeholder (`X`)
    pub fn build(mask: &str) -> Result<Self, MaskError> {
        Self::parse(mask, DEFAULT_SLOT_MARKER, DEFAULT_PLACEHOLDER)
    }

    /// Build a template where `marker` denotes a mutable slot
    pub fn parse(mask: &str, marker: char, placeholder: char) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::InvalidMask {
                mask: mask.to_string(),
                reason: "mask is empty",
            });
        }

        let slots: Vec<SlotKind> = mask
            .chars()
            .map(|c| {
                if c == marker {
                    SlotKind::Mutable
                } else {
                    SlotKind::Literal(c)
                }
            })
            .collect();

        let mutable: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == SlotKind::Mutable)
            .map(|(i, _)| i)
            .collect();

        if mutable.is_empty() {
            return Err(MaskError::InvalidMask {
                mask: mask.to_string(),
                reason: "mask has no mutable slots",
            });
        }

        let mut groups: Vec<Group> = Vec::new();
        for &i in &mutable {
            match groups.last_mut() {
                Some(group) if group.end == i => group.end = i + 1,
                _ => groups.push(Group {
                    start: i,
                    end: i + 1,
                }),
            }
        }

        tracing::debug!(
            mask,
            slots = mutable.len(),
            groups = groups.len(),
            "Built mask template"
        );

        Ok(Self {
            mask: mask.to_string(),
            slots,
            mutable,
            groups,
            placeholder,
            filter: None,
        })
    }

    /// Restrict which characters mutable slots accept
    pub fn with_filter(mut self, filter: SlotFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Only ASCII digits may be typed into slots
    pub fn digits_only(self) -> Self {
        self.with_filter(|c| c.is_ascii_digit())
    }

    /// The mask string this template was parsed from
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Fixed buffer length in characters
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: an empty mask is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum length the host may hold transiently (one overflow character
    /// so the engine can see a just-typed character)
    pub fn capacity(&self) -> usize {
        self.len() + 1
    }

    pub fn slots(&self) -> &[SlotKind] {
        &self.slots
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn mutable_indices(&self) -> &[usize] {
        &self.mutable
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn is_mutable(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(SlotKind::Mutable))
    }

    /// Literal character at `index`, None for mutable or out-of-range positions
    pub fn literal_at(&self, index: usize) -> Option<char> {
        match self.slots.get(index) {
            Some(SlotKind::Literal(c)) => Some(*c),
            _ => None,
        }
    }

    /// Whether a typed character may occupy a mutable slot
    pub fn accepts(&self, ch: char) -> bool {
        match self.filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    pub fn group_containing(&self, index: usize) -> Option<Group> {
        let idx = self.groups.partition_point(|g| g.end <= index);
        self.groups.get(idx).copied().filter(|g| g.contains(index))
    }

    /// Group whose exclusive end is `index`, i.e. `index` is the separator right after it
    pub fn group_ending_at(&self, index: usize) -> Option<Group> {
        self.groups
            .binary_search_by_key(&index, |g| g.end)
            .ok()
            .map(|i| self.groups[i])
    }

    pub fn group_starting_at(&self, index: usize) -> Option<Group> {
        self.groups
            .binary_search_by_key(&index, |g| g.start)
            .ok()
            .map(|i| self.groups[i])
    }

    /// First group starting strictly after `index`
    pub fn next_group_after(&self, index: usize) -> Option<Group> {
        let idx = self.groups.partition_point(|g| g.start <= index);
        self.groups.get(idx).copied()
    }

    /// First mutable index strictly after `index`
    pub fn next_mutable_index(&self, index: usize) -> Option<usize> {
        let idx = self.mutable.partition_point(|&m| m <= index);
        self.mutable.get(idx).copied()
    }

    /// Last mutable index strictly before `index`
    pub fn prev_mutable_index(&self, index: usize) -> Option<usize> {
        let idx = self.mutable.partition_point(|&m| m < index);
        idx.checked_sub(1).map(|i| self.mutable[i])
    }

    pub fn first_mutable_index(&self) -> usize {
        self.mutable[0]
    }

    pub fn last_mutable_index(&self) -> usize {
        self.mutable[self.mutable.len() - 1]
    }

    /// The mask with every slot showing the placeholder
    pub fn blank(&self) -> String {
        self.slots
            .iter()
            .map(|slot| match slot {
                SlotKind::Literal(c) => *c,
                SlotKind::Mutable => self.placeholder,
            })
            .collect()
    }

    /// True when `text` has the template's length and every literal in place
    pub fn conforms(&self, text: &str) -> bool {
        let mut chars = text.chars();
        for slot in &self.slots {
            match (slot, chars.next()) {
                (_, None) => return false,
                (SlotKind::Literal(expected), Some(c)) if *expected != c => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }

    /// True when `text` conforms and every slot holds the placeholder or an
    /// accepted character
    pub fn fits(&self, text: &str) -> bool {
        self.conforms(text)
            && text
                .chars()
                .zip(&self.slots)
                .all(|(c, slot)| {
                    *slot != SlotKind::Mutable || c == self.placeholder || self.accepts(c)
                })
    }

    /// Characters entered into mutable slots, placeholders skipped
    pub fn extract(&self, text: &str) -> String {
        text.chars()
            .zip(&self.slots)
            .filter(|(c, slot)| **slot == SlotKind::Mutable && *c != self.placeholder)
            .map(|(c, _)| c)
            .collect()
    }

    /// True when the buffer fits and no slot holds the placeholder
    pub fn is_complete(&self, text: &str) -> bool {
        self.fits(text)
            && text
                .chars()
                .zip(&self.slots)
                .all(|(c, slot)| *slot != SlotKind::Mutable || c != self.placeholder)
    }

    /// Lay raw input into the mask.
    ///
    /// Input that already [`fits`](Self::fits) is returned as is. Otherwise
    /// accepted characters other than the placeholder fill the slots in
    /// order; extra input is dropped and unfilled slots keep the placeholder.
    /// A conforming buffer only contributes the characters in its slots.
    pub fn format(&self, input: &str) -> String {
        if self.fits(input) {
            return input.to_string();
        }

        let source = if self.conforms(input) {
            self.extract(input)
        } else {
            input.to_string()
        };
        let mut buffer = MaskBuffer::from_text(&self.blank());
        let values = source
            .chars()
            .filter(|c| *c != self.placeholder && self.accepts(*c));
        for (&slot, ch) in self.mutable.iter().zip(values) {
            buffer.set_char(slot, ch);
        }
        buffer.into_string()
    }
}
