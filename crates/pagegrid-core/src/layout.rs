//! The two-breakpoint grid layout store
//!
//! A page has two parallel layouts: a wide authoring grid ("lg", 4 columns)
//! and a narrow grid ("xs", 2 columns). Every visible card has exactly one
//! entry in each; the pair shares `y` (vertical order is synchronized) while
//! `x`/`w` may differ because the narrow grid caps width at 2.
//!
//! All operations are total: out-of-range sizes are clamped, absent ids are
//! ignored. A malformed interactive drag must never crash the editor.
//!
//! [`GridLayout::reconcile`] is the only code path allowed to mutate both
//! breakpoints at once; individual callbacks never hand-sync the pair.

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// One of the two supported layout widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Wide authoring grid
    Lg,
    /// Narrow grid (mobile preview)
    Xs,
}

impl Breakpoint {
    /// Column count, which is also the width cap for entries.
    pub fn columns(&self) -> u32 {
        match self {
            Breakpoint::Lg => 4,
            Breakpoint::Xs => 2,
        }
    }

    pub fn other(&self) -> Breakpoint {
        match self {
            Breakpoint::Lg => Breakpoint::Xs,
            Breakpoint::Xs => Breakpoint::Lg,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Breakpoint::Lg => write!(f, "lg"),
            Breakpoint::Xs => write!(f, "xs"),
        }
    }
}

/// A grid cell span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Clamp to positive dimensions within a breakpoint's column cap.
    pub fn clamped_for(self, breakpoint: Breakpoint) -> Size {
        Size {
            w: self.w.max(1).min(breakpoint.columns()),
            h: self.h.max(1),
        }
    }
}

/// One breakpoint-specific placement of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    pub card_id: CardId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    /// Whether the user may resize this entry
    #[serde(default = "default_true")]
    pub resizable: bool,
    /// Locked entries ignore drag input
    #[serde(default)]
    pub locked: bool,
}

fn default_true() -> bool {
    true
}

impl LayoutEntry {
    fn new(card_id: CardId, x: u32, y: u32, size: Size) -> Self {
        Self {
            card_id,
            x,
            y,
            w: size.w,
            h: size.h,
            resizable: true,
            locked: false,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    fn clamp_for(&mut self, breakpoint: Breakpoint) {
        let size = self.size().clamped_for(breakpoint);
        self.w = size.w;
        self.h = size.h;
    }
}

/// An in-progress drag or resize session.
///
/// At most one entry may be mid-interaction at a time; the input layer
/// serializes sessions, the store only records which entry is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub breakpoint: Breakpoint,
    pub card_id: CardId,
    pub resizing: bool,
}

/// Both breakpoint layouts plus the optional active interaction target.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    lg: Vec<LayoutEntry>,
    xs: Vec<LayoutEntry>,
    drag: Option<DragSession>,
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, breakpoint: Breakpoint) -> &[LayoutEntry] {
        match breakpoint {
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xs => &self.xs,
        }
    }

    fn entries_mut(&mut self, breakpoint: Breakpoint) -> &mut Vec<LayoutEntry> {
        match breakpoint {
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xs => &mut self.xs,
        }
    }

    pub fn entry(&self, breakpoint: Breakpoint, card_id: CardId) -> Option<&LayoutEntry> {
        self.entries(breakpoint).iter().find(|e| e.card_id == card_id)
    }

    pub fn len(&self) -> usize {
        self.lg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lg.is_empty()
    }

    /// First row below the lowest occupied lg cell.
    ///
    /// Placement is append-only: gaps left by deletions are never reclaimed
    /// here, the user closes them by dragging.
    pub fn next_free_row(&self) -> u32 {
        self.lg.iter().map(|e| e.y + e.h).max().unwrap_or(0)
    }

    /// Add a card's geometry to both breakpoints at the bottommost free row.
    ///
    /// The lg entry lands at `x = 0` with the given size; the xs mirror
    /// shares `y` and `h` with width clamped to the narrow cap. No-op when
    /// the card already has an entry.
    pub fn add_entry(&mut self, card_id: CardId, size: Size) {
        if self.entry(Breakpoint::Lg, card_id).is_some() {
            tracing::warn!("add_entry for already placed card {card_id}, ignoring");
            return;
        }
        let y = self.next_free_row();
        let lg_size = size.clamped_for(Breakpoint::Lg);
        let xs_size = size.clamped_for(Breakpoint::Xs);
        self.lg.push(LayoutEntry::new(card_id, 0, y, lg_size));
        self.xs.push(LayoutEntry::new(card_id, 0, y, xs_size));
    }

    /// Remove a card's geometry from both breakpoints.
    ///
    /// Idempotent. Remaining entries keep their positions: no reflow.
    pub fn remove_entry(&mut self, card_id: CardId) {
        self.lg.retain(|e| e.card_id != card_id);
        self.xs.retain(|e| e.card_id != card_id);
        if self.drag.map(|d| d.card_id) == Some(card_id) {
            self.drag = None;
        }
    }

    /// Resize a card: lg takes the clamped size, xs mirrors with `w ≤ 2`.
    pub fn resize_entry(&mut self, card_id: CardId, size: Size) {
        let lg_size = size.clamped_for(Breakpoint::Lg);
        let xs_size = size.clamped_for(Breakpoint::Xs);
        if let Some(e) = self.lg.iter_mut().find(|e| e.card_id == card_id) {
            e.w = lg_size.w;
            e.h = lg_size.h;
        }
        if let Some(e) = self.xs.iter_mut().find(|e| e.card_id == card_id) {
            e.w = xs_size.w;
            e.h = xs_size.h;
        }
    }

    /// Free placement during drag on one breakpoint.
    ///
    /// No collision rejection: overlap is a user-correctable state, not an
    /// error. Locked entries ignore the move.
    pub fn move_entry(&mut self, breakpoint: Breakpoint, card_id: CardId, x: u32, y: u32) {
        if let Some(e) = self
            .entries_mut(breakpoint)
            .iter_mut()
            .find(|e| e.card_id == card_id)
        {
            if e.locked {
                return;
            }
            e.x = x;
            e.y = y;
        }
    }

    /// Bulk replace one breakpoint's entries and re-synchronize the other.
    ///
    /// The given breakpoint is authoritative: its entries are re-clamped to
    /// the breakpoint's width cap, then every matching entry in the other
    /// breakpoint adopts the authoritative `y`. Switching device width never
    /// silently reorders the page.
    pub fn reconcile(&mut self, breakpoint: Breakpoint, mut entries: Vec<LayoutEntry>) {
        for e in &mut entries {
            e.clamp_for(breakpoint);
        }
        let other = breakpoint.other();
        for e in &entries {
            if let Some(peer) = self
                .entries_mut(other)
                .iter_mut()
                .find(|p| p.card_id == e.card_id)
            {
                peer.y = e.y;
            }
        }
        *self.entries_mut(breakpoint) = entries;
    }

    /// Project the authoring layout into the narrow preview layout.
    ///
    /// Copies `x`, `y`, `h` from every lg entry into its xs peer, clamping
    /// `w = min(w, 2)`.
    pub fn project_to_preview(&mut self) {
        for lg in self.lg.clone() {
            if let Some(xs) = self.xs.iter_mut().find(|e| e.card_id == lg.card_id) {
                xs.x = lg.x;
                xs.y = lg.y;
                xs.h = lg.h;
                xs.w = lg.w.min(Breakpoint::Xs.columns());
            }
        }
    }

    /// Project the preview layout back into the authoring layout.
    ///
    /// Widths are restored by doubling, capped at 4. Lossy for odd lg
    /// widths by design; only `y` order is guaranteed to survive the round
    /// trip.
    pub fn project_to_authoring(&mut self) {
        for xs in self.xs.clone() {
            if let Some(lg) = self.lg.iter_mut().find(|e| e.card_id == xs.card_id) {
                lg.x = xs.x;
                lg.y = xs.y;
                lg.h = xs.h;
                lg.w = (xs.w * 2).min(Breakpoint::Lg.columns());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Drag session tracking
    // ─────────────────────────────────────────────────────────────

    /// Record the active drag/resize target. Ignored while another session
    /// is active (the input layer is expected to serialize sessions).
    pub fn begin_drag(&mut self, session: DragSession) {
        if self.drag.is_some() {
            tracing::warn!("drag session already active, ignoring begin_drag");
            return;
        }
        if self.entry(session.breakpoint, session.card_id).is_none() {
            return;
        }
        self.drag = Some(session);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn active_drag(&self) -> Option<DragSession> {
        self.drag
    }

    /// Replace both collections (document load). Clamps every entry and
    /// drops any active drag session.
    pub fn replace_all(&mut self, mut lg: Vec<LayoutEntry>, mut xs: Vec<LayoutEntry>) {
        for e in &mut lg {
            e.clamp_for(Breakpoint::Lg);
        }
        for e in &mut xs {
            e.clamp_for(Breakpoint::Xs);
        }
        self.lg = lg;
        self.xs = xs;
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(layout: &GridLayout, bp: Breakpoint, id: CardId) -> LayoutEntry {
        *layout.entry(bp, id).expect("entry must exist")
    }

    #[test]
    fn test_add_places_at_bottom_free_row() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        let b = CardId(1);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(b, Size::new(1, 1));

        assert_eq!(entry(&layout, Breakpoint::Lg, a).y, 0);
        assert_eq!(entry(&layout, Breakpoint::Lg, b).y, 1);
        assert_eq!(entry(&layout, Breakpoint::Xs, b).y, 1);
    }

    #[test]
    fn test_add_mirrors_xs_with_width_cap() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(4, 2));

        let lg = entry(&layout, Breakpoint::Lg, a);
        let xs = entry(&layout, Breakpoint::Xs, a);
        assert_eq!((lg.x, lg.y, lg.w, lg.h), (0, 0, 4, 2));
        assert_eq!((xs.x, xs.y, xs.w, xs.h), (0, 0, 2, 2));
    }

    #[test]
    fn test_scenario_add_then_resize() {
        // Add a 1x1 QR card, then resize to 2x1: both breakpoints follow
        // because 2 is within the xs cap.
        let mut layout = GridLayout::new();
        let id = CardId(0);
        layout.add_entry(id, Size::new(1, 1));

        let lg = entry(&layout, Breakpoint::Lg, id);
        let xs = entry(&layout, Breakpoint::Xs, id);
        assert_eq!((lg.x, lg.y, lg.w, lg.h), (0, 0, 1, 1));
        assert_eq!((xs.x, xs.y, xs.w, xs.h), (0, 0, 1, 1));

        layout.resize_entry(id, Size::new(2, 1));
        assert_eq!(entry(&layout, Breakpoint::Lg, id).size(), Size::new(2, 1));
        assert_eq!(entry(&layout, Breakpoint::Xs, id).size(), Size::new(2, 1));
    }

    #[test]
    fn test_scenario_delete_leaves_gap() {
        // Add A then B, delete A: B stays at y=1, no compaction.
        let mut layout = GridLayout::new();
        let a = CardId(0);
        let b = CardId(1);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(b, Size::new(1, 1));

        layout.remove_entry(a);
        assert!(layout.entry(Breakpoint::Lg, a).is_none());
        assert!(layout.entry(Breakpoint::Xs, a).is_none());
        assert_eq!(entry(&layout, Breakpoint::Lg, b).y, 1);
        assert_eq!(entry(&layout, Breakpoint::Xs, b).y, 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(1, 1));
        layout.remove_entry(a);
        layout.remove_entry(a);
        layout.remove_entry(CardId(99));
        assert!(layout.is_empty());
    }

    #[test]
    fn test_resize_clamps_per_breakpoint() {
        let mut layout = GridLayout::new();
        let id = CardId(0);
        layout.add_entry(id, Size::new(1, 1));

        layout.resize_entry(id, Size::new(9, 3));
        assert_eq!(entry(&layout, Breakpoint::Lg, id).size(), Size::new(4, 3));
        assert_eq!(entry(&layout, Breakpoint::Xs, id).size(), Size::new(2, 3));

        // Non-positive dimensions clamp up to 1 instead of erroring
        layout.resize_entry(id, Size::new(0, 0));
        assert_eq!(entry(&layout, Breakpoint::Lg, id).size(), Size::new(1, 1));
        assert_eq!(entry(&layout, Breakpoint::Xs, id).size(), Size::new(1, 1));
    }

    #[test]
    fn test_move_is_free_placement() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        let b = CardId(1);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(b, Size::new(1, 1));

        // Overlap is allowed, not rejected
        layout.move_entry(Breakpoint::Lg, b, 0, 0);
        assert_eq!(entry(&layout, Breakpoint::Lg, b).x, 0);
        assert_eq!(entry(&layout, Breakpoint::Lg, b).y, 0);
        // xs untouched by a single-breakpoint move
        assert_eq!(entry(&layout, Breakpoint::Xs, b).y, 1);
    }

    #[test]
    fn test_move_respects_locked_flag() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(1, 1));
        let mut entries = layout.entries(Breakpoint::Lg).to_vec();
        entries[0].locked = true;
        layout.reconcile(Breakpoint::Lg, entries);

        layout.move_entry(Breakpoint::Lg, a, 3, 3);
        assert_eq!(entry(&layout, Breakpoint::Lg, a).x, 0);
    }

    #[test]
    fn test_reconcile_propagates_y_to_other_breakpoint() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        let b = CardId(1);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(b, Size::new(1, 1));

        // The grid widget hands back lg entries with a and b swapped
        let mut entries = layout.entries(Breakpoint::Lg).to_vec();
        entries[0].y = 1;
        entries[1].y = 0;
        layout.reconcile(Breakpoint::Lg, entries);

        for id in [a, b] {
            assert_eq!(
                entry(&layout, Breakpoint::Lg, id).y,
                entry(&layout, Breakpoint::Xs, id).y,
                "lg and xs must agree on y for {id}"
            );
        }
    }

    #[test]
    fn test_reconcile_reclamps_widths() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(2, 1));

        let mut entries = layout.entries(Breakpoint::Xs).to_vec();
        entries[0].w = 4; // wider than the narrow cap
        layout.reconcile(Breakpoint::Xs, entries);

        assert_eq!(entry(&layout, Breakpoint::Xs, a).w, 2);
    }

    #[test]
    fn test_scenario_preview_projection_round_trip() {
        let mut layout = GridLayout::new();
        let full = CardId(0);
        let odd = CardId(1);
        layout.add_entry(full, Size::new(4, 1));
        layout.add_entry(odd, Size::new(3, 1));

        layout.project_to_preview();
        assert_eq!(entry(&layout, Breakpoint::Xs, full).size(), Size::new(2, 1));
        assert_eq!(entry(&layout, Breakpoint::Xs, odd).size(), Size::new(2, 1));

        layout.project_to_authoring();
        // Even widths round-trip losslessly, odd widths do not (3 -> 2 -> 4)
        assert_eq!(entry(&layout, Breakpoint::Lg, full).size(), Size::new(4, 1));
        assert_eq!(entry(&layout, Breakpoint::Lg, odd).size(), Size::new(4, 1));

        // y order survives regardless
        for id in [full, odd] {
            assert_eq!(
                entry(&layout, Breakpoint::Lg, id).y,
                entry(&layout, Breakpoint::Xs, id).y
            );
        }
    }

    #[test]
    fn test_drag_session_is_exclusive() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        let b = CardId(1);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(b, Size::new(1, 1));

        layout.begin_drag(DragSession {
            breakpoint: Breakpoint::Lg,
            card_id: a,
            resizing: false,
        });
        layout.begin_drag(DragSession {
            breakpoint: Breakpoint::Lg,
            card_id: b,
            resizing: false,
        });
        assert_eq!(layout.active_drag().map(|d| d.card_id), Some(a));

        layout.end_drag();
        assert!(layout.active_drag().is_none());
    }

    #[test]
    fn test_removing_dragged_card_clears_session() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(1, 1));
        layout.begin_drag(DragSession {
            breakpoint: Breakpoint::Lg,
            card_id: a,
            resizing: true,
        });
        layout.remove_entry(a);
        assert!(layout.active_drag().is_none());
    }

    #[test]
    fn test_add_entry_twice_is_ignored() {
        let mut layout = GridLayout::new();
        let a = CardId(0);
        layout.add_entry(a, Size::new(1, 1));
        layout.add_entry(a, Size::new(2, 2));
        assert_eq!(layout.entries(Breakpoint::Lg).len(), 1);
        assert_eq!(entry(&layout, Breakpoint::Lg, a).size(), Size::new(1, 1));
    }
}
