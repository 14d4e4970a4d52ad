//! The update mode bitflag.

use bitflags::bitflags;

bitflags! {
    /// What the embedding loop should do after an event or a pass.
    ///
    /// Widgets return an `Update` from event handling and calculation so
    /// the embedder can skip redraws when nothing changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Update: u8 {
        /// Visual state changed; redraw on the next render pass.
        const DRAW = 0b001;
        /// Measured geometry changed; ancestors may need to re-layout.
        const LAYOUT = 0b010;
        /// Re-run everything regardless of caching.
        const FORCE = 0b100;
    }
}
