//! Cosmetic corruption of the landing page title.
//!
//! After [`IDLE_MS`] of normal title the next frame of [`FRAMES`] is shown for
//! [`FRAME_MS`], then the title is restored and the cycle starts over.
//! Compiled only with the `title-glitch` feature.

use super::state::TITLE;

pub const IDLE_MS: u32 = 13_000;
pub const FRAME_MS: u32 = 490;

pub const FRAMES: &[&str] = &[
    "D̴e̸l̵t̶a̷ ̶G̸r̷e̵e̸n̷ ̸C̴h̶a̷r̸a̷c̶t̶e̴r̴ ̵G̸e̸n̶e̶r̸a̴t̴o̶r̶",
    "D__ta Gre_n Ch_RACTER gEn__ator",
    "��� ��� ����� ������",
    "Delta Green Character Crematory",
    "███ ███ █████ ██████",
    "Delta Green Character Generato",
    "Delta Green Character Generat",
    "Delta Green Character Genera",
    "Delta Green Character Gener",
    "Delta Green Character Gene",
    "Delta Green Character Gen",
    "Delta Green Character Ge",
    "Delta Green Character G",
    "Delta Green Character ",
    "Delta Green Character",
    "Delta Green Characte",
    "Delta Green Charact",
    "Delta Green Charac",
    "Delta Green Chara",
    "Delta Green Char",
    "Delta Green Cha",
    "Delta Green Ch",
    "Delta Green C",
    "Delta Green ",
    "Delta Green",
    "Delta Gree",
    "Delta Gre",
    "Delta Gr",
    "Delta G",
    "Delta ",
    "Delta",
    "Delt",
    "Del",
    "De",
    "D",
    "",
    "",
    "",
    "",
    "HARK",
    "HE RISES IN HIS GLORY",
    "PRAISE AND WORSHIP HIS INFINITE MAJESTY",
    "",
    "",
    "",
    "",
    "...",
    "save me...",
    "THIS WAS ALL A DREAM",
    "YOU MUST BELIEVE IT WAS ALL A DREAM",
    "OR YOU WILL BE FOREVER LOST",
];

/// Position in [`FRAMES`].
///
/// Once the last frame has been shown the cursor wraps to `len % (len - 1)`,
/// i.e. the second frame; the fully corrupted first frame only plays once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlitchCycle {
    next: usize,
}

impl GlitchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the frame to show now and moves the cursor on.
    pub fn advance(&mut self) -> &'static str {
        if self.next >= FRAMES.len() {
            self.next %= FRAMES.len() - 1;
        }
        let frame = FRAMES[self.next];
        self.next += 1;
        frame
    }

    /// Title to show between frames.
    pub fn resting_title() -> &'static str {
        TITLE
    }
}
