//! Off-screen text measurement backed by static font-metric tables.
//!
//! Character widths are in em units (relative to font size). This is an approximation of
//! real glyph advances, good enough to tell a proportional face from the monospace
//! fallback, which is all the font observer needs.
//!
//! Tables cover ASCII 0x20..=0x7E (95 printable characters). Index = (char as usize) - 32.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// Generic CSS families. Always measurable, never need loading.
const GENERIC_FAMILIES: [&str; 5] = ["monospace", "sans-serif", "serif", "system-ui", "cursive"];

/// Static character-width table.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

/// Humanist sans-serif proportions (Inter). Other proportional faces are scaled from it.
static PROPORTIONAL_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
};

/// Every glyph advances 0.6em.
static MONOSPACE_TABLE: FontMetricTable = FontMetricTable {
    widths: [0.6; 95],
    average_char_width: 0.6,
};

/// Metrics for one family: a base table and a horizontal scale.
#[derive(Clone, Copy)]
pub struct FamilyMetrics {
    pub table: &'static FontMetricTable,
    pub scale: f32,
}

impl FamilyMetrics {
    fn proportional(scale: f32) -> Self {
        Self {
            table: &PROPORTIONAL_TABLE,
            scale,
        }
    }

    pub fn monospace() -> Self {
        Self {
            table: &MONOSPACE_TABLE,
            scale: 1.0,
        }
    }

    /// Width in pixels of `text` at `size_px`.
    pub fn measure_px(&self, text: &str, size_px: f32) -> f32 {
        self.table.measure_str(text) * self.scale * size_px
    }
}

/// Looks up approximate metrics for a family name (case-insensitive).
///
/// Unlisted proportional families use the unscaled proportional table.
pub fn metrics_for_family(family: &str) -> FamilyMetrics {
    let lower = family.to_ascii_lowercase();
    if lower == "monospace" || lower.ends_with(" mono") || lower.ends_with(" code") {
        return FamilyMetrics::monospace();
    }
    match lower.as_str() {
        "oswald" => FamilyMetrics::proportional(0.68),
        "crimson text" | "lora" | "libre baskerville" => FamilyMetrics::proportional(0.88),
        "serif" | "merriweather" | "playfair display" => FamilyMetrics::proportional(0.92),
        "roboto" | "open sans" | "pt sans" | "source sans pro" | "fira sans" => {
            FamilyMetrics::proportional(0.96)
        }
        "lato" | "montserrat" | "poppins" | "lexend" => FamilyMetrics::proportional(1.05),
        _ => FamilyMetrics::proportional(1.0),
    }
}

/// A font specification: a size and a prioritised family stack (CSS `font` shorthand).
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
    pub families: Vec<String>,
}

impl FontSpec {
    pub fn new(size_px: f32, families: &[&str]) -> Self {
        Self {
            size_px,
            families: families.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// An off-screen context that reports rendered text widths.
///
/// Implementations never touch a visible display.
pub trait MeasurementSurface: Send + Sync {
    fn measure_text(&self, font: &FontSpec, text: &str) -> f32;
}

/// Measurement surface that resolves a family stack against the set of loaded families.
///
/// The first family in the stack that is generic or loaded is used; an unresolvable
/// stack measures as monospace.
#[derive(Default)]
pub struct MetricsSurface {
    loaded: RwLock<HashSet<String>>,
}

impl MetricsSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a family as available for rendering. Idempotent.
    pub fn mark_loaded(&self, family: &str) {
        self.loaded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(family.trim().to_ascii_lowercase());
    }

    pub fn is_loaded(&self, family: &str) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&family.trim().to_ascii_lowercase())
    }

    fn is_available(&self, family: &str) -> bool {
        GENERIC_FAMILIES.contains(&family.trim().to_ascii_lowercase().as_str())
            || self.is_loaded(family)
    }
}

impl MeasurementSurface for MetricsSurface {
    fn measure_text(&self, font: &FontSpec, text: &str) -> f32 {
        let metrics = font
            .families
            .iter()
            .find(|f| self.is_available(f))
            .map(|f| metrics_for_family(f.trim()))
            .unwrap_or_else(FamilyMetrics::monospace);
        metrics.measure_px(text, font.size_px)
    }
}
