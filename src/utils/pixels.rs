use gpui::{AbsoluteLength, DefiniteLength, Pixels, Window, px};

pub trait PixelsExt {
    /// Vertical padding that makes a single line of text fill this height.
    ///
    /// Never negative: text taller than the height gets no padding.
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels;
}

impl PixelsExt for Pixels {
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels {
        let rem_size = window.rem_size();
        let line = line_height_px(text_size.to_pixels(rem_size), line_height, rem_size);

        let padding = (*self - line) / 2.;
        if padding > px(0.) { padding } else { px(0.) }
    }
}

/// Resolves a line height against the text size it applies to.
fn line_height_px(text_size: Pixels, line_height: DefiniteLength, rem_size: Pixels) -> Pixels {
    match line_height {
        DefiniteLength::Absolute(length) => length.to_pixels(rem_size),
        DefiniteLength::Fraction(fraction) => text_size * fraction,
    }
}
