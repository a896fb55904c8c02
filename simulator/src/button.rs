//! The "new game" push button between the two displays.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use profont::PROFONT_9_POINT;
use sevenseg_common::colors::{BLACK, BUTTON_EDGE, BUTTON_FACE, WHITE};

const CAPTION: &str = "NEW";

const CAPTION_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_9_POINT, BLACK);

const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Bevel width in pixels.
const BEVEL: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    area: Rectangle,
    pressed: bool,
}

impl Button {
    pub const fn new(area: Rectangle) -> Self { Self { area, pressed: false } }

    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    #[inline]
    pub const fn is_pressed(&self) -> bool { self.pressed }

    #[inline]
    pub fn contains(
        &self,
        point: Point,
    ) -> bool {
        self.area.contains(point)
    }

    /// Update the pressed look. Returns `true` if it changed.
    pub fn set_pressed(
        &mut self,
        pressed: bool,
    ) -> bool {
        let changed = self.pressed != pressed;
        self.pressed = pressed;
        changed
    }

    /// Raised or sunken bevel with a centered caption.
    pub fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let (light, dark) = if self.pressed { (BUTTON_EDGE, WHITE) } else { (WHITE, BUTTON_EDGE) };

        self.area.into_styled(PrimitiveStyle::with_fill(BUTTON_FACE)).draw(target)?;

        let Some(br) = self.area.bottom_right() else {
            return Ok(());
        };
        let tl = self.area.top_left;
        for i in 0..BEVEL as i32 {
            let light_style = PrimitiveStyle::with_stroke(light, 1);
            let dark_style = PrimitiveStyle::with_stroke(dark, 1);
            Line::new(Point::new(tl.x + i, tl.y + i), Point::new(br.x - i, tl.y + i))
                .into_styled(light_style)
                .draw(target)?;
            Line::new(Point::new(tl.x + i, tl.y + i), Point::new(tl.x + i, br.y - i))
                .into_styled(light_style)
                .draw(target)?;
            Line::new(Point::new(tl.x + i, br.y - i), Point::new(br.x - i, br.y - i))
                .into_styled(dark_style)
                .draw(target)?;
            Line::new(Point::new(br.x - i, tl.y + i), Point::new(br.x - i, br.y - i))
                .into_styled(dark_style)
                .draw(target)?;
        }

        // Sunken caption shifts one pixel down-right
        let offset = if self.pressed { Point::new(1, 1) } else { Point::zero() };
        Text::with_text_style(CAPTION, self.area.center() + offset, CAPTION_STYLE, CENTERED).draw(target)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
