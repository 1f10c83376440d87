//! Procedural pictures for each stage.
//!
//! Every picture fits a `PICTURE_SIZE` square whose top-left corner is `origin`.
//! Coordinates below are offsets inside that square. Pictures do not paint
//! their own background, so the card surface shows through.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Ellipse, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle},
};

use crate::{
    colors::{GLASS, LEAF, LEAF_DARK, LEMON, LEMON_DARK, LEMONADE, STRAW, TRUNK, WHITE},
    stage::Picture,
};

const LEAF_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LEAF);
const LEAF_DARK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LEAF_DARK);
const TRUNK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TRUNK);
const LEMON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LEMON);
const LEMONADE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LEMONADE);
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const PULP_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LEMON_DARK, 1);
const GLASS_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GLASS, 2);
const STRAW_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(STRAW, 3);

/// Glass body shared by the full and empty glass pictures.
const GLASS_POS: Point = Point::new(30, 26);
const GLASS_SIZE: Size = Size::new(60, 88);

/// Draw `picture` with its top-left corner at `origin`.
pub fn draw_picture<D>(
    display: &mut D,
    picture: Picture,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match picture {
        Picture::LemonTree => draw_lemon_tree(display, origin),
        Picture::LemonSqueeze => draw_lemon(display, origin),
        Picture::LemonDrink => draw_full_glass(display, origin),
        Picture::LemonRestart => draw_empty_glass(display, origin),
    }
}

fn draw_lemon_tree<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(o + Point::new(52, 72), Size::new(16, 44))
        .into_styled(TRUNK_FILL)
        .draw(display)
        .ok();
    // Branch stubs into the canopy
    Triangle::new(o + Point::new(52, 80), o + Point::new(38, 62), o + Point::new(56, 74))
        .into_styled(TRUNK_FILL)
        .draw(display)
        .ok();
    Triangle::new(o + Point::new(68, 80), o + Point::new(82, 60), o + Point::new(64, 74))
        .into_styled(TRUNK_FILL)
        .draw(display)
        .ok();

    Circle::new(o + Point::new(14, 14), 52)
        .into_styled(LEAF_FILL)
        .draw(display)
        .ok();
    Circle::new(o + Point::new(54, 8), 54)
        .into_styled(LEAF_FILL)
        .draw(display)
        .ok();
    Circle::new(o + Point::new(30, 30), 60)
        .into_styled(LEAF_DARK_FILL)
        .draw(display)
        .ok();
    Circle::new(o + Point::new(38, 2), 40)
        .into_styled(LEAF_FILL)
        .draw(display)
        .ok();

    let lemon_style = PrimitiveStyleBuilder::new()
        .fill_color(LEMON)
        .stroke_color(LEMON_DARK)
        .stroke_width(1)
        .build();
    for offset in [
        Point::new(26, 30),
        Point::new(62, 20),
        Point::new(84, 40),
        Point::new(44, 58),
        Point::new(70, 66),
    ] {
        Ellipse::new(o + offset, Size::new(13, 10))
            .into_styled(lemon_style)
            .draw(display)
            .ok();
    }
}

fn draw_lemon<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let peel_style = PrimitiveStyleBuilder::new()
        .fill_color(LEMON)
        .stroke_color(LEMON_DARK)
        .stroke_width(2)
        .build();

    // Pointed ends first so the body covers their inner half
    Ellipse::with_center(o + Point::new(14, 64), Size::new(20, 14))
        .into_styled(peel_style)
        .draw(display)
        .ok();
    Ellipse::with_center(o + Point::new(106, 64), Size::new(20, 14))
        .into_styled(peel_style)
        .draw(display)
        .ok();
    Ellipse::with_center(o + Point::new(60, 64), Size::new(88, 66))
        .into_styled(peel_style)
        .draw(display)
        .ok();

    Ellipse::with_center(o + Point::new(44, 50), Size::new(20, 10))
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Triangle::new(o + Point::new(58, 32), o + Point::new(80, 12), o + Point::new(86, 26))
        .into_styled(LEAF_FILL)
        .draw(display)
        .ok();
    Line::new(o + Point::new(60, 32), o + Point::new(56, 24))
        .into_styled(PrimitiveStyle::with_stroke(TRUNK, 2))
        .draw(display)
        .ok();
}

fn draw_glass_outline<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(o + GLASS_POS, GLASS_SIZE)
        .into_styled(GLASS_STROKE)
        .draw(display)
        .ok();
}

fn draw_full_glass<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(o + Point::new(68, 40), o + Point::new(88, 4))
        .into_styled(STRAW_STROKE)
        .draw(display)
        .ok();

    Rectangle::new(o + GLASS_POS + Point::new(2, 12), GLASS_SIZE - Size::new(4, 14))
        .into_styled(LEMONADE_FILL)
        .draw(display)
        .ok();
    draw_glass_outline(display, o);

    // Lemon slice on the rim
    Circle::new(o + Point::new(18, 12), 26)
        .into_styled(LEMON_FILL)
        .draw(display)
        .ok();
    Circle::new(o + Point::new(22, 16), 18)
        .into_styled(PULP_STROKE)
        .draw(display)
        .ok();
    Line::new(o + Point::new(31, 16), o + Point::new(31, 33))
        .into_styled(PULP_STROKE)
        .draw(display)
        .ok();
    Line::new(o + Point::new(22, 25), o + Point::new(39, 25))
        .into_styled(PULP_STROKE)
        .draw(display)
        .ok();
}

fn draw_empty_glass<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Last drop at the bottom
    Rectangle::new(o + GLASS_POS + Point::new(2, 80), Size::new(GLASS_SIZE.width - 4, 6))
        .into_styled(LEMONADE_FILL)
        .draw(display)
        .ok();
    draw_glass_outline(display, o);

    // Straw resting against the inside wall
    Line::new(o + Point::new(40, 108), o + Point::new(84, 12))
        .into_styled(STRAW_STROKE)
        .draw(display)
        .ok();
}
