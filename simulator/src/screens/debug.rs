//! Debug page: current stage, session counters and the transition log.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use heapless::Vec;
use lemonade_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use lemonade_common::config::{MAX_CAPTION_LINES, SCREEN_HEIGHT, SCREEN_WIDTH};
use lemonade_common::log::TransitionLog;
use lemonade_common::styles::{LABEL_FONT, LABEL_STYLE_WHITE};
use lemonade_common::widgets::wrap_lines;
use lemonade_common::{Stage, StageMachine};

use crate::metrics::SessionMetrics;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const STAGE_SECTION_Y: i32 = 32;
const SESSION_SECTION_Y: i32 = 136;
const LOG_DIVIDER_Y: i32 = 196;
const LOG_Y: i32 = 210;
const LOG_LINE_HEIGHT: i32 = 12;
const STAT_LINE_HEIGHT: i32 = 13;
const COL_X: i32 = 4;
const UPTIME_X: i32 = 150;
/// Instruction text width after the 9-char label column.
const INSTR_MAX_CHARS: usize = 30;

const DEBUG_BG: Rgb565 = BLACK;
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    machine: &StageMachine,
    metrics: &SessionMetrics,
    log: &TransitionLog,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_stage_section(display, machine);
    draw_session_section(display, metrics);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &SessionMetrics,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, GREEN);

    Text::new("DEBUG VIEW", Point::new(COL_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(UPTIME_X, HEADER_Y), LABEL_STYLE_WHITE)
        .draw(display)
        .ok();
}

fn draw_section_title(
    display: &mut SimulatorDisplay<Rgb565>,
    title: &str,
    y: i32,
) {
    let style = MonoTextStyle::new(LABEL_FONT, GRAY);
    Text::new(title, Point::new(COL_X, y), style).draw(display).ok();
}

fn draw_stage_section(
    display: &mut SimulatorDisplay<Rgb565>,
    machine: &StageMachine,
) {
    let highlight_style = MonoTextStyle::new(LABEL_FONT, YELLOW);
    let stage = machine.current();
    let attributes = stage.attributes();

    draw_section_title(display, "STAGE", STAGE_SECTION_Y);
    let mut y = STAGE_SECTION_Y + STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Current: {}", stage.name());
    Text::new(&s, Point::new(COL_X, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Next:    {}", stage.next().name());
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Image:   {:?}", attributes.image);
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Desc:    {}", attributes.description.text());
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    for line in instruction_lines(stage) {
        Text::new(&line, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Instructions text wrapped under an `Instr:` label, continuation lines indented.
fn instruction_lines(stage: Stage) -> Vec<String<40>, MAX_CAPTION_LINES> {
    let mut lines = Vec::new();
    for (i, text) in wrap_lines(stage.instructions().text(), INSTR_MAX_CHARS).into_iter().enumerate() {
        let label = if i == 0 { "Instr:" } else { "" };
        let mut s: String<40> = String::new();
        let _ = write!(s, "{label:<9}{text}");
        lines.push(s).ok();
    }
    lines
}

fn draw_session_section(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &SessionMetrics,
) {
    draw_section_title(display, "SESSION", SESSION_SECTION_Y);
    let mut y = SESSION_SECTION_Y + STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Taps:    {}", metrics.activations);
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Ignored: {}", metrics.ignored_taps);
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Redraws: {}", metrics.screen_redraws);
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Frames:  {}", metrics.total_frames);
    Text::new(&s, Point::new(COL_X, y), LABEL_STYLE_WHITE).draw(display).ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &TransitionLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, GREEN);
    let text_style = MonoTextStyle::new(LABEL_FONT, ORANGE);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in log.iter() {
        Text::new(">", Point::new(COL_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();
}
