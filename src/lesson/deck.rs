//! The lesson deck: fourteen widescreen slides built from filled rectangles
//! and text boxes on a blank layout.

use crate::common::{Length, RGBColor, Result};
use crate::layout::{
    Alignment, Canvas, Document, DocumentProperties, Page, Paragraph, Rect, RunStyle, Shape,
    TextBox,
};
use crate::lesson::palette::{
    GOLD, GREEN, LGRAY, NAVY, ORANGE, PURPLE, RULE, TEAL, WHITE, darken,
};

/// Default output file name.
pub const FILE_NAME: &str = "Ex 1K - Applications (New Engaging Lesson).pptx";

const SLIDE_WIDTH: f64 = 13.33;
const SLIDE_HEIGHT: f64 = 7.5;

const DGRAY: RGBColor = RGBColor::new(0x44, 0x44, 0x44);
const DEEP_NAVY: RGBColor = RGBColor::new(0x1E, 0x2D, 0x72);
const TAG_TEAL: RGBColor = RGBColor::new(0x00, 0x6E, 0x73);
const MAGENTA: RGBColor = RGBColor::new(0x8B, 0x00, 0x8B);
const CREAM: RGBColor = RGBColor::new(0xFF, 0xF8, 0xE7);
const PALE_BLUE: RGBColor = RGBColor::new(0xE8, 0xF4, 0xFD);
const MINT: RGBColor = RGBColor::new(0xF0, 0xF8, 0xF0);
const LAVENDER: RGBColor = RGBColor::new(0xF5, 0xEC, 0xFF);
const OFF_WHITE: RGBColor = RGBColor::new(0xFA, 0xFA, 0xFA);
const SIGNAL_RED: RGBColor = RGBColor::new(0xD0, 0x32, 0x2A);

/// Slides in presentation order.
const SLIDES: [fn(&mut Page); 14] = [
    title_slide,
    roadmap_slide,
    warm_up_slide,
    intentions_slide,
    method_slide,
    example_one_question_slide,
    example_one_solution_slide,
    example_two_question_slide,
    example_two_solution_slide,
    practice_slide,
    special_cases_slide,
    real_world_slide,
    challenge_slide,
    exit_ticket_slide,
];

/// Build the deck.
pub fn build() -> Result<Document> {
    let mut deck = Document::with_properties(DocumentProperties {
        title: Some("Applications of Simultaneous Linear Equations".to_string()),
        subject: Some("Ex 1K | 55-Minute Lesson".to_string()),
        author: None,
    });
    for slide in SLIDES {
        slide(deck.add_page(Canvas::widescreen()));
    }
    log::debug!("built deck with {} slides", deck.pages().len());
    Ok(deck)
}

/// Formatting of a single-run text box.
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    run: RunStyle,
    align: Alignment,
    wrap: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(18.0, WHITE)
    }
}

impl TextStyle {
    fn new(size: f64, color: RGBColor) -> Self {
        Self {
            run: RunStyle::new(size, color),
            align: Alignment::Left,
            wrap: true,
        }
    }

    fn bold(mut self) -> Self {
        self.run = self.run.bold(true);
        self
    }

    fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }
}

#[inline]
fn at(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::from_inches(left, top, width, height)
}

fn rect(page: &mut Page, frame: Rect, fill: RGBColor) {
    page.add_shape(Shape::rect(frame).fill(fill));
}

fn text(page: &mut Page, text: &str, frame: Rect, style: TextStyle) {
    page.add_text_box(TextBox::with_text(frame, text, style.run, style.align).wrap(style.wrap));
}

/// Follow-on paragraph of a multi-paragraph text box.
fn para(text: &str, style: RunStyle) -> Paragraph {
    Paragraph::with_run(text, style).space_before(6.0)
}

/// Filled rectangle with a centered bold label inset from its edges.
fn label_box(page: &mut Page, label: &str, frame: Rect, bg: RGBColor, fg: RGBColor, size: f64) {
    rect(page, frame, bg);
    text(
        page,
        label,
        frame.inset(Length::from_inches(0.05), Length::from_inches(0.03)),
        TextStyle::new(size, fg).bold().centered(),
    );
}

fn background(page: &mut Page, color: RGBColor) {
    rect(page, at(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT), color);
}

/// Navy title bar across the top of the slide.
fn header_bar(page: &mut Page, title: &str, subtitle: Option<&str>) {
    rect(page, at(0.0, 0.0, SLIDE_WIDTH, 1.35), NAVY);
    text(page, title, at(0.25, 0.1, 10.0, 0.75), TextStyle::new(32.0, WHITE).bold());
    if let Some(subtitle) = subtitle {
        text(page, subtitle, at(0.25, 0.78, 10.0, 0.5), TextStyle::new(16.0, TEAL));
    }
}

fn accent_bar(page: &mut Page, frame: Rect, color: RGBColor) {
    rect(page, frame, color);
}

/// `count` thin writing lines, `pitch` inches apart.
fn writing_lines(page: &mut Page, left: f64, top: f64, width: f64, count: usize, pitch: f64) {
    for i in 0..count {
        rect(page, at(left, top + i as f64 * pitch, width, 0.03), RULE);
    }
}

fn title_slide(page: &mut Page) {
    background(page, NAVY);
    rect(page, at(0.0, 5.5, SLIDE_WIDTH, 0.12), TEAL);
    rect(page, at(10.5, 0.0, 2.83, 7.5), DEEP_NAVY);
    rect(page, at(10.7, 0.8, 2.2, 0.08), GOLD);
    rect(page, at(10.7, 6.4, 2.2, 0.08), GOLD);

    label_box(page, "YEAR 10 MATHEMATICS", at(0.4, 0.5, 3.2, 0.45), TEAL, WHITE, 13.0);
    text(page, "Applications of", at(0.4, 1.2, 9.5, 1.0), TextStyle::new(48.0, WHITE));
    text(page, "Simultaneous", at(0.4, 2.0, 9.5, 1.1), TextStyle::new(60.0, GOLD).bold());
    text(page, "Linear Equations", at(0.4, 2.95, 9.5, 1.0), TextStyle::new(48.0, WHITE));
    text(page, "Ex 1K  |  55-Minute Lesson", at(0.4, 4.1, 9.0, 0.5), TextStyle::new(20.0, LGRAY));

    for (label, left) in [("📘 APPLY", 0.4), ("📊 SOLVE", 2.2), ("🌍 CONNECT", 4.0)] {
        label_box(page, label, at(left, 4.85, 1.55, 0.42), TAG_TEAL, WHITE, 12.0);
    }
}

fn roadmap_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "Today's Lesson Roadmap", Some("55 minutes — where we're headed"));

    let stages = [
        ("⚡ WARM UP", "0–5 min", "Quick puzzle to activate prior knowledge", TEAL),
        ("🎯 INTENTIONS", "5–10 min", "What we'll learn and why it matters", PURPLE),
        ("📖 LEARN", "10–25 min", "Key steps + two worked examples", NAVY),
        ("🏋 PRACTICE", "25–45 min", "Graduated exercises with scaffolding", GREEN),
        ("🎮 CHALLENGE", "45–52 min", "Real-world problem-solving race", ORANGE),
        ("🪞 REFLECT", "52–55 min", "Exit ticket + learning check", MAGENTA),
    ];
    for (i, (title, time, desc, color)) in stages.into_iter().enumerate() {
        let left = 0.35 + i as f64 * 2.1;
        rect(page, at(left, 1.55, 1.85, 3.2), color);
        rect(page, at(left, 1.55, 1.85, 0.55), darken(color, 30));
        text(page, title, at(left + 0.05, 1.57, 1.75, 0.5), TextStyle::new(11.0, WHITE).bold().centered());
        text(page, time, at(left + 0.05, 2.13, 1.75, 0.4), TextStyle::new(13.0, GOLD).bold().centered());
        text(page, desc, at(left + 0.08, 2.55, 1.7, 1.9), TextStyle::new(11.0, WHITE).centered());
    }

    text(
        page,
        "💡 Interactive website open throughout — earn points as you go!",
        at(0.5, 6.5, 12.0, 0.55),
        TextStyle::new(15.0, NAVY).bold().centered(),
    );
}

fn warm_up_slide(page: &mut Page) {
    background(page, CREAM);
    header_bar(page, "⚡ Warm-Up  |  5 Minutes", Some("Decode the mystery amounts!"));

    rect(page, at(0.3, 1.5, 8.0, 4.8), WHITE);
    accent_bar(page, at(0.3, 1.5, 8.0, 0.07), GOLD);
    page.add_text_box(
        TextBox::new(at(0.5, 1.65, 7.6, 4.5))
            .paragraph(Paragraph::with_run(
                "🧩  The Snack Bar Problem",
                RunStyle::new(20.0, NAVY).bold(true),
            ))
            .paragraph(
                para("At the school canteen:", RunStyle::new(15.0, DGRAY).italic(true))
                    .space_before(10.0),
            )
            .paragraph(para("   • 2 pies + 3 drinks cost $13.00", RunStyle::new(17.0, DGRAY)))
            .paragraph(para("   • 4 pies + 1 drink cost $15.00", RunStyle::new(17.0, DGRAY)))
            .paragraph(para("", RunStyle::new(10.0, DGRAY)))
            .paragraph(para(
                "Can you figure out the price of one pie and one drink?",
                RunStyle::new(16.0, NAVY).bold(true),
            ))
            .paragraph(para("", RunStyle::new(8.0, DGRAY)))
            .paragraph(para(
                "💬 Discuss with your neighbour for 2 minutes, then share!",
                RunStyle::new(14.0, TEAL).italic(true),
            )),
    );

    rect(page, at(8.6, 1.5, 4.4, 2.2), TEAL);
    text(page, "💡 Hint", at(8.7, 1.55, 4.2, 0.45), TextStyle::new(16.0, WHITE).bold());
    text(
        page,
        "Let p = price of a pie\nLet d = price of a drink\n\nWrite TWO equations\nand solve!",
        at(8.7, 2.0, 4.2, 1.6),
        TextStyle::new(15.0, WHITE),
    );

    rect(page, at(8.6, 3.9, 4.4, 2.4), NAVY);
    text(page, "✅ Answer (reveal after!)", at(8.7, 3.95, 4.2, 0.45), TextStyle::new(13.0, GOLD).bold());
    text(
        page,
        "2p + 3d = 13  … (1)\n4p +  d = 15  … (2)\n\nSolving: p = $3.00,  d = $2.33",
        at(8.7, 4.42, 4.2, 1.75),
        TextStyle::new(14.0, WHITE),
    );
}

fn intentions_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "🎯 Learning Intentions", Some("By the end of this lesson you will be able to…"));

    let intentions = [
        ("1", "Set up equations",
         "Translate a real-world worded problem into a pair of linear equations by carefully defining variables."),
        ("2", "Choose your method",
         "Select the most efficient solving method (substitution or elimination) based on the structure of the equations."),
        ("3", "Solve & interpret",
         "Solve simultaneously and communicate the answer back in the context of the original problem."),
        ("4", "Spot special cases",
         "Identify when two equations represent parallel lines (no solution) or the same line (infinite solutions)."),
    ];
    for (i, (number, short, detail)) in intentions.into_iter().enumerate() {
        let left = if i % 2 == 0 { 0.35 } else { 6.85 };
        let top = if i < 2 { 1.7 } else { 4.2 };
        rect(page, at(left, top, 6.1, 2.1), WHITE);
        accent_bar(page, at(left, top, 6.1, 0.08), if i % 2 == 0 { TEAL } else { GOLD });
        rect(page, at(left + 0.1, top + 0.25, 0.55, 0.55), NAVY);
        text(page, number, at(left + 0.1, top + 0.24, 0.55, 0.55), TextStyle::new(22.0, WHITE).bold().centered());
        text(page, short, at(left + 0.78, top + 0.15, 5.0, 0.5), TextStyle::new(18.0, NAVY).bold());
        text(page, detail, at(left + 0.15, top + 0.72, 5.8, 1.2), TextStyle::new(14.0, DGRAY));
    }
}

fn method_slide(page: &mut Page) {
    background(page, PALE_BLUE);
    header_bar(page, "📐 The 4-Step Method", Some("A reliable strategy for every worded problem"));

    let steps = [
        (TEAL, "STEP 1", "Define Variables",
         "Choose letters that make sense.\nWrite them down clearly.\nE.g.  \"Let a = number of adults\""),
        (GREEN, "STEP 2", "Form Equations",
         "Read carefully — each fact gives you ONE equation.\nCheck: you need exactly 2 equations\nfor 2 unknowns."),
        (ORANGE, "STEP 3", "Solve Simultaneously",
         "Pick elimination or substitution.\nShow ALL working — method marks matter!\nLabel each equation (1) and (2)."),
        (PURPLE, "STEP 4", "Answer in Context",
         "Write a sentence using the original wording.\nInclude units (e.g. $, kg, hours).\nSanity-check: does the answer make sense?"),
    ];
    let last = steps.len() - 1;
    for (i, (color, step, title, body)) in steps.into_iter().enumerate() {
        let left = 0.3 + i as f64 * 3.2;
        rect(page, at(left, 1.55, 2.9, 5.2), WHITE);
        rect(page, at(left, 1.55, 2.9, 0.9), color);
        text(page, step, at(left + 0.05, 1.57, 2.8, 0.42), TextStyle::new(13.0, WHITE).bold().centered());
        // Connector arrow to the next card
        if i < last {
            rect(page, at(left + 2.92, 3.8, 0.25, 0.18), color);
            text(page, "▶", at(left + 2.93, 3.75, 0.22, 0.28), TextStyle::new(14.0, color).bold().centered());
        }
        text(page, title, at(left + 0.1, 2.5, 2.7, 0.52), TextStyle::new(17.0, color).bold().centered());
        text(page, body, at(left + 0.15, 3.08, 2.65, 3.4), TextStyle::new(13.0, DGRAY));
    }

    rect(page, at(0.3, 6.9, 12.7, 0.42), NAVY);
    text(
        page,
        "💡 Pro tip: underline the key numbers and circle the unknowns as you read the question!",
        at(0.5, 6.92, 12.5, 0.38),
        TextStyle::new(13.0, GOLD).bold().centered(),
    );
}

fn example_one_question_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "📖 Worked Example 1", Some("Setting up and solving — ticket sales"));

    rect(page, at(0.3, 1.55, 8.5, 2.8), WHITE);
    accent_bar(page, at(0.3, 1.55, 8.5, 0.08), GOLD);
    page.add_text_box(
        TextBox::new(at(0.45, 1.7, 8.2, 2.5))
            .paragraph(Paragraph::with_run(
                "🎟️  The School Concert",
                RunStyle::new(19.0, NAVY).bold(true),
            ))
            .paragraph(
                para(
                    "Adult tickets cost $12 and student tickets cost $7. \
                     A total of 350 tickets were sold, raising $3150.",
                    RunStyle::new(15.0, DGRAY),
                )
                .space_before(8.0),
            )
            .paragraph(para(
                "How many adult tickets and how many student tickets were sold?",
                RunStyle::new(16.0, NAVY).bold(true),
            )),
    );

    let step_labels = [
        (TEAL, "STEP 1\nDefine Variables", 1.62),
        (GREEN, "STEP 2\nForm Equations", 2.55),
        (ORANGE, "STEP 3\nSolve", 3.85),
        (PURPLE, "STEP 4\nAnswer", 5.5),
    ];
    for (color, label, top) in step_labels {
        rect(page, at(9.05, top, 1.5, 0.7), color);
        text(page, label, at(9.1, top + 0.03, 1.4, 0.65), TextStyle::new(10.0, WHITE).bold().centered());
        rect(page, at(8.85, top + 0.3, 0.22, 0.06), color);
    }

    rect(page, at(0.3, 4.5, 12.7, 2.7), WHITE);
    accent_bar(page, at(0.3, 4.5, 12.7, 0.07), NAVY);
    text(
        page,
        "✍️  Your turn — set it up!  (Try before we work through it together)",
        at(0.45, 4.56, 12.5, 0.45),
        TextStyle::new(14.0, NAVY).bold(),
    );
    writing_lines(page, 0.45, 5.12, 12.4, 4, 0.44);
}

fn example_one_solution_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "📖 Worked Example 1 — Solution", None);

    let steps = [
        (TEAL, "STEP 1 — Define Variables",
         "Let  a  =  number of adult tickets sold\nLet  s  =  number of student tickets sold"),
        (GREEN, "STEP 2 — Form Equations",
         "Total tickets:    a  +  s  =  350   … (1)\nTotal revenue:  12a  +  7s  =  3150  … (2)"),
        (ORANGE, "STEP 3 — Solve (Elimination)",
         "Multiply (1) by 7:    7a + 7s = 2450    … (3)\n\
          Subtract (3) from (2):   5a = 700\n\
          ∴  a = 140\nSubstitute into (1):  140 + s = 350  →  s = 210"),
        (PURPLE, "STEP 4 — Answer in Context",
         "140 adult tickets and 210 student tickets were sold.\n\
          ✅ Check: 140 + 210 = 350 ✓   and   12(140) + 7(210) = 1680 + 1470 = 3150 ✓"),
    ];
    for (i, (color, title, body)) in steps.into_iter().enumerate() {
        let left = if i % 2 == 0 { 0.3 } else { 6.85 };
        let top = if i < 2 { 1.55 } else { 4.05 };
        rect(page, at(left, top, 6.1, 2.15), WHITE);
        rect(page, at(left, top, 6.1, 0.52), color);
        text(page, title, at(left + 0.1, top + 0.07, 5.9, 0.42), TextStyle::new(14.0, WHITE).bold());
        text(page, body, at(left + 0.15, top + 0.62, 5.8, 1.45), TextStyle::new(14.0, DGRAY));
    }
}

fn example_two_question_slide(page: &mut Page) {
    background(page, MINT);
    header_bar(page, "📖 Worked Example 2", Some("A more complex application — break-even"));

    rect(page, at(0.3, 1.55, 12.7, 2.7), WHITE);
    accent_bar(page, at(0.3, 1.55, 12.7, 0.08), TEAL);
    page.add_text_box(
        TextBox::new(at(0.45, 1.7, 12.3, 2.4))
            .paragraph(Paragraph::with_run(
                "🏭  The Cupcake Business",
                RunStyle::new(19.0, NAVY).bold(true),
            ))
            .paragraph(
                para(
                    "Emma starts a cupcake business. She spends $240 on equipment (fixed cost) \
                     and $1.50 to make each cupcake. She sells each cupcake for $4.50.",
                    RunStyle::new(15.0, DGRAY),
                )
                .space_before(8.0),
            )
            .paragraph(para(
                "(a)  Write equations for Emma's total Cost (C) and total Revenue (R) \
                 in terms of n, the number of cupcakes.",
                RunStyle::new(15.0, NAVY).bold(true),
            ))
            .paragraph(
                para(
                    "(b)  Find the break-even point — how many cupcakes must she sell?",
                    RunStyle::new(15.0, NAVY).bold(true),
                )
                .space_before(4.0),
            ),
    );

    for (left, label, color) in [(0.3, "Cost Equation", TEAL), (6.65, "Revenue Equation", GREEN)] {
        rect(page, at(left, 4.35, 6.1, 2.85), WHITE);
        rect(page, at(left, 4.35, 6.1, 0.48), color);
        text(page, label, at(left + 0.1, 4.37, 5.9, 0.44), TextStyle::new(14.0, WHITE).bold());
        writing_lines(page, left + 0.15, 4.95, 5.8, 4, 0.5);
    }
}

fn example_two_solution_slide(page: &mut Page) {
    background(page, MINT);
    header_bar(page, "📖 Worked Example 2 — Solution", Some("Break-even analysis"));

    rect(page, at(0.3, 1.55, 5.9, 2.5), WHITE);
    rect(page, at(0.3, 1.55, 5.9, 0.52), TEAL);
    text(page, "(a)  Equations", at(0.4, 1.59, 5.7, 0.44), TextStyle::new(15.0, WHITE).bold());
    text(
        page,
        "Cost:     C  =  1.5n  +  240\n\nRevenue:  R  =  4.5n\n\n(n = number of cupcakes sold)",
        at(0.45, 2.18, 5.7, 1.75),
        TextStyle::new(16.0, DGRAY),
    );

    rect(page, at(6.55, 1.55, 6.45, 2.5), WHITE);
    rect(page, at(6.55, 1.55, 6.45, 0.52), GREEN);
    text(page, "(b)  Break-even: set C = R", at(6.65, 1.59, 6.2, 0.44), TextStyle::new(15.0, WHITE).bold());
    text(
        page,
        "1.5n + 240  =  4.5n\n240  =  3n\nn  =  80 cupcakes\n\n∴ Emma must sell 80 cupcakes to break even.",
        at(6.65, 2.18, 6.2, 1.75),
        TextStyle::new(16.0, DGRAY),
    );

    rect(page, at(0.3, 4.2, 12.7, 3.0), NAVY);
    text(
        page,
        "📊 What does this look like graphically?",
        at(0.5, 4.25, 12.5, 0.5),
        TextStyle::new(17.0, GOLD).bold().centered(),
    );
    text(
        page,
        "• The Cost line starts at (0, 240) — fixed cost — and rises with gradient 1.5\n\
         • The Revenue line passes through the origin with gradient 4.5\n\
         • They intersect at the point (80, 360) — the break-even point\n\
         • For n < 80: Cost > Revenue → LOSS       For n > 80: Revenue > Cost → PROFIT",
        at(0.5, 4.82, 12.5, 2.2),
        TextStyle::new(15.0, WHITE),
    );
}

fn practice_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "🏋 Practice Time  |  20 Minutes", Some("Graduated exercises — choose your level!"));

    let levels = [
        (GREEN, "🌱 FOUNDATION\n(Q1–5)",
         "Highly scaffolded problems with equation frames provided. \
          Focus on setting up equations correctly and practising elimination."),
        (TEAL, "📘 STANDARD\n(Q4–9)",
         "Mixed worded problems across different contexts. \
          Choose your own method. Full working required."),
        (ORANGE, "🔥 ADVANCED\n(Q8–14)",
         "Multi-step problems, break-even scenarios, and proof questions. \
          Extend to parallel/perpendicular line analysis."),
    ];
    for (i, (color, title, desc)) in levels.into_iter().enumerate() {
        let left = 0.3 + i as f64 * 4.3;
        rect(page, at(left, 1.6, 4.0, 4.5), WHITE);
        rect(page, at(left, 1.6, 4.0, 1.1), color);
        text(page, title, at(left + 0.1, 1.65, 3.8, 1.0), TextStyle::new(17.0, WHITE).bold().centered());
        text(page, desc, at(left + 0.15, 2.82, 3.7, 3.1), TextStyle::new(14.0, DGRAY));
    }

    rect(page, at(0.3, 6.2, 12.7, 1.1), NAVY);
    text(
        page,
        "📝 Show ALL working    |    ✅ Write final answers as sentences    |    \
         🤝 Ask your neighbour before asking me    |    🎮 Log answers on the website to earn XP!",
        at(0.5, 6.28, 12.5, 0.9),
        TextStyle::new(13.0, WHITE).centered(),
    );
}

fn special_cases_slide(page: &mut Page) {
    background(page, LAVENDER);
    header_bar(page, "⚠️ Special Cases", Some("When things don't work out as expected…"));

    let cases = [
        (TEAL, "✅ ONE Solution",
         "Lines intersect at exactly one point.\n\n\
          Gradients are DIFFERENT.\n\n\
          e.g.  y = 2x + 1\n       y = x + 4\n\n\
          Solve to find the unique (x, y).",
         "NORMAL CASE"),
        (ORANGE, "🚫 NO Solution",
         "Lines are PARALLEL — they never meet.\n\n\
          Same gradient, different y-intercept.\n\n\
          e.g.  y = 3x + 2\n       y = 3x − 5\n\n\
          Elimination gives: 0 = 7  (impossible!)",
         "PARALLEL LINES"),
        (PURPLE, "∞  INFINITE Solutions",
         "Lines are IDENTICAL — they sit on top of each other.\n\n\
          Same gradient AND same y-intercept.\n\n\
          e.g.  2y = 4x + 6\n       y = 2x + 3\n\n\
          Elimination gives: 0 = 0  (always true!)",
         "SAME LINE"),
    ];
    for (i, (color, title, body, tag)) in cases.into_iter().enumerate() {
        let left = 0.3 + i as f64 * 4.3;
        rect(page, at(left, 1.55, 4.0, 5.3), WHITE);
        rect(page, at(left, 1.55, 4.0, 0.8), color);
        text(page, tag, at(left + 0.1, 1.57, 3.8, 0.35), TextStyle::new(11.0, WHITE).bold().centered());
        text(page, title, at(left + 0.1, 1.9, 3.8, 0.44), TextStyle::new(18.0, color).bold().centered());
        text(page, body, at(left + 0.15, 2.45, 3.75, 4.2), TextStyle::new(14.0, DGRAY));
    }
}

fn real_world_slide(page: &mut Page) {
    background(page, PALE_BLUE);
    header_bar(
        page,
        "🌍 Where Is This Used in the Real World?",
        Some("Simultaneous equations are everywhere!"),
    );

    let contexts = [
        ("💰", "Economics", "Finding equilibrium where supply meets demand."),
        ("🏗️", "Engineering", "Balancing forces in structures and circuits."),
        ("🧪", "Chemistry", "Mixing solutions to hit a target concentration."),
        ("📈", "Business", "Break-even analysis and profit optimisation."),
        ("🏥", "Medicine", "Calculating drug dosages across compartments."),
        ("🎮", "Game Design", "Balancing character stats and resource systems."),
    ];
    for (i, (icon, field, desc)) in contexts.into_iter().enumerate() {
        let (row, col) = (i / 3, i % 3);
        let left = 0.4 + col as f64 * 4.25;
        let top = 1.65 + row as f64 * 2.35;
        rect(page, at(left, top, 3.9, 2.05), WHITE);
        rect(page, at(left, top, 3.9, 0.07), if row == 0 { TEAL } else { GOLD });
        text(page, icon, at(left + 0.1, top + 0.12, 0.7, 0.65), TextStyle::new(30.0, NAVY).centered());
        text(page, field, at(left + 0.8, top + 0.18, 2.9, 0.48), TextStyle::new(17.0, NAVY).bold());
        text(page, desc, at(left + 0.15, top + 0.72, 3.65, 1.1), TextStyle::new(13.0, DGRAY));
    }
}

fn challenge_slide(page: &mut Page) {
    background(page, NAVY);
    rect(page, at(0.0, 0.0, SLIDE_WIDTH, 0.08), GOLD);
    rect(page, at(0.0, 7.42, SLIDE_WIDTH, 0.08), GOLD);

    text(
        page,
        "🎮  CHALLENGE ROUND",
        at(0.5, 0.4, 12.3, 0.8),
        TextStyle::new(38.0, GOLD).bold().centered(),
    );
    text(
        page,
        "7 minutes  —  solve as many as you can  —  earn XP on the website!",
        at(0.5, 1.1, 12.3, 0.5),
        TextStyle::new(16.0, LGRAY).centered(),
    );

    let challenges = [
        ("⭐ 10 XP", "QUICK FIRE",
         "The sum of two numbers is 56.\nTheir difference is 14.\nFind both numbers."),
        ("⭐⭐ 20 XP", "REAL WORLD",
         "A phone plan charges $25/month + $0.10/text.\nAnother charges $15/month + $0.25/text.\nFor how many texts are they equal?"),
        ("⭐⭐⭐ 30 XP", "BOSS LEVEL",
         "Two cars leave cities 480 km apart at the same time.\nCar A travels at 90 km/h, Car B at 70 km/h.\nWhen and where do they meet?"),
    ];
    for (i, (xp, title, problem)) in challenges.into_iter().enumerate() {
        let left = 0.4 + i as f64 * 4.25;
        rect(page, at(left, 1.8, 3.9, 5.2), DEEP_NAVY);
        rect(page, at(left, 1.8, 3.9, 0.07), TEAL);
        text(page, xp, at(left + 0.1, 1.88, 3.7, 0.42), TextStyle::new(14.0, GOLD).bold().centered());
        text(page, title, at(left + 0.1, 2.32, 3.7, 0.5), TextStyle::new(16.0, WHITE).bold().centered());
        rect(page, at(left + 0.15, 2.88, 3.6, 0.03), TEAL);
        text(page, problem, at(left + 0.15, 3.0, 3.65, 3.6), TextStyle::new(15.0, LGRAY));
    }

    text(
        page,
        "🏆 Top 3 scorers on the leaderboard win a bonus prize!",
        at(0.5, 7.1, 12.3, 0.3),
        TextStyle::new(13.0, GOLD).bold().centered(),
    );
}

fn exit_ticket_slide(page: &mut Page) {
    background(page, LGRAY);
    header_bar(page, "🪞 Reflect & Exit Ticket", Some("3 minutes — show what you know"));

    // Traffic-light self-assessment
    rect(page, at(0.3, 1.55, 4.5, 5.55), WHITE);
    accent_bar(page, at(0.3, 1.55, 4.5, 0.07), NAVY);
    text(
        page,
        "Self-Assessment\nTraffic Light",
        at(0.4, 1.65, 4.3, 0.75),
        TextStyle::new(16.0, NAVY).bold().centered(),
    );

    let lights = [
        (GREEN, "🟢 Green  — Got it!",
         "I can set up AND solve worded simultaneous equation problems independently."),
        (GOLD, "🟡 Yellow — Nearly!",
         "I can set up the equations but need more practice with the solving methods."),
        (SIGNAL_RED, "🔴 Red — Need help!",
         "I'm still unsure about how to start worded problems — more practice needed."),
    ];
    for (i, (color, label, desc)) in lights.into_iter().enumerate() {
        let top = 2.5 + i as f64 * 1.55;
        rect(page, at(0.4, top, 4.2, 1.35), OFF_WHITE);
        rect(page, at(0.4, top, 0.18, 1.35), color);
        text(page, label, at(0.65, top + 0.1, 3.8, 0.4), TextStyle::new(13.0, DGRAY).bold());
        text(page, desc, at(0.65, top + 0.52, 3.8, 0.75), TextStyle::new(12.0, DGRAY));
    }

    rect(page, at(5.05, 1.55, 8.0, 5.55), WHITE);
    accent_bar(page, at(5.05, 1.55, 8.0, 0.07), GOLD);
    text(page, "📝 Exit Ticket", at(5.15, 1.64, 7.8, 0.5), TextStyle::new(18.0, NAVY).bold());
    text(
        page,
        "On your mini whiteboard (or worksheet):\n\n\
         A jar contains 20-cent and 50-cent coins.\n\
         There are 30 coins worth $12.00 in total.\n\n\
         Find the number of each type of coin.",
        at(5.15, 2.22, 7.8, 2.2),
        TextStyle::new(16.0, DGRAY),
    );
    writing_lines(page, 5.15, 4.55, 7.7, 5, 0.44);

    rect(page, at(5.05, 6.5, 8.0, 0.55), NAVY);
    text(
        page,
        "📚 Homework: Exercise 1K — see working programs on the class portal",
        at(5.15, 6.54, 7.8, 0.45),
        TextStyle::new(12.0, GOLD).bold(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Element;
    use crate::render::{Format, render};

    fn shapes(page: &Page) -> impl Iterator<Item = &Shape> {
        page.elements().iter().filter_map(|element| match element {
            Element::Shape(shape) => Some(shape),
            _ => None,
        })
    }

    fn text_boxes(page: &Page) -> impl Iterator<Item = &TextBox> {
        page.elements().iter().filter_map(|element| match element {
            Element::TextBox(text_box) => Some(text_box),
            _ => None,
        })
    }

    #[test]
    fn test_fourteen_widescreen_slides() {
        let deck = build().unwrap();
        assert_eq!(deck.pages().len(), 14);
        for page in deck.pages() {
            assert_eq!(page.canvas().width().emus(), 12_188_952);
            assert_eq!(page.canvas().height().emus(), 6_858_000);
            assert!(!page.is_empty());
        }
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_title_slide() {
        let deck = build().unwrap();
        let title = &deck.pages()[0];

        let backdrop = shapes(title).next().unwrap();
        assert_eq!(backdrop.frame, at(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT));
        assert_eq!(backdrop.fill, Some(NAVY));

        let headline = text_boxes(title).find(|t| t.text() == "Simultaneous").unwrap();
        let run = &headline.paragraphs[0].runs[0];
        assert_eq!(run.style.font_size, 60.0);
        assert!(run.style.is_bold());
        assert_eq!(run.style.color, GOLD);
    }

    #[test]
    fn test_roadmap_headers_are_darkened() {
        let deck = build().unwrap();
        let fills: Vec<_> = shapes(&deck.pages()[1]).filter_map(|s| s.fill).collect();
        assert!(fills.contains(&darken(TEAL, 30)));
        assert!(fills.contains(&darken(MAGENTA, 30)));
    }

    #[test]
    fn test_headers_and_paint_order() {
        let deck = build().unwrap();
        for page in &deck.pages()[1..12] {
            let mut shapes = shapes(page);
            // Background first, header bar painted over it.
            let background = shapes.next().unwrap();
            let header = shapes.next().unwrap();
            assert_eq!(background.frame, at(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT));
            assert_eq!(header.frame, at(0.0, 0.0, SLIDE_WIDTH, 1.35));
            assert_eq!(header.fill, Some(NAVY));
        }
    }

    #[test]
    fn test_multiline_text_is_kept() {
        let deck = build().unwrap();
        let hint = text_boxes(&deck.pages()[2])
            .find(|t| t.text().starts_with("Let p = price of a pie"))
            .unwrap();
        assert_eq!(hint.paragraphs.len(), 1);
        assert_eq!(hint.paragraphs[0].runs[0].lines().count(), 5);

        let problem = text_boxes(&deck.pages()[2])
            .find(|t| t.text().starts_with("🧩"))
            .unwrap();
        assert_eq!(problem.paragraphs.len(), 8);
        assert_eq!(problem.paragraphs[1].space_before, Some(10.0));
        assert_eq!(problem.paragraphs[2].space_before, Some(6.0));
    }

    #[test]
    fn test_renders_as_presentation() {
        let bytes = render(&build().unwrap(), Format::Presentation).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
