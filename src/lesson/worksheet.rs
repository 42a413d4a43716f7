//! The student worksheet: one letter-size page of flowing paragraphs and
//! tables, split into the lesson's parts.

use crate::common::{Length, RGBColor, Result};
use crate::layout::{
    Alignment, Canvas, Cell, Document, DocumentProperties, Margins, Page, Paragraph, RunStyle,
    Table,
};
use crate::lesson::palette::{
    GREEN, LGRAY, NAVY, ORANGE, PURPLE, RED, RULE, TEAL, WHITE,
};

/// Default output file name.
pub const FILE_NAME: &str = "Ex 1K - Applications Worksheet.docx";

const DGRAY: RGBColor = RGBColor::new(0x55, 0x55, 0x55);
const PALE_BLUE: RGBColor = RGBColor::new(0xE8, 0xF4, 0xFD);
const AMBER: RGBColor = RGBColor::new(0xC8, 0x96, 0x00);

/// Build the worksheet.
pub fn build() -> Result<Document> {
    let mut worksheet = Document::with_properties(DocumentProperties {
        title: Some("Ex 1K  —  Applications of Simultaneous Linear Equations".to_string()),
        subject: Some("Student worksheet".to_string()),
        author: None,
    });
    let canvas = Canvas::letter().with_margins(Margins::new(
        Length::from_cm(1.5),
        Length::from_cm(2.0),
        Length::from_cm(1.5),
        Length::from_cm(2.0),
    ))?;

    let page = worksheet.add_page(canvas);
    header(page);
    warm_up(page);
    method_reference(page);
    guided_examples(page);
    foundation_practice(page);
    standard_practice(page);
    advanced_practice(page);
    exit_ticket(page);

    log::debug!("built worksheet with {} blocks", page.len());
    Ok(worksheet)
}

/// Bold heading with 12 pt above and 4 pt below unless overridden.
fn heading(text: &str, size: f64, color: RGBColor) -> Paragraph {
    Paragraph::with_run(text, RunStyle::new(size, color).bold(true))
        .space_before(12.0)
        .space_after(4.0)
}

/// Body paragraph with 2 pt above and below.
fn body(text: &str, style: RunStyle) -> Paragraph {
    Paragraph::with_run(text, style)
        .space_before(2.0)
        .space_after(2.0)
}

fn plain(size: f64) -> RunStyle {
    RunStyle::new(size, DGRAY)
}

fn strong(size: f64) -> RunStyle {
    RunStyle::new(size, NAVY).bold(true)
}

fn single_cell(cell: Cell) -> Table {
    Table::from_rows(1, vec![vec![cell]])
}

/// `count` rows of light underscores to write on.
fn blank_lines(page: &mut Page, count: usize) {
    for _ in 0..count {
        page.add_paragraph(
            Paragraph::with_run("_".repeat(90), RunStyle::new(9.0, RULE))
                .space_before(0.0)
                .space_after(0.0),
        );
    }
}

/// Shaded one-cell box with an `Answer:` line and `rows - 1` further lines.
fn answer_box(page: &mut Page, rows: usize) {
    let style = RunStyle::new(11.0, NAVY);
    let mut cell = Cell::with_text(format!("Answer: {}", "_".repeat(60)), style);
    for _ in 1..rows {
        cell.push_paragraph(Paragraph::with_run("_".repeat(72), style));
    }
    cell.set_background(LGRAY).set_width(Length::from_inches(6.5));

    page.add_table(single_cell(cell))
        .add_paragraph(Paragraph::new());
}

/// Full-width colored bar introducing a part of the worksheet.
fn section_banner(page: &mut Page, text: &str, bg: RGBColor) {
    let mut cell = Cell::with_text(text, RunStyle::new(13.0, WHITE).bold(true));
    cell.set_background(bg);
    page.add_table(single_cell(cell))
        .add_paragraph(Paragraph::new());
}

/// Two-row, four-column frame for the 4-step method: colored headers over
/// italic hints.
fn step_scaffold(page: &mut Page, steps: &[(&str, &str); 4]) {
    let mut headers = Vec::with_capacity(steps.len());
    let mut hints = Vec::with_capacity(steps.len());
    for (&(title, hint), color) in steps.iter().zip([TEAL, GREEN, ORANGE, PURPLE]) {
        let mut header = Cell::with_text(title, RunStyle::new(10.0, WHITE).bold(true));
        header.set_background(color).set_alignment(Alignment::Center);
        headers.push(header);

        let mut body = Cell::with_text(hint, RunStyle::new(9.0, DGRAY).italic(true));
        body.set_background(LGRAY);
        hints.push(body);
    }
    page.add_table(Table::from_rows(steps.len(), vec![headers, hints]))
        .add_paragraph(Paragraph::new());
}

fn header(page: &mut Page) {
    let mut title = Cell::with_text(
        "Ex 1K  —  Applications of Simultaneous Linear Equations",
        RunStyle::new(18.0, WHITE).bold(true),
    );
    title.set_background(NAVY).set_alignment(Alignment::Center);
    page.add_table(single_cell(title))
        .add_paragraph(Paragraph::new());

    let student = [
        "Name: ___________________________",
        "Date: ____________",
        "Class: __________",
        "Score: _____ / 50 XP",
    ]
    .into_iter()
    .map(|label| Cell::with_text(label, plain(10.0)))
    .collect();
    page.add_table(Table::from_rows(4, vec![student]))
        .add_paragraph(Paragraph::new());

    let mut intentions = Cell::with_text("🎯  Learning Intentions", strong(12.0));
    intentions.set_background(PALE_BLUE);
    for intent in [
        "  ✔  I can define variables clearly from a worded problem.",
        "  ✔  I can write two linear equations from given information.",
        "  ✔  I can solve simultaneous equations and interpret the answer in context.",
        "  ✔  I can identify parallel and coincident lines from their equations.",
    ] {
        intentions.push_paragraph(Paragraph::with_run(intent, plain(10.0)));
    }
    page.add_table(single_cell(intentions))
        .add_paragraph(Paragraph::new());
}

fn warm_up(page: &mut Page) {
    section_banner(page, "⚡  PART 1  |  Warm-Up  (5 minutes)", TEAL);

    page.add_paragraph(body("At the school canteen:", strong(11.0)))
        .add_paragraph(body("   •  2 pies + 3 drinks = $13.00", plain(11.0)))
        .add_paragraph(body("   •  4 pies + 1 drink  = $15.00", plain(11.0)))
        .add_paragraph(
            body(
                "Using the 4-step method below, find the price of one pie and one drink.",
                strong(11.0),
            )
            .space_before(6.0),
        );

    step_scaffold(
        page,
        &[
            ("STEP 1\nDefine Variables", "Let p = price of a pie\nLet d = price of a drink"),
            (
                "STEP 2\nForm Equations",
                "Write equation (1): _______________\nWrite equation (2): _______________",
            ),
            ("STEP 3\nSolve", "Show your working below.\nUse elimination or substitution."),
            ("STEP 4\nAnswer in Context", "Write a sentence:\n\"The price of one pie is …\""),
        ],
    );

    blank_lines(page, 5);
    answer_box(page, 2);
}

fn method_reference(page: &mut Page) {
    section_banner(page, "📐  The 4-Step Method  —  Quick Reference", NAVY);

    let steps = [
        ("1. Define Variables",
         "Choose a meaningful letter for each unknown. Write e.g. \"Let x = …\""),
        ("2. Form Equations",
         "Each piece of information gives ONE equation. \
          You need exactly two equations for two unknowns."),
        ("3. Solve Simultaneously",
         "Use substitution or elimination. Label equations (1) and (2). Show ALL working."),
        ("4. Answer in Context",
         "Write a full sentence using the original words and units. Check your answer!"),
    ];
    for (step, hint) in steps {
        let mut name = Cell::with_text(step, RunStyle::new(10.0, NAVY).bold(true));
        name.set_background(LGRAY);
        let hint = Cell::with_text(hint, plain(10.0));
        page.add_table(
            Table::from_rows(2, vec![vec![name, hint]])
                .with_column_widths(vec![Length::from_inches(2.0), Length::from_inches(4.8)]),
        );
    }
    page.add_paragraph(Paragraph::new());
}

fn guided_examples(page: &mut Page) {
    section_banner(page, "📖  PART 2  |  Guided Examples  (follow along)", GREEN);

    let step = |text: &str, color: RGBColor| {
        body(text, RunStyle::new(11.0, color).bold(true)).space_before(4.0)
    };

    page.add_paragraph(heading("Example A  —  Ticket Sales  ⭐", 13.0, GREEN).space_before(8.0))
        .add_paragraph(body(
            "Adult tickets cost $12 and student tickets cost $7. \
             A total of 350 tickets were sold, raising $3 150. \
             How many adult and student tickets were sold?",
            plain(11.0),
        ))
        .add_paragraph(step("Step 1 — Define Variables:", TEAL).space_before(6.0))
        .add_paragraph(body(
            "   Let a = number of adult tickets      Let s = number of student tickets",
            plain(11.0),
        ))
        .add_paragraph(step("Step 2 — Form Equations:", GREEN))
        .add_paragraph(body("   Total tickets:    a  +  s  =  350     … (1)", plain(11.0)))
        .add_paragraph(body("   Total revenue:  12a + 7s  = 3 150   … (2)", plain(11.0)))
        .add_paragraph(step("Step 3 — Solve (elimination):", ORANGE))
        .add_paragraph(body("   Multiply (1) by 7:   7a + 7s = 2 450  … (3)", plain(11.0)))
        .add_paragraph(body("   Subtract (3) from (2):   5a = 700   ∴  a = 140", plain(11.0)))
        .add_paragraph(body("   Substitute into (1):  140 + s = 350   ∴  s = 210", plain(11.0)))
        .add_paragraph(step("Step 4 — Answer:", PURPLE))
        .add_paragraph(body(
            "   140 adult tickets and 210 student tickets were sold.",
            plain(11.0),
        ))
        .add_paragraph(body(
            "   Check: 140 + 210 = 350 ✓   and   12(140) + 7(210) = 1680 + 1470 = 3150 ✓",
            plain(10.0).italic(true),
        ))
        .add_paragraph(Paragraph::new());

    page.add_paragraph(
        heading("Example B  —  Break-Even Analysis  ⭐⭐", 13.0, GREEN).space_before(8.0),
    )
    .add_paragraph(body(
        "Emma starts a cupcake business. Fixed costs are $240. \
         Each cupcake costs $1.50 to make and sells for $4.50.",
        plain(11.0),
    ))
    .add_paragraph(body(
        "(a)  Write equations for Cost (C) and Revenue (R) in terms of n (number of cupcakes).",
        strong(11.0),
    ))
    .add_paragraph(body(
        "     C = _______________________________        R = _______________________________",
        plain(11.0),
    ))
    .add_paragraph(
        body("(b)  Find the break-even point (where C = R).", strong(11.0)).space_before(4.0),
    );
    blank_lines(page, 4);
    answer_box(page, 2);
}

struct Foundation {
    title: &'static str,
    question: &'static str,
    scaffold: &'static [&'static str],
    xp: u32,
}

const FOUNDATION: [Foundation; 5] = [
    Foundation {
        title: "Q1  —  Two Numbers  ⭐",
        question: "The sum of two numbers is 42 and their difference is 8. Find both numbers.",
        scaffold: &[
            "Let x = larger number,  y = smaller number",
            "x  +  y  =  _______    … (1)        x  −  y  =  _______    … (2)",
            "Solve by adding the equations:  2x = _______  ∴  x = _______",
            "Substitute back:  y = _______",
        ],
        xp: 10,
    },
    Foundation {
        title: "Q2  —  Fruit Shop  ⭐",
        question: "A bag of apples costs $a and a bag of oranges costs $r. \
                   3 bags of apples + 2 bags of oranges = $13. \
                   1 bag of apples + 4 bags of oranges = $11. Find the cost of each.",
        scaffold: &[
            "(1)  3a + 2r = _______       (2)  a + 4r = _______",
            "Method chosen: ________________________________",
            "Working:",
        ],
        xp: 12,
    },
    Foundation {
        title: "Q3  —  Perimeter  ⭐",
        question: "A rectangle has perimeter 52 cm. Its length is 8 cm more than its width. \
                   Find the length and width.",
        scaffold: &[
            "Let l = length,  w = width",
            "Perimeter equation: 2l + 2w = _______   →   l + w = _______    … (1)",
            "Length/width relationship:  l − w = _______    … (2)",
            "Solve:",
        ],
        xp: 12,
    },
    Foundation {
        title: "Q4  —  Mixing Solutions  ⭐⭐",
        question: "A chemist mixes a 20% acid solution with a 50% acid solution to make \
                   12 litres of a 35% acid solution. \
                   How many litres of each solution does he use?",
        scaffold: &[
            "Let x = litres of 20% solution,  y = litres of 50% solution",
            "Total volume:  x + y = _______    … (1)",
            "Acid equation:  0.2x + 0.5y = _______    … (2)",
            "Working:",
        ],
        xp: 14,
    },
    Foundation {
        title: "Q5  —  Mobile Plans  ⭐⭐",
        question: "Plan A: $25 per month + $0.10 per text. Plan B: $15 per month + $0.25 per text. \
                   Find the number of texts for which both plans cost the same.",
        scaffold: &[
            "Cost A:  C = _______  +  _______  × n",
            "Cost B:  C = _______  +  _______  × n",
            "Set equal and solve:  _______________________________",
        ],
        xp: 12,
    },
];

fn foundation_practice(page: &mut Page) {
    section_banner(
        page,
        "🌱  PART 3  |  Foundation Practice  (Questions 1–5)  ⭐  10 XP each",
        GREEN,
    );
    page.add_paragraph(body(
        "Equations are partially set up for you. Complete the solution and answer in context.",
        plain(10.0).italic(true),
    ));

    for question in &FOUNDATION {
        page.add_paragraph(
            heading(&format!("{}  ({} XP)", question.title, question.xp), 12.0, GREEN)
                .space_before(10.0),
        )
        .add_paragraph(body(question.question, plain(11.0)))
        .add_paragraph(Paragraph::new());
        for line in question.scaffold {
            page.add_paragraph(body(&format!("   {line}"), plain(11.0)));
        }
        blank_lines(page, 4);
        answer_box(page, 2);
    }
}

const STANDARD: [(&str, &str, u32); 4] = [
    (
        "Q6  —  Age Problem  ⭐⭐",
        "Maria is three times as old as her daughter Lily. \
         In 10 years, Maria will be twice Lily's age. Find their current ages.",
        16,
    ),
    (
        "Q7  —  Distance & Speed  ⭐⭐",
        "Two trains leave cities 480 km apart at the same time, travelling towards each other. \
         Train A travels at 90 km/h and Train B at 70 km/h. \
         When and where do they meet? (Hint: combined they cover 480 km together.)",
        18,
    ),
    (
        "Q8  —  Investment  ⭐⭐⭐",
        "Omar invests $8 000 in two accounts. Account X pays 4% annual interest, \
         Account Y pays 6%. After one year, the total interest is $380. \
         How much did Omar invest in each account?",
        18,
    ),
    (
        "Q9  —  Geometry  ⭐⭐⭐",
        "Two angles are supplementary (add to 180°). \
         One angle is 24° more than three times the other. Find both angles. \
         Then determine whether the lines with equations y = (first angle)x + 1 \
         and y = (second angle)x − 3 are parallel, perpendicular, or neither.",
        20,
    ),
];

fn standard_practice(page: &mut Page) {
    section_banner(
        page,
        "📘  PART 4  |  Standard Practice  (Questions 6–9)  ⭐⭐  15 XP each",
        TEAL,
    );
    page.add_paragraph(body(
        "Set up your own equations. Choose your method. Full working required.",
        plain(10.0).italic(true),
    ));

    for (title, question, xp) in STANDARD {
        page.add_paragraph(heading(&format!("{title}  ({xp} XP)"), 12.0, TEAL).space_before(10.0))
            .add_paragraph(body(question, plain(11.0)))
            .add_paragraph(body("Define variables:", strong(10.0)).space_before(4.0))
            .add_paragraph(body(
                "   Let ___ = _______________        Let ___ = _______________",
                plain(11.0),
            ))
            .add_paragraph(body("Equations:", strong(10.0)))
            .add_paragraph(body(
                "   (1) ________________________________     (2) ________________________________",
                plain(11.0),
            ));
        blank_lines(page, 5);
        answer_box(page, 2);
    }
}

const ADVANCED: [(&str, &str); 5] = [
    (
        "Q10  —  Parallel Lines Analysis  ⭐⭐⭐",
        "For each pair of equations, determine (without solving) whether there is one solution, \
         no solution, or infinite solutions. Justify your answer algebraically.\n\n\
         (a)  3x + 2y = 12   and   6x + 4y = 24\n\
         (b)  y = 4x − 3     and   2y = 8x + 1\n\
         (c)  x + 2y = 7     and   2x − y = 4",
    ),
    (
        "Q11  —  Break-Even (Extended)  ⭐⭐⭐",
        "A start-up makes wireless earbuds. Fixed costs: $12 000. Variable cost: $18 per pair. \
         Selling price: $45 per pair.\n\n\
         (a)  Write equations for Cost C and Revenue R in terms of n.\n\
         (b)  Find the break-even point.\n\
         (c)  How many pairs must they sell to make a profit of at least $5 400?",
    ),
    (
        "Q12  —  Reverse Engineering  ⭐⭐⭐",
        "A pair of simultaneous equations has the solution x = 3, y = −2. \
         Write TWO different pairs of equations that produce this solution. \
         Explain how you constructed them.",
    ),
    (
        "Q13  —  Proof  ⭐⭐⭐⭐",
        "Prove algebraically that if two lines y = m₁x + c₁ and y = m₂x + c₂ are parallel \
         (m₁ = m₂, c₁ ≠ c₂), then the system of equations has no solution.",
    ),
    (
        "Q14  —  Real-World Modelling  ⭐⭐⭐⭐",
        "Create your own real-world application problem involving simultaneous equations. \
         Your problem must:\n\
         \x20 •  Be set in a realistic context\n\
         \x20 •  Have exactly one solution\n\
         \x20 •  Require both elimination and back-substitution\n\
         \x20 •  Include a full worked solution\n\n\
         Exchange your problem with a partner and solve theirs!",
    ),
];

fn advanced_practice(page: &mut Page) {
    section_banner(
        page,
        "🔥  PART 5  |  Advanced & Reasoning  (Questions 10–14)  ⭐⭐⭐  20 XP each",
        ORANGE,
    );
    page.add_paragraph(body(
        "Multi-step reasoning — show clear logical working. \
         These test your depth of understanding.",
        plain(10.0).italic(true),
    ));

    for (title, question) in ADVANCED {
        page.add_paragraph(heading(title, 12.0, ORANGE).space_before(10.0))
            .add_paragraph(body(question, plain(11.0)));
        blank_lines(page, 6);
        answer_box(page, 2);
    }
}

fn exit_ticket(page: &mut Page) {
    section_banner(
        page,
        "🪞  EXIT TICKET  |  (3 minutes)  —  Hand this in before you leave!",
        PURPLE,
    );
    page.add_paragraph(body(
        "A jar contains 20-cent and 50-cent coins. There are 30 coins worth $12.00 in total. \
         How many of each coin are there?",
        strong(12.0),
    ));
    blank_lines(page, 5);
    answer_box(page, 2);

    page.add_paragraph(body("Self-Assessment  —  circle one:", strong(11.0)).space_before(8.0));
    let ratings = [
        ("🟢 GREEN — I've got this!", GREEN),
        ("🟡 YELLOW — Nearly there…", AMBER),
        ("🔴 RED — Need more practice", RED),
    ]
    .into_iter()
    .map(|(label, color)| {
        let mut cell = Cell::with_text(label, RunStyle::new(11.0, color).bold(true));
        cell.set_background(LGRAY);
        cell
    })
    .collect();
    page.add_table(Table::from_rows(3, vec![ratings]))
        .add_paragraph(Paragraph::new())
        .add_paragraph(
            body(
                "📚  Homework: Exercise 1K — Working programs on the class portal",
                strong(11.0),
            )
            .space_before(6.0),
        );
}
