//! Reference inputs and their expected extraction results.

/// Expected `(dates, times, days)` for one input sentence.
#[derive(Debug, Clone, Copy)]
pub struct Expected {
    pub input: &'static str,
    pub dates: &'static [&'static str],
    pub times: &'static [&'static str],
    pub days: &'static [&'static str],
}

const fn expected(
    input: &'static str,
    dates: &'static [&'static str],
    times: &'static [&'static str],
    days: &'static [&'static str],
) -> Expected {
    Expected {
        input,
        dates,
        times,
        days,
    }
}

/// Results for every sentence of the built-in demonstration set, in order.
pub const DEMO_EXPECTED: [Expected; 20] = [
    expected(
        "The first version was released on 12-07-2008 (12th of july 2008).",
        &["12-07-2008", "12th of july 2008"],
        &[],
        &[],
    ),
    expected(
        "Next Release will might come on 12 July 2009.",
        &["12 july 2009"],
        &[],
        &[],
    ),
    expected("The due date for payment is 2023-09-1.", &["2023-09-1"], &[], &[]),
    expected(
        "The date on which the Constitution of Poland came into effect on 17 october 1997.",
        &["17 october 1997"],
        &[],
        &[],
    ),
    expected("The meeting is scheduled for 05/12/2022.", &["05/12/2022"], &[], &[]),
    expected(
        "The lunar eclipse will occur on Monday, 16/05/2022.",
        &["16/05/2022"],
        &[],
        &["monday"],
    ),
    expected("The solar eclipse will occur on 2022-10-25.", &["2022-10-25"], &[], &[]),
    expected("The event is on 2-Jan-2023.", &["2-jan-2023"], &[], &[]),
    expected(
        "The marathon is on 3rd Jan 2023 (Tue).",
        &["3rd jan 2023"],
        &[],
        &["tue"],
    ),
    expected("The festival is on 4th january 23.", &["4th january 23"], &[], &[]),
    expected(
        "The concert is on 5-may-19 (5th may 19).",
        &["5-may-19", "5th may 19"],
        &[],
        &[],
    ),
    expected("The exhibition is on 6 jan-23.", &["6 jan-23"], &[], &[]),
    expected("The fair is on 7 Jan-13.", &["7 jan-13"], &[], &[]),
    expected(
        "The event is on 8 apr 23 (8th of april 2023).",
        &["8 apr 23", "8th of april 2023"],
        &[],
        &[],
    ),
    expected("See you on Sunday at 10:30 am.", &[], &["10:30 am"], &["sunday"]),
    expected("See you on Tuesday at 18:30.", &[], &["18:30"], &["tuesday"]),
    expected(
        "I work from 9am to to 5pm and he works from 8:00 am to 4:30 pm.",
        &[],
        &["9am", "5pm", "8:00 am", "4:30 pm"],
        &[],
    ),
    expected(
        "The meeting is scheduled for Wednesday, 3rd June 2023 at 3:30 pm.",
        &["3rd june 2023"],
        &["3:30 pm"],
        &["wednesday"],
    ),
    expected(
        "The webinar begins at 2:00 pm on 5th August 2023.",
        &["5th august 2023"],
        &["2:00 pm"],
        &[],
    ),
    expected(
        "The workshop is on Thursday, 6th September 2023 at 4:00 pm.",
        &["6th september 2023"],
        &["4:00 pm"],
        &["thursday"],
    ),
];

/// Awkward inputs every extractor must survive.
pub fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".repeat(1000),
        "\n\r\t".to_string(),
        ",,,,,,,".to_string(),
        ".,-/:;!?()[]{}".to_string(),
        "🗓️ ⏰ 📅".to_string(),
        "ÉTÉ Ünïcode Größe".to_string(),
        "1".repeat(500),
        "1/".repeat(300),
        ":".repeat(200),
        "monmonmon".to_string(),
        "12:12:12:12:12 am pm".to_string(),
        "2023-2023-2023-2023".to_string(),
        "1st2nd3rd4th".to_string(),
    ]
}
