use crate::age::AgeResult;
use crate::display;
use chrono::NaiveDate;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }

    /// File name the card is written to for this theme.
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "age_dark.svg",
            Theme::Light => "age_light.svg",
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Stat { k: String, d: String, v: String },
    Caption(String),
}

// Builds the card rows and returns (tspans, width, height)

fn build_rows(birthdate: NaiveDate, age: &AgeResult) -> (String, f32, f32) {
    let born_value = display::long_date(birthdate);
    let age_value = age.summary();
    let years_value = age.years.to_string();
    let months_value = age.months.to_string();
    let days_value = age.days.to_string();
    let countdown_value = display::birthday_countdown(age);
    let on_value = display::long_date(age.next_birthday.date);

    let rows_for_width: Vec<(&str, &String)> = vec![
        ("Born", &born_value),
        ("Age", &age_value),
        ("Years", &years_value),
        ("Months", &months_value),
        ("Days", &days_value),
        ("Countdown", &countdown_value),
        ("On", &on_value),
    ];

    let align_width = rows_for_width
        .iter()
        .map(|(k, v)| k.len() + 2 + v.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS);

    let stat = |k: &str, v: &str| {
        let (k, d, v) = build_stat_row(k, v, align_width);
        Line::Stat { k, d, v }
    };

    let mut lines = vec![
        Line::Header(build_header_line("Age Calculator", align_width)),
        stat("Born", &born_value),
        stat("Age", &age_value),
        Line::Blank,
        Line::Header(build_header_line("- Elapsed", align_width)),
        stat("Years", &years_value),
        stat("Months", &months_value),
        stat("Days", &days_value),
        Line::Blank,
        Line::Header(build_header_line(
            &format!("- {}", display::birthday_heading(age)),
            align_width,
        )),
        stat("Countdown", &countdown_value),
    ];
    if !age.next_birthday.is_today {
        lines.push(stat("On", &on_value));
        lines.push(Line::Caption(display::COUNTDOWN_CAPTION.to_string()));
    }

    // Render
    let x = LEFT_PADDING;
    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Caption(text) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}" class="cc">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
        }
    }

    let width = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let height = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    (tspans, width, height)
}

/// Main SVG generation function
pub fn generate_svg(birthdate: NaiveDate, age: &AgeResult, theme: Theme) -> String {
    let colors = theme.colors();
    let (rows, w, h) = build_rows(birthdate, age);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{rows}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        rows = rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::breakdown;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stat_row_pads_with_dots() {
        let (k, d, v) = build_stat_row("Years", "23", 20);
        assert_eq!(k, "Years: ");
        assert_eq!(d, ".".repeat(11));
        assert_eq!(v, "23");

        let (_, d, _) = build_stat_row("Years", "23", 11);
        assert_eq!(d, ". ");
    }

    #[test]
    fn test_header_line() {
        assert_eq!(build_header_line("- Elapsed", 12), "- Elapsed ----");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_svg_countdown_card() {
        let birth = ymd(2000, 6, 15);
        let age = breakdown(birth, ymd(2024, 1, 1));
        let svg = generate_svg(birth, &age, Theme::Dark);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("fill=\"#161b22\""));
        assert!(svg.contains("June 15th, 2000"));
        assert!(svg.contains("23 years, 6 months, 17 days"));
        assert!(svg.contains("- Next Birthday"));
        assert!(svg.contains("5 Months 14 Days"));
        assert!(svg.contains("Until your special day"));
    }

    #[test]
    fn test_svg_birthday_card_light() {
        let birth = ymd(2000, 1, 1);
        let age = breakdown(birth, ymd(2024, 1, 1));
        let svg = generate_svg(birth, &age, Theme::Light);

        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.contains("- It's your Birthday!"));
        assert!(svg.contains("Happy Birthday!"));
        assert!(!svg.contains("Until your special day"));
    }
}
