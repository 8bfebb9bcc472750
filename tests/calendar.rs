#[cfg(test)]
mod tests {
    use chorelog::libs::calendar::{render_month, Calendar};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_plain_month_grid() {
        let output = Calendar::new(2024, 2)
            .unwrap()
            .mark([date(2024, 2, 14), date(2024, 2, 29), date(2024, 3, 1)])
            .styled(false)
            .render(date(2024, 2, 10));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "          1  2  3  4");
        assert_eq!(lines[3], " 5  6  7  8  9 10 11");
        assert_eq!(lines[4], "12 13 14*15 16 17 18");
        assert_eq!(lines[5], "19 20 21 22 23 24 25");
        assert_eq!(lines[6], "26 27 28 29*");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_month_starting_on_monday() {
        let output = Calendar::new(2024, 1).unwrap().styled(false).render(date(2024, 1, 1));
        assert_eq!(output.lines().nth(2), Some(" 1  2  3  4  5  6  7"));
        assert_eq!(output.lines().last(), Some("29 30 31"));
    }

    #[test]
    fn test_styled_output_highlights_today() {
        let output = Calendar::containing(date(2024, 2, 10)).render(date(2024, 2, 10));
        assert!(output.contains("\x1b[7m10\x1b[0m"));
        assert!(output.contains("\x1b[1m"));
    }

    #[test]
    fn test_render_month_matches_builder() {
        let today = date(2024, 2, 10);
        let due = [date(2024, 2, 14)];

        let rendered = render_month(2024, 2, today, due, false).unwrap();
        assert_eq!(rendered, Calendar::new(2024, 2).unwrap().mark(due).styled(false).render(today));
        assert!(render_month(2024, 13, today, due, false).is_err());
    }

    #[test]
    fn test_parse_month() {
        assert!(Calendar::parse_month("2024-02").is_ok());
        assert!(Calendar::parse_month("2024-13").is_err());
        assert!(Calendar::parse_month("february").is_err());
        assert!(Calendar::new(2024, 0).is_err());
    }
}
