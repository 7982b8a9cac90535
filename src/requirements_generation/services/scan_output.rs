/// Reads names back from a scanner output file
///
/// Each line is `name==version` or a bare `name`; only the part before the
/// first `==` is kept. Blank lines are skipped, duplicates and order kept.
pub fn parse_scan_output(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split("==").next())
        .map(|name| name.trim().to_string())
        .collect()
}

/// Renders names in the scanner output format, one bare name per line
pub fn render_scan_output<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| format!("{}\n", name.as_ref()))
        .collect()
}
