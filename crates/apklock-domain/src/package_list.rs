use apklock_types::PackageSpec;

/// Package names parsed from an input listing, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageList {
    pub specs: Vec<PackageSpec>,
    /// Non-blank, non-comment lines that produced no usable name.
    pub skipped: usize,
}

/// Everything from the first `=` or whitespace onward is dropped.
///
/// Leading whitespace is ignored, so `"  nginx=1.2.3"` yields `"nginx"`.
pub fn strip_annotation(line: &str) -> &str {
    let line = line.trim_start();
    let end = line
        .find(|c: char| c == '=' || c.is_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}

/// Parse one input line. Blank lines, `#` comments and lines with nothing
/// before the annotation yield `None`.
pub fn parse_package_line(line: &str) -> Option<PackageSpec> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    PackageSpec::new(strip_annotation(trimmed))
}

pub fn parse_package_list(text: &str) -> PackageList {
    let mut list = PackageList::default();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_package_line(trimmed) {
            Some(spec) => list.specs.push(spec),
            None => list.skipped += 1,
        }
    }
    list
}
