use tally_types::WordCount;

const BAR: char = '█';
const AXIS_LABEL: &str = "Occurrences";

/// Horizontal bar chart of word counts, longest bar `width` cells wide
pub fn render_bar_chart(title: &str, counts: &[WordCount], width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let Some(max) = counts.iter().map(|c| c.count).max().filter(|&m| m > 0) else {
        out.push_str("(no words)\n");
        return out;
    };

    let width = width.max(1);
    let label_width = counts
        .iter()
        .map(|c| c.word.chars().count())
        .max()
        .unwrap_or(0);

    out.push('\n');
    for entry in counts {
        let cells = bar_cells(entry.count, max, width);
        let bar: String = std::iter::repeat_n(BAR, cells).collect();
        out.push_str(&format!(
            "{:>label_width$} | {bar} {}\n",
            entry.word, entry.count
        ));
    }

    out.push_str(&format!("{:>label_width$} +{}\n", "", "-".repeat(width + 1)));
    out.push_str(&format!("{:>label_width$}   {AXIS_LABEL}\n", ""));
    out
}

/// Rounded share of `width`, at least one cell for any non-zero count
fn bar_cells(count: usize, max: usize, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((count * width + max / 2) / max).max(1)
}
