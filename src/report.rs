use rangepick::{PickerView, PositionInterval, WeekStart, DAYS_IN_WEEK};
use std::io::{self, Write};

/// Writes a plain-text dump of `view`.  Active cells are bracketed and
/// disabled cells parenthesized.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    view: &PickerView,
    week_start: WeekStart,
) -> io::Result<()> {
    writeln!(out, "{}", view.current_date)?;
    let header = week_start
        .weekdays()
        .map(|wd| {
            let name = wd.to_string();
            format!(" {} ", name.get(..2).unwrap_or(&name))
        })
        .collect::<String>();
    writeln!(out, "{}", header.trim_end())?;
    for (row, days) in view.page.days().chunks(DAYS_IN_WEEK).enumerate() {
        let line = days
            .iter()
            .enumerate()
            .map(|(col, &day)| show(view, row * DAYS_IN_WEEK + col, day))
            .collect::<String>();
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out, "active: {}", show_interval(view.active))?;
    writeln!(out, "previous page: {}", availability(view.has_prev_page))?;
    writeln!(out, "next page: {}", availability(view.has_next_page))?;
    Ok(())
}

fn show(view: &PickerView, position: usize, day: u8) -> String {
    if view.active.contains(position) {
        format!("[{day:2}]")
    } else if view.disabled.contains(&position) {
        format!("({day:2})")
    } else {
        format!(" {day:2} ")
    }
}

fn show_interval(interval: PositionInterval) -> String {
    match (interval.start, interval.end) {
        (Some(start), Some(end)) => format!("{start}..={end}"),
        (Some(p), None) | (None, Some(p)) => p.to_string(),
        (None, None) => String::from("none"),
    }
}

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "unavailable"
    }
}
