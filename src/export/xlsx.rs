// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_NUM_FORMAT, date_to_excel_serial};
use crate::export::model::{Report, TrackReport};
use crate::export::notify_export_success;
use crate::models::{DayState, HoursState, TrackKind};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HOURS_NUM_FORMAT: &str = "0.00";
const NAME_WIDTH: f64 = 20.0;
const NUMBER_WIDTH: f64 = 15.0;
/// Blank rows between the per-person totals and the weekly breakdown.
const WEEK_GAP_ROWS: u32 = 5;

/// Cell formats shared by every sheet.
struct Styles {
    header: Format,
    date: Format,
    total: Format,
    day_normal: Format,
    day_error: Format,
    day_manual: Format,
    state_done: Format,
    state_goal: Format,
    state_normal: Format,
    state_warn: Format,
}

impl Styles {
    fn new() -> Self {
        let hours = |bg: Option<u32>| {
            let f = Format::new().set_num_format(HOURS_NUM_FORMAT);
            match bg {
                Some(rgb) => f
                    .set_background_color(Color::RGB(rgb))
                    .set_pattern(FormatPattern::Solid),
                None => f,
            }
        };

        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0xFFFFFF))
                .set_background_color(Color::RGB(0x2F75B5))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            date: Format::new()
                .set_bold()
                .set_num_format(DATE_NUM_FORMAT)
                .set_border(FormatBorder::Thin),
            total: hours(None).set_bold(),
            day_normal: hours(None),
            day_error: hours(Some(0xFFFF00)),
            day_manual: hours(Some(0xB7FCFF)),
            state_done: hours(Some(0x00CC66)).set_bold(),
            state_goal: hours(Some(0xB6D7A8)).set_bold(),
            state_normal: hours(None).set_bold(),
            state_warn: hours(Some(0xF4CCCC)).set_bold(),
        }
    }

    fn for_state(&self, state: HoursState) -> &Format {
        match state {
            HoursState::Done => &self.state_done,
            HoursState::Goal => &self.state_goal,
            HoursState::Normal => &self.state_normal,
            HoursState::Warn => &self.state_warn,
        }
    }

    fn for_day(&self, state: DayState) -> &Format {
        match state {
            DayState::Normal => &self.day_normal,
            DayState::Error => &self.day_error,
            DayState::Manual => &self.day_manual,
        }
    }
}

/// Workbook with a `Totals` sheet, one sheet per track and a `Warnings` sheet.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let styles = Styles::new();
    let mut workbook = Workbook::new();

    write_totals_sheet(workbook.add_worksheet(), report, &styles)?;
    for track in &report.tracks {
        write_track_sheet(workbook.add_worksheet(), track, &styles)?;
    }
    write_warnings_sheet(workbook.add_worksheet(), report, &styles)?;

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_totals_sheet(sheet: &mut Worksheet, report: &Report, styles: &Styles) -> AppResult<()> {
    sheet.set_name("Totals")?;

    let mut headers: Vec<String> = vec!["Name".to_string()];
    headers.extend(TrackKind::ALL.iter().map(|k| format!("{} Hours", k)));
    headers.push("Total Pre-Bag".to_string());
    headers.push("Post-Bag/Week".to_string());
    write_headers(sheet, &headers, styles)?;

    if report.totals.is_empty() {
        sheet.write(1, 0, "No data available")?;
        return Ok(());
    }

    let mut row: u32 = 0;
    for totals in &report.totals {
        row += 1;
        sheet.write(row, 0, totals.name.as_str())?;
        let mut col: u16 = 0;
        for t in &totals.tracks {
            col += 1;
            sheet.write_with_format(row, col, t.hours, styles.for_state(t.state))?;
        }
        let post_bag_state = totals
            .tracks
            .iter()
            .find(|t| t.kind == TrackKind::PostBag)
            .map(|t| t.state)
            .unwrap_or(HoursState::Normal);
        sheet.write_with_format(
            row,
            col + 1,
            totals.pre_bag_total,
            styles.for_state(totals.pre_bag_state),
        )?;
        sheet.write_with_format(
            row,
            col + 2,
            totals.post_bag_week,
            styles.for_state(post_bag_state),
        )?;
    }

    // ---------------------------
    // Weekly breakdown
    // ---------------------------
    if report.weeks.is_empty() {
        return Ok(());
    }

    row += WEEK_GAP_ROWS;
    let first_week_row = row + 1;
    for week in &report.weeks {
        row += 1;
        sheet.write(row, 0, format!("Week {}", week.week))?;
        for (i, hours) in week.hours.iter().enumerate() {
            sheet.write_with_format(row, i as u16 + 1, *hours, &styles.total)?;
        }
    }
    let last_week_row = row;

    row += 1;
    sheet.write(row, 0, "Total")?;
    for i in 0..TrackKind::ALL.len() {
        let col = i as u16 + 1;
        let letter = column_letter(col);
        // formula rows are 1-based
        let formula = format!(
            "=SUM({letter}{}:{letter}{})",
            first_week_row + 1,
            last_week_row + 1
        );
        sheet.write_formula_with_format(row, col, formula.as_str(), &styles.total)?;
    }

    Ok(())
}

fn write_track_sheet(sheet: &mut Worksheet, track: &TrackReport, styles: &Styles) -> AppResult<()> {
    sheet.set_name(track.kind.name())?;

    let mut headers = vec!["Name".to_string(), "Total".to_string()];
    headers.extend(track.training_names.iter().cloned());
    write_headers(sheet, &headers, styles)?;

    let first_date_col = headers.len() as u16;
    for (i, date) in track.dates.iter().enumerate() {
        let col = first_date_col + i as u16;
        sheet.write_with_format(0, col, date_to_excel_serial(*date), &styles.date)?;
        sheet.set_column_width(col, 10)?;
    }

    for (i, person) in track.rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write(row, 0, person.name.as_str())?;
        sheet.write_with_format(row, 1, person.total, styles.for_state(person.state))?;
        for (j, hours) in person.training.iter().enumerate() {
            sheet.write_with_format(row, 2 + j as u16, *hours, &styles.day_normal)?;
        }
        for (j, cell) in person.days.iter().enumerate() {
            if let Some(cell) = cell {
                let col = first_date_col + j as u16;
                sheet.write_with_format(row, col, cell.hours, styles.for_day(cell.state))?;
            }
        }
    }

    sheet.set_freeze_panes(1, 2)?;
    Ok(())
}

fn write_warnings_sheet(sheet: &mut Worksheet, report: &Report, styles: &Styles) -> AppResult<()> {
    sheet.set_name("Warnings")?;
    write_headers(
        sheet,
        &["Level", "Name", "Date", "Track", "Warning"].map(String::from),
        styles,
    )?;

    let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);
    let mut message_width = "Warning".width();
    for (i, w) in report.warnings.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write(row, 0, w.level.as_str())?;
        sheet.write(row, 1, w.person.as_str())?;
        sheet.write_with_format(row, 2, date_to_excel_serial(w.day), &date_format)?;
        sheet.write(row, 3, w.track.as_str())?;
        sheet.write(row, 4, w.message.as_str())?;
        message_width = message_width.max(w.message.width());
    }

    sheet.set_column_width(2, 10)?;
    sheet.set_column_width(4, message_width.min(80) as f64 + 2.0)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[String], styles: &Styles) -> AppResult<()> {
    for (col, header) in headers.iter().enumerate() {
        let col = col as u16;
        sheet.write_with_format(0, col, header.as_str(), &styles.header)?;
        let width = if col == 0 {
            NAME_WIDTH
        } else {
            NUMBER_WIDTH.max(header.width() as f64 + 2.0)
        };
        sheet.set_column_width(col, width)?;
    }
    Ok(())
}

/// Spreadsheet column name for a 0-based index (`0` → `A`, `27` → `AB`).
fn column_letter(mut col: u16) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    name
}
