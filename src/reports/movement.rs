//! Movement exception report
//!
//! Renders report rows into print lines. Each line starts with a carriage
//! control character: '1' ejects to a new page, ' ' advances one line. A new
//! page (with its header block) starts on the first row and whenever the
//! category changes.
//!
//! Names are truncated to their columns. Numbers never are: an amount whose
//! grouped form is too wide drops the grouping, and anything still too wide
//! is printed in full and recorded as a data quality warning.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::Settings;
use crate::display::{fit_left, fit_number, fit_right, fits, separator};
use crate::models::{DateContext, LoanCategory, Money, ReportRow};
use crate::quality::{DataQualityWarning, QualityLog};

/// Width of a line body, after the control character
pub const BODY_WIDTH: usize = 130;

/// Lines in every header block
pub const HEADER_LINES: usize = 8;

const GAP: &str = "  ";
const BRANCH_CODE_WIDTH: usize = 3;
const BRANCH_NAME_WIDTH: usize = 3;
const CUSTOMER_NAME_WIDTH: usize = 40;
const ACCOUNT_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 15;

/// Carriage control character that opens every line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    NewPage,
    Advance,
}

impl ControlCode {
    pub fn as_char(self) -> char {
        match self {
            Self::NewPage => '1',
            Self::Advance => ' ',
        }
    }
}

/// One physical line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub control: ControlCode,
    pub text: String,
}

impl ReportLine {
    pub fn new_page(text: impl Into<String>) -> Self {
        Self {
            control: ControlCode::NewPage,
            text: text.into(),
        }
    }

    pub fn advance(text: impl Into<String>) -> Self {
        Self {
            control: ControlCode::Advance,
            text: text.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.control.as_char(), self.text)
    }
}

/// Fixed text repeated at the top of every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeading {
    pub institution_title: String,
    pub report_title: String,
    /// Report date as "DD/MM/YY"
    pub report_date: String,
}

impl ReportHeading {
    pub fn new(settings: &Settings, context: &DateContext) -> Self {
        Self {
            institution_title: settings.institution_title.clone(),
            report_title: settings.report_title.clone(),
            report_date: context.display(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderState {
    AwaitingFirstPage,
    EmitHeader,
    EmitDataRows,
    Done,
}

/// Lines written to the current page so far
struct Page {
    category: LoanCategory,
    lines: usize,
}

/// The movement exception report, rows in print order
#[derive(Debug, Clone)]
pub struct MovementReport {
    heading: ReportHeading,
    page_length: usize,
    rows: Vec<ReportRow>,
}

impl MovementReport {
    /// Build a report, sorting rows by category, branch and account
    pub fn new(heading: ReportHeading, page_length: usize, mut rows: Vec<ReportRow>) -> Self {
        rows.sort_by_key(|row| row.key());
        Self {
            heading,
            page_length,
            rows,
        }
    }

    pub fn heading(&self) -> &ReportHeading {
        &self.heading
    }

    /// Advisory lines per page
    pub fn page_length(&self) -> usize {
        self.page_length
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of pages, one per category present
    pub fn pages(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.category())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Render every line of the report, logging values too wide for their column
    pub fn render(&self, quality: &mut QualityLog) -> Vec<ReportLine> {
        let mut lines = Vec::new();
        let mut rows = self.rows.iter().peekable();
        let mut page: Option<Page> = None;
        let mut state = RenderState::AwaitingFirstPage;

        loop {
            state = match state {
                RenderState::AwaitingFirstPage => {
                    if rows.peek().is_some() {
                        RenderState::EmitHeader
                    } else {
                        RenderState::Done
                    }
                }
                RenderState::EmitHeader => match rows.peek() {
                    Some(&row) => {
                        self.push_header(&mut lines, row);
                        page = Some(Page {
                            category: row.category(),
                            lines: HEADER_LINES,
                        });
                        RenderState::EmitDataRows
                    }
                    None => RenderState::Done,
                },
                RenderState::EmitDataRows => {
                    let next_category = rows.peek().map(|row| row.category());
                    let page_category = page.as_ref().map(|p| p.category);

                    match next_category {
                        Some(category) if Some(category) == page_category => {
                            if let Some(row) = rows.next() {
                                lines.push(ReportLine::advance(data_line(row, quality)));
                            }
                            if let Some(page) = page.as_mut() {
                                page.lines += 1;
                            }
                            RenderState::EmitDataRows
                        }
                        Some(_) => {
                            self.check_page_length(page.take());
                            RenderState::EmitHeader
                        }
                        None => {
                            self.check_page_length(page.take());
                            RenderState::Done
                        }
                    }
                }
                RenderState::Done => break,
            };
        }

        lines
    }

    fn push_header(&self, lines: &mut Vec<ReportLine>, row: &ReportRow) {
        lines.push(ReportLine::new_page(self.heading.institution_title.as_str()));
        lines.push(ReportLine::advance(self.heading.report_title.as_str()));
        lines.push(ReportLine::advance(format!(
            "REPORT DATE : {}",
            self.heading.report_date
        )));
        lines.push(ReportLine::advance(format!(
            "CATEGORY : {}",
            row.category_label.trim_end()
        )));
        lines.push(ReportLine::advance(separator(BODY_WIDTH)));
        lines.push(ReportLine::advance(column_line([
            "BRH",
            "BRH",
            "CUSTOMER NAME",
            "ACCOUNT",
            "APPROVED",
            "CURRENT",
            "PREVIOUS",
            "NET",
        ])));
        lines.push(ReportLine::advance(column_line([
            "CDE",
            "ABR",
            "",
            "NUMBER",
            "LIMIT (RM)",
            "BALANCE (RM)",
            "BALANCE (RM)",
            "MOVEMENT (RM)",
        ])));
        lines.push(ReportLine::advance(separator(BODY_WIDTH)));
    }

    fn check_page_length(&self, page: Option<Page>) {
        if let Some(page) = page {
            if page.lines > self.page_length {
                tracing::debug!(
                    category = %page.category,
                    lines = page.lines,
                    page_length = self.page_length,
                    "Page exceeds page length"
                );
            }
        }
    }
}

/// Lay out eight heading cells in the report's column grid
fn column_line(cells: [&str; 8]) -> String {
    [
        fit_left(cells[0], BRANCH_CODE_WIDTH),
        fit_left(cells[1], BRANCH_NAME_WIDTH),
        fit_left(cells[2], CUSTOMER_NAME_WIDTH),
        fit_right(cells[3], ACCOUNT_WIDTH),
        fit_right(cells[4], AMOUNT_WIDTH),
        fit_right(cells[5], AMOUNT_WIDTH),
        fit_right(cells[6], AMOUNT_WIDTH),
        fit_right(cells[7], AMOUNT_WIDTH),
    ]
    .join(GAP)
}

/// Grouped amount, or the ungrouped form when grouping makes it too wide
fn amount_text(grouped: String, plain: String) -> String {
    if fits(&grouped, AMOUNT_WIDTH) {
        grouped
    } else {
        plain
    }
}

fn data_line(row: &ReportRow, quality: &mut QualityLog) -> String {
    let movement = &row.movement;
    let balance = |amount: Money| amount_text(amount.format_grouped(), amount.format_plain());

    let mut number = |column: &str, value: String, width: usize| {
        if !fits(&value, width) {
            quality.record(DataQualityWarning::ColumnOverflow {
                account_id: movement.account_id(),
                column: column.to_string(),
                value: value.clone(),
            });
        }
        fit_number(&value, width)
    };

    [
        number(
            "branch_code",
            format!("{:03}", movement.branch_code()),
            BRANCH_CODE_WIDTH,
        ),
        fit_left(&row.branch_name, BRANCH_NAME_WIDTH),
        fit_left(&row.customer_name, CUSTOMER_NAME_WIDTH),
        number(
            "account_number",
            movement.account_id().to_string(),
            ACCOUNT_WIDTH,
        ),
        number(
            "approved_limit",
            amount_text(
                movement.approved_limit.format_grouped_whole(),
                movement.approved_limit.format_plain_whole(),
            ),
            AMOUNT_WIDTH,
        ),
        number(
            "current_balance",
            balance(movement.current_balance),
            AMOUNT_WIDTH,
        ),
        number(
            "previous_balance",
            balance(movement.previous_balance),
            AMOUNT_WIDTH,
        ),
        number(
            "net_movement",
            balance(movement.signed_movement),
            AMOUNT_WIDTH,
        ),
    ]
    .join(GAP)
}
