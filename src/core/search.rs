// search.rs - Coordinate, text and column lookup in merged BED files

use crate::data::{BedRecord, BED_COLUMNS};
use crate::error::{BedMergeError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn coordinate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([^:\s]+):(\d+)\s*$").expect("valid coordinate regex"))
}

/// Parse `chrom:pos`, e.g. `chr7:55242465`. Positions start at 1.
pub fn parse_coordinate(input: &str) -> Result<(String, i64)> {
    let caps = coordinate_regex().captures(input).ok_or_else(|| {
        BedMergeError::InvalidQuery(format!(
            "'{}' is not a coordinate (expected chrom:pos, e.g. chr7:55242465)",
            input
        ))
    })?;

    let pos = caps[2]
        .parse::<i64>()
        .map_err(|e| BedMergeError::InvalidQuery(format!("Invalid position '{}': {}", &caps[2], e)))?;
    if pos <= 0 {
        return Err(BedMergeError::InvalidQuery(format!(
            "Position in '{}' must be greater than 0",
            input.trim()
        )));
    }
    Ok((caps[1].to_string(), pos))
}

/// Case-insensitive filter on one named column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: usize,
    pub value: String,
    pub exact: bool,
}

impl ColumnFilter {
    /// Parse `column=value`. An empty value yields `None` (no filtering).
    pub fn parse(input: &str, exact: bool) -> Result<Option<Self>> {
        let (name, value) = input.split_once('=').ok_or_else(|| {
            BedMergeError::InvalidQuery(format!(
                "'{}' is not a column filter (expected column=value, e.g. symbol=EGFR)",
                input
            ))
        })?;

        let name = name.trim();
        let column = BED_COLUMNS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                BedMergeError::InvalidQuery(format!(
                    "Unknown column '{}'. Available: {}",
                    name,
                    BED_COLUMNS.join(", ")
                ))
            })?;

        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            column,
            value: value.to_lowercase(),
            exact,
        }))
    }

    pub fn matches(&self, record: &BedRecord) -> bool {
        let text = record.column(self.column).to_lowercase();
        if self.exact {
            text == self.value
        } else {
            text.contains(self.value.as_str())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub coordinate: Option<(String, i64)>,
    pub term: Option<String>,
    pub filters: Vec<ColumnFilter>,
}

impl SearchQuery {
    pub fn new(at: Option<&str>, term: Option<&str>) -> Result<Self> {
        let coordinate = at.map(parse_coordinate).transpose()?;
        let term = term
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        Ok(Self {
            coordinate,
            term,
            filters: Vec::new(),
        })
    }

    /// Add substring filters and exact filters, both given as `column=value`
    pub fn with_filters(mut self, contains: &[String], exact: &[String]) -> Result<Self> {
        let parsed = contains
            .iter()
            .map(|f| ColumnFilter::parse(f, false))
            .chain(exact.iter().map(|f| ColumnFilter::parse(f, true)));
        for filter in parsed {
            if let Some(filter) = filter? {
                self.filters.push(filter);
            }
        }
        Ok(self)
    }

    fn matches_term(&self, record: &BedRecord) -> bool {
        match &self.term {
            Some(term) => record
                .fields
                .iter()
                .any(|f| f.to_lowercase().contains(term.as_str())),
            None => true,
        }
    }

    fn matches_filters(&self, record: &BedRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    /// Apply the query to records in file order.
    ///
    /// The term narrows the records first. A coordinate then selects the one
    /// containing interval whose start is nearest to the position (first in
    /// file order on ties), and only rows sharing its chrom/start/end survive.
    /// Column filters apply to whatever is left.
    pub fn apply(&self, records: Vec<BedRecord>) -> Vec<BedRecord> {
        let narrowed: Vec<BedRecord> = records
            .into_iter()
            .filter(|r| self.matches_term(r))
            .collect();

        let nearest = match &self.coordinate {
            Some((chrom, pos)) => match nearest_hit(&narrowed, chrom, *pos) {
                Some(hit) => Some((hit.chrom.clone(), hit.start, hit.end)),
                None => return Vec::new(),
            },
            None => None,
        };

        narrowed
            .into_iter()
            .filter(|r| self.matches_filters(r))
            .filter(|r| match &nearest {
                Some((chrom, start, end)) => {
                    &r.chrom == chrom && r.start == *start && r.end == *end
                }
                None => true,
            })
            .collect()
    }
}

/// The record on `chrom` containing `pos` with the smallest `|pos - start|`
fn nearest_hit<'a>(records: &'a [BedRecord], chrom: &str, pos: i64) -> Option<&'a BedRecord> {
    records
        .iter()
        .filter(|r| r.chrom == chrom && r.contains(pos))
        .min_by_key(|r| r.start.map_or(i64::MAX, |start| (pos - start).abs()))
}

/// Return the records of a merged file that match `query`, in file order
pub fn search_bed(bed_path: &Path, query: &SearchQuery) -> Result<Vec<BedRecord>> {
    let records = BedRecord::read_all(bed_path)?;
    let total = records.len();
    let hits = query.apply(records);
    println!(
        "🔍 {} of {} records matched in {}",
        hits.len(),
        total,
        bed_path.display()
    );
    Ok(hits)
}
