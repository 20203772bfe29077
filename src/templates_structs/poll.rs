use askama::Template;

use crate::models::{DateGroup, SlotKey, TallyReport};

use super::PageContext;

/// One checkbox or preview chip for a slot.
pub struct SlotOption {
    pub key: String,
    pub time: String,
    pub checked: bool,
}

/// Slots of one calendar date, rendered as a block.
pub struct DateGroupView {
    pub date: String,
    pub weekday: String,
    pub slots: Vec<SlotOption>,
}

impl DateGroupView {
    /// Build display groups, checking the slots for which `checked` returns true.
    pub fn from_groups(groups: Vec<DateGroup>, checked: impl Fn(&SlotKey) -> bool) -> Vec<Self> {
        groups
            .into_iter()
            .map(|group| DateGroupView {
                slots: group
                    .slots
                    .iter()
                    .map(|slot| SlotOption {
                        key: slot.to_key(),
                        time: slot.time().label(),
                        checked: checked(slot),
                    })
                    .collect(),
                date: group.date,
                weekday: group.weekday,
            })
            .collect()
    }
}

/// Summary of the currently live event shown to the organizer.
pub struct LiveEventSummary {
    pub title: String,
    pub slot_count: usize,
    pub voter_count: usize,
    pub revision: u64,
}

#[derive(Template)]
#[template(path = "organize/unlock.html")]
pub struct UnlockTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "organize/index.html")]
pub struct OrganizeTemplate {
    pub ctx: PageContext,
    pub title_value: String,
    pub today: String,
    pub times: Vec<String>,
    pub draft_groups: Vec<DateGroupView>,
    pub draft_count: usize,
    pub live: Option<LiveEventSummary>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "vote.html")]
pub struct VoteTemplate {
    pub ctx: PageContext,
    pub event_title: Option<String>,
    pub revision: u64,
    pub groups: Vec<DateGroupView>,
    pub voter_name: String,
    pub errors: Vec<String>,
}

pub struct GridCell {
    pub available: bool,
}

pub struct GridRow {
    pub voter: String,
    pub cells: Vec<GridCell>,
}

pub struct SlotBar {
    pub slot: String,
    pub count: usize,
    pub width_pct: usize,
    pub is_best: bool,
}

pub struct BestSlotView {
    pub slot: String,
    pub count: usize,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub ctx: PageContext,
    pub event_title: Option<String>,
    pub slot_headers: Vec<String>,
    pub rows: Vec<GridRow>,
    pub bars: Vec<SlotBar>,
    pub best: Option<BestSlotView>,
    pub voter_count: usize,
}

impl ResultsTemplate {
    /// Bars scaled so the largest count fills the chart.
    pub fn bars_from(report: &TallyReport) -> Vec<SlotBar> {
        let max = report.counts.iter().map(|c| c.count).max().unwrap_or(0);
        let best = report.best.map(|b| b.slot);
        report
            .counts
            .iter()
            .map(|c| SlotBar {
                slot: c.slot.to_key(),
                count: c.count,
                width_pct: if max == 0 { 0 } else { c.count * 100 / max },
                is_best: best == Some(c.slot),
            })
            .collect()
    }
}
