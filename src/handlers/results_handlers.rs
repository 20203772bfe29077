use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::RoomHandle;
use crate::templates_structs::{BestSlotView, GridCell, GridRow, PageContext, ResultsTemplate};

/// GET /results: voter grid, per-slot chart and the recommended slot.
pub async fn page(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (event_title, slot_headers, rows, report) = {
        let room = room.lock();
        let event = room.event();
        let event_title = event.is_published().then(|| event.title().to_string());
        let slot_headers: Vec<String> = event.slots().iter().map(|s| s.to_key()).collect();
        let rows: Vec<GridRow> = event
            .votes()
            .iter()
            .map(|ballot| GridRow {
                voter: ballot.voter.clone(),
                cells: ballot
                    .selections
                    .iter()
                    .map(|&available| GridCell { available })
                    .collect(),
            })
            .collect();
        (event_title, slot_headers, rows, room.tally())
    };

    let ctx = PageContext::build(&session, &config, "results");
    let tmpl = ResultsTemplate {
        ctx,
        event_title,
        slot_headers,
        rows,
        bars: ResultsTemplate::bars_from(&report),
        best: report.best.map(|b| BestSlotView { slot: b.slot.to_key(), count: b.count }),
        voter_count: report.voter_count,
    };
    render(tmpl)
}
