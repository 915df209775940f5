use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, CountEntry, StatsViewModel, StatusBadge};
use complaintdesk_engine::ComplaintStats;
use complaintdesk_types::{ComplaintKind, ComplaintStatus};

pub fn present_stats(stats: &ComplaintStats) -> CommandResultViewModel<StatsViewModel> {
    let by_status = ComplaintStatus::ALL
        .iter()
        .map(|status| CountEntry {
            key: status.as_str().to_string(),
            label: status.label().to_string(),
            count: stats.by_status(*status),
        })
        .collect();

    let by_kind = ComplaintKind::ALL
        .iter()
        .map(|kind| CountEntry {
            key: kind.as_str().to_string(),
            label: kind.label().to_string(),
            count: stats.by_kind(*kind),
        })
        .collect();

    let result = CommandResultViewModel::new(StatsViewModel {
        total: stats.total,
        by_status,
        by_kind,
    });

    if stats.pending > 0 {
        return result
            .with_badge(StatusBadge::warning(format!("{} awaiting review", stats.pending)))
            .with_hint("List pending complaints", cmd::LIST_PENDING);
    }
    result
}
