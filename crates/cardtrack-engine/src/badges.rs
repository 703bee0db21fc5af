use crate::format::{BADGE_PRECISION, format_hours};
use cardtrack_core::{BadgeKind, BoardSettings};
use cardtrack_types::{Badge, CardPlacement, Metrics};

/// Build the badges for one card.
///
/// Badges appear in `BadgeKind::ALL` order and only when enabled and
/// resolvable. `metrics` is `None` when the metrics request failed. The
/// result is never empty: with nothing to show it holds the fallback badge.
pub fn compose_badges(
    metrics: Option<&Metrics>,
    settings: &BoardSettings,
    card: &CardPlacement,
) -> Vec<Badge> {
    let mut badges: Vec<Badge> = match metrics {
        Some(metrics) => BadgeKind::ALL
            .iter()
            .filter(|kind| settings.is_enabled(**kind))
            .filter_map(|kind| resolve(*kind, metrics, settings, card))
            .collect(),
        None => Vec::new(),
    };

    if badges.is_empty() {
        badges.push(Badge::fallback());
    }
    badges
}

fn resolve(
    kind: BadgeKind,
    metrics: &Metrics,
    settings: &BoardSettings,
    card: &CardPlacement,
) -> Option<Badge> {
    let color = settings.colors.get(kind);
    match kind {
        BadgeKind::CurrentList => list_badge(metrics, card, color),
        BadgeKind::TotalTime => {
            let seconds = metrics.total_time?;
            Some(Badge::new(
                format!("Total: {}h", format_hours(seconds, BADGE_PRECISION)),
                color,
            ))
        }
        BadgeKind::SpecificLists => {
            if !settings.selected_lists.contains(&card.list_id) {
                return None;
            }
            list_badge(metrics, card, color)
        }
        BadgeKind::PersonalTime => {
            let viewer = card.viewer.as_ref()?;
            let seconds = metrics
                .member_seconds(viewer.id.as_str())
                .or_else(|| viewer.name.as_deref().and_then(|name| metrics.member_seconds(name)))
                .filter(|seconds| *seconds != 0.0)?;
            Some(Badge::new(
                format!("Me: {}h", format_hours(seconds, BADGE_PRECISION)),
                color,
            ))
        }
    }
}

fn list_badge(metrics: &Metrics, card: &CardPlacement, color: &str) -> Option<Badge> {
    let name = card.list_name.as_deref()?;
    let seconds = metrics.list_seconds(name)?;
    Some(Badge::new(
        format!("{}: {}h", name, format_hours(seconds, BADGE_PRECISION)),
        color,
    ))
}
