//! Delayed chart provisioning.
//!
//! Entering a chart page schedules its chart a short time later, once the
//! page has been laid out. Tasks are keyed by page: scheduling a page that is
//! already pending replaces the old task. Tasks for pages the user has since
//! left still fire.

use crate::charts::ChartKind;
use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingProvision {
    pub kind: ChartKind,
    pub due: Instant,
}

#[derive(Debug, Default)]
pub struct ProvisionScheduler {
    pending: BTreeMap<usize, PendingProvision>,
}

impl ProvisionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` for `page` at `due`, replacing a pending task for the
    /// same page.
    pub fn schedule(&mut self, page: usize, kind: ChartKind, due: Instant) {
        self.pending.insert(page, PendingProvision { kind, due });
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ChartKind> {
        let due_pages: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, task)| task.due <= now)
            .map(|(page, _)| *page)
            .collect();

        let mut fired: Vec<PendingProvision> = due_pages
            .into_iter()
            .filter_map(|page| self.pending.remove(&page))
            .collect();
        fired.sort_by_key(|task| task.due);
        fired.into_iter().map(|task| task.kind).collect()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.values().map(|task| task.due).min()
    }

    pub fn pending(&self) -> impl Iterator<Item = (usize, &PendingProvision)> {
        self.pending.iter().map(|(page, task)| (*page, task))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn rescheduling_a_page_replaces_its_task() {
        let t0 = Instant::now();
        let mut scheduler = ProvisionScheduler::new();
        scheduler.schedule(5, ChartKind::Distribution, t0 + Duration::from_millis(100));
        scheduler.schedule(5, ChartKind::Distribution, t0 + Duration::from_millis(300));

        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.take_due(t0 + Duration::from_millis(150)).is_empty());
        assert_eq!(
            scheduler.take_due(t0 + Duration::from_millis(300)),
            vec![ChartKind::Distribution]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_tasks_fire_in_due_order() {
        let t0 = Instant::now();
        let mut scheduler = ProvisionScheduler::new();
        scheduler.schedule(7, ChartKind::Funnel, t0 + Duration::from_millis(10));
        scheduler.schedule(5, ChartKind::Distribution, t0 + Duration::from_millis(20));
        scheduler.schedule(6, ChartKind::Trend, t0 + Duration::from_millis(500));

        assert_eq!(scheduler.next_due(), Some(t0 + Duration::from_millis(10)));
        assert_eq!(
            scheduler.take_due(t0 + Duration::from_millis(100)),
            vec![ChartKind::Funnel, ChartKind::Distribution]
        );
        assert_eq!(scheduler.len(), 1);
    }
}
