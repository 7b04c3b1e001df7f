//! Navigation Controller
//! Moves between pages, keeps exactly one page active and provisions the
//! chart of each chart page shortly after it is entered.
//!
//! ```text
//!   advance (i < last)      retreat (i > 0)      jump_to(j) (j < total)
//!   i ──────────► i+1       i ──────────► i-1    i ──────────► j
//!
//!   on every move: deactivate i, activate new page, schedule its chart,
//!                  refresh affordances, scroll to top
//! ```

use crate::charts::{ChartBackend, ChartKind, ChartProvisioner, CHART_PAGES};
use crate::deck::scheduler::ProvisionScheduler;
use crate::deck::state::{Affordances, DeckState};
use crate::deck::view::DeckView;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Wait between entering a chart page and building its chart.
pub const DEFAULT_PROVISION_DELAY: Duration = Duration::from_millis(100);

pub struct Navigator<V: DeckView, B: ChartBackend> {
    state: DeckState,
    view: V,
    provisioner: ChartProvisioner<B>,
    scheduler: ProvisionScheduler,
    delay: Duration,
    chart_pages: &'static [(usize, ChartKind)],
}

impl<V: DeckView, B: ChartBackend> Navigator<V, B> {
    pub fn new(view: V, provisioner: ChartProvisioner<B>) -> Self {
        Self {
            state: DeckState::new(),
            view,
            provisioner,
            scheduler: ProvisionScheduler::new(),
            delay: DEFAULT_PROVISION_DELAY,
            chart_pages: &CHART_PAGES,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the page to chart table (default [`CHART_PAGES`]).
    pub fn with_chart_pages(mut self, chart_pages: &'static [(usize, ChartKind)]) -> Self {
        self.chart_pages = chart_pages;
        self
    }

    /// Startup: show the first page and set the controls. A chart on the
    /// first page is built immediately since the page is already visible.
    pub fn start(&mut self) {
        let current = self.state.current();
        self.show_only(current);
        self.apply_affordances();

        if let Some(kind) = self.chart_for(current) {
            self.provisioner.provision(kind);
        }
        debug!(page = current, "deck started");
    }

    /// Go to the next page. No-op on the last page.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.state.advance() {
            Some(page) => {
                self.after_move(page, now);
                true
            }
            None => false,
        }
    }

    /// Go to the previous page. No-op on the first page.
    pub fn retreat(&mut self, now: Instant) -> bool {
        match self.state.retreat() {
            Some(page) => {
                self.after_move(page, now);
                true
            }
            None => false,
        }
    }

    /// Go to `target` and close the sidebar. Out-of-range targets are ignored.
    pub fn jump_to(&mut self, target: usize, now: Instant) -> bool {
        match self.state.jump_to(target) {
            Some(page) => {
                self.after_move(page, now);
                self.close_sidebar();
                true
            }
            None => {
                debug!(target, total = self.state.total(), "ignoring out-of-range jump");
                false
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        let open = !self.view.sidebar_open();
        self.view.set_sidebar_open(open);
    }

    pub fn close_sidebar(&mut self) {
        self.view.set_sidebar_open(false);
    }

    /// Build every chart whose delay has elapsed. Returns how many fired.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        for kind in &due {
            self.provisioner.provision(*kind);
        }
        due.len()
    }

    /// When the next scheduled chart is due.
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn current_page(&self) -> usize {
        self.state.current()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total()
    }

    pub fn affordances(&self) -> Affordances {
        self.state.affordances()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn provisioner(&self) -> &ChartProvisioner<B> {
        &self.provisioner
    }

    pub fn scheduler(&self) -> &ProvisionScheduler {
        &self.scheduler
    }

    fn after_move(&mut self, page: usize, now: Instant) {
        trace!(page, "page changed");
        self.show_only(page);

        if let Some(kind) = self.chart_for(page) {
            self.scheduler.schedule(page, kind, now + self.delay);
            debug!(page, ?kind, "chart provisioning scheduled");
        }

        self.apply_affordances();
        self.view.scroll_to_top();
    }

    fn chart_for(&self, page: usize) -> Option<ChartKind> {
        self.chart_pages
            .iter()
            .find(|(index, _)| *index == page)
            .map(|(_, kind)| *kind)
    }

    fn show_only(&mut self, page: usize) {
        for index in 0..self.view.page_count() {
            self.view.set_page_active(index, false);
        }
        if !self.view.set_page_active(page, true) {
            debug!(page, "page element missing");
        }
    }

    fn apply_affordances(&mut self) {
        let affordances = self.state.affordances();
        self.view.apply_affordances(&affordances);
    }
}
