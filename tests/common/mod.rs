#![allow(dead_code)]

use marketing_deck::charts::{ChartBackend, ChartKind, ChartProvisioner, ChartSpec};
use marketing_deck::deck::{Affordances, DeckView, Navigator, TOTAL_PAGES};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    Construct { surface: String, id: u32 },
    Dispose { surface: String, id: u32 },
}

#[derive(Debug, PartialEq)]
pub struct RecordedChart {
    pub id: u32,
    pub surface: String,
    pub kind: ChartKind,
}

/// Backend that records construct/dispose calls and tracks how many charts
/// are alive on each surface.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    surfaces: HashSet<String>,
    next_id: u32,
    live: HashMap<String, usize>,
    pub max_live_per_surface: usize,
    pub events: Vec<BackendEvent>,
}

impl RecordingBackend {
    pub fn with_surfaces(surfaces: &[&str]) -> Self {
        Self {
            surfaces: surfaces.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_all_surfaces() -> Self {
        let surfaces: Vec<&str> = ChartKind::ALL.iter().map(|k| k.surface()).collect();
        Self::with_surfaces(&surfaces)
    }

    pub fn constructed(&self, surface: &str) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BackendEvent::Construct { surface: s, .. } if s == surface))
            .count()
    }

    pub fn live(&self, surface: &str) -> usize {
        self.live.get(surface).copied().unwrap_or(0)
    }
}

impl ChartBackend for RecordingBackend {
    type Chart = RecordedChart;

    fn has_surface(&self, surface: &str) -> bool {
        self.surfaces.contains(surface)
    }

    fn construct(&mut self, surface: &str, spec: &ChartSpec) -> RecordedChart {
        self.next_id += 1;
        let live = self.live.entry(surface.to_string()).or_insert(0);
        *live += 1;
        self.max_live_per_surface = self.max_live_per_surface.max(*live);
        self.events.push(BackendEvent::Construct {
            surface: surface.to_string(),
            id: self.next_id,
        });
        RecordedChart {
            id: self.next_id,
            surface: surface.to_string(),
            kind: spec.kind,
        }
    }

    fn dispose(&mut self, chart: RecordedChart) {
        if let Some(live) = self.live.get_mut(&chart.surface) {
            *live -= 1;
        }
        self.events.push(BackendEvent::Dispose {
            surface: chart.surface,
            id: chart.id,
        });
    }
}

/// View that records everything the navigator applies to it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub active: Vec<bool>,
    pub affordances: Option<Affordances>,
    pub scrolls: usize,
    pub sidebar_open: bool,
}

impl RecordingView {
    pub fn new(page_count: usize) -> Self {
        Self {
            active: vec![false; page_count],
            ..Self::default()
        }
    }

    pub fn active_pages(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| i)
            .collect()
    }
}

impl DeckView for RecordingView {
    fn page_count(&self) -> usize {
        self.active.len()
    }

    fn set_page_active(&mut self, index: usize, active: bool) -> bool {
        match self.active.get_mut(index) {
            Some(slot) => {
                *slot = active;
                true
            }
            None => false,
        }
    }

    fn apply_affordances(&mut self, affordances: &Affordances) {
        self.affordances = Some(affordances.clone());
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }
}

pub type TestNavigator = Navigator<RecordingView, RecordingBackend>;

pub fn navigator_with(view: RecordingView, backend: RecordingBackend) -> TestNavigator {
    let mut nav = Navigator::new(view, ChartProvisioner::new(backend));
    nav.start();
    nav
}

/// Full deck with every chart surface present, already started.
pub fn full_deck() -> TestNavigator {
    navigator_with(
        RecordingView::new(TOTAL_PAGES),
        RecordingBackend::with_all_surfaces(),
    )
}
