//! Chart Registry Module
//! Tracks the live chart bound to each target surface and provisions charts
//! through a pluggable backend.

use crate::charts::spec::{ChartKind, ChartSpec};
use std::collections::HashMap;
use tracing::debug;

/// Rendering capability the provisioner depends on.
///
/// Implementors own the actual drawing resources; the provisioner only asks
/// for a chart to be built on a surface or torn down.
pub trait ChartBackend {
    /// Handle to one constructed chart.
    type Chart;

    /// Whether a surface with this identifier exists.
    fn has_surface(&self, surface: &str) -> bool;

    /// Build a chart from `spec` bound to `surface`.
    fn construct(&mut self, surface: &str, spec: &ChartSpec) -> Self::Chart;

    /// Release a chart previously returned by `construct`.
    fn dispose(&mut self, chart: Self::Chart);
}

/// Surface identifier -> currently bound chart.
pub struct ChartRegistry<C> {
    bound: HashMap<String, C>,
}

impl<C> Default for ChartRegistry<C> {
    fn default() -> Self {
        Self {
            bound: HashMap::new(),
        }
    }
}

impl<C> ChartRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart bound to `surface`, if any.
    pub fn lookup(&self, surface: &str) -> Option<&C> {
        self.bound.get(surface)
    }

    /// Unbind and return the chart on `surface`.
    pub fn take(&mut self, surface: &str) -> Option<C> {
        self.bound.remove(surface)
    }

    /// Bind `chart` to `surface`. The surface must be empty.
    fn bind(&mut self, surface: &str, chart: C) {
        debug_assert!(!self.bound.contains_key(surface));
        self.bound.insert(surface.to_string(), chart);
    }

    /// Number of bound surfaces
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// Builds the chart of each chart-bearing page, replacing any chart already
/// bound to the same surface.
pub struct ChartProvisioner<B: ChartBackend> {
    backend: B,
    registry: ChartRegistry<B::Chart>,
}

impl<B: ChartBackend> ChartProvisioner<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            registry: ChartRegistry::new(),
        }
    }

    /// Construct the chart for `kind`, disposing the previous one first.
    ///
    /// Returns `false` without side effects when the backend has no surface
    /// for this chart.
    pub fn provision(&mut self, kind: ChartKind) -> bool {
        let surface = kind.surface();
        if !self.backend.has_surface(surface) {
            debug!(surface, "chart surface missing, skipping provisioning");
            return false;
        }

        if let Some(existing) = self.registry.take(surface) {
            debug!(surface, "disposing existing chart");
            self.backend.dispose(existing);
        }

        let spec = kind.spec();
        let chart = self.backend.construct(surface, &spec);
        self.registry.bind(surface, chart);
        debug!(surface, ?kind, "chart provisioned");
        true
    }

    pub fn provision_distribution_chart(&mut self) -> bool {
        self.provision(ChartKind::Distribution)
    }

    pub fn provision_trend_chart(&mut self) -> bool {
        self.provision(ChartKind::Trend)
    }

    pub fn provision_funnel_chart(&mut self) -> bool {
        self.provision(ChartKind::Funnel)
    }

    /// Chart currently bound to `surface`.
    pub fn chart(&self, surface: &str) -> Option<&B::Chart> {
        self.registry.lookup(surface)
    }

    pub fn registry(&self) -> &ChartRegistry<B::Chart> {
        &self.registry
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
