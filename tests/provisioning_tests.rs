mod common;

use common::{BackendEvent, RecordingBackend};
use marketing_deck::charts::{ChartBackend, ChartKind, ChartProvisioner, PlotBackend};

#[test]
fn named_operations_build_their_charts() {
    let mut provisioner = ChartProvisioner::new(RecordingBackend::with_all_surfaces());

    assert!(provisioner.provision_distribution_chart());
    assert!(provisioner.provision_trend_chart());
    assert!(provisioner.provision_funnel_chart());

    assert_eq!(provisioner.registry().len(), 3);
    for kind in ChartKind::ALL {
        let chart = provisioner.chart(kind.surface()).expect("chart bound");
        assert_eq!(chart.kind, kind);
        assert_eq!(chart.surface, kind.surface());
    }
}

#[test]
fn reprovisioning_disposes_before_constructing() {
    let mut provisioner = ChartProvisioner::new(RecordingBackend::with_all_surfaces());
    for _ in 0..3 {
        provisioner.provision(ChartKind::Distribution);
    }

    let backend = provisioner.backend();
    assert_eq!(
        backend.events,
        vec![
            BackendEvent::Construct { surface: "platformChart".into(), id: 1 },
            BackendEvent::Dispose { surface: "platformChart".into(), id: 1 },
            BackendEvent::Construct { surface: "platformChart".into(), id: 2 },
            BackendEvent::Dispose { surface: "platformChart".into(), id: 2 },
            BackendEvent::Construct { surface: "platformChart".into(), id: 3 },
        ]
    );
    assert_eq!(backend.max_live_per_surface, 1);
    assert_eq!(backend.live("platformChart"), 1);
}

#[test]
fn surfaces_are_independent() {
    let mut provisioner = ChartProvisioner::new(RecordingBackend::with_all_surfaces());
    provisioner.provision_trend_chart();
    provisioner.provision_funnel_chart();
    provisioner.provision_trend_chart();

    let backend = provisioner.backend();
    assert_eq!(backend.live("growthChart"), 1);
    assert_eq!(backend.live("funnelChart"), 1);
    assert_eq!(provisioner.chart("funnelChart").map(|c| c.id), Some(2));
    assert_eq!(provisioner.chart("growthChart").map(|c| c.id), Some(3));
}

#[test]
fn missing_surface_aborts_without_effect() {
    let mut provisioner = ChartProvisioner::new(RecordingBackend::with_surfaces(&[]));

    assert!(!provisioner.provision_distribution_chart());
    assert!(provisioner.registry().is_empty());
    assert!(provisioner.backend().events.is_empty());
}

#[test]
fn plot_backend_keeps_one_live_chart_per_surface() {
    let surfaces = ChartKind::ALL.map(|k| k.surface());
    let mut provisioner = ChartProvisioner::new(PlotBackend::new(surfaces));

    for _ in 0..4 {
        provisioner.provision_funnel_chart();
    }
    provisioner.provision_distribution_chart();

    assert_eq!(provisioner.backend().live_count(), 2);
    let funnel = provisioner.chart("funnelChart").expect("funnel bound");
    assert_eq!(funnel.generation, 4);
    assert_eq!(funnel.spec, ChartKind::Funnel.spec());
    assert!(!provisioner.backend().has_surface("revenueChart"));
}
