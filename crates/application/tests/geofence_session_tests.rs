use application::{GeofenceSession, PanelStatus};
use async_trait::async_trait;
use domain::{
    AreaIdentifier, DomainError, DrawEvent, DrawSurface, ProviderError, ProviderResult,
    QueryKind, QueryState, RegionDataProvider, RegionRequest, SurfaceEvent, Vertex,
};
use mockall::mock;
use rstest::rstest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

struct FakeSurface {
    ready: bool,
    tool_enabled: bool,
}

impl FakeSurface {
    fn ready() -> Self {
        Self {
            ready: true,
            tool_enabled: false,
        }
    }
}

impl DrawSurface for FakeSurface {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn view_center(&self) -> Vertex {
        Vertex::new(19.9975, 73.7898).unwrap()
    }

    fn set_polygon_tool(&mut self, enabled: bool) {
        self.tool_enabled = enabled;
    }
}

/// Answers with "<kind> for <descriptor>"
struct EchoProvider;

#[async_trait]
impl RegionDataProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn describe(&self, request: RegionRequest) -> ProviderResult<String> {
        Ok(format!("{} for {}", request.kind, request.descriptor()))
    }
}

/// Each identifier resolves only when the test releases its gate
#[derive(Default)]
struct GatedProvider {
    gates: Mutex<HashMap<AreaIdentifier, oneshot::Receiver<ProviderResult<String>>>>,
}

impl GatedProvider {
    fn gate(&self, identifier: &AreaIdentifier) -> oneshot::Sender<ProviderResult<String>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(identifier.clone(), rx);
        tx
    }
}

#[async_trait]
impl RegionDataProvider for GatedProvider {
    fn name(&self) -> &str {
        "gated"
    }

    async fn describe(&self, request: RegionRequest) -> ProviderResult<String> {
        let gate = self.gates.lock().unwrap().remove(&request.identifier);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ProviderError::Unavailable("gate dropped".to_string()))),
            None => Err(ProviderError::Unavailable("no gate".to_string())),
        }
    }
}

mock! {
    pub RegionProvider {}

    #[async_trait]
    impl RegionDataProvider for RegionProvider {
        fn name(&self) -> &str;
        async fn describe(&self, request: RegionRequest) -> ProviderResult<String>;
    }
}

fn v(lat: f64, lon: f64) -> Vertex {
    Vertex::new(lat, lon).unwrap()
}

/// Roughly 45 m x 45 m around central Nashik, about half an acre
fn half_acre_plot() -> Vec<Vertex> {
    let (lat, lon) = (19.9975, 73.7898);
    let (dlat, dlon) = (0.000203, 0.000215);
    vec![
        v(lat - dlat, lon - dlon),
        v(lat - dlat, lon + dlon),
        v(lat + dlat, lon + dlon),
        v(lat + dlat, lon - dlon),
    ]
}

fn draw<S: DrawSurface>(session: &mut GeofenceSession<S>, vertices: &[Vertex]) -> Vec<DrawEvent> {
    let mut events = session.handle_surface_event(SurfaceEvent::DrawStarted).unwrap();
    for vertex in vertices {
        events.extend(
            session
                .handle_surface_event(SurfaceEvent::VertexPlaced(*vertex))
                .unwrap(),
        );
    }
    events.extend(
        session
            .handle_surface_event(SurfaceEvent::Completed(vertices.to_vec()))
            .unwrap(),
    );
    events
}

#[tokio::test]
async fn test_half_acre_plot_scenario() {
    let mut session = GeofenceSession::new(FakeSurface::ready(), Arc::new(EchoProvider));
    let plot = half_acre_plot();

    let events = draw(&mut session, &plot);

    let first_vertex: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, DrawEvent::FirstVertex { .. }))
        .collect();
    let selections: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            DrawEvent::AreaSelected { acres, .. } => Some(*acres),
            _ => None,
        })
        .collect();
    assert_eq!(first_vertex.len(), 1);
    assert_eq!(selections.len(), 1);
    assert!(
        (selections[0] - 0.5).abs() < 0.01,
        "expected ~0.5 acres, got {}",
        selections[0]
    );
    assert!(matches!(events[0], DrawEvent::FirstVertex { .. }));

    // Both panels are loading until their queries land
    let [soil, land_use] = session.panel_views();
    assert_eq!(soil.status, PanelStatus::Loading);
    assert_eq!(land_use.status, PanelStatus::Loading);

    session.settle().await;

    let [soil, land_use] = session.panel_views();
    assert_eq!(soil.status, PanelStatus::Success);
    assert_eq!(land_use.status, PanelStatus::Success);
    assert!(soil.text.starts_with("soil for POINT"));
    assert!(land_use.text.starts_with("land-use for POLYGON"));
    assert!(session.selected_area().is_some());
}

#[rstest]
#[case::newer_resolves_first(true)]
#[case::older_resolves_first(false)]
#[tokio::test]
async fn test_late_soil_result_does_not_overwrite_newer_point(#[case] newer_first: bool) {
    let provider = Arc::new(GatedProvider::default());
    let mut session = GeofenceSession::new(FakeSurface::ready(), provider.clone());

    let (a, b) = (v(20.0, 73.0), v(20.5, 73.5));
    let id_a = AreaIdentifier::for_point(&a).in_session(1);
    let id_b = AreaIdentifier::for_point(&b).in_session(2);
    let gate_a = provider.gate(&id_a);
    let gate_b = provider.gate(&id_b);

    session.handle_surface_event(SurfaceEvent::DrawStarted).unwrap();
    let events = session
        .handle_surface_event(SurfaceEvent::VertexPlaced(a))
        .unwrap();
    assert!(matches!(&events[..], [DrawEvent::FirstVertex { identifier, .. }] if identifier == &id_a));

    // Redrawing clears, then the new first vertex re-targets the soil panel
    let events = session.handle_surface_event(SurfaceEvent::DrawStarted).unwrap();
    assert_eq!(events, vec![DrawEvent::Clear]);
    let events = session
        .handle_surface_event(SurfaceEvent::VertexPlaced(b))
        .unwrap();
    assert!(matches!(&events[..], [DrawEvent::FirstVertex { identifier, .. }] if identifier == &id_b));

    if newer_first {
        gate_b.send(Ok("soil B".to_string())).unwrap();
        assert!(session.next_result().await);
        gate_a.send(Ok("soil A".to_string())).unwrap();
        assert!(!session.next_result().await);
    } else {
        gate_a.send(Ok("soil A".to_string())).unwrap();
        assert!(!session.next_result().await);
        assert_eq!(session.panel_state(QueryKind::Soil), Some(&QueryState::Loading));
        gate_b.send(Ok("soil B".to_string())).unwrap();
        assert!(session.next_result().await);
    }

    let soil = session.panels().panel(QueryKind::Soil);
    assert_eq!(soil.identifier(), Some(&id_b));
    assert_eq!(
        soil.state(),
        Some(&QueryState::Success {
            summary: "soil B".to_string()
        })
    );
}

#[tokio::test]
async fn test_late_result_for_same_point_from_cleared_session_is_dropped() {
    let provider = Arc::new(GatedProvider::default());
    let mut session = GeofenceSession::new(FakeSurface::ready(), provider.clone());

    let p = v(20.0, 73.0);
    let earlier = AreaIdentifier::for_point(&p).in_session(1);
    let current = AreaIdentifier::for_point(&p).in_session(2);
    let earlier_gate = provider.gate(&earlier);
    let current_gate = provider.gate(&current);

    session.handle_surface_event(SurfaceEvent::DrawStarted).unwrap();
    session
        .handle_surface_event(SurfaceEvent::VertexPlaced(p))
        .unwrap();
    let events = session.handle_surface_event(SurfaceEvent::DrawStarted).unwrap();
    assert_eq!(events, vec![DrawEvent::Clear]);
    let events = session
        .handle_surface_event(SurfaceEvent::VertexPlaced(p))
        .unwrap();
    assert!(matches!(&events[..], [DrawEvent::FirstVertex { identifier, .. }] if identifier == &current));

    current_gate.send(Ok("fresh soil".to_string())).unwrap();
    assert!(session.next_result().await);
    earlier_gate
        .send(Err(ProviderError::Unavailable("old session timed out".to_string())))
        .unwrap();
    assert!(!session.next_result().await);

    assert_eq!(
        session.panel_state(QueryKind::Soil),
        Some(&QueryState::Success {
            summary: "fresh soil".to_string()
        })
    );
}

#[tokio::test]
async fn test_soil_failure_does_not_affect_land_use() {
    let mut provider = MockRegionProvider::new();
    provider.expect_describe().times(2).returning(|request| {
        match request.kind {
            QueryKind::Soil => Err(ProviderError::Unavailable("SoilGrids timed out".to_string())),
            QueryKind::LandUse => Ok("Mostly vineyards".to_string()),
        }
    });

    let mut session = GeofenceSession::new(FakeSurface::ready(), Arc::new(provider));
    draw(&mut session, &half_acre_plot());
    session.settle().await;

    let [soil, land_use] = session.panel_views();
    assert_eq!(soil.status, PanelStatus::Failed);
    assert!(soil.text.contains("SoilGrids timed out"));
    assert_eq!(land_use.status, PanelStatus::Success);
    assert_eq!(land_use.text, "Mostly vineyards");
}

#[tokio::test]
async fn test_land_use_failure_does_not_affect_soil() {
    let mut provider = MockRegionProvider::new();
    provider.expect_describe().times(2).returning(|request| {
        match request.kind {
            QueryKind::Soil => Ok("Black cotton soil".to_string()),
            QueryKind::LandUse => Err(ProviderError::MalformedResponse("no classes".to_string())),
        }
    });

    let mut session = GeofenceSession::new(FakeSurface::ready(), Arc::new(provider));
    draw(&mut session, &half_acre_plot());
    session.settle().await;

    let [soil, land_use] = session.panel_views();
    assert_eq!(soil.status, PanelStatus::Success);
    assert_eq!(land_use.status, PanelStatus::Failed);
    assert_eq!(
        land_use.text,
        "The data service returned data that could not be read."
    );
}

#[tokio::test]
async fn test_delete_resets_panels_and_drops_in_flight_results() {
    let provider = Arc::new(GatedProvider::default());
    let mut session = GeofenceSession::new(FakeSurface::ready(), provider.clone());
    let plot = half_acre_plot();

    let soil_gate = provider.gate(&AreaIdentifier::for_point(&plot[0]).in_session(1));
    let polygon = domain::Polygon::new(plot.clone()).unwrap();
    let land_use_gate = provider.gate(&AreaIdentifier::for_polygon(&polygon).in_session(1));

    draw(&mut session, &plot);
    assert!(session.selected_area().is_some());

    let events = session.handle_surface_event(SurfaceEvent::Deleted).unwrap();
    assert_eq!(events, vec![DrawEvent::Clear]);
    assert!(session.selected_area().is_none());

    soil_gate.send(Ok("late soil".to_string())).unwrap();
    land_use_gate.send(Ok("late land use".to_string())).unwrap();
    assert!(!session.next_result().await);
    assert!(!session.next_result().await);

    let [soil, land_use] = session.panel_views();
    assert_eq!(soil.status, PanelStatus::Placeholder);
    assert_eq!(land_use.status, PanelStatus::Placeholder);
}

#[tokio::test]
async fn test_not_ready_surface_issues_nothing() {
    let mut provider = MockRegionProvider::new();
    provider.expect_describe().never();

    let surface = FakeSurface {
        ready: false,
        tool_enabled: false,
    };
    let mut session = GeofenceSession::new(surface, Arc::new(provider));

    let error = session
        .handle_surface_event(SurfaceEvent::DrawStarted)
        .unwrap_err();
    assert_eq!(error, DomainError::SurfaceNotReady);
    assert_eq!(session.pump(), 0);
    assert!(session.panels().is_settled());

    // Once the map loads the tool arms and drawing works
    session.surface_mut().ready = true;
    assert!(session.refresh_readiness().is_empty());
    assert!(session.controller().surface().tool_enabled);
}
