use std::time::Duration;

use stride_controller::{Controller, ControllerPhase, Dispatch, UiEvent};
use stride_core::config::{GatingPolicy, PresentationConfig};
use stride_core::constants::operations;
use stride_core::errors::ModelError;
use stride_core::models::{Label, PredictorState};
use stride_core::traits::{IActivityModel, Region};
use stride_features::FeatureSynthesizer;
use stride_predictor::gateway::LOAD_CANCELLED;
use stride_predictor::PredictorGateway;
use stride_presenter::{BufferSurface, Presenter};
use test_fixtures::{ScriptedModel, ScriptedSource};

const DRAWS: [f32; 6] = [0.1, -0.2, 1.0, 0.5, 1.5, 0.0];

type TestController = Controller<ScriptedModel, ScriptedSource, BufferSurface>;

fn controller_with(model: ScriptedModel, gating: GatingPolicy) -> TestController {
    Controller::new(
        PredictorGateway::with_policy(model, gating, 5),
        FeatureSynthesizer::new(ScriptedSource::new(DRAWS.to_vec())),
        Presenter::new(BufferSurface::new(), &PresentationConfig::default()),
    )
}

fn controller(model: ScriptedModel) -> TestController {
    controller_with(model, GatingPolicy::Strict)
}

fn writes(controller: &TestController, region: Region) -> usize {
    controller.presenter().surface().writes_to(region)
}

fn output(controller: &TestController) -> String {
    controller
        .presenter()
        .surface()
        .region(Region::Output)
        .unwrap_or_default()
        .to_string()
}

// ── Load ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn starts_idle_and_uninitialized() {
    let c = controller(ScriptedModel::new());
    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(c.predictor_state(), PredictorState::Uninitialized);
    assert!(c.presenter().surface().history().is_empty());
}

#[tokio::test]
async fn load_renders_timing_and_becomes_ready() {
    let c = controller(ScriptedModel::new());

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Completed);

    assert_eq!(c.phase(), ControllerPhase::Ready);
    assert_eq!(c.predictor_state(), PredictorState::Ready);
    assert_eq!(writes(&c, Region::LoadTime), 1);
    assert_eq!(writes(&c, Region::Output), 0);
    let rendered = c.presenter().surface().region(Region::LoadTime).unwrap().to_string();
    assert!(rendered.starts_with("model load took "), "{rendered}");
    assert!(rendered.ends_with(" ms"));
}

#[tokio::test]
async fn load_failure_is_rendered_and_returns_to_idle() {
    let c = controller(ScriptedModel::new().failing_load("boot failure"));

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Failed);

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(c.predictor_state(), PredictorState::Failed);
    assert_eq!(writes(&c, Region::Output), 1);
    assert_eq!(writes(&c, Region::LoadTime), 0);
    assert!(output(&c).contains("boot failure"));
}

#[tokio::test]
async fn loading_twice_stays_ready() {
    let c = controller(ScriptedModel::new());

    c.dispatch(UiEvent::LoadModel).await;
    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Completed);

    assert_eq!(c.phase(), ControllerPhase::Ready);
    assert_eq!(c.gateway().model().load_calls(), 1);
    assert_eq!(writes(&c, Region::LoadTime), 2);
    assert_eq!(c.metrics().session.loads, 2);
}

// ── Run ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn run_renders_features_and_label() {
    let c = controller(ScriptedModel::new().returning(1));
    c.dispatch(UiEvent::LoadModel).await;

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Completed);

    assert_eq!(c.phase(), ControllerPhase::Ready);
    let rendered = output(&c);
    assert!(rendered.contains("1 (walk-with-hand)"), "{rendered}");
    assert!(rendered.contains("-0.2000"));
    assert!(rendered.contains("prediction time: "));

    let result = c.last_prediction().unwrap();
    assert_eq!(result.features.values(), DRAWS);
    assert_eq!(result.label, Label::new(1));
    assert!(result.duration_ms >= 0.0);
}

#[tokio::test]
async fn run_before_load_under_strict_gating_reports_not_ready() {
    let c = controller(ScriptedModel::new());

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Failed);

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(writes(&c, Region::Output), 1);
    assert!(output(&c).contains("not ready"), "{}", output(&c));
    assert_eq!(c.gateway().model().predict_calls(), 0);
}

#[tokio::test]
async fn run_before_load_passes_through_when_configured() {
    let c = controller_with(ScriptedModel::new().returning(4), GatingPolicy::PassThrough);

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Completed);

    assert!(output(&c).contains("4 (four-legged-walking)"));
    assert_eq!(c.predictor_state(), PredictorState::Uninitialized);
}

#[tokio::test]
async fn prediction_failure_is_rendered_exactly_once() {
    let c = controller(ScriptedModel::new().failing_predict("input tensor rejected"));
    c.dispatch(UiEvent::LoadModel).await;

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Failed);

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(writes(&c, Region::Output), 1);
    let rendered = output(&c);
    assert!(!rendered.is_empty());
    assert!(rendered.contains("input tensor rejected"));
    assert!(c.last_prediction().is_none());
}

#[tokio::test]
async fn out_of_domain_label_is_rendered_as_error() {
    let c = controller(ScriptedModel::new().returning(9));
    c.dispatch(UiEvent::LoadModel).await;

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Failed);
    assert!(output(&c).contains("outside expected domain"));
}

#[tokio::test]
async fn recovers_after_a_failed_run() {
    let c = controller(ScriptedModel::new().returning(0));

    c.dispatch(UiEvent::RunPrediction).await;
    assert_eq!(c.phase(), ControllerPhase::Idle);

    c.dispatch(UiEvent::LoadModel).await;
    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Completed);
    assert!(output(&c).contains("0 (sit)"));
}

// ── Re-entrancy ───────────────────────────────────────────────────────────
// Strengthening: a bare page would start a second action while the first is
// still suspended. The controller rejects it instead.

#[tokio::test]
async fn overlapping_runs_are_rejected() {
    let c = controller(ScriptedModel::new().with_delay(Duration::from_millis(20)));
    c.dispatch(UiEvent::LoadModel).await;

    let (first, second) = tokio::join!(
        c.dispatch(UiEvent::RunPrediction),
        c.dispatch(UiEvent::RunPrediction)
    );

    assert_eq!(first, Dispatch::Completed);
    assert_eq!(
        second,
        Dispatch::Rejected {
            phase: ControllerPhase::Predicting
        }
    );
    assert_eq!(c.gateway().model().predict_calls(), 1);
    assert_eq!(writes(&c, Region::Output), 1);
    assert_eq!(c.metrics().session.rejected_events, 1);
}

#[tokio::test]
async fn run_during_load_is_rejected() {
    let c = controller(ScriptedModel::new().with_delay(Duration::from_millis(20)));

    let (load, run) = tokio::join!(
        c.dispatch(UiEvent::LoadModel),
        c.dispatch(UiEvent::RunPrediction)
    );

    assert_eq!(load, Dispatch::Completed);
    assert_eq!(
        run,
        Dispatch::Rejected {
            phase: ControllerPhase::LoadingModel
        }
    );
    assert_eq!(c.phase(), ControllerPhase::Ready);
    assert_eq!(c.gateway().model().predict_calls(), 0);
    assert_eq!(writes(&c, Region::Output), 0);
}

// ── Panics and cancellation ───────────────────────────────────────────────

/// A model whose calls panic instead of returning an error.
struct PanickyModel {
    panic_on_load: bool,
}

impl IActivityModel for PanickyModel {
    async fn load_model(&self) -> Result<(), ModelError> {
        if self.panic_on_load {
            panic!("driver crashed during init");
        }
        Ok(())
    }

    async fn predict_activity(&self, _features: &[f32]) -> Result<i64, ModelError> {
        panic!("driver crashed during inference");
    }

    fn name(&self) -> &str {
        "panicky"
    }
}

fn panicky(panic_on_load: bool) -> Controller<PanickyModel, ScriptedSource, BufferSurface> {
    Controller::new(
        PredictorGateway::with_policy(PanickyModel { panic_on_load }, GatingPolicy::Strict, 5),
        FeatureSynthesizer::new(ScriptedSource::new(DRAWS.to_vec())),
        Presenter::new(BufferSurface::new(), &PresentationConfig::default()),
    )
}

#[tokio::test]
async fn panicking_prediction_is_rendered_and_returns_to_idle() {
    let c = panicky(false);
    c.dispatch(UiEvent::LoadModel).await;

    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Failed);

    assert_eq!(c.phase(), ControllerPhase::Idle);
    let view = c.presenter();
    let rendered = view.surface().region(Region::Output).unwrap_or_default().to_string();
    assert_eq!(view.surface().writes_to(Region::Output), 1);
    drop(view);
    assert!(rendered.contains("driver crashed during inference"), "{rendered}");
    assert_eq!(c.metrics().session.prediction_failures, 1);

    // The controller keeps accepting events.
    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Failed);
    assert_eq!(c.metrics().session.rejected_events, 0);
}

#[tokio::test]
async fn panicking_load_marks_predictor_failed() {
    let c = panicky(true);

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Failed);

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(c.predictor_state(), PredictorState::Failed);
    let view = c.presenter();
    let rendered = view.surface().region(Region::Output).unwrap_or_default();
    assert!(rendered.contains("driver crashed during init"), "{rendered}");
    drop(view);
    assert_eq!(c.metrics().session.load_failures, 1);

    // A retry reaches the gateway again instead of being rejected.
    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Failed);
}

#[tokio::test]
async fn dropped_load_returns_to_idle_and_can_retry() {
    let c = controller(ScriptedModel::new().with_delay(Duration::from_millis(50)));

    let timed_out =
        tokio::time::timeout(Duration::from_millis(5), c.dispatch(UiEvent::LoadModel)).await;
    assert!(timed_out.is_err());

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(c.predictor_state(), PredictorState::Failed);
    assert_eq!(c.gateway().last_error().as_deref(), Some(LOAD_CANCELLED));

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Completed);
    assert_eq!(c.predictor_state(), PredictorState::Ready);
    assert_eq!(c.gateway().model().load_calls(), 2);
}

#[tokio::test]
async fn dropped_run_returns_to_idle() {
    let c = controller(ScriptedModel::new().with_delay(Duration::from_millis(50)));
    c.dispatch(UiEvent::LoadModel).await;

    let timed_out =
        tokio::time::timeout(Duration::from_millis(5), c.dispatch(UiEvent::RunPrediction)).await;
    assert!(timed_out.is_err());

    assert_eq!(c.phase(), ControllerPhase::Idle);
    assert_eq!(c.predictor_state(), PredictorState::Ready);
    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Completed);
}

// ── Metrics ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_attempt_is_timed() {
    let c = controller(ScriptedModel::new().returning(2));

    c.dispatch(UiEvent::RunPrediction).await; // not ready
    c.dispatch(UiEvent::LoadModel).await;
    c.dispatch(UiEvent::RunPrediction).await;
    c.dispatch(UiEvent::RunPrediction).await;

    let metrics = c.metrics();
    assert_eq!(metrics.session.loads, 1);
    assert_eq!(metrics.session.predictions, 2);
    assert_eq!(metrics.session.prediction_failures, 1);
    assert_eq!(metrics.session.label_counts.get(&2), Some(&2));
    assert_eq!(metrics.latency_for(operations::PREDICT).unwrap().total_recorded, 3);
    assert_eq!(metrics.latency_for(operations::LOAD_MODEL).unwrap().total_recorded, 1);
}

#[tokio::test]
async fn snapshot_reports_session_counters() {
    let c = controller(ScriptedModel::new().failing_load("no file"));
    c.dispatch(UiEvent::LoadModel).await;

    let snapshot = c.metrics_snapshot().unwrap();
    assert_eq!(snapshot["session"]["load_failures"], 1);
    assert_eq!(snapshot["latency"]["load_model"]["count"], 1);
}
