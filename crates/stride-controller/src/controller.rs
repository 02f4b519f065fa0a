//! The harness state machine.
//!
//! All work happens on the single event-dispatch thread. Mutable parts sit in
//! `Cell`/`RefCell` and no borrow is held across an `.await`, so an event
//! that arrives while another is suspended sees the busy phase and is
//! rejected.
//!
//! A panic inside the external model is caught and rendered like any other
//! failure. A dispatch future dropped mid-action puts the phase back to
//! `Idle`.

use std::cell::{Cell, Ref, RefCell};
use std::future::Future;

use stride_core::constants::operations;
use stride_core::errors::{GatewayError, StrideResult};
use stride_core::models::{PredictionResult, PredictorState, TimingSample};
use stride_core::traits::{IActivityModel, IRandomSource, IRenderSurface};
use stride_features::FeatureSynthesizer;
use stride_observability::tracing_setup::events;
use stride_observability::{load_span, measure_result_async, predict_span, HarnessMetrics, Timed};
use stride_predictor::PredictorGateway;
use stride_presenter::Presenter;
use tracing::{debug, warn, Instrument};

use crate::events::{ControllerPhase, Dispatch, UiEvent};
use crate::unwind::CatchPanic;

/// Wires UI triggers to the synthesizer, the gateway, timing, and the
/// presenter.
pub struct Controller<M: IActivityModel, R: IRandomSource, S: IRenderSurface> {
    gateway: PredictorGateway<M>,
    synthesizer: RefCell<FeatureSynthesizer<R>>,
    presenter: RefCell<Presenter<S>>,
    phase: Cell<ControllerPhase>,
    metrics: RefCell<HarnessMetrics>,
    last_prediction: RefCell<Option<PredictionResult>>,
}

impl<M, R, S> Controller<M, R, S>
where
    M: IActivityModel,
    R: IRandomSource,
    S: IRenderSurface,
{
    pub fn new(
        gateway: PredictorGateway<M>,
        synthesizer: FeatureSynthesizer<R>,
        presenter: Presenter<S>,
    ) -> Self {
        Self {
            gateway,
            synthesizer: RefCell::new(synthesizer),
            presenter: RefCell::new(presenter),
            phase: Cell::new(ControllerPhase::Idle),
            metrics: RefCell::new(HarnessMetrics::new()),
            last_prediction: RefCell::new(None),
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase.get()
    }

    pub fn predictor_state(&self) -> PredictorState {
        self.gateway.state()
    }

    pub fn gateway(&self) -> &PredictorGateway<M> {
        &self.gateway
    }

    pub fn presenter(&self) -> Ref<'_, Presenter<S>> {
        self.presenter.borrow()
    }

    pub fn metrics(&self) -> Ref<'_, HarnessMetrics> {
        self.metrics.borrow()
    }

    /// JSON snapshot of session counters and latency summaries.
    pub fn metrics_snapshot(&self) -> StrideResult<serde_json::Value> {
        self.metrics.borrow().snapshot()
    }

    /// The most recent successful prediction.
    pub fn last_prediction(&self) -> Option<PredictionResult> {
        self.last_prediction.borrow().clone()
    }

    /// Tear the controller down, returning the presenter.
    pub fn into_presenter(self) -> Presenter<S> {
        self.presenter.into_inner()
    }

    /// Handle one UI event.
    pub async fn dispatch(&self, event: UiEvent) -> Dispatch {
        match event {
            UiEvent::LoadModel => self.on_load_model().await,
            UiEvent::RunPrediction => self.on_run_prediction().await,
        }
    }

    /// The "load model" trigger: initialize the predictor and render how long
    /// it took, or render the failure.
    pub async fn on_load_model(&self) -> Dispatch {
        if let Some(rejected) = self.reject_if_busy(UiEvent::LoadModel) {
            return rejected;
        }
        let busy = self.enter(ControllerPhase::LoadingModel);

        let model = self.gateway.model_name().to_string();
        let load = contain_panics(self.gateway.load_model(), |message| GatewayError::Init {
            reason: format!("model panicked: {message}"),
        });
        let outcome = measure_result_async(load)
            .instrument(load_span!(model))
            .await;
        busy.settle();

        match outcome {
            Ok(((), duration_ms)) => {
                self.record(TimingSample::new(operations::LOAD_MODEL, duration_ms, true));
                events::model_loaded(&model, duration_ms);
                self.presenter.borrow_mut().render_load_timing(duration_ms);
                self.phase.set(ControllerPhase::Ready);
                Dispatch::Completed
            }
            Err(Timed { error, duration_ms }) => {
                let message = error.to_string();
                self.record(TimingSample::new(operations::LOAD_MODEL, duration_ms, false));
                events::model_load_failed(&model, &message, duration_ms);
                self.presenter.borrow_mut().render_error(&message);
                self.phase.set(ControllerPhase::Idle);
                Dispatch::Failed
            }
        }
    }

    /// The "run prediction" trigger: synthesize a vector, classify it, and
    /// render the features, label, and elapsed time.
    pub async fn on_run_prediction(&self) -> Dispatch {
        if let Some(rejected) = self.reject_if_busy(UiEvent::RunPrediction) {
            return rejected;
        }
        let busy = self.enter(ControllerPhase::Predicting);

        let features = self.synthesizer.borrow_mut().generate();
        debug!(features = ?features.values(), "synthesized feature vector");

        let span = predict_span!(self.gateway.model_name(), self.gateway.gating());
        let predict = contain_panics(self.gateway.predict(features.as_slice()), |message| {
            GatewayError::Predictor {
                reason: format!("model panicked: {message}"),
            }
        });
        let outcome = measure_result_async(predict).instrument(span).await;
        busy.settle();

        match outcome {
            Ok((label, duration_ms)) => {
                self.record(TimingSample::new(operations::PREDICT, duration_ms, true));
                self.metrics.borrow_mut().record_label(label);
                events::prediction_completed(label.value(), duration_ms);

                let result = PredictionResult {
                    features,
                    label,
                    duration_ms,
                };
                self.presenter
                    .borrow_mut()
                    .render_prediction(&result.features, result.label, result.duration_ms);
                self.last_prediction.replace(Some(result));
                self.phase.set(ControllerPhase::Ready);
                Dispatch::Completed
            }
            Err(Timed { error, duration_ms }) => {
                let message = error.to_string();
                self.record(TimingSample::new(operations::PREDICT, duration_ms, false));
                events::prediction_failed(error.kind(), &message, duration_ms);
                self.presenter.borrow_mut().render_error(&message);
                self.phase.set(ControllerPhase::Idle);
                Dispatch::Failed
            }
        }
    }

    /// Switch to a busy phase. Dropping the returned guard before
    /// `settle` puts the controller back to `Idle`.
    fn enter(&self, phase: ControllerPhase) -> BusyPhase<'_> {
        self.phase.set(phase);
        BusyPhase {
            phase: &self.phase,
            armed: true,
        }
    }

    fn reject_if_busy(&self, event: UiEvent) -> Option<Dispatch> {
        let phase = self.phase.get();
        if !phase.is_busy() {
            return None;
        }
        events::event_rejected(event.name(), phase.as_str());
        self.metrics.borrow_mut().record_rejection();
        Some(Dispatch::Rejected { phase })
    }

    fn record(&self, sample: TimingSample) {
        self.metrics.borrow_mut().record_timing(&sample);
    }
}

/// Run a gateway call, reporting a panic in the model as `on_panic(message)`.
async fn contain_panics<T, F>(
    operation: F,
    on_panic: impl FnOnce(String) -> GatewayError,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    match CatchPanic::new(operation).await {
        Ok(result) => result,
        Err(message) => {
            warn!(panic = %message, "external model panicked");
            Err(on_panic(message))
        }
    }
}

struct BusyPhase<'a> {
    phase: &'a Cell<ControllerPhase>,
    armed: bool,
}

impl BusyPhase<'_> {
    /// The action ran to completion; its outcome sets the next phase.
    fn settle(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyPhase<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!(phase = %self.phase.get(), "action dropped before completion");
            self.phase.set(ControllerPhase::Idle);
        }
    }
}
