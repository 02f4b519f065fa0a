//! Predictor gateway: owns the predictor lifecycle and guards every call
//! into the external model.

use std::cell::{Cell, RefCell};

use stride_core::config::{GatingPolicy, ModelConfig};
use stride_core::errors::GatewayError;
use stride_core::models::{FeatureVector, Label, PredictorState};
use stride_core::traits::IActivityModel;
use tracing::{debug, info, warn};

/// Recorded as the last error when a load future is dropped or unwinds.
pub const LOAD_CANCELLED: &str = "model load did not complete";

/// Lifecycle owner and call guard for an [`IActivityModel`].
///
/// The gateway is the only writer of [`PredictorState`]. It lives on the
/// single event-dispatch thread, so state sits in a `Cell` and is never
/// borrowed across a suspension point.
pub struct PredictorGateway<M: IActivityModel> {
    model: M,
    state: Cell<PredictorState>,
    last_error: RefCell<Option<String>>,
    gating: GatingPolicy,
    label_count: u32,
}

impl<M: IActivityModel> PredictorGateway<M> {
    /// Create a gateway from model configuration.
    pub fn new(model: M, config: &ModelConfig) -> Self {
        Self::with_policy(model, config.gating, config.label_count)
    }

    /// Create a gateway with an explicit gating policy and label domain.
    pub fn with_policy(model: M, gating: GatingPolicy, label_count: u32) -> Self {
        Self {
            model,
            state: Cell::new(PredictorState::Uninitialized),
            last_error: RefCell::new(None),
            gating,
            label_count,
        }
    }

    pub fn state(&self) -> PredictorState {
        self.state.get()
    }

    /// Reason of the most recent failed load, cleared by a successful one.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    pub fn gating(&self) -> GatingPolicy {
        self.gating
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Initialize the external model.
    ///
    /// A no-op once `Ready`. Rejected with `ConcurrentInit` while another
    /// load is in flight. A `Failed` gateway may be loaded again, including
    /// one whose previous load was dropped or panicked before completing.
    pub async fn load_model(&self) -> Result<(), GatewayError> {
        match self.state.get() {
            PredictorState::Ready => {
                debug!(model = self.model.name(), "model already loaded");
                return Ok(());
            }
            PredictorState::Loading => return Err(GatewayError::ConcurrentInit),
            PredictorState::Uninitialized | PredictorState::Failed => {}
        }

        self.state.set(PredictorState::Loading);
        let pending = PendingLoad {
            state: &self.state,
            last_error: &self.last_error,
            armed: true,
        };
        let result = self.model.load_model().await;
        pending.disarm();

        match result {
            Ok(()) => {
                self.state.set(PredictorState::Ready);
                self.last_error.replace(None);
                info!(model = self.model.name(), "predictor ready");
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                self.state.set(PredictorState::Failed);
                self.last_error.replace(Some(reason.clone()));
                warn!(model = self.model.name(), error = %reason, "predictor failed to load");
                Err(GatewayError::Init { reason })
            }
        }
    }

    /// Classify `features`.
    ///
    /// The length check runs before anything else, so malformed input never
    /// reaches the external model.
    pub async fn predict(&self, features: &[f32]) -> Result<Label, GatewayError> {
        let vector = FeatureVector::try_from(features)?;

        let state = self.state.get();
        if self.gating == GatingPolicy::Strict && !state.is_ready() {
            return Err(GatewayError::NotReady { state });
        }

        let raw = self
            .model
            .predict_activity(vector.as_slice())
            .await
            .map_err(|e| GatewayError::Predictor {
                reason: e.to_string(),
            })?;

        self.to_label(raw)
    }

    fn to_label(&self, raw: i64) -> Result<Label, GatewayError> {
        u32::try_from(raw)
            .ok()
            .filter(|value| *value < self.label_count)
            .map(Label::new)
            .ok_or_else(|| GatewayError::Predictor {
                reason: format!("label {raw} outside expected domain 0..{}", self.label_count),
            })
    }
}

/// Moves `Loading` to `Failed` if a load future is dropped, or unwinds,
/// before the model answers.
struct PendingLoad<'a> {
    state: &'a Cell<PredictorState>,
    last_error: &'a RefCell<Option<String>>,
    armed: bool,
}

impl PendingLoad<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.set(PredictorState::Failed);
            self.last_error.replace(Some(LOAD_CANCELLED.to_string()));
            warn!("model load did not complete; predictor marked failed");
        }
    }
}
