pub mod feature_vector;
pub mod label;
pub mod prediction_result;
pub mod predictor_state;
pub mod timing_sample;

pub use feature_vector::FeatureVector;
pub use label::Label;
pub use prediction_result::PredictionResult;
pub use predictor_state::PredictorState;
pub use timing_sample::TimingSample;
