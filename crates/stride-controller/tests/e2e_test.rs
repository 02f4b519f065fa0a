//! Golden scenarios driven through the full controller stack.

use stride_controller::{Controller, ControllerPhase, Dispatch, UiEvent};
use stride_core::config::{GatingPolicy, PresentationConfig, ViewFormat};
use stride_core::traits::Region;
use stride_features::FeatureSynthesizer;
use stride_predictor::PredictorGateway;
use stride_presenter::{BufferSurface, Presenter};
use test_fixtures::{load_fixture, LoadFailureScenario, PredictionScenario, ScriptedModel, ScriptedSource};

fn presenter(format: ViewFormat) -> Presenter<BufferSurface> {
    let config = PresentationConfig {
        format,
        ..Default::default()
    };
    Presenter::new(BufferSurface::new(), &config)
}

#[tokio::test]
async fn golden_prediction_renders_expected_cells() {
    let scenario: PredictionScenario = load_fixture("golden/end_to_end_prediction.json");
    // Any other input would be classified as 0.
    let model = ScriptedModel::new()
        .returning(0)
        .with_rule(scenario.features, scenario.label);
    let c = Controller::new(
        PredictorGateway::with_policy(model, GatingPolicy::Strict, 5),
        FeatureSynthesizer::new(ScriptedSource::new(scenario.features.to_vec())),
        presenter(ViewFormat::Text),
    );

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Completed);
    assert_eq!(c.dispatch(UiEvent::RunPrediction).await, Dispatch::Completed);

    let view = c.presenter();
    let rendered = view.surface().region(Region::Output).unwrap();
    for cell in &scenario.expected_cells {
        assert!(rendered.contains(cell.as_str()), "{}: missing {cell} in\n{rendered}", scenario.description);
    }
    assert!(rendered.contains("predicted class (label): 3 (climb-up)"));
}

#[tokio::test]
async fn golden_prediction_in_html() {
    let scenario: PredictionScenario = load_fixture("golden/end_to_end_prediction.json");
    let model = ScriptedModel::new().with_rule(scenario.features, scenario.label);
    let c = Controller::new(
        PredictorGateway::with_policy(model, GatingPolicy::Strict, 5),
        FeatureSynthesizer::new(ScriptedSource::new(scenario.features.to_vec())),
        presenter(ViewFormat::Html),
    );

    c.dispatch(UiEvent::LoadModel).await;
    c.dispatch(UiEvent::RunPrediction).await;

    let view = c.presenter();
    let rendered = view.surface().region(Region::Output).unwrap();
    for cell in &scenario.expected_cells {
        assert!(rendered.contains(&format!("<td>{cell}</td>")), "missing {cell} in\n{rendered}");
    }
    assert!(rendered.contains("<strong>3 (climb-up)</strong>"), "{rendered}");
}

#[tokio::test]
async fn golden_boot_failure_surfaces_message() {
    let scenario: LoadFailureScenario = load_fixture("golden/boot_failure.json");
    let c = Controller::new(
        PredictorGateway::with_policy(
            ScriptedModel::new().failing_load(&scenario.load_error),
            GatingPolicy::Strict,
            5,
        ),
        FeatureSynthesizer::new(ScriptedSource::new(vec![0.0])),
        presenter(ViewFormat::Text),
    );

    assert_eq!(c.dispatch(UiEvent::LoadModel).await, Dispatch::Failed);
    assert_eq!(c.phase(), ControllerPhase::Idle);

    let surface = c.into_presenter().into_surface();
    let rendered = surface.region(Region::Output).unwrap();
    assert!(rendered.contains(&scenario.load_error), "{}: {rendered}", scenario.description);
    assert_eq!(surface.writes_to(Region::Output), 1);
}
