use crop_yield::application::ml::load_model;
use crop_yield::application::ml::smartcore_predictor::{ModelArtifact, Regressor};
use crop_yield::application::prediction_service::PredictionService;
use crop_yield::domain::errors::{ModelUnavailableError, PredictionError, YieldError};
use crop_yield::domain::ml::feature_registry::{FeatureEncoder, NumericScaling};
use crop_yield::domain::request::PredictionRequest;
use crop_yield::domain::result::PredictionResult;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn create_test_dir() -> PathBuf {
    let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_dir = std::env::temp_dir().join(format!(
        "crop_yield_test_{}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
        unique_id
    ));
    fs::create_dir_all(&temp_dir).expect("Failed to create test temp dir");
    temp_dir
}

fn cleanup_test_dir(temp_dir: PathBuf) {
    fs::remove_dir_all(temp_dir).ok();
}

fn encoder() -> FeatureEncoder {
    FeatureEncoder {
        crops: vec!["Rice".into(), "Wheat".into()],
        seasons: vec!["Kharif".into(), "Rabi".into()],
        states: vec!["Karnataka".into(), "Punjab".into()],
        scaling: Some(NumericScaling {
            mean: [2010.0, 1000.0, 50.0, 10.0],
            scale: [5.0, 200.0, 10.0, 2.0],
        }),
    }
}

fn request(crop: &str, year: i32, rainfall: f64) -> PredictionRequest {
    PredictionRequest {
        crop: crop.to_string(),
        crop_year: year,
        season: if crop == "Rice" { "Kharif" } else { "Rabi" }.to_string(),
        state: if crop == "Rice" { "Karnataka" } else { "Punjab" }.to_string(),
        annual_rainfall: rainfall,
        fertilizer: 50.0,
        pesticide: 10.0,
    }
}

/// Rice rows yield ~2, wheat rows ~5.
fn training_set(enc: &FeatureEncoder) -> (DenseMatrix<f64>, Vec<f64>) {
    let mut rows = Vec::new();
    let mut targets = Vec::new();
    for year in 2005..2015 {
        rows.push(enc.encode(&request("Rice", year, 1200.0)).unwrap());
        targets.push(2.0);
        rows.push(enc.encode(&request("Wheat", year, 600.0)).unwrap());
        targets.push(5.0);
    }
    (DenseMatrix::from_2d_vec(&rows).unwrap(), targets)
}

fn write_artifact(dir: &PathBuf, file_name: &str, artifact: &ModelArtifact) -> PathBuf {
    let path = dir.join(file_name);
    let file = fs::File::create(&path).unwrap();
    serde_json::to_writer(file, artifact).unwrap();
    path
}

#[test]
fn test_knn_artifact_roundtrip() {
    let temp_dir = create_test_dir();
    let enc = encoder();
    let (x, y) = training_set(&enc);
    let knn = KNNRegressor::fit(&x, &y, KNNRegressorParameters::default().with_k(3)).unwrap();

    let path = write_artifact(
        &temp_dir,
        "knn_crop_yield_model.json",
        &ModelArtifact {
            name: "KNN crop yield".to_string(),
            version: "v1".to_string(),
            n_features: enc.feature_len(),
            encoder: enc,
            regressor: Regressor::Knn(knn),
        },
    );

    let model = load_model(&path).expect("artifact should load");
    assert_eq!(model.name(), "KNN crop yield");
    assert_eq!(model.version(), "v1");

    let service = PredictionService::new(model);
    let rice = service.predict_point(&request("Rice", 2020, 1200.0)).unwrap();
    let wheat = service.predict_point(&request("Wheat", 2008, 600.0)).unwrap();
    assert!((rice - 2.0).abs() < 1e-9, "rice predicted {}", rice);
    assert!((wheat - 5.0).abs() < 1e-9, "wheat predicted {}", wheat);

    let trend = service.predict_trend(&request("Rice", 2020, 1200.0)).unwrap();
    assert_eq!(trend.points().len(), 10);
    assert!(trend.points().iter().all(|p| p.predicted_yield.is_finite()));

    cleanup_test_dir(temp_dir);
}

#[test]
fn test_random_forest_artifact_roundtrip() {
    let temp_dir = create_test_dir();
    let enc = encoder();
    let (x, _) = training_set(&enc);
    let y = vec![3.0; 20];
    let params = RandomForestRegressorParameters::default().with_n_trees(5);
    let forest = RandomForestRegressor::fit(&x, &y, params).unwrap();

    let path = write_artifact(
        &temp_dir,
        "forest.json",
        &ModelArtifact {
            name: "Forest".to_string(),
            version: "v2".to_string(),
            n_features: enc.feature_len(),
            encoder: enc,
            regressor: Regressor::RandomForest(forest),
        },
    );

    let service = PredictionService::new(load_model(&path).unwrap());
    let result = service
        .predict(
            &request("Wheat", 2012, 650.0),
            crop_yield::domain::result::PredictionMode::Point,
        )
        .unwrap();
    assert_eq!(result, PredictionResult::Point(3.0));

    cleanup_test_dir(temp_dir);
}

#[test]
fn test_unseen_category_is_prediction_error() {
    let temp_dir = create_test_dir();
    let enc = encoder();
    let (x, y) = training_set(&enc);
    let knn = KNNRegressor::fit(&x, &y, KNNRegressorParameters::default().with_k(1)).unwrap();
    let path = write_artifact(
        &temp_dir,
        "knn.json",
        &ModelArtifact {
            name: "knn".to_string(),
            version: "v1".to_string(),
            n_features: enc.feature_len(),
            encoder: enc,
            regressor: Regressor::Knn(knn),
        },
    );
    let service = PredictionService::new(load_model(&path).unwrap());

    let mut req = request("Rice", 2020, 1200.0);
    req.state = "Delhi".to_string();
    match service.predict_point(&req) {
        Err(YieldError::Prediction(PredictionError::UnknownCategory { value, .. })) => {
            assert_eq!(value, "Delhi")
        }
        other => panic!("expected unknown category, got {:?}", other),
    }

    cleanup_test_dir(temp_dir);
}

#[test]
fn test_encoder_width_mismatch_is_rejected_at_load() {
    let temp_dir = create_test_dir();
    let enc = encoder();
    let (x, y) = training_set(&enc);
    let knn = KNNRegressor::fit(&x, &y, KNNRegressorParameters::default().with_k(1)).unwrap();

    // Encoder knows an extra state the regressor never saw as a column
    let mut wider = enc.clone();
    wider.states.push("Delhi".to_string());
    let path = write_artifact(
        &temp_dir,
        "mismatched.json",
        &ModelArtifact {
            name: "knn".to_string(),
            version: "v1".to_string(),
            n_features: enc.feature_len(),
            encoder: wider,
            regressor: Regressor::Knn(knn),
        },
    );

    let err = load_model(&path).err().expect("mismatched artifact must not load");
    assert!(matches!(err, ModelUnavailableError::Decode { .. }));
    assert!(err.to_string().contains("fitted on 10 features"));

    cleanup_test_dir(temp_dir);
}

#[test]
fn test_missing_artifact_fails_fast() {
    let temp_dir = create_test_dir();
    let path = temp_dir.join("knn_crop_yield_model.json");

    match load_model(&path) {
        Err(ModelUnavailableError::NotFound { path: missing }) => assert_eq!(missing, path),
        Err(other) => panic!("expected not found, got {}", other),
        Ok(_) => panic!("missing model must not load"),
    }

    cleanup_test_dir(temp_dir);
}

#[test]
fn test_corrupt_artifact_is_decode_error() {
    let temp_dir = create_test_dir();
    let path = temp_dir.join("broken.json");
    fs::write(&path, b"\x80\x04\x95 not json").unwrap();

    let err = load_model(&path).err().expect("corrupt model must not load");
    assert!(matches!(err, ModelUnavailableError::Decode { .. }));
    assert!(err.to_string().contains("broken.json"));

    cleanup_test_dir(temp_dir);
}
