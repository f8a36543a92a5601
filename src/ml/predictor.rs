//! Calorie predictor with a lazily trained, process-lifetime model.
//!
//! The forest is trained on first use and then reused for every prediction.
//! Concurrent first callers block on the same training run. A failed run is
//! not cached, so the next call retries. The last failure is kept so the UI
//! can tell a failed run from one still in progress.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use once_cell::sync::OnceCell;

use super::dataset::TrainingSet;
use super::forest::{ForestParams, RandomForest};
use super::types::{MlError, PredictionInput};
use crate::storage::config::ModelSettings;

/// Where training data comes from.
#[derive(Debug, Clone)]
pub enum ModelSource {
    /// Exercise and calories CSV files
    Csv {
        exercise: PathBuf,
        calories: PathBuf,
    },
    /// Already-loaded rows
    InMemory(TrainingSet),
}

/// Training state as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelState {
    /// No run has finished yet
    Training,
    /// Model trained and cached
    Ready,
    /// Most recent run failed
    Failed(String),
}

/// Predicts calories burned for a workout.
pub struct CaloriePredictor {
    source: ModelSource,
    params: ForestParams,
    model: OnceCell<RandomForest>,
    last_error: Mutex<Option<String>>,
}

impl CaloriePredictor {
    /// Predictor reading the datasets named in the settings.
    pub fn from_settings(settings: &ModelSettings) -> Self {
        Self {
            source: ModelSource::Csv {
                exercise: settings.exercise_csv.clone(),
                calories: settings.calories_csv.clone(),
            },
            params: ForestParams::from(settings),
            model: OnceCell::new(),
            last_error: Mutex::new(None),
        }
    }

    /// Predictor over an in-memory training set.
    pub fn from_training_set(set: TrainingSet, params: ForestParams) -> Self {
        Self {
            source: ModelSource::InMemory(set),
            params,
            model: OnceCell::new(),
            last_error: Mutex::new(None),
        }
    }

    /// Whether the model has been trained in this process.
    pub fn is_trained(&self) -> bool {
        self.model.get().is_some()
    }

    /// Current training state.
    pub fn state(&self) -> ModelState {
        if self.is_trained() {
            return ModelState::Ready;
        }
        match self.last_error_slot().clone() {
            Some(message) => ModelState::Failed(message),
            None => ModelState::Training,
        }
    }

    /// Train now if not yet trained.
    pub fn warm_up(&self) -> Result<(), MlError> {
        self.model().map(|_| ())
    }

    /// Predict calories for one workout.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64, MlError> {
        let model = self.model()?;
        Ok(model.predict(&input.features()))
    }

    fn model(&self) -> Result<&RandomForest, MlError> {
        let result = self.model.get_or_try_init(|| self.train());
        *self.last_error_slot() = result.as_ref().err().map(|e| e.to_string());
        result
    }

    fn last_error_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.last_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn train(&self) -> Result<RandomForest, MlError> {
        let started = Instant::now();

        let loaded;
        let set = match &self.source {
            ModelSource::Csv { exercise, calories } => {
                loaded = TrainingSet::load(exercise, calories)?;
                &loaded
            }
            ModelSource::InMemory(set) => set,
        };

        tracing::info!(
            "Training calorie model on {} rows ({} trees, seed {})",
            set.len(),
            self.params.n_estimators,
            self.params.seed
        );

        let forest = RandomForest::fit(set, &self.params)?;

        tracing::info!(
            "Calorie model trained in {:.2}s",
            started.elapsed().as_secs_f64()
        );
        Ok(forest)
    }
}

/// Train the model on a background thread so the first save does not stall.
pub fn spawn_warm_up(predictor: Arc<CaloriePredictor>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("model-warm-up".to_string())
        .spawn(move || {
            if let Err(e) = predictor.warm_up() {
                tracing::error!("Calorie model training failed: {}", e);
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::tree::TreeParams;

    fn training_set() -> TrainingSet {
        let mut set = TrainingSet::default();
        for duration in 1..=40 {
            set.features
                .push([30.0, 22.0, duration as f64, 120.0, 37.0, 1.0]);
            set.targets.push(duration as f64 * 6.0);
        }
        set
    }

    fn params() -> ForestParams {
        ForestParams {
            n_estimators: 10,
            seed: 42,
            tree: TreeParams::default(),
        }
    }

    fn input(duration: f64) -> PredictionInput {
        PredictionInput {
            age: 30.0,
            bmi: 22.0,
            duration_minutes: duration,
            heart_rate_bpm: 120.0,
            body_temp_c: 37.0,
            is_male: true,
        }
    }

    #[test]
    fn test_trains_lazily_once() {
        let predictor = CaloriePredictor::from_training_set(training_set(), params());
        assert!(!predictor.is_trained());

        let first = predictor.predict(&input(20.0)).unwrap();
        assert!(predictor.is_trained());

        let second = predictor.predict(&input(20.0)).unwrap();
        assert_eq!(first, second);
        assert!(first > 0.0);
    }

    #[test]
    fn test_missing_files_error_and_retry() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ModelSettings {
            exercise_csv: dir.path().join("exercise.csv"),
            calories_csv: dir.path().join("calories.csv"),
            n_estimators: 3,
            ..Default::default()
        };
        let predictor = CaloriePredictor::from_settings(&settings);

        assert!(matches!(
            predictor.predict(&input(10.0)),
            Err(MlError::DatasetMissing(_))
        ));
        assert!(!predictor.is_trained());

        std::fs::write(
            &settings.exercise_csv,
            "User_ID,Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n\
             1,male,30,180,80,10,100,37.0\n\
             2,female,40,165,60,40,150,39.0\n",
        )
        .unwrap();
        std::fs::write(&settings.calories_csv, "User_ID,Calories\n1,50\n2,250\n").unwrap();

        let prediction = predictor.predict(&input(10.0)).unwrap();
        assert!((50.0..=250.0).contains(&prediction));
        assert!(predictor.is_trained());
    }

    #[test]
    fn test_warm_up_thread() {
        let predictor = Arc::new(CaloriePredictor::from_training_set(training_set(), params()));
        let handle = spawn_warm_up(Arc::clone(&predictor)).unwrap();
        handle.join().unwrap();

        assert!(predictor.is_trained());
        assert_eq!(predictor.state(), ModelState::Ready);
    }

    #[test]
    fn test_failed_warm_up_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ModelSettings {
            exercise_csv: dir.path().join("exercise.csv"),
            calories_csv: dir.path().join("calories.csv"),
            n_estimators: 3,
            ..Default::default()
        };
        let predictor = Arc::new(CaloriePredictor::from_settings(&settings));
        assert_eq!(predictor.state(), ModelState::Training);

        spawn_warm_up(Arc::clone(&predictor)).unwrap().join().unwrap();

        assert!(!predictor.is_trained());
        match predictor.state() {
            ModelState::Failed(message) => assert!(message.contains("exercise.csv")),
            other => panic!("expected Failed, got {:?}", other),
        }

        // A later query still fails and keeps reporting the error
        assert!(predictor.predict(&input(10.0)).is_err());
        assert!(matches!(predictor.state(), ModelState::Failed(_)));
    }
}
