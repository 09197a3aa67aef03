use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Value the backend reports in `cnn_probability` when no classification ran.
pub const NO_PROBABILITY: f64 = -1.0;

/// Which inference pipeline handles an upload. The string form is the
/// `model_type` value sent to the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr, EnumIter,
)]
pub enum ModelType {
    #[serde(rename = "cnn")]
    #[strum(serialize = "cnn")]
    Classification,
    #[serde(rename = "yolo")]
    #[strum(serialize = "yolo")]
    Detection,
}

impl ModelType {
    pub fn opposite(self) -> Self {
        match self {
            ModelType::Classification => ModelType::Detection,
            ModelType::Detection => ModelType::Classification,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModelType::Classification => "Fire classification",
            ModelType::Detection => "Smoke detection",
        }
    }
}

/// The `class` of a detection. Most backends send an index into
/// `class_names`, some send the name itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Id(i64),
    Name(String),
}

impl ClassLabel {
    /// Index into `class_names`, only for non-negative ids.
    pub fn index(&self) -> Option<usize> {
        match self {
            ClassLabel::Id(id) => usize::try_from(*id).ok(),
            ClassLabel::Name(_) => None,
        }
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassLabel::Id(id) => write!(f, "{}", id),
            ClassLabel::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub confidence: f64,
    pub class: ClassLabel,
    pub bbox: [f64; 4],
}

// Wire shape of a successful `/predict` reply. Both model types share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: Option<i64>,
    pub processing_time: f64,
    pub image_with_boxes: Option<String>,
    pub cnn_probability: Option<f64>,
    pub yolo_detections: Option<Vec<Detection>>,
    pub class_names: Option<Vec<String>>,
    pub timestamp: Option<String>,
}

impl PredictionResponse {
    /// Resolves the shared wire shape into the result of the pipeline that was
    /// actually asked for. Fields belonging to the other pipeline are dropped.
    pub fn into_result(self, model_type: ModelType) -> AnalysisResult {
        let outcome = match model_type {
            ModelType::Classification => Outcome::Classification {
                probability: self.cnn_probability.filter(|p| *p != NO_PROBABILITY),
            },
            ModelType::Detection => Outcome::Detection {
                detections: self.yolo_detections.unwrap_or_default(),
                class_names: self.class_names,
            },
        };

        AnalysisResult {
            id: self.id,
            processing_time: self.processing_time,
            annotated_image: self.image_with_boxes.filter(|img| !img.trim().is_empty()),
            timestamp: self.timestamp,
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Classification {
        probability: Option<f64>,
    },
    Detection {
        detections: Vec<Detection>,
        class_names: Option<Vec<String>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub id: Option<i64>,
    pub processing_time: f64,
    pub annotated_image: Option<String>,
    pub timestamp: Option<String>,
    pub outcome: Outcome,
}

impl AnalysisResult {
    pub fn model_type(&self) -> ModelType {
        match self.outcome {
            Outcome::Classification { .. } => ModelType::Classification,
            Outcome::Detection { .. } => ModelType::Detection,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Pulls the `error` string out of a failure body, if there is a usable one.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
