//! Maps an analysis result to the text and flags the results panel shows.
//!
//! Nothing in here touches the DOM, so every rendering rule is checked by
//! plain unit tests. The frontend only turns these values into markup.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::model::{AnalysisResult, ClassLabel, Detection, Outcome};

pub const NO_RESULTS_MESSAGE: &str = "No results to display yet.";
pub const NO_DETECTIONS_MESSAGE: &str = "No YOLO detections found.";
pub const RESULTS_HEADING: &str = "Results";
pub const FIRE_THRESHOLD: f64 = 0.5;

// 16 base64 chars decode to 12 bytes, enough for every signature below.
const SNIFF_PREFIX: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Placeholder(&'static str),
    Summary(ResultSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub heading: &'static str,
    pub result_id: Option<String>,
    pub recorded: Option<String>,
    pub image_url: Option<String>,
    pub processing_time: String,
    pub classification: Option<ClassificationLine>,
    pub detections: Option<DetectionsView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationLine {
    pub is_fire: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectionsView {
    NoneFound(&'static str),
    Rows {
        heading: String,
        rows: Vec<DetectionRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRow {
    pub confidence: String,
    pub class_name: String,
    pub bounding_box: String,
}

pub fn summarize(result: Option<&AnalysisResult>) -> ResultsView {
    let Some(result) = result else {
        return ResultsView::Placeholder(NO_RESULTS_MESSAGE);
    };

    let (classification, detections) = match &result.outcome {
        Outcome::Classification { probability } => ((*probability).map(classification_line), None),
        Outcome::Detection { detections, class_names } => {
            (None, Some(detections_view(detections, class_names.as_deref())))
        }
    };

    ResultsView::Summary(ResultSummary {
        heading: RESULTS_HEADING,
        result_id: result.id.map(|id| format!("Result #{}", id)),
        recorded: result.timestamp.as_ref().map(|ts| format!("Recorded {}", ts)),
        image_url: result.annotated_image.as_deref().and_then(image_data_url),
        processing_time: format!("Processing Time: {:.2} seconds", result.processing_time),
        classification,
        detections,
    })
}

pub fn fire_label(probability: f64) -> &'static str {
    if probability >= FIRE_THRESHOLD { "Fire" } else { "No Fire" }
}

fn classification_line(probability: f64) -> ClassificationLine {
    ClassificationLine {
        is_fire: probability >= FIRE_THRESHOLD,
        text: format!("Fire Classification: {} ({:.2})", fire_label(probability), probability),
    }
}

fn detections_view(detections: &[Detection], class_names: Option<&[String]>) -> DetectionsView {
    if detections.is_empty() {
        return DetectionsView::NoneFound(NO_DETECTIONS_MESSAGE);
    }

    let rows = detections
        .iter()
        .map(|detection| DetectionRow {
            confidence: format!("Confidence: {:.2}", detection.confidence),
            class_name: format!("Class: {}", class_name(&detection.class, class_names)),
            bounding_box: format!("Bounding Box: {}", format_bbox(&detection.bbox)),
        })
        .collect();

    DetectionsView::Rows {
        heading: format!("YOLO Detections ({})", detections.len()),
        rows,
    }
}

pub fn class_name(class: &ClassLabel, class_names: Option<&[String]>) -> String {
    class
        .index()
        .and_then(|index| class_names.and_then(|names| names.get(index)))
        .cloned()
        .unwrap_or_else(|| format!("Class {}", class))
}

/// Prints the box the way `JSON.stringify` would: `[12.5,30,100,1e+21]`.
pub fn format_bbox(bbox: &[f64; 4]) -> String {
    let parts: Vec<String> = bbox.iter().map(|v| json_number(*v)).collect();
    format!("[{}]", parts.join(","))
}

// Exponent form below 1e-6 and from 1e21 up, `-0` prints as `0`, non-finite
// values become `null`.
fn json_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}

/// Wraps a base64 payload in a data URL. The mime type comes from the decoded
/// signature; undecodable payloads yield `None`.
pub fn image_data_url(encoded: &str) -> Option<String> {
    let encoded = encoded.trim();
    if encoded.starts_with("data:") {
        return Some(encoded.to_string());
    }

    let prefix = encoded.get(..SNIFF_PREFIX).unwrap_or(encoded);
    let head = match STANDARD.decode(prefix) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Skipping annotated image, invalid base64: {}", e);
            return None;
        }
    };

    Some(format!("data:{};base64,{}", sniff_mime(&head), encoded))
}

fn sniff_mime(head: &[u8]) -> &'static str {
    match head {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelType, PredictionResponse};
    use serde_json::json;

    fn summary_for(value: serde_json::Value, model_type: ModelType) -> ResultSummary {
        let response: PredictionResponse = serde_json::from_value(value).unwrap();
        match summarize(Some(&response.into_result(model_type))) {
            ResultsView::Summary(summary) => summary,
            other => panic!("expected a summary, got {:?}", other),
        }
    }

    #[test]
    fn absent_result_shows_placeholder() {
        assert_eq!(summarize(None), ResultsView::Placeholder(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn classification_scenario() {
        let summary = summary_for(
            json!({ "processing_time": 1.23, "cnn_probability": 0.81 }),
            ModelType::Classification,
        );

        assert_eq!(summary.heading, "Results");
        assert_eq!(summary.processing_time, "Processing Time: 1.23 seconds");
        let line = summary.classification.unwrap();
        assert!(line.is_fire);
        assert!(line.text.ends_with("Fire (0.81)"));
        assert_eq!(summary.detections, None);
        assert_eq!(summary.image_url, None);
    }

    #[test]
    fn sentinel_probability_hides_classification_line() {
        let summary = summary_for(
            json!({ "processing_time": 0.4, "cnn_probability": -1.0 }),
            ModelType::Classification,
        );
        assert_eq!(summary.classification, None);
    }

    #[test]
    fn fire_threshold_is_inclusive() {
        assert_eq!(fire_label(0.5), "Fire");
        assert_eq!(fire_label(0.4999), "No Fire");
        assert_eq!(fire_label(1.0), "Fire");
        assert_eq!(fire_label(0.0), "No Fire");

        for step in 0..=100 {
            let p = step as f64 / 100.0;
            assert_eq!(fire_label(p) == "Fire", p >= 0.5, "p = {}", p);
        }

        let low = classification_line(0.12);
        assert!(!low.is_fire);
        assert_eq!(low.text, "Fire Classification: No Fire (0.12)");
    }

    #[test]
    fn empty_detection_list_shows_message() {
        let summary = summary_for(
            json!({ "processing_time": 0.5, "yolo_detections": [] }),
            ModelType::Detection,
        );
        assert_eq!(summary.detections, Some(DetectionsView::NoneFound(NO_DETECTIONS_MESSAGE)));
        assert_eq!(summary.processing_time, "Processing Time: 0.50 seconds");
    }

    #[test]
    fn detection_rows_resolve_class_names() {
        let summary = summary_for(
            json!({
                "id": 42,
                "processing_time": 2.0,
                "timestamp": "2024-05-02T08:30:00",
                "yolo_detections": [
                    { "confidence": 0.876, "class": 0, "bbox": [12.5, 30.0, 100.0, 200.0] },
                    { "confidence": 0.3, "class": 4, "bbox": [1.0, 2.0, 3.0, 4.0] }
                ],
                "class_names": ["fire", "smoke"]
            }),
            ModelType::Detection,
        );

        assert_eq!(summary.result_id.as_deref(), Some("Result #42"));
        assert_eq!(summary.recorded.as_deref(), Some("Recorded 2024-05-02T08:30:00"));
        match summary.detections.unwrap() {
            DetectionsView::Rows { heading, rows } => {
                assert_eq!(heading, "YOLO Detections (2)");
                assert_eq!(rows[0].confidence, "Confidence: 0.88");
                assert_eq!(rows[0].class_name, "Class: fire");
                assert_eq!(rows[0].bounding_box, "Bounding Box: [12.5,30,100,200]");
                assert_eq!(rows[1].class_name, "Class: Class 4");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn class_name_falls_back_to_id() {
        let names = vec!["fire".to_string()];
        assert_eq!(class_name(&ClassLabel::Id(0), Some(names.as_slice())), "fire");
        assert_eq!(class_name(&ClassLabel::Id(1), Some(names.as_slice())), "Class 1");
        assert_eq!(class_name(&ClassLabel::Id(3), None), "Class 3");
        assert_eq!(class_name(&ClassLabel::Id(0), Some(&names[..0])), "Class 0");
        assert_eq!(class_name(&ClassLabel::Id(-1), Some(names.as_slice())), "Class -1");
        assert_eq!(class_name(&ClassLabel::Name("smoke".into()), Some(names.as_slice())), "Class smoke");
    }

    #[test]
    fn string_and_negative_classes_render_rows() {
        let summary = summary_for(
            json!({
                "processing_time": 0.9,
                "yolo_detections": [
                    { "confidence": 0.8, "class": "smoke", "bbox": [1.5, 2.0, 3.0, 4.0] },
                    { "confidence": 0.4, "class": -1, "bbox": [0.0, 0.0, 8.0, 8.0] }
                ],
                "class_names": ["fire", "smoke"]
            }),
            ModelType::Detection,
        );

        match summary.detections.unwrap() {
            DetectionsView::Rows { rows, .. } => {
                assert_eq!(rows[0].class_name, "Class: Class smoke");
                assert_eq!(rows[0].bounding_box, "Bounding Box: [1.5,2,3,4]");
                assert_eq!(rows[1].class_name, "Class: Class -1");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn bbox_numbers_match_json_literals() {
        assert_eq!(format_bbox(&[1e-7, 1e21, 0.1, -0.0]), "[1e-7,1e+21,0.1,0]");
        assert_eq!(format_bbox(&[0.000001, 123456.75, -2.5, 1.5e-9]), "[0.000001,123456.75,-2.5,1.5e-9]");
        assert_eq!(format_bbox(&[2.5e22, -3e21, f64::NAN, 640.0]), "[2.5e+22,-3e+21,null,640]");
    }

    #[test]
    fn image_mime_is_sniffed() {
        let png = STANDARD.encode([0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13, 1, 2]);
        let jpeg = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0, 16, b'J', b'F', b'I', b'F', 0, 1]);

        assert!(image_data_url(&png).unwrap().starts_with("data:image/png;base64,"));
        assert_eq!(image_data_url(&jpeg).unwrap(), format!("data:image/jpeg;base64,{}", jpeg));
        assert_eq!(image_data_url("!!not base64!!"), None);
        assert_eq!(
            image_data_url("data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }
}
