use crate::model::ModelType;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    pub file: F,
    pub name: String,
}

/// What an uploader hands to its parent on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub file: F,
    pub name: String,
    pub model_type: ModelType,
}

/// Selection held by one uploader. The model type never changes after
/// construction; the file is whatever was picked last.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSelection<F> {
    model_type: ModelType,
    selected: Option<Selection<F>>,
}

impl<F: Clone> UploadSelection<F> {
    pub fn new(model_type: ModelType) -> Self {
        Self { model_type, selected: None }
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn select(&mut self, file: F, name: impl Into<String>) {
        self.selected = Some(Selection { file, name: name.into() });
    }

    pub fn selected(&self) -> Option<&Selection<F>> {
        self.selected.as_ref()
    }

    pub fn label(&self) -> String {
        match &self.selected {
            Some(selection) => format!("Selected: {}", selection.name),
            None => "Click to Upload".to_string(),
        }
    }

    /// `None` when nothing is selected. The selection is left in place.
    pub fn submit(&self) -> Option<Submission<F>> {
        self.selected.as_ref().map(|selection| Submission {
            file: selection.file.clone(),
            name: selection.name.clone(),
            model_type: self.model_type,
        })
    }
}
