use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of a prediction row, in the order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Crop")]
    Crop,
    #[serde(rename = "Crop_Year")]
    CropYear,
    #[serde(rename = "Season")]
    Season,
    #[serde(rename = "State")]
    State,
    #[serde(rename = "Annual_Rainfall")]
    AnnualRainfall,
    #[serde(rename = "Fertilizer")]
    Fertilizer,
    #[serde(rename = "Pesticide")]
    Pesticide,
}

impl Column {
    /// Column order expected by the inference call.
    /// Any change here is a breaking change for trained models.
    pub const ALL: [Column; 7] = [
        Column::Crop,
        Column::CropYear,
        Column::Season,
        Column::State,
        Column::AnnualRainfall,
        Column::Fertilizer,
        Column::Pesticide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::Crop => "Crop",
            Column::CropYear => "Crop_Year",
            Column::Season => "Season",
            Column::State => "State",
            Column::AnnualRainfall => "Annual_Rainfall",
            Column::Fertilizer => "Fertilizer",
            Column::Pesticide => "Pesticide",
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Column::Crop | Column::Season | Column::State)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell of a prediction row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Category(&'a str),
    Integer(i32),
    Float(f64),
}

impl FeatureValue<'_> {
    /// Numeric view of the cell. Categories have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Category(_) => None,
            FeatureValue::Integer(v) => Some(f64::from(*v)),
            FeatureValue::Float(v) => Some(*v),
        }
    }
}

/// A fully typed seven-column record handed to the model.
///
/// Built by the input collector; there is no way to construct a partial one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Crop_Year")]
    pub crop_year: i32,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Annual_Rainfall")]
    pub annual_rainfall: f64,
    #[serde(rename = "Fertilizer")]
    pub fertilizer: f64,
    #[serde(rename = "Pesticide")]
    pub pesticide: f64,
}

impl PredictionRequest {
    /// The labeled row in model column order.
    pub fn row(&self) -> [(Column, FeatureValue<'_>); 7] {
        [
            (Column::Crop, FeatureValue::Category(&self.crop)),
            (Column::CropYear, FeatureValue::Integer(self.crop_year)),
            (Column::Season, FeatureValue::Category(&self.season)),
            (Column::State, FeatureValue::Category(&self.state)),
            (Column::AnnualRainfall, FeatureValue::Float(self.annual_rainfall)),
            (Column::Fertilizer, FeatureValue::Float(self.fertilizer)),
            (Column::Pesticide, FeatureValue::Float(self.pesticide)),
        ]
    }

    /// Same record with only `Crop_Year` replaced.
    pub fn with_year(&self, year: i32) -> Self {
        Self {
            crop_year: year,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> PredictionRequest {
        PredictionRequest {
            crop: "Rice".to_string(),
            crop_year: 2020,
            season: "Kharif".to_string(),
            state: "Karnataka".to_string(),
            annual_rainfall: 1200.0,
            fertilizer: 50.0,
            pesticide: 10.0,
        }
    }

    #[test]
    fn test_row_follows_column_order() {
        let request = rice();
        let columns: Vec<Column> = request.row().iter().map(|(c, _)| *c).collect();
        assert_eq!(columns, Column::ALL.to_vec());
    }

    #[test]
    fn test_row_values() {
        let request = rice();
        let row = request.row();
        assert_eq!(row[0].1, FeatureValue::Category("Rice"));
        assert_eq!(row[1].1.as_f64(), Some(2020.0));
        assert_eq!(row[3].1, FeatureValue::Category("Karnataka"));
        assert_eq!(row[6].1.as_f64(), Some(10.0));
    }

    #[test]
    fn test_with_year_keeps_other_fields() {
        let request = rice();
        let shifted = request.with_year(2025);
        assert_eq!(shifted.crop_year, 2025);
        assert_eq!(shifted.with_year(2020), request);
    }

    #[test]
    fn test_column_names_match_training_headers() {
        let names: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Crop",
                "Crop_Year",
                "Season",
                "State",
                "Annual_Rainfall",
                "Fertilizer",
                "Pesticide"
            ]
        );
        assert_eq!(
            Column::ALL.iter().filter(|c| c.is_categorical()).count(),
            3
        );
    }
}
