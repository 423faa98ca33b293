use crate::domain::errors::ValidationError;
use crate::domain::request::{Column, PredictionRequest};

/// Untyped form values as typed or selected by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInputs {
    pub crop: String,
    pub crop_year: String,
    pub season: String,
    pub state: String,
    pub annual_rainfall: String,
    pub fertilizer: String,
    pub pesticide: String,
}

impl RawInputs {
    /// Type-converts every field into a request. No range checks.
    pub fn collect(&self) -> Result<PredictionRequest, ValidationError> {
        Ok(PredictionRequest {
            crop: category(Column::Crop, &self.crop)?,
            crop_year: integer(Column::CropYear, &self.crop_year)?,
            season: category(Column::Season, &self.season)?,
            state: category(Column::State, &self.state)?,
            annual_rainfall: number(Column::AnnualRainfall, &self.annual_rainfall)?,
            fertilizer: number(Column::Fertilizer, &self.fertilizer)?,
            pesticide: number(Column::Pesticide, &self.pesticide)?,
        })
    }
}

fn category(column: Column, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingValue { column });
    }
    Ok(value.to_string())
}

fn integer(column: Column, raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidInteger {
            column,
            value: raw.to_string(),
        })
}

fn number(column: Column, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            column,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice_inputs() -> RawInputs {
        RawInputs {
            crop: "Rice".to_string(),
            crop_year: "2020".to_string(),
            season: "Kharif".to_string(),
            state: "Karnataka".to_string(),
            annual_rainfall: "1200".to_string(),
            fertilizer: "50.0".to_string(),
            pesticide: "10".to_string(),
        }
    }

    #[test]
    fn test_collect_valid_inputs() {
        let request = rice_inputs().collect().unwrap();
        assert_eq!(request.crop, "Rice");
        assert_eq!(request.crop_year, 2020);
        assert_eq!(request.season, "Kharif");
        assert_eq!(request.state, "Karnataka");
        assert_eq!(request.annual_rainfall, 1200.0);
        assert_eq!(request.fertilizer, 50.0);
        assert_eq!(request.pesticide, 10.0);
    }

    #[test]
    fn test_collect_trims_whitespace() {
        let mut inputs = rice_inputs();
        inputs.crop_year = " 2021 ".to_string();
        inputs.pesticide = "\t7.5\n".to_string();
        let request = inputs.collect().unwrap();
        assert_eq!(request.crop_year, 2021);
        assert_eq!(request.pesticide, 7.5);
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let mut inputs = rice_inputs();
        inputs.crop_year = "abc".to_string();
        assert_eq!(
            inputs.collect(),
            Err(ValidationError::InvalidInteger {
                column: Column::CropYear,
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_fractional_year_is_rejected() {
        let mut inputs = rice_inputs();
        inputs.crop_year = "2020.5".to_string();
        assert!(matches!(
            inputs.collect(),
            Err(ValidationError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_each_float_field_is_validated() {
        for column in [Column::AnnualRainfall, Column::Fertilizer, Column::Pesticide] {
            let mut inputs = rice_inputs();
            match column {
                Column::AnnualRainfall => inputs.annual_rainfall = "lots".to_string(),
                Column::Fertilizer => inputs.fertilizer = String::new(),
                _ => inputs.pesticide = "1,5".to_string(),
            }
            match inputs.collect() {
                Err(ValidationError::InvalidNumber { column: failed, .. }) => {
                    assert_eq!(failed, column)
                }
                other => panic!("expected invalid number for {}, got {:?}", column, other),
            }
        }
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut inputs = rice_inputs();
        inputs.season = "   ".to_string();
        assert_eq!(
            inputs.collect(),
            Err(ValidationError::MissingValue {
                column: Column::Season
            })
        );
    }

    #[test]
    fn test_no_range_checking() {
        let mut inputs = rice_inputs();
        inputs.crop_year = "-5".to_string();
        inputs.annual_rainfall = "-1e9".to_string();
        let request = inputs.collect().unwrap();
        assert_eq!(request.crop_year, -5);
        assert_eq!(request.annual_rainfall, -1e9);
    }
}
