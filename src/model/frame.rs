use super::CreditRiskInput;
use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

pub const CATEGORICAL_COLUMNS: [&str; 4] = [
    "person_home_ownership",
    "loan_intent",
    "loan_grade",
    "cb_person_default_on_file",
];

pub const NUMERIC_COLUMNS: [&str; 7] = [
    "person_age",
    "person_income",
    "person_emp_length",
    "loan_amnt",
    "loan_int_rate",
    "loan_percent_income",
    "cb_person_cred_hist_length",
];

/// Column order of every frame handed to a classifier.
pub const COLUMNS: [&str; 11] = [
    CATEGORICAL_COLUMNS[0],
    CATEGORICAL_COLUMNS[1],
    CATEGORICAL_COLUMNS[2],
    CATEGORICAL_COLUMNS[3],
    NUMERIC_COLUMNS[0],
    NUMERIC_COLUMNS[1],
    NUMERIC_COLUMNS[2],
    NUMERIC_COLUMNS[3],
    NUMERIC_COLUMNS[4],
    NUMERIC_COLUMNS[5],
    NUMERIC_COLUMNS[6],
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A single-row table of named cells, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFrame {
    cells: Vec<(String, CellValue)>,
}

impl FeatureFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.cells.push((column.into(), value));
        self
    }

    pub fn from_input(input: &CreditRiskInput) -> Self {
        Self::new()
            .with_cell(
                "person_home_ownership",
                CellValue::Text(input.person_home_ownership.clone()),
            )
            .with_cell("loan_intent", CellValue::Text(input.loan_intent.clone()))
            .with_cell("loan_grade", CellValue::Text(input.loan_grade.clone()))
            .with_cell(
                "cb_person_default_on_file",
                CellValue::Text(input.cb_person_default_on_file.clone()),
            )
            .with_cell("person_age", CellValue::Int(input.person_age))
            .with_cell("person_income", CellValue::Float(input.person_income))
            .with_cell("person_emp_length", CellValue::Float(input.person_emp_length))
            .with_cell("loan_amnt", CellValue::Float(input.loan_amnt))
            .with_cell("loan_int_rate", CellValue::Float(input.loan_int_rate))
            .with_cell(
                "loan_percent_income",
                CellValue::Float(input.loan_percent_income),
            )
            .with_cell(
                "cb_person_cred_hist_length",
                CellValue::Int(input.cb_person_cred_hist_length),
            )
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.cells.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Serializes column-wise, `{"column": [value]}`, keeping column order.
impl Serialize for FeatureFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct SingleRow<'a>(&'a CellValue);

        impl Serialize for SingleRow<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(self.0)?;
                seq.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, &SingleRow(value))?;
        }
        map.end()
    }
}
