use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected, Visitor},
};
use std::fmt;

/// One loan application as submitted to `POST /predict`.
///
/// Only the JSON types are checked. Categorical values are forwarded as-is and
/// it is up to the model to accept or reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskInput {
    #[serde(deserialize_with = "whole_number")]
    pub person_age: i64,
    pub person_income: f64,
    pub person_emp_length: f64,
    pub loan_amnt: f64,
    pub loan_int_rate: f64,
    pub loan_percent_income: f64,
    #[serde(deserialize_with = "whole_number")]
    pub cb_person_cred_hist_length: i64,
    pub person_home_ownership: String,
    pub loan_intent: String,
    pub loan_grade: String,
    pub cb_person_default_on_file: String,
}

/// Accepts a JSON integer, or a float without a fractional part (`30.0`).
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct WholeNumberVisitor;

    impl Visitor<'_> for WholeNumberVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_i64(WholeNumberVisitor)
}
