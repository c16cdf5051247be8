use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One row of the state population estimates.
///
/// Field names follow the census column headers used by the API.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    /// Full state name, e.g. "California"
    #[serde(rename = "STNAME")]
    pub name: String,
    /// Postal abbreviation, e.g. "CA"
    #[serde(rename = "STUSAB")]
    pub abbreviation: String,
    /// FIPS state code, e.g. "06". Used to build the counties link.
    #[serde(rename = "STATE")]
    pub state_code: String,
    #[serde(rename = "TOT_POP", deserialize_with = "population")]
    pub total_population: f64,
    #[serde(rename = "TOT_MALE", deserialize_with = "population")]
    pub male_population: f64,
    #[serde(rename = "TOT_FEMALE", deserialize_with = "population")]
    pub female_population: f64,
}

/// Body of `GET /api/states/`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StatesResponse {
    pub records: Vec<StateRecord>,
}

impl StatesResponse {
    /// Decode a JSON body into the ordered list of records.
    pub fn from_json(body: &str) -> Result<StatesResponse> {
        let response: StatesResponse = serde_json::from_str(body)?;
        log::debug!("decoded {} state records", response.records.len());
        Ok(response)
    }
}

impl StateRecord {
    /// Largest total population in `records`, or 0 when there are none.
    pub fn max_total_population(records: &[StateRecord]) -> f64 {
        records
            .iter()
            .map(|r| r.total_population)
            .fold(0.0, f64::max)
    }
}

/// Population columns arrive either as JSON numbers or as numeric text.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn population<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("population {:?} is not a number", s)))?,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format!(
            "population {} must be a finite, non-negative number",
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchFailure;

    const CALIFORNIA: &str = r#"{"STNAME":"California","STUSAB":"CA","STATE":"06","TOT_POP":39144818,"TOT_MALE":19440558,"TOT_FEMALE":19704260}"#;

    #[test]
    fn decodes_numeric_fields() {
        let record: StateRecord = serde_json::from_str(CALIFORNIA).unwrap();
        assert_eq!(record.name, "California");
        assert_eq!(record.abbreviation, "CA");
        assert_eq!(record.state_code, "06");
        assert_eq!(record.total_population, 39144818.0);
        assert_eq!(record.male_population, 19440558.0);
        assert_eq!(record.female_population, 19704260.0);
    }

    #[test]
    fn decodes_numeric_text_fields() {
        let body = r#"{"STNAME":"Wyoming","STUSAB":"WY","STATE":"56","TOT_POP":"586107","TOT_MALE":" 298900 ","TOT_FEMALE":"287207"}"#;
        let record: StateRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.total_population, 586107.0);
        assert_eq!(record.male_population, 298900.0);
        assert_eq!(record.female_population, 287207.0);
    }

    #[test]
    fn response_keeps_api_order_and_ignores_extra_fields() {
        let body = format!(
            r#"{{"columns":["STNAME"],"records":[{},{{"STNAME":"Alabama","STUSAB":"AL","STATE":"01","TOT_POP":4858979,"TOT_MALE":2341093,"TOT_FEMALE":2517886,"SUMLEV":"040"}}]}}"#,
            CALIFORNIA
        );
        let response = StatesResponse::from_json(&body).unwrap();
        let order: Vec<&str> = response
            .records
            .iter()
            .map(|r| r.abbreviation.as_str())
            .collect();
        assert_eq!(order, vec!["CA", "AL"]);
    }

    #[test]
    fn non_numeric_population_is_a_decode_failure() {
        let body = r#"{"records":[{"STNAME":"X","STUSAB":"XX","STATE":"99","TOT_POP":"lots","TOT_MALE":1,"TOT_FEMALE":1}]}"#;
        let err = StatesResponse::from_json(body).unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn negative_population_is_a_decode_failure() {
        let body = r#"{"records":[{"STNAME":"X","STUSAB":"XX","STATE":"99","TOT_POP":-5,"TOT_MALE":1,"TOT_FEMALE":1}]}"#;
        assert!(matches!(
            StatesResponse::from_json(body),
            Err(FetchFailure::Decode(_))
        ));
    }

    #[test]
    fn missing_records_field_is_a_decode_failure() {
        assert!(matches!(
            StatesResponse::from_json(r#"{"rows":[]}"#),
            Err(FetchFailure::Decode(_))
        ));
    }

    #[test]
    fn max_total_population() {
        let body = format!(
            r#"{{"records":[{},{{"STNAME":"Empty","STUSAB":"EM","STATE":"00","TOT_POP":0,"TOT_MALE":0,"TOT_FEMALE":0}}]}}"#,
            CALIFORNIA
        );
        let records = StatesResponse::from_json(&body).unwrap().records;
        assert_eq!(StateRecord::max_total_population(&records), 39144818.0);
        assert_eq!(StateRecord::max_total_population(&[]), 0.0);
    }
}
