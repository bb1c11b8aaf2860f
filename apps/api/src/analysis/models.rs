use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Summarized work experience. `role` is a single title, never a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    #[serde(default)]
    pub role: Option<String>,
    /// Estimated years of experience; `None` when unknown.
    #[serde(default)]
    pub years: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
}

/// Candidate-level result of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: ExperienceSummary,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    /// Fit for the job post, 0.0 – 10.0. Only present when a job post was given.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedbacks: Vec<String>,
}

impl ResumeSummary {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(score) = self.score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(format!(
                    "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
                ));
            }
        }
        if let Some(years) = self.work_experience.years {
            if !years.is_finite() || years < 0.0 {
                return Err(format!("work_experience.years must be >= 0, got {years}"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeCheckResponse {
    pub summary: ResumeSummary,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
