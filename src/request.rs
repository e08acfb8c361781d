//! Request bodies sent to the exercise generator.
//!
//! Two parameter shapes are in use: a flat one (age, diagnosis, goal,
//! interests, material type, item count) and a richer profile with nested
//! constraints and variability settings. Both serialize under the same
//! top-level `{ "prompt": ..., "parameters": { ... } }` envelope.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder for free-text fields the user left blank.
pub const NOT_SPECIFIED: &str = "No especificado";

/// Default session length in minutes.
pub const DEFAULT_TIME_MINUTES: u32 = 45;

/// Split a comma-separated field into trimmed, non-empty entries.
///
/// # Example
/// ```
/// use logoprint::request::csv_to_list;
///
/// assert_eq!(csv_to_list(" coches, , dinosaurios ,"), vec!["coches", "dinosaurios"]);
/// ```
pub fn csv_to_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn or_not_specified(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

/// Top-level request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text instructions; empty when the user gave none
    pub prompt: String,

    /// Structured request parameters
    pub parameters: Parameters,
}

impl GenerationRequest {
    /// Create a request from a prompt and parameters.
    pub fn new(prompt: impl Into<String>, parameters: impl Into<Parameters>) -> Self {
        Self {
            prompt: prompt.into().trim().to_string(),
            parameters: parameters.into(),
        }
    }

    /// Serialize to the compact JSON body sent over the wire.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Request parameters, in one of the two shapes the generator accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameters {
    /// Rich profile with constraints and variability
    Profile(ProfileParameters),
    /// Flat parameter set
    Simple(SimpleParameters),
}

impl From<SimpleParameters> for Parameters {
    fn from(params: SimpleParameters) -> Self {
        Parameters::Simple(params)
    }
}

impl From<ProfileParameters> for Parameters {
    fn from(params: ProfileParameters) -> Self {
        Parameters::Profile(params)
    }
}

/// Flat parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleParameters {
    /// Child's age in years
    pub age_years: u32,

    /// Diagnosis code or description
    pub diagnosis_code: String,

    /// Therapy goal
    pub goal: String,

    /// Themes the child likes
    pub interests: Vec<String>,

    /// Kind of material requested (cards, worksheet, ...)
    pub material_type: String,

    /// Number of items requested
    pub item_count: u32,
}

impl SimpleParameters {
    /// Create parameters; blank diagnosis and goal become "No especificado".
    pub fn new(
        age_years: u32,
        diagnosis_code: &str,
        goal: &str,
        interests: Vec<String>,
        material_type: impl Into<String>,
        item_count: u32,
    ) -> Self {
        Self {
            age_years,
            diagnosis_code: or_not_specified(diagnosis_code),
            goal: or_not_specified(goal),
            interests,
            material_type: material_type.into(),
            item_count,
        }
    }
}

/// Child profile inside [`ProfileParameters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// ODT code or diagnosis
    pub odt_or_dx: String,

    /// Current level (e.g. "inicial", "medio", "avanzado")
    pub level: String,

    /// Strengths to build on
    pub strengths: Vec<String>,

    /// Known difficulties
    pub difficulties: Vec<String>,

    /// Interests used to theme the material
    pub interests: Vec<String>,
}

/// Session constraints inside [`ProfileParameters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Session length in minutes
    pub time_minutes: u32,

    /// Materials the family or therapist has at hand
    pub materials_available: Vec<String>,

    /// How instructions for the family should be phrased
    pub family_style: String,

    /// Strategies the material must not use
    pub avoid_strategies: Vec<String>,

    /// Writing tone
    pub tone: String,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            time_minutes: DEFAULT_TIME_MINUTES,
            materials_available: Vec::new(),
            family_style: "simple".to_string(),
            avoid_strategies: Vec::new(),
            tone: "profesional".to_string(),
        }
    }
}

/// Variation controls inside [`ProfileParameters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variability {
    /// Identifier of the variation to produce
    pub variation_id: String,

    /// How far to move away from typical material (1-5)
    pub novelty_level: u8,
}

impl Default for Variability {
    fn default() -> Self {
        Self {
            variation_id: "A".to_string(),
            novelty_level: 2,
        }
    }
}

/// Rich parameter set with a nested child profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileParameters {
    /// Kind of material requested
    #[serde(rename = "type")]
    pub material_type: String,

    /// Child's age in years
    pub age_years: u32,

    /// Child profile
    pub profile: Profile,

    /// Where the material will be used (consulta, casa, colegio, ...)
    pub context: String,

    /// Therapy goal
    pub goal: String,

    /// Finer-grained goals
    pub subgoals: Vec<String>,

    /// Session constraints
    pub constraints: Constraints,

    /// Output format requested from the generator
    pub output_format: String,

    /// Variation controls
    pub variability: Variability,
}

impl ProfileParameters {
    /// Create profile parameters with default constraints and variability.
    pub fn new(material_type: impl Into<String>, age_years: u32) -> Self {
        Self {
            material_type: material_type.into(),
            age_years,
            profile: Profile {
                odt_or_dx: NOT_SPECIFIED.to_string(),
                ..Profile::default()
            },
            context: String::new(),
            goal: NOT_SPECIFIED.to_string(),
            subgoals: Vec::new(),
            constraints: Constraints::default(),
            output_format: String::new(),
            variability: Variability::default(),
        }
    }

    /// Set the diagnosis; blank becomes "No especificado".
    pub fn with_diagnosis(mut self, dx: &str) -> Self {
        self.profile.odt_or_dx = or_not_specified(dx);
        self
    }

    /// Set the current level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.profile.level = level.into();
        self
    }

    /// Set strengths, difficulties and interests.
    pub fn with_traits(
        mut self,
        strengths: Vec<String>,
        difficulties: Vec<String>,
        interests: Vec<String>,
    ) -> Self {
        self.profile.strengths = strengths;
        self.profile.difficulties = difficulties;
        self.profile.interests = interests;
        self
    }

    /// Set the usage context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the goal; blank becomes "No especificado".
    pub fn with_goal(mut self, goal: &str) -> Self {
        self.goal = or_not_specified(goal);
        self
    }

    /// Set the session length.
    pub fn with_time_minutes(mut self, minutes: u32) -> Self {
        self.constraints.time_minutes = minutes;
        self
    }

    /// Set strategies to avoid.
    pub fn with_avoid_strategies(mut self, avoid: Vec<String>) -> Self {
        self.constraints.avoid_strategies = avoid;
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    /// Set the variation controls.
    pub fn with_variability(mut self, variation_id: impl Into<String>, novelty_level: u8) -> Self {
        self.variability = Variability {
            variation_id: variation_id.into(),
            novelty_level: novelty_level.clamp(1, 5),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_csv_to_list() {
        assert_eq!(csv_to_list("a, b ,c"), vec!["a", "b", "c"]);
        assert!(csv_to_list("").is_empty());
        assert!(csv_to_list(" , ,").is_empty());
    }

    #[test]
    fn test_simple_request_shape() {
        let params = SimpleParameters::new(6, "F80.0", "", csv_to_list("coches"), "tarjetas", 12);
        let request = GenerationRequest::new("  ", params);
        let value: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "prompt": "",
                "parameters": {
                    "age_years": 6,
                    "diagnosis_code": "F80.0",
                    "goal": "No especificado",
                    "interests": ["coches"],
                    "material_type": "tarjetas",
                    "item_count": 12
                }
            })
        );
    }

    #[test]
    fn test_profile_request_defaults() {
        let params = ProfileParameters::new("fichas", 5)
            .with_diagnosis(" ")
            .with_level("inicial")
            .with_context("casa")
            .with_output_format("a4");
        let request = GenerationRequest::new("Fonema /r/", params);
        let value: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(value["prompt"], "Fonema /r/");
        let p = &value["parameters"];
        assert_eq!(p["type"], "fichas");
        assert_eq!(p["age_years"], 5);
        assert_eq!(p["profile"]["odt_or_dx"], "No especificado");
        assert_eq!(p["profile"]["level"], "inicial");
        assert_eq!(p["goal"], "No especificado");
        assert_eq!(p["subgoals"], json!([]));
        assert_eq!(p["constraints"]["time_minutes"], 45);
        assert_eq!(p["constraints"]["family_style"], "simple");
        assert_eq!(p["constraints"]["tone"], "profesional");
        assert_eq!(p["variability"]["variation_id"], "A");
        assert_eq!(p["variability"]["novelty_level"], 2);
    }

    #[test]
    fn test_profile_request_round_trips_as_profile() {
        let request = GenerationRequest::new("", ProfileParameters::new("fichas", 7));
        let json = request.to_json().unwrap();
        let parsed: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed.parameters, Parameters::Profile(_)));
    }

    #[test]
    fn test_novelty_level_clamped() {
        let params = ProfileParameters::new("fichas", 7).with_variability("B", 9);
        assert_eq!(params.variability.novelty_level, 5);
        assert_eq!(params.variability.variation_id, "B");
    }
}
