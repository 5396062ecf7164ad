use std::collections::HashSet;
use std::fs;
use std::path::Path;

use air_core::{
    IndividualProfile, IndividualSkill, LearningPathway, Occupation, RequiredSkill, ScoringInput,
    TuningParameters,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BUILTIN_CATALOG_TEXT: &str = include_str!("../../../data/catalog/builtin.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("catalog has no {0}")]
    Empty(&'static str),
    #[error("duplicate key: {0}")]
    Duplicate(String),
}

/// Required skill row keyed by occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationSkill {
    pub occupation_name: String,
    #[serde(flatten)]
    pub skill: RequiredSkill,
}

/// Held skill row keyed by individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldSkill {
    pub individual_id: String,
    #[serde(flatten)]
    pub skill: IndividualSkill,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub individual_profiles: Vec<IndividualProfile>,
    pub occupations: Vec<Occupation>,
    pub learning_pathways: Vec<LearningPathway>,
    pub occupation_required_skills: Vec<OccupationSkill>,
    pub individual_skills: Vec<HeldSkill>,
}

/// Read-only snapshot of the reference tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        ensure_unique("occupation", data.occupations.iter().map(|o| o.occupation_name.as_str()))?;
        ensure_unique("pathway", data.learning_pathways.iter().map(|p| p.pathway_id.as_str()))?;
        ensure_unique(
            "individual",
            data.individual_profiles.iter().map(|p| p.individual_id.as_str()),
        )?;
        Ok(Self { data })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_TEXT)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(text)?;
        Self::new(data)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn occupations(&self) -> &[Occupation] {
        &self.data.occupations
    }

    pub fn pathways(&self) -> &[LearningPathway] {
        &self.data.learning_pathways
    }

    pub fn profiles(&self) -> &[IndividualProfile] {
        &self.data.individual_profiles
    }

    /// Exact-name lookup. An unknown name resolves to the first occupation.
    pub fn occupation(&self, name: &str) -> Result<&Occupation, CatalogError> {
        if let Some(found) = self
            .data
            .occupations
            .iter()
            .find(|o| o.occupation_name == name)
        {
            return Ok(found);
        }
        let first = self
            .data
            .occupations
            .first()
            .ok_or(CatalogError::Empty("occupations"))?;
        tracing::warn!(
            requested = name,
            fallback = %first.occupation_name,
            "unknown occupation, using first record"
        );
        Ok(first)
    }

    /// Lookup by id, then by name. An unknown key resolves to the first pathway.
    pub fn pathway(&self, key: &str) -> Result<&LearningPathway, CatalogError> {
        let pathways = &self.data.learning_pathways;
        if let Some(found) = pathways
            .iter()
            .find(|p| p.pathway_id == key)
            .or_else(|| pathways.iter().find(|p| p.pathway_name == key))
        {
            return Ok(found);
        }
        let first = pathways
            .first()
            .ok_or(CatalogError::Empty("learning pathways"))?;
        tracing::warn!(
            requested = key,
            fallback = %first.pathway_id,
            "unknown learning pathway, using first record"
        );
        Ok(first)
    }

    pub fn profile(&self, individual_id: &str) -> Result<&IndividualProfile, CatalogError> {
        let profiles = &self.data.individual_profiles;
        if let Some(found) = profiles.iter().find(|p| p.individual_id == individual_id) {
            return Ok(found);
        }
        let first = profiles
            .first()
            .ok_or(CatalogError::Empty("individual profiles"))?;
        tracing::warn!(
            requested = individual_id,
            fallback = %first.individual_id,
            "unknown individual, using first profile"
        );
        Ok(first)
    }

    pub fn required_skills(&self, occupation_name: &str) -> Vec<RequiredSkill> {
        self.data
            .occupation_required_skills
            .iter()
            .filter(|row| row.occupation_name == occupation_name)
            .map(|row| row.skill.clone())
            .collect()
    }

    pub fn individual_skills(&self, individual_id: &str) -> Vec<IndividualSkill> {
        self.data
            .individual_skills
            .iter()
            .filter(|row| row.individual_id == individual_id)
            .map(|row| row.skill.clone())
            .collect()
    }

    /// Builds an input bundle against the resolved occupation and its required skills.
    pub fn scoring_input(
        &self,
        profile: IndividualProfile,
        occupation_name: &str,
        individual_skills: Vec<IndividualSkill>,
        tuning: TuningParameters,
    ) -> Result<ScoringInput, CatalogError> {
        let occupation = self.occupation(occupation_name)?.clone();
        let required_skills = self.required_skills(&occupation.occupation_name);
        if required_skills.is_empty() {
            tracing::warn!(
                occupation = %occupation.occupation_name,
                "occupation has no required skills, skills match will be zero"
            );
        }
        Ok(ScoringInput {
            profile,
            occupation,
            individual_skills,
            required_skills,
            tuning,
        })
    }

    /// Input bundle for a stored individual, using their stored skills.
    pub fn stored_scoring_input(
        &self,
        individual_id: &str,
        occupation_name: &str,
        tuning: TuningParameters,
    ) -> Result<ScoringInput, CatalogError> {
        let profile = self.profile(individual_id)?.clone();
        let skills = self.individual_skills(&profile.individual_id);
        self.scoring_input(profile, occupation_name, skills, tuning)
    }
}

fn ensure_unique<'a>(
    kind: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::Duplicate(format!("{kind} {key}")));
        }
    }
    Ok(())
}
