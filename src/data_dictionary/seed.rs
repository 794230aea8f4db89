//! Concept seeds - YAML fixtures for building concepts.
//!
//! A seed file lists concepts with their names, designations and
//! descriptions. Answers refer to other concepts in the same file by id and
//! are linked once every concept has been built.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::candidate::{DescriptionCandidate, NameCandidate};
use super::concept::Concept;
use super::ids::{ConceptId, DescriptionId, NameId};
use super::kind::ConceptKind;
use super::tags::DesignationTag;
use crate::config::NamingConfig;
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NameId>,
    pub name: String,
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<DesignationTag>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub voided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub void_reason: Option<String>,
}

impl NameSeed {
    fn into_candidate(self) -> NameCandidate {
        let mut candidate = NameCandidate::new(self.name, self.locale);
        if let Some(id) = self.id {
            candidate.id = id;
        }
        for tag in self.tags {
            candidate = candidate.with_tag(tag);
        }
        if self.voided {
            candidate.void(self.void_reason.unwrap_or_default());
        }
        candidate
    }
}

impl From<&NameCandidate> for NameSeed {
    fn from(name: &NameCandidate) -> Self {
        Self {
            id: Some(name.id),
            name: name.name.clone(),
            locale: name.locale.clone(),
            tags: name.tags().to_vec(),
            voided: name.voided,
            void_reason: name.void_reason.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DescriptionId>,
    pub description: String,
    pub locale: Locale,
}

impl DescriptionSeed {
    fn into_candidate(self) -> DescriptionCandidate {
        let mut candidate = DescriptionCandidate::new(self.description, self.locale);
        if let Some(id) = self.id {
            candidate.id = id;
        }
        candidate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptSeed {
    pub concept_id: ConceptId,
    #[serde(default)]
    pub kind: ConceptKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired: Option<String>,
    #[serde(default)]
    pub names: Vec<NameSeed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<DescriptionSeed>,
    /// Ids of answer concepts defined in the same seed file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<ConceptId>,
}

impl ConceptSeed {
    /// Build the concept without its answers. Fails when two names or two
    /// descriptions share an id.
    pub fn build(&self, config: &NamingConfig) -> Result<Concept> {
        let concept = Concept::new(self.concept_id.value(), self.kind.clone())
            .with_config(config.clone());
        for name in &self.names {
            if !concept.add_name(name.clone().into_candidate()) {
                bail!(
                    "concept {} has duplicate name id for '{}'",
                    self.concept_id,
                    name.name
                );
            }
        }
        for description in &self.descriptions {
            if !concept.add_description(description.clone().into_candidate()) {
                bail!(
                    "concept {} has duplicate description id for '{}'",
                    self.concept_id,
                    description.description
                );
            }
        }
        if let Some(reason) = &self.retired {
            concept.retire(reason);
        }
        Ok(concept)
    }

    /// Capture a concept's current names and descriptions. Answers are
    /// recorded by id.
    pub fn snapshot(concept: &Concept) -> Self {
        Self {
            concept_id: concept.id(),
            kind: concept.kind().clone(),
            retired: concept
                .is_retired()
                .then(|| concept.retire_reason().unwrap_or_default()),
            names: concept.get_names(true).iter().map(NameSeed::from).collect(),
            descriptions: concept
                .get_descriptions()
                .into_iter()
                .map(|d| DescriptionSeed {
                    id: Some(d.id),
                    description: d.description,
                    locale: d.locale,
                })
                .collect(),
            answers: concept.get_answers(true).iter().map(|a| a.id()).collect(),
        }
    }
}

/// A seed file: a list of concepts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionarySeed {
    pub concepts: Vec<ConceptSeed>,
}

impl DictionarySeed {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse concept seed YAML")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read concept seeds: {}", path.display()))?;
        let seed = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid concept seeds: {}", path.display()))?;
        info!(path = %path.display(), concepts = seed.concepts.len(), "Loaded concept seeds");
        Ok(seed)
    }

    /// Build every concept, then link answers. Fails on duplicate concept
    /// ids or answers naming a concept not in the file.
    pub fn build(&self, config: &NamingConfig) -> Result<Vec<Arc<Concept>>> {
        let mut by_id: HashMap<ConceptId, Arc<Concept>> = HashMap::new();
        let mut concepts = Vec::with_capacity(self.concepts.len());

        for seed in &self.concepts {
            let concept = Arc::new(seed.build(config)?);
            if by_id.insert(seed.concept_id, Arc::clone(&concept)).is_some() {
                bail!("duplicate concept id {} in seeds", seed.concept_id);
            }
            concepts.push(concept);
        }

        for (seed, concept) in self.concepts.iter().zip(&concepts) {
            for answer_id in &seed.answers {
                let answer = by_id.get(answer_id).with_context(|| {
                    format!(
                        "concept {} lists unknown answer {}",
                        seed.concept_id, answer_id
                    )
                })?;
                concept.add_answer(Arc::clone(answer));
            }
        }

        Ok(concepts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEVER: &str = r#"
concepts:
  - concept_id: 5089
    kind:
      type: coded
    names:
      - name: Fever
        locale: en
        tags: ["PREFERRED_LANGUAGE:en"]
      - name: Pyrexia
        locale: en_GB
        tags: ["PREFERRED_COUNTRY:GB"]
      - name: Fiebre
        locale: es
      - name: Feaver
        locale: en
        voided: true
        void_reason: misspelt
    descriptions:
      - description: Raised body temperature
        locale: en
    answers: [1065]
  - concept_id: 1065
    names:
      - name: "Yes"
        locale: en
"#;

    #[test]
    fn builds_and_links_answers() {
        let concepts = DictionarySeed::from_yaml_str(FEVER)
            .unwrap()
            .build(&NamingConfig::default())
            .unwrap();
        let fever = &concepts[0];

        assert_eq!(fever.get_names(true).len(), 4);
        assert_eq!(fever.get_names(false).len(), 3);
        assert_eq!(fever.get_best_name(Some(&Locale::uk())).unwrap().name, "Pyrexia");
        assert_eq!(
            fever.get_description(Some(&Locale::us()), false).unwrap().description,
            "Raised body temperature"
        );
        let answers: Vec<_> = fever.get_answers(false).iter().map(|a| a.id()).collect();
        assert_eq!(answers, vec![ConceptId::new(1065)]);
    }

    #[test]
    fn unknown_answer_is_an_error() {
        let seed = DictionarySeed::from_yaml_str(
            "concepts:\n  - concept_id: 1\n    answers: [2]\n",
        )
        .unwrap();
        let err = seed.build(&NamingConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown answer 2"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let seed = DictionarySeed::from_yaml_str(
            "concepts:\n  - concept_id: 1\n  - concept_id: 1\n",
        )
        .unwrap();
        assert!(seed.build(&NamingConfig::default()).is_err());
    }

    #[test]
    fn snapshot_preserves_names_and_tags() {
        let seed = DictionarySeed::from_yaml_str(FEVER).unwrap();
        let concept = seed.concepts[0].build(&NamingConfig::default()).unwrap();
        let snapshot = ConceptSeed::snapshot(&concept);

        assert_eq!(snapshot.names.len(), 4);
        assert_eq!(
            snapshot.names[0].tags,
            vec![DesignationTag::preferred_language("en")]
        );
        assert!(snapshot.names[3].voided);

        let rebuilt = snapshot.build(&NamingConfig::default()).unwrap();
        let key = |names: Vec<NameCandidate>| -> Vec<_> {
            names
                .into_iter()
                .map(|n| {
                    let tags = n.tags().to_vec();
                    (n.id, n.name, n.locale, tags, n.voided)
                })
                .collect()
        };
        assert_eq!(key(rebuilt.get_names(true)), key(concept.get_names(true)));
    }

    #[test]
    fn snapshot_preserves_description_ids() {
        let seed = DictionarySeed::from_yaml_str(FEVER).unwrap();
        let concept = seed.concepts[0].build(&NamingConfig::default()).unwrap();
        let snapshot = ConceptSeed::snapshot(&concept);
        let yaml = serde_yaml::to_string(&snapshot).unwrap();
        let restored: ConceptSeed = serde_yaml::from_str(&yaml).unwrap();

        let rebuilt = restored.build(&NamingConfig::default()).unwrap();
        let ids = |c: &Concept| -> Vec<DescriptionId> {
            c.get_descriptions().into_iter().map(|d| d.id).collect()
        };
        assert_eq!(ids(&rebuilt), ids(&concept));
        assert!(rebuilt.remove_description(ids(&concept)[0]));
    }

    #[test]
    fn duplicate_name_ids_are_rejected() {
        let seed = DictionarySeed::from_yaml_str(
            r#"
concepts:
  - concept_id: 7
    names:
      - id: 6f1c9d3e-2b4a-4c5d-8e7f-0a1b2c3d4e5f
        name: Fever
        locale: en
      - id: 6f1c9d3e-2b4a-4c5d-8e7f-0a1b2c3d4e5f
        name: Pyrexia
        locale: en_GB
"#,
        )
        .unwrap();
        let err = seed.build(&NamingConfig::default()).unwrap_err();
        assert!(err.to_string().contains("duplicate name id"));
    }

    #[test]
    fn duplicate_description_ids_are_rejected() {
        let seed = DictionarySeed::from_yaml_str(
            r#"
concepts:
  - concept_id: 8
    descriptions:
      - id: 0d9e8f7a-6b5c-4d3e-9f1a-2b3c4d5e6f70
        description: Raised body temperature
        locale: en
      - id: 0d9e8f7a-6b5c-4d3e-9f1a-2b3c4d5e6f70
        description: High temperature
        locale: en_GB
"#,
        )
        .unwrap();
        assert!(seed.concepts[0].build(&NamingConfig::default()).is_err());
    }

    #[test]
    fn reads_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seeds.yaml");
        std::fs::write(&path, FEVER).unwrap();
        let seed = DictionarySeed::from_file(&path).unwrap();
        assert_eq!(seed.concepts.len(), 2);
        assert!(DictionarySeed::from_file(dir.path().join("missing.yaml")).is_err());
    }
}
