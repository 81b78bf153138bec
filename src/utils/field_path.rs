use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collections on a candidate that hold editable sub-records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSection {
    WorkExperiences,
    Projects,
    Educations,
    Certifications,
    Achievements,
}

impl CandidateSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSection::WorkExperiences => "workExperiences",
            CandidateSection::Projects => "projects",
            CandidateSection::Educations => "educations",
            CandidateSection::Certifications => "certifications",
            CandidateSection::Achievements => "achievements",
        }
    }

    fn from_collection(name: &str) -> Option<Self> {
        match name {
            "workExperiences" => Some(CandidateSection::WorkExperiences),
            "projects" => Some(CandidateSection::Projects),
            "educations" => Some(CandidateSection::Educations),
            "certifications" => Some(CandidateSection::Certifications),
            // legacy alias still produced by older clients
            "achievements" | "competitions" => Some(CandidateSection::Achievements),
            _ => None,
        }
    }
}

/// A single editable value within an entity, either a top-level field
/// (`city`) or one inside an indexed collection element
/// (`workExperiences[0].employerName`). Prints to and parses from the
/// dotted/bracketed string shape used at the interface boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FieldPath {
    Root { field: String },
    Nested { section: CandidateSection, index: usize, field: String },
}

impl FieldPath {
    pub fn root(field: impl Into<String>) -> Self {
        FieldPath::Root { field: field.into() }
    }

    pub fn nested(section: CandidateSection, index: usize, field: impl Into<String>) -> Self {
        FieldPath::Nested {
            section,
            index,
            field: field.into(),
        }
    }

    pub fn leaf(&self) -> &str {
        match self {
            FieldPath::Root { field } => field,
            FieldPath::Nested { field, .. } => field,
        }
    }

    pub fn section(&self) -> Option<CandidateSection> {
        match self {
            FieldPath::Root { .. } => None,
            FieldPath::Nested { section, .. } => Some(*section),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Root { field } => write!(f, "{}", field),
            FieldPath::Nested { section, index, field } => {
                write!(f, "{}[{}].{}", section.as_str(), index, field)
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::BadRequest("empty field path".to_string()));
        }
        let Some(open) = s.find('[') else {
            if s.contains(']') || s.contains('.') {
                return Err(Error::BadRequest(format!("malformed field path: {}", s)));
            }
            return Ok(FieldPath::root(s));
        };

        let collection = &s[..open];
        let section = CandidateSection::from_collection(collection)
            .ok_or_else(|| Error::BadRequest(format!("unknown collection in field path: {}", s)))?;
        let rest = &s[open + 1..];
        let close = rest
            .find(']')
            .ok_or_else(|| Error::BadRequest(format!("malformed field path: {}", s)))?;
        let index: usize = rest[..close]
            .parse()
            .map_err(|_| Error::BadRequest(format!("bad index in field path: {}", s)))?;
        let tail = &rest[close + 1..];
        let field = tail
            .strip_prefix('.')
            .filter(|f| !f.is_empty() && !f.contains(|ch| ch == '[' || ch == ']' || ch == '.'))
            .ok_or_else(|| Error::BadRequest(format!("malformed field path: {}", s)))?;

        Ok(FieldPath::nested(section, index, field))
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for FieldPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_nested_paths() {
        let path: FieldPath = "workExperiences[0].employerName".parse().unwrap();
        assert_eq!(
            path,
            FieldPath::nested(CandidateSection::WorkExperiences, 0, "employerName")
        );
        assert_eq!(path.to_string(), "workExperiences[0].employerName");
    }

    #[test]
    fn accepts_root_fields_and_legacy_alias() {
        assert_eq!("city".parse::<FieldPath>().unwrap(), FieldPath::root("city"));
        let path: FieldPath = "competitions[2].title".parse().unwrap();
        assert_eq!(path.section(), Some(CandidateSection::Achievements));
        assert_eq!(path.to_string(), "achievements[2].title");
    }

    #[test]
    fn rejects_malformed_paths() {
        for bad in ["", "workExperiences[x].name", "educations[1]", "unknown[0].f", "a.b"] {
            assert!(bad.parse::<FieldPath>().is_err(), "{bad} should not parse");
        }
    }
}
