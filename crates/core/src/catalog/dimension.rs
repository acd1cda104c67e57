//! Groupable dimension identifiers and descriptors.

use serde::{Deserialize, Serialize};

/// Identifier of a groupable fact dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionId {
    /// Business area the project belongs to.
    Area,
    /// Project identifier.
    Project,
    /// Project status.
    Status,
    /// Calendar month of the snapshot.
    Month,
    /// Fiscal year of the snapshot.
    Year,
    /// Responsible person.
    Responsible,
    /// Spend category.
    Category,
}

impl DimensionId {
    /// All recognized dimensions.
    pub const ALL: [Self; 7] = [
        Self::Area,
        Self::Project,
        Self::Status,
        Self::Month,
        Self::Year,
        Self::Responsible,
        Self::Category,
    ];
}

impl std::fmt::Display for DimensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::Area => "area",
            Self::Project => "project",
            Self::Status => "status",
            Self::Month => "month",
            Self::Year => "year",
            Self::Responsible => "responsible",
            Self::Category => "category",
        };
        write!(f, "{id}")
    }
}

impl std::str::FromStr for DimensionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "project" => Ok(Self::Project),
            "status" => Ok(Self::Status),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "responsible" => Ok(Self::Responsible),
            "category" => Ok(Self::Category),
            _ => Err(format!("Unknown dimension: {s}")),
        }
    }
}

/// Descriptor for a groupable dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDescriptor {
    /// Dimension identifier.
    pub id: DimensionId,
    /// Human-readable name for display.
    pub display_name: String,
}

impl DimensionDescriptor {
    /// Creates a descriptor with the default display name.
    #[must_use]
    pub fn new(id: DimensionId) -> Self {
        let display_name = match id {
            DimensionId::Area => "Área",
            DimensionId::Project => "Projeto",
            DimensionId::Status => "Status",
            DimensionId::Month => "Mês",
            DimensionId::Year => "Ano",
            DimensionId::Responsible => "Responsável",
            DimensionId::Category => "Categoria",
        };
        Self {
            id,
            display_name: display_name.to_string(),
        }
    }
}
