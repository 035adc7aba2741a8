//! Payload types for the catalog entities.
//!
//! Field names follow the catalog API's JSON schema (`title` for categories
//! and markets, a single `organization` block on listings).

use serde::{Deserialize, Serialize};

/// A category. Immutable once created; carries no back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// A market. `listing_ids` is filled in as listings sample the market and is
/// final by the time the market is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub listing_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub full_name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub id: String,
    pub url: String,
}

/// A catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub url: String,
    pub foundation_member: bool,
    pub teaser: String,
    pub body: String,
    pub status: String,
    pub support_url: String,
    pub license_type: String,
    pub created: String,
    pub changed: String,
    pub authors: Vec<Author>,
    pub organization: Organization,
    pub tags: Vec<Tag>,
    pub market_ids: Vec<String>,
    pub category_ids: Vec<String>,
    pub screenshots: Vec<String>,
}

/// A version of a listing and the environments it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingVersion {
    pub version: String,
    pub listing_id: String,
    pub eclipse_versions: Vec<String>,
    pub min_java_version: String,
    pub platforms: Vec<String>,
}

/// A recorded install of one version of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Install {
    pub listing_id: String,
    pub version: String,
    pub java_version: String,
    pub eclipse_version: String,
    pub os: String,
    pub locale: String,
    pub install_date: String,
}

impl Install {
    /// Path segment the install is posted under.
    pub fn endpoint_path(&self) -> String {
        format!("/installs/{}/{}", self.listing_id, self.version)
    }
}
