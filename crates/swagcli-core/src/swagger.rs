//! Swagger resources and resource providers.
//!
//! These are the shapes the swagger loader hands over: the loader itself (file discovery,
//! `$ref` resolution, readme tag parsing) lives outside this workspace.

use super::{HttpMethod, map::Map};

/// A swagger resource at one api version.
///
/// A resource is a URL path template (`/subscriptions/{}/resourceGroups/{}/providers/...`)
/// together with the operations the swagger file declares on it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwaggerResource {
    /// The normalized resource identifier (the lowercased path template with `{}`
    /// placeholders).
    pub id: String,

    /// The api version the resource was loaded from.
    pub version: String,

    /// The path template exactly as written in the swagger file.
    #[serde(default)]
    pub path: String,

    /// The swagger file the resource was loaded from.
    #[serde(rename = "filePath", default)]
    pub file_path: String,

    /// Operation ids mapped to the HTTP method they are bound to.
    #[serde(default)]
    pub operations: Map<String, HttpMethod>,
}

impl SwaggerResource {
    /// Creates a new `SwaggerResource` with no operations.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            path: String::new(),
            file_path: String::new(),
            operations: Map::new(),
        }
    }

    /// Sets the path template of the resource.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the swagger file of the resource.
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    /// Adds an operation to the resource.
    pub fn operation(mut self, operation_id: impl Into<String>, method: HttpMethod) -> Self {
        self.operations.insert(operation_id.into(), method);
        self
    }

    /// Returns true when any operation of the resource uses `method`.
    pub fn has_method(&self, method: HttpMethod) -> bool {
        self.operations.values().any(|m| *m == method)
    }
}

/// Resources keyed by resource id, then by api version.
pub type ResourceMap = Map<String, Map<String, SwaggerResource>>;

/// A resource provider (e.g. `Microsoft.Databricks`) of a swagger module.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceProvider {
    /// The plane the provider belongs to (`mgmt-plane`, `data-plane`).
    pub plane: String,

    /// The swagger module path segments (e.g. `["databricks"]`).
    #[serde(rename = "modNames")]
    pub mod_names: Vec<String>,

    /// The provider name.
    pub name: String,

    /// Path of the readme file that declares the provider's tags.
    #[serde(rename = "readmePath", default)]
    pub readme_path: String,

    /// The tag the readme selects by default.
    #[serde(rename = "defaultTag")]
    pub default_tag: String,

    /// Resources per readme tag.
    #[serde(default)]
    pub tags: Map<String, ResourceMap>,
}

impl ResourceProvider {
    /// Creates a new `ResourceProvider` with no tags.
    pub fn new(
        plane: impl Into<String>,
        mod_names: Vec<String>,
        name: impl Into<String>,
        default_tag: impl Into<String>,
    ) -> Self {
        Self {
            plane: plane.into(),
            mod_names,
            name: name.into(),
            readme_path: String::new(),
            default_tag: default_tag.into(),
            tags: Map::new(),
        }
    }

    /// Sets the readme path.
    pub fn readme_path(mut self, readme_path: impl Into<String>) -> Self {
        self.readme_path = readme_path.into();
        self
    }

    /// Adds a resource under `tag`, keyed by its id and version.
    pub fn resource(mut self, tag: impl Into<String>, resource: SwaggerResource) -> Self {
        self.tags
            .entry(tag.into())
            .or_default()
            .entry(resource.id.clone())
            .or_default()
            .insert(resource.version.clone(), resource);
        self
    }

    /// Returns the resources of `tag`, if the tag exists.
    pub fn resource_map_by_tag(&self, tag: &str) -> Option<&ResourceMap> {
        self.tags.get(tag)
    }

    /// Returns the readme path relative to the `specification` directory of the
    /// specs repository, with `/` separators.
    ///
    /// Falls back to the full path when no `specification` component is present.
    pub fn readme_relative_path(&self) -> String {
        let parts: Vec<&str> = self.readme_path.split(['/', '\\']).collect();
        match parts.iter().position(|p| *p == "specification") {
            Some(idx) => parts[idx..].join("/"),
            None => parts.join("/"),
        }
    }
}
