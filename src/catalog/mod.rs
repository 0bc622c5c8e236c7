//! Reference catalogs of WCAG success criteria.
//!
//! A catalog is built once at startup and then only borrowed. The WCAG 2.2
//! catalog is derived from the WCAG 2.1 one by [`derive_catalog`], which reads
//! its base and returns a new value.

mod wcag21;
mod wcag22;

use crate::domain::model::{CatalogVersion, ConformanceLevel, CriterionDescriptor};
use crate::utils::error::{ReportError, Result};
use regex::RegexBuilder;
use std::collections::HashMap;
use url::Url;

/// Static catalog row; turned into a [`CriterionDescriptor`] at load time.
pub(crate) struct Entry {
    id: &'static str,
    level: ConformanceLevel,
    title: &'static str,
    title_nl: &'static str,
    url: &'static str,
}

impl Entry {
    const fn new(
        id: &'static str,
        level: ConformanceLevel,
        title: &'static str,
        title_nl: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            id,
            level,
            title,
            title_nl,
            url,
        }
    }

    fn descriptor(&self, since: Option<CatalogVersion>) -> CriterionDescriptor {
        CriterionDescriptor {
            id: self.id.to_string(),
            title: self.title.to_string(),
            title_nl: self.title_nl.to_string(),
            level: self.level,
            url: self.url.to_string(),
            fragment: String::new(),
            since,
        }
    }
}

/// Changes applied on top of a base catalog by [`derive_catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogOverrides {
    /// Case-insensitive replacement of the first match in every inherited URL.
    pub url_rewrite: Option<(String, String)>,
    /// Criteria appended after the inherited ones.
    pub additions: Vec<CriterionDescriptor>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    version: CatalogVersion,
    criteria: Vec<CriterionDescriptor>,
    index: HashMap<String, usize>,
}

pub fn is_criterion_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn url_fragment(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    match parsed.fragment() {
        Some(fragment) if !fragment.is_empty() => Ok(fragment.to_string()),
        _ => Err(ReportError::Catalog {
            message: format!("URL {} has no fragment", url),
        }),
    }
}

impl Catalog {
    /// Builds a catalog, deriving each `fragment` from its URL.
    ///
    /// Fails on duplicate or malformed ids and on URLs without a fragment.
    pub fn new(version: CatalogVersion, criteria: Vec<CriterionDescriptor>) -> Result<Self> {
        let mut index = HashMap::with_capacity(criteria.len());
        let mut checked = Vec::with_capacity(criteria.len());

        for (position, mut descriptor) in criteria.into_iter().enumerate() {
            if !is_criterion_id(&descriptor.id) {
                return Err(ReportError::Catalog {
                    message: format!("'{}' is not a success criterion number", descriptor.id),
                });
            }
            if index.insert(descriptor.id.clone(), position).is_some() {
                return Err(ReportError::Catalog {
                    message: format!("duplicate success criterion {} in {}", descriptor.id, version),
                });
            }
            descriptor.fragment = url_fragment(&descriptor.url)?;
            checked.push(descriptor);
        }

        Ok(Self {
            version,
            criteria: checked,
            index,
        })
    }

    pub fn wcag21() -> Result<Self> {
        let criteria = wcag21::WCAG21.iter().map(|e| e.descriptor(None)).collect();
        Self::new(CatalogVersion::Wcag21, criteria)
    }

    pub fn wcag22() -> Result<Self> {
        let base = Self::wcag21()?;
        derive_catalog(
            &base,
            CatalogVersion::Wcag22,
            &wcag22::overrides(),
            wcag22::DEPRECATED,
        )
    }

    pub fn load(version: CatalogVersion) -> Result<Self> {
        let catalog = match version {
            CatalogVersion::Wcag21 => Self::wcag21()?,
            CatalogVersion::Wcag22 => Self::wcag22()?,
        };
        tracing::debug!("Loaded {} catalog with {} criteria", version, catalog.len());
        Ok(catalog)
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    pub fn get(&self, id: &str) -> Option<&CriterionDescriptor> {
        self.index.get(id).map(|&i| &self.criteria[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionDescriptor> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Ids of every criterion needed to conform at `level`, in catalog order.
    pub fn conformance_targets(&self, level: ConformanceLevel) -> Vec<String> {
        self.criteria
            .iter()
            .filter(|c| c.level <= level)
            .map(|c| c.id.clone())
            .collect()
    }
}

/// Builds a new catalog from `base`: inherited entries are copied with the
/// URL rewrite applied, additions are appended, and `deprecated` ids dropped.
pub fn derive_catalog(
    base: &Catalog,
    version: CatalogVersion,
    overrides: &CatalogOverrides,
    deprecated: &[&str],
) -> Result<Catalog> {
    let rewrite = match &overrides.url_rewrite {
        Some((from, to)) => {
            let pattern = RegexBuilder::new(&regex::escape(from))
                .case_insensitive(true)
                .build()
                .map_err(|e| ReportError::Catalog {
                    message: format!("invalid URL rewrite '{}': {}", from, e),
                })?;
            Some((pattern, to.as_str()))
        }
        None => None,
    };

    let inherited = base.iter().map(|descriptor| {
        let mut copy = descriptor.clone();
        if let Some((pattern, to)) = &rewrite {
            copy.url = pattern.replace(&copy.url, regex::NoExpand(*to)).into_owned();
        }
        copy
    });

    let criteria = inherited
        .chain(overrides.additions.iter().cloned())
        .filter(|descriptor| !deprecated.contains(&descriptor.id.as_str()))
        .collect();

    Catalog::new(version, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(catalog: &Catalog) {
        let mut seen = std::collections::HashSet::new();
        for descriptor in catalog.iter() {
            assert!(seen.insert(descriptor.id.clone()), "duplicate {}", descriptor.id);
            let fragment = Url::parse(&descriptor.url).unwrap().fragment().unwrap().to_string();
            assert_eq!(descriptor.fragment, fragment);
        }
    }

    #[test]
    fn test_wcag21_catalog_is_well_formed() {
        let catalog = Catalog::wcag21().unwrap();
        assert_eq!(catalog.len(), 78);
        assert_well_formed(&catalog);

        let contrast = catalog.get("1.4.3").unwrap();
        assert_eq!(contrast.title, "Contrast (Minimum)");
        assert_eq!(contrast.title_nl, "Contrast (minimum)");
        assert_eq!(contrast.level, ConformanceLevel::AA);
        assert_eq!(contrast.fragment, "contrast-minimum");
    }

    #[test]
    fn test_wcag22_catalog_is_derived_without_touching_base() {
        let base = Catalog::wcag21().unwrap();
        let derived = derive_catalog(
            &base,
            CatalogVersion::Wcag22,
            &wcag22::overrides(),
            wcag22::DEPRECATED,
        )
        .unwrap();

        assert_well_formed(&derived);
        assert_eq!(derived.len(), 78 - 1 + 9);
        assert!(!derived.contains("4.1.1"));
        assert_eq!(
            derived.get("2.4.11").unwrap().since,
            Some(CatalogVersion::Wcag22)
        );
        assert_eq!(
            derived.get("1.1.1").unwrap().url,
            "https://www.w3.org/TR/WCAG22/#non-text-content"
        );

        // base is unchanged
        assert!(base.contains("4.1.1"));
        assert_eq!(
            base.get("1.1.1").unwrap().url,
            "https://www.w3.org/TR/WCAG21/#non-text-content"
        );
        assert_eq!(base.len(), 78);
    }

    #[test]
    fn test_wcag22_loader_matches_manual_derivation() {
        let catalog = Catalog::load(CatalogVersion::Wcag22).unwrap();
        assert_eq!(catalog.version(), CatalogVersion::Wcag22);
        assert!(catalog.contains("3.3.8"));
        assert!(catalog.contains("2.5.8"));
    }

    #[test]
    fn test_aa_targets_match_fixed_list() {
        let catalog = Catalog::wcag21().unwrap();
        let targets = catalog.conformance_targets(ConformanceLevel::AA);
        assert_eq!(targets.len(), 50);
        assert_eq!(targets.first().map(String::as_str), Some("1.1.1"));
        assert_eq!(targets.last().map(String::as_str), Some("4.1.3"));
        assert!(targets.contains(&"4.1.1".to_string()));
        assert!(targets.contains(&"1.4.10".to_string()));
        assert!(!targets.contains(&"1.4.6".to_string()));

        let a_only = catalog.conformance_targets(ConformanceLevel::A);
        assert!(a_only.len() < targets.len());
        assert_eq!(catalog.conformance_targets(ConformanceLevel::AAA).len(), 78);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let entry = wcag21::WCAG21[0].descriptor(None);
        let err = Catalog::new(CatalogVersion::Wcag21, vec![entry.clone(), entry]).unwrap_err();
        assert!(matches!(err, ReportError::Catalog { .. }));
    }

    #[test]
    fn test_url_without_fragment_is_rejected() {
        let mut entry = wcag21::WCAG21[0].descriptor(None);
        entry.url = "https://www.w3.org/TR/WCAG21/".to_string();
        assert!(Catalog::new(CatalogVersion::Wcag21, vec![entry]).is_err());
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let mut entry = wcag21::WCAG21[0].descriptor(None);
        entry.id = "1.1".to_string();
        assert!(Catalog::new(CatalogVersion::Wcag21, vec![entry]).is_err());
    }
}
