//! Reads provider fixture files and produces verification reports.

use crate::check::{check_item, ItemView};
use crate::error::VerifyError;
use crate::report::{VerificationReport, Violation};
use fixture_generator::{
    Provider, Provider1Document, Provider2Document, Provider3Document, PROVIDER1_NAME,
    PROVIDER1_VERSION,
};
use fixture_populate::provider_path;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Verifies provider fixtures under a root directory.
pub struct FixtureVerifier {
    input_dir: PathBuf,
    expected_count: usize,
}

impl FixtureVerifier {
    pub fn new(input_dir: impl Into<PathBuf>, expected_count: usize) -> Self {
        Self {
            input_dir: input_dir.into(),
            expected_count,
        }
    }

    /// Verify one provider's `db.json`.
    pub fn verify(&self, provider: Provider) -> Result<VerificationReport, VerifyError> {
        let path = provider_path(&self.input_dir, provider);
        info!("Verifying {} fixture '{}'", provider, path.display());

        let mut report = VerificationReport {
            provider,
            path: path.clone(),
            items_checked: 0,
            available_items: 0,
            violations: Vec::new(),
        };

        match provider {
            Provider::TechStore => {
                let doc: Provider1Document = read_document(&path)?;
                if doc.metadata.provider != PROVIDER1_NAME {
                    report.violations.push(Violation::document(
                        "metadata.provider",
                        format!(
                            "expected '{PROVIDER1_NAME}', found '{}'",
                            doc.metadata.provider
                        ),
                    ));
                }
                if doc.metadata.version != PROVIDER1_VERSION {
                    report.violations.push(Violation::document(
                        "metadata.version",
                        format!(
                            "expected '{PROVIDER1_VERSION}', found '{}'",
                            doc.metadata.version
                        ),
                    ));
                }
                let views: Vec<ItemView<'_>> =
                    doc.catalog.items.iter().map(ItemView::from).collect();
                self.check_items(
                    &mut report,
                    "catalog.items",
                    &views,
                    Some(doc.metadata.timestamp.as_str()),
                );
            }
            Provider::FlatCatalog => {
                let doc: Provider2Document = read_document(&path)?;
                let views: Vec<ItemView<'_>> = doc.iter().map(ItemView::from).collect();
                self.check_items(&mut report, "[]", &views, None);
            }
            Provider::WrappedFeed => {
                let doc: Provider3Document = read_document(&path)?;
                if !doc.success {
                    report
                        .violations
                        .push(Violation::document("success", "expected true"));
                }
                if doc.count != doc.data.len() {
                    report.violations.push(Violation::document(
                        "count",
                        format!("{} but data holds {} items", doc.count, doc.data.len()),
                    ));
                }
                let views: Vec<ItemView<'_>> = doc.data.iter().map(ItemView::from).collect();
                self.check_items(&mut report, "data", &views, None);
            }
        }

        if report.is_success() {
            info!(
                "{}: {} items verified ({:.0}% available)",
                provider,
                report.items_checked,
                report.availability_ratio() * 100.0
            );
        } else {
            warn!(
                "{}: {} violations in {} items",
                provider,
                report.violations.len(),
                report.items_checked
            );
        }
        Ok(report)
    }

    /// Verify providers in order. Unlike generation, a failing report does not stop the run.
    pub fn verify_all(
        &self,
        providers: &[Provider],
    ) -> Result<Vec<VerificationReport>, VerifyError> {
        providers
            .iter()
            .map(|provider| self.verify(*provider))
            .collect()
    }

    fn check_items(
        &self,
        report: &mut VerificationReport,
        collection: &str,
        items: &[ItemView<'_>],
        document_timestamp: Option<&str>,
    ) {
        if items.len() != self.expected_count {
            report.violations.push(Violation::document(
                collection,
                format!(
                    "expected {} items, found {}",
                    self.expected_count,
                    items.len()
                ),
            ));
        }

        let Some(timestamp) = document_timestamp.or_else(|| items.first().map(|i| i.timestamp.1))
        else {
            return;
        };

        for (position, item) in items.iter().enumerate() {
            report
                .violations
                .extend(check_item(report.provider, position, item, timestamp));
            report.items_checked += 1;
            if item.available {
                report.available_items += 1;
            }
        }
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, VerifyError> {
    let content = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| VerifyError::Json {
        path: path.to_path_buf(),
        source,
    })
}
