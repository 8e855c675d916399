//! `check` command: evaluate certificates against the compliance policy

use crate::certificate::{self, CompliancePolicy};
use crate::models::{CertificateCheck, CertificateReport};
use crate::output;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Evaluate every certificate in every file without printing.
///
/// A file that cannot be loaded yields a single failed row and the
/// remaining files are still checked.
pub fn collect_checks(files: &[PathBuf], policy: &CompliancePolicy) -> Vec<CertificateCheck> {
    let mut checks = Vec::new();

    for file in files {
        let certs = match certificate::read_certificates(file) {
            Ok(certs) => certs,
            Err(e) => {
                warn!(path = %file.display(), error = %e, "failed to load certificates");
                checks.push(CertificateCheck::failed(
                    file.display().to_string(),
                    &policy.name,
                    e.to_string(),
                ));
                continue;
            }
        };

        for (i, cert) in certs.iter().enumerate() {
            let label = if certs.len() == 1 {
                file.display().to_string()
            } else {
                format!("{}[{}]", file.display(), i)
            };

            let now = Utc::now();
            let compliance = certificate::evaluate_at(cert, policy, now);
            let validity = certificate::validity_status_at(now, cert.not_before, cert.not_after);

            debug!(
                %label,
                compliant = compliance.is_compliant,
                reasons = compliance.reasons.len(),
                "evaluated certificate"
            );

            checks.push(CertificateCheck {
                label,
                policy: policy.name.clone(),
                report: Some(CertificateReport {
                    certificate: cert.clone(),
                    compliance,
                    validity,
                    validity_message: validity.to_string(),
                }),
                error: None,
            });
        }
    }

    checks
}

pub fn run_check(files: &[PathBuf], policy: &CompliancePolicy, json: bool) -> anyhow::Result<()> {
    let checks = collect_checks(files, policy);

    if json {
        output::print_json(&checks)?;
    } else {
        for check in &checks {
            output::print_certificate_check(check);
        }
    }

    let failed = checks.iter().filter(|c| c.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} files could not be checked", failed, files.len());
    }
    Ok(())
}
