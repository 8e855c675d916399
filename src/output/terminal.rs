//! Rich terminal output formatting

use crate::models::{CertificateCheck, FileIdentification};
use crate::utils::progress::{print_fail, print_info, print_pass};
use console::style;

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print one line per identified file
pub fn print_identifications(results: &[FileIdentification]) {
    print_header("File Types");

    for result in results {
        println!("  {}", style(&result.path).bold());

        let Some(c) = &result.classification else {
            let error = result.error.as_deref().unwrap_or("unreadable");
            println!("      {} {}", style("✗").red(), style(error).red());
            continue;
        };

        let extension = if c.extension.is_empty() {
            style("(none)".to_string()).dim()
        } else {
            style(c.extension.clone()).green()
        };
        println!(
            "      {} {}  {}",
            extension,
            c.description,
            style(&c.content_type).dim()
        );
    }
}

/// Print the compliance verdict and expiration information for a certificate
pub fn print_certificate_check(check: &CertificateCheck) {
    print_header(&format!("Certificate: {}", check.label));

    let Some(report) = &check.report else {
        let error = check.error.as_deref().unwrap_or("could not be loaded");
        print_fail(&style(error).red().to_string());
        return;
    };

    let cert = &report.certificate;
    println!("  {:<20} {}", style("Subject").bold(), cert.subject);
    println!("  {:<20} {}", style("Issuer").bold(), cert.issuer);
    println!("  {:<20} {}", style("Serial").bold(), cert.serial);
    println!(
        "  {:<20} {}",
        style("Signature").bold(),
        cert.signature_algorithm
    );
    println!("  {:<20} {}", style("Public Key").bold(), cert.public_key);
    println!();

    if report.compliance.is_compliant {
        print_pass(&format!("Certificate is {} compliant.", check.policy));
    } else {
        print_fail(&format!(
            "Certificate is NOT {} compliant for the following reasons:",
            check.policy
        ));
        for reason in &report.compliance.reasons {
            println!("      - {}", reason);
        }
    }

    println!();
    println!("  {}", style("Expiration Information:").bold());
    print_info(&report.validity_message);
}
