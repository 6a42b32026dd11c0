//! Resume Assembler — orchestrates classification, pool lookup, and seeded
//! selection into a complete [`ResumeRecord`].
//!
//! Assembly is pure and synchronous: immutable table reads plus local
//! computation, nothing persisted and nothing shared. Only the three
//! identity fields can fail assembly; every other anomaly is absorbed via a
//! documented default.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::engine::pools::{
    certifications_for, company_points_pool_for, highlights_pool_for, skills_for, summary_for,
    EmploymentStatus,
};
use crate::engine::role::{classify_role, RoleKey};
use crate::engine::selector::{dedupe, merge_skills, select_top_n};
use crate::errors::AppError;
use crate::models::resume::{CompanyBlock, CompanyInput, ResumeInput, ResumeMeta, ResumeRecord};

/// Caps are product decisions, applied consistently across the service.
const SKILLS_CAP: usize = 12;
const CERTIFICATIONS_CAP: usize = 10;
const HIGHLIGHTS_COUNT: usize = 6;
const COMPANY_POINTS_COUNT: usize = 5;
const MAX_COMPANIES: usize = 6;

const DEFAULT_TITLE: &str = "Professional";
const DEFAULT_QUALIFICATION: &str = "10th";

/// Assembles the final resume record from raw form input.
///
/// Fails only when one of `fullName`/`email`/`mobile` is blank after
/// trimming; the error names every missing field. No partial record is ever
/// returned.
pub fn assemble(input: &ResumeInput) -> Result<ResumeRecord, AppError> {
    let full_name = input.full_name.trim();
    let email = input.email.trim();
    let mobile = input.mobile.trim();

    let missing: Vec<&str> = [
        ("fullName", full_name),
        ("email", email),
        ("mobile", mobile),
    ]
    .iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(name, _)| *name)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let title = match input.job_title.trim() {
        "" => DEFAULT_TITLE,
        t => t,
    };
    let role = classify_role(title);
    debug!("classified '{title}' as {role:?}");

    let education = build_education(&input.qualification, &input.passout_year);

    let skills = merge_skills(&input.skills_selected.0, skills_for(role), SKILLS_CAP, true);
    // Certifications are credentials, not role chips — user entries are kept
    // verbatim rather than role-safe filtered.
    let certifications = merge_skills(
        &input.certifications_selected.0,
        certifications_for(role),
        CERTIFICATIONS_CAP,
        false,
    );

    let status = employment_status(&input.exp_type, &input.exp_years);
    let summary = summary_for(role, title, status);

    // Per-request nonce keeps a fixed request reproducible while distinct
    // requests diverge. Never a clock read.
    let token = match input.request_token.trim() {
        "" => Uuid::new_v4().to_string(),
        t => t.to_string(),
    };
    let base_seed = format!("{full_name}|{email}|{mobile}|{title}|{token}");

    let mut experience_points =
        select_top_n(highlights_pool_for(role), &base_seed, HIGHLIGHTS_COUNT);
    experience_points.extend(note_lines(&input.experience_notes));
    let experience_points = dedupe(&experience_points);

    let company_responsibilities = match status {
        EmploymentStatus::Experienced => {
            build_company_blocks(role, &base_seed, &input.companies, &experience_points)
        }
        EmploymentStatus::Fresher => Vec::new(),
    };

    Ok(ResumeRecord {
        full_name: full_name.to_string(),
        email: email.to_string(),
        mobile: mobile.to_string(),
        title: title.to_string(),
        summary,
        education,
        skills,
        certifications,
        experience_points,
        meta: ResumeMeta {
            full_address: input.full_address.trim().to_string(),
            city: input.city.trim().to_string(),
            state: input.state.trim().to_string(),
            pincode: input.pincode.trim().to_string(),
            languages: input.languages.0.clone(),
            exp_type: status.label().to_string(),
            availability: input.availability.trim().to_string(),
            license_id: input.license_id.trim().to_string(),
        },
        company_responsibilities,
    })
}

/// "<qualification> | Passout: <year>", or just the qualification when no
/// year was supplied.
fn build_education(qualification: &str, passout_year: &str) -> String {
    let qualification = match qualification.trim() {
        "" => DEFAULT_QUALIFICATION,
        q => q,
    };
    match passout_year.trim() {
        "" => qualification.to_string(),
        year => format!("{qualification} | Passout: {year}"),
    }
}

/// Explicit `expType` wins; otherwise a positive integer `expYears` means
/// experienced. Unparseable years degrade to fresher.
fn employment_status(exp_type: &str, exp_years: &str) -> EmploymentStatus {
    match exp_type.trim() {
        "Experienced" => EmploymentStatus::Experienced,
        "Fresher" => EmploymentStatus::Fresher,
        _ => match exp_years.trim().parse::<i64>() {
            Ok(years) if years > 0 => EmploymentStatus::Experienced,
            _ => EmploymentStatus::Fresher,
        },
    }
}

/// Builds one block per company (first [`MAX_COMPANIES`] only), each with a
/// per-entity seed and a responsibility subset disjoint from the top-level
/// highlights and from every earlier company's points.
fn build_company_blocks(
    role: RoleKey,
    base_seed: &str,
    companies: &[CompanyInput],
    highlights: &[String],
) -> Vec<CompanyBlock> {
    let highlight_set: HashSet<&str> = highlights.iter().map(String::as_str).collect();
    let mut used: HashSet<String> = highlights.iter().cloned().collect();

    companies
        .iter()
        .take(MAX_COMPANIES)
        .enumerate()
        .map(|(idx, company)| {
            let company_name = company.company_name.trim();
            let start = company.start_date.trim();
            let end = company.end_date.trim();

            let seed = format!("{base_seed}|company{idx}|{company_name}|{start}|{end}");

            let pool = company_points_pool_for(role);
            let mut available: Vec<&str> = pool
                .iter()
                .copied()
                .filter(|p| !used.contains(*p))
                .collect();
            if available.is_empty() {
                // Pool exhausted by earlier companies; relax to the
                // highlights-only filter rather than emit an empty block.
                available = pool
                    .iter()
                    .copied()
                    .filter(|p| !highlight_set.contains(p))
                    .collect();
            }

            let points = select_top_n(available, &seed, COMPANY_POINTS_COUNT);
            used.extend(points.iter().cloned());

            CompanyBlock {
                company_name: company_name.to_string(),
                location: company.location.trim().to_string(),
                start_date: format_date(start),
                end_date: format_date(end),
                team_size: company.team_size.trim().to_string(),
                points,
            }
        })
        .collect()
}

/// DD-MM-YYYY for ISO dates, the raw value when unparseable, "-" when blank.
fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Splits free-text notes into cleaned bullet lines, stripping any bullet
/// marker the user already typed.
fn note_lines(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['•', '-', '*'])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
