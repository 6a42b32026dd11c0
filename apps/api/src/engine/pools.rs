//! Content Pool Registry — fixed per-role literal tables of candidate skills,
//! certifications, summary templates, and bullet-phrase pools.
//!
//! Every lookup is a pure read over `'static` data and is total: an
//! unrecognized role falls back to the `Generic` entry. Nothing here is ever
//! mutated after process start, so concurrent requests need no coordination.
//!
//! The highlights pool and the company-points pool for a role are distinct
//! phrase sets — the assembler draws top-level highlights from one and
//! per-company responsibilities from the other, filtering for overlap.

use crate::engine::role::RoleKey;

/// Employment status derived from the `expType` flag or the numeric
/// `expYears` field. Governs company-block generation and the extra
/// fresher sentence in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Fresher,
    Experienced,
}

impl EmploymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Fresher => "Fresher",
            EmploymentStatus::Experienced => "Experienced",
        }
    }
}

/// Suggested skill chips for a role. Strict per-role buckets — no mixing.
pub fn skills_for(role: RoleKey) -> &'static [&'static str] {
    match role {
        RoleKey::Sales => &[
            "Lead Generation",
            "Customer Handling",
            "Follow-ups",
            "Negotiation",
            "Target Achievement",
            "Relationship Building",
            "Pipeline Management",
            "Communication",
        ],
        RoleKey::Office => &[
            "MS Excel",
            "Data Accuracy",
            "Documentation",
            "Reporting",
            "Invoice/Billing",
            "Email & Coordination",
            "Record Management",
            "Communication",
        ],
        RoleKey::Security => &[
            "Access Control",
            "Patrolling",
            "Incident Reporting",
            "Visitor Management",
            "Emergency Handling",
            "Discipline",
            "Observation Skills",
            "Night Duty Readiness",
        ],
        RoleKey::Driver => &[
            "Safe Driving",
            "Route Planning",
            "Navigation (Maps)",
            "Vehicle Safety Checks",
            "Time Management",
            "Customer Coordination",
            "Trip Logs",
            "Punctuality",
        ],
        RoleKey::Delivery => &[
            "On-Time Delivery",
            "Route Planning",
            "Navigation (Maps)",
            "Order Verification",
            "Customer Communication",
            "COD Handling",
            "Area Knowledge",
            "Daily Targets",
        ],
        RoleKey::Mechanic => &[
            "Vehicle Diagnostics",
            "Servicing & Repair",
            "Tool Handling",
            "Safety Compliance",
            "Quality Checks",
            "Problem Solving",
            "Preventive Maintenance",
            "Workshop Discipline",
        ],
        RoleKey::Electrician => &[
            "Wiring",
            "Fault Finding",
            "Installation",
            "Maintenance",
            "Tools & Testing",
            "Safety Procedures",
            "Load Checking",
            "Earthing & Protection",
        ],
        RoleKey::Plumber => &[
            "Pipe Fitting",
            "Leak Fixing",
            "Installation",
            "Maintenance",
            "Tools Handling",
            "Safety",
            "Blockage Removal",
            "Testing & Finishing",
        ],
        RoleKey::Housekeeping => &[
            "Cleaning SOP",
            "Hygiene",
            "Material Handling",
            "Time Management",
            "Safety",
            "Attention to Detail",
            "Waste Handling",
            "Surface Sanitization",
        ],
        RoleKey::Tech => &[
            "HTML/CSS",
            "JavaScript",
            "React/Next.js",
            "API Integration",
            "Debugging",
            "Git",
            "Responsive UI",
            "Problem Solving",
        ],
        RoleKey::Marketing => &[
            "SEO Basics",
            "Social Media",
            "Content Writing",
            "Campaign Support",
            "Analytics Basics",
            "Lead Handling",
            "Communication",
            "Reporting",
        ],
        RoleKey::Generic => &[
            "Communication",
            "Teamwork",
            "Time Management",
            "Work Discipline",
            "Problem Solving",
            "Reliability",
        ],
    }
}

/// Suggested certifications/trainings for a role.
pub fn certifications_for(role: RoleKey) -> &'static [&'static str] {
    match role {
        RoleKey::Sales => &[
            "Certificate in Retail Sales",
            "Telecalling & Soft Skills Training",
            "MS Office Basics",
            "Customer Service Workshop",
        ],
        RoleKey::Office => &[
            "Tally / Accounting Basics",
            "Advanced MS Excel",
            "Typing Certificate (30+ WPM)",
            "Data Entry Operator Course",
        ],
        RoleKey::Security => &[
            "PSARA Security Guard Training",
            "Fire Safety Training",
            "First Aid Certificate",
            "Disaster Response Basics",
        ],
        RoleKey::Driver => &[
            "Valid Driving License (LMV)",
            "Defensive Driving Course",
            "First Aid Certificate",
            "Road Safety Awareness",
        ],
        RoleKey::Delivery => &[
            "Valid Driving License (Two-Wheeler)",
            "Road Safety Awareness",
            "Food Safety Basics",
            "Smartphone Navigation Training",
        ],
        RoleKey::Mechanic => &[
            "ITI - Motor Vehicle Mechanic",
            "Two/Four-Wheeler Service Training",
            "Workshop Safety Certificate",
            "Welding Basics",
        ],
        RoleKey::Electrician => &[
            "ITI - Electrician",
            "Wireman License",
            "Electrical Safety Training",
            "Solar Installation Basics",
        ],
        RoleKey::Plumber => &[
            "ITI - Plumber",
            "Pipe Fitting Certificate",
            "Worksite Safety Training",
            "Water System Maintenance Basics",
        ],
        RoleKey::Housekeeping => &[
            "Housekeeping SOP Training",
            "Hygiene & Sanitation Certificate",
            "Chemical Handling Safety",
            "First Aid Certificate",
        ],
        RoleKey::Tech => &[
            "Web Development Bootcamp",
            "JavaScript Certification",
            "Git & GitHub Basics",
            "Responsive Design Course",
        ],
        RoleKey::Marketing => &[
            "Digital Marketing Fundamentals",
            "Google Analytics Basics",
            "Social Media Marketing Course",
            "Content Writing Workshop",
        ],
        RoleKey::Generic => &[
            "Basic Computer Course",
            "Spoken English Certificate",
            "First Aid Certificate",
            "Workplace Safety Training",
        ],
    }
}

/// Candidate phrases for the top-level "Professional Highlights" section.
pub fn highlights_pool_for(role: RoleKey) -> &'static [&'static str] {
    match role {
        RoleKey::Sales => &[
            "Achieved daily and monthly targets through disciplined follow-ups and planning",
            "Improved conversions by handling objections confidently and clearly",
            "Maintained accurate pipeline updates for better forecast visibility",
            "Strengthened customer relationships to increase repeat business",
            "Generated quality leads using structured outreach and referral methods",
            "Ensured professional communication and product pitching consistency",
            "Coordinated with teams for smooth documentation and quick closures",
            "Focused on customer satisfaction and timely resolution of queries",
        ],
        RoleKey::Office => &[
            "Maintained accurate documentation and records with strong attention to detail",
            "Prepared reports and ensured timely updates to stakeholders",
            "Supported billing/back-office workflow with disciplined coordination",
            "Improved efficiency by organizing tasks and prioritizing deadlines",
            "Ensured data accuracy to minimize errors and rework",
            "Handled communication and follow-ups professionally",
            "Managed files and registers to keep operations smooth",
        ],
        RoleKey::Security => &[
            "Maintained access control and verified entries as per policy",
            "Performed patrolling rounds and reported incidents promptly",
            "Handled visitor management and maintained accurate registers",
            "Followed SOPs for emergencies and coordinated with staff",
            "Ensured discipline and compliance during duty hours",
            "Supported smooth shift handovers with clear reporting",
        ],
        RoleKey::Driver => &[
            "Ensured safe and timely transportation while following traffic rules",
            "Planned routes efficiently to reduce delays and optimize schedules",
            "Performed basic vehicle checks to avoid breakdowns",
            "Maintained punctuality and consistently met daily commitments",
            "Handled customer coordination politely and professionally",
            "Maintained trip records and provided timely status updates",
        ],
        RoleKey::Delivery => &[
            "Delivered orders on time by planning routes efficiently",
            "Verified items and ensured correct handover as per SOP",
            "Handled COD responsibly and maintained delivery discipline",
            "Communicated clearly with customers for smooth delivery",
            "Completed daily targets with consistent punctuality",
            "Used navigation tools effectively and maintained area knowledge",
        ],
        RoleKey::Mechanic => &[
            "Diagnosed issues using systematic troubleshooting approach",
            "Performed servicing and repairs with safety and quality focus",
            "Conducted final checks to ensure readiness before handover",
            "Maintained tool discipline and clean workshop practices",
            "Improved turnaround time by prioritizing urgent jobs",
            "Reduced repeat issues with careful inspection and testing",
        ],
        RoleKey::Electrician => &[
            "Installed and maintained fittings with safety-first approach",
            "Identified faults using testing tools and resolved efficiently",
            "Followed wiring standards to ensure proper insulation",
            "Performed quality checks to minimize rework",
            "Maintained disciplined tool and material handling",
            "Ensured safe worksite practices and proper finishing",
        ],
        RoleKey::Plumber => &[
            "Installed and repaired pipelines with leak-proof finishing",
            "Resolved leakage and blockage issues with proper testing",
            "Maintained clean worksite and safety compliance",
            "Ensured quality checks on water flow and pressure",
            "Delivered timely completion with clear communication",
            "Minimized wastage through disciplined material usage",
        ],
        RoleKey::Housekeeping => &[
            "Maintained cleanliness as per SOP with strong hygiene standards",
            "Completed tasks on time by planning daily cleaning routines",
            "Maintained attention to detail in high-touch areas",
            "Followed safety guidelines to ensure hazard-free environment",
            "Used materials safely and ensured proper storage after use",
            "Supported team coordination for deep cleaning tasks",
        ],
        RoleKey::Tech => &[
            "Built responsive UI with clean components and reusable patterns",
            "Integrated APIs and handled edge cases with stable error handling",
            "Improved performance through optimized rendering and code structure",
            "Collaborated using Git workflows and code review discipline",
            "Debugged issues and delivered reliable fixes on time",
            "Maintained clean structure and readable code conventions",
        ],
        RoleKey::Marketing => &[
            "Supported campaign execution with consistent daily follow-ups",
            "Improved reporting and tracking accuracy for better visibility",
            "Assisted in content and posting schedules with discipline",
            "Handled lead coordination and basic qualification steps",
            "Maintained communication and timely updates to stakeholders",
            "Focused on learning and improving performance continuously",
        ],
        RoleKey::Generic => &[
            "Delivered tasks with discipline, accuracy, and strong ownership mindset",
            "Maintained professional communication and timely updates",
            "Worked collaboratively to meet targets and deadlines",
            "Followed SOPs and ensured consistent quality output",
            "Improved efficiency by organizing priorities and workflow planning",
            "Demonstrated punctuality, reliability, and quick learning attitude",
        ],
    }
}

/// Candidate phrases for per-company responsibility bullets. Disjoint from
/// the highlights pool of the same role.
pub fn company_points_pool_for(role: RoleKey) -> &'static [&'static str] {
    match role {
        RoleKey::Sales => &[
            "Managed daily calls/meetings and maintained consistent follow-up discipline",
            "Generated and qualified leads to build a healthy sales pipeline",
            "Converted prospects by explaining product benefits clearly",
            "Maintained customer records and ensured timely documentation",
            "Handled objections professionally to improve close rates",
            "Supported relationship building to increase repeat/referral business",
            "Ensured target tracking and daily planning to maintain performance",
        ],
        RoleKey::Office => &[
            "Updated records and ensured accuracy in daily entries",
            "Prepared basic reports and shared updates with stakeholders",
            "Managed files and documentation for smooth operations",
            "Coordinated with teams for timely task completion",
            "Ensured billing/support tasks were completed without delays",
            "Maintained process discipline and reduced manual errors",
        ],
        RoleKey::Security => &[
            "Managed entry/exit checks and visitor verification as per policy",
            "Performed patrol rounds and reported suspicious activities",
            "Maintained registers and supported shift handover routines",
            "Ensured discipline and compliance at site during duty hours",
            "Supported emergency readiness and incident protocols",
            "Coordinated with staff for smooth site operations",
        ],
        RoleKey::Driver => &[
            "Maintained trip schedule with punctual start times and safe driving",
            "Performed pre-trip checks to ensure vehicle readiness",
            "Used navigation tools to avoid delays and optimize routes",
            "Maintained logs and provided status updates on time",
            "Handled customer coordination politely and professionally",
            "Kept vehicle clean and supported basic upkeep routines",
        ],
        RoleKey::Delivery => &[
            "Verified orders before dispatch to avoid wrong deliveries",
            "Delivered parcels within timeline and confirmed proof of delivery",
            "Handled COD responsibly and followed collection process",
            "Communicated with customers for address confirmation",
            "Maintained delivery logs and route discipline daily",
            "Followed safety and quality SOPs consistently",
        ],
        RoleKey::Mechanic => &[
            "Conducted diagnostics and identified root causes accurately",
            "Performed repairs/servicing with safety and quality standards",
            "Completed final checks to ensure readiness before handover",
            "Maintained tool discipline and clean finishing",
            "Coordinated with team to reduce downtime and improve turnaround",
            "Documented parts usage and job updates properly",
        ],
        RoleKey::Electrician => &[
            "Installed wiring/fittings ensuring insulation and safety",
            "Used testing tools to identify faults and fix efficiently",
            "Performed preventive checks to reduce breakdowns",
            "Maintained documentation and shared work updates",
            "Ensured standards compliance and minimized rework",
            "Maintained safe worksite practices consistently",
        ],
        RoleKey::Plumber => &[
            "Installed pipelines/fittings with clean finishing and leak prevention",
            "Resolved blockages/leaks with proper testing and checks",
            "Maintained safety practices and clean worksite after completion",
            "Ensured flow/pressure testing before handover",
            "Communicated timelines and progress clearly",
            "Used tools safely and minimized material wastage",
        ],
        RoleKey::Housekeeping => &[
            "Executed daily checklist as per SOP and hygiene standards",
            "Maintained high-touch areas carefully for sanitation",
            "Handled materials safely and ensured proper storage",
            "Supported deep cleaning and large-area tasks with team",
            "Reported issues and maintained hazard-free environment",
            "Completed tasks on time with consistent quality",
        ],
        RoleKey::Tech => &[
            "Implemented features with clean components and stable state management",
            "Handled API integration and error states gracefully",
            "Improved UI performance using optimized rendering patterns",
            "Fixed bugs with structured debugging and testing mindset",
            "Worked with Git workflow and maintained code discipline",
            "Ensured responsive design across devices",
        ],
        RoleKey::Marketing => &[
            "Managed daily coordination and follow-ups for campaign tasks",
            "Prepared updates and maintained tracking sheets accurately",
            "Assisted in content planning and posting schedule execution",
            "Supported lead handling and basic qualification steps",
            "Maintained communication and timely reporting",
            "Improved consistency with disciplined daily routines",
        ],
        RoleKey::Generic => &[
            "Completed assigned tasks accurately while maintaining discipline",
            "Coordinated with team and provided timely updates",
            "Followed SOPs and ensured consistent output standards",
            "Maintained punctuality and reliability in daily responsibilities",
            "Organized workflow to meet deadlines and reduce errors",
            "Demonstrated positive attitude and quick learning mindset",
        ],
    }
}

/// Builds the professional summary for a role by interpolating the job title
/// into that role's template. Freshers get one extra closing sentence.
pub fn summary_for(role: RoleKey, title: &str, status: EmploymentStatus) -> String {
    let mut summary = match role {
        RoleKey::Sales => format!(
            "Target-driven {title} with strong communication, follow-ups, and customer handling skills. \
             Experienced in lead generation, negotiation, and disciplined pipeline management. \
             Seeking an opportunity to grow revenue through consistent execution."
        ),
        RoleKey::Office => format!(
            "Organized {title} skilled in documentation, reporting, and accuracy-driven data handling. \
             Comfortable with MS Excel and coordination tasks with strong attention to detail. \
             Looking to contribute with reliability and timely delivery."
        ),
        RoleKey::Security => format!(
            "Disciplined {title} with strong focus on safety, access control, and incident reporting. \
             Experienced in SOP compliance, patrolling routines, and maintaining registers. \
             Seeking a stable role to deliver reliable security support."
        ),
        RoleKey::Driver => format!(
            "Responsible {title} focused on safe driving, punctuality, and route planning. \
             Skilled in navigation and vehicle safety checks to ensure smooth trips. \
             Seeking an opportunity to deliver consistent on-time service."
        ),
        RoleKey::Delivery => format!(
            "Reliable {title} focused on on-time deliveries, order verification, and customer satisfaction. \
             Comfortable with navigation tools and delivery discipline to meet daily targets. \
             Looking to contribute with consistent performance."
        ),
        RoleKey::Mechanic => format!(
            "Hands-on {title} with strong troubleshooting and preventive maintenance approach. \
             Experienced in safe repair practices and quality checks to reduce rework. \
             Seeking an opportunity to improve service turnaround."
        ),
        RoleKey::Electrician => format!(
            "Safety-focused {title} skilled in wiring, fault finding, installation, and maintenance. \
             Experienced with tools/testing and careful inspection to minimize breakdowns. \
             Looking to support reliable electrical operations."
        ),
        RoleKey::Plumber => format!(
            "Detail-oriented {title} skilled in pipe fitting, leakage resolution, and installation work. \
             Strong focus on clean finishing, safety, and timely completion. \
             Seeking a role to deliver quality plumbing support."
        ),
        RoleKey::Housekeeping => format!(
            "Hardworking {title} with strong hygiene standards and SOP-based cleaning practices. \
             Focused on safety, time management, and attention to detail in critical areas. \
             Looking to maintain a clean, organized environment."
        ),
        RoleKey::Tech => format!(
            "Results-driven {title} with strong problem-solving and clean code practices. \
             Comfortable with modern web development workflows and collaboration. \
             Seeking an opportunity to build reliable products with quality."
        ),
        RoleKey::Marketing => format!(
            "Detail-oriented {title} with interest in performance-driven marketing and content execution. \
             Comfortable with reporting, coordination, and campaign support tasks. \
             Seeking to contribute with consistency and learning mindset."
        ),
        RoleKey::Generic => format!(
            "Results-focused {title} with disciplined work ethic and strong learning mindset. \
             Known for reliability, teamwork, and consistent task completion. \
             Seeking an opportunity to contribute to growth with professional execution."
        ),
    };

    if status == EmploymentStatus::Fresher {
        summary.push_str(
            " Fresher-friendly profile with strong willingness to learn and deliver quality output from day one.",
        );
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::selector::dedupe;

    const ALL_ROLES: &[RoleKey] = &[
        RoleKey::Sales,
        RoleKey::Office,
        RoleKey::Security,
        RoleKey::Driver,
        RoleKey::Delivery,
        RoleKey::Mechanic,
        RoleKey::Electrician,
        RoleKey::Plumber,
        RoleKey::Housekeeping,
        RoleKey::Tech,
        RoleKey::Marketing,
        RoleKey::Generic,
    ];

    #[test]
    fn test_every_pool_is_nonempty_for_every_role() {
        for &role in ALL_ROLES {
            assert!(!skills_for(role).is_empty(), "skills: {role:?}");
            assert!(!certifications_for(role).is_empty(), "certs: {role:?}");
            assert!(!highlights_pool_for(role).is_empty(), "highlights: {role:?}");
            assert!(
                !company_points_pool_for(role).is_empty(),
                "company points: {role:?}"
            );
        }
    }

    #[test]
    fn test_pools_are_unique_by_construction() {
        for &role in ALL_ROLES {
            for pool in [
                skills_for(role),
                certifications_for(role),
                highlights_pool_for(role),
                company_points_pool_for(role),
            ] {
                assert_eq!(
                    dedupe(pool).len(),
                    pool.len(),
                    "duplicate entry in a {role:?} pool"
                );
            }
        }
    }

    #[test]
    fn test_highlights_and_company_pools_are_disjoint() {
        for &role in ALL_ROLES {
            let highlights = highlights_pool_for(role);
            for point in company_points_pool_for(role) {
                assert!(
                    !highlights.contains(point),
                    "{role:?}: phrase appears in both pools: {point}"
                );
            }
        }
    }

    #[test]
    fn test_summary_interpolates_title() {
        for &role in ALL_ROLES {
            let s = summary_for(role, "Shift Supervisor", EmploymentStatus::Experienced);
            assert!(s.contains("Shift Supervisor"), "{role:?}: {s}");
        }
    }

    #[test]
    fn test_fresher_summary_appends_extra_sentence() {
        let fresher = summary_for(RoleKey::Security, "Security Guard", EmploymentStatus::Fresher);
        let experienced = summary_for(
            RoleKey::Security,
            "Security Guard",
            EmploymentStatus::Experienced,
        );
        assert!(fresher.starts_with(&experienced));
        assert!(fresher.contains("willingness to learn"));
        assert!(!experienced.contains("willingness to learn"));
    }

    #[test]
    fn test_summaries_are_role_distinct() {
        let sales = summary_for(RoleKey::Sales, "X", EmploymentStatus::Experienced);
        let tech = summary_for(RoleKey::Tech, "X", EmploymentStatus::Experienced);
        assert_ne!(sales, tech);
    }
}
